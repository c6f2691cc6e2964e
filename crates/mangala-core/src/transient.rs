//! Exactly-once lifetimes for short-lived page effects
//!
//! Toasts, ripples, blessing glyphs and firework bursts are attached to the
//! page and removed after a fixed delay. A [`Transient`] owns the attached
//! node; whichever comes first of an explicit [`Transient::dispose`], a timer
//! calling it, or the handle being dropped performs the removal, and the
//! removal never runs twice.

/// Something that can be taken out of the page
pub trait Detach {
    /// Remove the node from wherever it is attached
    fn detach(&mut self);
}

/// Owning handle for an attached effect node
#[derive(Debug)]
pub struct Transient<T: Detach> {
    node: Option<T>,
}

impl<T: Detach> Transient<T> {
    /// Wrap a node that is already attached
    pub fn new(node: T) -> Self {
        Self { node: Some(node) }
    }

    pub fn is_attached(&self) -> bool {
        self.node.is_some()
    }

    /// Detach the node; later calls do nothing
    pub fn dispose(&mut self) {
        if let Some(mut node) = self.node.take() {
            node.detach();
        }
    }
}

impl<T: Detach> Drop for Transient<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Node(Rc<Cell<u32>>);

    impl Detach for Node {
        fn detach(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_dispose_once() {
        let removed = Rc::new(Cell::new(0));
        let mut t = Transient::new(Node(removed.clone()));
        t.dispose();
        t.dispose();
        assert_eq!(removed.get(), 1);
        assert!(!t.is_attached());
        drop(t);
        assert_eq!(removed.get(), 1);
    }

    #[test]
    fn test_drop_detaches() {
        let removed = Rc::new(Cell::new(0));
        {
            let t = Transient::new(Node(removed.clone()));
            assert!(t.is_attached());
        }
        assert_eq!(removed.get(), 1);
    }

    #[test]
    fn test_independent_handles() {
        let removed = Rc::new(Cell::new(0));
        let mut a = Transient::new(Node(removed.clone()));
        let mut b = Transient::new(Node(removed.clone()));
        a.dispose();
        b.dispose();
        a.dispose();
        assert_eq!(removed.get(), 2);
    }
}
