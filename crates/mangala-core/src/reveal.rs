//! Scroll-reveal bookkeeping
//!
//! Each tracked element starts hidden and is revealed the first time the
//! observer reports it intersecting. The observer itself only fires at
//! [`REVEAL_THRESHOLD`], so the reported ratio is not checked again here: a
//! crossing can be reported slightly under the threshold, and a section much
//! taller than the viewport never reaches it. Reveals are permanent.

/// Fraction of an element that must be visible before the observer reports it
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Observer root margin; shrinks the viewport bottom by 50px
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Selector for elements that take part in scroll reveals
pub const REVEAL_SELECTOR: &str =
    ".header > *, .event-details, .actions, .family-section, .blessing-text, .footer";

/// What the host should do with an element after an intersection report
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealAction {
    /// Mark the element revealed and stop observing it
    Reveal,
    /// Leave the element as it is
    Ignore,
}

/// One-way reveal flags for a set of elements, by index
#[derive(Clone, Debug, Default)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    /// Track `count` elements, all hidden
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Handle an intersection report for element `index`
    ///
    /// Returns [`RevealAction::Reveal`] exactly once per element, on its first
    /// intersecting report. Unknown indices are ignored.
    pub fn observe(&mut self, index: usize, is_intersecting: bool) -> RevealAction {
        let Some(flag) = self.revealed.get_mut(index) else {
            return RevealAction::Ignore;
        };
        if *flag || !is_intersecting {
            return RevealAction::Ignore;
        }
        *flag = true;
        RevealAction::Reveal
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_once() {
        let mut tracker = RevealTracker::new(2);
        assert_eq!(tracker.observe(0, true), RevealAction::Reveal);
        assert_eq!(tracker.observe(0, true), RevealAction::Ignore);
        assert!(tracker.is_revealed(0));
        assert!(!tracker.is_revealed(1));
    }

    #[test]
    fn test_scroll_away_keeps_revealed() {
        let mut tracker = RevealTracker::new(1);
        tracker.observe(0, true);
        assert_eq!(tracker.observe(0, false), RevealAction::Ignore);
        assert!(tracker.is_revealed(0));
    }

    #[test]
    fn test_not_intersecting_stays_hidden() {
        let mut tracker = RevealTracker::new(1);
        assert_eq!(tracker.observe(0, false), RevealAction::Ignore);
        assert!(!tracker.is_revealed(0));
        assert_eq!(tracker.revealed_count(), 0);
    }

    #[test]
    fn test_unknown_index() {
        let mut tracker = RevealTracker::new(1);
        assert_eq!(tracker.observe(7, true), RevealAction::Ignore);
        assert!(!tracker.is_revealed(7));
    }

    #[test]
    fn test_revealed_count() {
        let mut tracker = RevealTracker::new(2);
        tracker.observe(1, true);
        assert_eq!(tracker.revealed_count(), 1);
        tracker.observe(0, true);
        assert_eq!(tracker.revealed_count(), 2);
        assert_eq!(tracker.len(), 2);
    }
}
