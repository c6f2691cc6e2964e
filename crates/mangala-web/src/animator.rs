//! Visibility-aware canvas animators
//!
//! A [`CanvasAnimator`] owns one particle system, its canvas and its redraw
//! loop. Frames are chained through `requestAnimationFrame`; the
//! [`FrameLoop`] controller decides when the next frame is requested and
//! when a pending one is cancelled because the page was hidden.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use mangala_core::{FrameLoop, LoopCommand, PetalShower, Size, SparkleField};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement};

use crate::canvas::CanvasSurface;
use crate::dom;
use crate::error::WebError;
use crate::log;
use crate::page::Page;

const SPARKLES_CANVAS_ID: &str = "sparkles";
const PETALS_CANVAS_ID: &str = "petals";

/// A particle system that can be driven by a [`CanvasAnimator`]
pub trait Animation {
    /// The surface changed size
    fn resize(&mut self, size: Size, rng: &mut SmallRng);
    /// Advance one frame
    fn tick(&mut self, rng: &mut SmallRng);
    /// Draw the current frame
    fn render(&self, surface: &mut CanvasSurface);
}

impl Animation for SparkleField {
    fn resize(&mut self, size: Size, rng: &mut SmallRng) {
        SparkleField::resize(self, size, rng);
    }

    fn tick(&mut self, _rng: &mut SmallRng) {
        self.step();
    }

    fn render(&self, surface: &mut CanvasSurface) {
        SparkleField::render(self, surface);
    }
}

impl Animation for PetalShower {
    fn resize(&mut self, size: Size, _rng: &mut SmallRng) {
        PetalShower::resize(self, size);
    }

    fn tick(&mut self, rng: &mut SmallRng) {
        self.step(rng);
    }

    fn render(&self, surface: &mut CanvasSurface) {
        PetalShower::render(self, surface);
    }
}

struct AnimatorState<A> {
    animation: A,
    surface: CanvasSurface,
    rng: SmallRng,
    frame_loop: FrameLoop,
    /// Id of the requested, not yet delivered frame
    pending: Option<i32>,
}

struct Inner<A> {
    name: &'static str,
    state: RefCell<AnimatorState<A>>,
    frame: RefCell<Option<Closure<dyn FnMut()>>>,
}

/// Owned redraw loop for one canvas
pub struct CanvasAnimator<A: Animation + 'static> {
    inner: Rc<Inner<A>>,
}

impl<A: Animation + 'static> Clone for CanvasAnimator<A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<A: Animation + 'static> CanvasAnimator<A> {
    /// Bind `animation` to `canvas`; nothing is drawn until [`start`](Self::start)
    pub fn new(name: &'static str, canvas: HtmlCanvasElement, animation: A) -> Result<Self, WebError> {
        let surface = CanvasSurface::from_canvas(canvas)?;
        let inner = Rc::new(Inner {
            name,
            state: RefCell::new(AnimatorState {
                animation,
                surface,
                rng: SmallRng::from_entropy(),
                frame_loop: FrameLoop::new(),
                pending: None,
            }),
            frame: RefCell::new(None),
        });

        let weak: Weak<Inner<A>> = Rc::downgrade(&inner);
        let frame = Closure::wrap(Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.on_frame();
            }
        }) as Box<dyn FnMut()>);
        *inner.frame.borrow_mut() = Some(frame);

        Ok(Self { inner })
    }

    /// Size the canvas to `size` and let the animation respawn
    pub fn resize(&self, size: Size) {
        let mut state = self.inner.state.borrow_mut();
        let AnimatorState {
            animation,
            surface,
            rng,
            ..
        } = &mut *state;
        surface.resize(size);
        animation.resize(size, rng);
    }

    /// Start producing frames
    pub fn start(&self) {
        let cmd = self.inner.state.borrow_mut().frame_loop.start();
        self.inner.apply(cmd);
    }

    /// Stop producing frames
    pub fn stop(&self) {
        let cmd = self.inner.state.borrow_mut().frame_loop.pause();
        self.inner.apply(cmd);
    }

    /// Pause while the page is hidden, resume when it is shown again
    pub fn on_visibility(&self, visible: bool) {
        let cmd = self.inner.state.borrow_mut().frame_loop.on_visibility(visible);
        self.inner.apply(cmd);
    }

    pub fn is_running(&self) -> bool {
        self.inner.state.borrow().frame_loop.is_running()
    }

    /// Follow window resizes and page visibility for the page lifetime
    pub fn attach(&self, page: &Rc<Page>) -> Result<(), WebError> {
        let animator = self.clone();
        let resize_page = page.clone();
        dom::listen_passive(&page.window, "resize", move |_: Event| {
            animator.resize(resize_page.viewport());
        })?;

        let animator = self.clone();
        let document = page.document.clone();
        dom::listen(&page.document, "visibilitychange", move |_: Event| {
            animator.on_visibility(!document.hidden());
        })
    }
}

impl<A: Animation> Inner<A> {
    fn on_frame(&self) {
        let cmd = {
            let mut state = self.state.borrow_mut();
            state.pending = None;
            let AnimatorState {
                animation,
                surface,
                rng,
                frame_loop,
                ..
            } = &mut *state;
            animation.tick(rng);
            animation.render(surface);
            frame_loop.frame_done()
        };
        self.apply(cmd);
    }

    fn apply(&self, cmd: LoopCommand) {
        match cmd {
            LoopCommand::Schedule => self.request_frame(),
            LoopCommand::Cancel => self.cancel_frame(),
            LoopCommand::None => {}
        }
    }

    fn request_frame(&self) {
        let frame = self.frame.borrow();
        let Some(callback) = frame.as_ref() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.state.borrow_mut().pending = Some(id),
            Err(e) => log(&format!("[{}] requestAnimationFrame failed: {:?}", self.name, e)),
        }
    }

    fn cancel_frame(&self) {
        let pending = self.state.borrow_mut().pending.take();
        if let (Some(id), Some(window)) = (pending, web_sys::window()) {
            if let Err(e) = window.cancel_animation_frame(id) {
                log(&format!("[{}] cancelAnimationFrame failed: {:?}", self.name, e));
            }
        }
    }
}

/// Find a canvas by id; `None` when the page has no such canvas
fn find_canvas(page: &Page, id: &str) -> Option<HtmlCanvasElement> {
    page.document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
}

/// Hide a canvas so it stays blank under reduced motion
fn blank(canvas: &HtmlCanvasElement) -> Result<(), WebError> {
    canvas.style().set_property("display", "none")?;
    Ok(())
}

/// Start an animator on the canvas with `canvas_id`
///
/// Returns `None` when the page has no such canvas or motion is reduced; in
/// the latter case the canvas is hidden.
fn launch<A: Animation + 'static>(
    page: &Rc<Page>,
    name: &'static str,
    canvas_id: &str,
    animation: A,
) -> Result<Option<CanvasAnimator<A>>, WebError> {
    let Some(canvas) = find_canvas(page, canvas_id) else {
        return Ok(None);
    };
    if !page.profile.motion_allowed() {
        blank(&canvas)?;
        return Ok(None);
    }

    let animator = CanvasAnimator::new(name, canvas, animation)?;
    animator.resize(page.viewport());
    animator.attach(page)?;
    if !page.document.hidden() {
        animator.start();
    }
    log(&format!("[{}] started", name));
    Ok(Some(animator))
}

/// Pulsing sparkles over the whole viewport
pub fn init_sparkles(page: &Rc<Page>) -> Result<(), WebError> {
    let field = SparkleField::new(page.profile.sparkle_count());
    launch(page, "sparkles", SPARKLES_CANVAS_ID, field).map(|_| ())
}

/// Falling marigold petals
pub fn init_petals(page: &Rc<Page>) -> Result<(), WebError> {
    let shower = PetalShower::new(page.profile.petal_cap());
    launch(page, "petals", PETALS_CANVAS_ID, shower).map(|_| ())
}
