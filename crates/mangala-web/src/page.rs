//! Shared page context
//!
//! Everything the subsystems read from the platform is captured here once
//! at startup: the device profile, which share strategy to use, whether
//! idle callbacks exist, and the invitation config.

use std::cell::RefCell;
use std::rc::Rc;

use mangala_core::{DeviceProfile, InviteConfig, ShareStrategy, Size};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use web_sys::{Document, HtmlElement, HtmlHeadElement, Window};

use crate::error::WebError;
use crate::log;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
const CONFIG_ELEMENT_ID: &str = "invite-config";

/// Page context shared by every handler
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub profile: DeviceProfile,
    pub config: InviteConfig,
    /// Share strategy, fixed at startup
    pub share: ShareStrategy,
    /// `requestIdleCallback` is available
    pub idle_callback: bool,
    rng: RefCell<SmallRng>,
}

impl Page {
    /// Capture platform signals and build the page context
    pub fn detect() -> Result<Rc<Self>, WebError> {
        let window = web_sys::window().ok_or(WebError::NoWindow)?;
        let document = window.document().ok_or(WebError::NoDocument)?;

        let reduced_motion = window
            .match_media(REDUCED_MOTION_QUERY)?
            .map(|query| query.matches())
            .unwrap_or(false);
        let viewport_width = window.inner_width()?.as_f64().unwrap_or_default();
        let has_touch_points = window.navigator().max_touch_points() > 0;
        let profile = DeviceProfile::new(reduced_motion, viewport_width, has_touch_points);

        Ok(Self::with_profile(window, document, profile))
    }

    /// Build the page context around an already captured device profile
    pub fn with_profile(window: Window, document: Document, profile: DeviceProfile) -> Rc<Self> {
        let share_available = has_function(&window.navigator(), "share");
        let idle_callback = has_function(&window, "requestIdleCallback");
        let config = load_config(&document);

        Rc::new(Self {
            share: ShareStrategy::detect(share_available, &profile),
            window,
            document,
            profile,
            config,
            idle_callback,
            rng: RefCell::new(SmallRng::from_entropy()),
        })
    }

    /// Current viewport size in CSS pixels
    pub fn viewport(&self) -> Size {
        let width = self.window.inner_width().ok().and_then(|v| v.as_f64());
        let height = self.window.inner_height().ok().and_then(|v| v.as_f64());
        Size::new(width.unwrap_or_default(), height.unwrap_or_default())
    }

    /// Run `f` with the page's random source
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut SmallRng) -> T) -> T {
        f(&mut self.rng.borrow_mut())
    }

    pub fn body(&self) -> Result<HtmlElement, WebError> {
        self.document
            .body()
            .ok_or_else(|| WebError::MissingElement("body".to_string()))
    }

    pub fn head(&self) -> Result<HtmlHeadElement, WebError> {
        self.document
            .head()
            .ok_or_else(|| WebError::MissingElement("head".to_string()))
    }
}

fn has_function(target: &wasm_bindgen::JsValue, name: &str) -> bool {
    js_sys::Reflect::get(target, &name.into())
        .map(|value| value.is_function())
        .unwrap_or(false)
}

/// Read the optional JSON config embedded in the page; defaults on any error
fn load_config(document: &Document) -> InviteConfig {
    let Some(json) = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|element| element.text_content())
    else {
        return InviteConfig::default();
    };

    InviteConfig::from_json(&json).unwrap_or_else(|e| {
        log(&format!("[config] {}; using defaults", e));
        InviteConfig::default()
    })
}
