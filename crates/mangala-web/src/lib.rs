//! Browser bindings for the Mangala wedding invitation
//!
//! This crate runs on the page's main thread and binds the page-effect core
//! in `mangala-core` to the DOM, the 2D canvas, timers and platform share.
//!
//! ## Module Structure
//!
//! - `page` - Startup signals, capabilities and shared page context
//! - `dom` - Element queries, listeners, timers and transient nodes
//! - `canvas` - `Surface` implementation over `CanvasRenderingContext2d`
//! - `animator` - Visibility-aware redraw loops for sparkles and petals
//! - `reveal` - Scroll reveals via `IntersectionObserver`
//! - `effects` - Toasts, ripples, blessing glyphs and firework bursts
//! - `interactions` - Curtains, blessing symbol, couple names and diyas
//! - `actions` - Maps, calendar and share buttons
//! - `metrics` - Idle-time page load logging
//!
//! ## Startup
//!
//! The `start` entry point captures the device profile once, then waits for
//! `DOMContentLoaded` (or runs at once if the document is already parsed)
//! and initializes every subsystem in turn. A subsystem that fails is logged
//! and skipped; the others still start.

mod actions;
mod animator;
mod canvas;
mod dom;
mod effects;
mod error;
mod interactions;
mod metrics;
mod page;
mod reveal;

use std::rc::Rc;

use wasm_bindgen::prelude::*;

pub use animator::{Animation, CanvasAnimator};
pub use canvas::CanvasSurface;
pub use error::WebError;
pub use page::Page;

#[cfg(all(test, target_arch = "wasm32"))]
wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);


#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Wasm entry point
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let page = Page::detect()?;
    log(&format!(
        "[mangala] profile: reduced_motion={} width={} touch={} share={:?}",
        page.profile.reduced_motion, page.profile.viewport_width, page.profile.touch, page.share
    ));

    if page.document.ready_state() == "loading" {
        let ready = page.clone();
        dom::listen_once(&page.document, "DOMContentLoaded", move || init(&ready))?;
    } else {
        init(&page);
    }
    Ok(())
}

fn init(page: &Rc<Page>) {
    run("curtains", interactions::init_curtains(page));
    run("sparkles", animator::init_sparkles(page));
    run("petals", animator::init_petals(page));
    run("reveal", reveal::init_reveals(page));
    run("diyas", interactions::init_diyas(page));
    run("interactions", interactions::init_interactions(page));
    run("actions", actions::init_actions(page));
    run("fireworks", effects::inject_keyframes(page));
    run("touch", interactions::init_touch_effects(page));
    run("metrics", metrics::init_load_metrics(page));
}

fn run(subsystem: &str, result: Result<(), WebError>) {
    if let Err(e) = result {
        log(&format!("[{}] init failed: {}", subsystem, e));
    }
}
