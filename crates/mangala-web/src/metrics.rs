//! Idle-time page load logging

use std::rc::Rc;

use js_sys::Reflect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::WebError;
use crate::log;
use crate::page::Page;

/// Log the navigation load time once the page is idle
///
/// Skipped on platforms without `requestIdleCallback`.
pub fn init_load_metrics(page: &Rc<Page>) -> Result<(), WebError> {
    if !page.idle_callback {
        return Ok(());
    }

    let idle_page = page.clone();
    let callback = Closure::once_into_js(move || {
        if let Some(ms) = load_time_ms(&idle_page) {
            log(&format!("[metrics] Page Load Time: {} ms", ms));
        }
    });
    page.window.request_idle_callback(callback.unchecked_ref())?;
    Ok(())
}

/// `loadEventEnd - fetchStart` of the first navigation entry
fn load_time_ms(page: &Page) -> Option<f64> {
    let performance = page.window.performance()?;
    let entry = performance.get_entries_by_type("navigation").get(0);
    if entry.is_undefined() {
        return None;
    }
    let field = |name: &str| Reflect::get(&entry, &name.into()).ok()?.as_f64();
    Some(field("loadEventEnd")? - field("fetchStart")?)
}
