//! Scroll reveals via `IntersectionObserver`

use std::cell::RefCell;
use std::rc::Rc;

use mangala_core::reveal::{REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use mangala_core::{RevealAction, RevealTracker};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom;
use crate::error::WebError;
use crate::log;
use crate::page::Page;

const HIDDEN_CLASS: &str = "reveal";
const REVEALED_CLASS: &str = "revealed";
const INDEX_ATTR: &str = "data-reveal-index";

/// Hide the marked sections and reveal each one the first time it scrolls
/// into view
pub fn init_reveals(page: &Rc<Page>) -> Result<(), WebError> {
    if !page.profile.motion_allowed() {
        return Ok(());
    }

    let elements = dom::query_all(&page.document, REVEAL_SELECTOR)?;
    if elements.is_empty() {
        return Ok(());
    }
    for (index, element) in elements.iter().enumerate() {
        element.class_list().add_1(HIDDEN_CLASS)?;
        element.set_attribute(INDEX_ATTR, &index.to_string())?;
    }

    let tracker = Rc::new(RefCell::new(RevealTracker::new(elements.len())));
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let target = entry.target();
                let Some(index) = target
                    .get_attribute(INDEX_ATTR)
                    .and_then(|v| v.parse::<usize>().ok())
                else {
                    continue;
                };

                let action = tracker.borrow_mut().observe(index, entry.is_intersecting());
                if action == RevealAction::Reveal {
                    let _ = target.class_list().add_1(REVEALED_CLASS);
                    observer.unobserve(&target);
                    log(&format!(
                        "[reveal] section {} at ratio {:.3}",
                        index,
                        entry.intersection_ratio()
                    ));
                }
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for element in &elements {
        observer.observe(element);
    }
    callback.forget();
    Ok(())
}
