//! DOM helpers: queries, listeners, timers and transient nodes

use std::cell::RefCell;
use std::rc::Rc;

use mangala_core::{Detach, Transient};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement};

use crate::error::WebError;

/// All elements matching `selector`, in document order
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<Element>, WebError> {
    let list = root.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// First element matching `selector` that is an `HtmlElement`
pub fn query_html(root: &Document, selector: &str) -> Result<Option<HtmlElement>, WebError> {
    Ok(root
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

/// Set one inline style property
pub fn set_style(element: &Element, property: &str, value: &str) -> Result<(), WebError> {
    let html = element
        .dyn_ref::<HtmlElement>()
        .ok_or(WebError::Unsupported("inline style on non-HTML element"))?;
    html.style().set_property(property, value)?;
    Ok(())
}

/// Create a detached `<div>` with the given inline style
pub fn create_div(document: &Document, css: &str) -> Result<HtmlElement, WebError> {
    let div = document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WebError::Unsupported("div is not an HtmlElement"))?;
    div.style().set_css_text(css);
    Ok(div)
}

/// Attach a listener for the page lifetime
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), WebError>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach a passive listener for the page lifetime
pub fn listen_passive<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), WebError>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let mut handler = handler;
    let closure = Closure::wrap(Box::new(move |event: Event| {
        if let Ok(event) = event.dyn_into::<E>() {
            handler(event);
        }
    }) as Box<dyn FnMut(Event)>);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    )?;
    closure.forget();
    Ok(())
}

/// Attach a listener that runs at most once
pub fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), WebError>
where
    F: FnOnce() + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(handler);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

/// Run `f` once after `delay_ms`
pub fn after<F>(delay_ms: u32, f: F) -> Result<(), WebError>
where
    F: FnOnce() + 'static,
{
    let window = web_sys::window().ok_or(WebError::NoWindow)?;
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms as i32,
    )?;
    Ok(())
}

/// An element attached to the page by an effect
#[derive(Debug)]
pub struct DomNode(pub Element);

impl Detach for DomNode {
    fn detach(&mut self) {
        self.0.remove();
    }
}

/// Shared handle to an attached effect node
pub type NodeHandle = Rc<RefCell<Transient<DomNode>>>;

/// Take ownership of an attached node and remove it after `delay_ms`
///
/// If the timer cannot be armed the node is removed at once.
pub fn remove_after(element: Element, delay_ms: u32) -> Result<NodeHandle, WebError> {
    let handle: NodeHandle = Rc::new(RefCell::new(Transient::new(DomNode(element))));
    let timed = handle.clone();
    if let Err(e) = after(delay_ms, move || timed.borrow_mut().dispose()) {
        handle.borrow_mut().dispose();
        return Err(e);
    }
    Ok(handle)
}
