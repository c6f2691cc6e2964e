//! Maps, calendar and share buttons

use std::rc::Rc;

use js_sys::{Function, Promise, Reflect};
use mangala_core::links::{calendar_url, maps_url};
use mangala_core::share::{COPIED_MESSAGE, MANUAL_COPY_MESSAGE};
use mangala_core::timing::BUTTON_PULSE_MS;
use mangala_core::{SharePayload, ShareStrategy};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Event, HtmlElement};

use crate::dom;
use crate::effects;
use crate::error::WebError;
use crate::log;
use crate::page::Page;

/// Press feedback: shrink, then spring back
fn pulse(button: &HtmlElement) {
    let _ = button.style().set_property("transform", "scale(0.95)");
    let released = button.clone();
    let _ = dom::after(BUTTON_PULSE_MS, move || {
        let _ = released.style().set_property("transform", "scale(1)");
    });
}

fn button(page: &Page, id: &str) -> Option<HtmlElement> {
    page.document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

fn open_in_new_tab(page: &Page, url: &str) {
    if let Err(e) = page
        .window
        .open_with_url_and_target_and_features(url, "_blank", "noopener")
    {
        log(&format!("[actions] open failed: {:?}", e));
    }
}

/// Wire up the three action buttons; missing buttons are skipped
pub fn init_actions(page: &Rc<Page>) -> Result<(), WebError> {
    if let Some(maps) = button(page, "mapsBtn") {
        let url = maps_url(&page.config.venue);
        let click_page = page.clone();
        let target = maps.clone();
        dom::listen(&maps, "click", move |_: Event| {
            pulse(&target);
            open_in_new_tab(&click_page, &url);
        })?;
    }

    if let Some(calendar) = button(page, "calendarBtn") {
        let url = calendar_url(&page.config);
        let click_page = page.clone();
        let target = calendar.clone();
        dom::listen(&calendar, "click", move |_: Event| {
            pulse(&target);
            open_in_new_tab(&click_page, &url);
        })?;
    }

    if let Some(share) = button(page, "shareBtn") {
        let click_page = page.clone();
        let target = share.clone();
        dom::listen(&share, "click", move |_: Event| {
            pulse(&target);
            let page = click_page.clone();
            wasm_bindgen_futures::spawn_local(async move {
                share_invitation(&page).await;
            });
        })?;
    }
    Ok(())
}

/// Share using the startup strategy; failures end in a manual-copy toast
async fn share_invitation(page: &Page) {
    let url = page.window.location().href().unwrap_or_default();
    let payload = SharePayload::new(&page.config, url);

    let outcome = match page.share {
        ShareStrategy::Native => native_share(page, &payload).await.map(|_| None),
        ShareStrategy::Clipboard => copy_to_clipboard(page, &payload.clipboard_text())
            .await
            .map(|_| Some(COPIED_MESSAGE)),
    };

    let message = match outcome {
        Ok(message) => message,
        Err(e) => {
            log(&format!("[share] Share failed: {}", e));
            Some(MANUAL_COPY_MESSAGE)
        }
    };
    if let Some(message) = message {
        if let Err(e) = effects::show_toast(page, message) {
            log(&format!("[share] toast failed: {}", e));
        }
    }
}

/// Call `target[method](arg)` and await the returned promise
async fn call_async(target: &JsValue, method: &'static str, arg: &JsValue) -> Result<(), WebError> {
    let function: Function = Reflect::get(target, &method.into())?
        .dyn_into()
        .map_err(|_| WebError::Unsupported(method))?;
    let promise: Promise = function
        .call1(target, arg)?
        .dyn_into()
        .map_err(|_| WebError::Unsupported(method))?;
    JsFuture::from(promise).await?;
    Ok(())
}

async fn native_share(page: &Page, payload: &SharePayload) -> Result<(), WebError> {
    let data = js_sys::Object::new();
    Reflect::set(&data, &"title".into(), &payload.title.as_str().into())?;
    Reflect::set(&data, &"text".into(), &payload.text.as_str().into())?;
    Reflect::set(&data, &"url".into(), &payload.url.as_str().into())?;
    call_async(&page.window.navigator(), "share", &data).await
}

async fn copy_to_clipboard(page: &Page, text: &str) -> Result<(), WebError> {
    let clipboard = Reflect::get(&page.window.navigator(), &"clipboard".into())?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(WebError::Unsupported("clipboard"));
    }
    call_async(&clipboard, "writeText", &text.into()).await
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    async fn call_async_rejects_missing_method() {
        let target = js_sys::Object::new();
        let err = call_async(&target, "share", &JsValue::NULL).await.unwrap_err();
        assert!(matches!(err, WebError::Unsupported("share")));
    }

    #[wasm_bindgen_test]
    async fn share_without_capability_does_not_throw() {
        let page = Page::detect().unwrap();
        // Headless test browsers deny clipboard access; the toast path must
        // still complete.
        let before = page.body().unwrap().child_element_count();
        share_invitation(&page).await;
        assert!(page.body().unwrap().child_element_count() > before);
    }
}
