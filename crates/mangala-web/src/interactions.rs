//! Curtains, blessing symbol, couple names, diyas and touch ripples

use std::rc::Rc;

use mangala_core::timing::{diya_flicker_delay, CURTAIN_HIDE_DELAY_MS, GLOW_REARM_DELAY_MS};
use web_sys::{Document, Event, MouseEvent, TouchEvent};

use crate::dom;
use crate::effects;
use crate::error::WebError;
use crate::log;
use crate::page::Page;

const CURTAINS: &str = ".curtain-left, .curtain-right";
const BLESSING_SYMBOL: &str = ".ganesha-symbol";
const COUPLE_NAMES: &str = ".couple-names";
const DIYA: &str = ".diya";
const FLAME: &str = ".flame";

const GLOW_ANIMATION: &str = "divineGlow 3s ease-in-out infinite";
const DIYA_GLOW_HOVER: &str = "drop-shadow(0 0 20px rgba(255, 153, 51, 1))";
const DIYA_GLOW_REST: &str = "drop-shadow(0 0 10px rgba(255, 153, 51, 0.8))";

/// Bursts fired by tapping the couple's names
const NAME_TAP_BURSTS: usize = 3;

fn hide_curtains(document: &Document) -> Result<(), WebError> {
    for curtain in dom::query_all(document, CURTAINS)? {
        dom::set_style(&curtain, "display", "none")?;
    }
    Ok(())
}

/// Take the opening curtains away once their animation has played, or at
/// once under reduced motion
pub fn init_curtains(page: &Rc<Page>) -> Result<(), WebError> {
    if !page.profile.motion_allowed() {
        return hide_curtains(&page.document);
    }

    let document = page.document.clone();
    dom::after(CURTAIN_HIDE_DELAY_MS, move || {
        if let Err(e) = hide_curtains(&document) {
            log(&format!("[curtains] {}", e));
        }
    })
}

/// Desynchronize flame flicker and add hover glow on pointer devices
pub fn init_diyas(page: &Rc<Page>) -> Result<(), WebError> {
    if !page.profile.motion_allowed() {
        return Ok(());
    }

    for (index, diya) in dom::query_all(&page.document, DIYA)?.into_iter().enumerate() {
        if let Some(flame) = diya.query_selector(FLAME)? {
            dom::set_style(&flame, "animation-delay", &diya_flicker_delay(index))?;
        }

        if !page.profile.touch {
            let target = diya.clone();
            dom::listen(&diya, "mouseenter", move |_: MouseEvent| {
                let _ = dom::set_style(&target, "filter", DIYA_GLOW_HOVER);
            })?;
            let target = diya.clone();
            dom::listen(&diya, "mouseleave", move |_: MouseEvent| {
                let _ = dom::set_style(&target, "filter", DIYA_GLOW_REST);
            })?;
        }
    }
    Ok(())
}

/// Blessing symbol and couple-name taps
pub fn init_interactions(page: &Rc<Page>) -> Result<(), WebError> {
    if let Some(symbol) = dom::query_html(&page.document, BLESSING_SYMBOL)? {
        let tap_page = page.clone();
        let target = symbol.clone();
        dom::listen(&symbol, "click", move |_: Event| {
            // Stop the glow, then re-arm it on the next tick so it restarts
            let _ = target.style().set_property("animation", "none");
            let rearm = target.clone();
            let _ = dom::after(GLOW_REARM_DELAY_MS, move || {
                let _ = rearm.style().set_property("animation", GLOW_ANIMATION);
            });

            if let Err(e) = effects::spawn_blessing(&tap_page, &target) {
                log(&format!("[blessing] {}", e));
            }
        })?;
    }

    if let Some(names) = dom::query_html(&page.document, COUPLE_NAMES)? {
        let tap_page = page.clone();
        dom::listen(&names, "click", move |_: Event| {
            if let Err(e) = effects::trigger_fireworks(&tap_page, NAME_TAP_BURSTS) {
                log(&format!("[fireworks] {}", e));
            }
        })?;
    }
    Ok(())
}

/// Ripple under every touch on touch devices
pub fn init_touch_effects(page: &Rc<Page>) -> Result<(), WebError> {
    if !page.profile.touch {
        return Ok(());
    }

    let touch_page = page.clone();
    dom::listen_passive(&page.document, "touchstart", move |event: TouchEvent| {
        let Some(touch) = event.touches().get(0) else {
            return;
        };
        let (x, y) = (touch.client_x() as f64, touch.client_y() as f64);
        if let Err(e) = effects::spawn_ripple(&touch_page, x, y) {
            log(&format!("[touch] {}", e));
        }
    })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::test_support;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    fn curtains(page: &Page) -> [HtmlElement; 2] {
        let body = page.body().unwrap();
        ["curtain-left", "curtain-right"].map(|class| {
            let curtain = dom::create_div(&page.document, "").unwrap();
            curtain.set_class_name(class);
            body.append_child(&curtain).unwrap();
            curtain
        })
    }

    fn display(element: &HtmlElement) -> String {
        element.style().get_property_value("display").unwrap()
    }

    #[wasm_bindgen_test]
    fn reduced_motion_hides_curtains_at_once() {
        let page = test_support::reduced_motion_page();
        let pair = curtains(&page);

        init_curtains(&page).unwrap();
        for curtain in &pair {
            assert_eq!(display(curtain), "none");
            curtain.remove();
        }
    }

    #[wasm_bindgen_test]
    async fn curtains_stay_until_animation_has_played() {
        let page = test_support::desktop_page();
        let pair = curtains(&page);

        init_curtains(&page).unwrap();
        for curtain in &pair {
            assert_ne!(display(curtain), "none");
        }

        test_support::sleep(CURTAIN_HIDE_DELAY_MS as i32 + 200).await;
        for curtain in &pair {
            assert_eq!(display(curtain), "none");
            curtain.remove();
        }
    }
}
