//! Transient page effects
//!
//! Every effect element is attached to the page, handed to a
//! [`Transient`](mangala_core::Transient) handle and removed by a timer once
//! its CSS animation has played. Re-triggering never deduplicates: each call
//! gets its own element.

use std::rc::Rc;

use mangala_core::particles::{
    blessing_burst, BlessingGlyph, FireworkBurst, FireworkShow, BLESSING_RISE_PX,
};
use mangala_core::timing::{
    BLESSING_LIFETIME_MS, FIREWORK_LIFETIME_MS, RIPPLE_LIFETIME_MS, TOAST_DISPLAY_MS,
    TOAST_SLIDE_MS,
};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::error::WebError;
use crate::log;
use crate::page::Page;

const FIREWORKS_CONTAINER: &str = ".fireworks-container";

/// Keyframes shared by blessing glyphs, toasts and fireworks
const EFFECTS_CSS: &str = r#"
@keyframes blessingFloat {
  0% {
    transform: translate(0, 0) scale(1);
    opacity: 1;
  }
  100% {
    transform: translate(var(--drift-x, 0px), var(--rise-y)) scale(0);
    opacity: 0;
  }
}

@keyframes toastSlideUp {
  from {
    transform: translateX(-50%) translateY(100%);
    opacity: 0;
  }
  to {
    transform: translateX(-50%) translateY(0);
    opacity: 1;
  }
}

@keyframes toastSlideDown {
  from {
    transform: translateX(-50%) translateY(0);
    opacity: 1;
  }
  to {
    transform: translateX(-50%) translateY(100%);
    opacity: 0;
  }
}

.firework {
  position: fixed;
  pointer-events: none;
  z-index: 9997;
}

.firework-particle {
  position: absolute;
  width: 4px;
  height: 4px;
  border-radius: 50%;
  animation: fireworkExplode 1s ease-out forwards;
}

@keyframes fireworkExplode {
  0% {
    transform: translate(0, 0) scale(1);
    opacity: 1;
  }
  100% {
    opacity: 0;
  }
}
"#;

const RIPPLE_CSS: &str = r#"
@keyframes rippleExpand {
  to {
    width: 100px;
    height: 100px;
    opacity: 0;
  }
}
"#;

/// Inject the shared effect keyframes once
pub fn inject_keyframes(page: &Rc<Page>) -> Result<(), WebError> {
    if !page.profile.motion_allowed() {
        return Ok(());
    }
    inject_style_once(page, "data-effects", EFFECTS_CSS)
}

/// Append a `<style>` tagged with `marker` unless one is already present
fn inject_style_once(page: &Page, marker: &str, css: &str) -> Result<(), WebError> {
    if page
        .document
        .query_selector(&format!("style[{}]", marker))?
        .is_some()
    {
        return Ok(());
    }
    let style = page.document.create_element("style")?;
    style.set_text_content(Some(css));
    style.set_attribute(marker, "true")?;
    page.head()?.append_child(&style)?;
    Ok(())
}

fn toast_css() -> &'static str {
    "position: fixed; bottom: 20px; left: 50%; transform: translateX(-50%); \
     background: linear-gradient(135deg, #FFD700, #FFA500); color: #8B0000; \
     padding: 12px 24px; border-radius: 50px; font-weight: 600; \
     box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3); z-index: 10000; \
     animation: toastSlideUp 0.3s ease-out;"
}

fn ripple_css(x: f64, y: f64) -> String {
    format!(
        "position: fixed; left: {x}px; top: {y}px; width: 0; height: 0; \
         border-radius: 50%; background: radial-gradient(circle, rgba(255, 215, 0, 0.3), transparent); \
         pointer-events: none; z-index: 9996; transform: translate(-50%, -50%); \
         animation: rippleExpand 0.6s ease-out forwards;"
    )
}

fn blessing_css(x: f64, y: f64, glyph: &BlessingGlyph) -> String {
    format!(
        "position: fixed; left: {x}px; top: {y}px; font-size: 20px; pointer-events: none; \
         z-index: 9999; --drift-x: {}; --rise-y: -{}px; \
         animation: blessingFloat 2s ease-out forwards;",
        glyph.drift_css(),
        BLESSING_RISE_PX
    )
}

/// Show a toast that slides up, stays, then slides away
pub fn show_toast(page: &Page, message: &str) -> Result<(), WebError> {
    let toast = dom::create_div(&page.document, toast_css())?;
    toast.set_text_content(Some(message));
    page.body()?.append_child(&toast)?;

    let handle = dom::remove_after(toast.clone().into(), TOAST_DISPLAY_MS + TOAST_SLIDE_MS)?;
    dom::after(TOAST_DISPLAY_MS, move || {
        if handle.borrow().is_attached() {
            let _ = toast
                .style()
                .set_property("animation", "toastSlideDown 0.3s ease-out");
        }
    })
}

/// Ripple expanding from a touch point
pub fn spawn_ripple(page: &Page, x: f64, y: f64) -> Result<(), WebError> {
    inject_style_once(page, "data-ripple", RIPPLE_CSS)?;
    let ripple = dom::create_div(&page.document, &ripple_css(x, y))?;
    page.body()?.append_child(&ripple)?;
    dom::remove_after(ripple.into(), RIPPLE_LIFETIME_MS)?;
    Ok(())
}

/// Glyphs floating up from the center of `origin`
pub fn spawn_blessing(page: &Page, origin: &Element) -> Result<(), WebError> {
    let rect = origin.get_bounding_client_rect();
    let x = rect.left() + rect.width() / 2.0;
    let y = rect.top() + rect.height() / 2.0;
    let body = page.body()?;

    for glyph in page.with_rng(|rng| blessing_burst(rng)) {
        let particle = dom::create_div(&page.document, &blessing_css(x, y, &glyph))?;
        particle.set_text_content(Some(glyph.glyph));
        body.append_child(&particle)?;
        dom::remove_after(particle.into(), BLESSING_LIFETIME_MS)?;
    }
    Ok(())
}

/// Schedule `count` staggered bursts across the upper half of the viewport
pub fn trigger_fireworks(page: &Rc<Page>, count: usize) -> Result<(), WebError> {
    if !page.profile.motion_allowed() {
        return Ok(());
    }

    let show = FireworkShow::new(page.profile.firework_fragments());
    let viewport = page.viewport();
    let plan = page.with_rng(|rng| show.plan(count, viewport, rng));
    for scheduled in plan {
        let page = page.clone();
        dom::after(scheduled.delay_ms, move || {
            if let Err(e) = launch_firework(&page, &scheduled.burst) {
                log(&format!("[fireworks] burst failed: {}", e));
            }
        })?;
    }
    Ok(())
}

/// Attach one burst and remove it once its fragments have faded
pub fn launch_firework(page: &Page, burst: &FireworkBurst) -> Result<(), WebError> {
    let container = page
        .document
        .create_element("div")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WebError::Unsupported("div is not an HtmlElement"))?;
    container.set_class_name("firework");
    let style = container.style();
    style.set_property("left", &format!("{}px", burst.center.x))?;
    style.set_property("top", &format!("{}px", burst.center.y))?;

    for fragment in &burst.fragments {
        let particle = page
            .document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| WebError::Unsupported("div is not an HtmlElement"))?;
        particle.set_class_name("firework-particle");
        let style = particle.style();
        style.set_property("background-color", fragment.color)?;
        style.set_property("transform", &fragment.transform())?;
        style.set_property("box-shadow", &format!("0 0 6px {}", fragment.color))?;
        container.append_child(&particle)?;
    }

    let host: Element = match page.document.query_selector(FIREWORKS_CONTAINER)? {
        Some(host) => host,
        None => page.body()?.into(),
    };
    host.append_child(&container)?;
    dom::remove_after(container.into(), FIREWORK_LIFETIME_MS)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ripple_css_positions() {
        let css = ripple_css(12.0, 34.5);
        assert!(css.contains("left: 12px;"));
        assert!(css.contains("top: 34.5px;"));
        assert!(css.contains("rippleExpand 0.6s"));
    }

    #[test]
    fn test_blessing_css_carries_drift() {
        let glyph = BlessingGlyph {
            glyph: "⭐",
            drift_x: 63.7,
        };
        let css = blessing_css(100.0, 200.0, &glyph);
        assert!(css.contains("--drift-x: 64px;"));
        assert!(css.contains("--rise-y: -150px;"));
        assert!(css.contains("blessingFloat 2s"));
    }

    #[test]
    fn test_keyframes_use_drift_property() {
        assert!(EFFECTS_CSS.contains("translate(var(--drift-x, 0px), var(--rise-y))"));
        assert!(EFFECTS_CSS.contains("@keyframes fireworkExplode"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::test_support;
    use mangala_core::timing::FIREWORK_STAGGER_MS;
    use mangala_core::Vec2;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use wasm_bindgen_test::*;

    /// Fireworks container placed ahead of anything else in the body
    fn show_host(page: &Page) -> Element {
        let host = page.document.create_element("div").unwrap();
        host.set_class_name("fireworks-container");
        let body = page.body().unwrap();
        body.insert_before(&host, body.first_child().as_ref()).unwrap();
        host
    }

    fn burst_sizes(host: &Element) -> Vec<u32> {
        let bursts = host.query_selector_all(".firework").unwrap();
        (0..bursts.length())
            .filter_map(|i| bursts.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|burst| burst.child_element_count())
            .collect()
    }

    #[wasm_bindgen_test]
    fn firework_burst_attaches_fragments() {
        let page = Page::detect().unwrap();
        let mut rng = SmallRng::seed_from_u64(4);
        let burst = FireworkBurst::new(Vec2::new(50.0, 50.0), 20, &mut rng);
        launch_firework(&page, &burst).unwrap();
        let particles = page
            .document
            .query_selector_all(".firework-particle")
            .unwrap();
        assert!(particles.length() >= 20);
    }

    #[wasm_bindgen_test]
    fn ripple_stylesheet_injected_once() {
        let page = Page::detect().unwrap();
        spawn_ripple(&page, 10.0, 10.0).unwrap();
        spawn_ripple(&page, 20.0, 20.0).unwrap();
        let sheets = page
            .document
            .query_selector_all("style[data-ripple]")
            .unwrap();
        assert_eq!(sheets.length(), 1);
    }

    #[wasm_bindgen_test]
    async fn firework_show_staggers_bursts() {
        let page = test_support::desktop_page();
        let host = show_host(&page);

        trigger_fireworks(&page, 3).unwrap();
        assert!(burst_sizes(&host).is_empty());

        // First burst fires at once, the next two one stagger apart
        test_support::sleep(FIREWORK_STAGGER_MS as i32 / 2).await;
        assert_eq!(burst_sizes(&host).len(), 1);

        test_support::sleep(FIREWORK_STAGGER_MS as i32 * 2).await;
        let fragments = page.profile.firework_fragments() as u32;
        assert_eq!(burst_sizes(&host), vec![fragments; 3]);
        host.remove();
    }

    #[wasm_bindgen_test]
    async fn reduced_motion_skips_fireworks() {
        let page = test_support::reduced_motion_page();
        let host = show_host(&page);

        trigger_fireworks(&page, 3).unwrap();
        test_support::sleep(FIREWORK_STAGGER_MS as i32 * 3).await;
        assert!(burst_sizes(&host).is_empty());
        host.remove();
    }
}
