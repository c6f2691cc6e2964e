//! Durations and delays for page effects, in milliseconds

/// Delay before the opening curtains are hidden
pub const CURTAIN_HIDE_DELAY_MS: u32 = 2500;

/// Gap between consecutive bursts of a firework show
pub const FIREWORK_STAGGER_MS: u32 = 300;

/// Lifetime of a firework burst container
pub const FIREWORK_LIFETIME_MS: u32 = 1000;

/// Lifetime of a floating blessing glyph
pub const BLESSING_LIFETIME_MS: u32 = 2000;

/// Delay before the glow animation is re-armed after a tap
pub const GLOW_REARM_DELAY_MS: u32 = 10;

/// Time a toast stays fully visible
pub const TOAST_DISPLAY_MS: u32 = 2000;

/// Duration of the toast slide-in and slide-out animations
pub const TOAST_SLIDE_MS: u32 = 300;

/// Lifetime of a touch ripple
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Duration of the pressed state of an action button
pub const BUTTON_PULSE_MS: u32 = 200;

/// Flame animation delay step between consecutive diyas, in seconds
pub const DIYA_FLICKER_STEP_S: f64 = 0.2;

/// Animation delay for the diya at `index`, as a CSS time value
pub fn diya_flicker_delay(index: usize) -> String {
    let seconds = index as f64 * DIYA_FLICKER_STEP_S;
    // Round to avoid 0.6000000000000001s
    format!("{}s", (seconds * 1000.0).round() / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diya_flicker_delay() {
        assert_eq!(diya_flicker_delay(0), "0s");
        assert_eq!(diya_flicker_delay(1), "0.2s");
        assert_eq!(diya_flicker_delay(3), "0.6s");
    }

    #[test]
    fn test_toast_total_lifetime() {
        assert_eq!(TOAST_DISPLAY_MS + TOAST_SLIDE_MS, 2300);
    }
}
