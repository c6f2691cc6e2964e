//! Invitation configuration and device profile
//!
//! [`InviteConfig`] carries the fixed event metadata used by the action
//! buttons. Defaults are built in; a page may override any field with a JSON
//! document, parsed by [`InviteConfig::from_json`].
//!
//! [`DeviceProfile`] captures the platform signals read once at startup and
//! derives particle densities from them.

use serde::{Deserialize, Serialize};

/// Viewports at or below this width (CSS pixels) use reduced densities
pub const CONSTRAINED_VIEWPORT_WIDTH: f64 = 768.0;

/// Errors from loading an invitation config
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON or has fields of the wrong type.
    #[error("invalid invitation config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A calendar stamp is not in `YYYYMMDDTHHMMSS` form.
    #[error("invalid calendar stamp for {field}: {value:?}")]
    InvalidStamp { field: &'static str, value: String },
}

/// Event metadata shown and shared by the invitation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InviteConfig {
    /// Calendar event title
    pub title: String,
    /// Venue, used for the maps query and the calendar location
    pub venue: String,
    /// Calendar start stamp (`YYYYMMDDTHHMMSS`, floating local time)
    pub start: String,
    /// Calendar end stamp (`YYYYMMDDTHHMMSS`, floating local time)
    pub end: String,
    /// Calendar event description
    pub details: String,
    /// Title of the native share sheet
    pub share_title: String,
    /// Body of the share message
    pub share_text: String,
}

impl Default for InviteConfig {
    fn default() -> Self {
        Self {
            title: "Wedding: Prathiksha & Hariprasad".to_string(),
            venue: "SANJEEVA SHETTY MULTIPURPOSE HALL, KADALAKERE, MOODABIDRI".to_string(),
            start: "20251024T114200".to_string(),
            end: "20251024T134200".to_string(),
            details: "Join us in celebrating the joyous union of Prathiksha & Hariprasad at this auspicious occasion.".to_string(),
            share_title: "Wedding Invitation".to_string(),
            share_text: "🎊 You are invited to the wedding of Prathiksha & Hariprasad! 🎊\n\n📅 Date: October 24, 2025\n⏰ Time: 11:42 AM\n📍 Venue: Sanjeeva Shetty Multipurpose Hall, Moodabidri".to_string(),
        }
    }
}

impl InviteConfig {
    /// Parse a config document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: InviteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the calendar stamps are well formed
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_stamp("start", &self.start)?;
        check_stamp("end", &self.end)
    }
}

fn check_stamp(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let bytes = value.as_bytes();
    let well_formed = bytes.len() == 15
        && bytes[8] == b'T'
        && bytes[..8].iter().all(u8::is_ascii_digit)
        && bytes[9..].iter().all(u8::is_ascii_digit);
    if well_formed {
        Ok(())
    } else {
        Err(ConfigError::InvalidStamp {
            field,
            value: value.to_string(),
        })
    }
}

/// Platform signals captured once at startup
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeviceProfile {
    /// User asked the platform to minimize motion
    pub reduced_motion: bool,
    /// Viewport width at startup, in CSS pixels
    pub viewport_width: f64,
    /// Device accepts touch input
    pub touch: bool,
}

impl DeviceProfile {
    /// Build a profile; constrained viewports count as touch devices
    pub fn new(reduced_motion: bool, viewport_width: f64, has_touch_points: bool) -> Self {
        let constrained = viewport_width <= CONSTRAINED_VIEWPORT_WIDTH;
        Self {
            reduced_motion,
            viewport_width,
            touch: has_touch_points || constrained,
        }
    }

    /// Viewport is at or below the constrained width
    #[inline]
    pub fn constrained(&self) -> bool {
        self.viewport_width <= CONSTRAINED_VIEWPORT_WIDTH
    }

    /// Canvas animators and decorative motion may run
    #[inline]
    pub fn motion_allowed(&self) -> bool {
        !self.reduced_motion
    }

    /// Size of the sparkle pool
    pub fn sparkle_count(&self) -> usize {
        if self.constrained() {
            30
        } else {
            60
        }
    }

    /// Maximum number of petals on screen
    pub fn petal_cap(&self) -> usize {
        if self.constrained() {
            15
        } else {
            30
        }
    }

    /// Fragments per firework burst
    pub fn firework_fragments(&self) -> usize {
        if self.constrained() {
            20
        } else {
            40
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(InviteConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = InviteConfig::from_json(r#"{"venue": "Town Hall", "shareTitle": "Invite"}"#)
            .unwrap();
        assert_eq!(config.venue, "Town Hall");
        assert_eq!(config.share_title, "Invite");
        assert_eq!(config.start, "20251024T114200");
    }

    #[test]
    fn test_from_json_rejects_bad_stamp() {
        let err = InviteConfig::from_json(r#"{"end": "2025-10-24 13:42"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidStamp { field: "end", .. }));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            InviteConfig::from_json("{not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_profile_densities() {
        let phone = DeviceProfile::new(false, 390.0, true);
        assert!(phone.constrained());
        assert_eq!(phone.sparkle_count(), 30);
        assert_eq!(phone.petal_cap(), 15);
        assert_eq!(phone.firework_fragments(), 20);

        let desktop = DeviceProfile::new(false, 1440.0, false);
        assert!(!desktop.constrained());
        assert!(!desktop.touch);
        assert_eq!(desktop.sparkle_count(), 60);
        assert_eq!(desktop.petal_cap(), 30);
        assert_eq!(desktop.firework_fragments(), 40);
    }

    #[test]
    fn test_constrained_boundary() {
        assert!(DeviceProfile::new(false, 768.0, false).constrained());
        assert!(!DeviceProfile::new(false, 769.0, false).constrained());
        // Narrow viewports are treated as touch devices
        assert!(DeviceProfile::new(false, 768.0, false).touch);
    }

    #[test]
    fn test_reduced_motion() {
        assert!(!DeviceProfile::new(true, 1024.0, false).motion_allowed());
        assert!(DeviceProfile::new(false, 1024.0, false).motion_allowed());
    }
}
