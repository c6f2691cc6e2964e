//! Share payload and strategy
//!
//! The strategy is chosen once at startup from the platform capabilities and
//! never re-checked per click.

use crate::config::{DeviceProfile, InviteConfig};

/// Toast shown after a clipboard copy
pub const COPIED_MESSAGE: &str = "Invitation link copied! 📋";

/// Toast shown when sharing and copying both failed
pub const MANUAL_COPY_MESSAGE: &str = "Please copy the link manually";

/// How the share button delivers the invitation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShareStrategy {
    /// Platform share sheet
    Native,
    /// Copy the composed message to the clipboard and confirm with a toast
    Clipboard,
}

impl ShareStrategy {
    /// Native sharing is used only on touch devices that expose it
    pub fn detect(share_available: bool, profile: &DeviceProfile) -> Self {
        if share_available && profile.touch {
            ShareStrategy::Native
        } else {
            ShareStrategy::Clipboard
        }
    }
}

/// Title, text and link handed to the share sheet or clipboard
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    pub fn new(config: &InviteConfig, url: impl Into<String>) -> Self {
        Self {
            title: config.share_title.clone(),
            text: config.share_text.clone(),
            url: url.into(),
        }
    }

    /// Message written to the clipboard by the fallback strategy
    pub fn clipboard_text(&self) -> String {
        format!("{}\n\n🔗 {}", self.text, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_native_on_touch() {
        let phone = DeviceProfile::new(false, 390.0, true);
        assert_eq!(ShareStrategy::detect(true, &phone), ShareStrategy::Native);
        assert_eq!(ShareStrategy::detect(false, &phone), ShareStrategy::Clipboard);
    }

    #[test]
    fn test_detect_clipboard_on_desktop() {
        let desktop = DeviceProfile::new(false, 1920.0, false);
        assert_eq!(ShareStrategy::detect(true, &desktop), ShareStrategy::Clipboard);
    }

    #[test]
    fn test_clipboard_text() {
        let payload = SharePayload {
            title: "T".to_string(),
            text: "You are invited".to_string(),
            url: "https://example.org/".to_string(),
        };
        assert_eq!(payload.clipboard_text(), "You are invited\n\n🔗 https://example.org/");
    }
}
