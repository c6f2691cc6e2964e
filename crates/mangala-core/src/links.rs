//! Maps and calendar links for the action buttons

use crate::config::InviteConfig;

const MAPS_SEARCH: &str = "https://www.google.com/maps/search/?api=1";
const CALENDAR_TEMPLATE: &str = "https://calendar.google.com/calendar/render?action=TEMPLATE";

/// Maps search for the venue
///
/// Everything but ASCII alphanumerics and `-_.~` is percent-encoded, so
/// `! ' ( ) *` are escaped too. The targets decode both forms the same.
pub fn maps_url(venue: &str) -> String {
    format!("{}&query={}", MAPS_SEARCH, urlencoding::encode(venue))
}

/// Calendar event creation link
///
/// Stamps are `YYYYMMDDTHHMMSS` and therefore URL-safe; they are joined with a
/// literal `/` as the endpoint expects.
pub fn calendar_url(config: &InviteConfig) -> String {
    format!(
        "{}&text={}&dates={}/{}&details={}&location={}",
        CALENDAR_TEMPLATE,
        urlencoding::encode(&config.title),
        config.start,
        config.end,
        urlencoding::encode(&config.details),
        urlencoding::encode(&config.venue),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_url() {
        assert_eq!(
            maps_url("SANJEEVA SHETTY MULTIPURPOSE HALL, KADALAKERE, MOODABIDRI"),
            "https://www.google.com/maps/search/?api=1&query=SANJEEVA%20SHETTY%20MULTIPURPOSE%20HALL%2C%20KADALAKERE%2C%20MOODABIDRI"
        );
    }

    #[test]
    fn test_calendar_url_default_event() {
        let url = calendar_url(&InviteConfig::default());
        assert_eq!(
            url,
            "https://calendar.google.com/calendar/render?action=TEMPLATE\
             &text=Wedding%3A%20Prathiksha%20%26%20Hariprasad\
             &dates=20251024T114200/20251024T134200\
             &details=Join%20us%20in%20celebrating%20the%20joyous%20union%20of%20Prathiksha%20%26%20Hariprasad%20at%20this%20auspicious%20occasion.\
             &location=SANJEEVA%20SHETTY%20MULTIPURPOSE%20HALL%2C%20KADALAKERE%2C%20MOODABIDRI"
        );
    }

    #[test]
    fn test_reserved_marks_are_escaped() {
        assert_eq!(
            maps_url("Hall (A) * Guests' Entry!"),
            "https://www.google.com/maps/search/?api=1&query=Hall%20%28A%29%20%2A%20Guests%27%20Entry%21"
        );

        let config = InviteConfig {
            title: "Wedding (Reception)!".to_string(),
            ..InviteConfig::default()
        };
        assert!(calendar_url(&config).contains("&text=Wedding%20%28Reception%29%21&dates="));
    }
}
