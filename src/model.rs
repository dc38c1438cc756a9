//! Track and label data supplied by the embedding page.

use serde::{Deserialize, Serialize};

/// One playable item in the playlist. The widget never creates or mutates
/// tracks; the embedding page hands over an ordered sequence of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Cover image reference. Empty string means "no cover".
    #[serde(default)]
    pub cover: String,
    /// Audio source reference handed to the media element as-is.
    pub src: String,
}

/// Display strings for headings, button accessibility names, and the seek
/// control's hidden label. Supplied by the embedding page; the widget
/// synthesizes no defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerLabels {
    pub heading: String,
    pub track_list: String,
    pub play: String,
    pub pause: String,
    pub previous: String,
    pub next: String,
    pub seek: String,
}

/// Format a second count as `minutes:seconds` for the time display pair.
/// The media element reports `NaN` before metadata loads and the position
/// can briefly read negative on some engines; both render as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }
    let total = seconds as u32;
    let mins = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", mins, secs)
}

#[cfg(test)]
mod tests {
    use super::format_time;

    #[test]
    fn formats_zero_as_zero() {
        assert_eq!(format_time(0.0), "0:00");
    }

    #[test]
    fn formats_minutes_and_pads_seconds() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(600.0), "10:00");
        assert_eq!(format_time(59.9), "0:59");
    }

    #[test]
    fn rejects_non_finite_and_negative_input() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-5.0), "0:00");
    }
}
