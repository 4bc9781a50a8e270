use chrono::NaiveDateTime;

use crate::clock::{CLOCK_PATTERN, DATE_TIME_PATTERN, INVALID};

/// Shapes accepted for pre-localized strings handed back by the backend.
const PARSE_PATTERNS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    PARSE_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(value, pattern).ok())
}

fn render(value: &str, pattern: &str) -> String {
    match parse_naive(value) {
        Some(local) => local.format(pattern).to_string(),
        None => INVALID.to_string(),
    }
}

/// Renders a backend-localized naive string (`"2024-01-01T12:00:00"`) as a
/// 12-hour clock reading. The backend already applied the station offset, so
/// none is applied here.
pub fn format_display_time(local_time: &str) -> String {
    render(local_time, CLOCK_PATTERN)
}

/// Renders a backend-localized naive string with its abbreviated date,
/// `"Mon, Jan 01, 12:00 PM"`. No offset is applied.
pub fn format_display_date_time(local_time: &str) -> String {
    render(local_time, DATE_TIME_PATTERN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strings_without_seconds() {
        assert_eq!(format_display_time("2024-01-01T12:00"), "12:00 PM");
    }

    #[test]
    fn malformed_input_is_not_a_panic() {
        assert_eq!(format_display_time("not a date"), INVALID);
        assert_eq!(format_display_date_time(""), INVALID);
    }
}
