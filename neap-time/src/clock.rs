use chrono::{DateTime, Duration, Local, NaiveDateTime};

pub(crate) const CLOCK_PATTERN: &str = "%I:%M %p";
pub(crate) const DATE_TIME_PATTERN: &str = "%a, %b %d, %I:%M %p";

/// Output for instants chrono cannot represent, matching what the backend's
/// own clients render for an unrepresentable `Date`.
pub(crate) const INVALID: &str = "Invalid Date";

/// Shifts a UTC instant by a fixed offset and drops the zone label, yielding
/// the wall-clock reading in that zone as a naive date-time.
pub(crate) fn effective_local(timestamp_ms: i64, offset_seconds: i32) -> Option<NaiveDateTime> {
    let utc = DateTime::from_timestamp_millis(timestamp_ms)?;
    utc.checked_add_signed(Duration::seconds(i64::from(offset_seconds)))
        .map(|shifted| shifted.naive_utc())
}

fn format_at_offset(timestamp_ms: i64, offset_seconds: i32, pattern: &str) -> String {
    match effective_local(timestamp_ms, offset_seconds) {
        Some(local) => local.format(pattern).to_string(),
        None => INVALID.to_string(),
    }
}

/// Formats UTC instants as wall-clock strings in a station's zone.
///
/// The ambient offset is the fallback frame for stations whose offset is
/// unknown. It is injected once at construction so the formatting calls stay
/// pure; `system()` resolves it from the process zone for callers that want
/// "wherever this device is".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationClock {
    ambient_offset_seconds: i32,
}

impl StationClock {
    pub fn new(ambient_offset_seconds: i32) -> Self {
        Self {
            ambient_offset_seconds,
        }
    }

    /// Ambient offset taken from the system timezone at the moment of the call.
    pub fn system() -> Self {
        Self::new(Local::now().offset().local_minus_utc())
    }

    pub fn ambient_offset_seconds(&self) -> i32 {
        self.ambient_offset_seconds
    }

    /// 12-hour clock reading (`"04:00 AM"`) at `timestamp_ms` in the station's
    /// zone, or in the ambient zone when the station's offset is unknown.
    pub fn format_time(&self, timestamp_ms: i64, offset_seconds: Option<i32>) -> String {
        format_at_offset(
            timestamp_ms,
            offset_seconds.unwrap_or(self.ambient_offset_seconds),
            CLOCK_PATTERN,
        )
    }

    /// Abbreviated date plus 12-hour clock (`"Mon, Jan 01, 04:00 AM"`), same
    /// frame selection as [`format_time`](Self::format_time).
    pub fn format_date_time(&self, timestamp_ms: i64, offset_seconds: Option<i32>) -> String {
        format_at_offset(
            timestamp_ms,
            offset_seconds.unwrap_or(self.ambient_offset_seconds),
            DATE_TIME_PATTERN,
        )
    }
}
