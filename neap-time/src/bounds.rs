use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::clock::effective_local;

/// Naive date-time shape the backend expects in its `startDateTime` /
/// `endDateTime` query parameters: no zone suffix, interpreted in the
/// station's own frame.
const QUERY_PATTERN: &str = "%Y-%m-%dT%H:%M:%S";

/// The 48-hour window used to request a full station-local day of tide
/// predictions.
///
/// `start_of_day` / `end_of_day` are UTC instants in epoch milliseconds;
/// the string fields are the same instants as station-local wall-clock
/// readings. Computed fresh on every call, never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBounds {
    pub start_of_day: i64,
    pub end_of_day: i64,
    pub start_date_time: String,
    pub end_date_time: String,
}

/// Computes the prediction window for the station-local day containing
/// `now_ms`.
///
/// The window opens at local noon the day before (local midnight minus 12
/// hours) and spans exactly 48 hours, so a day's tide curve survives client
/// clock skew and cycles that straddle midnight. The 12-hour margin is part
/// of the contract; a plain [midnight, next-midnight) window under-fetches
/// near day boundaries.
pub fn station_day_bounds(now_ms: i64, offset_seconds: i32) -> DayBounds {
    // Out-of-range instants collapse to the epoch rather than failing;
    // callers feed this the current wall clock.
    let local_now = effective_local(now_ms, offset_seconds).unwrap_or_default();
    let local_midnight = local_now.date().and_time(NaiveTime::MIN);

    let start_local = local_midnight
        .checked_sub_signed(Duration::hours(12))
        .unwrap_or(local_midnight);
    let end_local = start_local
        .checked_add_signed(Duration::hours(48))
        .unwrap_or(start_local);

    // Undo the wall-clock shift to recover the UTC instants.
    let offset_ms = i64::from(offset_seconds) * 1000;
    DayBounds {
        start_of_day: start_local.and_utc().timestamp_millis() - offset_ms,
        end_of_day: end_local.and_utc().timestamp_millis() - offset_ms,
        start_date_time: start_local.format(QUERY_PATTERN).to_string(),
        end_date_time: end_local.format(QUERY_PATTERN).to_string(),
    }
}
