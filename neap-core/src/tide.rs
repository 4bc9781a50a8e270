use serde::{Deserialize, Serialize};

use crate::station::StationId;

/// Direction or phase of the tide at the observation instant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TideType {
    Rising,
    Falling,
    High,
    Low,
}

/// Kind of a tide extreme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExtremeType {
    High,
    Low,
}

/// A high or low water event within the requested window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TideExtreme {
    #[serde(rename = "type")]
    pub kind: ExtremeType,
    /// UTC epoch milliseconds.
    pub timestamp: i64,
    /// Station-local naive date-time, pre-localized by the backend.
    pub local_time: String,
    /// Feet above datum.
    pub height: f64,
}

/// A single point on the predicted tide curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TidePrediction {
    pub timestamp: i64,
    pub local_time: String,
    pub height: f64,
}

/// Tide conditions for one station over one requested window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TideData {
    pub timestamp: i64,
    pub local_time: String,
    pub water_level: f64,
    pub predicted_level: f64,
    pub nearest_station: StationId,
    pub location: Option<String>,
    /// Kilometres to the nearest station.
    pub station_distance: f64,
    pub tide_type: TideType,
    pub calculation_method: String,
    pub predictions: Vec<TidePrediction>,
    pub extremes: Vec<TideExtreme>,
    /// Absent when the upstream record carries no offset; formatting then
    /// falls back to the caller's ambient zone.
    pub time_zone_offset_seconds: Option<i32>,
}
