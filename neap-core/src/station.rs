use serde::{Deserialize, Serialize};

pub type StationId = String;

/// Upstream agency a station's data comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StationSource {
    Noaa,
    Ukho,
    Chs,
}

/// Measurement capability advertised by a station
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    WaterLevel,
    TidalCurrents,
    WaterTemperature,
    AirTemperature,
    Wind,
}

/// Tide/water-level observation point as returned by the stations query,
/// ordered by distance server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub state: Option<String>,
    pub region: Option<String>,
    /// Distance from the queried location, kilometres.
    pub distance: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub source: StationSource,
    pub capabilities: Vec<Capability>,
    /// Fixed offset from UTC in seconds, positive east.
    pub time_zone_offset: i32,
}
