//! Neap Core - value types of the tide service wire contract

pub mod distance;
pub mod station;
pub mod tide;

pub use distance::{format_distance, km_to_miles};
pub use station::{Capability, Station, StationId, StationSource};
pub use tide::{ExtremeType, TideData, TideExtreme, TidePrediction, TideType};
