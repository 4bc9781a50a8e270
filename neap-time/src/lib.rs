//! Station-local time handling for tide stations identified by a raw UTC offset.
//!
//! Stations carry a fixed offset in seconds east of UTC instead of a named
//! IANA zone, so no DST transition logic applies anywhere in this crate:
//! every conversion is offset arithmetic on the instant followed by calendar
//! decomposition.

pub mod bounds;
pub mod clock;
pub mod display;

pub use bounds::{station_day_bounds, DayBounds};
pub use clock::StationClock;
pub use display::{format_display_date_time, format_display_time};
