//! Civil time → Julian Day → sidereal time.
//!
//! This crate provides:
//! - Validation of a civil birth time given with a fixed UTC offset
//! - The closed-form Julian Day used throughout the chart engine
//! - Greenwich Mean and Local Sidereal Time in degrees

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::{CivilTime, SUPPORTED_YEARS, UTC_OFFSET_RANGE_HOURS};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, days_in_month, is_leap_year, julian_centuries, julian_day,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
