//! Error types for civil time validation.

use thiserror::Error;

/// Errors from validating a civil date/time before Julian Day conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year outside the range the closed-form Julian Day formula covers.
    #[error("year {0} outside supported range 1901-2099")]
    YearOutOfRange(i32),
    /// Month outside 1..=12.
    #[error("month {0} outside 1-12")]
    InvalidMonth(u32),
    /// Day does not exist in the given month.
    #[error("day {day} does not exist in {year}-{month:02}")]
    InvalidDay { year: i32, month: u32, day: u32 },
    /// Hour outside 0..=23.
    #[error("hour {0} outside 0-23")]
    InvalidHour(u32),
    /// Minute outside 0..=59.
    #[error("minute {0} outside 0-59")]
    InvalidMinute(u32),
    /// UTC offset outside -12..=+14 hours, or not finite.
    #[error("UTC offset {0} h outside -12..=+14")]
    UtcOffsetOutOfRange(f64),
}

impl TimeError {
    /// Name of the input field that failed validation.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::YearOutOfRange(_) => "year",
            Self::InvalidMonth(_) => "month",
            Self::InvalidDay { .. } => "day",
            Self::InvalidHour(_) => "hour",
            Self::InvalidMinute(_) => "minute",
            Self::UtcOffsetOutOfRange(_) => "utc_offset",
        }
    }
}
