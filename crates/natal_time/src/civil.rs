//! Civil birth time with a fixed UTC offset.

use std::ops::RangeInclusive;

use crate::error::TimeError;
use crate::julian::{days_in_month, julian_day};

/// Years for which the closed-form Julian Day formula is exact.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1901..=2099;

/// Accepted fixed UTC offsets, in hours.
pub const UTC_OFFSET_RANGE_HOURS: RangeInclusive<f64> = -12.0..=14.0;

/// Local civil date and time plus the UTC offset in force at that moment.
///
/// No time-zone database is consulted; the offset is taken as given
/// (fractional offsets such as +5.5 are allowed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub utc_offset_hours: f64,
}

impl CivilTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        utc_offset_hours: f64,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            utc_offset_hours,
        }
    }

    /// Check every field against its domain.
    pub fn validate(&self) -> Result<(), TimeError> {
        if !SUPPORTED_YEARS.contains(&self.year) {
            return Err(TimeError::YearOutOfRange(self.year));
        }
        let Some(month_len) = days_in_month(self.year, self.month) else {
            return Err(TimeError::InvalidMonth(self.month));
        };
        if self.day == 0 || self.day > month_len {
            return Err(TimeError::InvalidDay {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 {
            return Err(TimeError::InvalidHour(self.hour));
        }
        if self.minute > 59 {
            return Err(TimeError::InvalidMinute(self.minute));
        }
        if !UTC_OFFSET_RANGE_HOURS.contains(&self.utc_offset_hours) {
            return Err(TimeError::UtcOffsetOutOfRange(self.utc_offset_hours));
        }
        Ok(())
    }

    /// Decimal Universal Time hour: local clock time minus the UTC offset.
    ///
    /// May be negative or exceed 24 when the offset crosses midnight.
    pub fn ut_hours(&self) -> f64 {
        self.hour as f64 + self.minute as f64 / 60.0 - self.utc_offset_hours
    }

    /// Validate, then convert to a Julian Day in UT.
    pub fn julian_day(&self) -> Result<f64, TimeError> {
        self.validate()?;
        Ok(julian_day(self.year, self.month, self.day, self.ut_hours()))
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // -0.0 + 0.0 == +0.0
        let offset = self.utc_offset_hours + 0.0;
        let sign = if offset >= 0.0 { "+" } else { "" };
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02} UTC{sign}{offset}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_time_converts() {
        let t = CivilTime::new(2000, 1, 1, 12, 0, 0.0);
        let jd = t.julian_day().unwrap();
        assert!((jd - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn offset_shifts_to_ut() {
        // 19:00 at UTC+7 is 12:00 UT
        let t = CivilTime::new(2000, 1, 1, 19, 0, 7.0);
        assert!((t.ut_hours() - 12.0).abs() < 1e-12);
        let jd = t.julian_day().unwrap();
        assert!((jd - 2_451_545.0).abs() < 1e-9);
    }

    #[test]
    fn fractional_offset() {
        let t = CivilTime::new(2000, 1, 1, 17, 30, 5.5);
        assert!((t.ut_hours() - 12.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_year_outside_range() {
        let t = CivilTime::new(1850, 6, 1, 0, 0, 0.0);
        assert_eq!(t.validate(), Err(TimeError::YearOutOfRange(1850)));
    }

    #[test]
    fn rejects_bad_month() {
        let t = CivilTime::new(2000, 13, 1, 0, 0, 0.0);
        assert_eq!(t.validate(), Err(TimeError::InvalidMonth(13)));
    }

    #[test]
    fn rejects_nonexistent_day() {
        let t = CivilTime::new(2023, 2, 29, 0, 0, 0.0);
        assert!(matches!(t.validate(), Err(TimeError::InvalidDay { .. })));
        let t = CivilTime::new(2023, 2, 0, 0, 0, 0.0);
        assert!(matches!(t.validate(), Err(TimeError::InvalidDay { .. })));
    }

    #[test]
    fn accepts_leap_day() {
        assert!(CivilTime::new(2024, 2, 29, 0, 0, 0.0).validate().is_ok());
    }

    #[test]
    fn rejects_bad_clock() {
        assert_eq!(
            CivilTime::new(2000, 1, 1, 24, 0, 0.0).validate(),
            Err(TimeError::InvalidHour(24))
        );
        assert_eq!(
            CivilTime::new(2000, 1, 1, 0, 60, 0.0).validate(),
            Err(TimeError::InvalidMinute(60))
        );
    }

    #[test]
    fn rejects_offset_out_of_range() {
        assert!(matches!(
            CivilTime::new(2000, 1, 1, 0, 0, 15.0).validate(),
            Err(TimeError::UtcOffsetOutOfRange(_))
        ));
        assert!(matches!(
            CivilTime::new(2000, 1, 1, 0, 0, f64::NAN).validate(),
            Err(TimeError::UtcOffsetOutOfRange(_))
        ));
    }

    #[test]
    fn display_format() {
        let t = CivilTime::new(1990, 7, 4, 8, 5, 5.5);
        assert_eq!(t.to_string(), "1990-07-04 08:05 UTC+5.5");
        let t = CivilTime::new(1990, 7, 4, 8, 5, -3.0);
        assert_eq!(t.to_string(), "1990-07-04 08:05 UTC-3");
        let t = CivilTime::new(2000, 1, 1, 12, 0, -0.0);
        assert_eq!(t.to_string(), "2000-01-01 12:00 UTC+0");
    }
}
