//! Julian Day from a Gregorian calendar date.
//!
//! The chart engine uses the closed form
//!
//! `JD = 367·Y − ⌊7·(Y + ⌊(M+9)/12⌋)/4⌋ + ⌊275·M/9⌋ + D + 1721013.5 + UT/24`
//!
//! which agrees with the full Gregorian algorithm (Meeus ch. 7) from
//! 1900-Mar-01 to 2100-Feb-28. It omits the century leap-year correction,
//! so callers must keep dates inside [`crate::SUPPORTED_YEARS`].

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Day for a calendar date and a decimal UT hour.
///
/// `ut_hours` may fall outside 0..24 (e.g. after removing a UTC offset);
/// the result then lands on the neighbouring day as expected.
pub fn julian_day(year: i32, month: u32, day: u32, ut_hours: f64) -> f64 {
    let y = i64::from(year);
    let m = i64::from(month);
    let d = i64::from(day);

    let whole_days = 367 * y - (7 * (y + (m + 9).div_euclid(12))).div_euclid(4)
        + (275 * m).div_euclid(9)
        + d;

    whole_days as f64 + 1_721_013.5 + ut_hours / 24.0
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month, or `None` for a month outside 1..=12.
pub const fn days_in_month(year: i32, month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 if is_leap_year(year) => Some(29),
        2 => Some(28),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = julian_day(2000, 1, 1, 12.0);
        assert!((jd - J2000_JD).abs() < 1e-9, "JD = {jd}");
    }

    #[test]
    fn meeus_example_7a() {
        // 1957 Oct 4.81 (Sputnik 1) → JD 2436116.31
        let jd = julian_day(1957, 10, 4, 0.81 * 24.0);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "JD = {jd}");
    }

    #[test]
    fn midnight_is_half_day() {
        let jd = julian_day(2024, 3, 20, 0.0);
        assert!((jd.fract() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn negative_ut_rolls_back_a_day() {
        let a = julian_day(2024, 3, 20, -2.0);
        let b = julian_day(2024, 3, 19, 22.0);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn march_first_follows_leap_day() {
        let feb29 = julian_day(2024, 2, 29, 0.0);
        let mar1 = julian_day(2024, 3, 1, 0.0);
        assert!((mar1 - feb29 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn centuries_zero_at_epoch() {
        assert_eq!(julian_centuries(J2000_JD), 0.0);
        assert!((julian_centuries(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2023, 4), Some(30));
        assert_eq!(days_in_month(2023, 12), Some(31));
        assert_eq!(days_in_month(2023, 13), None);
        assert_eq!(days_in_month(2023, 0), None);
    }
}
