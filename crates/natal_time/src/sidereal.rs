//! Greenwich Mean and Local Sidereal Time.
//!
//! All functions take a UT Julian Day and return degrees in [0, 360).
//!
//! Source: IAU 1982 GMST expression in the form given by Meeus,
//! "Astronomical Algorithms" (2nd ed), Eq. 12.4.

use crate::julian::{J2000_JD, julian_centuries};

/// Greenwich Mean Sidereal Time at a UT Julian Day.
///
/// θ₀ = 280.46061837 + 360.98564736629·d + 0.000387933·T² − T³/38710000
/// where d = JD − 2451545.0 and T = d / 36525.
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let d = jd_ut - J2000_JD;
    let t = julian_centuries(jd_ut);
    let t2 = t * t;
    let t3 = t2 * t;

    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t2 - t3 / 38_710_000.0;
    wrap_360(theta)
}

/// Local Sidereal Time from GMST and observer east longitude, both in degrees.
pub fn local_sidereal_time_deg(gmst_deg: f64, longitude_east_deg: f64) -> f64 {
    wrap_360(gmst_deg + longitude_east_deg)
}

/// Reduce to [0, 360). A tiny negative input rounds up to exactly 360 under
/// `rem_euclid`, so that case folds back to 0.
fn wrap_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
