//! Apparent geocentric longitude of the Sun.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), ch. 25, low-accuracy
//! method. Accurate to about 0.01° over the supported date range.

use natal_frames::normalize_deg;
use natal_time::julian_centuries;

/// Apparent ecliptic longitude of the Sun (mean equinox of date plus
/// nutation and aberration), in degrees [0, 360).
pub fn sun_longitude_deg(jd: f64) -> f64 {
    let t = julian_centuries(jd);

    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    let true_longitude = l0 + c;
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_deg(true_longitude - 0.005_69 - 0.004_78 * omega.sin())
}
