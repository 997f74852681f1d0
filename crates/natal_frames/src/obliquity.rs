//! Obliquity of the ecliptic.
//!
//! The chart engine treats ε as effectively constant: over the supported
//! date range (1901–2099) the mean obliquity changes by less than 0.03°,
//! far below the precision of the simplified ephemeris. The mean model is
//! kept for callers who want the epoch-dependent value.
//!
//! Source: IAU 1980 mean obliquity, Meeus "Astronomical Algorithms"
//! (2nd ed), Eq. 22.2.

use serde::{Deserialize, Serialize};

use crate::angle::normalize_deg;

/// Mean obliquity at J2000.0: 84381.448″ = 23.4392911°.
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.448 / 3600.0;

/// Mean obliquity of the ecliptic at a Julian Day, in degrees.
///
/// ε₀ = 23°26′21.448″ − 46.8150″·T − 0.00059″·T² + 0.001813″·T³
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let t = (jd - 2_451_545.0) / 36_525.0;
    let arcsec = 84_381.448 - 46.815_0 * t - 0.000_59 * t * t + 0.001_813 * t * t * t;
    normalize_deg(arcsec / 3600.0)
}

/// How ε is obtained for a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObliquityModel {
    /// Constant J2000.0 value (≈23.44°).
    #[default]
    Fixed,
    /// IAU 1980 mean obliquity of date.
    Mean,
}

impl ObliquityModel {
    /// Obliquity in degrees at the given Julian Day.
    pub fn obliquity_deg(self, jd: f64) -> f64 {
        match self {
            Self::Fixed => OBLIQUITY_J2000_DEG,
            Self::Mean => mean_obliquity_deg(jd),
        }
    }
}
