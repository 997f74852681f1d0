//! Planetary positions from mean Keplerian elements.
//!
//! Source: E. M. Standish, "Keplerian Elements for Approximate Positions of
//! the Major Planets" (JPL/SSD), Table 1, valid 1800 AD – 2050 AD. Elements
//! and rates are referred to the mean ecliptic and equinox of J2000.0.

use natal_frames::{general_precession_longitude_deg, normalize_deg};
use natal_time::julian_centuries;

use crate::body::Body;
use crate::error::EphemerisError;

const KEPLER_MAX_ITER: usize = 50;
const KEPLER_TOL: f64 = 1e-12;

/// Osculating-style mean elements at one instant.
///
/// Angles in degrees, semi-major axis in au.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanElements {
    /// Semi-major axis.
    pub a: f64,
    /// Eccentricity.
    pub e: f64,
    /// Inclination to the ecliptic.
    pub i: f64,
    /// Mean longitude.
    pub l: f64,
    /// Longitude of perihelion (ϖ).
    pub peri: f64,
    /// Longitude of the ascending node (Ω).
    pub node: f64,
}

/// Elements at J2000.0 and their rates per Julian century.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementSet {
    pub epoch: MeanElements,
    pub rate: MeanElements,
}

const fn el(a: f64, e: f64, i: f64, l: f64, peri: f64, node: f64) -> MeanElements {
    MeanElements { a, e, i, l, peri, node }
}

pub const MERCURY: ElementSet = ElementSet {
    epoch: el(0.387_099_27, 0.205_635_93, 7.004_979_02, 252.250_323_50, 77.457_796_28, 48.330_765_93),
    rate: el(0.000_000_37, 0.000_019_06, -0.005_947_49, 149_472.674_111_75, 0.160_476_89, -0.125_340_81),
};

pub const VENUS: ElementSet = ElementSet {
    epoch: el(0.723_335_66, 0.006_776_72, 3.394_676_05, 181.979_099_50, 131.602_467_18, 76.679_842_55),
    rate: el(0.000_003_90, -0.000_041_07, -0.000_788_90, 58_517.815_387_29, 0.002_683_29, -0.277_694_18),
};

/// Earth-Moon barycenter; the observer for geocentric longitudes.
pub const EM_BARYCENTER: ElementSet = ElementSet {
    epoch: el(1.000_002_61, 0.016_711_23, -0.000_015_31, 100.464_571_66, 102.937_681_93, 0.0),
    rate: el(0.000_005_62, -0.000_043_92, -0.012_946_68, 35_999.372_449_81, 0.323_273_64, 0.0),
};

pub const MARS: ElementSet = ElementSet {
    epoch: el(1.523_710_34, 0.093_394_10, 1.849_691_42, -4.553_432_05, -23.943_629_59, 49.559_538_91),
    rate: el(0.000_018_47, 0.000_078_82, -0.008_131_31, 19_140.302_684_99, 0.444_410_88, -0.292_573_43),
};

pub const JUPITER: ElementSet = ElementSet {
    epoch: el(5.202_887_00, 0.048_386_24, 1.304_396_95, 34.396_440_51, 14.728_479_83, 100.473_909_09),
    rate: el(-0.000_116_07, -0.000_132_53, -0.001_837_14, 3_034.746_127_75, 0.212_526_68, 0.204_691_06),
};

pub const SATURN: ElementSet = ElementSet {
    epoch: el(9.536_675_94, 0.053_861_79, 2.485_991_87, 49.954_244_23, 92.598_878_31, 113.662_424_48),
    rate: el(-0.001_250_60, -0.000_509_91, 0.001_936_09, 1_222.493_622_01, -0.418_972_16, -0.288_677_94),
};

pub const URANUS: ElementSet = ElementSet {
    epoch: el(19.189_164_64, 0.047_257_44, 0.772_637_83, 313.238_104_51, 170.954_276_30, 74.016_925_03),
    rate: el(-0.001_961_76, -0.000_043_97, -0.002_429_39, 428.482_027_85, 0.408_052_81, 0.042_405_89),
};

pub const NEPTUNE: ElementSet = ElementSet {
    epoch: el(30.069_922_76, 0.008_590_48, 1.770_043_47, -55.120_029_69, 44.964_762_27, 131.784_225_74),
    rate: el(0.000_262_91, 0.000_051_05, 0.000_353_72, 218.459_453_25, -0.322_414_64, -0.005_086_64),
};

pub const PLUTO: ElementSet = ElementSet {
    epoch: el(39.482_116_75, 0.248_827_30, 17.140_012_06, 238.929_038_33, 224.068_916_29, 110.303_936_84),
    rate: el(-0.000_315_96, 0.000_051_70, 0.000_048_18, 145.207_805_15, -0.040_629_42, -0.011_834_82),
};

impl ElementSet {
    /// Elements at `t` Julian centuries from J2000.0.
    pub fn at(&self, t: f64) -> MeanElements {
        let (e0, r) = (&self.epoch, &self.rate);
        MeanElements {
            a: e0.a + r.a * t,
            e: e0.e + r.e * t,
            i: e0.i + r.i * t,
            l: e0.l + r.l * t,
            peri: e0.peri + r.peri * t,
            node: e0.node + r.node * t,
        }
    }

    /// Table entry for a planet. `None` for the Sun and Moon.
    pub const fn for_body(body: Body) -> Option<&'static ElementSet> {
        match body {
            Body::Mercury => Some(&MERCURY),
            Body::Venus => Some(&VENUS),
            Body::Mars => Some(&MARS),
            Body::Jupiter => Some(&JUPITER),
            Body::Saturn => Some(&SATURN),
            Body::Uranus => Some(&URANUS),
            Body::Neptune => Some(&NEPTUNE),
            Body::Pluto => Some(&PLUTO),
            Body::Sun | Body::Moon => None,
        }
    }
}

/// Solve Kepler's equation `M = E − e·sin E` for the eccentric anomaly.
///
/// Newton–Raphson from `E₀ = M + e·sin M`. Angles in radians.
/// Returns `None` if the iteration does not settle within 50 steps.
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> Option<f64> {
    let mut ecc_anom = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..KEPLER_MAX_ITER {
        let delta =
            (mean_anomaly - (ecc_anom - e * ecc_anom.sin())) / (1.0 - e * ecc_anom.cos());
        ecc_anom += delta;
        if delta.abs() < KEPLER_TOL {
            return Some(ecc_anom);
        }
    }
    None
}

/// Label used in errors for the observer's orbit.
const EM_BARYCENTER_NAME: &str = "Earth-Moon barycenter";

/// Heliocentric ecliptic J2000 position (au) from mean elements.
///
/// `orbit` names the orbit in a `NoConvergence` error.
fn heliocentric_position(
    orbit: &'static str,
    el: &MeanElements,
) -> Result<[f64; 3], EphemerisError> {
    let arg_peri = (el.peri - el.node).to_radians();
    let node = el.node.to_radians();
    let incl = el.i.to_radians();

    // Mean anomaly reduced to [-180, 180).
    let m = (normalize_deg(el.l - el.peri + 180.0) - 180.0).to_radians();
    let ecc_anom = solve_kepler(m, el.e).ok_or(EphemerisError::NoConvergence {
        orbit,
        eccentricity: el.e,
    })?;

    // Position in the orbital plane, x′ toward perihelion.
    let xp = el.a * (ecc_anom.cos() - el.e);
    let yp = el.a * (1.0 - el.e * el.e).sqrt() * ecc_anom.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    let x = (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp;
    let y = (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp;
    let z = (sw * si) * xp + (cw * si) * yp;
    Ok([x, y, z])
}

/// Geocentric ecliptic longitude of a planet, mean equinox of date, degrees.
///
/// The geocentre is approximated by the Earth-Moon barycenter (≤ 0.002°
/// for Mars, smaller for the outer planets).
pub fn planet_longitude_deg(body: Body, jd: f64) -> Result<f64, EphemerisError> {
    let set =
        ElementSet::for_body(body).ok_or_else(|| EphemerisError::UnsupportedBody(body.to_string()))?;
    let t = julian_centuries(jd);

    let p = heliocentric_position(body.name(), &set.at(t))?;
    let earth = heliocentric_position(EM_BARYCENTER_NAME, &EM_BARYCENTER.at(t))?;

    let dx = p[0] - earth[0];
    let dy = p[1] - earth[1];
    let lon_j2000 = dy.atan2(dx).to_degrees();
    Ok(normalize_deg(lon_j2000 + general_precession_longitude_deg(t)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn kepler_circular_orbit() {
        let e = solve_kepler(1.234, 0.0).unwrap();
        assert!((e - 1.234).abs() < 1e-15);
    }

    #[test]
    fn kepler_satisfies_equation() {
        for &ecc in &[0.0167, 0.2056, 0.2488, 0.6, 0.9] {
            for k in 0..24 {
                let m = -PI + k as f64 * PI / 12.0;
                let ea = solve_kepler(m, ecc).unwrap();
                let resid = ea - ecc * ea.sin() - m;
                assert!(resid.abs() < 1e-10, "e={ecc}, M={m}: residual {resid}");
            }
        }
    }

    #[test]
    fn kepler_meeus_example_30a() {
        // e = 0.100, M = 5° → E = 5.554589°
        let ea = solve_kepler(5.0_f64.to_radians(), 0.1).unwrap();
        assert!((ea.to_degrees() - 5.554_589).abs() < 1e-6);
    }

    #[test]
    fn elements_advance_linearly() {
        let at = JUPITER.at(1.0);
        assert!((at.l - (34.396_440_51 + 3_034.746_127_75)).abs() < 1e-9);
        assert_eq!(JUPITER.at(0.0), JUPITER.epoch);
    }

    #[test]
    fn no_elements_for_luminaries() {
        assert!(ElementSet::for_body(Body::Sun).is_none());
        assert!(ElementSet::for_body(Body::Moon).is_none());
        assert!(planet_longitude_deg(Body::Moon, 2_451_545.0).is_err());
    }

    #[test]
    fn earth_distance_near_one_au() {
        let p = heliocentric_position(EM_BARYCENTER_NAME, &EM_BARYCENTER.at(0.0)).unwrap();
        let r = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((r - 0.983).abs() < 0.01, "r = {r}");
    }

    #[test]
    fn failed_solve_names_the_orbit() {
        let bad = MeanElements {
            e: f64::NAN,
            ..EM_BARYCENTER.at(0.0)
        };
        match heliocentric_position(EM_BARYCENTER_NAME, &bad) {
            Err(EphemerisError::NoConvergence { orbit, .. }) => {
                assert_eq!(orbit, "Earth-Moon barycenter");
            }
            other => panic!("expected NoConvergence, got {other:?}"),
        }
        let err = heliocentric_position(Body::Mars.name(), &bad).unwrap_err();
        assert!(err.to_string().contains("Mars"), "{err}");
    }

    #[test]
    fn mars_j2000() {
        let lon = planet_longitude_deg(Body::Mars, 2_451_545.0).unwrap();
        assert!((lon - 327.96).abs() < 0.5, "λ♂ = {lon}");
    }
}
