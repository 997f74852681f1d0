//! Ascendant and Midheaven from local sidereal time.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), ch. 13; standard
//! spherical astronomy (Montenbruck & Pfleger). Both angles are resolved
//! with two-argument arctangents so the quadrant never flips silently.

use natal_frames::normalize_deg;
use serde::{Deserialize, Serialize};

use crate::error::HouseSystemError;

/// Latitudes closer than this to ±90° are treated as the pole.
const POLE_EPS_DEG: f64 = 1e-9;

/// Ascendant and Midheaven ecliptic longitudes, degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    pub asc: f64,
    pub mc: f64,
}

impl Angles {
    /// Descendant, opposite the Ascendant.
    pub fn desc(&self) -> f64 {
        normalize_deg(self.asc + 180.0)
    }

    /// Imum Coeli, opposite the Midheaven.
    pub fn ic(&self) -> f64 {
        normalize_deg(self.mc + 180.0)
    }
}

/// Ecliptic longitude culminating on the meridian.
///
/// `MC = atan2(sin LST, cos LST · cos ε)`; MC lies in the same half of the
/// circle as LST.
pub fn midheaven_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_deg(f64::atan2(lst.sin(), lst.cos() * eps.cos()).to_degrees())
}

/// Ecliptic longitude rising on the eastern horizon.
///
/// `ASC = atan2(cos LST, −(sin LST · cos ε + tan φ · sin ε))`
///
/// The horizon meets the ecliptic at two opposite points. The result is
/// checked to be the rising one (negative hour angle); beyond the polar
/// circles the arctangent can land on the setting point and is flipped.
pub fn ascendant_deg(
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> Result<f64, HouseSystemError> {
    if 90.0 - latitude_deg.abs() < POLE_EPS_DEG {
        return Err(HouseSystemError::PolarSingularity {
            latitude: latitude_deg,
        });
    }
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let y = lst.cos();
    let x = -(lst.sin() * eps.cos() + phi.tan() * eps.sin());
    let mut asc = normalize_deg(f64::atan2(y, x).to_degrees());
    if !asc.is_finite() {
        return Err(HouseSystemError::NonFinite {
            quantity: "ascendant",
        });
    }

    if !rises_east(asc, lst_deg, obliquity_deg) {
        asc = normalize_deg(asc + 180.0);
    }
    Ok(asc)
}

/// Hour angle of an ecliptic point, degrees [0, 360).
fn ecliptic_hour_angle_deg(lon_deg: f64, lst_deg: f64, obliquity_deg: f64) -> f64 {
    let lon = lon_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let ra = f64::atan2(lon.sin() * eps.cos(), lon.cos()).to_degrees();
    normalize_deg(lst_deg - ra)
}

/// East of the meridian means an hour angle in (180°, 360°).
fn rises_east(lon_deg: f64, lst_deg: f64, obliquity_deg: f64) -> bool {
    ecliptic_hour_angle_deg(lon_deg, lst_deg, obliquity_deg) > 180.0
}

/// Both angles from one LST.
pub fn angles_from_lst(
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> Result<Angles, HouseSystemError> {
    let asc = ascendant_deg(lst_deg, latitude_deg, obliquity_deg)?;
    let mc = midheaven_deg(lst_deg, obliquity_deg);
    if !mc.is_finite() {
        return Err(HouseSystemError::NonFinite {
            quantity: "midheaven",
        });
    }
    Ok(Angles { asc, mc })
}

#[cfg(test)]
mod tests {
    use super::*;
    use natal_frames::OBLIQUITY_J2000_DEG as EPS;
    use natal_frames::arc_forward;

    #[test]
    fn mc_at_equinoxes_and_solstices() {
        for (lst, expected) in [(0.0, 0.0), (90.0, 90.0), (180.0, 180.0), (270.0, 270.0)] {
            let mc = midheaven_deg(lst, EPS);
            assert!(
                (arc_forward(expected, mc).min(arc_forward(mc, expected))) < 1e-9,
                "LST {lst}: MC = {mc}"
            );
        }
    }

    #[test]
    fn mc_same_half_as_lst() {
        for k in 0..72 {
            let lst = k as f64 * 5.0 + 0.5;
            let mc = midheaven_deg(lst, EPS);
            assert_eq!((lst / 180.0).floor(), (mc / 180.0).floor(), "LST {lst}, MC {mc}");
        }
    }

    #[test]
    fn asc_at_equator_lst_zero_is_cancer() {
        // Aries on the meridian puts 0° Cancer on the eastern horizon.
        let asc = ascendant_deg(0.0, 0.0, EPS).unwrap();
        assert!((asc - 90.0).abs() < 1e-9, "ASC = {asc}");
    }

    #[test]
    fn asc_j2000_greenwich_equator() {
        let a = angles_from_lst(280.460_618_37, 0.0, EPS).unwrap();
        assert!((a.mc - 279.614_2).abs() < 1e-3, "MC = {}", a.mc);
        assert!((a.asc - 11.377_9).abs() < 1e-3, "ASC = {}", a.asc);
    }

    #[test]
    fn asc_london_ramc_zero() {
        // Tables of houses for 51.5°N at sidereal time 0h: ASC ≈ 26°36′ Cancer.
        let asc = ascendant_deg(0.0, 51.5, EPS).unwrap();
        assert!((asc - 116.57).abs() < 0.05, "ASC = {asc}");
    }

    #[test]
    fn asc_rises_east_at_all_latitudes() {
        for lat in [-89.0, -80.0, -67.0, -45.0, 0.0, 52.0, 67.0, 75.0, 89.0] {
            for k in 0..72 {
                let lst = k as f64 * 5.0 + 0.3;
                let asc = ascendant_deg(lst, lat, EPS).unwrap();
                let ha = ecliptic_hour_angle_deg(asc, lst, EPS);
                assert!(ha > 180.0 && ha < 360.0, "lat {lat}, LST {lst}: H = {ha}");
            }
        }
    }

    #[test]
    fn asc_on_horizon() {
        let eps = EPS.to_radians();
        for (lst, lat) in [(13.0_f64, 40.0_f64), (200.0, -33.9), (310.0, 70.0)] {
            let asc = ascendant_deg(lst, lat, EPS).unwrap().to_radians();
            let dec = (eps.sin() * asc.sin()).asin();
            let ha = ecliptic_hour_angle_deg(asc.to_degrees(), lst, EPS).to_radians();
            let phi = lat.to_radians();
            let alt = (phi.sin() * dec.sin() + phi.cos() * dec.cos() * ha.cos()).asin();
            assert!(alt.abs() < 1e-9, "altitude {} rad", alt);
        }
    }

    #[test]
    fn asc_ahead_of_mc_below_polar_circle() {
        for lat in [-66.0, -45.0, -10.0, 0.0, 23.0, 52.0, 66.0] {
            for k in 0..36 {
                let lst = k as f64 * 10.0 + 1.0;
                let a = angles_from_lst(lst, lat, EPS).unwrap();
                let ahead = arc_forward(a.mc, a.asc);
                assert!(ahead > 0.0 && ahead < 180.0, "lat {lat}, LST {lst}: {a:?}");
            }
        }
    }

    #[test]
    fn pole_is_singular() {
        assert_eq!(
            ascendant_deg(45.0, 90.0, EPS),
            Err(HouseSystemError::PolarSingularity { latitude: 90.0 })
        );
        assert!(ascendant_deg(45.0, -90.0, EPS).is_err());
    }

    #[test]
    fn desc_and_ic_are_opposite() {
        let a = Angles { asc: 350.0, mc: 100.0 };
        assert!((a.desc() - 170.0).abs() < 1e-12);
        assert!((a.ic() - 280.0).abs() < 1e-12);
    }
}
