//! Placidus house cusps and the planet-in-house lookup.
//!
//! Placidus divides each body's semi-arc in time: the cusp of house 11 is
//! the ecliptic point that has completed one third of its diurnal
//! semi-arc since rising-to-culmination, house 12 two thirds, and houses 2
//! and 3 the corresponding points of the nocturnal semi-arc below the
//! horizon. The condition depends on the point's own declination, so each
//! intermediate cusp is found by fixed-point iteration on right ascension.
//!
//! Sources: standard spherical astronomy (Meeus ch. 13; Montenbruck &
//! Pfleger); semi-arc definition per Placidus de Titis.

use std::f64::consts::PI;

use natal_frames::{arc_forward, normalize_deg};
use tracing::{trace, warn};

use crate::angles::Angles;
use crate::error::HouseSystemError;

const MAX_ITER: usize = 100;
const TOL_RAD: f64 = 1e-10;

/// Houses 1, 4, 7 and 10.
pub const ANGULAR_HOUSES: [u8; 4] = [1, 4, 7, 10];

/// Which semi-arc an intermediate cusp divides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SemiArc {
    /// Above the horizon, between MC and ASC (houses 11, 12).
    Diurnal,
    /// Below the horizon, between ASC and IC (houses 2, 3).
    Nocturnal,
}

/// Twelve Placidus cusps in degrees [0, 360), index 0 = house 1.
///
/// `lst_deg` doubles as the right ascension of the MC (RAMC).
///
/// House 1 = ASC, 10 = MC, 7 and 4 their opposites; 5, 6, 8, 9 are
/// opposite 11, 12, 2, 3. Fails beyond the polar circles
/// (|φ| ≥ 90° − ε), on non-convergence, on NaN, or if the resulting cusps
/// are not in strictly increasing zodiacal order.
pub fn placidus_cusps(
    angles: &Angles,
    lst_deg: f64,
    latitude_deg: f64,
    obliquity_deg: f64,
) -> Result<[f64; 12], HouseSystemError> {
    let limit = 90.0 - obliquity_deg;
    if latitude_deg.abs() >= limit {
        return Err(HouseSystemError::BeyondPolarCircle {
            latitude: latitude_deg,
            limit,
        });
    }

    let ramc = lst_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let eps = obliquity_deg.to_radians();

    let mut cusps = [0.0; 12];
    cusps[0] = angles.asc;
    cusps[3] = angles.ic();
    cusps[6] = angles.desc();
    cusps[9] = angles.mc;

    cusps[10] = placidus_cusp(11, ramc, phi, eps, 1.0 / 3.0, SemiArc::Diurnal)?;
    cusps[11] = placidus_cusp(12, ramc, phi, eps, 2.0 / 3.0, SemiArc::Diurnal)?;
    cusps[1] = placidus_cusp(2, ramc, phi, eps, 2.0 / 3.0, SemiArc::Nocturnal)?;
    cusps[2] = placidus_cusp(3, ramc, phi, eps, 1.0 / 3.0, SemiArc::Nocturnal)?;

    cusps[4] = normalize_deg(cusps[10] + 180.0);
    cusps[5] = normalize_deg(cusps[11] + 180.0);
    cusps[7] = normalize_deg(cusps[1] + 180.0);
    cusps[8] = normalize_deg(cusps[2] + 180.0);

    check_cusps(&cusps)?;
    Ok(cusps)
}

/// Solve one intermediate cusp.
///
/// Diurnal: `α = RAMC + f·DSA(δ)`, measured from the MC toward the ASC.
/// Nocturnal: `α = RAMC + 180° − f·NSA(δ)`, measured from the IC back
/// toward the ASC. In both cases δ is the declination of the ecliptic point
/// at right ascension α, so the equation is iterated to a fixed point.
fn placidus_cusp(
    house: u8,
    ramc: f64,
    phi: f64,
    eps: f64,
    fraction: f64,
    arc: SemiArc,
) -> Result<f64, HouseSystemError> {
    let step = |semi: f64| match arc {
        SemiArc::Diurnal => ramc + fraction * semi,
        SemiArc::Nocturnal => ramc + PI - fraction * semi,
    };

    // Start from the equator's semi-arc (6h).
    let mut ra = step(PI / 2.0);
    for iter in 0..MAX_ITER {
        let dec = ecliptic_declination_rad(ra, eps);
        let dsa = diurnal_semi_arc_rad(dec, phi);
        let semi = match arc {
            SemiArc::Diurnal => dsa,
            SemiArc::Nocturnal => PI - dsa,
        };
        let next = step(semi);
        if !next.is_finite() {
            return Err(HouseSystemError::NonFinite {
                quantity: "house cusp",
            });
        }
        if (next - ra).abs() < TOL_RAD {
            trace!(house, iterations = iter + 1, "placidus cusp converged");
            return Ok(normalize_deg(
                ecliptic_longitude_from_ra_rad(next, eps).to_degrees(),
            ));
        }
        ra = next;
    }
    Err(HouseSystemError::NoConvergence { house })
}

/// Declination of the ecliptic point with right ascension `ra`:
/// `tan δ = sin α · tan ε`.
fn ecliptic_declination_rad(ra: f64, eps: f64) -> f64 {
    (ra.sin() * eps.tan()).atan()
}

/// Ecliptic longitude of the ecliptic point with right ascension `ra`:
/// `λ = atan2(sin α, cos α · cos ε)`.
fn ecliptic_longitude_from_ra_rad(ra: f64, eps: f64) -> f64 {
    f64::atan2(ra.sin(), ra.cos() * eps.cos())
}

/// Diurnal semi-arc `acos(−tan δ · tan φ)` in radians.
///
/// Inside the polar circles |tan δ · tan φ| < 1 for every ecliptic point;
/// the clamp only absorbs rounding.
fn diurnal_semi_arc_rad(dec: f64, phi: f64) -> f64 {
    (-(dec.tan() * phi.tan())).clamp(-1.0, 1.0).acos()
}

/// Every forward arc between consecutive cusps must be in (0°, 180°) and
/// the arcs must close the circle exactly once.
fn check_cusps(cusps: &[f64; 12]) -> Result<(), HouseSystemError> {
    let mut total = 0.0;
    for (i, &cusp) in cusps.iter().enumerate() {
        if !cusp.is_finite() {
            return Err(HouseSystemError::NonFinite {
                quantity: "house cusp",
            });
        }
        let arc = arc_forward(cusp, cusps[(i + 1) % 12]);
        if !(arc > 0.0 && arc < 180.0) {
            return Err(HouseSystemError::UnorderedCusps { house: i as u8 + 1 });
        }
        total += arc;
    }
    if (total - 360.0).abs() > 1e-6 {
        return Err(HouseSystemError::UnorderedCusps { house: 1 });
    }
    Ok(())
}

/// House number (1–12) containing `longitude_deg`.
///
/// House i spans `[cusp(i), cusp(i+1))`; when `cusp(i+1) < cusp(i)` the
/// interval wraps through 0° Aries. A well-formed cusp sequence always
/// matches; otherwise the lookup logs a warning and answers house 1.
pub fn house_of_longitude(longitude_deg: f64, cusps: &[f64; 12]) -> u8 {
    let lon = normalize_deg(longitude_deg);
    for i in 0..12 {
        let start = cusps[i];
        let end = cusps[(i + 1) % 12];
        let inside = if end < start {
            lon >= start || lon < end
        } else {
            lon >= start && lon < end
        };
        if inside {
            return i as u8 + 1;
        }
    }
    warn!(longitude = longitude_deg, "no house interval matched; defaulting to house 1");
    1
}
