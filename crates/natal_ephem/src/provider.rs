//! Ephemeris provider seam and the built-in simplified model.

use tracing::trace;

use crate::body::Body;
use crate::error::EphemerisError;
use crate::kepler::planet_longitude_deg;
use crate::moon::moon_longitude_deg;
use crate::sun::sun_longitude_deg;

/// Source of geocentric ecliptic longitudes.
///
/// A higher-precision provider can replace [`SimplifiedEphemeris`] without
/// touching the chart assembler or interpretation code.
pub trait EphemerisProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether this provider carries `body`.
    fn supports(&self, body: Body) -> bool;

    /// Longitude in degrees [0, 360) referred to the equinox of date.
    fn longitude(&self, body: Body, jd: f64) -> Result<f64, EphemerisError>;

    /// Longitudes for several bodies at one instant, in input order.
    fn longitudes(&self, bodies: &[Body], jd: f64) -> Result<Vec<(Body, f64)>, EphemerisError> {
        bodies
            .iter()
            .map(|&b| self.longitude(b, jd).map(|lon| (b, lon)))
            .collect()
    }
}

/// Lightweight analytical model covering Sun through Pluto.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimplifiedEphemeris;

impl EphemerisProvider for SimplifiedEphemeris {
    fn name(&self) -> &'static str {
        "simplified"
    }

    fn supports(&self, _body: Body) -> bool {
        true
    }

    fn longitude(&self, body: Body, jd: f64) -> Result<f64, EphemerisError> {
        let lon = match body {
            Body::Sun => sun_longitude_deg(jd),
            Body::Moon => moon_longitude_deg(jd),
            _ => planet_longitude_deg(body, jd)?,
        };
        if !lon.is_finite() {
            return Err(EphemerisError::NonFinite { body, jd });
        }
        trace!(body = body.name(), jd, lon, "body longitude");
        Ok(lon)
    }
}
