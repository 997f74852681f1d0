//! A body's position in a computed chart.

use natal_ephem::Body;
use serde::Serialize;

use crate::zodiac::{ZodiacPosition, zodiac_position};

/// Geocentric ecliptic longitude of one body, with display metadata.
///
/// `symbol` and `color` are presentation-only and never used in a
/// calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetPosition {
    pub body: Body,
    pub name: &'static str,
    pub symbol: &'static str,
    pub color: &'static str,
    /// Degrees [0, 360).
    pub longitude: f64,
}

impl PlanetPosition {
    pub fn new(body: Body, longitude: f64) -> Self {
        Self {
            body,
            name: body.name(),
            symbol: body.symbol(),
            color: body.color(),
            longitude,
        }
    }

    pub fn zodiac(&self) -> ZodiacPosition {
        zodiac_position(self.longitude)
    }
}
