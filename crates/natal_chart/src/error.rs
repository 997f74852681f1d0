//! Error types for chart computation.

use natal_ephem::EphemerisError;
use natal_time::TimeError;
use thiserror::Error;

/// Malformed or out-of-range birth input. Raised before any computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error(transparent)]
    Time(#[from] TimeError),
    #[error("latitude {0}° outside -90..=90")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0}° outside -180..=180")]
    LongitudeOutOfRange(f64),
}

impl ValidationError {
    /// Name of the offending input field.
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Time(e) => e.field(),
            Self::LatitudeOutOfRange(_) => "latitude",
            Self::LongitudeOutOfRange(_) => "longitude",
        }
    }
}

/// Angles or house cusps cannot be computed for this location and time.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum HouseSystemError {
    /// At a geographic pole the horizon and the ecliptic have no unique
    /// intersection.
    #[error("Ascendant undefined at latitude {latitude}°")]
    PolarSingularity { latitude: f64 },
    /// Part of the ecliptic is circumpolar; Placidus semi-arcs vanish.
    #[error("Placidus houses undefined at latitude {latitude}° (limit ±{limit:.4}°)")]
    BeyondPolarCircle { latitude: f64, limit: f64 },
    /// Semi-arc iteration for an intermediate cusp did not settle.
    #[error("Placidus cusp {house} did not converge")]
    NoConvergence { house: u8 },
    /// Arithmetic produced NaN or infinity.
    #[error("non-finite {quantity}")]
    NonFinite { quantity: &'static str },
    /// Cusps are not in strictly increasing zodiacal order.
    #[error("house cusps out of order at house {house}")]
    UnorderedCusps { house: u8 },
}

/// Error returned by chart computation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("house system: {0}")]
    HouseSystem(#[from] HouseSystemError),
    #[error("ephemeris: {0}")]
    Ephemeris(#[from] EphemerisError),
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Validation(ValidationError::Time(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_field_delegates_to_time() {
        let e = ValidationError::from(TimeError::InvalidHour(24));
        assert_eq!(e.field(), "hour");
        assert_eq!(ValidationError::LatitudeOutOfRange(91.0).field(), "latitude");
        assert_eq!(ValidationError::LongitudeOutOfRange(-181.0).field(), "longitude");
    }

    #[test]
    fn chart_error_wraps_layers() {
        let e: ChartError = TimeError::InvalidMonth(0).into();
        assert!(matches!(e, ChartError::Validation(ValidationError::Time(_))));
        assert_eq!(e.to_string(), "invalid input: month 0 outside 1-12");

        let e: ChartError = HouseSystemError::NoConvergence { house: 11 }.into();
        assert_eq!(e.to_string(), "house system: Placidus cusp 11 did not converge");
    }
}
