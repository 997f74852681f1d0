//! Error types for ephemeris evaluation.

use thiserror::Error;

use crate::body::Body;

/// Errors from evaluating a body's longitude.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Body name not recognized, or not carried by the provider.
    #[error("unsupported body: {0}")]
    UnsupportedBody(String),
    /// Kepler's equation did not converge.
    #[error("Kepler solve did not converge for {orbit} (e = {eccentricity})")]
    NoConvergence {
        orbit: &'static str,
        eccentricity: f64,
    },
    /// The model produced NaN or infinity.
    #[error("non-finite longitude for {body} at JD {jd}")]
    NonFinite { body: Body, jd: f64 },
}
