//! Angle and frame helpers shared by the chart engine.
//!
//! Provides degree normalization and arc arithmetic, the obliquity of the
//! ecliptic, and general precession in longitude.

pub mod angle;
pub mod obliquity;
pub mod precession;

pub use angle::{angular_separation, arc_forward, normalize_deg};
pub use obliquity::{OBLIQUITY_J2000_DEG, ObliquityModel, mean_obliquity_deg};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
