//! Ecliptic longitudes of the Sun, Moon and planets.
//!
//! The built-in [`SimplifiedEphemeris`] is a lightweight analytical model
//! intended for illustrative charts, not professional-grade positions:
//!
//! | Body            | Model                                           | Typical error |
//! |-----------------|-------------------------------------------------|---------------|
//! | Sun             | Meeus ch. 25 (low accuracy), apparent longitude | ~0.01°        |
//! | Moon            | Meeus ch. 47, principal periodic terms          | ~0.05°        |
//! | Mercury … Pluto | JPL mean Keplerian elements (1800–2050)         | < 1°          |
//!
//! Longitudes are geocentric, referred to the mean equinox of date, in
//! [0, 360). Other providers plug in through [`EphemerisProvider`].

pub mod body;
pub mod error;
pub mod kepler;
pub mod moon;
pub mod provider;
pub mod sun;

pub use body::{ALL_BODIES, Body};
pub use error::EphemerisError;
pub use kepler::{ElementSet, MeanElements, solve_kepler};
pub use moon::moon_longitude_deg;
pub use provider::{EphemerisProvider, SimplifiedEphemeris};
pub use sun::sun_longitude_deg;
