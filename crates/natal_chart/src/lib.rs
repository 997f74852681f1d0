//! Natal chart computation.
//!
//! This crate turns a [`BirthInput`] into an immutable [`ChartResult`]:
//! - Ascendant and Midheaven from local sidereal time ([`angles`])
//! - Placidus house cusps and planet-in-house lookup ([`placidus`])
//! - Zodiac sign/degree formatting ([`zodiac`])
//! - Major aspects between bodies ([`aspects`])
//! - Orchestration through [`ChartAssembler`] ([`chart`])

pub mod angles;
pub mod aspects;
pub mod chart;
pub mod error;
pub mod input;
pub mod placidus;
pub mod planet;
pub mod zodiac;

pub use angles::{Angles, angles_from_lst, ascendant_deg, midheaven_deg};
pub use aspects::{ALL_ASPECTS, Aspect, AspectKind, aspect_between, detect_aspects};
pub use chart::{ChartAssembler, ChartConfig, ChartResult, compute_chart};
pub use error::{ChartError, HouseSystemError, ValidationError};
pub use input::BirthInput;
pub use placidus::{ANGULAR_HOUSES, house_of_longitude, placidus_cusps};
pub use planet::PlanetPosition;
pub use zodiac::{
    ALL_ELEMENTS, ALL_SIGNS, Element, ZodiacPosition, ZodiacSign, format_zodiac_position,
    get_sign_degree, get_zodiac_sign, zodiac_position,
};

pub use natal_ephem::{ALL_BODIES, Body, EphemerisError, EphemerisProvider, SimplifiedEphemeris};
pub use natal_frames::ObliquityModel;
