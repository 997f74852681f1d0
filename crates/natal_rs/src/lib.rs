//! Convenience wrapper for the natal chart engine.
//!
//! One import gives the whole pipeline: birth data in, chart and
//! interpretation out.
//!
//! # Quick start
//!
//! ```rust
//! use natal_rs::*;
//!
//! let input = BirthInput::new(1990, 7, 4, 8, 5, 7.0, 21.0285, 105.8542);
//! let reading = read_chart(&input).unwrap();
//! println!("ASC {}", format_zodiac_position(reading.chart.asc));
//! println!("{}", reading.analysis.personality.summary);
//! ```

pub mod convenience;
pub mod report;

pub use convenience::{Reading, read_chart, read_chart_with};
pub use report::ChartReport;

pub use natal_analysis::{
    AnalysisOptions, AnalysisResult, CareerAnalysis, CareerField, ElementDetail, ElementScores,
    Locale, PersonalityAnalysis, analyze_chart, analyze_chart_with, disclaimer,
};
pub use natal_chart::{
    ALL_BODIES, ALL_SIGNS, Angles, Aspect, AspectKind, BirthInput, Body, ChartAssembler,
    ChartConfig, ChartError, ChartResult, Element, EphemerisError, EphemerisProvider,
    HouseSystemError, ObliquityModel, PlanetPosition, SimplifiedEphemeris, ValidationError,
    ZodiacPosition, ZodiacSign, compute_chart, format_zodiac_position, get_sign_degree,
    get_zodiac_sign, house_of_longitude, zodiac_position,
};
pub use natal_time::{SUPPORTED_YEARS, TimeError, UTC_OFFSET_RANGE_HOURS};
