//! Rule-based interpretation of a computed chart.
//!
//! Two independent scoring passes over a [`ChartResult`](natal_chart::ChartResult):
//! - Personality: element scores from the Ascendant and each body's sign
//! - Career: field scores from the MC element, the 10th house and the
//!   angular houses
//!
//! All rule tables are `const` data. Scoring never depends on the locale;
//! only labels and summary sentences do.

pub mod analysis;
pub mod career;
pub mod element;
pub mod locale;
pub mod personality;
pub mod text;

pub use analysis::{
    AnalysisOptions, AnalysisResult, CareerAnalysis, ElementDetail, PersonalityAnalysis,
    analyze_chart, analyze_chart_with,
};
pub use career::{ALL_CAREER_FIELDS, CareerField, MAX_CAREER_FIELDS};
pub use element::{ElementProfile, element_profile};
pub use locale::Locale;
pub use personality::ElementScores;
pub use text::disclaimer;

pub use natal_chart::Element;
