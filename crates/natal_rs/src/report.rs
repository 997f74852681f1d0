//! Plain-text rendering of a computed chart.

use std::fmt;

use natal_analysis::{AnalysisResult, disclaimer};
use natal_chart::{ALL_ELEMENTS, ChartResult, format_zodiac_position};

use crate::convenience::Reading;

/// Human-readable chart listing, optionally followed by its interpretation.
///
/// ```rust
/// use natal_rs::{BirthInput, ChartReport, compute_chart};
///
/// let chart = compute_chart(&BirthInput::new(2000, 1, 1, 12, 0, 0.0, 0.0, 0.0)).unwrap();
/// let text = ChartReport::new(&chart).to_string();
/// assert!(text.contains("2000-01-01 12:00 UTC+0"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChartReport<'a> {
    chart: &'a ChartResult,
    analysis: Option<&'a AnalysisResult>,
}

impl<'a> ChartReport<'a> {
    pub fn new(chart: &'a ChartResult) -> Self {
        Self {
            chart,
            analysis: None,
        }
    }

    pub fn with_analysis(mut self, analysis: &'a AnalysisResult) -> Self {
        self.analysis = Some(analysis);
        self
    }
}

impl<'a> From<&'a Reading> for ChartReport<'a> {
    fn from(reading: &'a Reading) -> Self {
        Self::new(&reading.chart).with_analysis(&reading.analysis)
    }
}

impl ChartReport<'_> {
    fn write_chart(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.chart;
        let input = &c.input;

        writeln!(f, "Input")?;
        if let Some(name) = &input.name {
            writeln!(f, "  Name        {name}")?;
        }
        if let Some(location) = &input.location {
            writeln!(f, "  Location    {location}")?;
        }
        writeln!(f, "  Date/time   {}", input.civil_time())?;
        writeln!(f, "  Latitude    {:.4}°", input.latitude)?;
        writeln!(f, "  Longitude   {:.4}°", input.longitude)?;

        writeln!(f)?;
        writeln!(f, "Sidereal time")?;
        writeln!(f, "  Julian Day  {:.5}", c.julian_day)?;
        writeln!(f, "  GMST        {:.4}°", c.gmst)?;
        writeln!(f, "  LST         {:.4}°", c.lst)?;
        writeln!(f, "  Obliquity   {:.4}°", c.obliquity)?;

        writeln!(f)?;
        writeln!(f, "Angles")?;
        writeln!(f, "  ASC  {:.2}° ({})", c.asc, format_zodiac_position(c.asc))?;
        writeln!(f, "  MC   {:.2}° ({})", c.mc, format_zodiac_position(c.mc))?;

        writeln!(f)?;
        writeln!(f, "Houses (Placidus)")?;
        for (i, cusp) in c.houses.iter().enumerate() {
            writeln!(f, "  House {:>2}  {}", i + 1, format_zodiac_position(*cusp))?;
        }

        writeln!(f)?;
        writeln!(f, "Planets")?;
        for p in &c.planets {
            writeln!(
                f,
                "  {} {:<8} {:>12}  house {}",
                p.symbol,
                p.name,
                format_zodiac_position(p.longitude),
                c.house_of(p.longitude)
            )?;
        }

        writeln!(f)?;
        writeln!(f, "Aspects")?;
        if c.aspects.is_empty() {
            writeln!(f, "  none")?;
        }
        for a in &c.aspects {
            writeln!(
                f,
                "  {} {} {} {} {}  {:.2}° (orb {:.2}°)",
                a.planet_a.symbol(),
                a.planet_a.name(),
                a.kind.symbol(),
                a.planet_b.symbol(),
                a.planet_b.name(),
                a.separation,
                a.orb
            )?;
        }
        Ok(())
    }

    fn write_analysis(&self, f: &mut fmt::Formatter<'_>, a: &AnalysisResult) -> fmt::Result {
        let p = &a.personality;
        writeln!(f)?;
        writeln!(f, "Personality")?;
        let scores: Vec<String> = ALL_ELEMENTS
            .iter()
            .map(|e| format!("{} {}", e.name(), p.element_scores.get(*e)))
            .collect();
        writeln!(f, "  Elements    {}", scores.join("  "))?;
        writeln!(f, "  Dominant    {} ({})", p.dominant.label, p.dominant.score)?;
        writeln!(f, "  Secondary   {} ({})", p.secondary.label, p.secondary.score)?;
        writeln!(f, "  Traits      {}", p.traits.join(", "))?;
        writeln!(f, "  {}", p.summary)?;

        let c = &a.career;
        writeln!(f)?;
        writeln!(f, "Career")?;
        writeln!(f, "  MC element  {}", c.mc_label)?;
        let fields: Vec<String> = c
            .fields
            .iter()
            .zip(&c.labels)
            .map(|(field, label)| {
                let score = c.scores.get(field).copied().unwrap_or(0);
                format!("{label} ({score})")
            })
            .collect();
        writeln!(f, "  Fields      {}", fields.join(", "))?;
        writeln!(f, "  {}", c.summary)?;

        writeln!(f)?;
        writeln!(f, "{}", disclaimer(a.locale))
    }
}

impl fmt::Display for ChartReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_chart(f)?;
        if let Some(analysis) = self.analysis {
            self.write_analysis(f, analysis)?;
        }
        Ok(())
    }
}
