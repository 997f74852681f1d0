//! One-call chart plus interpretation.

use natal_analysis::{AnalysisOptions, AnalysisResult, analyze_chart_with, disclaimer};
use natal_chart::{
    BirthInput, ChartAssembler, ChartConfig, ChartError, ChartResult, SimplifiedEphemeris,
};
use serde::Serialize;

/// A chart, its interpretation and the notice that must accompany it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub chart: ChartResult,
    pub analysis: AnalysisResult,
    pub disclaimer: &'static str,
}

/// Compute and interpret a chart with the default configuration.
pub fn read_chart(input: &BirthInput) -> Result<Reading, ChartError> {
    read_chart_with(input, &ChartConfig::default(), &AnalysisOptions::default())
}

/// Compute and interpret a chart with the built-in ephemeris.
pub fn read_chart_with(
    input: &BirthInput,
    config: &ChartConfig,
    options: &AnalysisOptions,
) -> Result<Reading, ChartError> {
    let assembler = ChartAssembler::new(SimplifiedEphemeris, config.clone());
    let chart = assembler.compute(input)?;
    let analysis = analyze_chart_with(&chart, options);
    Ok(Reading {
        chart,
        analysis,
        disclaimer: disclaimer(options.locale),
    })
}
