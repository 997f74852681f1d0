//! Interpretation result and entry points.

use std::collections::BTreeMap;

use natal_chart::{ChartResult, Element};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::career::{CareerField, score_careers};
use crate::element::element_profile;
use crate::locale::Locale;
use crate::personality::{ElementScores, score_elements};
use crate::text::{career_summary, personality_summary};

/// Presentation options. Scoring is independent of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisOptions {
    pub locale: Locale,
}

/// An element with its localized label and score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementDetail {
    pub element: Element,
    pub label: &'static str,
    pub score: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalityAnalysis {
    pub element_scores: ElementScores,
    pub dominant: ElementDetail,
    pub secondary: ElementDetail,
    /// First two traits of the dominant element, then of the secondary.
    pub traits: Vec<&'static str>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerAnalysis {
    /// Element of the MC's sign.
    pub mc_element: Element,
    pub mc_label: &'static str,
    /// Up to five fields, highest score first.
    pub fields: Vec<CareerField>,
    /// Localized labels, parallel to `fields`.
    pub labels: Vec<&'static str>,
    /// Score of each entry in `fields`.
    pub scores: BTreeMap<CareerField, u32>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub locale: Locale,
    pub personality: PersonalityAnalysis,
    pub career: CareerAnalysis,
}

/// Interpret a chart with default (English) options.
pub fn analyze_chart(chart: &ChartResult) -> AnalysisResult {
    analyze_chart_with(chart, &AnalysisOptions::default())
}

/// Interpret a chart. Total for any chart produced by the assembler.
pub fn analyze_chart_with(chart: &ChartResult, options: &AnalysisOptions) -> AnalysisResult {
    let locale = options.locale;
    let personality = analyze_personality(chart, locale);
    let career = analyze_career(chart, locale);
    debug!(
        dominant = personality.dominant.element.name(),
        secondary = personality.secondary.element.name(),
        mc_element = career.mc_element.name(),
        fields = career.fields.len(),
        "chart analysis"
    );
    AnalysisResult {
        locale,
        personality,
        career,
    }
}

fn detail(element: Element, scores: &ElementScores, locale: Locale) -> ElementDetail {
    ElementDetail {
        element,
        label: element_profile(element, locale).label,
        score: scores.get(element),
    }
}

fn analyze_personality(chart: &ChartResult, locale: Locale) -> PersonalityAnalysis {
    let scores = score_elements(chart);
    let ranked = scores.ranked();
    let (dominant, secondary) = (ranked[0], ranked[1]);

    let traits = element_profile(dominant, locale).traits[..2]
        .iter()
        .chain(&element_profile(secondary, locale).traits[..2])
        .copied()
        .collect();

    PersonalityAnalysis {
        element_scores: scores,
        dominant: detail(dominant, &scores, locale),
        secondary: detail(secondary, &scores, locale),
        traits,
        summary: personality_summary(dominant, secondary, locale),
    }
}

fn analyze_career(chart: &ChartResult, locale: Locale) -> CareerAnalysis {
    let (mc_element, ranked) = score_careers(chart);
    let fields: Vec<CareerField> = ranked.iter().map(|(f, _)| *f).collect();
    CareerAnalysis {
        mc_element,
        mc_label: element_profile(mc_element, locale).label,
        labels: fields.iter().map(|f| f.label(locale)).collect(),
        scores: ranked.into_iter().collect(),
        summary: career_summary(&fields, mc_element, locale),
        fields,
    }
}
