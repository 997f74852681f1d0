//! Configuration file handling.
//!
//! A `natal.toml` file has four sections, each optional:
//!
//! ```toml
//! [chart]
//! bodies = ["sun", "moon", "mercury"]
//! obliquity = "fixed"   # or "mean"
//!
//! [analysis]
//! locale = "en"         # or "vi"
//!
//! [output]
//! format = "text"       # or "json"
//!
//! [log]
//! level = "warn"
//! ```
//!
//! Rule tables (element weights, orbs, career fields) are not configurable.

mod error;

use std::fmt;
use std::path::Path;

use natal_analysis::{AnalysisOptions, Locale};
use natal_chart::{ALL_BODIES, Body, ChartConfig, ObliquityModel};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing::level_filters::LevelFilter;

pub use error::ConfigError;

/// File name looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "natal.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NatalConfig {
    #[serde(default)]
    pub chart: ChartSection,
    #[serde(default)]
    pub analysis: AnalysisSection,
    #[serde(default)]
    pub output: OutputSection,
    #[serde(default)]
    pub log: LogSection,
}

/// Bodies to place and the obliquity model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSection {
    /// Body names, case-insensitive.
    #[serde(default = "default_bodies")]
    pub bodies: Vec<String>,
    #[serde(default)]
    pub obliquity: ObliquityModel,
}

impl Default for ChartSection {
    fn default() -> Self {
        Self {
            bodies: default_bodies(),
            obliquity: ObliquityModel::default(),
        }
    }
}

fn default_bodies() -> Vec<String> {
    ALL_BODIES
        .iter()
        .map(|b| b.name().to_ascii_lowercase())
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSection {
    #[serde(default)]
    pub locale: Locale,
}

/// How the CLI prints results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    pub const fn level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::OFF,
            Self::Error => LevelFilter::ERROR,
            Self::Warn => LevelFilter::WARN,
            Self::Info => LevelFilter::INFO,
            Self::Debug => LevelFilter::DEBUG,
            Self::Trace => LevelFilter::TRACE,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSection {
    #[serde(default)]
    pub level: LogLevel,
}

impl NatalConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `natal.toml` from `dir` if it exists.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>, ConfigError> {
        let path = dir.join(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Ok(Some(Self::load(&path)?))
        } else {
            Ok(None)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.bodies()?;
        Ok(config)
    }

    /// The default configuration as TOML text.
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// Parsed `[chart] bodies`, in file order.
    pub fn bodies(&self) -> Result<Vec<Body>, ConfigError> {
        self.chart
            .bodies
            .iter()
            .map(|name| {
                name.parse::<Body>()
                    .map_err(|_| ConfigError::UnknownBody(name.clone()))
            })
            .collect()
    }

    pub fn chart_config(&self) -> Result<ChartConfig, ConfigError> {
        Ok(ChartConfig::with_bodies(self.bodies()?).with_obliquity(self.chart.obliquity))
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            locale: self.analysis.locale,
        }
    }
}
