use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::debug;

/// Config file name looked up in the working directory when `--config` is
/// not given.
pub const DEFAULT_CONFIG_PATH: &str = "minerva.toml";

/// Top-level Minerva configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MinervaConfig {
    /// HTTP acquisition settings.
    #[serde(default)]
    pub fetch: FetchToml,

    /// Estimation settings shared by all countries.
    #[serde(default)]
    pub model: ModelToml,

    /// Chart output settings.
    #[serde(default)]
    pub output: OutputToml,

    /// Countries to analyze, in order.
    #[serde(default = "default_countries")]
    pub country: Vec<CountryToml>,
}

impl Default for MinervaConfig {
    fn default() -> Self {
        Self {
            fetch: FetchToml::default(),
            model: ModelToml::default(),
            output: OutputToml::default(),
            country: default_countries(),
        }
    }
}

impl MinervaConfig {
    /// Countries to run, honouring an optional `--country` filter.
    pub fn select_countries(&self, only: Option<&str>) -> Result<Vec<&CountryToml>> {
        let Some(name) = only else {
            return Ok(self.country.iter().collect());
        };
        let selected: Vec<_> = self.country.iter().filter(|c| c.name == name).collect();
        if selected.is_empty() {
            let available: Vec<_> = self.country.iter().map(|c| c.name.as_str()).collect();
            bail!("country {name:?} not found in config (available: {available:?})");
        }
        Ok(selected)
    }
}

/// Load configuration from `path`.
///
/// The default path is allowed to be absent, in which case the built-in
/// configuration (both countries, standard model settings) applies. Any
/// other missing path is an error.
pub fn load(path: &Path) -> Result<MinervaConfig> {
    if path == Path::new(DEFAULT_CONFIG_PATH) && !path.exists() {
        debug!("no {DEFAULT_CONFIG_PATH} in working directory, using built-in defaults");
        return Ok(MinervaConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str).context("failed to parse TOML config")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchToml {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FetchToml {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    concat!("minerva/", env!("CARGO_PKG_VERSION")).to_string()
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelToml {
    #[serde(default = "default_max_lags")]
    pub max_lags: usize,
    #[serde(default = "default_significance")]
    pub significance: f64,
}

impl Default for ModelToml {
    fn default() -> Self {
        Self {
            max_lags: default_max_lags(),
            significance: default_significance(),
        }
    }
}

fn default_max_lags() -> usize {
    12
}
fn default_significance() -> f64 {
    0.05
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_chart_width")]
    pub chart_width: u32,
    #[serde(default = "default_chart_height")]
    pub chart_height: u32,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            chart_width: default_chart_width(),
            chart_height: default_chart_height(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("charts")
}
fn default_chart_width() -> u32 {
    960
}
fn default_chart_height() -> u32 {
    576
}

/// One country block: a variable list in Cholesky ordering plus the pair
/// examined by the IRF chart and the causality test.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountryToml {
    /// Label used in logs, report headers and the chart file name.
    pub name: String,
    /// First observation date requested from the providers (YYYY-MM-DD).
    pub start: String,
    /// IRF horizon in months.
    #[serde(default = "default_horizon")]
    pub horizon: usize,
    /// Shock variable.
    #[serde(default = "default_impulse")]
    pub impulse: String,
    /// Responding variable.
    #[serde(default = "default_response")]
    pub response: String,
    /// Series in Cholesky ordering; the indexed variables of the VAR.
    pub series: Vec<SeriesToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeriesToml {
    /// Column name in the panel.
    pub name: String,
    /// Data provider: `bcb` or `fred`.
    pub source: String,
    /// Provider-side series code.
    pub code: String,
    /// Stationarity transform: `level`, `diff` or `log_diff`.
    pub transform: String,
}

fn default_horizon() -> usize {
    12
}
fn default_impulse() -> String {
    "policy_rate".to_string()
}
fn default_response() -> String {
    "unemployment".to_string()
}

/// Built-in country table: Brazilian series from the BCB SGS API with a FRED
/// proxy for the Selic target, and the United States entirely from FRED.
fn default_countries() -> Vec<CountryToml> {
    vec![
        CountryToml {
            name: "brazil".to_string(),
            start: "2012-01-01".to_string(),
            horizon: 12,
            impulse: default_impulse(),
            response: default_response(),
            series: vec![
                series("inflation", "bcb", "433", "level"),
                series("activity", "bcb", "24363", "log_diff"),
                series("unemployment", "bcb", "24369", "diff"),
                series("policy_rate", "fred", "INTDSRBRM193N", "diff"),
            ],
        },
        CountryToml {
            name: "united_states".to_string(),
            start: "2000-01-01".to_string(),
            horizon: 24,
            impulse: default_impulse(),
            response: default_response(),
            series: vec![
                series("inflation", "fred", "CPIAUCSL", "log_diff"),
                series("activity", "fred", "INDPRO", "log_diff"),
                series("unemployment", "fred", "UNRATE", "diff"),
                series("policy_rate", "fred", "FEDFUNDS", "diff"),
            ],
        },
    ]
}

fn series(name: &str, source: &str, code: &str, transform: &str) -> SeriesToml {
    SeriesToml {
        name: name.to_string(),
        source: source.to_string(),
        code: code.to_string(),
        transform: transform.to_string(),
    }
}
