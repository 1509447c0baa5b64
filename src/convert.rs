//! Pure conversion functions: TOML config structs -> crate API config types.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use minerva_fetch::{ClientConfig, SeriesRequest, SourceKind};
use minerva_report::PlotStyle;
use minerva_series::Transform;

use crate::config::{CountryToml, FetchToml, OutputToml};

/// Parses a transform name string into the corresponding enum variant.
pub fn parse_transform(s: &str) -> Result<Transform> {
    match s.to_lowercase().as_str() {
        "level" => Ok(Transform::Level),
        "diff" => Ok(Transform::Difference),
        "log_diff" => Ok(Transform::LogDifference),
        other => bail!("unknown transform: {other:?}"),
    }
}

/// Parses a provider/code pair into a [`SourceKind`].
///
/// BCB SGS codes are numeric; FRED codes pass through as-is.
pub fn parse_source(source: &str, code: &str) -> Result<SourceKind> {
    match source.to_lowercase().as_str() {
        "bcb" => {
            let code = code
                .parse::<u32>()
                .with_context(|| format!("BCB series code must be numeric, got {code:?}"))?;
            Ok(SourceKind::Bcb { code })
        }
        "fred" => Ok(SourceKind::Fred {
            code: code.to_string(),
        }),
        other => bail!("unknown series source: {other:?}"),
    }
}

/// Parses a `YYYY-MM-DD` start date.
pub fn parse_start(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid start date {s:?}, expected YYYY-MM-DD"))
}

/// Builds a [`ClientConfig`] from the TOML fetch configuration.
pub fn build_client_config(fetch: &FetchToml) -> ClientConfig {
    ClientConfig::default()
        .with_timeout(Duration::from_secs(fetch.timeout_secs))
        .with_user_agent(&fetch.user_agent)
}

/// Builds the dated provider requests for one country, in series order.
pub fn build_requests(country: &CountryToml) -> Result<Vec<SeriesRequest>> {
    let start = parse_start(&country.start)
        .with_context(|| format!("country {:?}", country.name))?;
    country
        .series
        .iter()
        .map(|s| {
            let source = parse_source(&s.source, &s.code)
                .with_context(|| format!("series {:?}", s.name))?;
            Ok(SeriesRequest::new(&s.name, source, start))
        })
        .collect()
}

/// Builds the per-column transform list in panel column order.
pub fn build_transforms(country: &CountryToml) -> Result<Vec<Transform>> {
    country
        .series
        .iter()
        .map(|s| parse_transform(&s.transform).with_context(|| format!("series {:?}", s.name)))
        .collect()
}

/// Builds a [`PlotStyle`] from the TOML output configuration.
pub fn build_plot_style(output: &OutputToml) -> PlotStyle {
    PlotStyle::default()
        .with_width(output.chart_width)
        .with_height(output.chart_height)
}
