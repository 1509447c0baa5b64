//! FRED (Federal Reserve Economic Data) CSV endpoint.
//!
//! The `fredgraph.csv` endpoint serves one series per request as a two
//! column CSV with a date column and a value column. Missing observations
//! are encoded as a single period.

use chrono::NaiveDate;
use tracing::debug;

use crate::error::FetchError;

const BASE_URL: &str = "https://fred.stlouisfed.org/graph/fredgraph.csv";
const DATE_FORMAT: &str = "%Y-%m-%d";
const MISSING_MARKER: &str = ".";

/// Builds the fredgraph CSV request URL for one series from `start` onwards.
pub(crate) fn series_url(code: &str, start: NaiveDate) -> String {
    format!("{BASE_URL}?id={code}&cosd={}", start.format(DATE_FORMAT))
}

/// Parses a fredgraph CSV body into dated observations.
///
/// Rows carrying the missing-value marker are skipped. The header row is
/// validated first so an HTML error page is rejected with a clear message
/// instead of a row-level parse failure.
///
/// # Errors
///
/// Returns [`FetchError::MalformedResponse`] if the header does not look
/// like a fredgraph CSV or a date or value does not parse.
pub(crate) fn parse_response(
    body: &str,
    series: &str,
) -> Result<Vec<(NaiveDate, f64)>, FetchError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(body.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| malformed(series, format!("unreadable header: {e}")))?
        .clone();
    let date_header = headers.get(0).unwrap_or("");
    if !matches!(date_header, "DATE" | "observation_date") || headers.len() < 2 {
        return Err(malformed(
            series,
            format!("unexpected header '{}'", headers.iter().collect::<Vec<_>>().join(",")),
        ));
    }

    let mut observations = Vec::new();
    let mut n_skipped = 0usize;
    for result in reader.records() {
        let record = result.map_err(|e| malformed(series, format!("bad CSV row: {e}")))?;
        let raw_date = record
            .get(0)
            .ok_or_else(|| malformed(series, "row without a date column".to_string()))?;
        let raw_value = record
            .get(1)
            .ok_or_else(|| malformed(series, format!("row {raw_date} without a value column")))?;

        let date = NaiveDate::parse_from_str(raw_date, DATE_FORMAT)
            .map_err(|e| malformed(series, format!("bad date '{raw_date}': {e}")))?;
        let trimmed = raw_value.trim();
        if trimmed == MISSING_MARKER || trimmed.is_empty() {
            n_skipped += 1;
            continue;
        }
        let value: f64 = trimmed
            .parse()
            .map_err(|_| malformed(series, format!("bad value '{raw_value}' on {raw_date}")))?;
        observations.push((date, value));
    }

    if n_skipped > 0 {
        debug!(series, n_skipped, "skipped FRED rows with missing values");
    }
    Ok(observations)
}

fn malformed(series: &str, detail: String) -> FetchError {
    FetchError::MalformedResponse {
        series: series.to_string(),
        detail,
    }
}
