//! Banco Central do Brasil SGS endpoint.
//!
//! The SGS API serves one series per request as a JSON array of
//! `{"data": "dd/mm/yyyy", "valor": "..."}` records, with values encoded
//! as strings.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use crate::error::FetchError;

const BASE_URL: &str = "https://api.bcb.gov.br/dados/serie";
const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Deserialize)]
struct SgsObservation {
    data: String,
    valor: String,
}

/// Builds the SGS request URL for one series from `start` onwards.
pub(crate) fn series_url(code: u32, start: NaiveDate) -> String {
    format!(
        "{BASE_URL}/bcdata.sgs.{code}/dados?formato=json&dataInicial={}",
        start.format(DATE_FORMAT)
    )
}

/// Parses an SGS JSON body into dated observations.
///
/// Records with an empty value field are skipped; the API uses them for
/// months without a published figure.
///
/// # Errors
///
/// Returns [`FetchError::MalformedResponse`] if the body is not a JSON
/// array of records or a date or value does not parse.
pub(crate) fn parse_response(
    body: &str,
    series: &str,
) -> Result<Vec<(NaiveDate, f64)>, FetchError> {
    let records: Vec<SgsObservation> =
        serde_json::from_str(body).map_err(|e| FetchError::MalformedResponse {
            series: series.to_string(),
            detail: format!("expected a JSON array of observations: {e}"),
        })?;

    let mut observations = Vec::with_capacity(records.len());
    let mut n_skipped = 0usize;
    for record in records {
        let date = NaiveDate::parse_from_str(&record.data, DATE_FORMAT).map_err(|e| {
            FetchError::MalformedResponse {
                series: series.to_string(),
                detail: format!("bad date '{}': {e}", record.data),
            }
        })?;
        let raw = record.valor.trim();
        if raw.is_empty() {
            n_skipped += 1;
            continue;
        }
        let value: f64 = raw.parse().map_err(|_| FetchError::MalformedResponse {
            series: series.to_string(),
            detail: format!("bad value '{}' on {}", record.valor, record.data),
        })?;
        observations.push((date, value));
    }

    if n_skipped > 0 {
        debug!(series, n_skipped, "skipped SGS records with empty values");
    }
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encodes_code_and_start_date() {
        let start = NaiveDate::from_ymd_opt(2012, 1, 1).unwrap();
        assert_eq!(
            series_url(433, start),
            "https://api.bcb.gov.br/dados/serie/bcdata.sgs.433/dados?formato=json&dataInicial=01/01/2012"
        );
    }

    #[test]
    fn parses_observations() {
        let body = r#"[
            {"data": "01/01/2012", "valor": "0.56"},
            {"data": "01/02/2012", "valor": "0.45"}
        ]"#;
        let obs = parse_response(body, "inflation").unwrap();
        assert_eq!(obs.len(), 2);
        assert_eq!(obs[0].0, NaiveDate::from_ymd_opt(2012, 1, 1).unwrap());
        assert_eq!(obs[0].1, 0.56);
        assert_eq!(obs[1].1, 0.45);
    }

    #[test]
    fn skips_empty_values() {
        let body = r#"[
            {"data": "01/01/2012", "valor": "0.56"},
            {"data": "01/02/2012", "valor": ""}
        ]"#;
        let obs = parse_response(body, "inflation").unwrap();
        assert_eq!(obs.len(), 1);
    }

    #[test]
    fn rejects_non_array_body() {
        let err = parse_response("{\"erro\": \"serie inexistente\"}", "inflation").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
        assert!(err.to_string().contains("inflation"));
    }

    #[test]
    fn rejects_bad_date() {
        let body = r#"[{"data": "2012-01-01", "valor": "0.56"}]"#;
        let err = parse_response(body, "inflation").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
        assert!(err.to_string().contains("2012-01-01"));
    }

    #[test]
    fn rejects_bad_value() {
        let body = r#"[{"data": "01/01/2012", "valor": "n/d"}]"#;
        let err = parse_response(body, "inflation").unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse { .. }));
        assert!(err.to_string().contains("n/d"));
    }

    #[test]
    fn empty_array_parses_to_no_observations() {
        let obs = parse_response("[]", "inflation").unwrap();
        assert!(obs.is_empty());
    }
}
