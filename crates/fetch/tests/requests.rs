//! Provider-seam tests for minerva-fetch.
//!
//! The HTTP endpoints themselves are not exercised here; these tests pin
//! down the request surface and the trait seam the pipeline depends on.

use chrono::NaiveDate;
use minerva_fetch::{
    ClientConfig, FetchError, HttpProvider, SeriesProvider, SeriesRequest, SourceKind,
};
use minerva_series::MonthlySeries;

/// Minimal in-memory provider: one canned series, errors for the rest.
struct CannedProvider {
    name: String,
}

impl SeriesProvider for CannedProvider {
    fn fetch(&self, request: &SeriesRequest) -> Result<MonthlySeries, FetchError> {
        if request.name() != self.name {
            return Err(FetchError::EmptyResponse {
                series: request.name().to_string(),
            });
        }
        let observations =
            (1..=3).map(|m| (NaiveDate::from_ymd_opt(2020, m, 1).unwrap(), f64::from(m)));
        Ok(MonthlySeries::from_observations(request.name(), observations))
    }
}

fn request_for(name: &str) -> SeriesRequest {
    SeriesRequest::new(
        name,
        SourceKind::Fred {
            code: "UNRATE".to_string(),
        },
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
    )
}

#[test]
fn pipeline_code_can_swap_providers_through_the_trait() {
    let canned = CannedProvider {
        name: "unemployment".to_string(),
    };
    let provider: &dyn SeriesProvider = &canned;

    let series = provider.fetch(&request_for("unemployment")).unwrap();
    assert_eq!(series.name(), "unemployment");
    assert_eq!(series.len(), 3);

    let err = provider.fetch(&request_for("inflation")).unwrap_err();
    assert!(matches!(err, FetchError::EmptyResponse { .. }));
    assert!(err.to_string().contains("inflation"));
}

#[test]
fn http_provider_is_object_safe() {
    let provider = HttpProvider::new(&ClientConfig::default());
    let _object: &dyn SeriesProvider = &provider;
}

#[test]
fn requests_round_trip_their_parts() {
    let request = request_for("unemployment");
    assert_eq!(request.name(), "unemployment");
    assert_eq!(request.source().to_string(), "FRED UNRATE");
    assert_eq!(
        request.start(),
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
    );
}
