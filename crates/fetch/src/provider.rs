//! Provider abstraction and the HTTP implementation.

use chrono::NaiveDate;
use minerva_series::MonthlySeries;
use tracing::{debug, info};

use crate::bcb;
use crate::client::{ClientConfig, HttpClient};
use crate::error::FetchError;
use crate::fred;

// ---------------------------------------------------------------------------
// SourceKind
// ---------------------------------------------------------------------------

/// Upstream source a series is published by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// Banco Central do Brasil SGS, addressed by a numeric series code.
    Bcb {
        /// SGS series code.
        code: u32,
    },
    /// FRED, addressed by a mnemonic series id.
    Fred {
        /// FRED series id, for example `UNRATE`.
        code: String,
    },
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::Bcb { code } => write!(f, "BCB SGS {code}"),
            SourceKind::Fred { code } => write!(f, "FRED {code}"),
        }
    }
}

// ---------------------------------------------------------------------------
// SeriesRequest
// ---------------------------------------------------------------------------

/// One series to download: the logical name it carries through the
/// pipeline, the source it is published by, and the first date of interest.
#[derive(Debug, Clone)]
pub struct SeriesRequest {
    name: String,
    source: SourceKind,
    start: NaiveDate,
}

impl SeriesRequest {
    /// Creates a request for one series.
    pub fn new(name: impl Into<String>, source: SourceKind, start: NaiveDate) -> Self {
        Self {
            name: name.into(),
            source,
            start,
        }
    }

    /// Returns the logical series name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the upstream source.
    pub fn source(&self) -> &SourceKind {
        &self.source
    }

    /// Returns the first date of interest.
    pub fn start(&self) -> NaiveDate {
        self.start
    }
}

// ---------------------------------------------------------------------------
// SeriesProvider
// ---------------------------------------------------------------------------

/// Source of monthly observations.
///
/// The analysis pipeline only depends on this trait, so tests can substitute
/// an in-memory provider for the HTTP one.
pub trait SeriesProvider {
    /// Downloads one series as named monthly observations.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] tagged with the series name when the series
    /// cannot be retrieved or decoded.
    fn fetch(&self, request: &SeriesRequest) -> Result<MonthlySeries, FetchError>;
}

// ---------------------------------------------------------------------------
// HttpProvider
// ---------------------------------------------------------------------------

/// Provider backed by the public BCB and FRED endpoints.
#[derive(Debug)]
pub struct HttpProvider {
    client: HttpClient,
}

impl HttpProvider {
    /// Creates a provider with the given transport configuration.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: HttpClient::new(config),
        }
    }
}

impl SeriesProvider for HttpProvider {
    fn fetch(&self, request: &SeriesRequest) -> Result<MonthlySeries, FetchError> {
        let name = request.name();
        let observations = match request.source() {
            SourceKind::Bcb { code } => {
                let url = bcb::series_url(*code, request.start());
                debug!(series = name, %url, "requesting BCB SGS series");
                let body = self.client.get_text(&url, name)?;
                bcb::parse_response(&body, name)?
            }
            SourceKind::Fred { code } => {
                let url = fred::series_url(code, request.start());
                debug!(series = name, %url, "requesting FRED series");
                let body = self.client.get_text(&url, name)?;
                fred::parse_response(&body, name)?
            }
        };

        if observations.is_empty() {
            return Err(FetchError::EmptyResponse {
                series: name.to_string(),
            });
        }

        info!(
            series = name,
            source = %request.source(),
            n_obs = observations.len(),
            "downloaded series"
        );
        Ok(MonthlySeries::from_observations(name, observations))
    }
}
