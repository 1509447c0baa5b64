//! HTTP client configuration and the thin transport wrapper.

use std::time::Duration;

use crate::error::FetchError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_USER_AGENT: &str = concat!("minerva/", env!("CARGO_PKG_VERSION"));

// ---------------------------------------------------------------------------
// ClientConfig
// ---------------------------------------------------------------------------

/// Configuration for the HTTP transport behind a provider.
///
/// Use the builder methods (`with_*`) to customise the timeout and the
/// user-agent string. The [`Default`] implementation uses a 30 second
/// timeout, which covers both connecting and reading the response.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Overall timeout applied to every request.
    timeout: Duration,
    /// User-agent header sent with every request.
    user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Set the overall per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user-agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the configured user-agent string.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

// ---------------------------------------------------------------------------
// HttpClient
// ---------------------------------------------------------------------------

/// Blocking HTTP transport shared by all providers.
#[derive(Debug)]
pub(crate) struct HttpClient {
    agent: ureq::Agent,
}

impl HttpClient {
    pub(crate) fn new(config: &ClientConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build();
        Self { agent }
    }

    /// Fetch `url` and return the response body as text.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Status`] for a non-success HTTP status and
    /// [`FetchError::Request`] for transport failures, both tagged with
    /// `series`.
    pub(crate) fn get_text(&self, url: &str, series: &str) -> Result<String, FetchError> {
        match self.agent.get(url).call() {
            Ok(response) => response.into_string().map_err(|e| FetchError::Request {
                series: series.to_string(),
                reason: e.to_string(),
            }),
            Err(ureq::Error::Status(code, _)) => Err(FetchError::Status {
                series: series.to_string(),
                code,
            }),
            Err(e) => Err(FetchError::Request {
                series: series.to_string(),
                reason: e.to_string(),
            }),
        }
    }
}
