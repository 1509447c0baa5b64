//! Error types for minerva-fetch.

/// Error type for all fallible operations in the minerva-fetch crate.
///
/// Every variant carries the logical series name so a failure in a multi
/// series download points at the series that caused it. Any error aborts the
/// download; there is no partial-result path.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Returned when the request could not be completed at the transport
    /// level, including connection failures and timeouts.
    #[error("request for series '{series}' failed: {reason}")]
    Request {
        /// Logical name of the series being fetched.
        series: String,
        /// Description of the underlying transport failure.
        reason: String,
    },

    /// Returned when the provider answered with a non-success HTTP status.
    #[error("series '{series}': provider returned HTTP status {code}")]
    Status {
        /// Logical name of the series being fetched.
        series: String,
        /// HTTP status code of the response.
        code: u16,
    },

    /// Returned when the response parsed cleanly but contained no usable
    /// observations.
    #[error("series '{series}': provider returned no observations")]
    EmptyResponse {
        /// Logical name of the series being fetched.
        series: String,
    },

    /// Returned when the response body does not match the provider's
    /// documented format.
    #[error("series '{series}': malformed response: {detail}")]
    MalformedResponse {
        /// Logical name of the series being fetched.
        series: String,
        /// Description of the format violation.
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_request() {
        let err = FetchError::Request {
            series: "inflation".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "request for series 'inflation' failed: connection refused"
        );
    }

    #[test]
    fn display_status() {
        let err = FetchError::Status {
            series: "activity".to_string(),
            code: 404,
        };
        assert_eq!(
            err.to_string(),
            "series 'activity': provider returned HTTP status 404"
        );
    }

    #[test]
    fn display_empty_response() {
        let err = FetchError::EmptyResponse {
            series: "unemployment".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "series 'unemployment': provider returned no observations"
        );
    }

    #[test]
    fn display_malformed_response() {
        let err = FetchError::MalformedResponse {
            series: "policy_rate".to_string(),
            detail: "expected a JSON array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "series 'policy_rate': malformed response: expected a JSON array"
        );
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<FetchError>();
    }
}
