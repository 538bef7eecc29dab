//! Error type for the Shipyard API client.

use thiserror::Error;

/// Result alias for upstream API operations.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Errors raised by the Shipyard API client.
///
/// Tool handlers render these verbatim into their failure envelopes, so
/// every variant's `Display` is the upstream message alone, without a
/// status-code prefix. Status and body details stay available as fields
/// for logging.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No API key configured. Raised at client construction, never per call.
    #[error("Shipyard API key is not configured")]
    MissingCredentials,

    /// The configured base URL could not be parsed into a usable endpoint.
    #[error("invalid Shipyard API URL: {0}")]
    InvalidBaseUrl(String),

    /// Connection-level failure (DNS, refused, TLS, timeout).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response from the upstream API.
    ///
    /// The message is whatever the upstream sent; 4xx and 5xx are not
    /// distinguished here. Callers that need classification can inspect
    /// `status`, but none currently do.
    #[error("{message}")]
    Upstream { status: u16, message: String },

    /// The response body did not decode into the expected shape.
    #[error("unexpected response body: {message}")]
    Decode { message: String, body: String },
}

impl ApiError {
    /// Build an upstream error from a status code and message.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Returns `true` for 404 responses from upstream.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Upstream { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_is_verbatim() {
        let err = ApiError::upstream(422, "DNS validation failed");
        assert_eq!(err.to_string(), "DNS validation failed");
    }

    #[test]
    fn test_is_not_found() {
        assert!(ApiError::upstream(404, "Site not found").is_not_found());
        assert!(!ApiError::upstream(500, "boom").is_not_found());
    }
}
