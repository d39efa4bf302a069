use thiserror::Error;

/// Top-level error type for the `alertops-api` crate.
///
/// Covers every failure mode of the REST surface: credentials, transport,
/// unexpected status codes, and body (de)serialization.
/// `alertops-core` wraps these with the operation and resource that failed.
#[derive(Debug, Error)]
pub enum Error {
    // ── Authentication ──────────────────────────────────────────────
    /// The API key could not be turned into a header value.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// API key rejected by the server (HTTP 401).
    #[error("Invalid API key")]
    InvalidApiKey,

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ── Protocol ────────────────────────────────────────────────────
    /// Status outside the accepted set for the operation.
    /// `body` is the response body, verbatim.
    #[error("{method} {url} returned HTTP {status}: {body}")]
    Api {
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    // ── Data ────────────────────────────────────────────────────────
    /// Request body could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// Network failures and 5xx responses are transient; every 4xx is final.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            Self::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Transport(e) => e.status() == Some(reqwest::StatusCode::NOT_FOUND),
            Self::Api { status: 404, .. } => true,
            _ => false,
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::InvalidApiKey => Some(401),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16) -> Error {
        Error::Api {
            method: "GET".into(),
            url: "https://api.alertops.com/api/v2/users/1".into(),
            status,
            body: String::new(),
        }
    }

    #[test]
    fn server_errors_are_transient() {
        assert!(api(500).is_transient());
        assert!(api(503).is_transient());
    }

    #[test]
    fn client_errors_are_final() {
        assert!(!api(400).is_transient());
        assert!(!api(404).is_transient());
        assert!(!Error::InvalidApiKey.is_transient());
    }

    #[test]
    fn not_found_detection() {
        assert!(api(404).is_not_found());
        assert!(!api(410).is_not_found());
        assert_eq!(api(404).status(), Some(404));
    }

    #[test]
    fn api_error_display_carries_context() {
        let err = Error::Api {
            method: "PUT".into(),
            url: "https://api.alertops.com/api/v2/groups/7".into(),
            status: 422,
            body: r#"{"message":"group_name is required"}"#.into(),
        };
        let text = err.to_string();
        assert!(text.contains("PUT https://api.alertops.com/api/v2/groups/7"));
        assert!(text.contains("422"));
        assert!(text.contains("group_name is required"));
    }
}
