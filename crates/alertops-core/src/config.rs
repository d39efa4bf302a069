// ── Runtime provider configuration ──
//
// Credential and endpoint for the AlertOps API. Built by the host (CLI,
// tests) and handed in; core never reads config files or the environment.

use alertops_api::TransportConfig;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::CoreError;

/// Base URL used when the host does not supply one.
pub const DEFAULT_BASE_URL: &str = "https://api.alertops.com";

/// Process-wide provider settings, immutable once configured.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Sent as the `api-key` header on every request.
    pub api_key: SecretString,
    pub base_url: Url,
    pub transport: TransportConfig,
}

impl ProviderConfig {
    /// Build a config for the default endpoint.
    ///
    /// Rejects an empty or whitespace-only key before any request is made.
    pub fn new(api_key: SecretString) -> Result<Self, CoreError> {
        if api_key.expose_secret().trim().is_empty() {
            return Err(CoreError::Config {
                message: "API key must not be empty".into(),
            });
        }
        let base_url = Url::parse(DEFAULT_BASE_URL).map_err(|e| CoreError::Config {
            message: format!("invalid default base URL: {e}"),
        })?;
        Ok(Self {
            api_key,
            base_url,
            transport: TransportConfig::default(),
        })
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn blank_key_is_rejected() {
        let err = ProviderConfig::new(SecretString::from("   ".to_owned())).unwrap_err();
        assert!(matches!(err, CoreError::Config { .. }));
    }

    #[test]
    fn defaults_to_public_endpoint() {
        let config = ProviderConfig::new(SecretString::from("k".to_owned())).unwrap();
        assert_eq!(config.base_url.as_str(), "https://api.alertops.com/");
        assert_eq!(config.transport.retry.max_attempts, 3);
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = ProviderConfig::new(SecretString::from("super-secret".to_owned())).unwrap();
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
