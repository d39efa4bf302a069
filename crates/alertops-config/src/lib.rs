//! Provider settings for AlertOps hosts.
//!
//! Layered defaults, an optional TOML file and `ALERTOPS_*` environment
//! variables, resolved into an `alertops_core::ProviderConfig`. The core
//! crate never touches files or the environment itself.

use std::path::{Path, PathBuf};
use std::time::Duration;

use alertops_api::{RetryPolicy, TransportConfig};
use alertops_core::{DEFAULT_BASE_URL, ProviderConfig};
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no API key configured (set ALERTOPS_API_KEY, pass --api-key, or add api_key to the config file)")]
    NoCredentials,

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── Settings ────────────────────────────────────────────────────────

/// Flat provider settings as read from file and environment.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    /// Plaintext in the file; prefer `ALERTOPS_API_KEY`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Total attempts per request, first one included.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_max_attempts() -> u32 {
    3
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "alertops", "alertops").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("alertops");
    p
}

// ── Loading ─────────────────────────────────────────────────────────

impl Settings {
    /// The layered sources: defaults < TOML file < `ALERTOPS_*` env.
    ///
    /// A missing file is not an error.
    pub fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("ALERTOPS_"))
    }

    /// Load from `path`, or from [`config_path`] when none is given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map_or_else(config_path, Path::to_path_buf);
        Ok(Self::figment(&path).extract()?)
    }

    /// Validate and resolve into the runtime provider config.
    pub fn into_provider_config(self) -> Result<ProviderConfig, ConfigError> {
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::NoCredentials)?;

        let base_url: url::Url = self.base_url.parse().map_err(|_| ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("invalid URL: {}", self.base_url),
        })?;

        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation {
                field: "timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Validation {
                field: "max_attempts".into(),
                reason: "must be at least 1".into(),
            });
        }

        let transport = TransportConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            retry: RetryPolicy {
                max_attempts: self.max_attempts,
                ..RetryPolicy::default()
            },
        };

        let config = ProviderConfig::new(SecretString::from(api_key))
            .map_err(|_| ConfigError::NoCredentials)?
            .with_base_url(base_url)
            .with_transport(transport);
        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use figment::Jail;
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn defaults_apply_without_file_or_env() {
        Jail::expect_with(|jail| {
            let settings: Settings = Settings::figment(&jail.directory().join("missing.toml"))
                .extract()
                .unwrap();
            assert_eq!(settings, Settings::default());
            assert_eq!(settings.base_url, "https://api.alertops.com");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                    api_key = "from-file"
                    base_url = "https://eu.alertops.com"
                    max_attempts = 5
                "#,
            )?;
            jail.set_env("ALERTOPS_API_KEY", "from-env");
            jail.set_env("ALERTOPS_TIMEOUT_SECS", "10");

            let settings = Settings::load(Some(Path::new("config.toml"))).unwrap();
            assert_eq!(settings.api_key.as_deref(), Some("from-env"));
            assert_eq!(settings.base_url, "https://eu.alertops.com");
            assert_eq!(settings.timeout_secs, 10);
            assert_eq!(settings.max_attempts, 5);
            Ok(())
        });
    }

    #[test]
    fn resolves_provider_config() {
        let settings = Settings {
            api_key: Some("k-123".into()),
            timeout_secs: 5,
            max_attempts: 2,
            ..Settings::default()
        };
        let config = settings.into_provider_config().unwrap();
        assert_eq!(config.api_key.expose_secret(), "k-123");
        assert_eq!(config.base_url.as_str(), "https://api.alertops.com/");
        assert_eq!(config.transport.timeout, Duration::from_secs(5));
        assert_eq!(config.transport.retry.max_attempts, 2);
    }

    #[test]
    fn missing_or_blank_key_is_no_credentials() {
        for api_key in [None, Some("  ".to_owned())] {
            let settings = Settings {
                api_key,
                ..Settings::default()
            };
            assert!(matches!(
                settings.into_provider_config(),
                Err(ConfigError::NoCredentials)
            ));
        }
    }

    #[test]
    fn bad_values_are_rejected_by_field() {
        let cases = [
            (
                Settings {
                    base_url: "not a url".into(),
                    ..Settings::default()
                },
                "base_url",
            ),
            (
                Settings {
                    timeout_secs: 0,
                    ..Settings::default()
                },
                "timeout_secs",
            ),
            (
                Settings {
                    max_attempts: 0,
                    ..Settings::default()
                },
                "max_attempts",
            ),
        ];
        for (mut settings, expected) in cases {
            settings.api_key = Some("k".into());
            match settings.into_provider_config() {
                Err(ConfigError::Validation { field, .. }) => assert_eq!(field, expected),
                other => panic!("unexpected result for {expected}: {other:?}"),
            }
        }
    }
}
