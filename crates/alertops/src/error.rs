//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use alertops_config::ConfigError;
use alertops_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the AlertOps API")]
    #[diagnostic(
        code(alertops::connection_failed),
        help("Check network access and --base-url (currently {url}).")
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(alertops::auth_failed),
        help("Verify the API key under Configuration > Subscription Settings in AlertOps.")
    )]
    AuthFailed { message: String },

    #[error("No API key configured")]
    #[diagnostic(
        code(alertops::no_credentials),
        help(
            "Pass --api-key, set ALERTOPS_API_KEY, or add api_key to {path}"
        )
    )]
    NoCredentials { path: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(code(alertops::not_found))]
    NotFound {
        resource_type: String,
        identifier: String,
    },

    #[error("Unknown resource type '{type_name}'")]
    #[diagnostic(
        code(alertops::unknown_resource),
        help("Run: alertops resources to list the supported types")
    )]
    UnknownResource { type_name: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("{operation} failed: {message}")]
    #[diagnostic(code(alertops::api_error))]
    ApiError { operation: String, message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(alertops::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(alertops::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error("Cannot access {path}: {source}")]
    #[diagnostic(code(alertops::io))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid state in {path}: {source}")]
    #[diagnostic(
        code(alertops::state),
        help("State files hold one JSON object: the resource attributes plus an optional \"id\".")
    )]
    State {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cannot render output: {0}")]
    #[diagnostic(code(alertops::output))]
    Render(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::UnknownResource { .. } | Self::State { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Remote {
                operation,
                resource,
                path,
                source,
            } => from_api(&format!("{operation} {resource}"), path, source),

            CoreError::NotFound {
                entity_type,
                identifier,
            } => CliError::NotFound {
                resource_type: entity_type,
                identifier,
            },

            CoreError::ValidationFailed { field, message } => CliError::Validation {
                field,
                reason: message,
            },

            CoreError::UnknownResource { type_name } => CliError::UnknownResource { type_name },

            CoreError::State(source) => CliError::Validation {
                field: "state".into(),
                reason: source.to_string(),
            },

            CoreError::MissingIdentifier { resource } => CliError::ApiError {
                operation: resource,
                message: "the record carries no remote identifier".into(),
            },

            CoreError::Config { message } => CliError::Validation {
                field: "config".into(),
                reason: message,
            },

            // The caller has already persisted the partial state.
            CoreError::Incomplete { source, .. } => CliError::from(*source),
        }
    }
}

fn from_api(operation: &str, path: String, source: alertops_api::Error) -> CliError {
    match source {
        alertops_api::Error::InvalidApiKey | alertops_api::Error::Authentication { .. } => {
            CliError::AuthFailed {
                message: source.to_string(),
            }
        }
        alertops_api::Error::Api { status: 404, .. } => CliError::NotFound {
            resource_type: operation.to_owned(),
            identifier: path,
        },
        alertops_api::Error::Transport(e) if e.is_connect() || e.is_timeout() => {
            CliError::ConnectionFailed {
                url: e.url().map_or(path, ToString::to_string),
                source: Box::new(e),
            }
        }
        other => CliError::ApiError {
            operation: operation.to_owned(),
            message: other.to_string(),
        },
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoCredentials => CliError::NoCredentials {
                path: alertops_config::config_path().display().to_string(),
            },
            ConfigError::Figment(e) => CliError::Config(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_error_class() {
        let not_found: CliError = CoreError::NotFound {
            entity_type: "user".into(),
            identifier: "bob".into(),
        }
        .into();
        assert_eq!(not_found.exit_code(), exit_code::NOT_FOUND);

        let invalid: CliError = CoreError::validation("sequence", "must be >= 1").into();
        assert_eq!(invalid.exit_code(), exit_code::USAGE);

        let auth: CliError = ConfigError::NoCredentials.into();
        assert_eq!(auth.exit_code(), exit_code::AUTH);
    }

    #[test]
    fn rejected_key_is_an_auth_failure() {
        let err: CliError = CoreError::Remote {
            operation: alertops_core::Operation::Read,
            resource: "alertops_group".into(),
            path: "/api/v2/groups/1".into(),
            source: alertops_api::Error::InvalidApiKey,
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::AUTH);
    }

    #[test]
    fn server_error_is_general() {
        let err: CliError = CoreError::Remote {
            operation: alertops_core::Operation::Update,
            resource: "alertops_workflow".into(),
            path: "/api/v2/workflows/3".into(),
            source: alertops_api::Error::Api {
                method: "PUT".into(),
                url: "https://api.alertops.com/api/v2/workflows/3".into(),
                status: 500,
                body: "boom".into(),
            },
        }
        .into();
        assert_eq!(err.exit_code(), exit_code::GENERAL);
        assert!(err.to_string().starts_with("update alertops_workflow failed"));
    }
}
