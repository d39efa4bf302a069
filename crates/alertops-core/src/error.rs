// ── Core error types ──
//
// Errors surfaced to hosts driving the provider. Transport failures are
// wrapped in `Remote` together with the operation and API path that
// failed, so diagnostics always carry the request context.

use thiserror::Error;

/// CRUD step that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
    Import,
}

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Caller-configuration errors (raised before any request) ──────
    #[error("Validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Unknown resource type: {type_name}")]
    UnknownResource { type_name: String },

    #[error("Invalid resource state: {0}")]
    State(#[from] serde_json::Error),

    // ── Data errors ──────────────────────────────────────────────────
    #[error("Entity not found: {entity_type} with id {identifier}")]
    NotFound {
        entity_type: String,
        identifier: String,
    },

    #[error("{resource} has no remote identifier")]
    MissingIdentifier { resource: String },

    // ── API errors (wrapped with request context) ────────────────────
    #[error("{operation} {resource} at {path} failed: {source}")]
    Remote {
        operation: Operation,
        resource: String,
        path: String,
        #[source]
        source: alertops_api::Error,
    },

    /// The remote record exists but a later step of the same operation
    /// failed. `state` is the encoded host state, id included, and must be
    /// persisted so the record stays managed.
    #[error("{resource} {id} was created but its state is incomplete")]
    Incomplete {
        resource: String,
        id: String,
        state: Box<serde_json::Value>,
        #[source]
        source: Box<CoreError>,
    },
}

impl CoreError {
    /// Build a validation error for `field`.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Prefix the field path of a validation error with its parent
    /// (`contact_methods[1]` + `sequence` -> `contact_methods[1].sequence`).
    /// Other variants pass through untouched.
    #[must_use]
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::ValidationFailed { field, message } => Self::ValidationFailed {
                field: format!("{parent}.{field}"),
                message,
            },
            other => other,
        }
    }

    /// Returns `true` for a missing entity, local or remote (HTTP 404).
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Remote { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// The underlying transport error, when the failure came from the API.
    pub fn api_error(&self) -> Option<&alertops_api::Error> {
        match self {
            Self::Remote { source, .. } => Some(source),
            Self::Incomplete { source, .. } => source.api_error(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn within_prefixes_validation_paths() {
        let err = CoreError::validation("sequence", "bad").within("contact_methods[1]");
        match err {
            CoreError::ValidationFailed { field, .. } => {
                assert_eq!(field, "contact_methods[1].sequence");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn remote_404_is_not_found() {
        let err = CoreError::Remote {
            operation: Operation::Read,
            resource: "alertops_group".into(),
            path: "/api/v2/groups/9".into(),
            source: alertops_api::Error::Api {
                method: "GET".into(),
                url: "https://api.alertops.com/api/v2/groups/9".into(),
                status: 404,
                body: String::new(),
            },
        };
        assert!(err.is_not_found());
        assert!(err.to_string().starts_with("read alertops_group at /api/v2/groups/9"));
    }

    #[test]
    fn operation_display_is_lowercase() {
        assert_eq!(Operation::Import.to_string(), "import");
    }
}
