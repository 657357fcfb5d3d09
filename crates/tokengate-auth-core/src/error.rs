/*
[INPUT]:  Error sources (structural validation, JSON parsing, factor transitions, providers)
[OUTPUT]: Structured error type naming the offending field
[POS]:    Error handling layer - unified error type for entire crate
[UPDATE]: When adding new error sources or changing field path formatting
*/

use thiserror::Error;

use crate::types::SecondFactorStatus;

/// Main error type for the authentication core
#[derive(Error, Debug)]
pub enum AuthError {
    /// Input violated a structural rule
    #[error("validation failed: {field} {expectation}")]
    Validation { field: String, expectation: String },

    /// JSON text could not be parsed into the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Second-factor event not accepted in the current status
    #[error("second factor in status {from} cannot accept {event}")]
    InvalidTransition {
        from: SecondFactorStatus,
        event: &'static str,
    },

    /// Second-factor provider collaborator failed
    #[error("Second factor provider error: {0}")]
    Provider(String),
}

impl AuthError {
    /// Create a validation error for a field
    pub fn validation(field: impl Into<String>, expectation: impl Into<String>) -> Self {
        AuthError::Validation {
            field: field.into(),
            expectation: expectation.into(),
        }
    }

    /// Check if the error is a structural validation failure
    pub fn is_validation(&self) -> bool {
        matches!(self, AuthError::Validation { .. })
    }

    /// Offending field, when the error names one
    pub fn field(&self) -> Option<&str> {
        match self {
            AuthError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Re-root a validation error under a parent field.
    ///
    /// `roles[0]` + `tokenId` becomes `roles[0].tokenId`. Other variants pass through.
    pub fn within(self, parent: &str) -> Self {
        match self {
            AuthError::Validation { field, expectation } => AuthError::Validation {
                field: format!("{parent}.{field}"),
                expectation,
            },
            other => other,
        }
    }
}

/// Result type alias for authentication core operations
pub type Result<T> = std::result::Result<T, AuthError>;

/// Fail unless `value` has visible characters.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AuthError::validation(field, "must be a non-empty string"));
    }
    Ok(())
}
