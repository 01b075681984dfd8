//! Cross-cutting error types for Compass.
//!
//! Errors raised while converting or persisting a specific aggregate live in
//! `compass-director`; this module only holds the kinds every crate may raise.

use thiserror::Error;

/// Errors that can be raised by any Compass crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A caller broke an internal contract (for example passed a nil value
    /// where one is required).
    #[error("Internal Server Error: {0}")]
    Internal(String),

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for [`CoreError::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Shorthand for [`CoreError::Validation`].
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_error_display() {
        let err = CoreError::internal("the Package entity is nil");
        assert_eq!(err.to_string(), "Internal Server Error: the Package entity is nil");
    }

    #[test]
    fn not_found_display() {
        let err = CoreError::NotFound {
            entity_type: "Package".into(),
            id: "pkg-1".into(),
        };
        assert_eq!(err.to_string(), "Entity not found: Package pkg-1");
    }
}
