//! Error types for conversion and database operations.
//!
//! Wrapped variants render as `<context>: <cause>`, so a failure deep in a
//! nested conversion reads as a single line naming every step it went
//! through. The innermost error stays reachable through `root_cause`.

use compass_core::errors::CoreError;
use thiserror::Error;

/// Errors from converting between persistence rows, the domain model, and
/// GraphQL shapes.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Contract violation or validation failure.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A nested conversion failed.
    #[error("{context}: {cause}")]
    Wrapped {
        context: &'static str,
        cause: Box<ConvertError>,
    },

    /// Stored or produced JSON could not be (de)serialized.
    #[error("{context}: {error}")]
    Json {
        context: &'static str,
        error: serde_json::Error,
    },
}

impl ConvertError {
    /// A required input was absent.
    pub fn nil_input(message: impl Into<String>) -> Self {
        Self::Core(CoreError::internal(message))
    }

    /// Add a step description in front of this error.
    #[must_use]
    pub fn wrap(self, context: &'static str) -> Self {
        Self::Wrapped {
            context,
            cause: Box::new(self),
        }
    }

    /// The innermost error, with every wrapping layer removed.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Wrapped { cause, .. } => cause.root_cause(),
            other => other,
        }
    }
}

/// Errors from database operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A SQL query failed.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Expected a result row but none was returned.
    #[error("No result returned")]
    NoResult,

    /// A row with the same key already exists.
    #[error("Object is not unique: {0}")]
    NotUnique(String),

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A database step failed; `context` names the step.
    #[error("{context}: {cause}")]
    Wrapped {
        context: String,
        cause: Box<DatabaseError>,
    },

    /// Converting a row to or from the domain model failed.
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    #[must_use]
    pub fn wrap(self, context: impl Into<String>) -> Self {
        Self::Wrapped {
            context: context.into(),
            cause: Box::new(self),
        }
    }

    /// The innermost error, with every wrapping layer removed.
    pub fn root_cause(&self) -> &Self {
        match self {
            Self::Wrapped { cause, .. } => cause.root_cause(),
            other => other,
        }
    }

    /// Whether the failure was a missing row, at any wrapping depth.
    pub fn is_no_result(&self) -> bool {
        matches!(self.root_cause(), Self::NoResult)
    }
}
