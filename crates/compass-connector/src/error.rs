//! Connector client error types.

use thiserror::Error;

use crate::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum ConnectorError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The connector answered with an unexpected status code.
    #[error("connector error ({status}): {response}")]
    Api {
        /// HTTP status code returned by the connector.
        status: u16,
        /// Decoded error body.
        response: ErrorResponse,
    },

    /// The director could not issue a one-time token.
    #[error("director error: {0}")]
    Director(String),

    /// A response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ConnectorError {
    /// Status code of an [`ConnectorError::Api`] error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
