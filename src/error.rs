/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! Error types for the listmonk client
//!
//! Local failures (bad input, bad state, unexpected response shapes) and
//! remote failures (non-2xx statuses, transport errors) share one enum.
//! [`AppError::is_validation`] tells the two families apart.

use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for all listmonk client operations
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller supplied input that cannot be sent to the server
    #[error("validation error: {0}")]
    Validation(String),

    /// The server answered with an empty body where JSON was expected
    #[error("validation error: empty response")]
    EmptyResponse,

    /// The server answered with a body that is not valid JSON
    #[error("validation error: invalid json: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// JSON was valid but required fields were missing or had the wrong shape
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    /// The session is not in a state that allows the operation
    #[error("operation not allowed: {0}")]
    OperationNotAllowed(String),

    /// An attachment does not exist or is not a regular file
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The server returned a non-success status
    #[error("http error {status}: {body}")]
    Http {
        /// Status code returned by the server
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// An entity could not be located after a lookup
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport level failure (connection, timeout, TLS)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Local I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns true for errors raised locally before or after talking to the
    /// server: bad input, bad session state, missing files and unexpected
    /// response shapes.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::EmptyResponse
                | AppError::InvalidJson(_)
                | AppError::SchemaMismatch(_)
                | AppError::OperationNotAllowed(_)
                | AppError::FileNotFound(_)
        )
    }

    /// Status code of an [`AppError::Http`] error
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}

/// Result alias used across the crate
pub type ListmonkResult<T> = Result<T, AppError>;
