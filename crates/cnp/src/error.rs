//! Error types for the submission boundary.

use cnp_core::ValidationError;
use thiserror::Error;

/// Errors that can occur while handling a CNP submission.
///
/// An invalid CNP is not an error here: it is a successful submission with
/// `isCnpValid: false`. These errors mean there was nothing to validate.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The submission had no `cnp` field.
    #[error("no cnp field in submission")]
    MissingCnp,

    /// The request body could not be decoded.
    #[error("malformed submission body: {0}")]
    MalformedBody(#[from] serde_json::Error),

    /// Validation error, for callers that asked for a parsed CNP.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result type for submission handling.
pub type Result<T> = std::result::Result<T, ServiceError>;
