//! Domain-level error types.

use thiserror::Error;

/// Errors produced while interpreting client input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The path identifier is not a well-formed ObjectId.
    #[error("invalid job id: '{0}'")]
    InvalidId(String),

    /// A required field is absent, `null`, empty, or not a string.
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),
}
