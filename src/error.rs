//! Error types for the promptpack CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//! Problems found in individual prompt records are reported separately as
//! [`crate::validate::PromptIssue`] values; `PackError` is reserved for
//! failures that end the run.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for promptpack operations.
#[derive(Error, Debug)]
pub enum PackError {
    /// Bad arguments, unreadable or unwritable shared files, or bad config.
    #[error("{0}")]
    UserError(String),

    /// One or more prompt records failed validation.
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl PackError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PackError::UserError(_) => exit_codes::FAILURE,
            PackError::ValidationError(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for promptpack operations.
pub type Result<T> = std::result::Result<T, PackError>;
