//! Problems found in individual prompt records.

use thiserror::Error;

/// How much a finding matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The record cannot be used as-is.
    Error,
    /// Worth fixing, but the record is still usable.
    Warning,
}

/// A problem with one prompt record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptIssue {
    /// A required field is absent or empty.
    #[error("missing required field: {field}")]
    MissingField { field: String },

    /// The trigger breaks a shape rule.
    #[error("invalid trigger: {0}")]
    InvalidTrigger(TriggerProblem),

    /// The source could not be decoded into a record.
    #[error("parse failure: {0}")]
    ParseFailure(String),

    /// The prompt body is suspiciously short.
    #[error("prompt is short ({length} characters, at least {minimum} recommended)")]
    ShortContent { length: usize, minimum: usize },

    /// A variable name is not descriptive enough.
    #[error("variable name '{name}' is short, use a more descriptive name")]
    ShortVariableName { name: String },
}

impl PromptIssue {
    /// Severity of this finding.
    pub fn severity(&self) -> Severity {
        match self {
            PromptIssue::MissingField { .. }
            | PromptIssue::InvalidTrigger(_)
            | PromptIssue::ParseFailure(_) => Severity::Error,
            PromptIssue::ShortContent { .. } | PromptIssue::ShortVariableName { .. } => {
                Severity::Warning
            }
        }
    }
}

/// A specific way a trigger can be malformed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriggerProblem {
    /// Does not start with the configured prefix.
    #[error("must start with '{prefix}'")]
    MissingPrefix { prefix: String },

    /// Contains a space or other whitespace.
    #[error("must not contain whitespace")]
    ContainsWhitespace,

    /// Shorter than the configured minimum.
    #[error("must be at least {minimum} characters long")]
    TooShort { minimum: usize },
}
