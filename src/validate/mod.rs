//! Structural validation of prompt records.
//!
//! This module checks prompt records against the rules a snippet package
//! needs before it can be built:
//! - Required fields: `trigger`, `label`, `description` and `prompt` are non-empty
//! - Trigger shape: configured prefix, no whitespace, minimum length
//! - Advisory checks: very short prompts and very short variable names
//!
//! Findings are collected, never raised: one record's problems do not stop
//! the rest of the batch.

mod issues;


pub use issues::{PromptIssue, Severity, TriggerProblem};

use crate::config::ValidationRules;
use crate::prompt::{PromptRecord, load_prompt_file};
use crate::template::scan;
use std::path::{Path, PathBuf};

/// Names of the fields every prompt must fill in.
pub const REQUIRED_FIELDS: &[&str] = &["trigger", "label", "description", "prompt"];

/// Outcome of validating one source (a file or an issue document).
#[derive(Debug, Clone)]
pub struct ValidationReport {
    /// Where the record came from.
    pub source: PathBuf,
    /// Every problem found, errors and warnings alike.
    pub issues: Vec<PromptIssue>,
}

impl ValidationReport {
    /// True when no error-severity issue was found.
    pub fn is_valid(&self) -> bool {
        !self.issues.iter().any(|i| i.severity() == Severity::Error)
    }

    /// Error-severity issues.
    pub fn errors(&self) -> impl Iterator<Item = &PromptIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Error)
    }

    /// Warning-severity issues.
    pub fn warnings(&self) -> impl Iterator<Item = &PromptIssue> {
        self.issues
            .iter()
            .filter(|i| i.severity() == Severity::Warning)
    }
}

/// Validate a parsed prompt record.
pub fn validate_record(record: &PromptRecord, rules: &ValidationRules) -> Vec<PromptIssue> {
    let mut issues = Vec::new();

    let values = [
        &record.trigger,
        &record.label,
        &record.description,
        &record.prompt,
    ];
    for (field, value) in REQUIRED_FIELDS.iter().zip(values) {
        if value.trim().is_empty() {
            issues.push(PromptIssue::MissingField {
                field: field.to_string(),
            });
        }
    }

    if !record.trigger.is_empty() {
        issues.extend(
            check_trigger(&record.trigger, rules)
                .into_iter()
                .map(PromptIssue::InvalidTrigger),
        );
    }

    if !record.prompt.is_empty() {
        let length = record.prompt.trim().chars().count();
        if length < rules.min_prompt_length {
            issues.push(PromptIssue::ShortContent {
                length,
                minimum: rules.min_prompt_length,
            });
        }
    }

    for placeholder in scan(&record.prompt) {
        if placeholder.name.chars().count() < rules.min_variable_name_length {
            issues.push(PromptIssue::ShortVariableName {
                name: placeholder.name,
            });
        }
    }

    issues
}

/// Check a trigger's shape, returning every rule it breaks.
pub fn check_trigger(trigger: &str, rules: &ValidationRules) -> Vec<TriggerProblem> {
    let mut problems = Vec::new();

    if !trigger.starts_with(&rules.trigger_prefix) {
        problems.push(TriggerProblem::MissingPrefix {
            prefix: rules.trigger_prefix.clone(),
        });
    }
    if trigger.chars().any(char::is_whitespace) {
        problems.push(TriggerProblem::ContainsWhitespace);
    }
    if trigger.chars().count() < rules.min_trigger_length {
        problems.push(TriggerProblem::TooShort {
            minimum: rules.min_trigger_length,
        });
    }

    problems
}

/// Load and validate one prompt file.
///
/// A file that cannot be read or decoded yields a single
/// [`PromptIssue::ParseFailure`].
pub fn validate_prompt_file(path: &Path, rules: &ValidationRules) -> ValidationReport {
    let issues = match load_prompt_file(path) {
        Ok(record) => validate_record(&record, rules),
        Err(issue) => vec![issue],
    };

    ValidationReport {
        source: path.to_path_buf(),
        issues,
    }
}
