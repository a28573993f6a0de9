//! Prompt definition model.
//!
//! Each prompt lives in its own YAML file:
//!
//! ```text
//! trigger: ":review"
//! label: "Code review"
//! description: "Review a snippet of code"
//! prompt: |
//!   Review the following code:
//!
//!   {{code}}
//!
//!   Focus on: {{focus|security}}
//! form_fields:          # optional overrides
//!   focus:
//!     default: "performance"
//! ```
//!
//! Missing or `null` text fields parse as empty strings so that validation
//! can report every missing field at once instead of failing on the first.

mod io;
mod issue;
mod render;

#[cfg(test)]
mod tests;

use crate::validate::PromptIssue;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

pub use io::{discover_prompt_files, load_prompt_file};
pub use issue::parse_issue;
pub use render::{Contribution, render_prompt_file};

/// A parsed prompt definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptRecord {
    /// Activation string, e.g. `:review`.
    #[serde(deserialize_with = "nullable")]
    pub trigger: String,

    /// Human-readable name shown in the snippet picker.
    #[serde(deserialize_with = "nullable")]
    pub label: String,

    /// Longer description of what the prompt does.
    #[serde(deserialize_with = "nullable")]
    pub description: String,

    /// Raw template body with `{{name}}` / `{{name|default}}` placeholders.
    #[serde(deserialize_with = "nullable")]
    pub prompt: String,

    /// Explicit field overrides keyed by variable name.
    #[serde(
        deserialize_with = "nullable",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub form_fields: BTreeMap<String, DeclaredField>,
}

/// Field metadata declared explicitly in a prompt file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclaredField {
    /// Default value offered in the form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Whether the field accepts multiple lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiline: Option<bool>,
}

impl PromptRecord {
    /// Parse a prompt definition from YAML text.
    ///
    /// Returns [`PromptIssue::ParseFailure`] for an empty document or one that
    /// does not decode into a prompt mapping.
    pub fn parse(content: &str) -> std::result::Result<Self, PromptIssue> {
        if content.trim().is_empty() {
            return Err(PromptIssue::ParseFailure("document is empty".to_string()));
        }

        serde_yaml::from_str(content).map_err(|e| PromptIssue::ParseFailure(e.to_string()))
    }

    /// Label to display, falling back to the trigger when none is set.
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            &self.trigger
        } else {
            &self.label
        }
    }
}

fn nullable<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
