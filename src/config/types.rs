//! Configuration types and defaults for promptpack.
//!
//! This module defines enums, constants, and default value functions
//! used by the Config struct.

use serde::{Deserialize, Serialize};

/// Config file name looked up at the project root.
pub const DEFAULT_CONFIG_FILE: &str = "promptpack.yaml";

/// Output dialect of the generated package.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Dialect {
    /// `form:` body with `[[name]]` fields and inline `form_fields` metadata (default).
    #[default]
    Form,
    /// `replace:` body with `{{name}}` references and an explicit `vars:` list.
    Vars,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Form => write!(f, "form"),
            Dialect::Vars => write!(f, "vars"),
        }
    }
}

/// Structural rules applied when validating prompt records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    /// Prefix every trigger must start with.
    pub trigger_prefix: String,
    /// Minimum trigger length in characters, prefix included.
    pub min_trigger_length: usize,
    /// Prompts shorter than this (after trimming) get a warning.
    pub min_prompt_length: usize,
    /// Variable names shorter than this get a warning.
    pub min_variable_name_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            trigger_prefix: default_trigger_prefix(),
            min_trigger_length: default_min_trigger_length(),
            min_prompt_length: default_min_prompt_length(),
            min_variable_name_length: default_min_variable_name_length(),
        }
    }
}

/// Default globs selecting prompt files inside the prompts directory.
pub fn default_prompt_globs() -> Vec<String> {
    vec!["*.yml".to_string(), "*.yaml".to_string()]
}

// Default value functions for serde
pub(crate) fn default_pack_name() -> String {
    "AI Prompt Pack".to_string()
}
pub(crate) fn default_prompts_dir() -> String {
    "prompts".to_string()
}
pub(crate) fn default_dist_dir() -> String {
    "dist".to_string()
}
pub(crate) fn default_output_file() -> String {
    "package.yml".to_string()
}
pub(crate) fn default_manifest_file() -> String {
    "_manifest.yml".to_string()
}
pub(crate) fn default_package_file() -> String {
    "package.json".to_string()
}
pub(crate) fn default_trigger_prefix() -> String {
    ":".to_string()
}
pub(crate) fn default_min_trigger_length() -> usize {
    2
}
pub(crate) fn default_min_prompt_length() -> usize {
    10
}
pub(crate) fn default_min_variable_name_length() -> usize {
    2
}
pub(crate) fn default_true() -> bool {
    true
}
