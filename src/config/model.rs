//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for a prompt pack project.
///
/// This struct represents the contents of `promptpack.yaml`. Relative paths
/// are resolved against the project root. Unknown fields in the YAML are
/// ignored for forward compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Package settings
    // =========================================================================
    /// Name written into the generated package header.
    #[serde(default = "default_pack_name")]
    pub pack_name: String,

    /// Output dialect for the generated package.
    #[serde(default)]
    pub dialect: Dialect,

    // =========================================================================
    // Paths
    // =========================================================================
    /// Directory holding one YAML file per prompt.
    #[serde(default = "default_prompts_dir")]
    pub prompts_dir: String,

    /// Glob patterns (matched against file names) selecting prompt files.
    #[serde(default = "default_prompt_globs")]
    pub prompt_globs: Vec<String>,

    /// Directory receiving the generated package.
    #[serde(default = "default_dist_dir")]
    pub dist_dir: String,

    /// File name of the generated package.
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Whether to also write the package at the project root.
    #[serde(default = "default_true")]
    pub write_root_copy: bool,

    /// Manifest whose `version:` line tracks the package version.
    #[serde(default = "default_manifest_file")]
    pub manifest_file: String,

    /// JSON file holding the authoritative `version`.
    #[serde(default = "default_package_file")]
    pub package_file: String,

    // =========================================================================
    // Validation settings
    // =========================================================================
    /// Prefix every trigger must start with.
    #[serde(default = "default_trigger_prefix")]
    pub trigger_prefix: String,

    /// Minimum trigger length, prefix included.
    #[serde(default = "default_min_trigger_length")]
    pub min_trigger_length: usize,

    /// Prompt length under which a warning is reported.
    #[serde(default = "default_min_prompt_length")]
    pub min_prompt_length: usize,

    /// Variable name length under which a warning is reported.
    #[serde(default = "default_min_variable_name_length")]
    pub min_variable_name_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pack_name: default_pack_name(),
            dialect: Dialect::default(),
            prompts_dir: default_prompts_dir(),
            prompt_globs: default_prompt_globs(),
            dist_dir: default_dist_dir(),
            output_file: default_output_file(),
            write_root_copy: true,
            manifest_file: default_manifest_file(),
            package_file: default_package_file(),
            trigger_prefix: default_trigger_prefix(),
            min_trigger_length: default_min_trigger_length(),
            min_prompt_length: default_min_prompt_length(),
            min_variable_name_length: default_min_variable_name_length(),
        }
    }
}
