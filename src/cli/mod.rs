//! CLI argument parsing for promptpack.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::config::Dialect;
use crate::manifest::BumpLevel;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// promptpack: build a text-expansion snippet package from YAML prompts.
///
/// Prompts live one per file in the prompts directory. Template variables
/// (`{{name}}` or `{{name|default}}`) become form fields; variables alone on
/// a line become multiline fields.
#[derive(Parser, Debug)]
#[command(name = "promptpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Project root containing the prompts directory and package files.
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Config file (default: <root>/promptpack.yaml, optional).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptpack.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the snippet package from the prompts directory.
    ///
    /// Syncs the manifest version, converts every prompt file, and writes
    /// the package to the dist directory and the project root.
    Build(BuildArgs),

    /// Validate prompt files against the structural rules.
    ///
    /// Errors fail the command; warnings are printed but never fail it.
    Validate(ValidateArgs),

    /// Convert an issue submission into a prompt file.
    ///
    /// Reads an issue body with Trigger, Label, Description and Prompt
    /// sections and prints (or writes) the equivalent prompt YAML.
    Issue(IssueArgs),

    /// Copy the package version into the manifest.
    SyncVersion,

    /// Check that the manifest version matches the package version.
    CheckVersion,

    /// Bump the package version, then rebuild.
    Bump(BumpArgs),
}

/// Arguments for the `build` command.
#[derive(Parser, Debug, Default)]
pub struct BuildArgs {
    /// Output dialect (overrides the config).
    #[arg(long, value_enum)]
    pub dialect: Option<Dialect>,

    /// Skip syncing the manifest version.
    #[arg(long)]
    pub no_sync: bool,
}

/// Arguments for the `validate` command.
#[derive(Parser, Debug, Default)]
pub struct ValidateArgs {
    /// Files to validate (default: every prompt file in the prompts directory).
    pub files: Vec<PathBuf>,
}

/// Arguments for the `issue` command.
#[derive(Parser, Debug)]
pub struct IssueArgs {
    /// Issue body file, or `-` to read standard input.
    pub input: PathBuf,

    /// Issue number recorded in the header comment.
    #[arg(long)]
    pub number: Option<u64>,

    /// Contributor recorded in the header comment.
    #[arg(long)]
    pub contributor: Option<String>,

    /// Write the prompt file here instead of standard output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `bump` command.
#[derive(Parser, Debug, Default)]
pub struct BumpArgs {
    /// Version component to increment.
    #[arg(value_enum, default_value_t = BumpLevel::Patch)]
    pub level: BumpLevel,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
