//! Implementation of the `promptpack build` command.
//!
//! # Steps
//!
//! 1. Sync the manifest version (unless `--no-sync`)
//! 2. Discover prompt files in the prompts directory
//! 3. Load each file and assemble its package entry; unusable files are
//!    skipped and reported, the rest of the batch carries on
//! 4. Render the package and write it to the dist directory (created if
//!    missing) and, if enabled, the project root
//!
//! The package is written even when files were skipped; the command then
//! fails so the skip is not missed.

use super::display_name;
use super::version::sync_version;
use crate::assemble::{OutputEntry, assemble};
use crate::cli::BuildArgs;
use crate::context::ProjectContext;
use crate::error::{PackError, Result};
use crate::fs::atomic_write_file;
use crate::package::{PackageHeader, render_package};
use crate::prompt::{PromptRecord, discover_prompt_files, load_prompt_file};
use crate::validate::PromptIssue;
use log::debug;
use std::path::Path;

/// Execute the `promptpack build` command.
pub fn cmd_build(ctx: &ProjectContext, args: &BuildArgs) -> Result<()> {
    let dialect = args.dialect.unwrap_or(ctx.config.dialect);
    println!("Building {} ({} dialect)", ctx.config.pack_name, dialect);
    println!();

    if !args.no_sync {
        sync_version(ctx)?;
        println!();
    }

    let files = discover_prompt_files(&ctx.prompts_dir(), &ctx.config.prompt_globs)?;
    println!("Found {} prompt file(s)", files.len());
    println!();

    let mut entries: Vec<OutputEntry> = Vec::with_capacity(files.len());
    let mut skipped = 0usize;

    for path in &files {
        let name = display_name(path);
        match load_buildable(path) {
            Ok(record) => {
                let entry = assemble(&record, dialect);
                debug!(
                    "{}: {} variable(s), {} field(s) with metadata",
                    name,
                    entry.variables.len(),
                    entry.fields.len()
                );
                println!("  OK   {} -> {}", name, entry.trigger);
                entries.push(entry);
            }
            Err(issue) => {
                skipped += 1;
                println!("  SKIP {}: {}", name, issue);
            }
        }
    }

    let output = render_package(&entries, &PackageHeader::now(&ctx.config.pack_name))?;

    let dist_path = ctx.dist_output_path();
    atomic_write_file(&dist_path, &output)?;
    println!();
    println!("Wrote {}", dist_path.display());

    if ctx.config.write_root_copy {
        let root_path = ctx.root_output_path();
        atomic_write_file(&root_path, &output)?;
        println!("Wrote {}", root_path.display());
    }

    println!();
    println!(
        "Built {} prompt(s), skipped {} file(s)",
        entries.len(),
        skipped
    );

    if skipped > 0 {
        return Err(PackError::ValidationError(format!(
            "{} prompt file(s) skipped; run `promptpack validate` for details",
            skipped
        )));
    }

    Ok(())
}

/// Load a prompt file with the fields a package entry cannot do without.
///
/// Only `trigger` and `prompt` are required here; a missing label falls back
/// to the trigger.
fn load_buildable(path: &Path) -> std::result::Result<PromptRecord, PromptIssue> {
    let record = load_prompt_file(path)?;

    for (field, value) in [("trigger", &record.trigger), ("prompt", &record.prompt)] {
        if value.trim().is_empty() {
            return Err(PromptIssue::MissingField {
                field: field.to_string(),
            });
        }
    }

    Ok(record)
}
