//! Prompt file discovery and loading.

use super::PromptRecord;
use crate::error::{PackError, Result};
use crate::validate::PromptIssue;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::{Path, PathBuf};

/// List prompt files in `dir` whose file names match any of `globs`.
///
/// Subdirectories are not descended into. Results are sorted by file name so
/// builds are reproducible across platforms.
///
/// # Errors
///
/// A missing or unreadable directory, or an invalid glob, is fatal.
pub fn discover_prompt_files(dir: &Path, globs: &[String]) -> Result<Vec<PathBuf>> {
    let matcher = build_globset(globs)?;

    let entries = std::fs::read_dir(dir).map_err(|e| {
        PackError::UserError(format!(
            "failed to read prompts directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            PackError::UserError(format!(
                "failed to read entry in '{}': {}",
                dir.display(),
                e
            ))
        })?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            debug!("skipping non-UTF-8 file name in {}", dir.display());
            continue;
        };
        if matcher.is_match(name) {
            files.push(path);
        }
    }

    files.sort();
    debug!("found {} prompt file(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Read and parse one prompt file.
///
/// Read failures are reported as [`PromptIssue::ParseFailure`] so that one
/// bad file does not stop the rest of the batch.
pub fn load_prompt_file(path: &Path) -> std::result::Result<PromptRecord, PromptIssue> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| PromptIssue::ParseFailure(format!("failed to read file: {}", e)))?;
    PromptRecord::parse(&content)
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let normalized = pattern.trim();
        if normalized.is_empty() {
            continue;
        }
        let glob = Glob::new(normalized).map_err(|e| {
            PackError::UserError(format!("invalid prompt glob '{}': {}", normalized, e))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| PackError::UserError(format!("failed to build prompt globs: {}", e)))
}
