//! Implementation of the `promptpack validate` command.
//!
//! Validates every prompt file (or the files given on the command line)
//! and prints one line per file followed by its errors and warnings.

use super::display_name;
use crate::cli::ValidateArgs;
use crate::context::ProjectContext;
use crate::error::{PackError, Result};
use crate::prompt::discover_prompt_files;
use crate::validate::{ValidationReport, validate_prompt_file};

/// Execute the `promptpack validate` command.
///
/// # Exit Codes
///
/// - 0: No file has an error (warnings allowed)
/// - 1: At least one file has an error, or files could not be listed
pub fn cmd_validate(ctx: &ProjectContext, args: &ValidateArgs) -> Result<()> {
    let files = if args.files.is_empty() {
        discover_prompt_files(&ctx.prompts_dir(), &ctx.config.prompt_globs)?
    } else {
        args.files.clone()
    };

    let rules = ctx.config.validation_rules();
    let reports: Vec<ValidationReport> = files
        .iter()
        .map(|path| validate_prompt_file(path, &rules))
        .collect();

    for report in &reports {
        print_report(report);
    }

    let failed = reports.iter().filter(|r| !r.is_valid()).count();
    let warnings: usize = reports.iter().map(|r| r.warnings().count()).sum();

    println!();
    println!(
        "Validated {} file(s): {} passed, {} failed, {} warning(s)",
        reports.len(),
        reports.len() - failed,
        failed,
        warnings
    );

    if failed > 0 {
        return Err(PackError::ValidationError(format!(
            "{} file(s) have errors",
            failed
        )));
    }

    println!("All files passed.");
    Ok(())
}

fn print_report(report: &ValidationReport) {
    let status = if report.is_valid() { "PASS" } else { "FAIL" };
    println!("{} {}", status, display_name(&report.source));

    for issue in report.errors() {
        println!("    error:   {}", issue);
    }
    for issue in report.warnings() {
        println!("    warning: {}", issue);
    }
}
