//! Implementation of the `promptpack issue` command.
//!
//! Converts a submission made through the issue tracker's prompt form into
//! a prompt file. The record is validated before anything is written.
//! When the prompt file goes to standard output, all status messages go to
//! standard error so the output can be redirected as-is.

use crate::cli::IssueArgs;
use crate::context::ProjectContext;
use crate::error::{PackError, Result};
use crate::fs::atomic_write_file;
use crate::prompt::{Contribution, parse_issue, render_prompt_file};
use crate::validate::{Severity, validate_record};
use std::io::Read;
use std::path::Path;

/// Execute the `promptpack issue` command.
pub fn cmd_issue(ctx: &ProjectContext, args: &IssueArgs) -> Result<()> {
    let content = read_input(&args.input)?;

    let record = parse_issue(&content).map_err(|issue| {
        PackError::ValidationError(format!("could not parse issue: {}", issue))
    })?;

    let issues = validate_record(&record, &ctx.config.validation_rules());
    let mut has_errors = false;
    for issue in &issues {
        match issue.severity() {
            Severity::Error => {
                has_errors = true;
                eprintln!("error:   {}", issue);
            }
            Severity::Warning => eprintln!("warning: {}", issue),
        }
    }
    if has_errors {
        return Err(PackError::ValidationError(format!(
            "issue prompt '{}' is invalid",
            record.trigger
        )));
    }

    let contribution = match (args.number, &args.contributor) {
        (Some(issue_number), Some(contributor)) => Some(Contribution {
            issue_number,
            contributor: contributor.clone(),
        }),
        _ => None,
    };
    let rendered = render_prompt_file(&record, contribution.as_ref())?;

    match &args.output {
        Some(path) => {
            atomic_write_file(path, &rendered)?;
            eprintln!("Wrote {} -> {}", record.trigger, path.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| PackError::UserError(format!("failed to read standard input: {}", e)))?;
        return Ok(content);
    }

    std::fs::read_to_string(input).map_err(|e| {
        PackError::UserError(format!(
            "failed to read issue file '{}': {}",
            input.display(),
            e
        ))
    })
}
