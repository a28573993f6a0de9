//! Command implementations for promptpack.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command runs against a [`ProjectContext`]
//! resolved once from `--root` and `--config`.

mod build;
mod issue;
mod validate_cmd;
mod version;


use crate::cli::{Cli, Command};
use crate::context::ProjectContext;
use crate::error::Result;
use std::path::Path;

pub use build::cmd_build;
pub use issue::cmd_issue;
pub use validate_cmd::cmd_validate;
pub use version::{cmd_bump, cmd_check_version, cmd_sync_version};

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = ProjectContext::resolve(&cli.root, cli.config.as_deref())?;

    match cli.command {
        Command::Build(args) => cmd_build(&ctx, &args),
        Command::Validate(args) => cmd_validate(&ctx, &args),
        Command::Issue(args) => cmd_issue(&ctx, &args),
        Command::SyncVersion => cmd_sync_version(&ctx),
        Command::CheckVersion => cmd_check_version(&ctx),
        Command::Bump(args) => cmd_bump(&ctx, &args),
    }
}

/// File name for console output, falling back to the full path.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
