//! Implementation of the version commands: `sync-version`,
//! `check-version` and `bump`.

use super::build::cmd_build;
use crate::cli::{BuildArgs, BumpArgs};
use crate::context::ProjectContext;
use crate::error::{PackError, Result};
use crate::manifest::{
    SyncOutcome, bump_package_version, manifest_version, read_package_version, sync_manifest,
};

/// Execute the `promptpack sync-version` command.
pub fn cmd_sync_version(ctx: &ProjectContext) -> Result<()> {
    sync_version(ctx)
}

/// Copy the package version into the manifest.
///
/// A package file without a `version`, or a manifest without a top-level
/// `version:` line, only produces a warning. Unreadable files are fatal.
pub(super) fn sync_version(ctx: &ProjectContext) -> Result<()> {
    let package_path = ctx.package_path();
    let Some(version) = read_package_version(&package_path)? else {
        eprintln!(
            "Warning: '{}' has no version field; manifest not synced",
            package_path.display()
        );
        return Ok(());
    };

    let manifest_path = ctx.manifest_path();
    match sync_manifest(&manifest_path, &version)? {
        SyncOutcome::AlreadyInSync { version } => {
            println!("Manifest version already in sync: {}", version);
        }
        SyncOutcome::Updated { previous, version } => {
            println!(
                "Updated manifest version: {} -> {}",
                previous.as_deref().unwrap_or("(none)"),
                version
            );
        }
        SyncOutcome::NoVersionLine => {
            eprintln!(
                "Warning: '{}' has no top-level version line; manifest not synced",
                manifest_path.display()
            );
        }
    }

    Ok(())
}

/// Execute the `promptpack check-version` command.
///
/// Fails when the manifest does not record the package version.
pub fn cmd_check_version(ctx: &ProjectContext) -> Result<()> {
    let package_path = ctx.package_path();
    let package_version = read_package_version(&package_path)?.ok_or_else(|| {
        PackError::UserError(format!(
            "'{}' has no version field",
            package_path.display()
        ))
    })?;

    let manifest_path = ctx.manifest_path();
    let content = std::fs::read_to_string(&manifest_path).map_err(|e| {
        PackError::UserError(format!(
            "failed to read manifest '{}': {}",
            manifest_path.display(),
            e
        ))
    })?;
    let recorded = manifest_version(&content);

    println!("Package version:  {}", package_version);
    println!(
        "Manifest version: {}",
        recorded.as_deref().unwrap_or("(none)")
    );

    if recorded.as_deref() != Some(package_version.as_str()) {
        return Err(PackError::ValidationError(
            "manifest version does not match package version.\n\n\
             Run `promptpack sync-version` (or `promptpack build`) to sync it."
                .to_string(),
        ));
    }

    println!();
    println!("Versions match.");
    Ok(())
}

/// Execute the `promptpack bump` command.
///
/// Bumps the package version, then runs a full build (which syncs the
/// manifest).
pub fn cmd_bump(ctx: &ProjectContext, args: &BumpArgs) -> Result<()> {
    let (previous, next) = bump_package_version(&ctx.package_path(), args.level)?;

    println!("Bumped version: {} -> {}", previous, next);
    println!();

    cmd_build(ctx, &BuildArgs::default())?;

    println!();
    println!("Next steps:");
    println!("  git add .");
    println!("  git commit -m \"chore: bump version to {}\"", next);
    Ok(())
}
