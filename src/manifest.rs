//! Version bookkeeping between the package file and the manifest.
//!
//! The package file (`package.json`) owns the version. The manifest
//! (`_manifest.yml`) repeats it on a `version:` line, and this module keeps
//! the two in step without disturbing anything else in the manifest:
//! comments, key order and blank lines are preserved byte for byte.

use crate::error::{PackError, Result};
use crate::fs::atomic_write_file;
use log::debug;
use semver::Version;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;
use std::path::Path;

/// Which component of the version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BumpLevel {
    Major,
    Minor,
    #[default]
    Patch,
}

/// Result of syncing the manifest version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The manifest already carried the package version.
    AlreadyInSync { version: String },
    /// The manifest's `version:` line was rewritten.
    Updated {
        previous: Option<String>,
        version: String,
    },
    /// The manifest has no top-level `version:` line; nothing was written.
    NoVersionLine,
}

/// Read the `version` string from the package file.
///
/// Returns `Ok(None)` when the file has no `version` field.
///
/// # Errors
///
/// An unreadable file or malformed JSON is fatal.
pub fn read_package_version(path: &Path) -> Result<Option<String>> {
    let package = read_package(path)?;
    Ok(package
        .get("version")
        .and_then(JsonValue::as_str)
        .map(str::to_string))
}

/// Current `version` recorded in manifest text, if any.
///
/// Numeric versions (`version: 1.10`) are taken from the raw line text, so
/// they come back as written rather than as a reformatted number.
pub fn manifest_version(content: &str) -> Option<String> {
    let manifest: YamlValue = serde_yaml::from_str(content).ok()?;
    match manifest.get("version")? {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(_) => version_line_text(content),
        _ => None,
    }
}

/// Value text of the first top-level `version:` line, trailing comment removed.
fn version_line_text(content: &str) -> Option<String> {
    let value = content
        .lines()
        .find_map(|line| line.strip_prefix("version:"))?;
    let value = value.split(" #").next().unwrap_or(value).trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Replace every top-level `version:` line with `version: "<version>"`.
///
/// All other lines are kept untouched, as is the presence or absence of a
/// trailing newline. Returns `None` when no line starts with `version:`.
pub fn rewrite_manifest_version(content: &str, version: &str) -> Option<String> {
    let mut matched = false;
    let rewritten = content
        .split('\n')
        .map(|line| {
            if line.starts_with("version:") {
                matched = true;
                let ending = if line.ends_with('\r') { "\r" } else { "" };
                format!("version: \"{}\"{}", version, ending)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    matched.then_some(rewritten)
}

/// Bring the manifest at `path` in line with `version`.
///
/// The file is only written when the recorded version differs and a
/// top-level `version:` line exists to rewrite.
///
/// # Errors
///
/// An unreadable or unwritable manifest is fatal.
pub fn sync_manifest(path: &Path, version: &str) -> Result<SyncOutcome> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        PackError::UserError(format!(
            "failed to read manifest '{}': {}",
            path.display(),
            e
        ))
    })?;

    let previous = manifest_version(&content);
    if previous.as_deref() == Some(version) {
        return Ok(SyncOutcome::AlreadyInSync {
            version: version.to_string(),
        });
    }

    debug!(
        "rewriting manifest version {:?} -> {} in {}",
        previous,
        version,
        path.display()
    );
    let Some(rewritten) = rewrite_manifest_version(&content, version) else {
        return Ok(SyncOutcome::NoVersionLine);
    };
    atomic_write_file(path, &rewritten)?;

    Ok(SyncOutcome::Updated {
        previous,
        version: version.to_string(),
    })
}

/// Compute the next version.
///
/// Lower components reset to zero and pre-release/build metadata is dropped.
pub fn bump_version(current: &str, level: BumpLevel) -> Result<String> {
    let version = Version::parse(current.trim()).map_err(|e| {
        PackError::UserError(format!("invalid version '{}': {}", current, e))
    })?;

    let next = match level {
        BumpLevel::Major => Version::new(version.major + 1, 0, 0),
        BumpLevel::Minor => Version::new(version.major, version.minor + 1, 0),
        BumpLevel::Patch => Version::new(version.major, version.minor, version.patch + 1),
    };

    Ok(next.to_string())
}

/// Bump the version in the package file, returning `(previous, next)`.
///
/// The file is rewritten pretty-printed with two-space indentation and a
/// trailing newline; key order is kept.
pub fn bump_package_version(path: &Path, level: BumpLevel) -> Result<(String, String)> {
    let mut package = read_package(path)?;

    let current = package
        .get("version")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| {
            PackError::UserError(format!(
                "'{}' has no version field to bump",
                path.display()
            ))
        })?
        .to_string();
    let next = bump_version(&current, level)?;

    let JsonValue::Object(fields) = &mut package else {
        return Err(PackError::UserError(format!(
            "'{}' is not a JSON object",
            path.display()
        )));
    };
    fields.insert("version".to_string(), JsonValue::String(next.clone()));

    let mut content = serde_json::to_string_pretty(&package).map_err(|e| {
        PackError::UserError(format!("failed to serialize '{}': {}", path.display(), e))
    })?;
    content.push('\n');
    atomic_write_file(path, &content)?;

    Ok((current, next))
}

fn read_package(path: &Path) -> Result<JsonValue> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        PackError::UserError(format!(
            "failed to read package file '{}': {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        PackError::UserError(format!(
            "failed to parse package file '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MANIFEST: &str = "# Pack manifest\nname: ai-pack\ntitle: \"AI Pack\"\n\n# keep me\nversion: \"0.1.0\"\nauthor: someone\n";

    #[test]
    fn test_manifest_version() {
        assert_eq!(manifest_version(MANIFEST).as_deref(), Some("0.1.0"));
        assert_eq!(manifest_version("version: 1.5\n").as_deref(), Some("1.5"));
        assert_eq!(manifest_version("name: x\n"), None);
        assert_eq!(manifest_version(": : not yaml ["), None);
    }

    #[test]
    fn test_manifest_version_keeps_numeric_text() {
        assert_eq!(manifest_version("version: 1.10\n").as_deref(), Some("1.10"));
        assert_eq!(manifest_version("version: 2.0 # pinned\n").as_deref(), Some("2.0"));
        assert_eq!(manifest_version("version: 3\r\nname: x\r\n").as_deref(), Some("3"));
    }

    #[test]
    fn test_rewrite_only_touches_version_line() {
        let rewritten = rewrite_manifest_version(MANIFEST, "0.2.0").unwrap();
        assert_eq!(
            rewritten,
            MANIFEST.replace("version: \"0.1.0\"", "version: \"0.2.0\"")
        );
    }

    #[test]
    fn test_rewrite_preserves_missing_trailing_newline() {
        let rewritten = rewrite_manifest_version("a: 1\nversion: 0.1.0", "1.0.0").unwrap();
        assert_eq!(rewritten, "a: 1\nversion: \"1.0.0\"");
    }

    #[test]
    fn test_rewrite_preserves_crlf() {
        let rewritten = rewrite_manifest_version("a: 1\r\nversion: 0.1.0\r\n", "1.0.0").unwrap();
        assert_eq!(rewritten, "a: 1\r\nversion: \"1.0.0\"\r\n");
    }

    #[test]
    fn test_rewrite_ignores_nested_version_keys() {
        let content = "deps:\n  version: 9\nversion: 1\n";
        assert_eq!(
            rewrite_manifest_version(content, "2.0.0").as_deref(),
            Some("deps:\n  version: 9\nversion: \"2.0.0\"\n")
        );
        assert_eq!(rewrite_manifest_version("deps:\n  version: 9\n", "2.0.0"), None);
    }

    #[test]
    fn test_bump_version() {
        assert_eq!(bump_version("1.2.3", BumpLevel::Patch).unwrap(), "1.2.4");
        assert_eq!(bump_version("1.2.3", BumpLevel::Minor).unwrap(), "1.3.0");
        assert_eq!(bump_version("1.2.3", BumpLevel::Major).unwrap(), "2.0.0");
        assert_eq!(bump_version("1.2.3-beta.1", BumpLevel::Patch).unwrap(), "1.2.4");
        assert!(bump_version("1.2", BumpLevel::Patch).is_err());
    }

    #[test]
    fn test_sync_manifest_updates_and_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("_manifest.yml");
        std::fs::write(&path, MANIFEST).unwrap();

        let outcome = sync_manifest(&path, "0.3.0").unwrap();
        assert_eq!(
            outcome,
            SyncOutcome::Updated {
                previous: Some("0.1.0".to_string()),
                version: "0.3.0".to_string(),
            }
        );
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("version: \"0.3.0\""));
        assert!(content.starts_with("# Pack manifest\n"));
        assert!(content.contains("# keep me\n"));

        let outcome = sync_manifest(&path, "0.3.0").unwrap();
        assert_eq!(
            outcome,
            SyncOutcome::AlreadyInSync {
                version: "0.3.0".to_string()
            }
        );
    }

    #[test]
    fn test_sync_manifest_without_version_line_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("_manifest.yml");
        std::fs::write(&path, "name: pack\n").unwrap();

        let outcome = sync_manifest(&path, "1.0.0").unwrap();
        assert_eq!(outcome, SyncOutcome::NoVersionLine);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "name: pack\n");
    }

    #[test]
    fn test_sync_manifest_numeric_version_in_sync() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("_manifest.yml");
        std::fs::write(&path, "version: 1.10\n").unwrap();

        let outcome = sync_manifest(&path, "1.10").unwrap();
        assert_eq!(
            outcome,
            SyncOutcome::AlreadyInSync {
                version: "1.10".to_string()
            }
        );
    }

    #[test]
    fn test_sync_manifest_missing_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let result = sync_manifest(&temp_dir.path().join("_manifest.yml"), "1.0.0");
        assert!(result.is_err());
    }

    #[test]
    fn test_read_package_version() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");

        std::fs::write(&path, r#"{"name": "pack", "version": "1.4.0"}"#).unwrap();
        assert_eq!(read_package_version(&path).unwrap().as_deref(), Some("1.4.0"));

        std::fs::write(&path, r#"{"name": "pack"}"#).unwrap();
        assert_eq!(read_package_version(&path).unwrap(), None);

        std::fs::write(&path, "{ not json").unwrap();
        assert!(read_package_version(&path).is_err());
    }

    #[test]
    fn test_bump_package_version_keeps_key_order() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        std::fs::write(
            &path,
            "{\n  \"name\": \"pack\",\n  \"version\": \"0.9.9\",\n  \"private\": true\n}\n",
        )
        .unwrap();

        let (previous, next) = bump_package_version(&path, BumpLevel::Minor).unwrap();
        assert_eq!(previous, "0.9.9");
        assert_eq!(next, "0.10.0");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "{\n  \"name\": \"pack\",\n  \"version\": \"0.10.0\",\n  \"private\": true\n}\n"
        );
    }

    #[test]
    fn test_bump_package_version_requires_version() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("package.json");
        std::fs::write(&path, "{}").unwrap();
        assert!(bump_package_version(&path, BumpLevel::Patch).is_err());
    }
}
