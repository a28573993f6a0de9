//! Project context resolution for promptpack.
//!
//! Every command works relative to a project root (`--root`, default the
//! current directory). This module loads the project's config once and
//! resolves all the paths commands need from it, so no command has to join
//! paths by hand.

use crate::config::{Config, DEFAULT_CONFIG_FILE};
use crate::error::Result;
use log::debug;
use std::path::{Path, PathBuf};

/// Resolved paths and configuration for one project.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Project root; relative config paths resolve against it.
    pub root: PathBuf,

    /// Loaded configuration (defaults when no config file exists).
    pub config: Config,
}

impl ProjectContext {
    /// Resolve the context for `root`.
    ///
    /// `config_path` overrides the default `<root>/promptpack.yaml`; an
    /// explicitly given config file must exist.
    pub fn resolve(root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load(path)?,
            None => Config::load_or_default(root.join(DEFAULT_CONFIG_FILE))?,
        };

        debug!("project root: {}", root.display());
        Ok(Self {
            root: root.to_path_buf(),
            config,
        })
    }

    /// Context with an already-loaded configuration.
    pub fn with_config(root: &Path, config: Config) -> Self {
        Self {
            root: root.to_path_buf(),
            config,
        }
    }

    /// Directory holding prompt files.
    pub fn prompts_dir(&self) -> PathBuf {
        self.root.join(&self.config.prompts_dir)
    }

    /// Output directory for the generated package.
    pub fn dist_dir(&self) -> PathBuf {
        self.root.join(&self.config.dist_dir)
    }

    /// Package path inside the output directory.
    pub fn dist_output_path(&self) -> PathBuf {
        self.dist_dir().join(&self.config.output_file)
    }

    /// Package copy at the project root.
    pub fn root_output_path(&self) -> PathBuf {
        self.root.join(&self.config.output_file)
    }

    /// Manifest file path.
    pub fn manifest_path(&self) -> PathBuf {
        self.root.join(&self.config.manifest_file)
    }

    /// Package version file path.
    pub fn package_path(&self) -> PathBuf {
        self.root.join(&self.config.package_file)
    }
}
