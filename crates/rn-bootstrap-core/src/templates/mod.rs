//! Template store location and conditional composition
//!
//! This module provides:
//! - The template store: the generator's bundled directory of payload files
//! - Conditional file groups selected by the collected options
//! - The recursive copy into a freshly bootstrapped project

pub mod copier;
pub mod groups;

pub use copier::copy_groups;
pub use groups::{selected_groups, FileGroup};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the template store location.
pub const TEMPLATE_DIR_ENV: &str = "RN_BOOTSTRAP_TEMPLATE_DIR";

/// The generator's own bundled directory of files copied into new projects.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    root: PathBuf,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve the store for this installation: the environment override
    /// when set, otherwise the `template` directory beside the executable.
    pub fn locate() -> Result<Self> {
        if let Ok(dir) = std::env::var(TEMPLATE_DIR_ENV) {
            return Ok(Self::new(dir));
        }

        let exe = std::env::current_exe().context("cannot locate the generator executable")?;
        let dir = exe
            .parent()
            .map(|p| p.join("template"))
            .unwrap_or_else(|| PathBuf::from("template"));
        Ok(Self::new(dir))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute source path for a template-relative path.
    pub fn path_of(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}
