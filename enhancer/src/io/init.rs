//! Scaffolding for `enhancer init`.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use tracing::info;

use super::config::{DEFAULT_CONFIG_FILE, EnhancerConfig, write_config};
use super::item_store::write_item;
use crate::item::sample_item;

/// Default sample item file name.
pub const DEFAULT_ITEM_FILE: &str = "item.json";

/// Canonical file locations for a project root.
#[derive(Debug, Clone)]
pub struct EnhancerPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub item_path: PathBuf,
}

impl EnhancerPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_path: root.join(DEFAULT_CONFIG_FILE),
            item_path: root.join(DEFAULT_ITEM_FILE),
            root,
        }
    }
}

/// Options for `init_workspace`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing files.
    pub force: bool,
}

/// Write a default config and a sample item into `root`.
///
/// Fails if either file already exists unless `options.force` is set.
pub fn init_workspace(root: &Path, options: &InitOptions) -> Result<EnhancerPaths> {
    let paths = EnhancerPaths::new(root);
    if !options.force {
        for path in [&paths.config_path, &paths.item_path] {
            if path.exists() {
                return Err(anyhow!(
                    "enhancer init: {} already exists (use --force to overwrite)",
                    path.display()
                ));
            }
        }
    }

    write_config(&paths.config_path, &EnhancerConfig::default())?;
    write_item(&paths.item_path, &sample_item())?;
    info!(root = %paths.root.display(), "initialized enhancer files");

    Ok(paths)
}
