//! Enhancer configuration stored in `enhancer.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::engine::REPAIRED_DURABILITY;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "enhancer.toml";

/// Enhancer configuration (TOML).
///
/// Missing fields default to values matching the engine's own bounds.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EnhancerConfig {
    /// Highest durability accepted on input items.
    pub max_durability: i32,

    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Pretty-print item JSON on stdout.
    pub pretty: bool,
    /// Print the `[+N]` display name instead of the canonical one.
    /// Never affects what `--write` persists.
    pub display_name: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            display_name: false,
        }
    }
}

impl Default for EnhancerConfig {
    fn default() -> Self {
        Self {
            max_durability: REPAIRED_DURABILITY,
            output: OutputConfig::default(),
        }
    }
}

impl EnhancerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_durability <= 0 {
            return Err(anyhow!("max_durability must be > 0"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `EnhancerConfig::default()`.
pub fn load_config(path: &Path) -> Result<EnhancerConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = EnhancerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: EnhancerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    debug!(path = %path.display(), max_durability = cfg.max_durability, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &EnhancerConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, EnhancerConfig::default());
        assert_eq!(cfg.max_durability, 100);
        assert!(cfg.output.pretty);
        assert!(!cfg.output.display_name);
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("enhancer.toml");
        let cfg = EnhancerConfig {
            max_durability: 250,
            output: OutputConfig {
                pretty: false,
                display_name: true,
            },
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("enhancer.toml");
        fs::write(&path, "[output]\ndisplay_name = true\n").expect("write");
        let cfg = load_config(&path).expect("load");
        assert_eq!(cfg.max_durability, 100);
        assert!(cfg.output.pretty);
        assert!(cfg.output.display_name);
    }

    #[test]
    fn rejects_non_positive_max_durability() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("enhancer.toml");
        fs::write(&path, "max_durability = 0\n").expect("write");
        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("max_durability must be > 0"));
    }
}
