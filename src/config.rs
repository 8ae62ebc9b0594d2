//! On-disk configuration for the `nthprime` binary.
//!
//! Loaded from an optional TOML file, layered under CLI flags: flags passed
//! on the command line always win, an explicit config file overrides these
//! defaults, and anything neither specifies falls back to
//! [`crate::locator::Options::default`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::locator::{Method, Options};

/// Config-file representation of [`Options`], minus the logger (a config
/// file cannot name a callback).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub method: Option<String>,
    pub segment_size: Option<u64>,
    pub regular_threshold: Option<u64>,
    pub prime_counting_threshold: Option<u64>,
}

impl FileConfig {
    /// Merge this file's fields onto a base [`Options`], returning the result.
    /// Fields left unset in the file pass the base value through unchanged.
    pub fn apply<'a>(&self, mut base: Options<'a>) -> Result<Options<'a>> {
        if let Some(method) = &self.method {
            base.method = method
                .parse::<Method>()
                .map_err(|e| anyhow::anyhow!("config: {e}"))?;
        }
        if let Some(v) = self.segment_size {
            base.segment_size = v;
        }
        if let Some(v) = self.regular_threshold {
            base.regular_threshold = v;
        }
        if let Some(v) = self.prime_counting_threshold {
            base.prime_counting_threshold = v;
        }
        Ok(base)
    }
}

/// Load a [`FileConfig`] from `path`. Missing files are not an error: they
/// just mean "no config file supplied", leaving every field unset.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config: FileConfig =
        toml::from_str(&content).with_context(|| format!("parsing config file {}", path.display()))?;
    Ok(config)
}

/// Save a [`FileConfig`] to `path`, creating parent directories as needed.
pub fn save_config(config: &FileConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Default config file location: `~/.config/nthprime/config.toml`, or
/// `$XDG_CONFIG_HOME/nthprime/config.toml` when set.
pub fn default_config_path() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(xdg).join("nthprime").join("config.toml"));
    }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .context("cannot determine home directory")?;
    Ok(PathBuf::from(home).join(".config").join("nthprime").join("config.toml"))
}
