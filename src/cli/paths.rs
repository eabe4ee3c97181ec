//! Configuration file lookup and loading

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::config::OverlapConfig;

/// Get the configuration directory for liboverlap
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join("liboverlap"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// Load an [`OverlapConfig`] from a JSON file.
///
/// Missing fields take their default values.
pub fn load_config_file(path: &Path) -> Result<OverlapConfig> {
    validate_config_path(path)?;
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse config: {}", path.display()))
}

/// Resolve the configuration.
///
/// An explicit path must exist. Without one, the default config file is used
/// if present, otherwise the built-in defaults.
pub fn load_config(custom_path: Option<&Path>) -> Result<OverlapConfig> {
    if let Some(path) = custom_path {
        return load_config_file(path);
    }
    match default_config_path() {
        Ok(path) if path.exists() => load_config_file(&path),
        _ => Ok(OverlapConfig::default()),
    }
}
