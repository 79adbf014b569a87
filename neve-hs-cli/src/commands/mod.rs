//! CLI command implementations.

pub mod classify;
pub mod patch;

use neve_cabal::{BuildConfig, ToolchainInfo};
use std::fs;
use std::path::Path;

/// Read a build config from a JSON file.
pub fn load_config(path: &Path) -> Result<BuildConfig, String> {
    let json = fs::read_to_string(path)
        .map_err(|e| format!("cannot read config '{}': {}", path.display(), e))?;
    BuildConfig::from_json(&json)
        .map_err(|e| format!("invalid config '{}': {}", path.display(), e))
}

/// Read a toolchain description from a JSON file, or use the default compiler.
pub fn load_toolchain(path: Option<&Path>) -> Result<ToolchainInfo, String> {
    let Some(path) = path else {
        return Ok(ToolchainInfo::default());
    };
    let json = fs::read_to_string(path)
        .map_err(|e| format!("cannot read toolchain '{}': {}", path.display(), e))?;
    serde_json::from_str(&json)
        .map_err(|e| format!("invalid toolchain '{}': {}", path.display(), e))
}
