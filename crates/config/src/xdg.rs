//! XDG Base Directory support for quill.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "quill";

/// Get the configuration directory following XDG conventions.
///
/// Returns `$XDG_CONFIG_HOME/quill` or `~/.config/quill`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine config directory")
}

/// Get the cache directory, where the log file goes.
///
/// Returns `$XDG_CACHE_HOME/quill` or `~/.cache/quill`.
pub fn get_cache_dir() -> Result<PathBuf> {
    dirs::cache_dir()
        .map(|p| p.join(APP_NAME))
        .context("Failed to determine cache directory")
}
