//! Configuration management for quill.
//!
//! TOML settings stored under the XDG config directory, with every key
//! optional and filled from [`defaults`].

mod settings;
mod xdg;

pub use settings::{Config, EditorSettings, LoggingSettings, SearchSettings};
pub use xdg::{get_cache_dir, get_config_dir};

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Default values as constants
pub mod defaults {
    pub const CASE_SENSITIVE: bool = false;
    pub const WRAP_AROUND: bool = true;
    pub const HIGHLIGHT_ALL: bool = true;
    pub const SCROLL_MARGIN: f32 = 0.15;
    pub const HIGHLIGHT_BG: &str = "gold";
    pub const HIGHLIGHT_FG: &str = "black";
    pub const VIEWPORT_HEIGHT: usize = 40;
    pub const VIEWPORT_WIDTH: usize = 120;
    pub const DARK_THEME: bool = false;
    pub const MIN_LOG_LEVEL: &str = "info";
    pub const MAX_LOG_ENTRIES: usize = 1000;
}

impl Config {
    /// Load configuration from the XDG config file.
    ///
    /// On first run, creates the file with default values.
    /// Missing keys are filled in and written back.
    pub fn load() -> Result<Self> {
        Self::load_or_create(&Self::config_file_path()?)
    }

    /// Load `path`, creating it with defaults when absent and rewriting it
    /// when its normalized form differs.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Self::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let original_content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::validate_content(&original_content)
            .with_context(|| format!("Invalid config: {}", path.display()))?;

        // Serialize back to get normalized content
        let normalized_content = toml::to_string_pretty(&config)?;
        if original_content != normalized_content {
            config.save_to(path)?;
        }

        Ok(config)
    }

    /// Read an explicit config file without writing anything.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::validate_content(&content)
            .with_context(|| format!("Invalid config: {}", path.display()))
    }

    /// Save configuration to the XDG config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Get path to config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(get_config_dir()?.join("config.toml"))
    }

    /// Default log file location.
    pub fn default_log_path() -> Result<PathBuf> {
        Ok(get_cache_dir()?.join("quill.log"))
    }

    /// Parse and validate config content.
    pub fn validate_content(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content).map_err(|e| anyhow::anyhow!("{}", e))?;
        let margin = config.search.scroll_margin;
        if !(0.0..0.5).contains(&margin) {
            anyhow::bail!("search.scroll_margin must be in 0.0..0.5, got {}", margin);
        }
        if config.editor.viewport_height == 0 || config.editor.viewport_width == 0 {
            anyhow::bail!("editor viewport size must be non-zero");
        }
        Ok(config)
    }
}
