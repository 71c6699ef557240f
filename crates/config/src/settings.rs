//! Configuration structures for quill settings.

use serde::{Deserialize, Serialize};

use crate::defaults;

/// Application configuration with nested sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Find and replace defaults
    #[serde(default)]
    pub search: SearchSettings,

    /// Editor window settings
    #[serde(default)]
    pub editor: EditorSettings,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Initial state of the find/replace dialogs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Match letter case exactly
    #[serde(default)]
    pub case_sensitive: bool,

    /// Continue from the other end of the document when no match is left
    #[serde(default = "default_wrap_around")]
    pub wrap_around: bool,

    /// Highlight every occurrence of the term
    #[serde(default = "default_highlight_all")]
    pub highlight_all: bool,

    /// Fraction of the viewport kept free around a selected match (0.0-0.49)
    #[serde(default = "default_scroll_margin")]
    pub scroll_margin: f32,

    /// Highlight background color
    #[serde(default = "default_highlight_bg")]
    pub highlight_bg: String,

    /// Highlight foreground color
    #[serde(default = "default_highlight_fg")]
    pub highlight_fg: String,
}

/// Editor window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorSettings {
    /// Visible lines
    #[serde(default = "default_viewport_height")]
    pub viewport_height: usize,

    /// Visible columns
    #[serde(default = "default_viewport_width")]
    pub viewport_width: usize,

    /// Start in dark mode
    #[serde(default)]
    pub dark_theme: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log file path (optional)
    #[serde(default)]
    pub file_path: Option<String>,

    /// Minimum log level (debug, info, warn, error)
    #[serde(default = "default_min_level")]
    pub min_level: String,

    /// Entries kept in memory
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

// Default value functions for serde
fn default_wrap_around() -> bool {
    defaults::WRAP_AROUND
}

fn default_highlight_all() -> bool {
    defaults::HIGHLIGHT_ALL
}

fn default_scroll_margin() -> f32 {
    defaults::SCROLL_MARGIN
}

fn default_highlight_bg() -> String {
    defaults::HIGHLIGHT_BG.to_string()
}

fn default_highlight_fg() -> String {
    defaults::HIGHLIGHT_FG.to_string()
}

fn default_viewport_height() -> usize {
    defaults::VIEWPORT_HEIGHT
}

fn default_viewport_width() -> usize {
    defaults::VIEWPORT_WIDTH
}

fn default_min_level() -> String {
    defaults::MIN_LOG_LEVEL.to_string()
}

fn default_max_entries() -> usize {
    defaults::MAX_LOG_ENTRIES
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            case_sensitive: defaults::CASE_SENSITIVE,
            wrap_around: default_wrap_around(),
            highlight_all: default_highlight_all(),
            scroll_margin: default_scroll_margin(),
            highlight_bg: default_highlight_bg(),
            highlight_fg: default_highlight_fg(),
        }
    }
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            viewport_height: default_viewport_height(),
            viewport_width: default_viewport_width(),
            dark_theme: defaults::DARK_THEME,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            file_path: None,
            min_level: default_min_level(),
            max_entries: default_max_entries(),
        }
    }
}
