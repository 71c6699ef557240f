//! Editor window for quill.
//!
//! Headless counterpart of a desktop editor window: one text view, a status
//! footer, file actions, a light/dark mode and lazily created find and
//! replace dialogs driven through `quill-text-search`.
//!
//! ```text
//!   quill (bin) ──► AppWindow ──► TextView (quill-buffer)
//!                      │
//!                      ├──► FindDialog    ─┐
//!                      └──► ReplaceDialog ─┴──► quill-text-search
//! ```

pub mod app;
pub mod dialog;
pub mod state;

pub use app::AppWindow;
pub use dialog::{FindDialog, ReplaceDialog};
pub use state::{Command, Outcome, QuitChoice, ThemeMode};

use std::path::PathBuf;
use std::str::FromStr;

use quill_config::{Config, LoggingSettings};
use quill_logger::LogLevel;

/// Initialize the global logger from the `[logging]` section.
///
/// Without an explicit `file_path` the log goes to the XDG cache directory;
/// if that cannot be determined, entries are kept in memory only.
pub fn init_logging(settings: &LoggingSettings) {
    let file_path = match &settings.file_path {
        Some(path) => Some(PathBuf::from(path)),
        None => Config::default_log_path().ok(),
    };

    if let Some(parent) = file_path.as_ref().and_then(|path| path.parent()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Failed to create log directory {}: {}", parent.display(), e);
        }
    }

    let min_level = LogLevel::from_str(&settings.min_level).unwrap_or(LogLevel::Info);
    quill_logger::init(file_path, settings.max_entries, min_level);
    quill_logger::info("quill started");
}
