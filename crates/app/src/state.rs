//! Commands and outcomes exchanged between the window and its caller.

use std::fmt;
use std::path::PathBuf;

/// Menu and accelerator actions of the window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(PathBuf),
    Save,
    SaveAs(PathBuf),
    Find,
    Replace,
    ToggleTheme,
    Quit,
}

/// What the caller has to do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Handled; the footer tells the result
    Done,
    /// A file path must be chosen, then `SaveAs` (or `Open`) issued
    NeedsPath,
    /// Quit requested with unsaved changes; answer with
    /// [`AppWindow::resolve_quit`](crate::AppWindow::resolve_quit)
    UnsavedChanges,
    /// The window is closing
    Quit,
}

/// Answer to the unsaved-changes question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuitChoice {
    Save,
    Discard,
    Cancel,
}

/// Color scheme of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Light => f.write_str("light"),
            ThemeMode::Dark => f.write_str("dark"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert!(ThemeMode::from_dark(true).is_dark());
        assert_eq!(ThemeMode::Dark.to_string(), "dark");
    }
}
