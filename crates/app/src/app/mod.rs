//! Main window.
//!
//! Contains the AppWindow struct; file actions and key handling live in the
//! submodules.

use anyhow::Result;
use std::path::Path;

use quill_buffer::{TextBuffer, TextView, Viewport};
use quill_config::Config;

use crate::dialog::{FindDialog, ReplaceDialog};
use crate::state::{Command, Outcome, ThemeMode};

mod file_actions;
mod key_handler;

const READY: &str = "Ready.";
const MODIFIED: &str = "Modified";

/// Editor window: one document, a footer and two optional dialogs.
#[derive(Debug)]
pub struct AppWindow {
    view: TextView,
    config: Config,
    /// Footer text
    status: String,
    theme: ThemeMode,
    /// Whether "Modified" was already reported for the current changes
    modified_reported: bool,
    find_dialog: Option<FindDialog>,
    replace_dialog: Option<ReplaceDialog>,
    should_quit: bool,
}

impl AppWindow {
    /// Create an empty window configured from `config`
    pub fn new(config: Config) -> Self {
        let viewport = Viewport::new(config.editor.viewport_width, config.editor.viewport_height);
        let theme = ThemeMode::from_dark(config.editor.dark_theme);
        Self {
            view: TextView::new(TextBuffer::new(), viewport),
            config,
            status: READY.to_string(),
            theme,
            modified_reported: false,
            find_dialog: None,
            replace_dialog: None,
            should_quit: false,
        }
    }

    pub fn view(&self) -> &TextView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut TextView {
        &mut self.view
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Footer status line
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.view.buffer().file_path()
    }

    pub fn is_modified(&self) -> bool {
        self.view.buffer().is_modified()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn find_dialog(&self) -> Option<&FindDialog> {
        self.find_dialog.as_ref()
    }

    pub fn replace_dialog(&self) -> Option<&ReplaceDialog> {
        self.replace_dialog.as_ref()
    }

    /// Run a menu or accelerator command
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        quill_logger::debug(format!("Command: {:?}", command));
        match command {
            Command::Open(path) => {
                self.open(&path);
                Ok(Outcome::Done)
            }
            Command::Save => Ok(self.save()),
            Command::SaveAs(path) => {
                self.save_as(&path);
                Ok(Outcome::Done)
            }
            Command::Find => {
                self.open_find();
                Ok(Outcome::Done)
            }
            Command::Replace => {
                self.open_replace();
                Ok(Outcome::Done)
            }
            Command::ToggleTheme => {
                self.toggle_theme();
                Ok(Outcome::Done)
            }
            Command::Quit => Ok(self.quit()),
        }
    }

    /// Show the find dialog, creating it on first use
    pub fn open_find(&mut self) -> &mut FindDialog {
        let view = &mut self.view;
        let settings = &self.config.search;
        let dialog = self
            .find_dialog
            .get_or_insert_with(|| FindDialog::new(view, settings));
        dialog.present();
        dialog
    }

    /// Show the replace dialog, creating it on first use
    pub fn open_replace(&mut self) -> &mut ReplaceDialog {
        let view = &mut self.view;
        let settings = &self.config.search;
        let dialog = self
            .replace_dialog
            .get_or_insert_with(|| ReplaceDialog::new(view, settings));
        dialog.present();
        dialog
    }

    /// Run `action` against the find dialog (shown if needed) and the text.
    ///
    /// The footer picks up buffer changes afterwards.
    pub fn with_find<R>(
        &mut self,
        action: impl FnOnce(&mut FindDialog, &mut TextView) -> Result<R>,
    ) -> Result<R> {
        self.open_find();
        let result = match self.find_dialog.as_mut() {
            Some(dialog) => action(dialog, &mut self.view),
            None => anyhow::bail!("Find dialog is not available"),
        };
        self.poll_changes();
        result
    }

    /// Run `action` against the replace dialog (shown if needed) and the text.
    pub fn with_replace<R>(
        &mut self,
        action: impl FnOnce(&mut ReplaceDialog, &mut TextView) -> Result<R>,
    ) -> Result<R> {
        self.open_replace();
        let result = match self.replace_dialog.as_mut() {
            Some(dialog) => action(dialog, &mut self.view),
            None => anyhow::bail!("Replace dialog is not available"),
        };
        self.poll_changes();
        result
    }

    /// Close both dialogs, clearing their highlights
    pub fn close_dialogs(&mut self) -> Result<()> {
        if let Some(dialog) = self.find_dialog.as_mut() {
            dialog.close(&mut self.view)?;
        }
        if let Some(dialog) = self.replace_dialog.as_mut() {
            dialog.close(&mut self.view)?;
        }
        Ok(())
    }

    /// Flip light/dark mode
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.set_status(format!("Theme: {}", self.theme));
    }

    /// Report the first change after a load or save as "Modified".
    ///
    /// Call after anything that may have edited the text.
    pub fn poll_changes(&mut self) {
        let modified = self.view.buffer().is_modified();
        if modified && !self.modified_reported {
            self.set_status(MODIFIED);
        }
        self.modified_reported = modified;
    }

    pub(crate) fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }
}
