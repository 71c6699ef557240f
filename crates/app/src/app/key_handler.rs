//! Accelerator handling.

use anyhow::Result;
use crossterm::event::KeyEvent;
use quill_keyboard::{shortcut_for, Shortcut};

use super::AppWindow;
use crate::state::{Command, Outcome};

impl AppWindow {
    /// Handle a window-wide accelerator.
    ///
    /// Returns `None` when the key is not an accelerator and belongs to the
    /// text. Ctrl+O has no path to open, so it answers
    /// [`Outcome::NeedsPath`].
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<Option<Outcome>> {
        let Some(shortcut) = shortcut_for(key) else {
            return Ok(None);
        };

        let command = match shortcut {
            Shortcut::Open => return Ok(Some(Outcome::NeedsPath)),
            Shortcut::Save => Command::Save,
            Shortcut::Find => Command::Find,
            Shortcut::Replace => Command::Replace,
            Shortcut::Quit => Command::Quit,
        };
        self.execute(command).map(Some)
    }
}
