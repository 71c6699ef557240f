use anyhow::Result;
use quill_buffer::TextView;
use quill_config::SearchSettings;
use quill_text_search::{ReplaceSession, SearchOptions, Status};

use super::{options_from, style_from};

/// Replace dialog: find and replace entries, option toggles and the
/// Find Next / Replace / Replace All buttons.
#[derive(Debug)]
pub struct ReplaceDialog {
    session: ReplaceSession,
    visible: bool,
}

impl ReplaceDialog {
    pub fn new(view: &mut TextView, settings: &SearchSettings) -> Self {
        let mut session =
            ReplaceSession::with_style(view, options_from(settings), style_from(settings));
        session.find_mut().set_scroll_margin(settings.scroll_margin);
        Self {
            session,
            visible: false,
        }
    }

    pub fn present(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide and clear highlights
    pub fn close(&mut self, view: &mut TextView) -> Result<()> {
        self.visible = false;
        self.session.find_mut().close(view)
    }

    pub fn term(&self) -> &str {
        self.session.find().term()
    }

    pub fn replacement(&self) -> &str {
        self.session.replacement()
    }

    pub fn options(&self) -> SearchOptions {
        self.session.find().options()
    }

    pub fn session(&self) -> &ReplaceSession {
        &self.session
    }

    pub fn status(&self) -> &Status {
        self.session.status()
    }

    pub fn set_term(&mut self, view: &mut TextView, term: &str) -> Result<Status> {
        self.session.set_term(view, term)
    }

    pub fn set_replacement(&mut self, replacement: &str) {
        self.session.set_replacement(replacement);
    }

    pub fn set_case_sensitive(&mut self, view: &mut TextView, on: bool) -> Result<Status> {
        self.session.find_mut().set_case_sensitive(view, on)
    }

    pub fn set_wrap_around(&mut self, view: &mut TextView, on: bool) -> Result<Status> {
        self.session.find_mut().set_wrap_around(view, on)
    }

    pub fn set_highlight_all(&mut self, view: &mut TextView, on: bool) -> Result<Status> {
        self.session.find_mut().set_highlight_all(view, on)
    }

    pub fn find_next(&mut self, view: &mut TextView) -> Result<Status> {
        self.session.find_next(view)
    }

    pub fn replace_next(&mut self, view: &mut TextView) -> Result<Status> {
        self.session.replace_next(view)
    }

    pub fn replace_all(&mut self, view: &mut TextView) -> Result<Status> {
        self.session.replace_all(view)
    }
}
