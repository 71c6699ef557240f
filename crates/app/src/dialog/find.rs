use anyhow::Result;
use quill_buffer::TextView;
use quill_config::SearchSettings;
use quill_text_search::{FindSession, SearchOptions, Status};

use super::{options_from, style_from};

/// Find dialog: term entry, three option toggles, Previous/Next.
#[derive(Debug)]
pub struct FindDialog {
    session: FindSession,
    visible: bool,
}

impl FindDialog {
    pub fn new(view: &mut TextView, settings: &SearchSettings) -> Self {
        let mut session =
            FindSession::with_style(view, options_from(settings), style_from(settings));
        session.set_scroll_margin(settings.scroll_margin);
        Self {
            session,
            visible: false,
        }
    }

    pub fn present(&mut self) {
        self.visible = true;
    }

    /// Hide without touching the document; highlights stay
    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Hide and clear highlights
    pub fn close(&mut self, view: &mut TextView) -> Result<()> {
        self.visible = false;
        self.session.close(view)
    }

    pub fn term(&self) -> &str {
        self.session.term()
    }

    pub fn options(&self) -> SearchOptions {
        self.session.options()
    }

    pub fn session(&self) -> &FindSession {
        &self.session
    }

    /// Status line text
    pub fn status(&self) -> &Status {
        self.session.status()
    }

    pub fn set_term(&mut self, view: &mut TextView, term: &str) -> Result<Status> {
        self.session.set_term(view, term)
    }

    pub fn set_case_sensitive(&mut self, view: &mut TextView, on: bool) -> Result<Status> {
        self.session.set_case_sensitive(view, on)
    }

    pub fn set_wrap_around(&mut self, view: &mut TextView, on: bool) -> Result<Status> {
        self.session.set_wrap_around(view, on)
    }

    pub fn set_highlight_all(&mut self, view: &mut TextView, on: bool) -> Result<Status> {
        self.session.set_highlight_all(view, on)
    }

    pub fn next(&mut self, view: &mut TextView) -> Result<Status> {
        self.session.next(view)
    }

    pub fn previous(&mut self, view: &mut TextView) -> Result<Status> {
        self.session.previous(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_text_search::HIGHLIGHT_TAG;

    #[test]
    fn test_settings_drive_initial_state() {
        let mut view = TextView::from_text("Word word");
        let settings = SearchSettings {
            case_sensitive: true,
            highlight_bg: "red".to_string(),
            ..SearchSettings::default()
        };
        let mut dialog = FindDialog::new(&mut view, &settings);

        assert!(dialog.options().case_sensitive);
        assert_eq!(
            view.buffer().tag_style(HIGHLIGHT_TAG).map(|s| s.background.as_str()),
            Some("red")
        );
        assert_eq!(dialog.status(), &Status::TypeTerm);

        dialog.set_term(&mut view, "word").unwrap();
        assert_eq!(view.buffer().tag_spans(HIGHLIGHT_TAG), vec![5..9]);
    }

    #[test]
    fn test_hide_keeps_highlights_close_clears() {
        let mut view = TextView::from_text("a b a");
        let mut dialog = FindDialog::new(&mut view, &SearchSettings::default());
        dialog.present();
        dialog.set_term(&mut view, "a").unwrap();

        dialog.hide();
        assert!(!dialog.is_visible());
        assert_eq!(view.buffer().tag_spans(HIGHLIGHT_TAG).len(), 2);

        dialog.present();
        dialog.close(&mut view).unwrap();
        assert!(!dialog.is_visible());
        assert!(view.buffer().tag_spans(HIGHLIGHT_TAG).is_empty());
    }
}
