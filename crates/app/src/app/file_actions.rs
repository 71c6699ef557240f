//! Open, save and quit.
//!
//! File errors never escape: they end up in the footer and the log.

use std::path::Path;

use super::AppWindow;
use crate::state::{Outcome, QuitChoice};

impl AppWindow {
    /// Load `path` into the view
    pub fn open(&mut self, path: &Path) {
        match self.view.buffer_mut().load_file(path) {
            Ok(()) => {
                quill_logger::info(format!("Opened {}", path.display()));
                self.view.viewport_mut().scroll_to_top();
                self.modified_reported = false;
                self.set_status(format!("Opened: {}", path.display()));
            }
            Err(e) => {
                quill_logger::warn(format!("{:#}", e));
                self.set_status(format!("Failed to open: {}", path.display()));
            }
        }
    }

    /// Save to the current path.
    ///
    /// Does nothing without changes; asks for a path when there is none.
    pub fn save(&mut self) -> Outcome {
        if !self.is_modified() {
            return Outcome::Done;
        }
        match self.current_path().map(Path::to_path_buf) {
            Some(path) => {
                self.save_as(&path);
                Outcome::Done
            }
            None => Outcome::NeedsPath,
        }
    }

    /// Save to `path`, which becomes the current path on success.
    ///
    /// Returns whether the file was written.
    pub fn save_as(&mut self, path: &Path) -> bool {
        match self.view.buffer_mut().save_to(path) {
            Ok(()) => {
                quill_logger::info(format!("Saved {}", path.display()));
                self.modified_reported = false;
                self.set_status(format!("Saved: {}", path.display()));
                true
            }
            Err(e) => {
                quill_logger::error(format!("{:#}", e));
                self.set_status(format!("Failed to save: {}", path.display()));
                false
            }
        }
    }

    /// Close the window, unless there are unsaved changes to ask about
    pub fn quit(&mut self) -> Outcome {
        if self.is_modified() {
            return Outcome::UnsavedChanges;
        }
        self.should_quit = true;
        Outcome::Quit
    }

    /// Finish a quit that returned [`Outcome::UnsavedChanges`].
    ///
    /// Saving without a current path returns [`Outcome::NeedsPath`]; the
    /// caller saves with `SaveAs` and quits again. A failed save keeps the
    /// window open.
    pub fn resolve_quit(&mut self, choice: QuitChoice) -> Outcome {
        match choice {
            QuitChoice::Cancel => Outcome::Done,
            QuitChoice::Discard => {
                quill_logger::info("Discarding unsaved changes");
                self.should_quit = true;
                Outcome::Quit
            }
            QuitChoice::Save => match self.current_path().map(Path::to_path_buf) {
                Some(path) if self.save_as(&path) => {
                    self.should_quit = true;
                    Outcome::Quit
                }
                Some(_) => Outcome::Done,
                None => Outcome::NeedsPath,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Command;
    use quill_config::Config;
    use tempfile::TempDir;

    fn edited_window() -> AppWindow {
        let mut window = AppWindow::new(Config::default());
        let begin = window.view().buffer().begin();
        window.view_mut().buffer_mut().insert(begin, "draft").unwrap();
        window
    }

    #[test]
    fn test_open_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello\r\nworld\r\n").unwrap();

        let mut window = AppWindow::new(Config::default());
        window.execute(Command::Open(path.clone())).unwrap();

        assert_eq!(window.status(), format!("Opened: {}", path.display()));
        assert_eq!(window.view().buffer().text(), "hello\nworld\n");
        assert_eq!(window.current_path(), Some(path.as_path()));
        assert!(!window.is_modified());
    }

    #[test]
    fn test_open_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.txt");

        let mut window = edited_window();
        window.open(&path);

        assert_eq!(window.status(), format!("Failed to open: {}", path.display()));
        assert_eq!(window.view().buffer().text(), "draft");
        assert_eq!(window.current_path(), None);
    }

    #[test]
    fn test_save_without_changes_is_noop() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "same").unwrap();

        let mut window = AppWindow::new(Config::default());
        window.open(&path);
        let status = window.status().to_string();

        assert_eq!(window.execute(Command::Save).unwrap(), Outcome::Done);
        assert_eq!(window.status(), status);
    }

    #[test]
    fn test_save_without_path_needs_one() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("new.txt");

        let mut window = edited_window();
        assert_eq!(window.save(), Outcome::NeedsPath);

        window.execute(Command::SaveAs(path.clone())).unwrap();
        assert_eq!(window.status(), format!("Saved: {}", path.display()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "draft");
        assert!(!window.is_modified());
    }

    #[test]
    fn test_save_writes_current_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "one").unwrap();

        let mut window = AppWindow::new(Config::default());
        window.open(&path);
        let end = window.view().buffer().end();
        window.view_mut().buffer_mut().insert(end, " two").unwrap();

        assert_eq!(window.save(), Outcome::Done);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one two");
    }

    #[test]
    fn test_save_failure_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("x.txt");

        let mut window = edited_window();
        assert!(!window.save_as(&path));
        assert_eq!(window.status(), format!("Failed to save: {}", path.display()));
        assert!(window.is_modified());
    }

    #[test]
    fn test_quit_clean_window() {
        let mut window = AppWindow::new(Config::default());
        assert_eq!(window.execute(Command::Quit).unwrap(), Outcome::Quit);
        assert!(window.should_quit());
    }

    #[test]
    fn test_quit_with_changes() {
        let mut window = edited_window();
        assert_eq!(window.quit(), Outcome::UnsavedChanges);
        assert!(!window.should_quit());

        assert_eq!(window.resolve_quit(QuitChoice::Cancel), Outcome::Done);
        assert!(!window.should_quit());

        assert_eq!(window.resolve_quit(QuitChoice::Save), Outcome::NeedsPath);
        assert!(!window.should_quit());

        assert_eq!(window.resolve_quit(QuitChoice::Discard), Outcome::Quit);
        assert!(window.should_quit());
    }

    #[test]
    fn test_quit_save_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("q.txt");
        std::fs::write(&path, "x").unwrap();

        let mut window = AppWindow::new(Config::default());
        window.open(&path);
        let begin = window.view().buffer().begin();
        window.view_mut().buffer_mut().insert(begin, "y").unwrap();

        assert_eq!(window.quit(), Outcome::UnsavedChanges);
        assert_eq!(window.resolve_quit(QuitChoice::Save), Outcome::Quit);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "yx");
    }
}
