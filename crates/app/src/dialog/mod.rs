//! Find and replace dialogs.
//!
//! A dialog owns its session plus the UI-level state (visibility, entry
//! texts). Every operation borrows the window's text view.

mod find;
mod replace;

pub use find::FindDialog;
pub use replace::ReplaceDialog;

use quill_config::SearchSettings;
use quill_text_search::{SearchOptions, TagStyle};

/// Initial option toggles from the `[search]` section
fn options_from(settings: &SearchSettings) -> SearchOptions {
    SearchOptions {
        case_sensitive: settings.case_sensitive,
        wrap_around: settings.wrap_around,
        highlight_all: settings.highlight_all,
    }
}

fn style_from(settings: &SearchSettings) -> TagStyle {
    TagStyle::new(&settings.highlight_bg, &settings.highlight_fg)
}
