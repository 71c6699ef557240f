//! Text search and replace for quill.
//!
//! The engine works against any [`TextSurface`]: a buffer that hands out
//! transient positions, keeps persistent markers across edits and can tag
//! spans. On top of the forward-search primitive it builds previous-match
//! lookup, highlight-all, and the find and replace sessions behind the
//! editor's dialogs.

mod find;
mod highlight;
pub mod locator;
mod replace;
mod status;
mod surface;
#[cfg(test)]
mod testing;

use serde::{Deserialize, Serialize};

pub use find::FindSession;
pub use highlight::{Highlighter, HIGHLIGHT_TAG};
pub use replace::ReplaceSession;
pub use status::Status;
pub use surface::TextSurface;

pub use quill_buffer::{Match, MarkerId, Position, TagStyle};

/// Fraction of the viewport kept free around a selected match.
pub const SCROLL_MARGIN: f32 = 0.15;

/// Search options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Case-sensitive search.
    pub case_sensitive: bool,
    /// Continue from the other end of the document when nothing is left.
    pub wrap_around: bool,
    /// Tag every occurrence of the term.
    pub highlight_all: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            wrap_around: true,
            highlight_all: true,
        }
    }
}
