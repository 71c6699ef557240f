//! Text buffer with rope data structure for quill.
//!
//! Provides rope-backed text storage together with the two kinds of
//! positions the search engine needs: transient [`Position`]s that are only
//! valid until the next edit, and persistent markers ([`MarkerId`]) that the
//! buffer keeps up to date across insertions and deletions. Highlight tags,
//! the selection, atomic edit groups and the viewport live here as well.

mod buffer;
mod marker;
mod position;
mod search;
mod tags;
mod view;
mod viewport;

pub use buffer::{LineEnding, TextBuffer};
pub use marker::MarkerId;
pub use position::{Match, Position};
pub use search::SearchPattern;
pub use tags::TagStyle;
pub use view::TextView;
pub use viewport::Viewport;
