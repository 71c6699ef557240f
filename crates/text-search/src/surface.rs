//! The buffer interface the search engine consumes.

use anyhow::Result;
use quill_buffer::{Match, MarkerId, Position, SearchPattern, TagStyle, TextView};

/// Editable, viewable text as seen by the find and replace sessions.
///
/// Positions returned by a surface are transient: any `erase` or `insert`
/// invalidates them. Anything that has to outlive a mutation goes through a
/// marker.
pub trait TextSurface {
    fn begin(&self) -> Position;
    fn end(&self) -> Position;
    /// Caret position
    fn cursor(&self) -> Result<Position>;
    /// Changes whenever the text changes
    fn revision(&self) -> u64;
    /// Position at a char offset of the current text
    fn position_at(&self, offset: usize) -> Position;

    /// Search `term` literally from `from`, compiling it first
    fn forward_search(
        &self,
        from: Position,
        term: &str,
        case_insensitive: bool,
    ) -> Result<Option<Match>> {
        let pattern = SearchPattern::new(term, case_insensitive)?;
        self.find_next(from, &pattern)
    }

    /// First match of a compiled pattern at or after `from`
    fn find_next(&self, from: Position, pattern: &SearchPattern) -> Result<Option<Match>>;

    /// Every non-overlapping match of `pattern`, in document order
    fn find_all(&self, pattern: &SearchPattern) -> Result<Vec<Match>> {
        let mut matches = Vec::new();
        if pattern.is_empty() {
            return Ok(matches);
        }
        let mut from = self.begin();
        while let Some(found) = self.find_next(from, pattern)? {
            from = found.end;
            matches.push(found);
        }
        Ok(matches)
    }

    fn create_marker(&mut self, position: Position, left_gravity: bool) -> Result<MarkerId>;
    fn marker_position(&self, marker: MarkerId) -> Result<Position>;
    fn delete_marker(&mut self, marker: MarkerId) -> Result<()>;

    fn erase(&mut self, start: Position, end: Position) -> Result<()>;
    fn insert(&mut self, position: Position, text: &str) -> Result<()>;

    fn set_selection(&mut self, start: Position, end: Position) -> Result<()>;
    fn scroll_to(&mut self, position: Position, within_margin: f32) -> Result<()>;
    fn grab_focus(&mut self);

    fn begin_user_action(&mut self);
    fn end_user_action(&mut self);

    /// Register a tag unless it already exists
    fn ensure_tag(&mut self, name: &str, style: TagStyle);
    fn apply_tag(&mut self, name: &str, start: Position, end: Position) -> Result<()>;
    fn remove_tag(&mut self, name: &str, start: Position, end: Position) -> Result<()>;
}

impl TextSurface for TextView {
    fn begin(&self) -> Position {
        self.buffer().begin()
    }

    fn end(&self) -> Position {
        self.buffer().end()
    }

    fn cursor(&self) -> Result<Position> {
        self.buffer().cursor()
    }

    fn revision(&self) -> u64 {
        self.buffer().revision()
    }

    fn position_at(&self, offset: usize) -> Position {
        self.buffer().position_at(offset)
    }

    fn find_next(&self, from: Position, pattern: &SearchPattern) -> Result<Option<Match>> {
        self.buffer().find_next(from, pattern)
    }

    fn find_all(&self, pattern: &SearchPattern) -> Result<Vec<Match>> {
        Ok(self.buffer().find_all(pattern))
    }

    fn create_marker(&mut self, position: Position, left_gravity: bool) -> Result<MarkerId> {
        self.buffer_mut().create_marker(position, left_gravity)
    }

    fn marker_position(&self, marker: MarkerId) -> Result<Position> {
        self.buffer().marker_position(marker)
    }

    fn delete_marker(&mut self, marker: MarkerId) -> Result<()> {
        self.buffer_mut().delete_marker(marker)
    }

    fn erase(&mut self, start: Position, end: Position) -> Result<()> {
        self.buffer_mut().erase(start, end)
    }

    fn insert(&mut self, position: Position, text: &str) -> Result<()> {
        self.buffer_mut().insert(position, text)
    }

    fn set_selection(&mut self, start: Position, end: Position) -> Result<()> {
        self.buffer_mut().set_selection(start, end)
    }

    fn scroll_to(&mut self, position: Position, within_margin: f32) -> Result<()> {
        TextView::scroll_to(self, position, within_margin).map(|_| ())
    }

    fn grab_focus(&mut self) {
        TextView::grab_focus(self);
    }

    fn begin_user_action(&mut self) {
        self.buffer_mut().begin_user_action();
    }

    fn end_user_action(&mut self) {
        self.buffer_mut().end_user_action();
    }

    fn ensure_tag(&mut self, name: &str, style: TagStyle) {
        self.buffer_mut().ensure_tag(name, style);
    }

    fn apply_tag(&mut self, name: &str, start: Position, end: Position) -> Result<()> {
        self.buffer_mut().apply_tag(name, start, end)
    }

    fn remove_tag(&mut self, name: &str, start: Position, end: Position) -> Result<()> {
        self.buffer_mut().remove_tag(name, start, end)
    }
}
