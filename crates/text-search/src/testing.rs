//! Instrumented surface for the engine's tests.

use std::cell::Cell;

use anyhow::{bail, Result};
use quill_buffer::{Match, MarkerId, Position, SearchPattern, TagStyle, TextView};

use crate::TextSurface;

/// A [`TextView`] that counts searches and can be told to refuse insertions.
pub struct CountingSurface {
    pub view: TextView,
    /// Calls to the term-based `forward_search`
    pub term_searches: Cell<usize>,
    /// Calls to `find_next` with a compiled pattern
    pub next_scans: Cell<usize>,
    /// Calls to `find_all`
    pub full_scans: Cell<usize>,
    /// Insertions accepted before `insert` starts failing
    pub inserts_left: Option<usize>,
}

impl CountingSurface {
    pub fn new(text: &str) -> Self {
        Self {
            view: TextView::from_text(text),
            term_searches: Cell::new(0),
            next_scans: Cell::new(0),
            full_scans: Cell::new(0),
            inserts_left: None,
        }
    }

    pub fn text(&self) -> String {
        self.view.buffer().text()
    }

    pub fn reset_counts(&self) {
        self.term_searches.set(0);
        self.next_scans.set(0);
        self.full_scans.set(0);
    }
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

impl TextSurface for CountingSurface {
    fn begin(&self) -> Position {
        TextSurface::begin(&self.view)
    }

    fn end(&self) -> Position {
        TextSurface::end(&self.view)
    }

    fn cursor(&self) -> Result<Position> {
        TextSurface::cursor(&self.view)
    }

    fn revision(&self) -> u64 {
        TextSurface::revision(&self.view)
    }

    fn position_at(&self, offset: usize) -> Position {
        TextSurface::position_at(&self.view, offset)
    }

    fn forward_search(
        &self,
        from: Position,
        term: &str,
        case_insensitive: bool,
    ) -> Result<Option<Match>> {
        bump(&self.term_searches);
        TextSurface::forward_search(&self.view, from, term, case_insensitive)
    }

    fn find_next(&self, from: Position, pattern: &SearchPattern) -> Result<Option<Match>> {
        bump(&self.next_scans);
        TextSurface::find_next(&self.view, from, pattern)
    }

    fn find_all(&self, pattern: &SearchPattern) -> Result<Vec<Match>> {
        bump(&self.full_scans);
        TextSurface::find_all(&self.view, pattern)
    }

    fn create_marker(&mut self, position: Position, left_gravity: bool) -> Result<MarkerId> {
        TextSurface::create_marker(&mut self.view, position, left_gravity)
    }

    fn marker_position(&self, marker: MarkerId) -> Result<Position> {
        TextSurface::marker_position(&self.view, marker)
    }

    fn delete_marker(&mut self, marker: MarkerId) -> Result<()> {
        TextSurface::delete_marker(&mut self.view, marker)
    }

    fn erase(&mut self, start: Position, end: Position) -> Result<()> {
        TextSurface::erase(&mut self.view, start, end)
    }

    fn insert(&mut self, position: Position, text: &str) -> Result<()> {
        if let Some(left) = self.inserts_left.as_mut() {
            if *left == 0 {
                bail!("Insert refused at {}", position.offset());
            }
            *left -= 1;
        }
        TextSurface::insert(&mut self.view, position, text)
    }

    fn set_selection(&mut self, start: Position, end: Position) -> Result<()> {
        TextSurface::set_selection(&mut self.view, start, end)
    }

    fn scroll_to(&mut self, position: Position, within_margin: f32) -> Result<()> {
        TextSurface::scroll_to(&mut self.view, position, within_margin)
    }

    fn grab_focus(&mut self) {
        TextSurface::grab_focus(&mut self.view);
    }

    fn begin_user_action(&mut self) {
        TextSurface::begin_user_action(&mut self.view);
    }

    fn end_user_action(&mut self) {
        TextSurface::end_user_action(&mut self.view);
    }

    fn ensure_tag(&mut self, name: &str, style: TagStyle) {
        TextSurface::ensure_tag(&mut self.view, name, style);
    }

    fn apply_tag(&mut self, name: &str, start: Position, end: Position) -> Result<()> {
        TextSurface::apply_tag(&mut self.view, name, start, end)
    }

    fn remove_tag(&mut self, name: &str, start: Position, end: Position) -> Result<()> {
        TextSurface::remove_tag(&mut self.view, name, start, end)
    }
}
