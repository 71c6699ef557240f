use std::borrow::Cow;
use std::ops::Range;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ropey::Rope;
use unicode_segmentation::UnicodeSegmentation;

use crate::marker::{MarkerId, MarkerSet};
use crate::position::{Match, Position};
use crate::search::SearchPattern;
use crate::tags::{TagStyle, TagTable};

/// Initial size in chars of the slice `find_next` scans at once
const SEARCH_WINDOW: usize = 4096;

/// Line ending type (for saving)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::upper_case_acronyms)]
pub enum LineEnding {
    #[default]
    LF, // Unix \n
    CRLF, // Windows \r\n
}

/// Text buffer based on Rope.
///
/// Every insertion or deletion bumps the revision counter, which invalidates
/// all [`Position`]s handed out before. Markers, tag spans, the caret and the
/// selection bound are adjusted in place instead.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    /// Rope structure for storing text
    rope: Rope,
    /// File path (if exists)
    file_path: Option<PathBuf>,
    /// Modified flag
    modified: bool,
    /// Line ending type (for saving)
    line_ending: LineEnding,
    /// Bumped on every mutation
    revision: u64,
    markers: MarkerSet,
    /// Caret marker (right gravity)
    insert_mark: MarkerId,
    /// Other end of the selection (right gravity)
    selection_bound: MarkerId,
    tags: TagTable,
    /// Nesting depth of begin/end user action calls
    user_action_depth: usize,
    /// Completed top-level user actions
    user_action_count: usize,
}

impl TextBuffer {
    /// Create a new empty buffer
    pub fn new() -> Self {
        Self::from_rope(Rope::new())
    }

    /// Create buffer holding `text`, caret at the start
    pub fn from_text(text: &str) -> Self {
        Self::from_rope(Rope::from_str(text))
    }

    /// Create buffer from Rope
    pub fn from_rope(rope: Rope) -> Self {
        let mut markers = MarkerSet::default();
        let insert_mark = markers.create(0, false);
        let selection_bound = markers.create(0, false);
        Self {
            rope,
            file_path: None,
            modified: false,
            line_ending: LineEnding::LF,
            revision: 0,
            markers,
            insert_mark,
            selection_bound,
            tags: TagTable::default(),
            user_action_depth: 0,
            user_action_count: 0,
        }
    }

    /// Load file into a fresh buffer
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut buffer = Self::new();
        buffer.load_file(path)?;
        Ok(buffer)
    }

    /// Replace the buffer content with a file's content.
    ///
    /// Markers and tags survive (collapsed by the reload), so sessions that
    /// registered a tag keep working against the new text.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        self.line_ending = if contents.contains("\r\n") {
            LineEnding::CRLF
        } else {
            LineEnding::LF
        };

        self.set_text(&contents.replace("\r\n", "\n"));
        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    /// Save file
    pub fn save(&mut self) -> Result<()> {
        if let Some(path) = self.file_path.clone() {
            self.save_to(&path)
        } else {
            anyhow::bail!("No file path set")
        }
    }

    /// Save to specified file
    pub fn save_to<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let text = self.rope.to_string();
        let contents = match self.line_ending {
            LineEnding::LF => text,
            LineEnding::CRLF => text.replace('\n', "\r\n"),
        };

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        self.file_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn set_modified(&mut self, modified: bool) {
        self.modified = modified;
    }

    /// Replace the whole content, caret back at the start
    pub fn set_text(&mut self, text: &str) {
        let len = self.rope.len_chars();
        self.apply_erase(0, len);
        self.apply_insert(0, text);
        self.markers.set(self.insert_mark, 0);
        self.markers.set(self.selection_bound, 0);
    }

    /// Get all text
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Text of a char range
    pub fn slice(&self, start: Position, end: Position) -> Result<String> {
        let range = self.check_range(start, end)?;
        Ok(self.rope.slice(range).to_string())
    }

    /// Length in chars
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Get line count
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Current revision; any edit increments it
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Start of buffer
    pub fn begin(&self) -> Position {
        Position::new(0, self.revision)
    }

    /// End of buffer
    pub fn end(&self) -> Position {
        Position::new(self.rope.len_chars(), self.revision)
    }

    /// Position at char offset, clamped to the buffer length
    pub fn position_at(&self, offset: usize) -> Position {
        Position::new(offset.min(self.rope.len_chars()), self.revision)
    }

    /// Line index and grapheme column of a position
    pub fn line_column(&self, position: Position) -> Result<(usize, usize)> {
        let offset = self.check(position)?;
        let line = self.rope.char_to_line(offset);
        let line_start = self.rope.line_to_char(line);
        let prefix = self.rope.slice(line_start..offset).to_string();
        Ok((line, prefix.graphemes(true).count()))
    }

    /// Search `term` literally, starting at `from`.
    ///
    /// Case-insensitive search uses Unicode simple case folding. Returns
    /// `None` for an empty term or when nothing matches before the end.
    /// Compiles the term on every call; repeated searches should build a
    /// [`SearchPattern`] once and use [`TextBuffer::find_next`].
    pub fn forward_search(
        &self,
        from: Position,
        term: &str,
        case_insensitive: bool,
    ) -> Result<Option<Match>> {
        self.check(from)?;
        if term.is_empty() {
            return Ok(None);
        }
        let pattern = SearchPattern::new(term, case_insensitive)?;
        self.find_next(from, &pattern)
    }

    /// First match of `pattern` at or after `from`.
    ///
    /// Scans the rope in growing windows that overlap by one char less than
    /// the term, so a match found near `from` does not copy the rest of the
    /// text.
    pub fn find_next(&self, from: Position, pattern: &SearchPattern) -> Result<Option<Match>> {
        let mut start = self.check(from)?;
        let term_len = pattern.char_len();
        if term_len == 0 {
            return Ok(None);
        }

        let total = self.rope.len_chars();
        let mut window = SEARCH_WINDOW.max(term_len * 2);
        while start + term_len <= total {
            let end = (start + window).min(total);
            let haystack = self.haystack(start..end);
            if let Some(found) = pattern.regex().find(&haystack) {
                // Convert byte offsets to char offsets
                let match_start = start + haystack[..found.start()].chars().count();
                let match_end = match_start + found.as_str().chars().count();
                return Ok(Some(self.make_match(match_start, match_end)));
            }
            if end == total {
                break;
            }
            // A match crossing `end` starts after `end - term_len`
            start = end + 1 - term_len;
            window = window.saturating_mul(2);
        }
        Ok(None)
    }

    /// Every non-overlapping match of `pattern`, in document order
    pub fn find_all(&self, pattern: &SearchPattern) -> Vec<Match> {
        if pattern.is_empty() {
            return Vec::new();
        }

        let haystack = self.haystack(0..self.rope.len_chars());
        let mut matches = Vec::new();
        let mut byte = 0;
        let mut offset = 0;
        for found in pattern.regex().find_iter(&haystack) {
            offset += haystack[byte..found.start()].chars().count();
            let len = found.as_str().chars().count();
            matches.push(self.make_match(offset, offset + len));
            offset += len;
            byte = found.end();
        }
        matches
    }

    fn haystack(&self, range: Range<usize>) -> Cow<'_, str> {
        let slice = self.rope.slice(range);
        match slice.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(slice.to_string()),
        }
    }

    fn make_match(&self, start: usize, end: usize) -> Match {
        Match {
            start: Position::new(start, self.revision),
            end: Position::new(end, self.revision),
        }
    }

    /// Insert text at position
    pub fn insert(&mut self, position: Position, text: &str) -> Result<()> {
        let offset = self.check(position)?;
        self.apply_insert(offset, text);
        Ok(())
    }

    /// Delete text range
    pub fn erase(&mut self, start: Position, end: Position) -> Result<()> {
        let range = self.check_range(start, end)?;
        self.apply_erase(range.start, range.end);
        Ok(())
    }

    /// Create a persistent marker.
    ///
    /// With left gravity the marker stays before text inserted exactly at
    /// its offset, with right gravity it ends up after it.
    pub fn create_marker(&mut self, position: Position, left_gravity: bool) -> Result<MarkerId> {
        let offset = self.check(position)?;
        Ok(self.markers.create(offset, left_gravity))
    }

    /// Current position of a marker
    pub fn marker_position(&self, marker: MarkerId) -> Result<Position> {
        let offset = self
            .markers
            .get(marker)
            .with_context(|| format!("Unknown marker {:?}", marker))?;
        Ok(Position::new(offset, self.revision))
    }

    /// Move a marker to a new position
    pub fn move_marker(&mut self, marker: MarkerId, position: Position) -> Result<()> {
        let offset = self.check(position)?;
        if !self.markers.set(marker, offset) {
            anyhow::bail!("Unknown marker {:?}", marker);
        }
        Ok(())
    }

    pub fn delete_marker(&mut self, marker: MarkerId) -> Result<()> {
        if marker == self.insert_mark || marker == self.selection_bound {
            anyhow::bail!("Cannot delete a built-in marker");
        }
        if !self.markers.remove(marker) {
            anyhow::bail!("Unknown marker {:?}", marker);
        }
        Ok(())
    }

    /// Number of live markers, including caret and selection bound
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Caret position
    pub fn cursor(&self) -> Result<Position> {
        self.marker_position(self.insert_mark)
    }

    /// Move caret and clear the selection
    pub fn place_cursor(&mut self, position: Position) -> Result<()> {
        self.set_selection(position, position)
    }

    /// Select `[start, end)`; the caret goes to `start`
    pub fn set_selection(&mut self, start: Position, end: Position) -> Result<()> {
        let start = self.check(start)?;
        let end = self.check(end)?;
        self.markers.set(self.insert_mark, start);
        self.markers.set(self.selection_bound, end);
        Ok(())
    }

    /// Selection bounds in document order
    pub fn selection(&self) -> Result<(Position, Position)> {
        let caret = self.cursor()?;
        let bound = self.marker_position(self.selection_bound)?;
        Ok(if caret <= bound {
            (caret, bound)
        } else {
            (bound, caret)
        })
    }

    pub fn begin_user_action(&mut self) {
        self.user_action_depth += 1;
    }

    pub fn end_user_action(&mut self) {
        match self.user_action_depth {
            0 => {}
            1 => {
                self.user_action_depth = 0;
                self.user_action_count += 1;
            }
            _ => self.user_action_depth -= 1,
        }
    }

    /// Inside a begin/end user action pair
    pub fn in_user_action(&self) -> bool {
        self.user_action_depth > 0
    }

    /// Completed top-level user actions
    pub fn user_action_count(&self) -> usize {
        self.user_action_count
    }

    /// Register a tag unless it exists; returns `true` if it was created
    pub fn ensure_tag(&mut self, name: &str, style: TagStyle) -> bool {
        self.tags.ensure(name, style)
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.contains(name)
    }

    pub fn tag_style(&self, name: &str) -> Option<&TagStyle> {
        self.tags.style(name)
    }

    pub fn apply_tag(&mut self, name: &str, start: Position, end: Position) -> Result<()> {
        let range = self.check_range(start, end)?;
        if !self.tags.apply(name, range) {
            anyhow::bail!("Unknown tag: {}", name);
        }
        Ok(())
    }

    pub fn remove_tag(&mut self, name: &str, start: Position, end: Position) -> Result<()> {
        let range = self.check_range(start, end)?;
        if !self.tags.remove(name, range) {
            anyhow::bail!("Unknown tag: {}", name);
        }
        Ok(())
    }

    /// Spans currently carrying the tag, in document order
    pub fn tag_spans(&self, name: &str) -> Vec<Range<usize>> {
        self.tags.spans(name).map(<[_]>::to_vec).unwrap_or_default()
    }

    fn apply_insert(&mut self, offset: usize, text: &str) {
        let len = text.chars().count();
        if len == 0 {
            return;
        }
        self.rope.insert(offset, text);
        self.markers.on_insert(offset, len);
        self.tags.on_insert(offset, len);
        self.revision += 1;
        self.modified = true;
    }

    fn apply_erase(&mut self, start: usize, end: usize) {
        if start >= end {
            return;
        }
        self.rope.remove(start..end);
        self.markers.on_erase(start, end);
        self.tags.on_erase(start, end);
        self.revision += 1;
        self.modified = true;
    }

    /// Validate a position against the current revision
    fn check(&self, position: Position) -> Result<usize> {
        if position.revision() != self.revision {
            anyhow::bail!(
                "Stale position {} (revision {}, buffer is at {})",
                position.offset(),
                position.revision(),
                self.revision
            );
        }
        if position.offset() > self.rope.len_chars() {
            anyhow::bail!(
                "Position {} out of range (length {})",
                position.offset(),
                self.rope.len_chars()
            );
        }
        Ok(position.offset())
    }

    fn check_range(&self, start: Position, end: Position) -> Result<Range<usize>> {
        let start = self.check(start)?;
        let end = self.check(end)?;
        Ok(start.min(end)..start.max(end))
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
