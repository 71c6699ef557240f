//! Replace dialog core: single and bulk replacement.
//!
//! Every position that has to outlive an `erase` or `insert` is carried
//! through a marker; transient positions are re-derived after each edit.

use anyhow::Result;
use quill_buffer::{MarkerId, Match, SearchPattern, TagStyle};

use crate::find::FindSession;
use crate::locator;
use crate::{SearchOptions, Status, TextSurface};

/// Find session plus a replacement string.
#[derive(Debug, Clone)]
pub struct ReplaceSession {
    find: FindSession,
    replacement: String,
}

impl ReplaceSession {
    /// Create a session and register the highlight tag on the surface
    pub fn new<S: TextSurface + ?Sized>(surface: &mut S, options: SearchOptions) -> Self {
        Self {
            find: FindSession::new(surface, options),
            replacement: String::new(),
        }
    }

    /// Same as [`ReplaceSession::new`] with a custom highlight style
    pub fn with_style<S: TextSurface + ?Sized>(
        surface: &mut S,
        options: SearchOptions,
        style: TagStyle,
    ) -> Self {
        Self {
            find: FindSession::with_style(surface, options, style),
            replacement: String::new(),
        }
    }

    /// Underlying find session (term, options, last match)
    pub fn find(&self) -> &FindSession {
        &self.find
    }

    pub fn find_mut(&mut self) -> &mut FindSession {
        &mut self.find
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Set the replacement text; an empty string deletes matches
    pub fn set_replacement(&mut self, replacement: &str) {
        self.replacement = replacement.to_string();
    }

    pub fn status(&self) -> &Status {
        self.find.status()
    }

    pub fn set_term<S: TextSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        term: &str,
    ) -> Result<Status> {
        self.find.set_term(surface, term)
    }

    pub fn set_options<S: TextSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        options: SearchOptions,
    ) -> Result<Status> {
        self.find.set_options(surface, options)
    }

    /// Select the next occurrence; same contract as [`FindSession::next`]
    pub fn find_next<S: TextSurface + ?Sized>(&mut self, surface: &mut S) -> Result<Status> {
        self.find.next(surface)
    }

    /// Replace the current match and move on to the next one.
    ///
    /// The held match is re-checked against the text first; if it no longer
    /// matches, the next occurrence is looked up and replaced instead. The
    /// search afterwards starts behind the inserted text.
    pub fn replace_next<S: TextSurface + ?Sized>(&mut self, surface: &mut S) -> Result<Status> {
        if self.find.term().is_empty() {
            return Ok(self.find.report(Status::EnterTerm));
        }

        let target = match self.held_match(surface)? {
            Some(found) => found,
            None => {
                let status = self.find.next(surface)?;
                match self.find.last_match(surface) {
                    Some(found) if status.is_match() => found,
                    _ => return Ok(status),
                }
            }
        };

        surface.begin_user_action();
        let replaced = replace_span(surface, target, &self.replacement);
        surface.end_user_action();
        replaced?;

        quill_logger::debug(format!(
            "Replaced {:?} at {} with {:?}",
            self.find.term(),
            target.start.offset(),
            self.replacement
        ));

        self.find.reset();
        if self.find.options().highlight_all {
            self.find.rehighlight(surface)?;
        }

        let next = self.find.next(surface)?;
        Ok(self.find.report(Status::Replaced(Box::new(next))))
    }

    /// Replace every occurrence in one atomic group.
    ///
    /// Scanning resumes after each inserted replacement, so a replacement
    /// containing the term is never matched again.
    pub fn replace_all<S: TextSurface + ?Sized>(&mut self, surface: &mut S) -> Result<Status> {
        let Some(pattern) = locator::compile(self.find.term(), self.find.options())? else {
            return Ok(self.find.report(Status::EnterTerm));
        };

        let begin = surface.begin();
        let cursor = surface.create_marker(begin, true)?;

        surface.begin_user_action();
        let result = self.replace_from(surface, &pattern, cursor);
        surface.end_user_action();
        let count = result?;

        quill_logger::info(format!(
            "Replaced {} occurrence(s) of {:?}",
            count,
            self.find.term()
        ));

        self.find.reset();
        self.find.rehighlight(surface)?;

        Ok(self.find.report(Status::ReplacedCount(count)))
    }

    /// The held match, if a fresh scan from its start still finds it there
    fn held_match<S: TextSurface + ?Sized>(&mut self, surface: &S) -> Result<Option<Match>> {
        let Some(last) = self.find.live_last(surface) else {
            return Ok(None);
        };
        let rescan = locator::find_forward(surface, last.start, self.find.term(), self.find.options())?;
        Ok(rescan.filter(|found| found.start == last.start))
    }

    /// Replacement loop driven by the `cursor` marker.
    ///
    /// Returns the number of replacements. Whatever marker acts as the cursor
    /// when the loop stops is deleted, also when a step failed.
    fn replace_from<S: TextSurface + ?Sized>(
        &self,
        surface: &mut S,
        pattern: &SearchPattern,
        mut cursor: MarkerId,
    ) -> Result<usize> {
        let mut count = 0;

        let result = loop {
            match self.replace_step(surface, pattern, cursor) {
                Ok(Some(after)) => {
                    count += 1;
                    let done = std::mem::replace(&mut cursor, after);
                    if let Err(e) = surface.delete_marker(done) {
                        break Err(e);
                    }
                }
                Ok(None) => break Ok(count),
                Err(e) => break Err(e),
            }
        };

        let released = surface.delete_marker(cursor);
        let count = result?;
        released?;
        Ok(count)
    }

    /// Replace the first match at or after `cursor`.
    ///
    /// Returns a new marker just behind the inserted text, or `None` when
    /// nothing is left.
    fn replace_step<S: TextSurface + ?Sized>(
        &self,
        surface: &mut S,
        pattern: &SearchPattern,
        cursor: MarkerId,
    ) -> Result<Option<MarkerId>> {
        let from = surface.marker_position(cursor)?;
        let Some(found) = surface.find_next(from, pattern)? else {
            return Ok(None);
        };

        // Right gravity carries the resume point past the inserted text
        let after = surface.create_marker(found.end, false)?;
        if let Err(e) = replace_span(surface, found, &self.replacement) {
            surface.delete_marker(after)?;
            return Err(e);
        }
        Ok(Some(after))
    }
}

/// Swap the text of `span` for `replacement`.
fn replace_span<S: TextSurface + ?Sized>(surface: &mut S, span: Match, replacement: &str) -> Result<()> {
    let start = surface.create_marker(span.start, true)?;
    let at = surface
        .erase(span.start, span.end)
        .and_then(|()| surface.marker_position(start));
    let released = surface.delete_marker(start);
    let at = at?;
    released?;
    surface.insert(at, replacement)
}
