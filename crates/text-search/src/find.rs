//! Find dialog core: next/previous navigation with wrap-around.

use anyhow::Result;
use quill_buffer::{Match, TagStyle};

use crate::highlight::Highlighter;
use crate::locator;
use crate::{SearchOptions, Status, TextSurface, SCROLL_MARGIN};

/// Match selected by the last successful navigation.
///
/// Held as plain offsets plus the revision they belong to; a different
/// revision means somebody else edited the text in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LastMatch {
    start: usize,
    end: usize,
    revision: u64,
}

/// Stateful search behind the Find dialog.
///
/// The session is either idle or remembers the last match, in which case
/// `next` continues after it and `previous` before it.
#[derive(Debug, Clone)]
pub struct FindSession {
    term: String,
    options: SearchOptions,
    last: Option<LastMatch>,
    highlighter: Highlighter,
    status: Status,
    scroll_margin: f32,
}

impl FindSession {
    /// Create a session and register the highlight tag on the surface
    pub fn new<S: TextSurface + ?Sized>(surface: &mut S, options: SearchOptions) -> Self {
        Self::with_style(surface, options, Highlighter::default().style().clone())
    }

    /// Same as [`FindSession::new`] with a custom highlight style
    pub fn with_style<S: TextSurface + ?Sized>(
        surface: &mut S,
        options: SearchOptions,
        style: TagStyle,
    ) -> Self {
        let highlighter = Highlighter::new(style);
        highlighter.ensure(surface);
        Self {
            term: String::new(),
            options,
            last: None,
            highlighter,
            status: Status::TypeTerm,
            scroll_margin: SCROLL_MARGIN,
        }
    }

    /// Fraction of the viewport kept free around a selected match
    pub fn set_scroll_margin(&mut self, margin: f32) {
        self.scroll_margin = margin;
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Current status line
    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// A previous navigation selected a match
    pub fn has_last(&self) -> bool {
        self.last.is_some()
    }

    /// The remembered match, if it still refers to the current text
    pub fn last_match<S: TextSurface + ?Sized>(&self, surface: &S) -> Option<Match> {
        self.last
            .filter(|last| last.revision == surface.revision())
            .map(|last| Match {
                start: surface.position_at(last.start),
                end: surface.position_at(last.end),
            })
    }

    /// Change the search term
    pub fn set_term<S: TextSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        term: &str,
    ) -> Result<Status> {
        self.term = term.to_string();
        self.refresh(surface)
    }

    /// Change all options at once
    pub fn set_options<S: TextSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        options: SearchOptions,
    ) -> Result<Status> {
        self.options = options;
        self.refresh(surface)
    }

    pub fn set_case_sensitive<S: TextSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        case_sensitive: bool,
    ) -> Result<Status> {
        let options = SearchOptions {
            case_sensitive,
            ..self.options
        };
        self.set_options(surface, options)
    }

    pub fn set_wrap_around<S: TextSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        wrap_around: bool,
    ) -> Result<Status> {
        let options = SearchOptions {
            wrap_around,
            ..self.options
        };
        self.set_options(surface, options)
    }

    pub fn set_highlight_all<S: TextSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        highlight_all: bool,
    ) -> Result<Status> {
        let options = SearchOptions {
            highlight_all,
            ..self.options
        };
        self.set_options(surface, options)
    }

    /// Select the next occurrence after the last match or the caret.
    pub fn next<S: TextSurface + ?Sized>(&mut self, surface: &mut S) -> Result<Status> {
        let Some(pattern) = locator::compile(&self.term, self.options)? else {
            return Ok(self.report(Status::EnterTerm));
        };

        let from = match self.live_last(surface) {
            Some(last) => last.end,
            None => surface.cursor()?,
        };

        if let Some(found) = surface.find_next(from, &pattern)? {
            self.select(surface, found)?;
            return Ok(self.report(Status::MatchFound));
        }

        if self.options.wrap_around {
            let begin = surface.begin();
            if let Some(found) = surface.find_next(begin, &pattern)? {
                self.select(surface, found)?;
                return Ok(self.report(Status::WrappedToStart));
            }
        }

        Ok(self.report(Status::NoMoreMatches))
    }

    /// Select the closest occurrence before the last match or the caret.
    pub fn previous<S: TextSurface + ?Sized>(&mut self, surface: &mut S) -> Result<Status> {
        let Some(pattern) = locator::compile(&self.term, self.options)? else {
            return Ok(self.report(Status::EnterTerm));
        };

        let bound = match self.live_last(surface) {
            Some(last) => last.start,
            None => surface.cursor()?,
        };

        let matches = surface.find_all(&pattern)?;
        if let Some(found) = locator::last_before(&matches, bound) {
            self.select(surface, found)?;
            return Ok(self.report(Status::MatchFound));
        }

        if self.options.wrap_around {
            if let Some(found) = matches.last().copied() {
                self.select(surface, found)?;
                return Ok(self.report(Status::WrappedToEnd));
            }
        }

        Ok(self.report(Status::NoEarlierMatches))
    }

    /// Drop highlights when the dialog goes away
    pub fn close<S: TextSurface + ?Sized>(&mut self, surface: &mut S) -> Result<()> {
        self.last = None;
        self.highlighter.clear(surface)
    }

    /// Re-apply or clear highlights according to the current options
    pub(crate) fn rehighlight<S: TextSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        if self.options.highlight_all {
            let count = self
                .highlighter
                .highlight_all(surface, &self.term, self.options)?;
            quill_logger::debug(format!("Highlighted {} match(es) of {:?}", count, self.term));
            Ok(())
        } else {
            self.highlighter.clear(surface)
        }
    }

    /// Forget the last match
    pub(crate) fn reset(&mut self) {
        self.last = None;
    }

    /// Last match, dropping it if the text changed underneath
    pub(crate) fn live_last<S: TextSurface + ?Sized>(&mut self, surface: &S) -> Option<Match> {
        let live = self.last_match(surface);
        if live.is_none() && self.last.take().is_some() {
            quill_logger::debug("Text changed since the last match; searching from the caret");
        }
        live
    }

    /// Record `status` as the current status line
    pub(crate) fn report(&mut self, status: Status) -> Status {
        quill_logger::debug(format!("find {:?}: {}", self.term, status));
        self.status = status.clone();
        status
    }

    fn refresh<S: TextSurface + ?Sized>(&mut self, surface: &mut S) -> Result<Status> {
        self.last = None;
        self.rehighlight(surface)?;
        let status = if self.term.is_empty() {
            Status::TypeTerm
        } else {
            Status::Ready
        };
        Ok(self.report(status))
    }

    fn select<S: TextSurface + ?Sized>(&mut self, surface: &mut S, found: Match) -> Result<()> {
        surface.set_selection(found.start, found.end)?;
        surface.scroll_to(found.start, self.scroll_margin)?;
        surface.grab_focus();
        self.last = Some(LastMatch {
            start: found.start.offset(),
            end: found.end.offset(),
            revision: surface.revision(),
        });
        Ok(())
    }
}
