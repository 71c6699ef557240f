//! Locating occurrences of a term.
//!
//! Each lookup compiles the term once into a [`SearchPattern`] and hands it to
//! the surface. The surface only searches forward, so a previous match is the
//! last hit of a full forward scan that begins before the bound.

use anyhow::Result;
use quill_buffer::{Match, Position, SearchPattern};

use crate::{SearchOptions, TextSurface};

/// Compile `term` for the given options; `None` for an empty term
pub fn compile(term: &str, options: SearchOptions) -> Result<Option<SearchPattern>> {
    if term.is_empty() {
        return Ok(None);
    }
    SearchPattern::new(term, !options.case_sensitive).map(Some)
}

/// First occurrence of `term` at or after `from`.
pub fn find_forward<S: TextSurface + ?Sized>(
    surface: &S,
    from: Position,
    term: &str,
    options: SearchOptions,
) -> Result<Option<Match>> {
    match compile(term, options)? {
        Some(pattern) => surface.find_next(from, &pattern),
        None => Ok(None),
    }
}

/// Last occurrence of `term` starting strictly before `bound`.
pub fn find_backward<S: TextSurface + ?Sized>(
    surface: &S,
    bound: Position,
    term: &str,
    options: SearchOptions,
) -> Result<Option<Match>> {
    let Some(pattern) = compile(term, options)? else {
        return Ok(None);
    };
    let matches = surface.find_all(&pattern)?;
    Ok(last_before(&matches, bound))
}

/// Last of `matches` (in document order) starting strictly before `bound`
pub fn last_before(matches: &[Match], bound: Position) -> Option<Match> {
    matches
        .iter()
        .take_while(|found| found.start.offset() < bound.offset())
        .last()
        .copied()
}

/// Every occurrence of `term`, scanning from the start.
///
/// Occurrences do not overlap: each scan resumes at the end of the
/// previous match.
pub fn find_all<S: TextSurface + ?Sized>(
    surface: &S,
    term: &str,
    options: SearchOptions,
) -> Result<Vec<Match>> {
    match compile(term, options)? {
        Some(pattern) => surface.find_all(&pattern),
        None => Ok(Vec::new()),
    }
}
