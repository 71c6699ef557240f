use anyhow::Result;
use quill_buffer::TagStyle;

use crate::locator;
use crate::{SearchOptions, TextSurface};

/// Name of the tag marking search hits.
pub const HIGHLIGHT_TAG: &str = "find_hl";

/// Marks every occurrence of the search term with [`HIGHLIGHT_TAG`].
#[derive(Debug, Clone)]
pub struct Highlighter {
    style: TagStyle,
}

impl Highlighter {
    pub fn new(style: TagStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &TagStyle {
        &self.style
    }

    /// Make sure the surface knows the highlight tag. Idempotent.
    pub fn ensure<S: TextSurface + ?Sized>(&self, surface: &mut S) {
        surface.ensure_tag(HIGHLIGHT_TAG, self.style.clone());
    }

    /// Re-tag all occurrences of `term`, returning how many were tagged.
    pub fn highlight_all<S: TextSurface + ?Sized>(
        &self,
        surface: &mut S,
        term: &str,
        options: SearchOptions,
    ) -> Result<usize> {
        self.clear(surface)?;
        if term.is_empty() {
            return Ok(0);
        }

        // Tagging does not touch the text, so the positions stay valid
        let matches = locator::find_all(surface, term, options)?;
        for found in &matches {
            surface.apply_tag(HIGHLIGHT_TAG, found.start, found.end)?;
        }
        Ok(matches.len())
    }

    /// Remove the highlight from the whole document
    pub fn clear<S: TextSurface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        let (start, end) = (surface.begin(), surface.end());
        surface.remove_tag(HIGHLIGHT_TAG, start, end)
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(TagStyle::new("gold", "black"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingSurface;
    use quill_buffer::TextView;

    fn setup(text: &str) -> (TextView, Highlighter) {
        let mut view = TextView::from_text(text);
        let highlighter = Highlighter::default();
        highlighter.ensure(&mut view);
        (view, highlighter)
    }

    #[test]
    fn test_highlight_all_tags_every_match() {
        let (mut view, hl) = setup("Foo bar foo baz FOO");
        let count = hl
            .highlight_all(&mut view, "foo", SearchOptions::default())
            .unwrap();
        assert_eq!(count, 3);
        assert_eq!(view.buffer().tag_spans(HIGHLIGHT_TAG), vec![0..3, 8..11, 16..19]);
    }

    #[test]
    fn test_highlight_all_is_idempotent() {
        let (mut view, hl) = setup("abc abc abc");
        let opts = SearchOptions::default();
        hl.highlight_all(&mut view, "abc", opts).unwrap();
        let first = view.buffer().tag_spans(HIGHLIGHT_TAG);
        hl.highlight_all(&mut view, "abc", opts).unwrap();
        assert_eq!(view.buffer().tag_spans(HIGHLIGHT_TAG), first);
    }

    #[test]
    fn test_highlight_all_scans_once() {
        let text = "ab ".repeat(500);
        let mut surface = CountingSurface::new(&text);
        let hl = Highlighter::default();
        hl.ensure(&mut surface);

        let count = hl
            .highlight_all(&mut surface, "AB", SearchOptions::default())
            .unwrap();
        assert_eq!(count, 500);
        assert_eq!(surface.full_scans.get(), 1);
        assert_eq!(surface.next_scans.get(), 0);
        assert_eq!(surface.term_searches.get(), 0);
    }

    #[test]
    fn test_empty_term_only_clears() {
        let (mut view, hl) = setup("abc abc");
        let opts = SearchOptions::default();
        hl.highlight_all(&mut view, "abc", opts).unwrap();
        assert_eq!(hl.highlight_all(&mut view, "", opts).unwrap(), 0);
        assert!(view.buffer().tag_spans(HIGHLIGHT_TAG).is_empty());
    }

    #[test]
    fn test_new_term_replaces_old_highlights() {
        let (mut view, hl) = setup("one two one");
        let opts = SearchOptions::default();
        hl.highlight_all(&mut view, "one", opts).unwrap();
        hl.highlight_all(&mut view, "two", opts).unwrap();
        assert_eq!(view.buffer().tag_spans(HIGHLIGHT_TAG), vec![4..7]);
    }

    #[test]
    fn test_ensure_keeps_existing_style() {
        let mut view = TextView::from_text("");
        Highlighter::new(TagStyle::new("red", "white")).ensure(&mut view);
        Highlighter::default().ensure(&mut view);
        assert_eq!(
            view.buffer().tag_style(HIGHLIGHT_TAG),
            Some(&TagStyle::new("red", "white"))
        );
    }

    #[test]
    fn test_clear_without_tag_fails() {
        let mut view = TextView::from_text("x");
        assert!(Highlighter::default().clear(&mut view).is_err());
    }
}
