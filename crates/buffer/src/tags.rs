//! Named highlight tags applied over char ranges.

use std::collections::HashMap;
use std::ops::Range;

use crate::marker::{shift_for_erase, shift_for_insert};

/// Visual style attached to a tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStyle {
    /// Background color name or `#rrggbb`
    pub background: String,
    /// Foreground color name or `#rrggbb`
    pub foreground: String,
}

impl TagStyle {
    pub fn new(background: impl Into<String>, foreground: impl Into<String>) -> Self {
        Self {
            background: background.into(),
            foreground: foreground.into(),
        }
    }
}

#[derive(Debug, Clone)]
struct Tag {
    style: TagStyle,
    /// Sorted, non-overlapping, non-adjacent, non-empty spans
    spans: Vec<Range<usize>>,
}

impl Tag {
    fn apply(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let mut merged = range;
        let mut kept = Vec::with_capacity(self.spans.len() + 1);
        for span in self.spans.drain(..) {
            if span.end < merged.start || span.start > merged.end {
                kept.push(span);
            } else {
                merged = merged.start.min(span.start)..merged.end.max(span.end);
            }
        }
        let idx = kept.partition_point(|s| s.start < merged.start);
        kept.insert(idx, merged);
        self.spans = kept;
    }

    fn remove(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        let mut kept = Vec::with_capacity(self.spans.len() + 1);
        for span in self.spans.drain(..) {
            if span.end <= range.start || span.start >= range.end {
                kept.push(span);
                continue;
            }
            if span.start < range.start {
                kept.push(span.start..range.start);
            }
            if span.end > range.end {
                kept.push(range.end..span.end);
            }
        }
        self.spans = kept;
    }

    fn normalize(&mut self) {
        let spans = std::mem::take(&mut self.spans);
        for span in spans {
            self.apply(span);
        }
    }
}

/// Tag table of a buffer
#[derive(Debug, Clone, Default)]
pub(crate) struct TagTable {
    tags: HashMap<String, Tag>,
}

impl TagTable {
    /// Register a tag unless one with that name already exists.
    ///
    /// Returns `true` if the tag was created.
    pub fn ensure(&mut self, name: &str, style: TagStyle) -> bool {
        if self.tags.contains_key(name) {
            return false;
        }
        self.tags.insert(
            name.to_string(),
            Tag {
                style,
                spans: Vec::new(),
            },
        );
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tags.contains_key(name)
    }

    pub fn style(&self, name: &str) -> Option<&TagStyle> {
        self.tags.get(name).map(|t| &t.style)
    }

    pub fn apply(&mut self, name: &str, range: Range<usize>) -> bool {
        match self.tags.get_mut(name) {
            Some(tag) => {
                tag.apply(range);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, name: &str, range: Range<usize>) -> bool {
        match self.tags.get_mut(name) {
            Some(tag) => {
                tag.remove(range);
                true
            }
            None => false,
        }
    }

    pub fn spans(&self, name: &str) -> Option<&[Range<usize>]> {
        self.tags.get(name).map(|t| t.spans.as_slice())
    }

    /// Span starts behave like right-gravity points and span ends like
    /// left-gravity ones, so text typed at either edge stays untagged.
    pub fn on_insert(&mut self, at: usize, len: usize) {
        for tag in self.tags.values_mut() {
            for span in tag.spans.iter_mut() {
                let start = shift_for_insert(span.start, false, at, len);
                let end = shift_for_insert(span.end, true, at, len);
                *span = start..end;
            }
        }
    }

    pub fn on_erase(&mut self, start: usize, end: usize) {
        for tag in self.tags.values_mut() {
            for span in tag.spans.iter_mut() {
                *span = shift_for_erase(span.start, start, end)..shift_for_erase(span.end, start, end);
            }
            tag.spans.retain(|s| !s.is_empty());
            tag.normalize();
        }
    }
}
