use std::cmp::Ordering;
use std::ops::Range;

/// Transient position in the buffer.
///
/// A position is a char offset stamped with the buffer revision it was
/// taken at. Any insertion or deletion bumps the revision, after which the
/// buffer rejects the position. Positions that must survive an edit have to
/// be turned into a marker first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    offset: usize,
    revision: u64,
}

impl Position {
    pub(crate) fn new(offset: usize, revision: u64) -> Self {
        Self { offset, revision }
    }

    /// Char offset from the start of the buffer
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Buffer revision this position belongs to
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset
            .cmp(&other.offset)
            .then(self.revision.cmp(&other.revision))
    }
}

/// Half-open span `[start, end)` of one occurrence of a search term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: Position,
    pub end: Position,
}

impl Match {
    /// Create a match, ordering the bounds if needed
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Char range covered by the match
    pub fn range(&self) -> Range<usize> {
        self.start.offset..self.end.offset
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.end.offset - self.start.offset
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_orders_bounds() {
        let m = Match::new(Position::new(7, 0), Position::new(3, 0));
        assert_eq!(m.range(), 3..7);
        assert_eq!(m.len(), 4);
        assert!(!m.is_empty());
    }

    #[test]
    fn test_position_ordering_uses_offset_first() {
        let a = Position::new(2, 9);
        let b = Position::new(5, 1);
        assert!(a < b);
    }
}
