//! Persistent markers that follow the text through edits.

use std::collections::HashMap;

/// Handle to a persistent marker owned by a [`crate::TextBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(u64);

#[derive(Debug, Clone, Copy)]
struct Marker {
    offset: usize,
    left_gravity: bool,
}

/// Offset of a point after `len` chars were inserted at `at`.
///
/// A point sitting exactly at `at` stays put with left gravity and moves past
/// the inserted text with right gravity.
pub(crate) fn shift_for_insert(offset: usize, left_gravity: bool, at: usize, len: usize) -> usize {
    if offset > at || (offset == at && !left_gravity) {
        offset + len
    } else {
        offset
    }
}

/// Offset of a point after `start..end` was removed.
pub(crate) fn shift_for_erase(offset: usize, start: usize, end: usize) -> usize {
    if offset <= start {
        offset
    } else if offset >= end {
        offset - (end - start)
    } else {
        start
    }
}

/// All markers of one buffer
#[derive(Debug, Clone, Default)]
pub(crate) struct MarkerSet {
    markers: HashMap<MarkerId, Marker>,
    next_id: u64,
}

impl MarkerSet {
    pub fn create(&mut self, offset: usize, left_gravity: bool) -> MarkerId {
        let id = MarkerId(self.next_id);
        self.next_id += 1;
        self.markers.insert(
            id,
            Marker {
                offset,
                left_gravity,
            },
        );
        id
    }

    pub fn get(&self, id: MarkerId) -> Option<usize> {
        self.markers.get(&id).map(|m| m.offset)
    }

    /// Move an existing marker, keeping its gravity
    pub fn set(&mut self, id: MarkerId, offset: usize) -> bool {
        match self.markers.get_mut(&id) {
            Some(marker) => {
                marker.offset = offset;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: MarkerId) -> bool {
        self.markers.remove(&id).is_some()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn on_insert(&mut self, at: usize, len: usize) {
        for marker in self.markers.values_mut() {
            marker.offset = shift_for_insert(marker.offset, marker.left_gravity, at, len);
        }
    }

    pub fn on_erase(&mut self, start: usize, end: usize) {
        for marker in self.markers.values_mut() {
            marker.offset = shift_for_erase(marker.offset, start, end);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gravity_at_insertion_point() {
        let mut set = MarkerSet::default();
        let left = set.create(4, true);
        let right = set.create(4, false);

        set.on_insert(4, 3);

        assert_eq!(set.get(left), Some(4));
        assert_eq!(set.get(right), Some(7));
    }

    #[test]
    fn test_insert_before_and_after() {
        let mut set = MarkerSet::default();
        let before = set.create(2, true);
        let after = set.create(10, true);

        set.on_insert(5, 2);

        assert_eq!(set.get(before), Some(2));
        assert_eq!(set.get(after), Some(12));
    }

    #[test]
    fn test_erase_collapses_inner_markers() {
        let mut set = MarkerSet::default();
        let inside = set.create(6, true);
        let at_end = set.create(8, false);
        let past = set.create(12, true);

        set.on_erase(4, 8);

        assert_eq!(set.get(inside), Some(4));
        assert_eq!(set.get(at_end), Some(4));
        assert_eq!(set.get(past), Some(8));
    }

    #[test]
    fn test_remove_marker() {
        let mut set = MarkerSet::default();
        let id = set.create(0, true);
        assert_eq!(set.len(), 1);
        assert!(set.remove(id));
        assert!(!set.remove(id));
        assert_eq!(set.get(id), None);
        assert_eq!(set.len(), 0);
    }
}
