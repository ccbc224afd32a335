//! Open and closed sets for A*.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry, ordered so that `BinaryHeap` (a max-heap) pops the smallest
/// `f` first and, among equal `f`, the earliest-inserted node.
#[derive(Clone, Copy, Eq, PartialEq)]
struct Entry {
    f: u32,
    seq: u64,
    idx: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f).then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Nodes discovered but not yet finalized, keyed by `f`.
///
/// Selection matches a stable linear scan over an insertion-ordered list:
/// lowest `f` wins and ties go to whichever member was inserted first. A
/// member whose key improves keeps its original insertion sequence; the old
/// heap entry is left behind and skipped when popped.
pub(crate) struct OpenSet {
    heap: BinaryHeap<Entry>,
    member: Vec<bool>,
    key: Vec<u32>,
    seq: Vec<u64>,
    next_seq: u64,
    len: usize,
}

impl OpenSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            heap: BinaryHeap::new(),
            member: vec![false; len],
            key: vec![0; len],
            seq: vec![0; len],
            next_seq: 0,
            len: 0,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
        self.member.fill(false);
        self.next_seq = 0;
        self.len = 0;
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.member[idx]
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Insert `idx` with key `f`, or re-key it if it is already a member.
    pub(crate) fn push(&mut self, idx: usize, f: u32) {
        if !self.member[idx] {
            self.member[idx] = true;
            self.seq[idx] = self.next_seq;
            self.next_seq += 1;
            self.len += 1;
        }
        self.key[idx] = f;
        self.heap.push(Entry {
            f,
            seq: self.seq[idx],
            idx,
        });
    }

    /// Remove and return the member with the lowest key.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        while let Some(e) = self.heap.pop() {
            // Stale: already removed, or re-keyed since this entry was pushed.
            if !self.member[e.idx] || self.key[e.idx] != e.f {
                continue;
            }
            self.member[e.idx] = false;
            self.len -= 1;
            return Some(e.idx);
        }
        None
    }
}

/// Nodes whose distance from the start is final.
pub(crate) struct ClosedSet {
    member: Vec<bool>,
}

impl ClosedSet {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            member: vec![false; len],
        }
    }

    pub(crate) fn clear(&mut self) {
        self.member.fill(false);
    }

    #[inline]
    pub(crate) fn insert(&mut self, idx: usize) {
        self.member[idx] = true;
    }

    #[inline]
    pub(crate) fn contains(&self, idx: usize) -> bool {
        self.member[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_key_first() {
        let mut open = OpenSet::new(8);
        open.push(3, 5);
        open.push(1, 2);
        open.push(6, 9);
        assert_eq!(open.len(), 3);
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(3));
        assert_eq!(open.pop(), Some(6));
        assert_eq!(open.pop(), None);
        assert_eq!(open.len(), 0);
    }

    #[test]
    fn ties_go_to_earliest_insertion_not_lowest_index() {
        let mut open = OpenSet::new(8);
        open.push(7, 4);
        open.push(2, 4);
        open.push(5, 4);
        assert_eq!(open.pop(), Some(7));
        assert_eq!(open.pop(), Some(2));
        assert_eq!(open.pop(), Some(5));
    }

    #[test]
    fn rekey_keeps_insertion_position() {
        let mut open = OpenSet::new(8);
        open.push(0, 3);
        open.push(1, 6);
        open.push(2, 3);
        // Node 1 improves to tie with the others; it was inserted before 2.
        open.push(1, 3);
        assert_eq!(open.len(), 3);
        assert_eq!(open.pop(), Some(0));
        assert_eq!(open.pop(), Some(1));
        assert_eq!(open.pop(), Some(2));
        // The stale entry for node 1 is skipped.
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn clear_forgets_members() {
        let mut open = OpenSet::new(4);
        open.push(2, 1);
        open.clear();
        assert!(!open.contains(2));
        assert_eq!(open.pop(), None);

        let mut closed = ClosedSet::new(4);
        closed.insert(3);
        assert!(closed.contains(3));
        closed.clear();
        assert!(!closed.contains(3));
    }
}
