//! An indexed min-priority queue over a fixed range of external indices.
//!
//! Each entry is addressed by a stable index in `0..capacity` rather than by
//! its position inside the heap, so the key of a live entry can be updated in
//! place. It supports the following operations:
//!
//! - Push: key * index -> (): insert an entry for an index not yet present.
//! - Top: () -> index: the index currently holding the minimum key.
//! - Pop: () -> index: remove the minimum entry and return its index.
//! - ChangeKey: key * index -> (): overwrite the key of a live entry and
//! restore heap order from its position.
//! - Contains: index -> bool: O(1) membership via the inverse position map.
//!
//! The inverse map is what makes decrease-key O(log n) instead of a linear
//! scan, which in turn is what makes Prim's algorithm O(E log V).
use std::cmp::Ordering;
use std::fmt;

/// Precondition violations by the caller. The queue's internal state is
/// undefined for an instance that returned one of these mid-operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PqError {
    /// The index is outside `0..capacity`.
    InvalidIndex(usize),
    /// Push target already has a live entry.
    DuplicateIndex(usize),
    /// ChangeKey target has no live entry.
    MissingIndex(usize),
    /// Top or Pop on an empty queue.
    Underflow,
}

impl fmt::Display for PqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PqError::InvalidIndex(idx) => write!(f, "index {} is out of range", idx),
            PqError::DuplicateIndex(idx) => write!(f, "index {} is already in the queue", idx),
            PqError::MissingIndex(idx) => write!(f, "index {} is not in the queue", idx),
            PqError::Underflow => write!(f, "priority queue underflow"),
        }
    }
}

impl std::error::Error for PqError {}

pub type Result<T> = std::result::Result<T, PqError>;

/// The queue itself. Three parallel arrays: keys by external index, the heap
/// of indices, and the inverse map from external index to heap position
/// (`None` = not present).
#[derive(Debug, Clone)]
pub struct IndexMinPq<K> {
    keys: Vec<Option<K>>,
    heap: Vec<usize>,
    pos: Vec<Option<usize>>,
}

impl<K: PartialOrd + Clone> IndexMinPq<K> {
    /// Create an empty queue accepting indices in `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            keys: vec![None; capacity],
            heap: Vec::with_capacity(capacity),
            pos: vec![None; capacity],
        }
    }

    pub fn capacity(&self) -> usize {
        self.keys.len()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Whether `idx` has a live entry.
    pub fn contains(&self, idx: usize) -> Result<bool> {
        if idx >= self.capacity() {
            return Err(PqError::InvalidIndex(idx));
        }
        Ok(self.pos[idx].is_some())
    }

    /// The index holding the minimum key. Does not remove it.
    pub fn top(&self) -> Result<usize> {
        self.heap.first().copied().ok_or(PqError::Underflow)
    }

    /// Insert an entry for `idx` with the given key.
    pub fn push(&mut self, key: K, idx: usize) -> Result<()> {
        if self.contains(idx)? {
            return Err(PqError::DuplicateIndex(idx));
        }
        let end = self.heap.len();
        self.heap.push(idx);
        self.pos[idx] = Some(end);
        self.keys[idx] = Some(key);
        self.sift_up(end);
        Ok(())
    }

    /// Remove the minimum entry and return its index.
    pub fn pop(&mut self) -> Result<usize> {
        let min = self.top()?;
        let last = self.heap.len() - 1;
        self.swap_nodes(0, last);
        self.heap.pop();
        self.pos[min] = None;
        self.keys[min] = None;
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Overwrite the key of the live entry for `idx`.
    pub fn change_key(&mut self, key: K, idx: usize) -> Result<()> {
        if idx >= self.capacity() {
            return Err(PqError::InvalidIndex(idx));
        }
        let at = self.pos[idx].ok_or(PqError::MissingIndex(idx))?;
        self.keys[idx] = Some(key);
        // Only one direction can apply for a single key change; the other
        // is a no-op, so run both unconditionally.
        self.sift_up(at);
        if let Some(now) = self.pos[idx] {
            self.sift_down(now);
        }
        Ok(())
    }

    // True if the key at heap position i is greater than the one at j.
    // An incomparable pair (NaN) counts as not greater.
    fn greater(&self, i: usize, j: usize) -> bool {
        let (a, b) = (&self.keys[self.heap[i]], &self.keys[self.heap[j]]);
        matches!(a.partial_cmp(b), Some(Ordering::Greater))
    }

    // Swap two heap slots and repair the inverse map for both.
    fn swap_nodes(&mut self, i: usize, j: usize) {
        self.heap.swap(i, j);
        self.pos[self.heap[i]] = Some(i);
        self.pos[self.heap[j]] = Some(j);
    }

    fn sift_up(&mut self, mut at: usize) {
        while at > 0 {
            let parent = (at - 1) / 2;
            if !self.greater(parent, at) {
                break;
            }
            self.swap_nodes(parent, at);
            at = parent;
        }
    }

    fn sift_down(&mut self, mut at: usize) {
        loop {
            let left = 2 * at + 1;
            if left >= self.heap.len() {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < self.heap.len() && self.greater(left, right) {
                child = right;
            }
            if !self.greater(at, child) {
                break;
            }
            self.swap_nodes(at, child);
            at = child;
        }
    }
}
