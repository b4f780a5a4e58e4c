//! Peer Index Allocator
//!
//! Hands out compact per-session peer indices. The roster keeps peers in a
//! map keyed by MAC address; the index is the stable integer handle the
//! radio executor uses to refer to a station.
//!
//! ## Design
//!
//! - Index 0 is reserved for the BSS self entry and is never handed out
//! - The lowest free index is always chosen, so indices stay dense
//! - Capacity is fixed at construction (`relay.max_peers_per_session`)

use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Errors related to index allocation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IndexError {
    #[error("no available peer indices (capacity {0})")]
    Exhausted(u16),

    #[error("peer index {0} not allocated")]
    NotFound(u16),

    #[error("peer index {0} already in use")]
    AlreadyInUse(u16),

    #[error("peer index {0} out of range")]
    OutOfRange(u16),
}

/// A per-session peer index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PeerIndex(u16);

impl PeerIndex {
    /// The index reserved for the BSS self entry.
    pub const SELF: PeerIndex = PeerIndex(0);

    /// Create from raw u16.
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    /// Get the raw u16 value.
    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for PeerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Allocator for peer indices within a single session.
#[derive(Debug, Clone)]
pub struct PeerIndexAllocator {
    /// Currently allocated indices.
    in_use: BTreeSet<u16>,
    /// Highest index that may be handed out.
    capacity: u16,
}

impl PeerIndexAllocator {
    /// Create an allocator handing out indices `1..=capacity`.
    pub fn new(capacity: u16) -> Self {
        Self {
            in_use: BTreeSet::new(),
            capacity,
        }
    }

    /// Allocate the lowest free index.
    pub fn allocate(&mut self) -> Result<PeerIndex, IndexError> {
        let candidate = (1..=self.capacity)
            .find(|idx| !self.in_use.contains(idx))
            .ok_or(IndexError::Exhausted(self.capacity))?;
        self.in_use.insert(candidate);
        Ok(PeerIndex(candidate))
    }

    /// Free an index, returning it to the available pool.
    pub fn free(&mut self, index: PeerIndex) -> Result<(), IndexError> {
        if self.in_use.remove(&index.0) {
            Ok(())
        } else {
            Err(IndexError::NotFound(index.0))
        }
    }

    /// Reserve a specific index.
    pub fn reserve(&mut self, index: PeerIndex) -> Result<(), IndexError> {
        if index.0 == 0 || index.0 > self.capacity {
            return Err(IndexError::OutOfRange(index.0));
        }
        if !self.in_use.insert(index.0) {
            return Err(IndexError::AlreadyInUse(index.0));
        }
        Ok(())
    }

    /// Check if an index is currently allocated.
    pub fn is_allocated(&self, index: PeerIndex) -> bool {
        self.in_use.contains(&index.0)
    }

    /// Number of currently allocated indices.
    pub fn count(&self) -> usize {
        self.in_use.len()
    }

    /// Check if no indices are allocated.
    pub fn is_empty(&self) -> bool {
        self.in_use.is_empty()
    }

    /// Maximum number of indices.
    pub fn capacity(&self) -> u16 {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocator_basic() {
        let mut alloc = PeerIndexAllocator::new(4);
        assert!(alloc.is_empty());

        let idx1 = alloc.allocate().unwrap();
        let idx2 = alloc.allocate().unwrap();
        assert_eq!(idx1, PeerIndex::new(1));
        assert_eq!(idx2, PeerIndex::new(2));
        assert_eq!(alloc.count(), 2);

        alloc.free(idx1).unwrap();
        assert!(!alloc.is_allocated(idx1));
        assert!(alloc.is_allocated(idx2));
    }

    #[test]
    fn test_allocator_never_hands_out_self() {
        let mut alloc = PeerIndexAllocator::new(3);
        for _ in 0..3 {
            assert_ne!(alloc.allocate().unwrap(), PeerIndex::SELF);
        }
    }

    #[test]
    fn test_allocator_reuses_lowest_free() {
        let mut alloc = PeerIndexAllocator::new(8);
        for _ in 0..4 {
            alloc.allocate().unwrap();
        }
        alloc.free(PeerIndex::new(2)).unwrap();
        assert_eq!(alloc.allocate().unwrap(), PeerIndex::new(2));
        assert_eq!(alloc.allocate().unwrap(), PeerIndex::new(5));
    }

    #[test]
    fn test_allocator_exhausted() {
        let mut alloc = PeerIndexAllocator::new(2);
        alloc.allocate().unwrap();
        alloc.allocate().unwrap();
        assert_eq!(alloc.allocate(), Err(IndexError::Exhausted(2)));
    }

    #[test]
    fn test_allocator_free_not_found() {
        let mut alloc = PeerIndexAllocator::new(2);
        assert_eq!(alloc.free(PeerIndex::new(1)), Err(IndexError::NotFound(1)));
    }

    #[test]
    fn test_allocator_reserve() {
        let mut alloc = PeerIndexAllocator::new(4);
        alloc.reserve(PeerIndex::new(3)).unwrap();
        assert_eq!(
            alloc.reserve(PeerIndex::new(3)),
            Err(IndexError::AlreadyInUse(3))
        );
        assert_eq!(alloc.reserve(PeerIndex::SELF), Err(IndexError::OutOfRange(0)));
        assert_eq!(alloc.reserve(PeerIndex::new(5)), Err(IndexError::OutOfRange(5)));
    }
}
