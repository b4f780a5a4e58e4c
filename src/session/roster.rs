//! Per-session peer roster.

use super::peer::Peer;
use crate::utils::index::{IndexError, PeerIndexAllocator};
use crate::MacAddr;
use std::collections::HashMap;
use thiserror::Error;

/// Errors related to roster mutation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RosterError {
    #[error("peer {0} already in roster")]
    Duplicate(MacAddr),

    #[error("roster full: {0}")]
    Full(#[from] IndexError),
}

/// Peers of one session, keyed by link-layer address.
///
/// Each entry also holds a compact index from the session's allocator;
/// removing an entry returns its index to the pool.
#[derive(Debug)]
pub struct Roster {
    peers: HashMap<MacAddr, Peer>,
    indices: PeerIndexAllocator,
}

impl Roster {
    /// Create an empty roster holding at most `capacity` peers.
    pub fn new(capacity: u16) -> Self {
        Self {
            peers: HashMap::new(),
            indices: PeerIndexAllocator::new(capacity),
        }
    }

    pub fn get(&self, addr: &MacAddr) -> Option<&Peer> {
        self.peers.get(addr)
    }

    pub fn get_mut(&mut self, addr: &MacAddr) -> Option<&mut Peer> {
        self.peers.get_mut(addr)
    }

    pub fn contains(&self, addr: &MacAddr) -> bool {
        self.peers.contains_key(addr)
    }

    /// Insert a new data-path peer entry.
    ///
    /// Callers look the address up first; inserting an address already
    /// present is an error rather than a replacement.
    pub fn insert_ndi_peer(&mut self, addr: MacAddr) -> Result<&mut Peer, RosterError> {
        if self.peers.contains_key(&addr) {
            return Err(RosterError::Duplicate(addr));
        }
        let index = self.indices.allocate()?;
        Ok(self.peers.entry(addr).or_insert(Peer::ndi(addr, index)))
    }

    /// Remove an entry and free its index. Absent addresses are a no-op.
    pub fn remove(&mut self, addr: &MacAddr) -> Option<Peer> {
        let peer = self.peers.remove(addr)?;
        // The index was allocated with the entry, so freeing cannot miss.
        let _ = self.indices.free(peer.index());
        Some(peer)
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn capacity(&self) -> u16 {
        self.indices.capacity()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Peer> {
        self.peers.values()
    }
}
