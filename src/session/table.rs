//! Session ownership and resolution.

use super::{Session, SessionId};
use crate::protocol::VdevId;
use crate::MacAddr;
use std::collections::BTreeMap;

/// Owns every data-path interface session.
#[derive(Debug, Default)]
pub struct SessionTable {
    sessions: BTreeMap<SessionId, Session>,
}

impl SessionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session on the lowest free id.
    ///
    /// Returns `None` if the id space is exhausted or the vdev already has
    /// a session.
    pub fn create(
        &mut self,
        vdev_id: VdevId,
        transaction_id: u16,
        self_addr: MacAddr,
        max_peers: u16,
    ) -> Option<SessionId> {
        if self.find_by_vdev(vdev_id).is_some() {
            return None;
        }
        let id = (0..=u8::MAX)
            .map(SessionId::new)
            .find(|id| !self.sessions.contains_key(id))?;
        self.sessions.insert(
            id,
            Session::new(id, vdev_id, transaction_id, self_addr, max_peers),
        );
        Some(id)
    }

    pub fn get(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    pub fn get_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.sessions.get_mut(&id)
    }

    /// Resolve the session serving a vdev.
    pub fn find_by_vdev(&self, vdev_id: VdevId) -> Option<&Session> {
        self.sessions.values().find(|s| s.vdev_id() == vdev_id)
    }

    pub fn find_by_vdev_mut(&mut self, vdev_id: VdevId) -> Option<&mut Session> {
        self.sessions.values_mut().find(|s| s.vdev_id() == vdev_id)
    }

    /// Destroy a session, dropping its roster.
    pub fn remove(&mut self, id: SessionId) -> Option<Session> {
        self.sessions.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
