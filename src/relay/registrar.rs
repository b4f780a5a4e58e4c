//! Data-path peer registration.

use super::{Relay, RelayError};
use crate::protocol::VdevId;
use crate::radio::Radio;
use crate::utils::index::PeerIndex;
use crate::MacAddr;
use tracing::{debug, error, info, warn};

impl<R: Radio> Relay<R> {
    /// Make sure `addr` is a data-path peer of the session on `vdev_id`.
    ///
    /// An existing entry is returned untouched. Otherwise a new entry is
    /// inserted and a station creation is issued to the radio; if that
    /// call fails the entry is rolled back. Never retries.
    pub fn ensure_peer(&mut self, vdev_id: VdevId, addr: MacAddr) -> Result<PeerIndex, RelayError> {
        let session = self
            .sessions
            .find_by_vdev_mut(vdev_id)
            .ok_or(RelayError::NoSessionForVdev(vdev_id))?;

        if let Some(peer) = session.roster().get(&addr) {
            debug!(vdev = %vdev_id, peer = %addr, index = %peer.index(), "NDI peer already exists");
            return Ok(peer.index());
        }

        debug!(vdev = %vdev_id, peer = %addr, "Creating NDI peer");
        let peer = session
            .roster_mut()
            .insert_ndi_peer(addr)
            .map_err(|source| {
                error!(vdev = %vdev_id, peer = %addr, error = %source, "Couldn't add roster entry");
                RelayError::RosterFull { peer: addr, source }
            })?
            .clone();

        if let Err(source) = self.radio.add_station(session, &peer) {
            error!(vdev = %vdev_id, peer = %addr, error = %source, "Add station failed, rolling back");
            session.roster_mut().remove(&addr);
            return Err(RelayError::RegistrationFailed { peer: addr, source });
        }

        if let Some(entry) = session.roster_mut().get_mut(&addr) {
            entry.mark_valid();
        }
        info!(vdev = %vdev_id, peer = %addr, index = %peer.index(), "NDI peer created");
        Ok(peer.index())
    }

    /// Remove `addr` from the roster of the session on `vdev_id`.
    ///
    /// Absent sessions or peers are a no-op. A peer the radio had accepted
    /// also gets a best-effort station deletion.
    pub fn remove_peer(&mut self, vdev_id: VdevId, addr: MacAddr) {
        let Some(session) = self.sessions.find_by_vdev_mut(vdev_id) else {
            debug!(vdev = %vdev_id, peer = %addr, "No session, nothing to remove");
            return;
        };
        let Some(peer) = session.roster_mut().remove(&addr) else {
            debug!(vdev = %vdev_id, peer = %addr, "Peer already removed");
            return;
        };

        if peer.is_valid() {
            if let Err(e) = self.radio.delete_station(session, &peer) {
                warn!(vdev = %vdev_id, peer = %addr, error = %e, "Delete station failed");
            }
        }
        info!(vdev = %vdev_id, peer = %addr, index = %peer.index(), "NDI peer removed");
    }
}
