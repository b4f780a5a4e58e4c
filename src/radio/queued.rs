//! Channel-backed radio executor interface.

use super::{LinkState, Radio, RadioError};
use crate::channel::RadioTx;
use crate::protocol::{AddStaRequest, RadioRequest};
use crate::session::{Peer, Session};
use crate::MacAddr;
use tracing::{trace, warn};

/// A [`Radio`] that turns every operation into a [`RadioRequest`] posted
/// on the radio executor's queue.
#[derive(Debug, Clone)]
pub struct QueuedRadio {
    tx: RadioTx,
}

impl QueuedRadio {
    pub fn new(tx: RadioTx) -> Self {
        Self { tx }
    }

    fn send(&self, request: RadioRequest) -> Result<(), RadioError> {
        let name = request.name();
        self.tx.try_send(request).map_err(|e| {
            let err = RadioError::Post(e.into());
            warn!(msg_type = name, error = %err, "Radio queue post failed");
            err
        })?;
        trace!(msg_type = name, "Posted to radio queue");
        Ok(())
    }
}

impl Radio for QueuedRadio {
    fn post(&mut self, request: RadioRequest) -> Result<(), RadioError> {
        self.send(request)
    }

    fn add_station(&mut self, session: &Session, peer: &Peer) -> Result<(), RadioError> {
        self.send(RadioRequest::AddStation(AddStaRequest {
            vdev_id: session.vdev_id(),
            session_id: session.id(),
            peer_mac: peer.addr(),
            peer_index: peer.index().as_u16(),
            bssid: session.self_addr(),
        }))
    }

    fn delete_station(&mut self, session: &Session, peer: &Peer) -> Result<(), RadioError> {
        self.send(RadioRequest::DeleteStation {
            vdev_id: session.vdev_id(),
            peer_mac: peer.addr(),
            peer_index: peer.index().as_u16(),
        })
    }

    fn set_link_state(
        &mut self,
        state: LinkState,
        self_addr: MacAddr,
        bssid: MacAddr,
    ) -> Result<(), RadioError> {
        self.send(RadioRequest::SetLinkState {
            state,
            self_addr,
            bssid,
        })
    }

    fn apply_configuration(&mut self, session: &Session) {
        // Best-effort: a lost configuration push is logged by send().
        let _ = self.send(RadioRequest::ApplyConfiguration {
            vdev_id: session.vdev_id(),
        });
    }
}
