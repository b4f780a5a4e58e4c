//! Peer-initiated data-path requests.

use super::{Relay, RelayError};
use crate::protocol::{AcceptPolicy, ControllerMessage, IndicationRecord, NdpRole};
use crate::radio::Radio;
use tracing::{debug, error};

impl<R: Radio> Relay<R> {
    /// Handle an NDP indication.
    ///
    /// Initiator-role indications, and responder-role ones under the
    /// accept-all policy, pre-create the peer. Responder-role indications
    /// are always forwarded to the controller for a decision; initiator-role
    /// ones are informational and go no further.
    ///
    /// The config and app-info buffers travel upstream only with a
    /// responder-role indication whose peer step succeeded. Otherwise they
    /// are released here.
    pub(super) fn handle_indication(
        &mut self,
        mut indication: IndicationRecord,
    ) -> Result<(), RelayError> {
        debug!(
            role = %indication.role,
            policy = %indication.policy,
            vdev = %indication.vdev_id,
            peer = %indication.peer_ndi_mac,
            "NDP indication"
        );

        let precreate = match indication.role {
            NdpRole::Initiator => true,
            NdpRole::Responder => indication.policy == AcceptPolicy::AcceptAll,
        };

        let status = if precreate {
            self.ensure_peer(indication.vdev_id, indication.peer_ndi_mac)
                .map(|_| ())
        } else {
            Ok(())
        };

        if let Err(e) = &status {
            error!(
                role = %indication.role,
                peer = %indication.peer_ndi_mac,
                error = %e,
                "Couldn't add NDI peer for indication"
            );
            indication.release_payload();
        }

        // New-peer notices come from station completion, not from here; a
        // missing confirm is how the controller learns this attempt failed.
        if indication.role == NdpRole::Responder {
            self.post_upstream(ControllerMessage::Indication(indication));
        }

        status
    }
}
