//! Radio executor responses to locally issued requests.

use super::reply::{PendingReply, ReplyKind};
use super::{Relay, RelayError};
use crate::protocol::{
    ControllerMessage, Envelope, InitiatorResponseRecord, NdpStatus, ResponderResponseRecord,
    VdevId,
};
use crate::radio::Radio;
use crate::MacAddr;
use tracing::{debug, error, warn};

impl<R: Radio> Relay<R> {
    /// Forward an initiator response verbatim.
    ///
    /// The initiator side's peer is created later, from the confirm path.
    pub(super) fn handle_initiator_response(
        &mut self,
        response: Envelope<InitiatorResponseRecord>,
    ) -> Result<(), RelayError> {
        self.post_upstream(ControllerMessage::InitiatorResponse(response));
        Ok(())
    }

    /// Handle the radio executor's answer to a responder request.
    ///
    /// Exactly one ResponderResponse goes upstream. A missing body or a set
    /// error flag yields the body-less failure shape. A successful response
    /// whose peer cannot be created is forwarded with its status overwritten
    /// to failure.
    pub(super) fn handle_responder_response(
        &mut self,
        response: Envelope<ResponderResponseRecord>,
    ) -> Result<(), RelayError> {
        let reply = PendingReply::new(&self.controller, ReplyKind::Responder);

        let Some(mut response) = response.into_body() else {
            error!("Responder response missing or flagged as error");
            return Err(RelayError::InvalidInput("responder response"));
        };

        let mut result = Ok(());
        if response.status.is_success() {
            if let Err(e) = self.ensure_peer(response.vdev_id, response.peer_ndi_mac) {
                error!(
                    vdev = %response.vdev_id,
                    peer = %response.peer_ndi_mac,
                    error = %e,
                    "Couldn't add NDI peer for responder response"
                );
                response.status = NdpStatus::Failure;
                result = Err(e);
            }
        } else {
            self.discard_unestablished_peer(response.vdev_id, response.peer_ndi_mac);
        }

        debug!(
            vdev = %response.vdev_id,
            peer = %response.peer_ndi_mac,
            status = %response.status,
            "Forwarding responder response"
        );
        reply.complete(ControllerMessage::ResponderResponse(Envelope::with_body(
            response,
        )));
        result
    }

    /// Drop a peer pre-created for a data path that was then rejected.
    ///
    /// Peers that already reached link-established may carry other data
    /// paths and stay.
    fn discard_unestablished_peer(&mut self, vdev_id: VdevId, addr: MacAddr) {
        let established = self
            .sessions
            .find_by_vdev(vdev_id)
            .and_then(|session| session.roster().get(&addr))
            .map(|peer| peer.is_link_established());

        match established {
            Some(false) => {
                warn!(vdev = %vdev_id, peer = %addr, "Responder rejected, removing pre-created peer");
                self.remove_peer(vdev_id, addr);
            }
            Some(true) | None => {}
        }
    }
}
