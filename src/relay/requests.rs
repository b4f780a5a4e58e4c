//! Controller requests toward the radio executor.

use super::reply::{PendingReply, ReplyKind};
use super::{Relay, RelayError};
use crate::config::InitiatorPostFailure;
use crate::protocol::{InitiatorRequest, RadioRequest, ResponderRequest, SmeRequest};
use crate::radio::Radio;
use tracing::{debug, error};

impl<R: Radio> Relay<R> {
    /// Translate an initiator request and post it to the radio executor.
    ///
    /// A missing request or a failed translation answers the controller
    /// with a failed InitiatorResponse. What a failed post does depends on
    /// `relay.initiator_post_failure`: `log` reports local success since a
    /// send was attempted, `report` answers like the responder path.
    pub fn handle_initiator_request(
        &mut self,
        request: Option<SmeRequest<InitiatorRequest>>,
    ) -> Result<(), RelayError> {
        let reply = PendingReply::new(&self.controller, ReplyKind::Initiator);

        let Some(request) = request else {
            error!("Invalid initiator request");
            return Err(RelayError::InvalidInput("initiator request"));
        };

        let translated = request.req.try_translate().map_err(|e| {
            error!(vdev = %request.session_id, error = %e, "Initiator request allocation failed");
            RelayError::AllocationFailure(e)
        })?;

        debug!(
            vdev = %request.session_id,
            transaction = translated.transaction_id,
            peer = %translated.peer_discovery_mac,
            "Sending initiator request to radio"
        );

        match self.radio.post(RadioRequest::Initiator(translated)) {
            Ok(()) => {
                reply.disarm();
                Ok(())
            }
            Err(e) => match self.config.relay.initiator_post_failure {
                InitiatorPostFailure::Log => {
                    error!(vdev = %request.session_id, error = %e, "Initiator request post failed");
                    reply.disarm();
                    Ok(())
                }
                InitiatorPostFailure::Report => {
                    error!(vdev = %request.session_id, error = %e, "Initiator request post failed, reporting");
                    Err(RelayError::Post(e))
                }
            },
        }
    }

    /// Translate a responder request and post it to the radio executor.
    ///
    /// Any failure, including a failed post, answers the controller with a
    /// failed ResponderResponse; the translated copy is dropped.
    pub fn handle_responder_request(
        &mut self,
        request: Option<SmeRequest<ResponderRequest>>,
    ) -> Result<(), RelayError> {
        let reply = PendingReply::new(&self.controller, ReplyKind::Responder);

        let Some(request) = request else {
            error!("Invalid responder request");
            return Err(RelayError::InvalidInput("responder request"));
        };

        let translated = request.req.try_translate().map_err(|e| {
            error!(vdev = %request.session_id, error = %e, "Responder request allocation failed");
            RelayError::AllocationFailure(e)
        })?;

        debug!(
            vdev = %request.session_id,
            transaction = translated.transaction_id,
            ndp_instance = translated.ndp_instance_id,
            "Sending responder request to radio"
        );

        self.radio
            .post(RadioRequest::Responder(translated))
            .map_err(|e| {
                error!(vdev = %request.session_id, error = %e, "Responder request post failed");
                RelayError::Post(e)
            })?;

        reply.disarm();
        Ok(())
    }
}
