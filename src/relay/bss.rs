//! Data-path interface BSS and station completions.

use super::{Relay, RelayError};
use crate::protocol::{
    AddBssParams, AddStaParams, ControllerMessage, DelBssParams, NewPeerNotice, ResultCode,
    StartConfirm, StopResponse,
};
use crate::radio::{LinkState, Radio};
use crate::session::SessionId;
use tracing::{debug, error, info, warn};

impl<R: Radio> Relay<R> {
    /// Apply the outcome of a data-path interface start.
    ///
    /// Exactly one StartConfirm is posted. On success the session moves to
    /// BSS-started with the NDI role and its queued configuration is
    /// applied; otherwise the session is left as it was.
    pub fn handle_add_bss_response(
        &mut self,
        session_id: SessionId,
        params: Option<AddBssParams>,
    ) -> Result<(), RelayError> {
        let outcome = self.apply_add_bss(session_id, params);
        let result = match &outcome {
            Ok(()) => ResultCode::Success,
            Err(_) => ResultCode::HalSendMessageFail,
        };
        self.post_upstream(ControllerMessage::StartConfirm(StartConfirm {
            session_id,
            result,
        }));
        outcome
    }

    fn apply_add_bss(
        &mut self,
        session_id: SessionId,
        params: Option<AddBssParams>,
    ) -> Result<(), RelayError> {
        let Some(params) = params else {
            error!(session = %session_id, "Add BSS response with no body");
            return Err(RelayError::InvalidInput("add BSS response"));
        };
        let Some(session) = self.sessions.get_mut(session_id) else {
            error!(session = %session_id, "Add BSS response for unknown session");
            return Err(RelayError::SessionNotFound(session_id));
        };

        if !params.status.is_success() {
            error!(session = %session_id, status = %params.status, "Add BSS failed");
            return Err(RelayError::BssStartFailed {
                session: session_id,
                status: params.status,
            });
        }

        session.mark_bss_started(params.bss_idx);
        self.radio.apply_configuration(session);
        info!(
            session = %session_id,
            vdev = %session.vdev_id(),
            bss_idx = params.bss_idx,
            "Data-path interface started"
        );
        Ok(())
    }

    /// Apply the outcome of a data-path interface teardown.
    ///
    /// Without a body or a resolvable session nothing is posted. Once a
    /// session is resolved a StopResponse is always posted and the session
    /// is destroyed, even when the teardown itself failed.
    pub fn handle_del_bss_response(&mut self, params: Option<DelBssParams>) -> Result<(), RelayError> {
        let Some(params) = params else {
            error!("Delete BSS response with no body");
            return Err(RelayError::InvalidInput("delete BSS response"));
        };
        let session_id = params.session_id;
        let Some(session) = self.sessions.get_mut(session_id) else {
            error!(session = %session_id, "Delete BSS response for unknown session");
            return Err(RelayError::SessionNotFound(session_id));
        };

        let result = if !params.status.is_success() {
            error!(
                session = %session_id,
                status = %params.status,
                bss_idx = params.bss_idx,
                "Delete BSS failed"
            );
            ResultCode::StopBssFailure
        } else if let Err(e) = self.radio.set_link_state(
            LinkState::Idle,
            session.self_addr(),
            session.self_addr(),
        ) {
            error!(session = %session_id, error = %e, "Set link state idle failed");
            ResultCode::StopBssFailure
        } else {
            session.mark_idle();
            ResultCode::Success
        };

        let stop = StopResponse {
            vdev_id: session.vdev_id(),
            transaction_id: session.transaction_id(),
            result,
        };
        self.post_upstream(ControllerMessage::StopResponse(stop));

        if let Some(session) = self.sessions.remove(session_id) {
            info!(
                session = %session_id,
                vdev = %session.vdev_id(),
                peers = session.roster().len(),
                result = %result,
                "Data-path interface session destroyed"
            );
        }
        Ok(())
    }

    /// Apply the outcome of a station creation issued by `ensure_peer`.
    ///
    /// On success the peer records its station parameters, becomes
    /// link-established, and a NewPeerNotice is posted. On failure the
    /// roster entry is dropped.
    pub fn handle_add_sta_response(
        &mut self,
        session_id: SessionId,
        params: Option<AddStaParams>,
    ) -> Result<(), RelayError> {
        let Some(params) = params else {
            error!(session = %session_id, "Add station response with no body");
            return Err(RelayError::InvalidInput("add station response"));
        };
        let Some(session) = self.sessions.get_mut(session_id) else {
            error!(session = %session_id, "Add station response for unknown session");
            return Err(RelayError::SessionNotFound(session_id));
        };

        let peer_addr = params.sta_mac;
        if !session.roster().contains(&peer_addr) {
            warn!(session = %session_id, peer = %peer_addr, "Add station response for unknown peer");
            return Err(RelayError::PeerNotFound(peer_addr));
        }

        if !params.status.is_success() {
            error!(session = %session_id, peer = %peer_addr, status = %params.status, "Add station failed");
            session.roster_mut().remove(&peer_addr);
            return Err(RelayError::StationFailed {
                peer: peer_addr,
                status: params.status,
            });
        }

        if let Some(peer) = session.roster_mut().get_mut(&peer_addr) {
            peer.establish(params.sta_idx, params.bss_idx, params.ucast_sig, params.bcast_sig);
            debug!(session = %session_id, peer = %peer, "Peer link established");
        }

        self.post_upstream(ControllerMessage::NewPeerNotice(NewPeerNotice {
            vdev_id: params.vdev_id,
            peer_addr,
            sta_id: params.sta_idx,
        }));
        Ok(())
    }
}
