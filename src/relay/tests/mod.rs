use super::*;
use crate::channel::{controller_channel, ControllerRx, PostError};
use crate::protocol::{
    AcceptPolicy, Envelope, IndicationRecord, InitiatorRequest, LinkEvent, NdpResponseCode,
    NdpRole, NdpStatus, RadioRequest, RelayInput, ResponderRequest, ResponderResponseRecord,
    SmeRequest,
};
use crate::radio::LinkState;
use crate::session::{Peer, Session};

mod bss;
mod registrar;

pub(super) const VDEV: VdevId = VdevId::new(1);
pub(super) const SELF_ADDR: MacAddr = MacAddr::new([0x02, 0x11, 0x22, 0x33, 0x44, 0x55]);
pub(super) const TRANSACTION: u16 = 77;

/// Radio executor double that records every call.
#[derive(Debug, Default)]
pub(super) struct MockRadio {
    pub posted: Vec<RadioRequest>,
    pub added: Vec<MacAddr>,
    pub deleted: Vec<MacAddr>,
    pub link_states: Vec<LinkState>,
    pub configured: Vec<VdevId>,
    pub fail_post: bool,
    pub fail_add_station: bool,
    pub fail_link_state: bool,
}

impl Radio for MockRadio {
    fn post(&mut self, request: RadioRequest) -> Result<(), RadioError> {
        if self.fail_post {
            return Err(RadioError::Post(PostError::QueueFull));
        }
        self.posted.push(request);
        Ok(())
    }

    fn add_station(&mut self, _session: &Session, peer: &Peer) -> Result<(), RadioError> {
        if self.fail_add_station {
            return Err(RadioError::Rejected("no station slot".to_string()));
        }
        self.added.push(peer.addr());
        Ok(())
    }

    fn delete_station(&mut self, _session: &Session, peer: &Peer) -> Result<(), RadioError> {
        self.deleted.push(peer.addr());
        Ok(())
    }

    fn set_link_state(
        &mut self,
        state: LinkState,
        _self_addr: MacAddr,
        _bssid: MacAddr,
    ) -> Result<(), RadioError> {
        if self.fail_link_state {
            return Err(RadioError::Rejected("link state".to_string()));
        }
        self.link_states.push(state);
        Ok(())
    }

    fn apply_configuration(&mut self, session: &Session) {
        self.configured.push(session.vdev_id());
    }
}

pub(super) fn make_relay_with(config: Config) -> (Relay<MockRadio>, ControllerRx) {
    let (tx, rx) = controller_channel(16);
    let mut relay = Relay::new(config, MockRadio::default(), tx);
    relay.create_session(VDEV, TRANSACTION, SELF_ADDR).unwrap();
    (relay, rx)
}

pub(super) fn make_relay() -> (Relay<MockRadio>, ControllerRx) {
    make_relay_with(Config::new())
}

pub(super) fn session_id(relay: &Relay<MockRadio>) -> SessionId {
    relay.sessions.find_by_vdev(VDEV).unwrap().id()
}

pub(super) fn session(relay: &Relay<MockRadio>) -> &Session {
    relay.sessions.find_by_vdev(VDEV).unwrap()
}

pub(super) fn make_peer_addr(val: u8) -> MacAddr {
    MacAddr::new([0x02, 0xaa, 0x00, 0x00, 0x00, val])
}

/// Collect everything posted to the controller so far.
pub(super) fn drain(rx: &mut ControllerRx) -> Vec<ControllerMessage> {
    let mut msgs = Vec::new();
    while let Ok(msg) = rx.try_recv() {
        msgs.push(msg);
    }
    msgs
}

pub(super) fn make_indication(role: NdpRole, policy: AcceptPolicy, peer: MacAddr) -> IndicationRecord {
    IndicationRecord {
        vdev_id: VDEV,
        role,
        policy,
        service_instance_id: 3,
        ndp_instance_id: 11,
        peer_discovery_mac: make_peer_addr(0xd0),
        peer_ndi_mac: peer,
        ndp_config: vec![0x01, 0x02, 0x03],
        ndp_app_info: vec![0xa0, 0xa1],
    }
}

pub(super) fn make_responder_response(status: NdpStatus, peer: MacAddr) -> ResponderResponseRecord {
    ResponderResponseRecord {
        vdev_id: VDEV,
        transaction_id: TRANSACTION,
        peer_ndi_mac: peer,
        status,
        reason: 0,
    }
}

pub(super) fn make_initiator_request() -> SmeRequest<InitiatorRequest> {
    SmeRequest {
        session_id: VDEV,
        req: InitiatorRequest {
            vdev_id: VDEV,
            transaction_id: 5,
            channel: 149,
            service_instance_id: 3,
            peer_discovery_mac: make_peer_addr(0xd0),
            ndp_config: vec![0x10, 0x20],
            ndp_info: vec![0x30],
        },
    }
}

pub(super) fn make_responder_request() -> SmeRequest<ResponderRequest> {
    SmeRequest {
        session_id: VDEV,
        req: ResponderRequest {
            vdev_id: VDEV,
            transaction_id: 6,
            ndp_instance_id: 11,
            response: NdpResponseCode::Accept,
            ndp_config: vec![0x40],
            ndp_info: vec![],
        },
    }
}
