use super::*;
use crate::protocol::{
    AddBssParams, AddStaParams, DelBssParams, NewPeerNotice, ResultCode, StartConfirm,
    StopResponse,
};
use crate::session::{MlmState, PeerMlmState, StaType, SystemRole};

fn add_sta_params(peer: MacAddr, status: HalStatus) -> AddStaParams {
    AddStaParams {
        vdev_id: VDEV,
        sta_mac: peer,
        status,
        sta_idx: 4,
        bss_idx: 2,
        ucast_sig: 9,
        bcast_sig: 10,
    }
}

fn start_bss(relay: &mut Relay<MockRadio>) -> SessionId {
    let id = session_id(relay);
    relay
        .handle_add_bss_response(
            id,
            Some(AddBssParams {
                status: HalStatus::Success,
                bss_idx: 2,
            }),
        )
        .unwrap();
    id
}

// ===== Add BSS =====

#[test]
fn test_add_bss_success() {
    let (mut relay, mut rx) = make_relay();
    let id = session_id(&relay);
    relay.sessions_mut().get_mut(id).unwrap().mark_start_pending();

    start_bss(&mut relay);

    let session = session(&relay);
    assert_eq!(session.mlm_state(), MlmState::BssStarted);
    assert_eq!(session.system_role(), SystemRole::Ndi);
    assert_eq!(session.bss_idx(), Some(2));
    assert_eq!(session.sta_type_for_bss(), Some(StaType::SelfEntry));
    assert_eq!(relay.radio().configured, vec![VDEV]);
    assert_eq!(
        drain(&mut rx),
        vec![ControllerMessage::StartConfirm(StartConfirm {
            session_id: id,
            result: ResultCode::Success,
        })]
    );
}

#[test]
fn test_add_bss_failure_leaves_session() {
    let (mut relay, mut rx) = make_relay();
    let id = session_id(&relay);
    relay.sessions_mut().get_mut(id).unwrap().mark_start_pending();

    let result = relay.handle_add_bss_response(
        id,
        Some(AddBssParams {
            status: HalStatus::Failure(3),
            bss_idx: 2,
        }),
    );

    assert!(matches!(result, Err(RelayError::BssStartFailed { .. })));
    let session = session(&relay);
    assert_eq!(session.mlm_state(), MlmState::WaitAddBssRsp);
    assert_eq!(session.system_role(), SystemRole::Unknown);
    assert_eq!(session.bss_idx(), None);
    assert!(relay.radio().configured.is_empty());
    assert_eq!(
        drain(&mut rx),
        vec![ControllerMessage::StartConfirm(StartConfirm {
            session_id: id,
            result: ResultCode::HalSendMessageFail,
        })]
    );
}

#[test]
fn test_add_bss_without_body_still_confirms() {
    let (mut relay, mut rx) = make_relay();
    let id = session_id(&relay);

    assert!(relay.handle_add_bss_response(id, None).is_err());

    let msgs = drain(&mut rx);
    assert_eq!(msgs.len(), 1);
    assert!(matches!(
        msgs[0],
        ControllerMessage::StartConfirm(StartConfirm {
            result: ResultCode::HalSendMessageFail,
            ..
        })
    ));
}

#[test]
fn test_add_bss_unknown_session() {
    let (mut relay, mut rx) = make_relay();
    let unknown = SessionId::new(200);

    let result = relay.handle_add_bss_response(
        unknown,
        Some(AddBssParams {
            status: HalStatus::Success,
            bss_idx: 0,
        }),
    );

    assert!(matches!(result, Err(RelayError::SessionNotFound(id)) if id == unknown));
    assert!(relay.radio().configured.is_empty());
    assert_eq!(drain(&mut rx).len(), 1);
}

// ===== Delete BSS =====

#[test]
fn test_del_bss_success_destroys_session() {
    let (mut relay, mut rx) = make_relay();
    let id = start_bss(&mut relay);
    drain(&mut rx);

    relay
        .handle_del_bss_response(Some(DelBssParams {
            session_id: id,
            status: HalStatus::Success,
            bss_idx: 2,
        }))
        .unwrap();

    assert_eq!(relay.radio().link_states, vec![LinkState::Idle]);
    assert!(relay.sessions().get(id).is_none());
    assert_eq!(
        drain(&mut rx),
        vec![ControllerMessage::StopResponse(StopResponse {
            vdev_id: VDEV,
            transaction_id: TRANSACTION,
            result: ResultCode::Success,
        })]
    );
}

#[test]
fn test_del_bss_failure_still_destroys_session() {
    let (mut relay, mut rx) = make_relay();
    let id = start_bss(&mut relay);
    drain(&mut rx);

    relay
        .handle_del_bss_response(Some(DelBssParams {
            session_id: id,
            status: HalStatus::Failure(1),
            bss_idx: 2,
        }))
        .unwrap();

    assert!(relay.radio().link_states.is_empty());
    assert!(relay.sessions().is_empty());
    assert_eq!(
        drain(&mut rx),
        vec![ControllerMessage::StopResponse(StopResponse {
            vdev_id: VDEV,
            transaction_id: TRANSACTION,
            result: ResultCode::StopBssFailure,
        })]
    );
}

#[test]
fn test_del_bss_link_state_failure() {
    let (mut relay, mut rx) = make_relay();
    let id = start_bss(&mut relay);
    drain(&mut rx);
    relay.radio_mut().fail_link_state = true;

    relay
        .handle_del_bss_response(Some(DelBssParams {
            session_id: id,
            status: HalStatus::Success,
            bss_idx: 2,
        }))
        .unwrap();

    assert!(relay.sessions().is_empty());
    let msgs = drain(&mut rx);
    assert!(matches!(
        msgs.as_slice(),
        [ControllerMessage::StopResponse(StopResponse {
            result: ResultCode::StopBssFailure,
            ..
        })]
    ));
}

#[test]
fn test_del_bss_without_body_posts_nothing() {
    let (mut relay, mut rx) = make_relay();

    assert!(matches!(
        relay.handle_del_bss_response(None),
        Err(RelayError::InvalidInput(_))
    ));
    assert!(drain(&mut rx).is_empty());
    assert_eq!(relay.sessions().len(), 1);
}

#[test]
fn test_del_bss_unknown_session_posts_nothing() {
    let (mut relay, mut rx) = make_relay();

    let result = relay.handle_del_bss_response(Some(DelBssParams {
        session_id: SessionId::new(200),
        status: HalStatus::Success,
        bss_idx: 0,
    }));

    assert!(matches!(result, Err(RelayError::SessionNotFound(_))));
    assert!(drain(&mut rx).is_empty());
    assert!(relay.radio().link_states.is_empty());
    assert_eq!(relay.sessions().len(), 1);
}

// ===== Add Station =====

#[test]
fn test_add_sta_success_establishes_peer() {
    let (mut relay, mut rx) = make_relay();
    let id = start_bss(&mut relay);
    let peer = make_peer_addr(1);
    relay.ensure_peer(VDEV, peer).unwrap();
    drain(&mut rx);

    relay
        .handle_add_sta_response(id, Some(add_sta_params(peer, HalStatus::Success)))
        .unwrap();

    let entry = session(&relay).roster().get(&peer).unwrap();
    assert_eq!(entry.mlm_state(), PeerMlmState::LinkEstablished);
    assert_eq!(entry.sta_index(), Some(4));
    assert_eq!(entry.bss_idx(), Some(2));
    assert_eq!(entry.signatures(), (9, 10));
    assert_eq!(
        drain(&mut rx),
        vec![ControllerMessage::NewPeerNotice(NewPeerNotice {
            vdev_id: VDEV,
            peer_addr: peer,
            sta_id: 4,
        })]
    );
}

#[test]
fn test_add_sta_failure_removes_peer() {
    let (mut relay, mut rx) = make_relay();
    let id = start_bss(&mut relay);
    let peer = make_peer_addr(1);
    relay.ensure_peer(VDEV, peer).unwrap();
    drain(&mut rx);

    let result = relay.handle_add_sta_response(id, Some(add_sta_params(peer, HalStatus::Failure(7))));

    assert!(matches!(result, Err(RelayError::StationFailed { peer: p, .. }) if p == peer));
    assert!(!session(&relay).roster().contains(&peer));
    assert!(drain(&mut rx).is_empty());

    // The freed index is handed out again.
    let again = relay.ensure_peer(VDEV, make_peer_addr(2)).unwrap();
    assert_eq!(again.as_u16(), 1);
}

#[test]
fn test_add_sta_unknown_peer() {
    let (mut relay, mut rx) = make_relay();
    let id = start_bss(&mut relay);
    drain(&mut rx);

    let result = relay.handle_add_sta_response(
        id,
        Some(add_sta_params(make_peer_addr(9), HalStatus::Success)),
    );

    assert!(matches!(result, Err(RelayError::PeerNotFound(_))));
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn test_add_sta_without_body() {
    let (mut relay, mut rx) = make_relay();
    let id = session_id(&relay);

    assert!(relay.handle_add_sta_response(id, None).is_err());
    assert!(drain(&mut rx).is_empty());
}
