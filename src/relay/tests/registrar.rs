use super::*;
use crate::session::{PeerMlmState, RosterError, StaType};
use crate::utils::index::{IndexError, PeerIndex};

#[test]
fn test_ensure_peer_creates_valid_entry() {
    let (mut relay, mut rx) = make_relay();
    let addr = make_peer_addr(1);

    let index = relay.ensure_peer(VDEV, addr).unwrap();

    assert_eq!(index, PeerIndex::new(1));
    let peer = session(&relay).roster().get(&addr).unwrap();
    assert_eq!(peer.sta_type(), StaType::NdiPeer);
    assert!(peer.is_valid());
    assert_eq!(peer.mlm_state(), PeerMlmState::WaitAddStaRsp);
    assert_eq!(relay.radio().added, vec![addr]);
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn test_ensure_peer_is_idempotent() {
    let (mut relay, _rx) = make_relay();
    let addr = make_peer_addr(1);

    let first = relay.ensure_peer(VDEV, addr).unwrap();
    let second = relay.ensure_peer(VDEV, addr).unwrap();

    assert_eq!(first, second);
    assert_eq!(relay.radio().added.len(), 1);
    assert_eq!(session(&relay).roster().len(), 1);
}

#[test]
fn test_ensure_peer_distinct_addresses_get_distinct_indices() {
    let (mut relay, _rx) = make_relay();

    let a = relay.ensure_peer(VDEV, make_peer_addr(1)).unwrap();
    let b = relay.ensure_peer(VDEV, make_peer_addr(2)).unwrap();

    assert_ne!(a, b);
    assert_eq!(relay.radio().added.len(), 2);
}

#[test]
fn test_ensure_peer_unknown_vdev() {
    let (mut relay, _rx) = make_relay();

    let result = relay.ensure_peer(VdevId::new(9), make_peer_addr(1));

    assert!(matches!(result, Err(RelayError::NoSessionForVdev(v)) if v == VdevId::new(9)));
    assert!(relay.radio().added.is_empty());
}

#[test]
fn test_ensure_peer_rolls_back_on_add_station_failure() {
    let (mut relay, _rx) = make_relay();
    relay.radio_mut().fail_add_station = true;
    let addr = make_peer_addr(1);

    let result = relay.ensure_peer(VDEV, addr);

    assert!(matches!(result, Err(RelayError::RegistrationFailed { peer, .. }) if peer == addr));
    assert!(session(&relay).roster().is_empty());

    // The rolled-back index is handed out again.
    relay.radio_mut().fail_add_station = false;
    assert_eq!(relay.ensure_peer(VDEV, addr).unwrap(), PeerIndex::new(1));
}

#[test]
fn test_ensure_peer_roster_full() {
    let mut config = Config::new();
    config.relay.max_peers_per_session = 1;
    let (mut relay, _rx) = make_relay_with(config);
    relay.ensure_peer(VDEV, make_peer_addr(1)).unwrap();

    let result = relay.ensure_peer(VDEV, make_peer_addr(2));

    assert!(matches!(
        result,
        Err(RelayError::RosterFull {
            source: RosterError::Full(IndexError::Exhausted(1)),
            ..
        })
    ));
    assert_eq!(relay.radio().added.len(), 1);
}

#[test]
fn test_remove_peer_deletes_station() {
    let (mut relay, _rx) = make_relay();
    let addr = make_peer_addr(1);
    relay.ensure_peer(VDEV, addr).unwrap();

    relay.remove_peer(VDEV, addr);

    assert!(!session(&relay).roster().contains(&addr));
    assert_eq!(relay.radio().deleted, vec![addr]);
}

#[test]
fn test_remove_peer_is_idempotent() {
    let (mut relay, _rx) = make_relay();
    let addr = make_peer_addr(1);
    relay.ensure_peer(VDEV, addr).unwrap();

    relay.remove_peer(VDEV, addr);
    relay.remove_peer(VDEV, addr);
    relay.remove_peer(VdevId::new(9), addr);

    assert_eq!(relay.radio().deleted.len(), 1);
}

#[test]
fn test_remove_peer_skips_delete_for_unaccepted_entry() {
    let (mut relay, _rx) = make_relay();
    let addr = make_peer_addr(1);
    relay
        .sessions
        .find_by_vdev_mut(VDEV)
        .unwrap()
        .roster_mut()
        .insert_ndi_peer(addr)
        .unwrap();

    relay.remove_peer(VDEV, addr);

    assert!(session(&relay).roster().is_empty());
    assert!(relay.radio().deleted.is_empty());
}
