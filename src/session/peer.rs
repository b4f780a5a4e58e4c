//! Roster entries for data-path peers.

use crate::utils::index::PeerIndex;
use crate::MacAddr;
use std::fmt;

/// Kind of station entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaType {
    /// The BSS's own entry.
    SelfEntry,
    /// A data-path (NDI) peer.
    NdiPeer,
}

/// Per-peer MLME sub-state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeerMlmState {
    /// Station creation issued, waiting for the radio's completion.
    WaitAddStaRsp,
    /// Station created; the data link is usable.
    LinkEstablished,
}

impl fmt::Display for PeerMlmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PeerMlmState::WaitAddStaRsp => "wait-add-sta-rsp",
            PeerMlmState::LinkEstablished => "link-established",
        };
        write!(f, "{}", s)
    }
}

/// A data-path peer in a session roster.
///
/// Created by the roster on first reference. Station parameters are
/// filled in when the radio completes station creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Peer {
    addr: MacAddr,
    index: PeerIndex,
    sta_type: StaType,
    /// Set once the radio accepted the station creation request.
    valid: bool,
    mlm_state: PeerMlmState,

    // === Assigned on station completion ===
    sta_index: Option<u16>,
    bss_idx: Option<u8>,
    ucast_sig: u8,
    bcast_sig: u8,
}

impl Peer {
    /// Create a not-yet-valid data-path peer entry.
    pub(super) fn ndi(addr: MacAddr, index: PeerIndex) -> Self {
        Self {
            addr,
            index,
            sta_type: StaType::NdiPeer,
            valid: false,
            mlm_state: PeerMlmState::WaitAddStaRsp,
            sta_index: None,
            bss_idx: None,
            ucast_sig: 0,
            bcast_sig: 0,
        }
    }

    pub fn addr(&self) -> MacAddr {
        self.addr
    }

    /// Stable roster index (assoc id) of this peer.
    pub fn index(&self) -> PeerIndex {
        self.index
    }

    pub fn sta_type(&self) -> StaType {
        self.sta_type
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn mlm_state(&self) -> PeerMlmState {
        self.mlm_state
    }

    pub fn is_link_established(&self) -> bool {
        self.mlm_state == PeerMlmState::LinkEstablished
    }

    /// Hardware station index, once established.
    pub fn sta_index(&self) -> Option<u16> {
        self.sta_index
    }

    pub fn bss_idx(&self) -> Option<u8> {
        self.bss_idx
    }

    /// Unicast and broadcast signatures.
    pub fn signatures(&self) -> (u8, u8) {
        (self.ucast_sig, self.bcast_sig)
    }

    /// Mark the entry accepted by the radio.
    pub fn mark_valid(&mut self) {
        self.valid = true;
    }

    /// Record station parameters and move to `LinkEstablished`.
    pub fn establish(&mut self, sta_index: u16, bss_idx: u8, ucast_sig: u8, bcast_sig: u8) {
        self.sta_index = Some(sta_index);
        self.bss_idx = Some(bss_idx);
        self.ucast_sig = ucast_sig;
        self.bcast_sig = bcast_sig;
        self.valid = true;
        self.mlm_state = PeerMlmState::LinkEstablished;
    }
}

impl fmt::Display for Peer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{} ({})", self.addr, self.index, self.mlm_state)
    }
}
