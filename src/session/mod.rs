//! Data-Path Interface Sessions
//!
//! A [`Session`] is the association context of one data-path interface:
//! its MLME state, BSS identity, and the roster of data-path peers. The
//! [`SessionTable`] owns every session and is the only way to reach one;
//! handlers resolve sessions by id or vdev on each event.

mod peer;
mod roster;
mod table;

pub use peer::{Peer, PeerMlmState, StaType};
pub use roster::{Roster, RosterError};
pub use table::SessionTable;

use crate::protocol::VdevId;
use crate::MacAddr;
use std::fmt;

/// Relay-local session identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SessionId(u8);

impl SessionId {
    /// Create a new session ID.
    pub fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session:{}", self.0)
    }
}

/// MLME state of a data-path interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MlmState {
    /// No BSS running.
    Idle,
    /// BSS start requested, waiting for completion.
    WaitAddBssRsp,
    /// BSS running; peers may be added.
    BssStarted,
}

impl fmt::Display for MlmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MlmState::Idle => "idle",
            MlmState::WaitAddBssRsp => "wait-add-bss-rsp",
            MlmState::BssStarted => "bss-started",
        };
        write!(f, "{}", s)
    }
}

/// System role assigned to a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SystemRole {
    Unknown,
    /// Data-path interface.
    Ndi,
}

/// One data-path interface's association context.
#[derive(Debug)]
pub struct Session {
    id: SessionId,
    vdev_id: VdevId,
    /// Transaction id of the controller request that created the session.
    transaction_id: u16,
    self_addr: MacAddr,
    mlm_state: MlmState,
    system_role: SystemRole,
    bss_idx: Option<u8>,
    sta_type_for_bss: Option<StaType>,
    roster: Roster,
}

impl Session {
    /// Create an idle session with an empty roster.
    pub fn new(
        id: SessionId,
        vdev_id: VdevId,
        transaction_id: u16,
        self_addr: MacAddr,
        max_peers: u16,
    ) -> Self {
        Self {
            id,
            vdev_id,
            transaction_id,
            self_addr,
            mlm_state: MlmState::Idle,
            system_role: SystemRole::Unknown,
            bss_idx: None,
            sta_type_for_bss: None,
            roster: Roster::new(max_peers),
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn vdev_id(&self) -> VdevId {
        self.vdev_id
    }

    pub fn transaction_id(&self) -> u16 {
        self.transaction_id
    }

    /// Our own interface address, also used as the BSSID.
    pub fn self_addr(&self) -> MacAddr {
        self.self_addr
    }

    pub fn mlm_state(&self) -> MlmState {
        self.mlm_state
    }

    pub fn system_role(&self) -> SystemRole {
        self.system_role
    }

    /// BSS index assigned by the hardware, once started.
    pub fn bss_idx(&self) -> Option<u8> {
        self.bss_idx
    }

    pub fn sta_type_for_bss(&self) -> Option<StaType> {
        self.sta_type_for_bss
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    /// Record that a BSS start is in flight.
    pub fn mark_start_pending(&mut self) {
        self.mlm_state = MlmState::WaitAddBssRsp;
    }

    /// Apply a successful data-path interface start.
    pub fn mark_bss_started(&mut self, bss_idx: u8) {
        self.mlm_state = MlmState::BssStarted;
        self.bss_idx = Some(bss_idx);
        self.system_role = SystemRole::Ndi;
        self.sta_type_for_bss = Some(StaType::SelfEntry);
    }

    /// Return to idle after the BSS is gone.
    pub fn mark_idle(&mut self) {
        self.mlm_state = MlmState::Idle;
    }
}
