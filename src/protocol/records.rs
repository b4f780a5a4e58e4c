//! Message records carried by NDP events and requests.

use super::{AcceptPolicy, HalStatus, NdpResponseCode, NdpRole, NdpStatus, VdevId};
use crate::session::SessionId;
use crate::MacAddr;
use std::collections::TryReserveError;

/// Copy a byte buffer into a freshly allocated one, reporting allocation
/// failure instead of aborting.
fn try_copy_bytes(src: &[u8]) -> Result<Vec<u8>, TryReserveError> {
    let mut dst = Vec::new();
    dst.try_reserve_exact(src.len())?;
    dst.extend_from_slice(src);
    Ok(dst)
}

// ============================================================================
// Radio Executor -> Relay
// ============================================================================

/// A peer-initiated data-path request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicationRecord {
    pub vdev_id: VdevId,
    pub role: NdpRole,
    pub policy: AcceptPolicy,
    pub service_instance_id: u32,
    pub ndp_instance_id: u32,
    /// Discovery-interface address of the peer.
    pub peer_discovery_mac: MacAddr,
    /// Data-path interface address of the peer (the roster key).
    pub peer_ndi_mac: MacAddr,
    /// Opaque NDP configuration blob.
    pub ndp_config: Vec<u8>,
    /// Opaque application info blob.
    pub ndp_app_info: Vec<u8>,
}

impl IndicationRecord {
    /// Drop the configuration and application-info buffers.
    pub fn release_payload(&mut self) {
        self.ndp_config = Vec::new();
        self.ndp_app_info = Vec::new();
    }

    /// Check whether the opaque buffers are still attached.
    pub fn has_payload(&self) -> bool {
        !self.ndp_config.is_empty() || !self.ndp_app_info.is_empty()
    }
}

/// Radio executor's answer to an initiator request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitiatorResponseRecord {
    pub vdev_id: VdevId,
    pub transaction_id: u16,
    pub ndp_instance_id: u32,
    pub status: NdpStatus,
    pub reason: u32,
}

/// Radio executor's answer to a responder request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponderResponseRecord {
    pub vdev_id: VdevId,
    pub transaction_id: u16,
    pub peer_ndi_mac: MacAddr,
    pub status: NdpStatus,
    pub reason: u32,
}

/// Terminal outcome of a negotiated data path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmRecord {
    pub vdev_id: VdevId,
    pub ndp_instance_id: u32,
    pub peer_ndi_mac: MacAddr,
    pub response: NdpResponseCode,
    pub reason: u32,
    pub ndp_info: Vec<u8>,
}

// ============================================================================
// Session Controller -> Radio Executor
// ============================================================================

/// Request to set up a data path toward a discovered peer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitiatorRequest {
    pub vdev_id: VdevId,
    pub transaction_id: u16,
    pub channel: u32,
    pub service_instance_id: u32,
    pub peer_discovery_mac: MacAddr,
    pub ndp_config: Vec<u8>,
    pub ndp_info: Vec<u8>,
}

impl InitiatorRequest {
    /// Produce an independent copy for the radio executor.
    pub fn try_translate(&self) -> Result<Self, TryReserveError> {
        Ok(Self {
            ndp_config: try_copy_bytes(&self.ndp_config)?,
            ndp_info: try_copy_bytes(&self.ndp_info)?,
            ..*self
        })
    }
}

/// Local decision on a peer-initiated data path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponderRequest {
    pub vdev_id: VdevId,
    pub transaction_id: u16,
    pub ndp_instance_id: u32,
    pub response: NdpResponseCode,
    pub ndp_config: Vec<u8>,
    pub ndp_info: Vec<u8>,
}

impl ResponderRequest {
    /// Produce an independent copy for the radio executor.
    pub fn try_translate(&self) -> Result<Self, TryReserveError> {
        Ok(Self {
            ndp_config: try_copy_bytes(&self.ndp_config)?,
            ndp_info: try_copy_bytes(&self.ndp_info)?,
            ..*self
        })
    }
}

/// Station creation request issued for a new roster entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddStaRequest {
    pub vdev_id: VdevId,
    pub session_id: SessionId,
    pub peer_mac: MacAddr,
    pub peer_index: u16,
    pub bssid: MacAddr,
}

// ============================================================================
// BSS / Station Completions
// ============================================================================

/// Completion of a data-path interface start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddBssParams {
    pub status: HalStatus,
    pub bss_idx: u8,
}

/// Completion of a data-path interface teardown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DelBssParams {
    pub session_id: SessionId,
    pub status: HalStatus,
    pub bss_idx: u8,
}

/// Completion of a station creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddStaParams {
    pub vdev_id: VdevId,
    pub sta_mac: MacAddr,
    pub status: HalStatus,
    pub sta_idx: u16,
    pub bss_idx: u8,
    pub ucast_sig: u8,
    pub bcast_sig: u8,
}
