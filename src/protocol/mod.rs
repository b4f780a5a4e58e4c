//! NDP Message Vocabulary
//!
//! Two vocabularies meet in the relay:
//!
//! - **Radio side**: requests travelling toward the radio executor and the
//!   events/responses it delivers back ([`RadioEvent`], [`RadioRequest`],
//!   [`LinkEvent`]).
//! - **Controller side**: requests issued by the session controller and the
//!   indications/responses delivered to it ([`ControllerRequest`],
//!   [`ControllerMessage`]).
//!
//! Payload ownership follows the value: whichever handler holds a message
//! owns its buffers, and forwarding a message moves it.

mod messages;
mod records;

pub use messages::{
    ControllerMessage, ControllerRequest, LinkEvent, NewPeerNotice, RadioEvent, RadioRequest,
    RelayInput, SmeRequest, StartConfirm, StopResponse,
};
pub use records::{
    AddBssParams, AddStaParams, AddStaRequest, ConfirmRecord, DelBssParams, IndicationRecord,
    InitiatorRequest, InitiatorResponseRecord, ResponderRequest, ResponderResponseRecord,
};

use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Virtual device (data-path interface) identifier.
///
/// This is the identifier the session controller and the radio executor use
/// to name a data-path interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VdevId(u8);

impl VdevId {
    /// Create a new vdev ID.
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for VdevId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vdev:{}", self.0)
    }
}

// ============================================================================
// Enumerations
// ============================================================================

/// Role of the local side in a data-path negotiation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NdpRole {
    /// The local side issued the data-path request.
    Initiator,
    /// The peer issued the data-path request.
    Responder,
}

impl fmt::Display for NdpRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NdpRole::Initiator => "initiator",
            NdpRole::Responder => "responder",
        };
        write!(f, "{}", s)
    }
}

/// Accept policy configured for an incoming data-path request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AcceptPolicy {
    /// Accept every request; the peer is created up front.
    AcceptAll,
    /// Defer to an explicit responder decision.
    Restricted,
}

impl fmt::Display for AcceptPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AcceptPolicy::AcceptAll => "accept-all",
            AcceptPolicy::Restricted => "restricted",
        };
        write!(f, "{}", s)
    }
}

/// Decision carried by a responder request and echoed in confirms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NdpResponseCode {
    Accept,
    Reject,
    Defer,
}

/// Outcome status of a data-path operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NdpStatus {
    Success,
    Failure,
}

impl NdpStatus {
    /// Check for success.
    pub fn is_success(&self) -> bool {
        matches!(self, NdpStatus::Success)
    }
}

impl fmt::Display for NdpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NdpStatus::Success => "success",
            NdpStatus::Failure => "failure",
        };
        write!(f, "{}", s)
    }
}

/// Hardware status reported in BSS and station completions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HalStatus {
    Success,
    /// Firmware-specific failure code.
    Failure(u32),
}

impl HalStatus {
    /// Check for success.
    pub fn is_success(&self) -> bool {
        matches!(self, HalStatus::Success)
    }
}

impl fmt::Display for HalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HalStatus::Success => write!(f, "success"),
            HalStatus::Failure(code) => write!(f, "failure({:#x})", code),
        }
    }
}

/// Result code carried by start confirmations and stop responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultCode {
    Success,
    /// The hardware rejected or failed the request.
    HalSendMessageFail,
    /// Tearing down the BSS failed.
    StopBssFailure,
}

impl ResultCode {
    /// Check for success.
    pub fn is_success(&self) -> bool {
        matches!(self, ResultCode::Success)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResultCode::Success => "success",
            ResultCode::HalSendMessageFail => "hal-send-message-fail",
            ResultCode::StopBssFailure => "stop-bss-failure",
        };
        write!(f, "{}", s)
    }
}

// ============================================================================
// Envelope
// ============================================================================

/// A message body paired with the transport-level error flag.
///
/// A body-less envelope with `error` set is the failure shape used to
/// unblock the session controller when no well-formed response exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope<T> {
    /// The message body, if any.
    pub body: Option<T>,
    /// Transport-level error signal.
    pub error: bool,
}

impl<T> Envelope<T> {
    /// Wrap a body with the error flag clear.
    pub fn with_body(body: T) -> Self {
        Self {
            body: Some(body),
            error: false,
        }
    }

    /// The body-less failure shape.
    pub fn failed() -> Self {
        Self {
            body: None,
            error: true,
        }
    }

    /// Check for the failure shape (error flag set or body missing).
    pub fn is_failure(&self) -> bool {
        self.error || self.body.is_none()
    }

    /// Take the body if the envelope is well-formed.
    ///
    /// Returns `None` (dropping any body) when the error flag is set.
    pub fn into_body(self) -> Option<T> {
        if self.error {
            None
        } else {
            self.body
        }
    }
}
