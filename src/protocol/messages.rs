//! Tagged message unions exchanged with the radio executor and the
//! session controller.

use super::records::{
    AddBssParams, AddStaParams, AddStaRequest, ConfirmRecord, DelBssParams, IndicationRecord,
    InitiatorRequest, InitiatorResponseRecord, ResponderRequest, ResponderResponseRecord,
};
use super::{Envelope, ResultCode, VdevId};
use crate::radio::LinkState;
use crate::session::SessionId;
use crate::MacAddr;

// ============================================================================
// Radio Executor -> Relay
// ============================================================================

/// An NDP event delivered by the radio executor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RadioEvent {
    /// Terminal data-path outcome, passed through to the controller.
    Confirm(Envelope<ConfirmRecord>),
    /// Answer to a local initiator request, passed through to the controller.
    InitiatorResponse(Envelope<InitiatorResponseRecord>),
    /// Peer-initiated data-path request.
    Indication(IndicationRecord),
    /// Answer to a local responder request.
    ResponderResponse(Envelope<ResponderResponseRecord>),
    /// A message type this relay does not handle.
    Unsupported(u16),
}

impl RadioEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            RadioEvent::Confirm(_) => "Confirm",
            RadioEvent::InitiatorResponse(_) => "InitiatorResponse",
            RadioEvent::Indication(_) => "Indication",
            RadioEvent::ResponderResponse(_) => "ResponderResponse",
            RadioEvent::Unsupported(_) => "Unsupported",
        }
    }
}

/// BSS and station completions for data-path interfaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkEvent {
    /// Data-path interface start finished.
    AddBssResponse {
        session_id: SessionId,
        params: Option<AddBssParams>,
    },
    /// Data-path interface teardown finished.
    DelBssResponse(Option<DelBssParams>),
    /// Station creation for a roster entry finished.
    AddStaResponse {
        session_id: SessionId,
        params: Option<AddStaParams>,
    },
}

impl LinkEvent {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            LinkEvent::AddBssResponse { .. } => "AddBssResponse",
            LinkEvent::DelBssResponse(_) => "DelBssResponse",
            LinkEvent::AddStaResponse { .. } => "AddStaResponse",
        }
    }
}

// ============================================================================
// Relay -> Radio Executor
// ============================================================================

/// A request posted to the radio executor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RadioRequest {
    Initiator(InitiatorRequest),
    Responder(ResponderRequest),
    AddStation(AddStaRequest),
    DeleteStation {
        vdev_id: VdevId,
        peer_mac: MacAddr,
        peer_index: u16,
    },
    SetLinkState {
        state: LinkState,
        self_addr: MacAddr,
        bssid: MacAddr,
    },
    ApplyConfiguration {
        vdev_id: VdevId,
    },
}

impl RadioRequest {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            RadioRequest::Initiator(_) => "InitiatorRequest",
            RadioRequest::Responder(_) => "ResponderRequest",
            RadioRequest::AddStation(_) => "AddStation",
            RadioRequest::DeleteStation { .. } => "DeleteStation",
            RadioRequest::SetLinkState { .. } => "SetLinkState",
            RadioRequest::ApplyConfiguration { .. } => "ApplyConfiguration",
        }
    }
}

// ============================================================================
// Session Controller -> Relay
// ============================================================================

/// A controller request with its addressing header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmeRequest<T> {
    pub session_id: VdevId,
    pub req: T,
}

/// A request issued by the session controller.
///
/// `None` bodies model requests that arrived without a payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControllerRequest {
    Initiator(Option<SmeRequest<InitiatorRequest>>),
    Responder(Option<SmeRequest<ResponderRequest>>),
    /// A message type this relay does not handle.
    Unsupported(u16),
}

impl ControllerRequest {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            ControllerRequest::Initiator(_) => "InitiatorRequest",
            ControllerRequest::Responder(_) => "ResponderRequest",
            ControllerRequest::Unsupported(_) => "Unsupported",
        }
    }
}

// ============================================================================
// Relay -> Session Controller
// ============================================================================

/// Notification that a roster peer finished station setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewPeerNotice {
    pub vdev_id: VdevId,
    pub peer_addr: MacAddr,
    pub sta_id: u16,
}

/// Confirmation of a data-path interface start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartConfirm {
    pub session_id: SessionId,
    pub result: ResultCode,
}

/// Response to a data-path interface teardown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopResponse {
    pub vdev_id: VdevId,
    pub transaction_id: u16,
    pub result: ResultCode,
}

/// A message delivered to the session controller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControllerMessage {
    Indication(IndicationRecord),
    InitiatorResponse(Envelope<InitiatorResponseRecord>),
    ResponderResponse(Envelope<ResponderResponseRecord>),
    ConfirmNotice(Envelope<ConfirmRecord>),
    NewPeerNotice(NewPeerNotice),
    StartConfirm(StartConfirm),
    StopResponse(StopResponse),
}

impl ControllerMessage {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            ControllerMessage::Indication(_) => "Indication",
            ControllerMessage::InitiatorResponse(_) => "InitiatorResponse",
            ControllerMessage::ResponderResponse(_) => "ResponderResponse",
            ControllerMessage::ConfirmNotice(_) => "ConfirmNotice",
            ControllerMessage::NewPeerNotice(_) => "NewPeerNotice",
            ControllerMessage::StartConfirm(_) => "StartConfirm",
            ControllerMessage::StopResponse(_) => "StopResponse",
        }
    }
}

// ============================================================================
// Event Loop Input
// ============================================================================

/// Everything the relay event loop consumes, in arrival order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RelayInput {
    Radio(RadioEvent),
    Link(LinkEvent),
    Controller(ControllerRequest),
}

impl RelayInput {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            RelayInput::Radio(event) => event.name(),
            RelayInput::Link(event) => event.name(),
            RelayInput::Controller(request) => request.name(),
        }
    }
}

impl From<RadioEvent> for RelayInput {
    fn from(event: RadioEvent) -> Self {
        RelayInput::Radio(event)
    }
}

impl From<LinkEvent> for RelayInput {
    fn from(event: LinkEvent) -> Self {
        RelayInput::Link(event)
    }
}

impl From<ControllerRequest> for RelayInput {
    fn from(request: ControllerRequest) -> Self {
        RelayInput::Controller(request)
    }
}
