//! Inbound message classification.

use super::{Relay, RelayError};
use crate::protocol::{ControllerMessage, ControllerRequest, LinkEvent, RadioEvent, RelayInput};
use crate::radio::Radio;
use tracing::{debug, warn};

impl<R: Radio> Relay<R> {
    /// Handle one input from the inbound queue.
    pub fn handle_input(&mut self, input: RelayInput) -> Result<(), RelayError> {
        match input {
            RelayInput::Radio(event) => self.handle_radio_event(event),
            RelayInput::Link(event) => self.handle_link_event(event),
            RelayInput::Controller(request) => self.handle_controller_request(request),
        }
    }

    /// Dispatch an NDP event from the radio executor.
    ///
    /// The event is consumed: its payload is either moved into the message
    /// forwarded upstream or dropped here once the handler returns.
    pub fn handle_radio_event(&mut self, event: RadioEvent) -> Result<(), RelayError> {
        debug!(msg_type = event.name(), "NDP event from radio");
        match event {
            RadioEvent::Confirm(confirm) => {
                self.post_upstream(ControllerMessage::ConfirmNotice(confirm));
                Ok(())
            }
            RadioEvent::InitiatorResponse(response) => self.handle_initiator_response(response),
            RadioEvent::Indication(indication) => self.handle_indication(indication),
            RadioEvent::ResponderResponse(response) => self.handle_responder_response(response),
            RadioEvent::Unsupported(msg_type) => {
                warn!(msg_type = msg_type, "Unhandled NDP event");
                Err(RelayError::UnsupportedEvent(msg_type))
            }
        }
    }

    /// Dispatch a request from the session controller.
    pub fn handle_controller_request(&mut self, request: ControllerRequest) -> Result<(), RelayError> {
        debug!(msg_type = request.name(), "NDP request from controller");
        match request {
            ControllerRequest::Initiator(req) => self.handle_initiator_request(req),
            ControllerRequest::Responder(req) => self.handle_responder_request(req),
            ControllerRequest::Unsupported(msg_type) => {
                warn!(msg_type = msg_type, "Unhandled NDP request");
                Err(RelayError::UnsupportedRequest(msg_type))
            }
        }
    }

    /// Dispatch a BSS or station completion.
    pub fn handle_link_event(&mut self, event: LinkEvent) -> Result<(), RelayError> {
        debug!(msg_type = event.name(), "Link event from radio");
        match event {
            LinkEvent::AddBssResponse { session_id, params } => {
                self.handle_add_bss_response(session_id, params)
            }
            LinkEvent::DelBssResponse(params) => self.handle_del_bss_response(params),
            LinkEvent::AddStaResponse { session_id, params } => {
                self.handle_add_sta_response(session_id, params)
            }
        }
    }
}
