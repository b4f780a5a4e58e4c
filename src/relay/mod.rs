//! NDP Relay
//!
//! The [`Relay`] is the explicit context object for data-path session
//! establishment. It owns the session table, the radio executor handle and
//! the session controller's queue, and every handler runs against it on
//! the single task that drains the inbound queue.
//!
//! ## Message Flow
//!
//! ```text
//! controller --ControllerRequest--> requests  --RadioRequest--> radio
//! radio      --RadioEvent---------> dispatch  --> indication / responses
//! radio      --LinkEvent----------> bss
//!                                   |
//!                                   +--> registrar (roster) --> controller
//! ```
//!
//! Every controller request and every responder response produces exactly
//! one terminal message toward the controller. Failures are folded into
//! that message's status; handler errors are returned for logging only and
//! never stop the event loop.

mod bss;
mod dispatch;
mod event_loop;
mod indication;
mod registrar;
mod reply;
mod requests;
mod responses;
#[cfg(test)]
mod tests;

use crate::channel::{
    controller_channel, inbound_channel, radio_channel, ControllerRx, ControllerTx, InboundRx,
    InboundTx, RadioRx,
};
use crate::protocol::{ControllerMessage, HalStatus, VdevId};
use crate::radio::{QueuedRadio, Radio, RadioError};
use crate::session::{RosterError, SessionId, SessionTable};
use crate::{Config, MacAddr};
use std::collections::TryReserveError;
use thiserror::Error;

/// Errors surfaced by relay handlers.
///
/// These describe what went wrong while handling one input; the controller
/// has already been answered (or deliberately not) by the time a handler
/// returns one.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("allocation failed: {0}")]
    AllocationFailure(#[from] TryReserveError),

    #[error("peer {peer} registration failed: {source}")]
    RegistrationFailed { peer: MacAddr, source: RadioError },

    #[error("peer {peer} not added to roster: {source}")]
    RosterFull { peer: MacAddr, source: RosterError },

    #[error("station setup for peer {peer} failed: {status}")]
    StationFailed { peer: MacAddr, status: HalStatus },

    #[error("BSS start for {session} failed: {status}")]
    BssStartFailed { session: SessionId, status: HalStatus },

    #[error("unsupported event type {0:#06x}")]
    UnsupportedEvent(u16),

    #[error("unsupported request type {0:#06x}")]
    UnsupportedRequest(u16),

    #[error("session not found: {0}")]
    SessionNotFound(SessionId),

    #[error("no session for {0}")]
    NoSessionForVdev(VdevId),

    #[error("peer not found: {0}")]
    PeerNotFound(MacAddr),

    #[error("radio post failed: {0}")]
    Post(#[source] RadioError),
}

/// NDP relay between the session controller and the radio executor.
pub struct Relay<R: Radio> {
    config: Config,
    sessions: SessionTable,
    radio: R,
    controller: ControllerTx,
}

impl<R: Radio> Relay<R> {
    /// Create a relay with an empty session table.
    pub fn new(config: Config, radio: R, controller: ControllerTx) -> Self {
        Self {
            config,
            sessions: SessionTable::new(),
            radio,
            controller,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn sessions(&self) -> &SessionTable {
        &self.sessions
    }

    pub fn sessions_mut(&mut self) -> &mut SessionTable {
        &mut self.sessions
    }

    pub fn radio(&self) -> &R {
        &self.radio
    }

    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }

    /// Create a data-path interface session sized from configuration.
    ///
    /// Returns `None` if the vdev already has a session or no session id
    /// is free.
    pub fn create_session(
        &mut self,
        vdev_id: VdevId,
        transaction_id: u16,
        self_addr: MacAddr,
    ) -> Option<SessionId> {
        let max_peers = self.config.relay.max_peers_per_session;
        self.sessions
            .create(vdev_id, transaction_id, self_addr, max_peers)
    }

    /// Post a message to the session controller.
    fn post_upstream(&self, msg: ControllerMessage) {
        reply::post_to_controller(&self.controller, msg);
    }
}

/// The far ends of the queues a channel-backed relay is wired to.
#[derive(Debug)]
pub struct RelayQueues {
    /// Feeds [`Relay::run`]; clone it for each producer.
    pub inbound_tx: InboundTx,
    /// Handed to [`Relay::run`].
    pub inbound_rx: InboundRx,
    /// Drained by the session controller.
    pub controller_rx: ControllerRx,
    /// Drained by the radio executor.
    pub radio_rx: RadioRx,
}

impl Relay<QueuedRadio> {
    /// Create a relay on bounded queues sized from `config.relay`.
    ///
    /// A configured depth of zero is raised to one.
    pub fn with_queues(config: Config) -> (Self, RelayQueues) {
        let depths = &config.relay;
        let (inbound_tx, inbound_rx) = inbound_channel(depths.inbound_queue_depth.max(1));
        let (controller_tx, controller_rx) =
            controller_channel(depths.controller_queue_depth.max(1));
        let (radio_tx, radio_rx) = radio_channel(depths.radio_queue_depth.max(1));

        let relay = Relay::new(config, QueuedRadio::new(radio_tx), controller_tx);
        let queues = RelayQueues {
            inbound_tx,
            inbound_rx,
            controller_rx,
            radio_rx,
        };
        (relay, queues)
    }
}
