//! Relay configuration subsection (`relay.*`).

use serde::{Deserialize, Serialize};

/// What the initiator request builder does when posting to the radio
/// executor fails (`relay.initiator_post_failure`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InitiatorPostFailure {
    /// Log the failure and report local success to the caller. The
    /// controller gets no synthesized response.
    #[default]
    Log,
    /// Synthesize a failed initiator response, as the responder path does.
    Report,
}

/// Relay parameters (`relay.*`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Roster capacity per session (`relay.max_peers_per_session`).
    #[serde(default = "RelayConfig::default_max_peers_per_session")]
    pub max_peers_per_session: u16,
    /// Event loop input queue depth (`relay.inbound_queue_depth`).
    #[serde(default = "RelayConfig::default_queue_depth")]
    pub inbound_queue_depth: usize,
    /// Session controller queue depth (`relay.controller_queue_depth`).
    #[serde(default = "RelayConfig::default_queue_depth")]
    pub controller_queue_depth: usize,
    /// Radio executor queue depth (`relay.radio_queue_depth`).
    #[serde(default = "RelayConfig::default_queue_depth")]
    pub radio_queue_depth: usize,
    /// Initiator post-failure policy (`relay.initiator_post_failure`).
    #[serde(default)]
    pub initiator_post_failure: InitiatorPostFailure,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            max_peers_per_session: Self::default_max_peers_per_session(),
            inbound_queue_depth: Self::default_queue_depth(),
            controller_queue_depth: Self::default_queue_depth(),
            radio_queue_depth: Self::default_queue_depth(),
            initiator_post_failure: InitiatorPostFailure::Log,
        }
    }
}

impl RelayConfig {
    fn default_max_peers_per_session() -> u16 {
        32
    }

    fn default_queue_depth() -> usize {
        64
    }
}
