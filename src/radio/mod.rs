//! Radio Executor Interface
//!
//! The [`Radio`] trait is the relay's view of the layer below it: posting
//! data-path requests, creating and deleting stations, setting the
//! hardware link state, and applying queued configuration. Every call
//! returns immediately; completions come back later as events.

mod queued;

pub use queued::QueuedRadio;

use crate::channel::PostError;
use crate::protocol::RadioRequest;
use crate::session::{Peer, Session};
use crate::MacAddr;
use std::fmt;
use thiserror::Error;

/// Errors reported synchronously by the radio executor interface.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RadioError {
    #[error("post failed: {0}")]
    Post(#[from] PostError),

    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Hardware link state of an interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkState {
    Idle,
    Ndi,
}

impl fmt::Display for LinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LinkState::Idle => "idle",
            LinkState::Ndi => "ndi",
        };
        write!(f, "{}", s)
    }
}

/// Operations the relay issues toward the radio executor.
pub trait Radio {
    /// Post a data-path request.
    fn post(&mut self, request: RadioRequest) -> Result<(), RadioError>;

    /// Create a station for a freshly inserted roster entry.
    fn add_station(&mut self, session: &Session, peer: &Peer) -> Result<(), RadioError>;

    /// Delete the station backing a roster entry.
    fn delete_station(&mut self, session: &Session, peer: &Peer) -> Result<(), RadioError>;

    /// Set the hardware link state for an interface.
    fn set_link_state(
        &mut self,
        state: LinkState,
        self_addr: MacAddr,
        bssid: MacAddr,
    ) -> Result<(), RadioError>;

    /// Apply configuration queued for a session before its BSS started.
    fn apply_configuration(&mut self, session: &Session);
}
