//! Inter-Layer Message Queues
//!
//! Bounded `tokio` channels carry messages between the relay, the session
//! controller, and the radio executor. Posting never waits: a full or
//! closed queue is reported synchronously as a [`PostError`].

use crate::protocol::{ControllerMessage, RadioRequest, RelayInput};
use thiserror::Error;
use tokio::sync::mpsc::error::TrySendError;

/// Synchronous post failure.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PostError {
    #[error("queue full")]
    QueueFull,

    #[error("queue closed")]
    Closed,
}

impl<T> From<TrySendError<T>> for PostError {
    fn from(err: TrySendError<T>) -> Self {
        match err {
            TrySendError::Full(_) => PostError::QueueFull,
            TrySendError::Closed(_) => PostError::Closed,
        }
    }
}

// ============================================================================
// Channel Types
// ============================================================================

/// Channel sender for messages bound to the session controller.
pub type ControllerTx = tokio::sync::mpsc::Sender<ControllerMessage>;

/// Channel receiver for messages bound to the session controller.
pub type ControllerRx = tokio::sync::mpsc::Receiver<ControllerMessage>;

/// Channel sender for requests bound to the radio executor.
pub type RadioTx = tokio::sync::mpsc::Sender<RadioRequest>;

/// Channel receiver for requests bound to the radio executor.
pub type RadioRx = tokio::sync::mpsc::Receiver<RadioRequest>;

/// Channel sender feeding the relay event loop.
pub type InboundTx = tokio::sync::mpsc::Sender<RelayInput>;

/// Channel receiver drained by the relay event loop.
pub type InboundRx = tokio::sync::mpsc::Receiver<RelayInput>;

/// Create a controller channel with the given buffer size.
pub fn controller_channel(buffer: usize) -> (ControllerTx, ControllerRx) {
    tokio::sync::mpsc::channel(buffer)
}

/// Create a radio request channel with the given buffer size.
pub fn radio_channel(buffer: usize) -> (RadioTx, RadioRx) {
    tokio::sync::mpsc::channel(buffer)
}

/// Create the relay's inbound channel with the given buffer size.
pub fn inbound_channel(buffer: usize) -> (InboundTx, InboundRx) {
    tokio::sync::mpsc::channel(buffer)
}
