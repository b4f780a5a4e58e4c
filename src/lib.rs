//! NDP Relay: NAN data-path session establishment
//!
//! Mediates Neighbor Awareness Networking data-path setup between the
//! session controller above and the radio executor below, keeping the peer
//! roster and BSS state of every data-path interface in step with the
//! negotiation.

pub mod channel;
pub mod config;
pub mod mac;
pub mod protocol;
pub mod radio;
pub mod relay;
pub mod session;
pub mod utils;

// Re-export address types
pub use mac::{MacAddr, MacAddrError};

// Re-export config types
pub use config::{Config, ConfigError, InitiatorPostFailure, RelayConfig};

// Re-export queue types
pub use channel::{
    controller_channel, inbound_channel, radio_channel, ControllerRx, ControllerTx, InboundRx,
    InboundTx, PostError, RadioRx, RadioTx,
};

// Re-export protocol types
pub use protocol::{
    AcceptPolicy, ControllerMessage, ControllerRequest, Envelope, HalStatus, LinkEvent, NdpRole,
    NdpStatus, RadioEvent, RadioRequest, RelayInput, ResultCode, VdevId,
};

// Re-export radio types
pub use radio::{LinkState, QueuedRadio, Radio, RadioError};

// Re-export session types
pub use session::{MlmState, Peer, PeerMlmState, Roster, Session, SessionId, SessionTable};

// Re-export relay types
pub use relay::{Relay, RelayError, RelayQueues};
