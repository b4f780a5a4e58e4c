//! Relay event loop.

use super::{Relay, RelayError};
use crate::channel::InboundRx;
use crate::radio::Radio;
use tracing::{debug, info, warn};

impl<R: Radio> Relay<R> {
    /// Run the relay event loop.
    ///
    /// Drains `inbound` in arrival order, handling each input to
    /// completion before taking the next. Handler errors are logged and the
    /// loop keeps going. Returns once every sender has been dropped.
    pub async fn run(&mut self, mut inbound: InboundRx) {
        info!("Relay event loop started");

        while let Some(input) = inbound.recv().await {
            let name = input.name();
            match self.handle_input(input) {
                Ok(()) => {}
                Err(e @ (RelayError::UnsupportedEvent(_) | RelayError::UnsupportedRequest(_))) => {
                    debug!(msg_type = name, error = %e, "Input discarded");
                }
                Err(e) => {
                    warn!(msg_type = name, error = %e, "Input handled with error");
                }
            }
        }

        info!("Relay event loop stopped, inbound queue closed");
    }
}
