//! Controller replies and the unblock guard.

use crate::channel::{ControllerTx, PostError};
use crate::protocol::{ControllerMessage, Envelope};
use tracing::{error, trace};

/// Post a message to the session controller, logging a failed post.
pub(super) fn post_to_controller(controller: &ControllerTx, msg: ControllerMessage) {
    let name = msg.name();
    match controller.try_send(msg) {
        Ok(()) => trace!(msg_type = name, "Posted to controller"),
        Err(e) => error!(
            msg_type = name,
            error = %PostError::from(e),
            "Controller post failed"
        ),
    }
}

/// Which response a blocked controller request is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ReplyKind {
    Initiator,
    Responder,
}

impl ReplyKind {
    /// The body-less failure response that unblocks the controller.
    fn failure(self) -> ControllerMessage {
        match self {
            ReplyKind::Initiator => ControllerMessage::InitiatorResponse(Envelope::failed()),
            ReplyKind::Responder => ControllerMessage::ResponderResponse(Envelope::failed()),
        }
    }
}

/// Guarantees the controller is answered exactly once.
///
/// Dropping an armed reply posts the failure response for its kind, so
/// every early return leaves the controller unblocked. [`complete`] posts
/// the real response instead; [`disarm`] hands the obligation to a later
/// event (the radio executor's own response).
///
/// [`complete`]: PendingReply::complete
/// [`disarm`]: PendingReply::disarm
pub(super) struct PendingReply {
    controller: ControllerTx,
    kind: ReplyKind,
    armed: bool,
}

impl PendingReply {
    pub(super) fn new(controller: &ControllerTx, kind: ReplyKind) -> Self {
        Self {
            controller: controller.clone(),
            kind,
            armed: true,
        }
    }

    /// Answer with `msg` instead of the failure response.
    pub(super) fn complete(mut self, msg: ControllerMessage) {
        self.armed = false;
        post_to_controller(&self.controller, msg);
    }

    /// The terminal response will arrive through the event path.
    pub(super) fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for PendingReply {
    fn drop(&mut self) {
        if self.armed {
            post_to_controller(&self.controller, self.kind.failure());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::controller_channel;

    #[test]
    fn test_dropped_reply_posts_failure() {
        let (tx, mut rx) = controller_channel(4);
        {
            let _reply = PendingReply::new(&tx, ReplyKind::Responder);
        }
        assert_eq!(
            rx.try_recv().unwrap(),
            ControllerMessage::ResponderResponse(Envelope::failed())
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_completed_reply_posts_once() {
        let (tx, mut rx) = controller_channel(4);
        let reply = PendingReply::new(&tx, ReplyKind::Initiator);
        reply.complete(ControllerMessage::InitiatorResponse(Envelope::failed()));
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_disarmed_reply_posts_nothing() {
        let (tx, mut rx) = controller_channel(4);
        PendingReply::new(&tx, ReplyKind::Initiator).disarm();
        assert!(rx.try_recv().is_err());
    }
}
