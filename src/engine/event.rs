//! Events that drive the turn engine

use crate::transport::{TransportError, TurnReply};

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    /// Host requests the opening turn (valid once, from `Bootstrapping`)
    Bootstrap,

    /// Host submits a user message
    Submit { text: String },

    /// The pending exchange resolved with the interviewer's reply
    TurnSucceeded { reply: TurnReply },

    /// The pending exchange failed
    TurnFailed { error: TransportError },
}
