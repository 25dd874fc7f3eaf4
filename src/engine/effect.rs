//! Effects produced by state transitions

use crate::transcript::Message;

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a message to the transcript
    AppendMessage { message: Message },

    /// Dispatch one exchange to the transport (runs as a background task)
    SendTurn { message: String },

    /// Publish the completion signal. Produced only on the edge into
    /// `Completed`, which is taken at most once per session.
    NotifyCompleted,
}

impl Effect {
    pub fn append(message: Message) -> Self {
        Effect::AppendMessage { message }
    }

    pub fn append_user_message(text: impl Into<String>) -> Self {
        Effect::AppendMessage {
            message: Message::user(text),
        }
    }

    pub fn append_failure_notice() -> Self {
        Effect::AppendMessage {
            message: Message::failure_notice(),
        }
    }

    pub fn send_turn(message: impl Into<String>) -> Self {
        Effect::SendTurn {
            message: message.into(),
        }
    }
}
