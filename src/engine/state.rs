//! Engine state types

/// Conversation engine state.
///
/// `TurnInFlight` is the serialization gate: exactly one exchange may be
/// pending per session, and submissions arriving while it is held are
/// rejected rather than queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EngineState {
    /// Fresh attach; the opening turn has not been issued yet
    #[default]
    Bootstrapping,

    /// No exchange pending; the next user message may be submitted
    AwaitingInput,

    /// A turn has been accepted and its exchange is pending
    TurnInFlight,

    /// The interviewer concluded the session. Terminal.
    Completed,
}

impl EngineState {
    /// Terminal states accept no further turns
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, EngineState::Completed)
    }

    /// Whether an exchange is currently pending
    #[must_use]
    pub fn is_in_flight(self) -> bool {
        matches!(self, EngineState::TurnInFlight)
    }

    /// Whether `submit` would currently be accepted
    #[must_use]
    pub fn accepts_input(self) -> bool {
        matches!(self, EngineState::AwaitingInput)
    }
}

/// Context for one engine attachment (immutable configuration)
#[derive(Debug, Clone)]
pub struct SessionContext {
    /// Opaque id minted by the service at session creation
    pub session_id: String,
    /// Seed text for the opening turn. The service treats any first message
    /// as the cue to start the interview, so the content is incidental.
    pub opening_prompt: String,
}

impl SessionContext {
    pub fn new(session_id: impl Into<String>, opening_prompt: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            opening_prompt: opening_prompt.into(),
        }
    }
}
