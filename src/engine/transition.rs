//! Pure state transition function

use super::{Effect, EngineState, Event, SessionContext};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: EngineState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: EngineState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

/// Rejected operations. A rejection leaves state and transcript untouched;
/// the driver logs it and drops the event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("A turn is already in flight")]
    TurnInFlight,
    #[error("The interview has concluded")]
    SessionCompleted,
    #[error("Message is empty")]
    EmptyMessage,
    #[error("The opening turn has not been issued yet")]
    NotBootstrapped,
    #[error("The opening turn was already issued")]
    AlreadyBootstrapped,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function: applies `event` to `state` and returns the new
/// state plus the effects to execute. No I/O happens here; given the same
/// inputs it always produces the same outputs.
pub fn transition(
    state: &EngineState,
    context: &SessionContext,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // ============================================================
        // Bootstrap
        // ============================================================

        // The opening turn is a turn like any other, except the outbound seed
        // prompt is a handshake and never appears in the transcript.
        (EngineState::Bootstrapping, Event::Bootstrap) => {
            Ok(TransitionResult::new(EngineState::TurnInFlight)
                .with_effect(Effect::send_turn(context.opening_prompt.clone())))
        }

        (_, Event::Bootstrap) => Err(TransitionError::AlreadyBootstrapped),

        // ============================================================
        // User Submission
        // ============================================================

        (EngineState::AwaitingInput, Event::Submit { text }) => {
            // Emptiness is judged on the trimmed text; what the user actually
            // typed is appended and sent unaltered.
            if text.trim().is_empty() {
                return Err(TransitionError::EmptyMessage);
            }
            Ok(TransitionResult::new(EngineState::TurnInFlight)
                .with_effect(Effect::append_user_message(text.clone()))
                .with_effect(Effect::send_turn(text)))
        }

        (EngineState::TurnInFlight, Event::Submit { .. }) => Err(TransitionError::TurnInFlight),
        (EngineState::Completed, Event::Submit { .. }) => Err(TransitionError::SessionCompleted),
        (EngineState::Bootstrapping, Event::Submit { .. }) => {
            Err(TransitionError::NotBootstrapped)
        }

        // ============================================================
        // Turn Resolution
        // ============================================================

        (EngineState::TurnInFlight, Event::TurnSucceeded { reply }) => {
            if reply.is_complete {
                Ok(TransitionResult::new(EngineState::Completed)
                    .with_effect(Effect::append(reply.into_message()))
                    .with_effect(Effect::NotifyCompleted))
            } else {
                Ok(TransitionResult::new(EngineState::AwaitingInput)
                    .with_effect(Effect::append(reply.into_message())))
            }
        }

        // The failed user message stays in the transcript and the session
        // continues; completion is never set on a failed turn.
        (EngineState::TurnInFlight, Event::TurnFailed { .. }) => {
            Ok(TransitionResult::new(EngineState::AwaitingInput)
                .with_effect(Effect::append_failure_notice()))
        }

        // A resolution arriving outside TurnInFlight means the driver and the
        // machine disagree about what is pending; reject rather than corrupt
        // the transcript.
        (state, Event::TurnSucceeded { .. }) => Err(TransitionError::InvalidTransition(
            format!("turn resolved while {:?}", state),
        )),
        (state, Event::TurnFailed { .. }) => Err(TransitionError::InvalidTransition(format!(
            "turn failed while {:?}",
            state
        ))),
    }
}
