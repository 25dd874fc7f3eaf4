//! Conversation turn state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions. The
//! async driver in [`crate::runtime`] executes the effects.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;


pub use effect::Effect;
pub use event::Event;
pub use state::{EngineState, SessionContext};
pub use transition::{transition, TransitionError};
