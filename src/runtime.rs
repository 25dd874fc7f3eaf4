//! Async runtime that drives interview sessions
//!
//! The engine in [`crate::engine`] is pure and synchronous; this module owns
//! everything around it: the event channel, the background dispatch of turns
//! over the transport, and the update feed that hosts subscribe to for
//! rendering.

mod driver;


use crate::engine::{EngineState, Event, SessionContext};
use crate::transcript::{Message, TranscriptStore};
use crate::transport::Transport;
use driver::SessionRuntime;
use tokio::sync::{broadcast, mpsc};

/// Updates published to subscribers as a session evolves
#[derive(Debug, Clone)]
pub enum SessionUpdate {
    /// A message landed in the transcript at `index`
    Message { index: usize, message: Message },
    /// The engine moved to a new state
    StateChange { state: EngineState },
    /// The interviewer concluded the session. Sent at most once, after the
    /// closing message.
    Completed,
}

/// One interview session as tracked by the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque identifier issued by the service at creation
    pub id: String,
    /// Set when the interviewer concludes the session, never cleared
    pub completed: bool,
}

impl Session {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            completed: false,
        }
    }
}

/// Handle for interacting with a running session.
///
/// Cheap to clone; all clones talk to the same runtime.
#[derive(Clone)]
pub struct SessionHandle {
    session_id: String,
    event_tx: mpsc::Sender<Event>,
    update_tx: broadcast::Sender<SessionUpdate>,
    transcript: TranscriptStore,
}

impl SessionHandle {
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    #[must_use]
    pub fn transcript(&self) -> &TranscriptStore {
        &self.transcript
    }

    /// Subscribe to the update feed. Only updates sent after this call are
    /// delivered, so subscribe before acting on the session.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<SessionUpdate> {
        self.update_tx.subscribe()
    }

    /// Ask the interviewer to open the conversation. Accepted once per
    /// session; repeats are dropped.
    pub async fn bootstrap(&self) {
        self.send_event(Event::Bootstrap).await;
    }

    /// Submit candidate input for the next turn. Input that arrives while a
    /// turn is pending, or after completion, is dropped.
    pub async fn submit(&self, text: impl Into<String>) {
        self.send_event(Event::Submit { text: text.into() }).await;
    }

    async fn send_event(&self, event: Event) {
        if self.event_tx.send(event).await.is_err() {
            tracing::warn!(
                session_id = %self.session_id,
                "Session runtime is gone, event dropped"
            );
        }
    }
}

/// Spawn a runtime for `context` driven by `transport` and return a handle
/// to it. The session starts unbootstrapped.
pub fn attach<T: Transport + 'static>(context: SessionContext, transport: T) -> SessionHandle {
    let (event_tx, event_rx) = mpsc::channel(32);
    let (update_tx, _) = broadcast::channel(128);
    let transcript = TranscriptStore::new();
    let session_id = context.session_id.clone();

    let runtime = SessionRuntime::new(
        context,
        EngineState::Bootstrapping,
        transcript.clone(),
        transport,
        event_rx,
        event_tx.clone(),
        update_tx.clone(),
    );

    tokio::spawn(runtime.run());

    SessionHandle {
        session_id,
        event_tx,
        update_tx,
        transcript,
    }
}
