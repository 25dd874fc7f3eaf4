//! Session runtime driver

use super::{Session, SessionUpdate};
use crate::engine::{transition, Effect, EngineState, Event, SessionContext};
use crate::transcript::TranscriptStore;
use crate::transport::Transport;
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc};

/// Generic session runtime that can work with any transport implementation
pub struct SessionRuntime<T: Transport + 'static> {
    context: SessionContext,
    state: EngineState,
    session: Session,
    transcript: TranscriptStore,
    transport: Arc<T>,
    event_rx: mpsc::Receiver<Event>,
    event_tx: mpsc::Sender<Event>,
    update_tx: broadcast::Sender<SessionUpdate>,
}

impl<T: Transport + 'static> SessionRuntime<T> {
    pub fn new(
        context: SessionContext,
        state: EngineState,
        transcript: TranscriptStore,
        transport: T,
        event_rx: mpsc::Receiver<Event>,
        event_tx: mpsc::Sender<Event>,
        update_tx: broadcast::Sender<SessionUpdate>,
    ) -> Self {
        let session = Session {
            id: context.session_id.clone(),
            completed: state.is_terminal(),
        };
        Self {
            context,
            state,
            session,
            transcript,
            transport: Arc::new(transport),
            event_rx,
            event_tx,
            update_tx,
        }
    }

    pub async fn run(mut self) {
        tracing::info!(session_id = %self.session.id, "Starting session runtime");

        // Process events in a loop - no recursion
        loop {
            tokio::select! {
                Some(event) = self.event_rx.recv() => {
                    self.process_event(event);
                }
                else => break,
            }
        }

        tracing::info!(session_id = %self.session.id, "Session runtime stopped");
    }

    fn process_event(&mut self, event: Event) {
        let result = match transition(&self.state, &self.context, event) {
            Ok(result) => result,
            Err(reason) => {
                // Rejected events are dropped whole: no state change, no
                // transcript write, no update to subscribers.
                tracing::debug!(
                    session_id = %self.session.id,
                    reason = %reason,
                    "Event rejected"
                );
                return;
            }
        };

        let old_state = std::mem::replace(&mut self.state, result.new_state);
        if old_state != self.state {
            tracing::debug!(
                session_id = %self.session.id,
                from = ?old_state,
                to = ?self.state,
                "State changed"
            );
            let _ = self
                .update_tx
                .send(SessionUpdate::StateChange { state: self.state });
        }

        for effect in result.effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: Effect) {
        match effect {
            Effect::AppendMessage { message } => {
                let index = self.transcript.append(message.clone());
                let _ = self
                    .update_tx
                    .send(SessionUpdate::Message { index, message });
            }
            Effect::SendTurn { message } => {
                // Dispatch the exchange as a background task so the runtime
                // keeps absorbing events while it is pending. The engine
                // admits at most one pending turn; the outcome comes back
                // through the event channel.
                let transport = self.transport.clone();
                let event_tx = self.event_tx.clone();
                let session_id = self.session.id.clone();
                tokio::spawn(async move {
                    let event = match transport.send_turn(&session_id, &message).await {
                        Ok(reply) => Event::TurnSucceeded { reply },
                        Err(error) => Event::TurnFailed { error },
                    };
                    let _ = event_tx.send(event).await;
                });
            }
            Effect::NotifyCompleted => {
                if !self.session.completed {
                    self.session.completed = true;
                    tracing::info!(session_id = %self.session.id, "Session completed");
                    let _ = self.update_tx.send(SessionUpdate::Completed);
                }
            }
        }
    }
}
