//! Interview service transport
//!
//! One HTTP exchange per conversation turn, behind a trait so the engine can
//! be driven by mocks in tests.

mod error;
mod http;
mod types;

pub use error::{TransportError, TransportErrorKind};
pub use http::HttpTransport;
pub use types::{CandidateProfile, InterviewSummary, TurnReply};

use async_trait::async_trait;
use std::sync::Arc;

/// Capability for performing one conversation turn with the remote service.
///
/// Invoked at most once per accepted submit; retries and timeouts are out of
/// scope, so a pending exchange resolves only when the service answers or the
/// connection fails.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one outbound message and wait for the interviewer's reply.
    async fn send_turn(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<TurnReply, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn send_turn(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<TurnReply, TransportError> {
        (**self).send_turn(session_id, message).await
    }
}

/// Logging wrapper for transports
pub struct LoggingTransport {
    inner: Arc<dyn Transport>,
}

impl LoggingTransport {
    pub fn new(inner: Arc<dyn Transport>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl Transport for LoggingTransport {
    async fn send_turn(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<TurnReply, TransportError> {
        let start = std::time::Instant::now();
        let result = self.inner.send_turn(session_id, message).await;
        let duration = start.elapsed();

        match &result {
            Ok(reply) => {
                tracing::info!(
                    session_id = %session_id,
                    duration_ms = %duration.as_millis(),
                    is_complete = reply.is_complete,
                    "Turn completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    session_id = %session_id,
                    duration_ms = %duration.as_millis(),
                    kind = e.kind.as_str(),
                    error = %e.message,
                    "Turn failed"
                );
            }
        }

        result
    }
}
