//! Transport error types

use thiserror::Error;

/// A failed exchange with the interview service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Network, message)
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::InvalidRequest, message)
    }

    pub fn unknown_session(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::UnknownSession, message)
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::ServerError, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Unknown, message)
    }
}

/// Error classification for logging and host display.
///
/// Every kind takes the same recovery path through the engine (a visible
/// transcript notice); none is fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    /// Connection failed or the request never completed
    Network,
    /// The service rejected the request body (400)
    InvalidRequest,
    /// The service does not know the session id (404)
    UnknownSession,
    /// The service failed internally (5xx)
    ServerError,
    /// Unknown error
    Unknown,
}

impl TransportErrorKind {
    /// Stable label for structured log fields
    pub fn as_str(self) -> &'static str {
        match self {
            TransportErrorKind::Network => "network",
            TransportErrorKind::InvalidRequest => "invalid_request",
            TransportErrorKind::UnknownSession => "unknown_session",
            TransportErrorKind::ServerError => "server_error",
            TransportErrorKind::Unknown => "unknown",
        }
    }
}
