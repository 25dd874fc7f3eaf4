//! Append-only transcript of an interview session

use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};

/// Content of the synthetic notice appended when a turn cannot reach the
/// service. Shown verbatim to the user.
pub const TRANSPORT_FAILURE_NOTICE: &str = "Error: Could not reach the server.";

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    /// The remote interviewer. The service emits `"ai"` on the wire.
    #[serde(alias = "ai")]
    Agent,
}

/// One utterance in the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub content: String,
    pub sender: Sender,
    /// True only for synthetic client-generated failure notices
    #[serde(default, rename = "isError")]
    pub is_error: bool,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender: Sender::User,
            is_error: false,
        }
    }

    pub fn agent(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            sender: Sender::Agent,
            is_error: false,
        }
    }

    /// Synthetic failure notice. Attributed to the agent so it renders on the
    /// interviewer's side of the conversation; the only constructor that sets
    /// `is_error`.
    pub fn failure_notice() -> Self {
        Self {
            content: TRANSPORT_FAILURE_NOTICE.to_string(),
            sender: Sender::Agent,
            is_error: true,
        }
    }
}

/// Ordered log of messages for one session.
///
/// Entries are identified by position, never by content, so repeated
/// identical messages are distinct. There is no edit or delete operation.
/// Cloning the store clones a handle to the same log; appends are restricted
/// to this crate while any holder may read.
#[derive(Debug, Clone, Default)]
pub struct TranscriptStore {
    entries: Arc<RwLock<Vec<Message>>>,
}

impl TranscriptStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message, returning its index.
    pub(crate) fn append(&self, message: Message) -> usize {
        let mut entries = self.entries.write().unwrap();
        entries.push(message);
        entries.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.read().unwrap().is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Message> {
        self.entries.read().unwrap().get(index).cloned()
    }

    #[must_use]
    pub fn last(&self) -> Option<Message> {
        self.entries.read().unwrap().last().cloned()
    }

    /// Copy of the full log in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Message> {
        self.entries.read().unwrap().clone()
    }
}
