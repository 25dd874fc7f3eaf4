//! Domain types for the interview service API

use crate::transcript::{Message, Sender};
use serde::{Deserialize, Serialize};

/// The interviewer's reply to one conversation turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TurnReply {
    pub content: String,
    /// `"ai"` on the wire; deserializes to [`Sender::Agent`]
    pub sender: Sender,
    pub is_complete: bool,
}

impl TurnReply {
    /// Transcript entry for this reply. Failure notices never come from the
    /// wire, so `is_error` is always false here.
    pub fn into_message(self) -> Message {
        Message {
            content: self.content,
            sender: self.sender,
            is_error: false,
        }
    }
}

/// Candidate profile posted at session creation.
///
/// `contact` may be empty; the other fields are required and checked before
/// any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateProfile {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub contact: String,
    pub role: String,
    pub job_description: String,
}

impl CandidateProfile {
    /// Name of the first required field that is empty after trimming, if any.
    pub fn missing_required(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("role", &self.role),
            ("jobDescription", &self.job_description),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

/// Evaluation produced by the service once the interview concludes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSummary {
    pub name: String,
    pub role: String,
    pub summary: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    pub recommendation: String,
}
