//! HTTP implementation of the interview service API

use super::types::{CandidateProfile, InterviewSummary, TurnReply};
use super::{Transport, TransportError};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// HTTP client for the interview service.
///
/// Implements [`Transport`] for the turn exchange and carries the session
/// creation and summary fetch calls used around the conversation. The client
/// is built without a request timeout: a hung exchange stays pending until
/// the service answers, and the engine keeps the session gated meanwhile.
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Create a session for the given candidate and return its id.
    ///
    /// Required profile fields are checked before any request goes out; a
    /// missing field is reported as an invalid-request error with no HTTP
    /// exchange.
    pub async fn create_session(
        &self,
        profile: &CandidateProfile,
    ) -> Result<String, TransportError> {
        if let Some(field) = profile.missing_required() {
            return Err(TransportError::invalid_request(format!(
                "{} is required",
                field
            )));
        }

        let url = format!("{}/create-session", self.base_url);
        let created: SessionCreated = self
            .request_json(self.client.post(&url).json(profile))
            .await?;
        Ok(created.session_id)
    }

    /// Fetch the evaluation summary for a concluded session.
    pub async fn fetch_summary(
        &self,
        session_id: &str,
    ) -> Result<InterviewSummary, TransportError> {
        let url = format!("{}/summary/{}", self.base_url, session_id);
        self.request_json(self.client.get(&url)).await
    }

    async fn request_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, TransportError> {
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::network(format!("Request timeout: {}", e))
            } else if e.is_connect() {
                TransportError::network(format!("Connection failed: {}", e))
            } else {
                TransportError::unknown(format!("Request failed: {}", e))
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::network(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(classify_status(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            TransportError::unknown(format!("Failed to parse response: {} - body: {}", e, body))
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_turn(
        &self,
        session_id: &str,
        message: &str,
    ) -> Result<TurnReply, TransportError> {
        let url = format!("{}/conversation/{}", self.base_url, session_id);
        self.request_json(self.client.post(&url).json(&TurnRequest { message }))
            .await
    }
}

fn classify_status(status: reqwest::StatusCode, body: &str) -> TransportError {
    let message = body.to_string();
    match status.as_u16() {
        400 => TransportError::invalid_request(format!("Invalid request: {}", message)),
        404 => TransportError::unknown_session(format!("Unknown session: {}", message)),
        500..=599 => TransportError::server_error(format!("Server error: {}", message)),
        _ => TransportError::unknown(format!("HTTP {}: {}", status, message)),
    }
}

// Wire types

#[derive(Debug, Serialize)]
struct TurnRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionCreated {
    session_id: String,
}
