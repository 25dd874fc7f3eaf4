//! Client configuration

/// Base URL used when `GREENROOM_API` is not set
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Seed prompt used when `GREENROOM_OPENING_PROMPT` is not set.
///
/// The service treats the first conversation turn as the cue to introduce
/// itself; the seed text itself is never shown to the candidate.
pub const DEFAULT_OPENING_PROMPT: &str = "hi";

/// Where the client points and how the opening turn is seeded.
///
/// Everything comes from the environment with workable defaults; there is no
/// config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the interview service
    pub base_url: String,
    /// Outbound text for the opening turn
    pub opening_prompt: String,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("GREENROOM_API")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            opening_prompt: std::env::var("GREENROOM_OPENING_PROMPT")
                .unwrap_or_else(|_| DEFAULT_OPENING_PROMPT.to_string()),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            opening_prompt: DEFAULT_OPENING_PROMPT.to_string(),
        }
    }
}
