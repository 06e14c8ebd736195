//! AI side-panel completion client.
//!
//! Thin HTTP wrapper for a `generateContent`-style endpoint. Pure parsing in
//! [`parse_reply`] for testability. Any failure — transport, non-200 status,
//! malformed body, empty candidates — is reported to the panel as a fixed
//! fallback message rather than an error; the panel never crashes the frame
//! loop and never mutates drawing state.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-pro";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Shown in the panel whenever a completion fails for any reason.
pub const FALLBACK_REPLY: &str = "Sorry, I encountered an error. Please try again.";

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by chat client operations.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request failed before a response arrived.
    #[error("chat request failed: {0}")]
    Request(String),

    /// The service returned a non-success HTTP status.
    #[error("chat response error: status {status}")]
    Response { status: u16, body: String },

    /// The response body could not be deserialized.
    #[error("chat response parse failed: {0}")]
    Parse(String),

    /// The response carried no usable candidate text.
    #[error("chat response contained no candidates")]
    EmptyReply,

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// CONFIG
// =============================================================================

/// Chat client configuration, resolved from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl ChatConfig {
    /// Build chat config from environment variables.
    ///
    /// Required:
    /// - `CHAT_API_KEY_ENV` (names the env var containing the key)
    ///
    /// Optional:
    /// - `CHAT_BASE_URL`: service base URL
    /// - `CHAT_MODEL`: model name
    /// - `CHAT_REQUEST_TIMEOUT_SECS` / `CHAT_CONNECT_TIMEOUT_SECS`
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::MissingApiKey`] when the key indirection or the
    /// key itself is absent.
    pub fn from_env() -> Result<Self, ChatError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve config through an arbitrary variable lookup (test seam).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ChatError> {
        let key_var = lookup("CHAT_API_KEY_ENV").ok_or(ChatError::MissingApiKey { var: "CHAT_API_KEY_ENV".into() })?;
        let api_key = lookup(&key_var).ok_or(ChatError::MissingApiKey { var: key_var.clone() })?;

        let base_url = lookup("CHAT_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let model = lookup("CHAT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Self {
            api_key,
            base_url,
            model,
            request_timeout_secs: lookup_parse(&lookup, "CHAT_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout_secs: lookup_parse(&lookup, "CHAT_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        })
    }
}

fn lookup_parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    lookup(key).and_then(|v| v.parse::<T>().ok()).unwrap_or(default)
}

// =============================================================================
// TRAIT + CLIENT
// =============================================================================

/// Completion seam for the side panel. Enables mocking in tests.
#[async_trait::async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Send the user's message and return the assistant's reply text.
    ///
    /// # Errors
    ///
    /// Returns a [`ChatError`] if the request fails or the response is
    /// malformed.
    async fn complete(&self, message: &str) -> Result<String, ChatError>;
}

/// Concrete HTTP chat client.
pub struct ChatClient {
    http: reqwest::Client,
    config: ChatConfig,
}

impl ChatClient {
    /// Build a client from resolved config.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::HttpClientBuild`] if the HTTP client fails.
    pub fn new(config: ChatConfig) -> Result<Self, ChatError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| ChatError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Build a client straight from environment variables.
    ///
    /// # Errors
    ///
    /// Propagates config and HTTP client construction failures.
    pub fn from_env() -> Result<Self, ChatError> {
        Self::new(ChatConfig::from_env()?)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        )
    }

    async fn send(&self, message: &str) -> Result<String, ChatError> {
        let body = GenerateRequest { contents: vec![RequestContent { parts: vec![Part { text: build_prompt(message) }] }] };

        let response = self
            .http
            .post(self.endpoint())
            .json(&body)
            .send()
            .await
            .map_err(|e| ChatError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response.text().await.map_err(|e| ChatError::Request(e.to_string()))?;

        if status != 200 {
            return Err(ChatError::Response { status, body: text });
        }

        parse_reply(&text)
    }
}

#[async_trait::async_trait]
impl ChatCompletion for ChatClient {
    async fn complete(&self, message: &str) -> Result<String, ChatError> {
        self.send(message).await
    }
}

/// Run a completion and fold any failure into the fixed fallback reply.
pub async fn reply_or_fallback(client: &dyn ChatCompletion, message: &str) -> String {
    match client.complete(message).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::warn!(error = %e, "chat completion failed");
            FALLBACK_REPLY.to_string()
        }
    }
}

/// Wrap the user's message in the drawing-assistant preamble.
#[must_use]
pub fn build_prompt(message: &str) -> String {
    format!(
        "You are an AI assistant for an Air Canvas drawing application. \
         The user said: \"{message}\". The user is drawing on a canvas using \
         hand gestures. Provide helpful, creative, and encouraging responses \
         about their drawing experience. Keep responses concise and friendly."
    )
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<RequestContent>,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

// =============================================================================
// PARSING
// =============================================================================

/// Extract the first candidate's first text part from a response body.
fn parse_reply(json: &str) -> Result<String, ChatError> {
    let response: GenerateResponse = serde_json::from_str(json).map_err(|e| ChatError::Parse(e.to_string()))?;
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or(ChatError::EmptyReply)
}
