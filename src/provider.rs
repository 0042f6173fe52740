//! LLM provider transport
//!
//! Sends one prompt to a chat-completions endpoint and hands back the raw
//! response body. No retries, no content inspection: the body is read as
//! plain text (the provider is never trusted to set a JSON content-type)
//! and decoding the envelope is the extractor's job.

use crate::config::ProviderConfig;
use crate::error::GenerateError;
use serde_json::json;

/// Thin client around the provider's chat-completions endpoint
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: reqwest::Client,
}

impl ProviderClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Send a prompt as a single user-role message. Returns the raw body on
    /// any 2xx status; a non-success status is a transport failure carrying
    /// the body for diagnostics.
    pub async fn send(&self, prompt: &str, config: &ProviderConfig) -> Result<String, GenerateError> {
        let token = config.api_token.as_deref().unwrap_or_default();

        let body = json!({
            "model": config.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": config.temperature,
            "max_tokens": config.max_tokens,
        });

        let response = self
            .client
            .post(&config.endpoint)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerateError::Transport { raw: e.to_string() })?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| GenerateError::Transport { raw: e.to_string() })?;

        if !status.is_success() {
            log::warn!("Provider returned status {}", status);
            return Err(GenerateError::Transport { raw });
        }

        Ok(raw)
    }
}

impl Default for ProviderClient {
    fn default() -> Self {
        Self::new()
    }
}
