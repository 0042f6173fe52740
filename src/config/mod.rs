//! Provider configuration
//!
//! All tuning knobs for the LLM provider call live here. Values come from
//! environment variables with sensible defaults; the API token additionally
//! falls back to the secrets file (see [`secrets`]).

pub mod secrets;

pub use secrets::SecretsConfig;

use serde::{Deserialize, Serialize};

/// Default chat-completions endpoint (Groq's OpenAI-compatible API)
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "llama-3.1-8b-instant";

/// Configuration for the provider call, passed through unmodified
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Chat-completions endpoint URL
    pub endpoint: String,
    /// Bearer credential; None means generation only works in mock mode
    pub api_token: Option<String>,
    /// Model identifier sent to the provider
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Max output size in tokens
    pub max_tokens: u32,
    /// Whether quiz/resources arrays are truncated to the requested count
    pub limit_arrays: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_token: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            max_tokens: 800,
            limit_arrays: true,
        }
    }
}

impl ProviderConfig {
    /// Build config from environment variables, falling back to the secrets
    /// file for the API token
    pub fn from_env() -> Self {
        let api_token = std::env::var("STUDYGEN_API_TOKEN")
            .or_else(|_| std::env::var("GROQ_API_KEY"))
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| match SecretsConfig::load() {
                Ok(secrets) => secrets.api_token,
                Err(e) => {
                    log::warn!("Failed to load secrets file: {}", e);
                    None
                }
            });

        Self {
            endpoint: std::env::var("STUDYGEN_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            api_token,
            model: std::env::var("STUDYGEN_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            temperature: 0.2,
            max_tokens: 800,
            limit_arrays: true,
        }
    }

    /// Whether a bearer credential is available for real provider calls
    pub fn has_credential(&self) -> bool {
        self.api_token.as_deref().is_some_and(|t| !t.is_empty())
    }
}
