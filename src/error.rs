//! Failure taxonomy for the generation pipeline
//!
//! The provider is treated as best-effort: none of these are retried here,
//! recovery decisions belong to the caller.

use axum::http::StatusCode;
use thiserror::Error;

/// Classified failures from the prompt -> provider -> extraction pipeline
#[derive(Debug, Clone, Error)]
pub enum GenerateError {
    /// No API token configured and mock mode not requested
    #[error("API token not configured")]
    MissingCredential,

    /// Network failure or non-success provider status
    #[error("Provider error")]
    Transport { raw: String },

    /// The provider's own response body was not valid JSON
    #[error("Provider returned non-JSON response")]
    EnvelopeInvalid { raw: String },

    /// The envelope decoded but carried no message content
    #[error("No content returned from provider")]
    NoContent,

    /// The model's text, even after brace extraction, was not usable JSON
    #[error("AI returned invalid JSON")]
    ModelOutputInvalid { raw: String },
}

impl GenerateError {
    /// HTTP status this failure surfaces as
    pub fn status(&self) -> StatusCode {
        match self {
            GenerateError::Transport { .. } | GenerateError::EnvelopeInvalid { .. } => {
                StatusCode::BAD_GATEWAY
            }
            GenerateError::MissingCredential
            | GenerateError::NoContent
            | GenerateError::ModelOutputInvalid { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Raw diagnostic text carried by this failure, if any
    pub fn raw(&self) -> Option<&str> {
        match self {
            GenerateError::Transport { raw }
            | GenerateError::EnvelopeInvalid { raw }
            | GenerateError::ModelOutputInvalid { raw } => Some(raw),
            GenerateError::MissingCredential | GenerateError::NoContent => None,
        }
    }
}
