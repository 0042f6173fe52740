//! Studygen - a gateway that turns a free-form topic into structured study
//! material (roadmap, notes, quiz, resources) by prompting an LLM provider
//! and coercing its reply into well-defined JSON, plus hierarchical
//! completion tracking for generated roadmaps.

// Module declarations
pub mod config;
pub mod error;
pub mod extractor;
pub mod generation;
pub mod models;
pub mod progress;
pub mod prompt;
pub mod provider;

// Server module (HTTP API)
pub mod server;

// Re-export the core types at the crate root
pub use error::GenerateError;
pub use generation::GenerationService;
pub use models::{GenerationRequest, GenerationResult, Mode, ModeShapedPayload};
