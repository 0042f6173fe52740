//! Hierarchical roadmap progress
//!
//! Per-topic checklist state: each roadmap step carries a checked flag, a
//! display-only expanded flag, and a map of per-subtopic booleans. State is
//! persisted as a full snapshot keyed by a normalized topic name and
//! reconciled against the roadmap definition at render time.

pub mod store;
pub mod view;

pub use store::{FileProgressStore, MemoryProgressStore, ProgressStore};
pub use view::{Completion, ProgressView, RoadmapNode, SubtopicNode, ToggleIntent};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Storage key prefix shared by every persisted topic
pub const PROGRESS_KEY_PREFIX: &str = "roadmap-progress-";

/// Progress for one roadmap step
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepProgress {
    /// Whether the step as a whole is marked done
    #[serde(default)]
    pub checked: bool,
    /// Display-only flag: whether the step's subtopic list is open
    #[serde(default)]
    pub expanded: bool,
    /// Per-subtopic done flags, keyed by subtopic name
    #[serde(default)]
    pub sub: HashMap<String, bool>,
}

/// Full per-topic progress snapshot, keyed by step name
pub type ProgressState = HashMap<String, StepProgress>;

/// Normalize a topic into its storage key suffix: lower-cased, whitespace
/// runs collapsed to single hyphens. Leading/trailing whitespace is dropped
/// rather than kept as boundary hyphens, so `"  X "` keys as `"x"`.
pub fn topic_key(topic: &str) -> String {
    topic
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Full storage key for a topic
pub fn storage_key(topic: &str) -> String {
    format!("{}{}", PROGRESS_KEY_PREFIX, topic_key(topic))
}
