//! Wire types for generation requests, results, and mode-shaped payloads

use serde::{Deserialize, Serialize};

/// Requested content category, governing prompt shape and output schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Roadmap,
    Notes,
    Quiz,
    Resources,
    Chat,
    /// Catch-all shape with every top-level key; unknown mode strings land
    /// here so decoding stays uniform
    #[serde(other)]
    Combined,
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Roadmap
    }
}

/// Request body for POST /api/generate - all fields optional with defaults
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationRequest {
    #[serde(default = "default_topic")]
    pub topic: String,
    #[serde(default)]
    pub mode: Mode,
    /// Requested item count for quiz/resources modes
    #[serde(default = "default_qcount")]
    pub qcount: usize,
    #[serde(default)]
    pub mock: bool,
    /// User message for chat mode
    #[serde(default)]
    pub message: Option<String>,
}

fn default_topic() -> String {
    "General Topic".to_string()
}

fn default_qcount() -> usize {
    5
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            topic: default_topic(),
            mode: Mode::default(),
            qcount: default_qcount(),
            mock: false,
            message: None,
        }
    }
}

/// Uniform result envelope returned for every generation call
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub ok: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub mock: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ModeShapedPayload>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Raw provider/model text, present on failure for diagnostics only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

impl GenerationResult {
    pub fn success(data: ModeShapedPayload, mock: bool) -> Self {
        Self {
            ok: true,
            mock,
            data: Some(data),
            error: None,
            raw: None,
        }
    }

    pub fn failure(error: String, raw: Option<String>) -> Self {
        Self {
            ok: false,
            mock: false,
            data: None,
            error: Some(error),
            raw,
        }
    }
}

/// One step in a generated learning roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapStep {
    /// Step title, unique within a roadmap and used as the progress lookup key
    pub step: String,
    #[serde(default)]
    pub subtopics: Vec<String>,
}

/// A multiple-choice quiz question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizItem {
    pub q: String,
    pub options: Vec<String>,
    /// Index into options
    pub answer: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Category of a recommended learning resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Article,
    Video,
    Book,
    Course,
}

/// A recommended learning resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub short_desc: String,
}

/// Payload shapes, one per mode, serialized untagged so the wire shape is
/// exactly the object the prompt contract promises the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModeShapedPayload {
    Roadmap(RoadmapPayload),
    Notes(NotesPayload),
    Quiz(QuizPayload),
    Resources(ResourcesPayload),
    Chat(ChatPayload),
    Combined(CombinedPayload),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapPayload {
    pub roadmap: Vec<RoadmapStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotesPayload {
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizPayload {
    pub quiz: Vec<QuizItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourcesPayload {
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub reply: String,
}

/// Every top-level key at once; fields default so a partial model reply
/// still decodes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CombinedPayload {
    #[serde(default)]
    pub roadmap: Vec<RoadmapStep>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub quiz: Vec<QuizItem>,
    #[serde(default)]
    pub resources: Vec<Resource>,
}
