//! Resilient JSON extraction from provider replies
//!
//! The provider wraps model-generated text inside its own JSON envelope,
//! and the model itself only sometimes obeys the JSON-only instruction.
//! Recovery is layered: decode the envelope, pull the message content,
//! try the content as JSON directly, then fall back to the leftmost-`{`
//! through rightmost-`}` span. Anything past that is a classified failure,
//! not a repair attempt.

use crate::error::GenerateError;
use crate::models::{
    ChatPayload, CombinedPayload, Mode, ModeShapedPayload, NotesPayload, QuizPayload,
    ResourcesPayload, RoadmapPayload,
};
use serde_json::Value;

/// Parse model output as JSON, falling back to brace-span extraction when
/// the model wrapped its JSON in prose or markdown fencing
pub fn safe_json_parse(text: &str) -> Option<Value> {
    if let Ok(value) = serde_json::from_str::<Value>(text) {
        return Some(value);
    }

    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    serde_json::from_str::<Value>(&text[start..=end]).ok()
}

/// Recover a mode-shaped payload from the provider's raw response body
pub fn extract_payload(
    mode: Mode,
    qcount: usize,
    limit_arrays: bool,
    body: &str,
) -> Result<ModeShapedPayload, GenerateError> {
    // Step 1: the provider's own envelope must be JSON; nothing is
    // recoverable if it isn't
    let envelope: Value = serde_json::from_str(body).map_err(|_| GenerateError::EnvelopeInvalid {
        raw: body.to_string(),
    })?;

    // Step 2: the generated text lives at choices[0].message.content
    let content = envelope
        .pointer("/choices/0/message/content")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or(GenerateError::NoContent)?;

    // Steps 3+4: direct decode, then brace-span fallback
    let value = safe_json_parse(content).ok_or_else(|| GenerateError::ModelOutputInvalid {
        raw: content.to_string(),
    })?;

    let mut payload =
        decode_payload(mode, value).map_err(|e| {
            log::warn!("Model reply was JSON but not {:?}-shaped: {}", mode, e);
            GenerateError::ModelOutputInvalid {
                raw: content.to_string(),
            }
        })?;

    if limit_arrays {
        truncate_to_count(&mut payload, qcount);
    }

    Ok(payload)
}

/// Decode a JSON value into the shape the requested mode promises
fn decode_payload(mode: Mode, value: Value) -> Result<ModeShapedPayload, serde_json::Error> {
    Ok(match mode {
        Mode::Roadmap => ModeShapedPayload::Roadmap(serde_json::from_value::<RoadmapPayload>(value)?),
        Mode::Notes => ModeShapedPayload::Notes(serde_json::from_value::<NotesPayload>(value)?),
        Mode::Quiz => ModeShapedPayload::Quiz(serde_json::from_value::<QuizPayload>(value)?),
        Mode::Resources => {
            ModeShapedPayload::Resources(serde_json::from_value::<ResourcesPayload>(value)?)
        }
        Mode::Chat => ModeShapedPayload::Chat(serde_json::from_value::<ChatPayload>(value)?),
        Mode::Combined => {
            ModeShapedPayload::Combined(serde_json::from_value::<CombinedPayload>(value)?)
        }
    })
}

/// Truncate count-bearing arrays to at most the requested count. Never pads
/// when the model returned fewer.
fn truncate_to_count(payload: &mut ModeShapedPayload, qcount: usize) {
    match payload {
        ModeShapedPayload::Quiz(p) => p.quiz.truncate(qcount),
        ModeShapedPayload::Resources(p) => p.resources.truncate(qcount),
        ModeShapedPayload::Combined(p) => {
            p.quiz.truncate(qcount);
            p.resources.truncate(qcount);
        }
        ModeShapedPayload::Roadmap(_) | ModeShapedPayload::Notes(_) | ModeShapedPayload::Chat(_) => {
        }
    }
}
