//! Generation orchestration
//!
//! Ties prompt construction, the provider call, and extraction together
//! behind a single entry point. Holds no per-request state: each call is an
//! independent request/response cycle.

use crate::config::ProviderConfig;
use crate::error::GenerateError;
use crate::extractor::extract_payload;
use crate::models::{
    ChatPayload, CombinedPayload, GenerationRequest, GenerationResult, Mode, ModeShapedPayload,
    NotesPayload, QuizItem, QuizPayload, Resource, ResourceType, ResourcesPayload, RoadmapPayload,
    RoadmapStep,
};
use crate::prompt::build_prompt;
use crate::provider::ProviderClient;

/// Orchestrates one generation request end to end
#[derive(Debug, Clone)]
pub struct GenerationService {
    config: ProviderConfig,
    client: ProviderClient,
}

impl GenerationService {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            client: ProviderClient::new(),
        }
    }

    /// Run one generation request. Mock requests short-circuit before any
    /// network activity; a missing credential is an error, never an implicit
    /// fallback to mock content.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerateError> {
        if request.mock {
            let payload = mock_payload(
                request.mode,
                &request.topic,
                request.message.as_deref(),
            );
            return Ok(GenerationResult::success(payload, true));
        }

        if !self.config.has_credential() {
            return Err(GenerateError::MissingCredential);
        }

        let prompt = build_prompt(
            request.mode,
            &request.topic,
            request.qcount,
            request.message.as_deref(),
        );

        let body = self.client.send(&prompt, &self.config).await?;

        let payload = extract_payload(
            request.mode,
            request.qcount,
            self.config.limit_arrays,
            &body,
        )?;

        log::debug!(
            "Generated {:?} payload for topic '{}'",
            request.mode,
            request.topic
        );

        Ok(GenerationResult::success(payload, false))
    }
}

/// Canned deterministic payload shaped exactly like a real success for the
/// given mode, so downstream consumers can be exercised without a provider
pub fn mock_payload(mode: Mode, topic: &str, message: Option<&str>) -> ModeShapedPayload {
    match mode {
        Mode::Roadmap => ModeShapedPayload::Roadmap(RoadmapPayload {
            roadmap: mock_roadmap(),
        }),
        Mode::Notes => ModeShapedPayload::Notes(NotesPayload {
            notes: format!("These are mock notes for {}", topic),
        }),
        Mode::Quiz => ModeShapedPayload::Quiz(QuizPayload {
            quiz: mock_quiz(topic),
        }),
        Mode::Resources => ModeShapedPayload::Resources(ResourcesPayload {
            resources: mock_resources(topic),
        }),
        Mode::Chat => {
            let message = message.unwrap_or("your question");
            ModeShapedPayload::Chat(ChatPayload {
                reply: format!("Mock reply about {}: {}", topic, message),
            })
        }
        Mode::Combined => ModeShapedPayload::Combined(CombinedPayload {
            roadmap: mock_roadmap(),
            notes: format!("These are mock notes for {}", topic),
            quiz: mock_quiz(topic),
            resources: mock_resources(topic),
        }),
    }
}

fn mock_roadmap() -> Vec<RoadmapStep> {
    vec![
        RoadmapStep {
            step: "Introduction".to_string(),
            subtopics: vec!["Overview".to_string(), "Importance".to_string()],
        },
        RoadmapStep {
            step: "Core Concepts".to_string(),
            subtopics: vec!["Concept 1".to_string(), "Concept 2".to_string()],
        },
    ]
}

fn mock_quiz(topic: &str) -> Vec<QuizItem> {
    vec![QuizItem {
        q: format!("What is {}?", topic),
        options: vec![
            "Option A".to_string(),
            "Option B".to_string(),
            "Option C".to_string(),
            "Option D".to_string(),
        ],
        answer: 0,
        explanation: None,
    }]
}

fn mock_resources(topic: &str) -> Vec<Resource> {
    vec![Resource {
        title: format!("Introduction to {}", topic),
        url: "https://example.com/intro".to_string(),
        resource_type: ResourceType::Article,
        short_desc: format!("A beginner-friendly overview of {}", topic),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_without_credential() -> GenerationService {
        GenerationService::new(ProviderConfig {
            api_token: None,
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn test_mock_notes_interpolates_topic() {
        let service = service_without_credential();
        let request = GenerationRequest {
            topic: "X".to_string(),
            mode: Mode::Notes,
            mock: true,
            ..Default::default()
        };

        // No credential configured, so any network attempt would fail anyway
        let result = service.generate(&request).await.unwrap();
        assert!(result.ok);
        assert!(result.mock);
        let Some(ModeShapedPayload::Notes(notes)) = result.data else {
            panic!("expected notes payload");
        };
        assert!(notes.notes.contains("X"));
    }

    #[tokio::test]
    async fn test_missing_credential_is_an_error() {
        let service = service_without_credential();
        let request = GenerationRequest {
            mock: false,
            ..Default::default()
        };

        let err = service.generate(&request).await.unwrap_err();
        assert!(matches!(err, GenerateError::MissingCredential));
    }

    #[tokio::test]
    async fn test_mock_is_deterministic() {
        let service = service_without_credential();
        let request = GenerationRequest {
            topic: "Rust".to_string(),
            mode: Mode::Quiz,
            mock: true,
            ..Default::default()
        };

        let a = service.generate(&request).await.unwrap();
        let b = service.generate(&request).await.unwrap();
        assert_eq!(a.data, b.data);
    }

    #[test]
    fn test_mock_combined_carries_every_key() {
        let payload = mock_payload(Mode::Combined, "Databases", None);
        let ModeShapedPayload::Combined(combined) = payload else {
            panic!("expected combined payload");
        };
        assert!(!combined.roadmap.is_empty());
        assert!(combined.notes.contains("Databases"));
        assert!(!combined.quiz.is_empty());
        assert!(!combined.resources.is_empty());
    }

    #[test]
    fn test_mock_chat_uses_message() {
        let payload = mock_payload(Mode::Chat, "Rust", Some("what is a trait?"));
        let ModeShapedPayload::Chat(chat) = payload else {
            panic!("expected chat payload");
        };
        assert!(chat.reply.contains("what is a trait?"));
    }
}
