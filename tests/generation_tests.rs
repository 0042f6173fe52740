// Integration tests for the generation pipeline
// These exercise the public library API the way the HTTP handler does

#[cfg(test)]
mod generation_integration_tests {
    use studygen_lib::config::ProviderConfig;
    use studygen_lib::extractor::extract_payload;
    use studygen_lib::generation::GenerationService;
    use studygen_lib::models::{GenerationRequest, Mode, ModeShapedPayload};
    use studygen_lib::prompt::build_prompt;
    use studygen_lib::GenerateError;

    fn offline_service() -> GenerationService {
        GenerationService::new(ProviderConfig {
            api_token: None,
            ..Default::default()
        })
    }

    fn envelope_with(content: &str) -> String {
        serde_json::to_string(&serde_json::json!({
            "choices": [{ "message": { "content": content } }]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_mock_request_succeeds_without_network() {
        let service = offline_service();
        let request = GenerationRequest {
            topic: "Quantum Computing".to_string(),
            mode: Mode::Roadmap,
            mock: true,
            ..Default::default()
        };

        let result = service.generate(&request).await.unwrap();
        assert!(result.ok);
        assert!(result.mock);
        assert!(result.data.is_some());
        assert!(result.error.is_none());
    }

    #[tokio::test]
    async fn test_missing_credential_fails_without_network() {
        let service = offline_service();
        let request = GenerationRequest::default();

        let err = service.generate(&request).await.unwrap_err();
        assert!(matches!(err, GenerateError::MissingCredential));
        assert_eq!(
            err.status(),
            axum::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_full_recovery_pipeline_over_real_looking_reply() {
        // A typical deviation: the model obeys the shape but wraps it in
        // prose and a code fence
        let content = "Sure, here is your roadmap:\n```json\n{\"roadmap\":[{\"step\":\"Intro\",\"subtopics\":[\"What\",\"Why\"]}]}\n```\nGood luck!";
        let body = envelope_with(content);

        let payload = extract_payload(Mode::Roadmap, 5, true, &body).unwrap();
        let ModeShapedPayload::Roadmap(roadmap) = payload else {
            panic!("expected roadmap payload");
        };
        assert_eq!(roadmap.roadmap.len(), 1);
        assert_eq!(roadmap.roadmap[0].step, "Intro");
        assert_eq!(roadmap.roadmap[0].subtopics, vec!["What", "Why"]);
    }

    #[test]
    fn test_failure_taxonomy_end_to_end() {
        let envelope_invalid = extract_payload(Mode::Notes, 5, true, "<html>502</html>");
        assert!(matches!(
            envelope_invalid.unwrap_err(),
            GenerateError::EnvelopeInvalid { .. }
        ));

        let no_content = extract_payload(Mode::Notes, 5, true, r#"{"choices":[]}"#);
        assert!(matches!(no_content.unwrap_err(), GenerateError::NoContent));

        let model_invalid =
            extract_payload(Mode::Notes, 5, true, &envelope_with("no json hidden here"));
        assert!(matches!(
            model_invalid.unwrap_err(),
            GenerateError::ModelOutputInvalid { .. }
        ));
    }

    #[test]
    fn test_prompt_contract_for_every_mode() {
        for mode in [
            Mode::Roadmap,
            Mode::Notes,
            Mode::Quiz,
            Mode::Resources,
            Mode::Chat,
            Mode::Combined,
        ] {
            let prompt = build_prompt(mode, "Topology", 4, Some("hi"));
            assert!(prompt.contains("Topology"));
            assert!(prompt.contains("JSON only"));
        }
    }

    #[test]
    fn test_request_parses_from_handler_style_body() {
        let body = r#"{"topic":"Compilers","mode":"quiz","qcount":3,"mock":true}"#;
        let request: GenerationRequest = serde_json::from_str(body).unwrap();
        assert_eq!(request.topic, "Compilers");
        assert_eq!(request.mode, Mode::Quiz);
        assert_eq!(request.qcount, 3);
        assert!(request.mock);
    }
}
