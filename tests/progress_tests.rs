// Integration tests for roadmap progress: cascade rules plus durable
// persistence through the file-backed store

#[cfg(test)]
mod progress_integration_tests {
    use std::sync::Arc;
    use studygen_lib::models::RoadmapStep;
    use studygen_lib::progress::{
        storage_key, FileProgressStore, ProgressStore, ProgressView, ToggleIntent,
    };
    use tempfile::TempDir;

    fn roadmap() -> Vec<RoadmapStep> {
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

    #[test]
    fn test_progress_survives_reload_from_disk() {
        let dir = TempDir::new().unwrap();
        let roadmap = roadmap();

        {
            let store = Arc::new(FileProgressStore::new(dir.path()));
            let mut view = ProgressView::load(store, "Graph Theory");
            view.apply(
                &roadmap,
                &ToggleIntent::Step {
                    step: "Introduction".to_string(),
                    checked: true,
                },
            )
            .unwrap();
            view.apply(
                &roadmap,
                &ToggleIntent::Expand {
                    step: "Core Concepts".to_string(),
                },
            )
            .unwrap();
        }

        // Fresh store + view, same directory: the next session sees it all
        let store = Arc::new(FileProgressStore::new(dir.path()));
        let view = ProgressView::load(store, "Graph Theory");
        let tree = view.render(&roadmap);

        assert!(tree[0].checked);
        assert!(tree[0].subtopics.iter().all(|s| s.done));
        assert!(tree[1].expanded);
        assert!(!tree[1].checked);
    }

    #[test]
    fn test_cascade_sequence_from_the_contract() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(FileProgressStore::new(dir.path()));
        let roadmap = vec![RoadmapStep {
            step: "Step".to_string(),
            subtopics: vec!["A".to_string(), "B".to_string()],
        }];
        let mut view = ProgressView::load(store, "Topic");

        // Checking the step marks A and B
        view.apply(
            &roadmap,
            &ToggleIntent::Step {
                step: "Step".to_string(),
                checked: true,
            },
        )
        .unwrap();
        let state = view.state().get("Step").unwrap().clone();
        assert_eq!(state.sub.get("A"), Some(&true));
        assert_eq!(state.sub.get("B"), Some(&true));

        // Unchecking A unchecks the step, B stays true
        view.apply(
            &roadmap,
            &ToggleIntent::Subtopic {
                step: "Step".to_string(),
                subtopic: "A".to_string(),
                checked: false,
            },
        )
        .unwrap();
        let state = view.state().get("Step").unwrap().clone();
        assert!(!state.checked);
        assert_eq!(state.sub.get("B"), Some(&true));

        // Re-checking A with B still true re-checks the step
        let tree = view
            .apply(
                &roadmap,
                &ToggleIntent::Subtopic {
                    step: "Step".to_string(),
                    subtopic: "A".to_string(),
                    checked: true,
                },
            )
            .unwrap();
        assert!(tree[0].checked);
    }

    #[test]
    fn test_distinct_topics_are_isolated() {
        let dir = TempDir::new().unwrap();
        let store: Arc<dyn ProgressStore> = Arc::new(FileProgressStore::new(dir.path()));
        let roadmap = roadmap();

        let mut rust_view = ProgressView::load(store.clone(), "Rust");
        rust_view
            .apply(
                &roadmap,
                &ToggleIntent::Step {
                    step: "Introduction".to_string(),
                    checked: true,
                },
            )
            .unwrap();

        let go_view = ProgressView::load(store.clone(), "Go");
        assert!(go_view.state().is_empty());

        // Keys are derived from normalized topics
        assert_eq!(storage_key("Rust"), "roadmap-progress-rust");
        assert!(!store.get("roadmap-progress-rust").is_empty());
        assert!(store.get("roadmap-progress-go").is_empty());
    }
}
