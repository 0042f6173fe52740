//! Roadmap progress reconciliation and toggle state machine
//!
//! Pure functions turn (roadmap definition, stored state) into a renderable
//! tree, and apply toggle intents back onto the state. [`ProgressView`]
//! wraps them with an injected store so every transition follows the same
//! cycle: mutate, persist the full snapshot, rebuild the tree.
//!
//! Cascade rules are asymmetric on purpose: checking a step marks every
//! currently-known subtopic done, unchecking it leaves subtopics alone.
//! Subtopic toggles recompute the parent from the currently-defined
//! subtopic set.

use super::store::{ProgressStore, StoreResult};
use super::{storage_key, ProgressState};
use crate::models::RoadmapStep;
use serde::Serialize;
use std::sync::Arc;

/// A user action against the checklist
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleIntent {
    /// Set a step's checkbox
    Step { step: String, checked: bool },
    /// Set one subtopic's checkbox
    Subtopic {
        step: String,
        subtopic: String,
        checked: bool,
    },
    /// Flip a step's expand/collapse display flag
    Expand { step: String },
}

/// One subtopic row in the rendered tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubtopicNode {
    pub name: String,
    pub done: bool,
}

/// One step row in the rendered tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapNode {
    pub step: String,
    pub checked: bool,
    pub expanded: bool,
    pub subtopics: Vec<SubtopicNode>,
}

/// Completion counter for the progress bar. Approximation metric only,
/// never used for control decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Completion {
    pub done: usize,
    pub total: usize,
    pub percent: u32,
}

/// Apply one toggle intent to the state
pub fn apply_intent(state: &mut ProgressState, roadmap: &[RoadmapStep], intent: &ToggleIntent) {
    match intent {
        ToggleIntent::Step { step, checked } => {
            let subtopics = defined_subtopics(roadmap, step);
            let entry = state.entry(step.clone()).or_default();
            entry.checked = *checked;
            // Checking cascades down; unchecking does not force-undo children
            if *checked {
                for sub in subtopics {
                    entry.sub.insert(sub.clone(), true);
                }
            }
        }
        ToggleIntent::Subtopic {
            step,
            subtopic,
            checked,
        } => {
            let subtopics = defined_subtopics(roadmap, step);
            let entry = state.entry(step.clone()).or_default();
            entry.sub.insert(subtopic.clone(), *checked);
            // Cascade up: the step is done iff every currently-defined
            // subtopic is done
            entry.checked = subtopics
                .iter()
                .all(|s| entry.sub.get(s).copied().unwrap_or(false));
        }
        ToggleIntent::Expand { step } => {
            let entry = state.entry(step.clone()).or_default();
            entry.expanded = !entry.expanded;
        }
    }
}

/// Reconcile the roadmap definition with stored state into a renderable tree
pub fn build_tree(roadmap: &[RoadmapStep], state: &ProgressState) -> Vec<RoadmapNode> {
    roadmap
        .iter()
        .map(|step| {
            let progress = state.get(&step.step);
            RoadmapNode {
                step: step.step.clone(),
                checked: progress.map(|p| p.checked).unwrap_or(false),
                expanded: progress.map(|p| p.expanded).unwrap_or(false),
                subtopics: step
                    .subtopics
                    .iter()
                    .map(|name| SubtopicNode {
                        name: name.clone(),
                        done: progress
                            .and_then(|p| p.sub.get(name).copied())
                            .unwrap_or(false),
                    })
                    .collect(),
            }
        })
        .collect()
}

/// Compute the completion counter. Expanded steps count each rendered
/// subtopic; collapsed steps count the declared subtopic length as total
/// and every true flag in the stored sub map as done (including flags for
/// subtopics no longer defined - kept from the original arithmetic).
pub fn completion(roadmap: &[RoadmapStep], state: &ProgressState) -> Completion {
    let mut total = 0usize;
    let mut done = 0usize;

    for step in roadmap {
        let progress = state.get(&step.step);
        total += step.subtopics.len();

        if progress.map(|p| p.expanded).unwrap_or(false) {
            done += step
                .subtopics
                .iter()
                .filter(|name| {
                    progress
                        .and_then(|p| p.sub.get(*name).copied())
                        .unwrap_or(false)
                })
                .count();
        } else if let Some(progress) = progress {
            done += progress.sub.values().filter(|v| **v).count();
        }
    }

    let percent = if total > 0 {
        ((done as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    Completion {
        done,
        total,
        percent,
    }
}

fn defined_subtopics<'a>(roadmap: &'a [RoadmapStep], step: &str) -> &'a [String] {
    roadmap
        .iter()
        .find(|s| s.step == step)
        .map(|s| s.subtopics.as_slice())
        .unwrap_or(&[])
}

/// Stateful view over one topic's progress: loads the snapshot lazily on
/// construction and persists it after every mutation
pub struct ProgressView {
    store: Arc<dyn ProgressStore>,
    key: String,
    state: ProgressState,
}

impl ProgressView {
    /// Load (or lazily create) the progress for a topic
    pub fn load(store: Arc<dyn ProgressStore>, topic: &str) -> Self {
        let key = storage_key(topic);
        let state = store.get(&key);
        Self { store, key, state }
    }

    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    /// Apply a toggle, persist the full snapshot, and return the rebuilt tree
    pub fn apply(
        &mut self,
        roadmap: &[RoadmapStep],
        intent: &ToggleIntent,
    ) -> StoreResult<Vec<RoadmapNode>> {
        apply_intent(&mut self.state, roadmap, intent);
        self.store.put(&self.key, &self.state)?;
        Ok(build_tree(roadmap, &self.state))
    }

    pub fn render(&self, roadmap: &[RoadmapStep]) -> Vec<RoadmapNode> {
        build_tree(roadmap, &self.state)
    }

    pub fn completion(&self, roadmap: &[RoadmapStep]) -> Completion {
        completion(roadmap, &self.state)
    }
}
