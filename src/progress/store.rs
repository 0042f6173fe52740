//! Durable progress persistence
//!
//! One entry per topic key, whole-snapshot read-modify-write. Reads never
//! fail: a missing or corrupt entry is the empty state, since progress is
//! best-effort convenience data. Writes overwrite the prior value
//! atomically (temp file + rename).

use super::ProgressState;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, String>;

/// Key-value persistence for per-topic progress snapshots
pub trait ProgressStore: Send + Sync {
    /// Load the snapshot for a key. Absent or unreadable entries yield the
    /// empty state.
    fn get(&self, key: &str) -> ProgressState;

    /// Durably persist the full snapshot, replacing any prior value
    fn put(&self, key: &str, state: &ProgressState) -> StoreResult<()>;
}

/// File-backed store: one JSON file per key under a progress directory
pub struct FileProgressStore {
    dir: PathBuf,
}

impl FileProgressStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl ProgressStore for FileProgressStore {
    fn get(&self, key: &str) -> ProgressState {
        let path = self.entry_path(key);
        if !path.exists() {
            return ProgressState::new();
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Failed to read progress file {:?}: {}", path, e);
                return ProgressState::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(state) => state,
            Err(e) => {
                log::warn!(
                    "Corrupt progress file {:?}, treating as empty: {}",
                    path,
                    e
                );
                ProgressState::new()
            }
        }
    }

    fn put(&self, key: &str, state: &ProgressState) -> StoreResult<()> {
        let content = serde_json::to_string_pretty(state)
            .map_err(|e| format!("Failed to serialize progress: {}", e))?;
        atomic_write(&self.entry_path(key), &content)
    }
}

/// Ensure a directory exists, creating it if necessary
fn ensure_dir(path: &Path) -> StoreResult<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| format!("Failed to create directory {:?}: {}", path, e))?;
    }
    Ok(())
}

/// Write content to a file atomically (temp file + rename)
fn atomic_write(path: &Path, content: &str) -> StoreResult<()> {
    let temp_path = path.with_extension("tmp");

    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }

    fs::write(&temp_path, content)
        .map_err(|e| format!("Failed to write temp file {:?}: {}", temp_path, e))?;

    fs::rename(&temp_path, path)
        .map_err(|e| format!("Failed to rename {:?} to {:?}: {}", temp_path, path, e))?;

    Ok(())
}

/// In-memory store for tests and embedded use
#[derive(Default)]
pub struct MemoryProgressStore {
    entries: Mutex<HashMap<String, ProgressState>>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryProgressStore {
    fn get(&self, key: &str) -> ProgressState {
        self.entries
            .lock()
            .map(|entries| entries.get(key).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    fn put(&self, key: &str, state: &ProgressState) -> StoreResult<()> {
        self.entries
            .lock()
            .map_err(|e| format!("Store lock poisoned: {}", e))?
            .insert(key.to_string(), state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::StepProgress;
    use tempfile::TempDir;

    fn sample_state() -> ProgressState {
        let mut state = ProgressState::new();
        state.insert(
            "Introduction".to_string(),
            StepProgress {
                checked: true,
                expanded: true,
                sub: HashMap::from([
                    ("Overview".to_string(), true),
                    ("Importance".to_string(), true),
                ]),
            },
        );
        state
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = FileProgressStore::new(dir.path());

        let state = sample_state();
        store.put("roadmap-progress-rust", &state).unwrap();

        let loaded = store.get("roadmap-progress-rust");
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_file_store_missing_key_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileProgressStore::new(dir.path());
        assert!(store.get("roadmap-progress-nothing").is_empty());
    }

    #[test]
    fn test_file_store_corrupt_entry_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("roadmap-progress-bad.json");
        fs::write(&path, "{ not valid json").unwrap();

        let store = FileProgressStore::new(dir.path());
        assert!(store.get("roadmap-progress-bad").is_empty());
    }

    #[test]
    fn test_file_store_overwrites_prior_value() {
        let dir = TempDir::new().unwrap();
        let store = FileProgressStore::new(dir.path());

        store.put("roadmap-progress-rust", &sample_state()).unwrap();
        let empty = ProgressState::new();
        store.put("roadmap-progress-rust", &empty).unwrap();

        assert!(store.get("roadmap-progress-rust").is_empty());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryProgressStore::new();
        let state = sample_state();

        store.put("roadmap-progress-rust", &state).unwrap();
        assert_eq!(store.get("roadmap-progress-rust"), state);
        assert!(store.get("roadmap-progress-other").is_empty());
    }
}
