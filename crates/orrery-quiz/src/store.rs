//! Persistence for the identification success counter.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{QuizError, QuizResult};

/// Key the identification success counter is stored under.
pub const SUCCESS_COUNT_KEY: &str = "objectIdentificationSuccessCount";

/// A tiny key → counter store that outlives the session.
pub trait ProgressStore {
    /// Read a counter. `Ok(None)` when it was never written.
    fn read(&self, key: &str) -> QuizResult<Option<u64>>;

    /// Overwrite a counter.
    fn write(&mut self, key: &str, value: u64) -> QuizResult<()>;
}

/// Store that lives only as long as the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, u64>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one value.
    pub fn with_value(key: impl Into<String>, value: u64) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value);
        store
    }
}

impl ProgressStore for MemoryStore {
    fn read(&self, key: &str) -> QuizResult<Option<u64>> {
        Ok(self.values.get(key).copied())
    }

    fn write(&mut self, key: &str, value: u64) -> QuizResult<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// On-disk layout of a [`JsonFileStore`].
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreFile {
    #[serde(default)]
    values: BTreeMap<String, u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// Store backed by a small JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<user data dir>/orrery/progress.json`, when the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("orrery").join("progress.json"))
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> QuizResult<StoreFile> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(StoreFile::default()),
            Err(e) => return Err(QuizError::Store(format!("{}: {e}", self.path.display()))),
        };
        serde_json::from_str(&text)
            .map_err(|e| QuizError::Store(format!("{}: {e}", self.path.display())))
    }
}

impl ProgressStore for JsonFileStore {
    fn read(&self, key: &str) -> QuizResult<Option<u64>> {
        Ok(self.load()?.values.get(key).copied())
    }

    fn write(&mut self, key: &str, value: u64) -> QuizResult<()> {
        // Unreadable files get overwritten.
        let mut file = self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "discarding unreadable progress file");
            StoreFile::default()
        });
        file.values.insert(key.to_string(), value);
        file.updated_at = Some(Utc::now());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| QuizError::Store(format!("{}: {e}", parent.display())))?;
            }
        }
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| QuizError::Store(e.to_string()))?;
        std::fs::write(&self.path, json)
            .map_err(|e| QuizError::Store(format!("{}: {e}", self.path.display())))
    }
}

/// The running success count, mirrored into a store on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessCounter {
    key: String,
    count: u64,
}

impl SuccessCounter {
    /// Read the starting value. Missing or unreadable values start at 0.
    pub fn load(store: &dyn ProgressStore, key: impl Into<String>) -> Self {
        let key = key.into();
        let count = match store.read(&key) {
            Ok(value) => value.unwrap_or(0),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    key = %key,
                    "could not read success count, starting at 0"
                );
                0
            }
        };
        Self { key, count }
    }

    /// Current value.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Add one and persist. A failed write is logged; the count still goes up.
    pub fn increment(&mut self, store: &mut dyn ProgressStore) -> u64 {
        self.count = self.count.saturating_add(1);
        if let Err(e) = store.write(&self.key, self.count) {
            tracing::warn!(error = %e, key = %self.key, "could not save success count");
        }
        self.count
    }
}
