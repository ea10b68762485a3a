//! Client-side key-value storage for preferences.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use skyview_core::StorageError;

/// Synchronous string store, read and written from the event loop.
pub trait PreferenceStore: Send + Sync + 'static {
    fn get(&self, key: &str) -> Option<String>;

    /// # Errors
    /// Returns `StorageError::Write` when the value could not be persisted.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Store that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(self, key: &str, value: &str) -> Self {
        self.values.lock().insert(key.to_string(), value.to_string());
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a small JSON object on disk.
///
/// The file is read once on open and rewritten on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl FileStore {
    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref().to_path_buf();
        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| StorageError::Read(format!("{}: {}", path.display(), e)))?;
            serde_json::from_str(&contents)
                .map_err(|e| StorageError::Read(format!("{}: {}", path.display(), e)))?
        } else {
            BTreeMap::new()
        };

        tracing::debug!("Opened preference store at {}", path.display());

        Ok(Self {
            path,
            values: Mutex::new(values),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::Write(e.to_string()))?;
        }
        let contents =
            serde_json::to_string_pretty(values).map_err(|e| StorageError::Write(e.to_string()))?;
        std::fs::write(&self.path, contents).map_err(|e| StorageError::Write(e.to_string()))
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.values.lock();
        values.insert(key.to_string(), value.to_string());
        self.flush(&values)
    }
}
