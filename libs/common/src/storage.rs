//! Key-value storage for the client
//!
//! Two backends sit behind the same `Store` facade: an in-memory map that
//! lives as long as the session, and a JSON file that survives restarts.
//! Backend failures never reach callers; `Store` logs them and reports
//! `false` (writes) or the default value (reads).

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, info};

use crate::error::{StorageError, StorageResult};

/// Raw string storage implemented by each backend
pub trait KeyValueStore: Send + Sync {
    /// Read the serialized value under `key`
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the serialized value under `key`
    fn write(&self, key: &str, value: String) -> StorageResult<()>;

    /// Delete `key`; deleting a missing key succeeds
    fn delete(&self, key: &str) -> StorageResult<()>;

    /// Delete every key
    fn clear(&self) -> StorageResult<()>;
}

/// Session-scoped backend, dropped with the owning `Store`
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryBackend {
    /// Create an unbounded backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend that rejects writes once keys plus values exceed `quota_bytes`
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            quota_bytes: Some(quota_bytes),
        }
    }
}

impl KeyValueStore for MemoryBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self.entries.read().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: String) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;

        if let Some(limit) = self.quota_bytes {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            let needed = others + key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded { needed, limit });
            }
        }

        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Poisoned)?;
        entries.clear();
        Ok(())
    }
}

/// Durable backend keeping every key in one JSON object on disk
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileBackend {
    /// Open (lazily) the store file at `path`; parent directories are created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StorageResult<HashMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, entries: &HashMap<String, String>) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(self.load()?.remove(key))
    }

    fn write(&self, key: &str, value: String) -> StorageResult<()> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value);
        self.save(&entries)
    }

    fn delete(&self, key: &str) -> StorageResult<()> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }

    fn clear(&self) -> StorageResult<()> {
        let _guard = self.lock.lock().map_err(|_| StorageError::Poisoned)?;
        self.save(&HashMap::new())
    }
}

/// Typed facade over a backend; values are stored as JSON
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn KeyValueStore>,
    label: &'static str,
}

impl Store {
    /// Wrap an arbitrary backend
    pub fn new(backend: Arc<dyn KeyValueStore>, label: &'static str) -> Self {
        Self { backend, label }
    }

    /// Session-scoped store
    pub fn session() -> Self {
        Self::new(Arc::new(MemoryBackend::new()), "session")
    }

    /// Durable store backed by the file at `path`
    pub fn durable(path: impl Into<PathBuf>) -> Self {
        let backend = FileBackend::new(path);
        info!("Durable store initialized at {}", backend.path().display());
        Self::new(Arc::new(backend), "local")
    }

    /// Get a value, `None` when missing or unreadable
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.read(key) {
            Ok(raw) => raw?,
            Err(e) => {
                error!("{} storage get error for {}: {}", self.label, key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                error!("{} storage get error for {}: {}", self.label, key, e);
                None
            }
        }
    }

    /// Get a value or `default` when missing or unreadable
    pub fn get_or<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        self.get(key).unwrap_or(default)
    }

    /// Store a value; `false` means it was not persisted
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> bool {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|raw| self.backend.write(key, raw));

        match result {
            Ok(()) => true,
            Err(e) => {
                error!("{} storage set error for {}: {}", self.label, key, e);
                false
            }
        }
    }

    /// Remove a value; `false` means the backend failed
    pub fn remove(&self, key: &str) -> bool {
        match self.backend.delete(key) {
            Ok(()) => true,
            Err(e) => {
                error!("{} storage remove error for {}: {}", self.label, key, e);
                false
            }
        }
    }

    /// Remove every value; `false` means the backend failed
    pub fn clear(&self) -> bool {
        match self.backend.clear() {
            Ok(()) => true,
            Err(e) => {
                error!("{} storage clear error: {}", self.label, e);
                false
            }
        }
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").field("label", &self.label).finish()
    }
}
