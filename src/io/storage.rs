use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories_next::ProjectDirs;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::io::atomic_write_string;

const QUALIFIER: &str = "com";
const ORGANIZATION: &str = "SeriesGrid";
const APPLICATION: &str = "seriesgrid";
const STORAGE_FILE: &str = "local_storage.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("storage parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not determine a config directory for the storage file")]
    NoConfigDir,
}

/// Durable string key/value storage scoped to one user profile.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryKeyValueStore {
    entries: BTreeMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        Self {
            entries: BTreeMap::from([(key.to_string(), value.to_string())]),
        }
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

/// A JSON object on disk holding every key. The whole file is rewritten
/// atomically on each `set`.
#[derive(Clone, Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileKeyValueStore {
    /// Opens the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match read_entries(&path) {
            Ok(entries) => entries,
            Err(StorageError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                info!("storage file {:?} not found, starting empty", path);
                BTreeMap::new()
            }
            Err(err) => {
                warn!("ignoring unreadable storage file {:?}: {err}", path);
                BTreeMap::new()
            }
        };
        Self { path, entries }
    }

    /// Opens the store in the per-user config directory.
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::open(default_storage_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value);
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        atomic_write_string(&self.path, &content)?;
        debug!("wrote key {key} to {:?}", self.path);
        Ok(())
    }
}

pub fn default_storage_path() -> Result<PathBuf, StorageError> {
    let dirs = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or(StorageError::NoConfigDir)?;
    Ok(dirs.config_dir().join(STORAGE_FILE))
}

fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, StorageError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// The store the app runs on: the profile file when a config directory is
/// available, memory otherwise.
#[derive(Clone, Debug)]
pub enum ProfileStore {
    File(FileKeyValueStore),
    Memory(MemoryKeyValueStore),
}

impl ProfileStore {
    pub fn open_or_memory(opened: Result<FileKeyValueStore, StorageError>) -> Self {
        match opened {
            Ok(store) => {
                info!("selection storage at {:?}", store.path());
                Self::File(store)
            }
            Err(err) => {
                warn!("falling back to in-memory selection storage: {err}");
                Self::Memory(MemoryKeyValueStore::new())
            }
        }
    }
}

impl KeyValueStore for ProfileStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::File(store) => store.get(key),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), StorageError> {
        match self {
            Self::File(store) => store.set(key, value),
            Self::Memory(store) => store.set(key, value),
        }
    }
}
