//! Persistent key-value storage for the manager configuration.

use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use validator::Validate;

use super::models::{Config, DEFAULT_PER_PAGE};
use crate::error::{Error, Result};

/// Fixed key the configuration blob lives under.
pub const CONFIG_KEY: &str = "dns-manager-config";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Stores all entries as one JSON object on disk. The file is created on
/// the first write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            Error::Storage(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            Error::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    Error::Storage(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        let contents =
            serde_json::to_string_pretty(&entries).map_err(|e| Error::Storage(e.to_string()))?;
        fs::write(&self.path, contents).map_err(|e| {
            Error::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }
}

/// Reads the configuration, falling back to defaults on first use. A
/// stored page size below 1 is replaced by the default.
pub fn load_config<S: KeyValueStore + ?Sized>(store: &S) -> Result<Config> {
    let mut config: Config = match store.get(CONFIG_KEY)? {
        Some(blob) => serde_json::from_str(&blob).map_err(|e| {
            warn!("Stored configuration is unreadable: {}", e);
            Error::Storage(format!("Failed to parse stored configuration: {}", e))
        })?,
        None => {
            debug!("No stored configuration, using defaults");
            return Ok(Config::default());
        }
    };

    if let Err(e) = config.validate() {
        debug!("Stored configuration is incomplete: {}", e);
        if config.per_page == 0 {
            config.per_page = DEFAULT_PER_PAGE;
        }
    }
    Ok(config)
}

/// Overwrites the stored configuration wholesale.
pub fn save_config<S: KeyValueStore + ?Sized>(store: &mut S, config: &Config) -> Result<()> {
    let blob = serde_json::to_string(config).map_err(|e| Error::Storage(e.to_string()))?;
    store.set(CONFIG_KEY, &blob)
}
