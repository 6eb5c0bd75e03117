//! Key-Value Store
//!
//! Abstract interface for the durable backing store, plus the two
//! implementations shipped with the crate. Implementations are injected
//! into [`crate::store::ItemStore`] so tests can swap backends.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use log::debug;

use crate::error::{KaimonoError, Result};

/// Abstract string-keyed backing store
///
/// All operations are async to support various backends. Keys are
/// independent; no cross-key transaction is assumed.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing prior content
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests and ephemeral use
#[derive(Debug, Default)]
pub struct MemoryKvStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove all entries
    pub fn clear(&self) {
        self.entries.lock().expect("kv mutex poisoned").clear();
    }
}

#[async_trait]
impl KvStore for MemoryKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let entries = self.entries.lock().expect("kv mutex poisoned");
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.lock().expect("kv mutex poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed store: one file per key under a data directory
///
/// Writes go through a temp file and an atomic rename to avoid
/// partial-write visibility. File I/O runs on a blocking task.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    dir: PathBuf,
}

impl FileKvStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default data directory (`~/.kaimono`)
    pub fn default_dir() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(KaimonoError::HomeNotFound)?;
        Ok(home.join(".kaimono"))
    }

    /// Resolve the file path for `key`, rejecting path-unsafe keys
    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(KaimonoError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.dir.join(key))
    }
}

#[async_trait]
impl KvStore for FileKvStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        let content = tokio::task::spawn_blocking(move || -> Result<Option<String>> {
            if !path.exists() {
                return Ok(None);
            }
            Ok(Some(fs::read_to_string(&path)?))
        })
        .await
        .map_err(|e| KaimonoError::Storage(format!("blocking read failed: {}", e)))??;
        Ok(content)
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        let value = value.to_string();
        debug!("kv set: {} ({} bytes)", key, value.len());

        tokio::task::spawn_blocking(move || -> Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }

            let temp = path.with_extension("tmp");
            let mut f = fs::File::create(&temp)?;
            f.write_all(value.as_bytes())?;
            f.sync_all()?;
            fs::rename(temp, &path)?;
            Ok(())
        })
        .await
        .map_err(|e| KaimonoError::Storage(format!("blocking write failed: {}", e)))??;
        Ok(())
    }
}
