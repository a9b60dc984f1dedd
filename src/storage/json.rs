//! JSON file-based key-value store.
//!
//! This module provides a simple, human-readable [`KeyValueStore`] that keeps
//! every entry in one JSON document on disk. It uses atomic file writes
//! (write-to-temp + rename) so the document is never left half-written if the
//! process dies mid-save.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - entries are loaded into memory once, at open
//! - **Write**: O(n) - serializes and writes the whole document
//! - **Best for**: a handful of keys with modest values, like app state

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::domain::StoreError;
use crate::storage::backend::{fits_quota, KeyValueStore};

/// Current version of the on-disk document.
const FORMAT_VERSION: u32 = 1;

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// Stored values by key.
    #[serde(default)]
    entries: HashMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: HashMap::new(),
        }
    }
}

/// JSON file key-value store.
///
/// The entire document is cached in memory and rewritten on every mutation.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "@grocery_list": "{\"items\":[],\"lastModified\":1704672000000}"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy of the document, loaded on open.
    data: Mutex<StorageData>,

    /// Optional cap on the summed size of keys and values.
    quota_bytes: Option<usize>,
}

impl JsonFileStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// An existing file is loaded; a missing one starts an empty store (the
    /// file is created on the first write).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but cannot be read
    /// - The file exists but is not a valid store document
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use ltps::storage::JsonFileStore;
    ///
    /// let store = JsonFileStore::open("/tmp/ltps/storage.json", None)?;
    /// # Ok::<(), ltps::domain::StoreError>(())
    /// ```
    pub fn open(file_path: impl Into<PathBuf>, quota_bytes: Option<usize>) -> Result<Self, StoreError> {
        let file_path = file_path.into();
        tracing::debug!(path = ?file_path, "opening JSON store");

        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("initializing new empty store");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "JSON store opened");

        Ok(Self {
            file_path,
            data: Mutex::new(data),
            quota_bytes,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData, StoreError> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| StoreError::Backend(format!("failed to parse store file: {e}")))?;

        if data.version != FORMAT_VERSION {
            return Err(StoreError::Backend(format!(
                "unsupported store format version {}",
                data.version
            )));
        }

        Ok(data)
    }

    /// Writes `data` to disk via a temporary file and an atomic rename.
    async fn save_to_file(&self, data: &StorageData) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data)
            .map_err(|e| StoreError::Backend(format!("failed to serialize store: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &self.file_path).await?;

        tracing::debug!(path = ?self.file_path, "store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, StoreError>> {
        async move { Ok(self.data.lock().await.entries.get(key).cloned()) }.boxed()
    }

    fn set_item<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, Result<(), StoreError>> {
        async move {
            let mut data = self.data.lock().await;
            if !fits_quota(&data.entries, key, &value, self.quota_bytes) {
                return Err(StoreError::QuotaExceeded);
            }

            // Write first so a failed save leaves the cache matching the file.
            let mut next = data.clone();
            next.entries.insert(key.to_string(), value);
            self.save_to_file(&next).await?;
            *data = next;
            Ok(())
        }
        .boxed()
    }

    fn remove_item<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<(), StoreError>> {
        async move {
            let mut data = self.data.lock().await;
            if !data.entries.contains_key(key) {
                return Ok(());
            }

            let mut next = data.clone();
            next.entries.remove(key);
            self.save_to_file(&next).await?;
            *data = next;
            Ok(())
        }
        .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let store = JsonFileStore::open(&path, None).unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), None);
        store.set_item("k", "v".to_string()).await.unwrap();
        drop(store);

        let reopened = JsonFileStore::open(&path, None).unwrap();
        assert_eq!(reopened.get_item("k").await.unwrap().as_deref(), Some("v"));
        assert!(!path.with_extension("tmp").exists());
    }

    #[tokio::test]
    async fn remove_is_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = JsonFileStore::open(&path, None).unwrap();
        store.set_item("k", "v".to_string()).await.unwrap();
        store.remove_item("k").await.unwrap();
        store.remove_item("never-there").await.unwrap();

        let reopened = JsonFileStore::open(&path, None).unwrap();
        assert_eq!(reopened.get_item("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn quota_exceeded_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        let store = JsonFileStore::open(&path, Some(8)).unwrap();
        store.set_item("k", "small".to_string()).await.unwrap();
        let err = store.set_item("k", "far too large".to_string()).await.unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded));

        let reopened = JsonFileStore::open(&path, None).unwrap();
        assert_eq!(reopened.get_item("k").await.unwrap().as_deref(), Some("small"));
    }

    #[test]
    fn corrupt_file_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(
            JsonFileStore::open(&path, None),
            Err(StoreError::Backend(_))
        ));
    }
}
