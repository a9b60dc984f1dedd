//! In-process key-value store.

use std::collections::HashMap;

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use tokio::sync::Mutex;

use crate::domain::StoreError;
use crate::storage::backend::{fits_quota, KeyValueStore};

/// [`KeyValueStore`] backed by a `HashMap`.
///
/// Contents live as long as the value does. An optional byte quota, counted
/// over the lengths of all keys and values, emulates the capacity limit of
/// device-local stores.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryStore {
    /// Creates an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store holding at most `quota_bytes` of keys and values.
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: Mutex::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Returns `true` if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, StoreError>> {
        async move { Ok(self.entries.lock().await.get(key).cloned()) }.boxed()
    }

    fn set_item<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, Result<(), StoreError>> {
        async move {
            let mut entries = self.entries.lock().await;
            if !fits_quota(&entries, key, &value, self.quota_bytes) {
                tracing::debug!(key = %key, value_len = value.len(), "memory store quota exceeded");
                return Err(StoreError::QuotaExceeded);
            }
            entries.insert(key.to_string(), value);
            Ok(())
        }
        .boxed()
    }

    fn remove_item<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<(), StoreError>> {
        async move {
            self.entries.lock().await.remove(key);
            Ok(())
        }
        .boxed()
    }
}
