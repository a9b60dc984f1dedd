//! Key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait, the asynchronous,
//! string-keyed local store the grocery list is persisted into. It is the
//! only seam between the persistence logic and the medium actually holding
//! the bytes, so backends can be swapped without touching business logic.
//!
//! # Design Philosophy
//!
//! The trait mirrors the three operations the app needs and nothing more:
//! read a value, write a value, delete a value. Values are opaque strings;
//! serialization is the caller's concern.

use futures_util::future::BoxFuture;

use crate::domain::StoreError;

/// Asynchronous string-keyed storage.
///
/// Each operation returns a boxed `Send` future so implementations can be
/// used behind `Arc<dyn KeyValueStore>` and from spawned tasks.
///
/// # Implementations
///
/// - [`crate::storage::MemoryStore`]: in-process map (tests, ephemeral sessions)
/// - [`crate::storage::JsonFileStore`]: JSON file with atomic writes
///
/// # Examples
///
/// ```
/// use ltps::storage::{KeyValueStore, MemoryStore};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), ltps::domain::StoreError> {
/// let store = MemoryStore::new();
/// store.set_item("greeting", "hello".to_string()).await?;
/// assert_eq!(store.get_item("greeting").await?, Some("hello".to_string()));
/// # Ok(())
/// # }
/// ```
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    ///
    /// Resolves to `Ok(None)` if nothing is stored under the key.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<Option<String>, StoreError>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::QuotaExceeded`] when the backend is full, or
    /// another variant for any other write failure. The previous value is
    /// kept on failure.
    fn set_item<'a>(&'a self, key: &'a str, value: String) -> BoxFuture<'a, Result<(), StoreError>>;

    /// Deletes the value under `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be written.
    fn remove_item<'a>(&'a self, key: &'a str) -> BoxFuture<'a, Result<(), StoreError>>;
}

/// Returns `true` if storing `value` under `key` keeps the total size of all
/// keys and values within `quota_bytes`. The current value of `key`, if any,
/// does not count since it would be replaced.
pub(crate) fn fits_quota(
    entries: &std::collections::HashMap<String, String>,
    key: &str,
    value: &str,
    quota_bytes: Option<usize>,
) -> bool {
    let Some(quota) = quota_bytes else {
        return true;
    };

    let others: usize = entries
        .iter()
        .filter(|(k, _)| k.as_str() != key)
        .map(|(k, v)| k.len() + v.len())
        .sum();

    others + key.len() + value.len() <= quota
}
