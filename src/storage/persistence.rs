//! Grocery list persistence on top of a [`KeyValueStore`].
//!
//! The list is stored as JSON text under the single key
//! [`GROCERY_LIST_KEY`]. Load and save deliberately fail differently:
//!
//! - `load` degrades gracefully. Missing data is `Ok(None)`, unreadable
//!   storage is logged and also `Ok(None)`. Only data that exists but is not a
//!   usable list is reported, as [`StorageError::Parse`].
//! - `save` and `clear` surface every failure, classified as
//!   [`StorageError::QuotaExceeded`] or [`StorageError::Save`], so the caller
//!   can decide what the user sees.

use std::sync::Arc;

use tracing::Instrument;

use crate::domain::{GroceryList, StorageError, StoreError};
use crate::storage::backend::KeyValueStore;

/// Storage key holding the serialized grocery list.
pub const GROCERY_LIST_KEY: &str = "@grocery_list";

/// Loads, saves and clears the grocery list in a key-value store.
///
/// Cheap to clone; clones share the same backend.
#[derive(Clone)]
pub struct GroceryPersistence {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for GroceryPersistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroceryPersistence")
            .field("key", &GROCERY_LIST_KEY)
            .finish_non_exhaustive()
    }
}

impl GroceryPersistence {
    /// Wraps a key-value backend.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Reads the persisted list.
    ///
    /// Returns `Ok(None)` when nothing has been saved, and also when the
    /// backend itself fails (the failure is logged).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Parse`] if a value exists but is not valid JSON
    /// for a grocery list, or decodes to a list that breaks the item
    /// invariants.
    pub async fn load(&self) -> Result<Option<GroceryList>, StorageError> {
        self.load_inner()
            .instrument(tracing::debug_span!("grocery_load", key = GROCERY_LIST_KEY))
            .await
    }

    async fn load_inner(&self) -> Result<Option<GroceryList>, StorageError> {
        let raw = match self.store.get_item(GROCERY_LIST_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("no stored grocery list");
                return Ok(None);
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load grocery list");
                return Ok(None);
            }
        };

        let list: GroceryList = serde_json::from_str(&raw).map_err(|e| StorageError::Parse {
            message: e.to_string(),
            source: Some(e),
        })?;

        list.validate()
            .map_err(|message| StorageError::Parse { message, source: None })?;

        tracing::debug!(count = list.items.len(), "grocery list loaded");
        Ok(Some(list))
    }

    /// Serializes `list` and writes it under [`GROCERY_LIST_KEY`].
    ///
    /// # Errors
    ///
    /// - [`StorageError::QuotaExceeded`] if the backend is full
    /// - [`StorageError::Save`] for any other failure
    pub async fn save(&self, list: &GroceryList) -> Result<(), StorageError> {
        self.save_inner(list)
            .instrument(tracing::debug_span!("grocery_save", count = list.items.len()))
            .await
    }

    async fn save_inner(&self, list: &GroceryList) -> Result<(), StorageError> {
        let json = serde_json::to_string(list).map_err(|e| StorageError::Save {
            message: "Failed to save grocery list".to_string(),
            source: StoreError::Backend(e.to_string()),
        })?;

        match self.store.set_item(GROCERY_LIST_KEY, json).await {
            Ok(()) => {
                tracing::debug!("grocery list saved");
                Ok(())
            }
            Err(source @ StoreError::QuotaExceeded) => {
                tracing::warn!("storage quota exceeded while saving grocery list");
                Err(StorageError::QuotaExceeded { source })
            }
            Err(source) => {
                tracing::warn!(error = %source, "failed to save grocery list");
                Err(StorageError::Save {
                    message: "Failed to save grocery list".to_string(),
                    source,
                })
            }
        }
    }

    /// Deletes the persisted list.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Save`] if the backend fails.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.store
            .remove_item(GROCERY_LIST_KEY)
            .instrument(tracing::debug_span!("grocery_clear"))
            .await
            .map_err(|source| {
                tracing::warn!(error = %source, "failed to clear grocery list");
                StorageError::Save {
                    message: "Failed to clear grocery list".to_string(),
                    source,
                }
            })
    }
}
