//! Hydration and auto-save around the grocery store.
//!
//! [`GrocerySession`] is the single owner that connects the in-memory
//! [`GroceryListStore`] to [`GroceryPersistence`]:
//!
//! 1. [`GrocerySession::hydrate`] loads the persisted list once and replaces
//!    the store's contents with it.
//! 2. After hydration, every operation that changes the list spawns one
//!    background save of the new snapshot on the Tokio runtime.
//!
//! Saves are neither batched nor coalesced. Overlapping saves may run if the
//! backend is slow, and the last write wins. A failed save never touches the
//! in-memory list; it is recorded as a [`StorageFailure`] that the view can
//! show and dismiss.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::domain::{GroceryError, GroceryItem, GroceryList, StorageError, StorageFailure};
use crate::grocery::store::GroceryListStore;
use crate::storage::GroceryPersistence;

type ErrorSlot = Arc<Mutex<Option<StorageFailure>>>;

fn set_slot(slot: &Mutex<Option<StorageFailure>>, value: Option<StorageFailure>) {
    *slot.lock().unwrap_or_else(PoisonError::into_inner) = value;
}

/// Grocery store with persistence wired in.
#[derive(Debug)]
pub struct GrocerySession {
    store: GroceryListStore,
    persistence: GroceryPersistence,
    /// Runtime captured during hydration; saves are spawned onto it.
    runtime: Option<Handle>,
    /// Store revision covered by the most recently scheduled save.
    saved_revision: u64,
    pending: Vec<JoinHandle<()>>,
    error: ErrorSlot,
}

impl GrocerySession {
    /// Creates an unhydrated session over an empty store.
    #[must_use]
    pub fn new(persistence: GroceryPersistence) -> Self {
        Self::with_store(GroceryListStore::new(), persistence)
    }

    /// Creates an unhydrated session over an existing store.
    #[must_use]
    pub fn with_store(store: GroceryListStore, persistence: GroceryPersistence) -> Self {
        let saved_revision = store.revision();
        Self {
            store,
            persistence,
            runtime: None,
            saved_revision,
            pending: Vec::new(),
            error: Arc::default(),
        }
    }

    /// Loads the persisted list into the store and enables auto-save.
    ///
    /// A stored list replaces the store's contents. A parse failure is
    /// recorded as the session's storage error and the session continues with
    /// the list it has. Returns `false` if the session was already hydrated,
    /// in which case nothing happens.
    ///
    /// Must be called from within a Tokio runtime; later saves are spawned
    /// onto that runtime.
    pub async fn hydrate(&mut self) -> bool {
        if self.is_hydrated() {
            tracing::debug!("session already hydrated");
            return false;
        }

        set_slot(&self.error, None);

        match self.persistence.load().await {
            Ok(Some(list)) => {
                tracing::debug!(count = list.items.len(), "hydrating from storage");
                self.store.replace_list(list);
            }
            Ok(None) => tracing::debug!("nothing stored, starting with current list"),
            Err(e) => {
                tracing::warn!(error = %e, "stored grocery list unusable, starting empty");
                set_slot(&self.error, Some(e.to_failure()));
            }
        }

        self.saved_revision = self.store.revision();
        self.runtime = Some(Handle::current());
        true
    }

    /// Returns `true` once [`GrocerySession::hydrate`] has completed.
    #[must_use]
    pub const fn is_hydrated(&self) -> bool {
        self.runtime.is_some()
    }

    /// Adds an item and schedules a save.
    ///
    /// # Errors
    ///
    /// Propagates [`GroceryError`] from the store; nothing is saved then.
    pub fn add_item(&mut self, name: &str) -> Result<GroceryItem, GroceryError> {
        let item = self.store.add_item(name)?;
        self.persist_changes();
        Ok(item)
    }

    /// Removes an item, scheduling a save if one was removed.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let removed = self.store.remove_item(id);
        self.persist_changes();
        removed
    }

    /// Toggles an item, scheduling a save if it exists.
    pub fn toggle_item(&mut self, id: &str) -> Option<bool> {
        let checked = self.store.toggle_item(id);
        self.persist_changes();
        checked
    }

    /// Clears checked items and schedules a save.
    pub fn clear_checked_items(&mut self) -> usize {
        let removed = self.store.clear_checked_items();
        self.persist_changes();
        removed
    }

    /// Read access to the underlying store.
    #[must_use]
    pub const fn store(&self) -> &GroceryListStore {
        &self.store
    }

    /// Owned snapshot of the current list.
    #[must_use]
    pub fn snapshot(&self) -> GroceryList {
        self.store.snapshot()
    }

    /// The most recent storage failure, if it has not been cleared.
    #[must_use]
    pub fn storage_error(&self) -> Option<StorageFailure> {
        self.error
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Dismisses the recorded storage failure.
    pub fn clear_error(&mut self) {
        set_slot(&self.error, None);
    }

    /// Number of saves spawned and not yet awaited by [`GrocerySession::flush`].
    #[must_use]
    pub fn pending_saves(&self) -> usize {
        self.pending.iter().filter(|handle| !handle.is_finished()).count()
    }

    /// Waits for every in-flight save to finish.
    pub async fn flush(&mut self) {
        for handle in self.pending.drain(..) {
            if let Err(e) = handle.await {
                tracing::error!(error = %e, "background save task failed");
            }
        }
    }

    /// Deletes the persisted list, leaving the in-memory list alone.
    ///
    /// In-flight saves are awaited first so they cannot write the list back.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] from persistence, which is also recorded
    /// as the session's storage error.
    pub async fn clear_storage(&mut self) -> Result<(), StorageError> {
        self.flush().await;
        self.persistence.clear().await.map_err(|e| {
            set_slot(&self.error, Some(e.to_failure()));
            e
        })
    }

    fn persist_changes(&mut self) {
        let revision = self.store.revision();
        if revision == self.saved_revision {
            return;
        }

        let Some(runtime) = &self.runtime else {
            tracing::debug!("not hydrated yet, change not saved");
            return;
        };

        self.saved_revision = revision;
        self.pending.retain(|handle| !handle.is_finished());
        set_slot(&self.error, None);

        let persistence = self.persistence.clone();
        let list = self.store.snapshot();
        let error = Arc::clone(&self.error);

        tracing::debug!(revision, count = list.items.len(), "scheduling save");
        let handle = runtime.spawn(async move {
            if let Err(e) = persistence.save(&list).await {
                tracing::error!(error = %e, "failed to save grocery list");
                set_slot(&error, Some(e.to_failure()));
            }
        });
        self.pending.push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StorageErrorKind;
    use crate::storage::{KeyValueStore, MemoryStore, GROCERY_LIST_KEY};

    fn session_over(store: Arc<MemoryStore>) -> GrocerySession {
        GrocerySession::new(GroceryPersistence::new(store))
    }

    async fn stored(store: &Arc<MemoryStore>) -> Option<GroceryList> {
        GroceryPersistence::new(store.clone()).load().await.unwrap()
    }

    #[tokio::test]
    async fn hydrate_loads_saved_list() {
        let backend = Arc::new(MemoryStore::new());
        let mut saved = GroceryListStore::new();
        saved.add_item("Milk").unwrap();
        GroceryPersistence::new(backend.clone())
            .save(&saved.snapshot())
            .await
            .unwrap();

        let mut session = session_over(backend);
        assert!(!session.is_hydrated());
        assert!(session.hydrate().await);
        assert!(session.is_hydrated());
        assert_eq!(session.snapshot(), saved.snapshot());

        // Second call is a no-op.
        assert!(!session.hydrate().await);
    }

    #[tokio::test]
    async fn hydrate_with_nothing_stored_keeps_empty_list() {
        let mut session = session_over(Arc::new(MemoryStore::new()));
        session.hydrate().await;
        assert!(session.store().is_empty());
        assert_eq!(session.storage_error(), None);
    }

    #[tokio::test]
    async fn corrupt_storage_records_parse_failure() {
        let backend = Arc::new(MemoryStore::new());
        backend
            .set_item(GROCERY_LIST_KEY, "garbage".to_string())
            .await
            .unwrap();

        let mut session = session_over(backend.clone());
        session.hydrate().await;
        assert!(session.store().is_empty());
        assert_eq!(
            session.storage_error().map(|f| f.kind),
            Some(StorageErrorKind::ParseFailed)
        );

        // The next change overwrites the bad data and clears the error.
        session.add_item("Eggs").unwrap();
        session.flush().await;
        assert_eq!(session.storage_error(), None);
        assert_eq!(stored(&backend).await.unwrap().items.len(), 1);
    }

    #[tokio::test]
    async fn changes_are_saved_after_hydration() {
        let backend = Arc::new(MemoryStore::new());
        let mut session = session_over(backend.clone());
        session.hydrate().await;

        let milk = session.add_item("Milk").unwrap();
        session.add_item("Eggs").unwrap();
        session.toggle_item(&milk.id);
        session.flush().await;

        assert_eq!(stored(&backend).await, Some(session.snapshot()));
        assert_eq!(session.pending_saves(), 0);
    }

    #[tokio::test]
    async fn changes_before_hydration_are_not_saved() {
        let backend = Arc::new(MemoryStore::new());
        let mut session = session_over(backend.clone());

        session.add_item("Milk").unwrap();
        session.flush().await;
        assert!(backend.is_empty().await);
    }

    #[tokio::test]
    async fn noop_operations_do_not_save() {
        let backend = Arc::new(MemoryStore::new());
        let mut session = session_over(backend.clone());
        session.hydrate().await;

        assert!(!session.remove_item("missing"));
        assert_eq!(session.toggle_item("missing"), None);
        assert!(session.add_item("  ").is_err());
        assert_eq!(session.pending_saves(), 0);
        session.flush().await;
        assert!(backend.is_empty().await);
    }

    #[tokio::test]
    async fn failed_save_is_recorded_without_losing_items() {
        let backend = Arc::new(MemoryStore::with_quota(64));
        let mut session = session_over(backend);
        session.hydrate().await;

        session.add_item("A fairly long grocery item name").unwrap();
        session.add_item("Another fairly long grocery item").unwrap();
        session.flush().await;

        assert_eq!(session.store().len(), 2);
        assert_eq!(
            session.storage_error().map(|f| f.kind),
            Some(StorageErrorKind::QuotaExceeded)
        );

        session.clear_error();
        assert_eq!(session.storage_error(), None);
    }

    #[tokio::test]
    async fn rapid_changes_end_with_latest_snapshot() {
        let backend = Arc::new(MemoryStore::new());
        let mut session = session_over(backend.clone());
        session.hydrate().await;

        for i in 0..20 {
            session.add_item(&format!("item {i}")).unwrap();
        }
        session.clear_checked_items();
        session.flush().await;

        assert_eq!(stored(&backend).await, Some(session.snapshot()));
    }

    #[tokio::test]
    async fn clear_storage_removes_persisted_list() {
        let backend = Arc::new(MemoryStore::new());
        let mut session = session_over(backend.clone());
        session.hydrate().await;
        session.add_item("Milk").unwrap();

        session.clear_storage().await.unwrap();
        assert_eq!(stored(&backend).await, None);
        assert_eq!(session.store().len(), 1);
    }
}
