//! Authoritative in-memory grocery list.
//!
//! [`GroceryListStore`] owns the only mutable copy of the list. Consumers read
//! through borrowed slices or cloned [`GroceryList`] snapshots and mutate only
//! through the store's operations, which enforce the item invariants and keep
//! `last_modified` current.
//!
//! All operations are synchronous and perform no I/O. Persistence is layered
//! on top by [`crate::grocery::GrocerySession`].

use crate::domain::{GroceryError, GroceryItem, GroceryList, MAX_ITEMS};

/// Millisecond clock used to stamp items and modifications.
pub type Clock = fn() -> i64;

fn system_clock() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// In-memory grocery list with invariant-enforcing operations.
#[derive(Debug, Clone)]
pub struct GroceryListStore {
    list: GroceryList,
    clock: Clock,
    revision: u64,
}

impl Default for GroceryListStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GroceryListStore {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(system_clock)
    }

    /// Creates an empty store that reads time from `clock`.
    #[must_use]
    pub fn with_clock(clock: Clock) -> Self {
        Self {
            list: GroceryList::empty(clock()),
            clock,
            revision: 0,
        }
    }

    /// Adds an item named `name` (trimmed) to the end of the list.
    ///
    /// Returns a copy of the new item.
    ///
    /// # Errors
    ///
    /// - [`GroceryError::Validation`] if the trimmed name is empty or too long
    /// - [`GroceryError::Capacity`] if the list already holds [`MAX_ITEMS`]
    ///
    /// The list is unchanged on error.
    ///
    /// # Examples
    ///
    /// ```
    /// use ltps::grocery::GroceryListStore;
    ///
    /// let mut store = GroceryListStore::new();
    /// let milk = store.add_item(" Milk ")?;
    /// assert_eq!(milk.name, "Milk");
    /// assert!(store.add_item("   ").is_err());
    /// assert_eq!(store.len(), 1);
    /// # Ok::<(), ltps::domain::GroceryError>(())
    /// ```
    pub fn add_item(&mut self, name: &str) -> Result<GroceryItem, GroceryError> {
        if self.list.items.len() >= MAX_ITEMS {
            tracing::debug!(count = self.list.items.len(), "list is full, rejecting item");
            return Err(GroceryError::Capacity { max: MAX_ITEMS });
        }

        let now = (self.clock)();
        let item = GroceryItem::with_created_at(name, now)?;

        tracing::debug!(item_id = %item.id, item_name = %item.name, "item added");
        self.list.items.push(item.clone());
        self.touch(now);
        Ok(item)
    }

    /// Removes the item with the given id.
    ///
    /// Returns `true` if an item was removed. An unknown id is not an error
    /// and leaves the list, including `last_modified`, untouched.
    pub fn remove_item(&mut self, id: &str) -> bool {
        let Some(index) = self.position(id) else {
            tracing::debug!(item_id = %id, "remove ignored, no such item");
            return false;
        };

        self.list.items.remove(index);
        self.touch((self.clock)());
        tracing::debug!(item_id = %id, "item removed");
        true
    }

    /// Flips the checked state of the item with the given id.
    ///
    /// Returns the new checked state, or `None` (and no change) if the id is
    /// unknown.
    pub fn toggle_item(&mut self, id: &str) -> Option<bool> {
        let index = self.position(id)?;
        let item = &mut self.list.items[index];
        item.checked = !item.checked;
        let checked = item.checked;

        self.touch((self.clock)());
        tracing::debug!(item_id = %id, checked, "item toggled");
        Some(checked)
    }

    /// Removes every checked item and returns how many were removed.
    ///
    /// Remaining items keep their order. `last_modified` is updated even when
    /// nothing was removed.
    pub fn clear_checked_items(&mut self) -> usize {
        let before = self.list.items.len();
        self.list.items.retain(|item| !item.checked);
        let removed = before - self.list.items.len();

        self.touch((self.clock)());
        tracing::debug!(removed, "checked items cleared");
        removed
    }

    /// Returns copies of the checked items, in list order.
    #[must_use]
    pub fn checked_items(&self) -> Vec<GroceryItem> {
        self.list.checked_items()
    }

    /// Returns copies of the unchecked items, in list order.
    #[must_use]
    pub fn unchecked_items(&self) -> Vec<GroceryItem> {
        self.list.unchecked_items()
    }

    /// Replaces the whole list. Used when hydrating from storage.
    pub fn replace_list(&mut self, list: GroceryList) {
        tracing::debug!(count = list.items.len(), "list replaced");
        self.list = list;
        self.revision += 1;
    }

    /// Returns an owned snapshot of the current list.
    #[must_use]
    pub fn snapshot(&self) -> GroceryList {
        self.list.clone()
    }

    /// Borrows the items in list order.
    #[must_use]
    pub fn items(&self) -> &[GroceryItem] {
        &self.list.items
    }

    /// Looks up an item by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&GroceryItem> {
        self.list.items.iter().find(|item| item.id == id)
    }

    /// Time of the last modification in milliseconds.
    #[must_use]
    pub const fn last_modified(&self) -> i64 {
        self.list.last_modified
    }

    /// Number of items on the list.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.items.len()
    }

    /// Returns `true` if the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.items.is_empty()
    }

    /// Counter bumped by every operation that changes the list.
    ///
    /// Callers compare revisions to decide whether anything needs saving.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.list.items.iter().position(|item| item.id == id)
    }

    fn touch(&mut self, now: i64) {
        self.list.last_modified = now;
        self.revision += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicI64, Ordering};

    static TICKS: AtomicI64 = AtomicI64::new(1_000);

    // Strictly increasing so every modification is observable.
    fn ticking_clock() -> i64 {
        TICKS.fetch_add(1, Ordering::SeqCst)
    }

    fn store() -> GroceryListStore {
        GroceryListStore::with_clock(ticking_clock)
    }

    fn names(store: &GroceryListStore) -> Vec<&str> {
        store.items().iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = store();
        for name in ["Milk", "Eggs", "Bread"] {
            store.add_item(name).unwrap();
        }
        assert_eq!(names(&store), ["Milk", "Eggs", "Bread"]);

        let last = store.items().last().unwrap();
        assert_eq!(last.name, "Bread");
        assert!(!last.checked);
    }

    #[test]
    fn add_updates_last_modified() {
        let mut store = store();
        let before = store.last_modified();
        let item = store.add_item("Milk").unwrap();
        assert!(store.last_modified() > before);
        assert_eq!(item.created_at, store.last_modified());
    }

    #[test]
    fn invalid_names_leave_list_unchanged() {
        let mut store = store();
        store.add_item("Milk").unwrap();
        let before = store.snapshot();

        assert!(matches!(store.add_item(""), Err(GroceryError::Validation(_))));
        assert!(matches!(store.add_item("   "), Err(GroceryError::Validation(_))));
        assert!(matches!(
            store.add_item(&"x".repeat(101)),
            Err(GroceryError::Validation(_))
        ));
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn full_list_rejects_new_items() {
        let mut store = store();
        for i in 0..MAX_ITEMS {
            store.add_item(&format!("item {i}")).unwrap();
        }
        let before = store.snapshot();

        assert_eq!(
            store.add_item("one too many"),
            Err(GroceryError::Capacity { max: MAX_ITEMS })
        );
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn capacity_is_checked_before_name() {
        let mut store = store();
        for i in 0..MAX_ITEMS {
            store.add_item(&format!("item {i}")).unwrap();
        }
        assert!(matches!(store.add_item(""), Err(GroceryError::Capacity { .. })));
    }

    #[test]
    fn toggle_twice_restores_state() {
        let mut store = store();
        let id = store.add_item("Milk").unwrap().id;

        assert_eq!(store.toggle_item(&id), Some(true));
        assert!(store.get(&id).unwrap().checked);
        assert_eq!(store.toggle_item(&id), Some(false));
        assert!(!store.get(&id).unwrap().checked);
    }

    #[test]
    fn toggle_unknown_id_is_noop() {
        let mut store = store();
        store.add_item("Milk").unwrap();
        let before = store.snapshot();
        let revision = store.revision();

        assert_eq!(store.toggle_item("missing"), None);
        assert_eq!(store.snapshot(), before);
        assert_eq!(store.revision(), revision);
    }

    #[test]
    fn remove_unknown_id_leaves_list_identical() {
        let mut store = store();
        store.add_item("Milk").unwrap();
        let before = store.snapshot();

        assert!(!store.remove_item("missing"));
        assert_eq!(store.snapshot(), before);
        assert_eq!(store.last_modified(), before.last_modified);
    }

    #[test]
    fn remove_deletes_matching_item() {
        let mut store = store();
        let milk = store.add_item("Milk").unwrap();
        store.add_item("Eggs").unwrap();
        let before = store.last_modified();

        assert!(store.remove_item(&milk.id));
        assert_eq!(names(&store), ["Eggs"]);
        assert!(store.last_modified() > before);
    }

    #[test]
    fn clear_checked_scenario() {
        let mut store = store();
        let milk = store.add_item("Milk").unwrap();
        store.add_item("Eggs").unwrap();
        store.add_item("Bread").unwrap();

        store.toggle_item(&milk.id);
        let checked: Vec<_> = store.checked_items().into_iter().map(|i| i.name).collect();
        assert_eq!(checked, ["Milk"]);

        assert_eq!(store.clear_checked_items(), 1);
        assert_eq!(names(&store), ["Eggs", "Bread"]);
        assert!(store.checked_items().is_empty());
    }

    #[test]
    fn clear_checked_touches_even_when_nothing_removed() {
        let mut store = store();
        store.add_item("Milk").unwrap();
        let before = store.last_modified();
        let revision = store.revision();

        assert_eq!(store.clear_checked_items(), 0);
        assert!(store.last_modified() > before);
        assert_eq!(store.revision(), revision + 1);
    }

    #[test]
    fn queries_do_not_mutate() {
        let mut store = store();
        let milk = store.add_item("Milk").unwrap();
        store.add_item("Eggs").unwrap();
        store.toggle_item(&milk.id);
        let before = store.snapshot();

        assert_eq!(store.checked_items().len(), 1);
        assert_eq!(store.unchecked_items().len(), 1);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn snapshots_are_detached() {
        let mut store = store();
        store.add_item("Milk").unwrap();

        let mut snapshot = store.snapshot();
        snapshot.items.clear();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn replace_list_swaps_contents() {
        let mut store = store();
        store.add_item("Milk").unwrap();

        let mut other = GroceryListStore::with_clock(ticking_clock);
        other.add_item("Apples").unwrap();
        let replacement = other.snapshot();

        store.replace_list(replacement.clone());
        assert_eq!(store.snapshot(), replacement);
    }
}
