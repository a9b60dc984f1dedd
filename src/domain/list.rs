//! Grocery list snapshot type.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::item::{validate_item_name, GroceryItem};

/// Maximum number of items a list may hold.
pub const MAX_ITEMS: usize = 500;

/// An ordered grocery list.
///
/// Items keep insertion order, with new items appended. Values of this type
/// handed out by the store are snapshots: mutating one has no effect on the
/// store.
///
/// Persisted as `{"items": [...], "lastModified": <millis>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryList {
    /// Items in insertion order.
    pub items: Vec<GroceryItem>,
    /// Time of the last modification in milliseconds since the Unix epoch.
    pub last_modified: i64,
}

impl GroceryList {
    /// Creates an empty list stamped with `last_modified`.
    #[must_use]
    pub const fn empty(last_modified: i64) -> Self {
        Self {
            items: Vec::new(),
            last_modified,
        }
    }

    /// Returns the items that are checked off.
    #[must_use]
    pub fn checked_items(&self) -> Vec<GroceryItem> {
        self.items.iter().filter(|item| item.checked).cloned().collect()
    }

    /// Returns the items that are still to buy.
    #[must_use]
    pub fn unchecked_items(&self) -> Vec<GroceryItem> {
        self.items.iter().filter(|item| !item.checked).cloned().collect()
    }

    /// Checks a list that came from outside the store against the item
    /// invariants: at most [`MAX_ITEMS`] items, every name already trimmed and
    /// of valid length, and no duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if self.items.len() > MAX_ITEMS {
            return Err(format!(
                "list holds {} items, more than the maximum of {MAX_ITEMS}",
                self.items.len()
            ));
        }

        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            match validate_item_name(&item.name) {
                Ok(trimmed) if trimmed == item.name => {}
                Ok(_) => return Err(format!("item {} has an untrimmed name", item.id)),
                Err(e) => return Err(format!("item {}: {e}", item.id)),
            }
            if !seen.insert(item.id.as_str()) {
                return Err(format!("duplicate item id {}", item.id));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str, checked: bool) -> GroceryItem {
        GroceryItem {
            id: id.to_string(),
            name: name.to_string(),
            checked,
            created_at: 0,
        }
    }

    #[test]
    fn filters_by_checked_state() {
        let list = GroceryList {
            items: vec![item("1", "Milk", true), item("2", "Eggs", false), item("3", "Jam", true)],
            last_modified: 7,
        };

        let checked: Vec<_> = list.checked_items().into_iter().map(|i| i.id).collect();
        let unchecked: Vec<_> = list.unchecked_items().into_iter().map(|i| i.id).collect();
        assert_eq!(checked, ["1", "3"]);
        assert_eq!(unchecked, ["2"]);
    }

    #[test]
    fn validate_accepts_well_formed_lists() {
        assert!(GroceryList::empty(0).validate().is_ok());
        let list = GroceryList {
            items: vec![item("1", "Milk", false), item("2", "Eggs", true)],
            last_modified: 0,
        };
        assert!(list.validate().is_ok());
    }

    #[test]
    fn validate_rejects_invariant_violations() {
        let blank = GroceryList {
            items: vec![item("1", "", false)],
            last_modified: 0,
        };
        assert!(blank.validate().is_err());

        let untrimmed = GroceryList {
            items: vec![item("1", " Milk", false)],
            last_modified: 0,
        };
        assert!(untrimmed.validate().is_err());

        let duplicate = GroceryList {
            items: vec![item("1", "Milk", false), item("1", "Eggs", false)],
            last_modified: 0,
        };
        assert!(duplicate.validate().is_err());

        let oversized = GroceryList {
            items: (0..=MAX_ITEMS).map(|i| item(&i.to_string(), "x", false)).collect(),
            last_modified: 0,
        };
        assert!(oversized.validate().is_err());
    }

    #[test]
    fn deserializes_persisted_layout() {
        let json = r#"{"items":[{"id":"a","name":"Milk","checked":false,"createdAt":1}],"lastModified":2}"#;
        let list: GroceryList = serde_json::from_str(json).unwrap();
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].created_at, 1);
        assert_eq!(list.last_modified, 2);
    }
}
