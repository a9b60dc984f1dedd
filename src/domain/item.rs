//! Grocery item model and name validation.
//!
//! A [`GroceryItem`] is a single entry on the shared grocery list. Its name is
//! always trimmed and between [`MIN_ITEM_NAME_LENGTH`] and
//! [`MAX_ITEM_NAME_LENGTH`] characters long; ids and creation timestamps are
//! assigned once and never change.

use serde::{Deserialize, Serialize};

use super::error::GroceryError;

/// Maximum length of an item name, in characters, after trimming.
pub const MAX_ITEM_NAME_LENGTH: usize = 100;

/// Minimum length of an item name, in characters, after trimming.
pub const MIN_ITEM_NAME_LENGTH: usize = 1;

/// A single item on the grocery list.
///
/// Serialized with camel-case field names so the persisted layout is
/// `{"id", "name", "checked", "createdAt"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    /// Opaque unique identifier (UUID v4), assigned at creation.
    pub id: String,
    /// Trimmed display name.
    pub name: String,
    /// Whether the item has been checked off.
    #[serde(default)]
    pub checked: bool,
    /// Creation time in milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl GroceryItem {
    /// Creates a new unchecked item with a fresh id and the current time.
    ///
    /// # Errors
    ///
    /// Returns [`GroceryError::Validation`] if the trimmed name is empty or
    /// longer than [`MAX_ITEM_NAME_LENGTH`] characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use ltps::domain::GroceryItem;
    ///
    /// let item = GroceryItem::new("  Whole milk ")?;
    /// assert_eq!(item.name, "Whole milk");
    /// assert!(!item.checked);
    /// # Ok::<(), ltps::domain::GroceryError>(())
    /// ```
    pub fn new(name: &str) -> Result<Self, GroceryError> {
        Self::with_created_at(name, chrono::Utc::now().timestamp_millis())
    }

    /// Creates a new unchecked item stamped with the given creation time.
    ///
    /// # Errors
    ///
    /// Same as [`GroceryItem::new`].
    pub fn with_created_at(name: &str, created_at: i64) -> Result<Self, GroceryError> {
        let name = validate_item_name(name)?;
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            checked: false,
            created_at,
        })
    }
}

/// Trims `name` and checks it against the length bounds.
///
/// Length is counted in Unicode scalar values, not bytes.
///
/// # Errors
///
/// Returns [`GroceryError::Validation`] when the trimmed name is empty or too
/// long.
pub fn validate_item_name(name: &str) -> Result<String, GroceryError> {
    let trimmed = name.trim();
    let length = trimmed.chars().count();

    if length < MIN_ITEM_NAME_LENGTH {
        return Err(GroceryError::Validation(
            "Item name cannot be empty".to_string(),
        ));
    }

    if length > MAX_ITEM_NAME_LENGTH {
        return Err(GroceryError::Validation(format!(
            "Item name cannot exceed {MAX_ITEM_NAME_LENGTH} characters"
        )));
    }

    Ok(trimmed.to_string())
}

/// Returns `true` if `name` would pass [`validate_item_name`].
#[must_use]
pub fn is_valid_item_name(name: &str) -> bool {
    validate_item_name(name).is_ok()
}

/// Trims an optional name, treating `None` as empty.
#[must_use]
pub fn trim_item_name(name: Option<&str>) -> String {
    name.unwrap_or_default().trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_trimmed_and_unchecked() {
        let item = GroceryItem::with_created_at("  Eggs\t", 1_704_672_000_000).unwrap();
        assert_eq!(item.name, "Eggs");
        assert!(!item.checked);
        assert_eq!(item.created_at, 1_704_672_000_000);
        assert!(uuid::Uuid::parse_str(&item.id).is_ok());
    }

    #[test]
    fn ids_are_unique() {
        let a = GroceryItem::new("Milk").unwrap();
        let b = GroceryItem::new("Milk").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn rejects_empty_and_whitespace_names() {
        for name in ["", "   ", "\n\t "] {
            assert_eq!(
                validate_item_name(name),
                Err(GroceryError::Validation("Item name cannot be empty".to_string()))
            );
        }
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let max = "a".repeat(MAX_ITEM_NAME_LENGTH);
        assert_eq!(validate_item_name(&max).unwrap(), max);
        assert_eq!(validate_item_name("a").unwrap(), "a");

        let too_long = "a".repeat(MAX_ITEM_NAME_LENGTH + 1);
        assert!(matches!(
            validate_item_name(&too_long),
            Err(GroceryError::Validation(_))
        ));

        // Surrounding whitespace does not count towards the limit.
        let padded = format!("  {max}  ");
        assert!(is_valid_item_name(&padded));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let accented = "é".repeat(MAX_ITEM_NAME_LENGTH);
        assert!(is_valid_item_name(&accented));
    }

    #[test]
    fn trim_handles_missing_names() {
        assert_eq!(trim_item_name(None), "");
        assert_eq!(trim_item_name(Some("  Bread ")), "Bread");
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let item = GroceryItem {
            id: "abc".to_string(),
            name: "Milk".to_string(),
            checked: true,
            created_at: 42,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "abc", "name": "Milk", "checked": true, "createdAt": 42})
        );
    }
}
