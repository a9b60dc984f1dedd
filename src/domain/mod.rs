//! Domain layer for the LTPs core.
//!
//! Holds the grocery types and the error taxonomy, independent of storage
//! backends, the async runtime and any view layer.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Grocery item model and name validation
//! - [`list`]: Grocery list snapshot type
//!
//! # Examples
//!
//! ```
//! use ltps::domain::{GroceryItem, GroceryList};
//!
//! let mut list = GroceryList::empty(0);
//! list.items.push(GroceryItem::new("Bread")?);
//! assert!(list.validate().is_ok());
//! # Ok::<(), ltps::domain::GroceryError>(())
//! ```

pub mod error;
pub mod item;
pub mod list;

pub use error::{
    GroceryError, LtpsError, Result, StorageError, StorageErrorKind, StorageFailure, StoreError,
};
pub use item::{
    is_valid_item_name, trim_item_name, validate_item_name, GroceryItem, MAX_ITEM_NAME_LENGTH,
    MIN_ITEM_NAME_LENGTH,
};
pub use list::{GroceryList, MAX_ITEMS};
