//! Grocery list feature.
//!
//! - [`store`]: the authoritative in-memory list and its invariant rules
//! - [`session`]: hydration from storage and background auto-save
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ltps::grocery::GrocerySession;
//! use ltps::storage::{GroceryPersistence, MemoryStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), ltps::LtpsError> {
//! let persistence = GroceryPersistence::new(Arc::new(MemoryStore::new()));
//! let mut session = GrocerySession::new(persistence.clone());
//! session.hydrate().await;
//!
//! session.add_item("Milk")?;
//! session.flush().await;
//! assert_eq!(persistence.load().await?, Some(session.snapshot()));
//! # Ok(())
//! # }
//! ```

pub mod session;
pub mod store;

pub use session::GrocerySession;
pub use store::{Clock, GroceryListStore};
