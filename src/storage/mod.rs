//! Storage layer for the persisted grocery list.
//!
//! This module provides the key-value storage abstraction the app persists
//! into, two backends for it, and the grocery-specific persistence service
//! that serializes the list under a fixed key.
//!
//! # Modules
//!
//! - `backend`: [`KeyValueStore`] trait, the asynchronous key-value collaborator
//! - `memory`: in-process backend with an optional byte quota
//! - `json`: JSON file backend with atomic writes
//! - `persistence`: [`GroceryPersistence`], load/save/clear of the list

pub mod backend;
pub mod json;
pub mod memory;
pub mod persistence;

pub use backend::KeyValueStore;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use persistence::{GroceryPersistence, GROCERY_LIST_KEY};
