//! Application layer coordinating state and events.
//!
//! Sits between a view layer and the grocery/navigation features:
//!
//! ```text
//! User Input → Events → handle_event → State Mutations → re-render?
//!                                            ↓
//!                                 background saves (grocery)
//! ```
//!
//! # Modules
//!
//! - [`handler`]: Event processing logic
//! - [`state`]: Central application state container

pub mod handler;
pub mod state;

pub use handler::{handle_event, Event};
pub use state::AppState;
