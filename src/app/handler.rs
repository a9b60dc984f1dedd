//! Event handling and state transition logic.
//!
//! Views translate user input and frame callbacks into [`Event`]s and pass
//! them to [`handle_event`], which applies them to [`AppState`] and reports
//! whether anything visible changed.
//!
//! # Event Types
//!
//! - **Grocery**: `AddItem`, `RemoveItem`, `ToggleItem`, `ClearChecked`,
//!   `DismissStorageError`
//! - **Sidebar**: `OpenSidebar`, `CloseSidebar`, `BackdropPressed`, `Swipe`,
//!   `Navigate`
//! - **Timing**: `Tick` advances running animations
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use ltps::app::{handle_event, AppState, Event};
//! use ltps::grocery::GrocerySession;
//! use ltps::navigation::SidebarController;
//! use ltps::storage::{GroceryPersistence, MemoryStore};
//!
//! let persistence = GroceryPersistence::new(Arc::new(MemoryStore::new()));
//! let mut state = AppState::new(GrocerySession::new(persistence), SidebarController::new());
//!
//! assert!(handle_event(&mut state, &Event::OpenSidebar)?);
//! assert!(!handle_event(&mut state, &Event::OpenSidebar)?);
//! # Ok::<(), ltps::LtpsError>(())
//! ```

use crate::app::AppState;
use crate::domain::error::Result;
use crate::navigation::Swipe;

/// Inputs from the view layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Adds an item with the given name to the grocery list.
    AddItem(String),
    /// Removes the grocery item with the given id.
    RemoveItem(String),
    /// Flips the checked state of the grocery item with the given id.
    ToggleItem(String),
    /// Removes every checked grocery item.
    ClearChecked,
    /// Hides the current storage error.
    DismissStorageError,

    /// Opens the sidebar (e.g. the menu button was pressed).
    OpenSidebar,
    /// Closes the sidebar.
    CloseSidebar,
    /// The dimmed backdrop behind the open sidebar was tapped.
    BackdropPressed,
    /// A horizontal swipe over the sidebar finished.
    Swipe(Swipe),
    /// A sidebar entry was selected.
    Navigate(String),

    /// Time has passed; advances running animations.
    Tick {
        /// Milliseconds since the previous tick.
        elapsed_ms: f64,
    },
}

/// Applies `event` to `state` and returns whether the view should re-render.
///
/// # Errors
///
/// Returns [`crate::LtpsError::Grocery`] when an item cannot be added (invalid
/// name or full list). The state is unchanged in that case.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<bool> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::AddItem(name) => {
            let item = state.grocery.add_item(name)?;
            tracing::debug!(item_id = %item.id, "item added from view");
            Ok(true)
        }
        Event::RemoveItem(id) => Ok(state.grocery.remove_item(id)),
        Event::ToggleItem(id) => Ok(state.grocery.toggle_item(id).is_some()),
        Event::ClearChecked => {
            let removed = state.grocery.clear_checked_items();
            tracing::debug!(removed, "cleared checked items from view");
            Ok(removed > 0)
        }
        Event::DismissStorageError => {
            let had_error = state.grocery.storage_error().is_some();
            state.grocery.clear_error();
            Ok(had_error)
        }
        Event::OpenSidebar => Ok(state.sidebar.open()),
        Event::CloseSidebar | Event::BackdropPressed => Ok(state.sidebar.close()),
        Event::Swipe(swipe) => Ok(state.sidebar.handle_swipe(*swipe)),
        Event::Navigate(route) => Ok(state.sidebar.navigate(route)),
        Event::Tick { elapsed_ms } => Ok(state.sidebar.tick(*elapsed_ms)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grocery::GrocerySession;
    use crate::navigation::{SidebarController, SidebarPhase};
    use crate::storage::{GroceryPersistence, MemoryStore};
    use crate::LtpsError;
    use std::sync::Arc;

    fn state() -> AppState {
        let persistence = GroceryPersistence::new(Arc::new(MemoryStore::new()));
        AppState::new(GrocerySession::new(persistence), SidebarController::new())
    }

    #[test]
    fn grocery_events_update_list() {
        let mut state = state();
        assert!(handle_event(&mut state, &Event::AddItem("Milk".into())).unwrap());
        let id = state.grocery.store().items()[0].id.clone();

        assert!(handle_event(&mut state, &Event::ToggleItem(id.clone())).unwrap());
        assert!(state.grocery.store().get(&id).unwrap().checked);

        assert!(handle_event(&mut state, &Event::ClearChecked).unwrap());
        assert!(state.grocery.store().is_empty());

        assert!(!handle_event(&mut state, &Event::RemoveItem(id)).unwrap());
    }

    #[test]
    fn invalid_item_is_reported() {
        let mut state = state();
        let err = handle_event(&mut state, &Event::AddItem("   ".into())).unwrap_err();
        assert!(matches!(err, LtpsError::Grocery(_)));
        assert!(state.grocery.store().is_empty());
    }

    #[test]
    fn sidebar_events_drive_state_machine() {
        let mut state = state();
        assert!(handle_event(&mut state, &Event::OpenSidebar).unwrap());
        assert!(handle_event(&mut state, &Event::Tick { elapsed_ms: 300.0 }).unwrap());
        assert_eq!(state.sidebar.phase(), SidebarPhase::Open);

        assert!(handle_event(&mut state, &Event::BackdropPressed).unwrap());
        assert!(!handle_event(&mut state, &Event::CloseSidebar).unwrap());
        handle_event(&mut state, &Event::Tick { elapsed_ms: 300.0 }).unwrap();
        assert!(!state.sidebar_state().is_open);
    }

    #[test]
    fn swipe_and_navigate() {
        let mut state = state();
        handle_event(&mut state, &Event::OpenSidebar).unwrap();
        handle_event(&mut state, &Event::Tick { elapsed_ms: 300.0 }).unwrap();

        assert!(handle_event(&mut state, &Event::Navigate("Recipes".into())).unwrap());
        assert_eq!(state.sidebar_state().current_route, "Recipes");
        assert_eq!(state.sidebar.phase(), SidebarPhase::AnimatingClosed);

        handle_event(&mut state, &Event::Tick { elapsed_ms: 300.0 }).unwrap();
        handle_event(&mut state, &Event::OpenSidebar).unwrap();
        handle_event(&mut state, &Event::Tick { elapsed_ms: 300.0 }).unwrap();
        let swipe = Swipe { dx: -120.0, vx: -0.5 };
        assert!(handle_event(&mut state, &Event::Swipe(swipe)).unwrap());
    }

    #[test]
    fn dismissing_without_error_needs_no_render() {
        let mut state = state();
        assert!(!handle_event(&mut state, &Event::DismissStorageError).unwrap());
    }
}
