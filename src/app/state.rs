//! Application state container.
//!
//! [`AppState`] holds the two independent features the view renders: the
//! persisted grocery list and the navigation sidebar. It is the single
//! source of truth for both; views read snapshots from it and send
//! [`crate::app::Event`]s to change it.

use crate::grocery::GrocerySession;
use crate::navigation::{SidebarController, SidebarState};

/// Central application state.
#[derive(Debug)]
pub struct AppState {
    /// Grocery list with hydration and auto-save.
    pub grocery: GrocerySession,

    /// Navigation sidebar state machine.
    pub sidebar: SidebarController,
}

impl AppState {
    /// Creates application state from its parts.
    #[must_use]
    pub const fn new(grocery: GrocerySession, sidebar: SidebarController) -> Self {
        Self { grocery, sidebar }
    }

    /// Loads the persisted grocery list. Call once after construction, from
    /// within the Tokio runtime.
    ///
    /// Returns `false` if the list was already hydrated.
    pub async fn hydrate(&mut self) -> bool {
        self.grocery.hydrate().await
    }

    /// Snapshot of the sidebar for rendering.
    #[must_use]
    pub fn sidebar_state(&self) -> SidebarState {
        self.sidebar.state()
    }
}
