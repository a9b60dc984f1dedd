//! LTPs: the core of a household planning app.
//!
//! LTPs provides the state and persistence behind two app features:
//! - A grocery list with validation, capacity limits and check-off
//! - Durable storage of that list with hydration on start and auto-save
//! - An animated navigation sidebar driven by an explicit state machine
//! - Swipe and backdrop gestures for dismissing the sidebar

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  View layer (not part of this crate)                │  ← Renders state
//! └─────────────────────────────────────────────────────┘
//!                        │ Events
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event handling
//! │  - Event → state transitions                        │
//! │  - Re-render decisions                              │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌──────────────────────────┐   ┌──────────────────────────┐
//! │ Grocery (grocery/)       │   │ Navigation (navigation/) │
//! │ - List store             │   │ - Sidebar state machine  │
//! │ - Hydration + auto-save  │   │ - Easing + tweens        │
//! └──────────────────────────┘   │ - Gestures, layout       │
//!         │                      └──────────────────────────┘
//! ┌──────────────────────────┐
//! │ Storage (storage/)       │
//! │ - GroceryPersistence     │
//! │ - Key-value backends     │
//! └──────────────────────────┘
//!         │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Grocery item and list model (domain/)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber with rotating log file        │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state and event handling
//! - [`domain`]: Core domain types (items, lists, errors)
//! - [`grocery`]: Grocery list store and persisted session
//! - [`storage`]: Key-value backends and grocery persistence
//! - [`navigation`]: Sidebar animation controller and navigation items
//! - [`infrastructure`]: Data directory resolution
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! Configuration is read from a TOML document or a flat string map:
//!
//! ```toml
//! data_dir = "/home/me/.local/share/ltps"
//! storage_file = "storage.json"
//! storage_quota_bytes = 5242880
//! trace_level = "debug"
//! animation_duration_ms = 300
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configure**: build a [`Config`] (defaults, TOML or map)
//! 2. **Initialize**: [`initialize`] opens the JSON store in the data
//!    directory and builds an unhydrated [`AppState`]
//! 3. **Hydrate**: `state.hydrate().await` loads the saved grocery list and
//!    turns on auto-save
//! 4. **Run**: feed [`Event`]s to [`handle_event`]; re-render when it
//!    returns `true`, and send `Tick` events while the sidebar animates
//!
//! # Examples
//!
//! ```rust
//! use ltps::{handle_event, initialize, Config, Event};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> ltps::Result<()> {
//! let dir = tempfile::tempdir()?;
//! let config = Config {
//!     data_dir: Some(dir.path().to_path_buf()),
//!     ..Default::default()
//! };
//!
//! let mut state = initialize(&config)?;
//! state.hydrate().await;
//!
//! handle_event(&mut state, &Event::AddItem("Milk".to_string()))?;
//! handle_event(&mut state, &Event::OpenSidebar)?;
//! handle_event(&mut state, &Event::Tick { elapsed_ms: 16.0 })?;
//!
//! state.grocery.flush().await;
//! assert_eq!(state.grocery.store().len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Key Design Decisions
//!
//! ## One Owner for Grocery State
//!
//! The store is owned by a [`grocery::GrocerySession`]; views only read
//! snapshots. Saves run on the Tokio runtime in the background and never
//! block or roll back an edit; failures surface as a dismissible error.
//!
//! ## Explicit Sidebar State Machine
//!
//! The sidebar moves through `Closed → AnimatingOpen → Open →
//! AnimatingClosed → Closed`. Requests that don't fit the current phase
//! are ignored, so double taps and mid-animation requests are harmless.
//! Animations are advanced by the caller's clock through `Tick` events.

pub mod app;
pub mod domain;
pub mod grocery;
pub mod infrastructure;
pub mod navigation;
pub mod observability;
pub mod storage;

pub use app::{handle_event, AppState, Event};
pub use domain::{GroceryItem, GroceryList, LtpsError, Result};

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Deserialize;

use crate::grocery::GrocerySession;
use crate::navigation::{Easing, SidebarController, ANIMATION_DURATION_MS};
use crate::storage::{GroceryPersistence, JsonFileStore};

/// Default name of the key-value store file inside the data directory.
pub const DEFAULT_STORAGE_FILE: &str = "storage.json";

/// Application configuration.
///
/// Every field has a default, so partial TOML documents and maps are
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the store file and the log.
    ///
    /// When unset, see [`infrastructure::paths::data_dir`] for the fallbacks.
    pub data_dir: Option<PathBuf>,

    /// Store file name, relative to the data directory. Default: `"storage.json"`
    pub storage_file: String,

    /// Optional cap on stored bytes (keys plus values).
    ///
    /// Saves that would exceed it fail with a quota error. Default: unlimited
    pub storage_quota_bytes: Option<usize>,

    /// Log level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Logging is only set
    /// up by [`initialize`] when this is present.
    pub trace_level: Option<String>,

    /// Sidebar open/close duration. Default: 300
    pub animation_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_file: DEFAULT_STORAGE_FILE.to_string(),
            storage_quota_bytes: None,
            trace_level: None,
            animation_duration_ms: ANIMATION_DURATION_MS,
        }
    }
}

impl Config {
    /// Parses configuration from a flat string map.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`: String → `Option<PathBuf>` (empty values ignored)
    /// - `storage_file`: String (empty falls back to `"storage.json"`)
    /// - `storage_quota_bytes`: String → `usize` (ignored on parse error)
    /// - `trace_level`: String → `Option<String>`
    /// - `animation_duration_ms`: String → `u64` (falls back to 300 on parse error)
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use ltps::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("storage_quota_bytes".to_string(), "4096".to_string());
    /// map.insert("animation_duration_ms".to_string(), "fast".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.storage_quota_bytes, Some(4096));
    /// assert_eq!(config.animation_duration_ms, 300);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
        };

        Self {
            data_dir: non_empty("data_dir").map(PathBuf::from),
            storage_file: non_empty("storage_file")
                .map_or(defaults.storage_file, String::from),
            storage_quota_bytes: non_empty("storage_quota_bytes").and_then(|s| s.parse().ok()),
            trace_level: non_empty("trace_level").map(String::from),
            animation_duration_ms: non_empty("animation_duration_ms")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.animation_duration_ms),
        }
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`LtpsError::Config`] if the document is not valid TOML or a
    /// field has the wrong type.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| LtpsError::Config(e.to_string()))
    }
}

/// Builds the application state from configuration.
///
/// Creates an `AppState` with:
/// - Logging (if `trace_level` is set)
/// - A [`JsonFileStore`] at `<data_dir>/<storage_file>`
/// - An unhydrated grocery session over it
/// - A closed sidebar using the configured animation duration
///
/// Call [`AppState::hydrate`] afterwards, from within the Tokio runtime, to
/// load the saved list and enable auto-save.
///
/// # Errors
///
/// Returns [`LtpsError::Store`] if the store file cannot be created, read or
/// parsed.
///
/// # Side Effects
///
/// - May install the global tracing subscriber
/// - Creates the data directory if it doesn't exist
pub fn initialize(config: &Config) -> Result<AppState> {
    if config.trace_level.is_some() {
        observability::init_tracing(config);
    }

    let data_dir = infrastructure::data_dir(config);
    let store_path = data_dir.join(&config.storage_file);
    tracing::debug!(path = ?store_path, "initializing ltps");

    let store = JsonFileStore::open(store_path, config.storage_quota_bytes)?;
    let persistence = GroceryPersistence::new(Arc::new(store));

    let sidebar = SidebarController::with_animation(config.animation_duration_ms, Easing::default());

    Ok(AppState::new(GrocerySession::new(persistence), sidebar))
}
