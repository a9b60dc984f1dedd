//! Navigation sidebar.
//!
//! # Modules
//!
//! - [`sidebar`]: the open/close state machine and its controller
//! - [`animation`]: easing curves and tweens driving the transition
//! - [`gesture`]: swipe-to-close thresholds
//! - [`layout`]: width, offset, opacity and layering for rendering
//! - [`items`]: the screens listed in the sidebar
//!
//! # Example
//!
//! ```
//! use ltps::navigation::{SidebarController, SidebarPhase};
//!
//! let mut sidebar = SidebarController::new();
//! assert!(sidebar.open());
//! assert!(!sidebar.open()); // already animating
//!
//! while sidebar.phase().is_animating() {
//!     sidebar.tick(16.0);
//! }
//! assert_eq!(sidebar.phase(), SidebarPhase::Open);
//! ```

pub mod animation;
pub mod gesture;
pub mod items;
pub mod layout;
pub mod sidebar;

pub use animation::{Easing, Tween, ANIMATION_DURATION_MS};
pub use gesture::{Swipe, SWIPE_THRESHOLD, SWIPE_VELOCITY_THRESHOLD};
pub use items::{find_by_route, NavigationItem, DEFAULT_ROUTE, NAVIGATION_ITEMS};
pub use sidebar::{SidebarController, SidebarEvent, SidebarPhase, SidebarState};
