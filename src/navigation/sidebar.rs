//! Sidebar open/close state machine.
//!
//! The sidebar is always in one of four [`SidebarPhase`]s:
//!
//! ```text
//!            open()                 animation completes
//! Closed ─────────────► AnimatingOpen ─────────────────► Open
//!   ▲                                                     │
//!   │    animation completes                 close()      │
//!   └──────────────────── AnimatingClosed ◄───────────────┘
//! ```
//!
//! Transition rules live in [`SidebarPhase::transition`], which is pure.
//! [`SidebarController`] owns the phase plus the two animated channels
//! (panel position and backdrop opacity) and advances them when the view
//! calls [`SidebarController::tick`]. While a transition is in flight,
//! `open()` and `close()` are ignored; an in-flight transition is never
//! aborted.

use super::animation::{Easing, Tween, ANIMATION_DURATION_MS};
use super::gesture::Swipe;
use super::items::{find_by_route, DEFAULT_ROUTE};

/// Logical state of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarPhase {
    /// Off-screen and idle.
    #[default]
    Closed,
    /// Sliding in.
    AnimatingOpen,
    /// Fully visible and idle.
    Open,
    /// Sliding out.
    AnimatingClosed,
}

/// Inputs to the sidebar state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEvent {
    /// The user asked to open the sidebar.
    Open,
    /// The user asked to close the sidebar.
    Close,
    /// The running transition reached its target.
    AnimationComplete,
}

impl SidebarPhase {
    /// Returns the phase reached by applying `event`, or `None` if the event
    /// is ignored in this phase.
    #[must_use]
    pub const fn transition(self, event: SidebarEvent) -> Option<Self> {
        match (self, event) {
            (Self::Closed, SidebarEvent::Open) => Some(Self::AnimatingOpen),
            (Self::Open, SidebarEvent::Close) => Some(Self::AnimatingClosed),
            (Self::AnimatingOpen, SidebarEvent::AnimationComplete) => Some(Self::Open),
            (Self::AnimatingClosed, SidebarEvent::AnimationComplete) => Some(Self::Closed),
            _ => None,
        }
    }

    /// Returns `true` while a transition is running.
    #[must_use]
    pub const fn is_animating(self) -> bool {
        matches!(self, Self::AnimatingOpen | Self::AnimatingClosed)
    }

    /// Returns `true` unless the sidebar is fully closed.
    ///
    /// A closing sidebar still counts as open until its animation completes.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Closed)
    }
}

/// Immutable view of the sidebar for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SidebarState {
    /// Open, opening, or closing.
    pub is_open: bool,
    /// A transition is in flight; new transitions are ignored.
    pub is_animating: bool,
    /// Panel position in `[0, 1]`, 0 fully closed and 1 fully open.
    pub position: f64,
    /// Backdrop opacity in `[0, 1]`, before scaling by
    /// [`super::layout::BACKDROP_OPACITY`].
    pub backdrop_opacity: f64,
    /// Route of the screen currently shown.
    pub current_route: String,
}

/// The running transition: both channels share one clock.
#[derive(Debug, Clone)]
struct Transition {
    position: Tween,
    backdrop: Tween,
}

/// Drives the sidebar phase and its animated values.
#[derive(Debug, Clone)]
pub struct SidebarController {
    phase: SidebarPhase,
    position: f64,
    backdrop_opacity: f64,
    transition: Option<Transition>,
    duration_ms: u64,
    easing: Easing,
    current_route: String,
}

impl Default for SidebarController {
    fn default() -> Self {
        Self::new()
    }
}

impl SidebarController {
    /// Creates a closed sidebar with the standard duration and ease curve.
    #[must_use]
    pub fn new() -> Self {
        Self::with_animation(ANIMATION_DURATION_MS, Easing::default())
    }

    /// Creates a closed sidebar with a custom transition duration and curve.
    #[must_use]
    pub fn with_animation(duration_ms: u64, easing: Easing) -> Self {
        Self {
            phase: SidebarPhase::Closed,
            position: 0.0,
            backdrop_opacity: 0.0,
            transition: None,
            duration_ms,
            easing,
            current_route: DEFAULT_ROUTE.to_string(),
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> SidebarPhase {
        self.phase
    }

    /// Starts opening. Returns `false` (and does nothing) unless closed.
    pub fn open(&mut self) -> bool {
        self.dispatch(SidebarEvent::Open)
    }

    /// Starts closing. Returns `false` (and does nothing) unless open.
    pub fn close(&mut self) -> bool {
        self.dispatch(SidebarEvent::Close)
    }

    /// Advances the running transition by `elapsed_ms`.
    ///
    /// Returns `true` if any animated value or the phase changed. When the
    /// transition reaches its target the phase settles on `Open` or `Closed`.
    pub fn tick(&mut self, elapsed_ms: f64) -> bool {
        let Some(transition) = self.transition.as_mut() else {
            return false;
        };

        let before = (self.position, self.backdrop_opacity);
        self.position = transition.position.advance(elapsed_ms);
        self.backdrop_opacity = transition.backdrop.advance(elapsed_ms);
        let finished = transition.position.is_finished() && transition.backdrop.is_finished();

        if finished {
            self.dispatch(SidebarEvent::AnimationComplete);
            return true;
        }

        before != (self.position, self.backdrop_opacity)
    }

    /// Closes the sidebar if `swipe` went far or fast enough to the left.
    pub fn handle_swipe(&mut self, swipe: Swipe) -> bool {
        if !swipe.should_close() {
            return false;
        }
        self.close()
    }

    /// Switches to `route` and closes the sidebar.
    ///
    /// Returns `false` and changes nothing if `route` is not a known
    /// navigation entry.
    pub fn navigate(&mut self, route: &str) -> bool {
        if find_by_route(route).is_none() {
            tracing::debug!(route = %route, "ignoring unknown route");
            return false;
        }

        self.current_route = route.to_string();
        self.close();
        true
    }

    /// Route of the screen currently shown.
    #[must_use]
    pub fn current_route(&self) -> &str {
        &self.current_route
    }

    /// Snapshot of everything a view needs to render the sidebar.
    #[must_use]
    pub fn state(&self) -> SidebarState {
        SidebarState {
            is_open: self.phase.is_open(),
            is_animating: self.phase.is_animating(),
            position: self.position,
            backdrop_opacity: self.backdrop_opacity,
            current_route: self.current_route.clone(),
        }
    }

    fn dispatch(&mut self, event: SidebarEvent) -> bool {
        let Some(next) = self.phase.transition(event) else {
            tracing::trace!(phase = ?self.phase, event = ?event, "sidebar event ignored");
            return false;
        };

        tracing::debug!(from = ?self.phase, to = ?next, "sidebar transition");
        self.phase = next;

        match next {
            SidebarPhase::AnimatingOpen => self.start_transition(1.0),
            SidebarPhase::AnimatingClosed => self.start_transition(0.0),
            SidebarPhase::Open | SidebarPhase::Closed => {
                if let Some(transition) = self.transition.take() {
                    self.position = transition.position.target();
                    self.backdrop_opacity = transition.backdrop.target();
                }
            }
        }
        true
    }

    fn start_transition(&mut self, target: f64) {
        self.transition = Some(Transition {
            position: Tween::new(self.position, target, self.duration_ms, self.easing),
            backdrop: Tween::new(self.backdrop_opacity, target, self.duration_ms, self.easing),
        });
    }
}
