//! Swipe thresholds for dismissing the sidebar.

/// Minimum leftward travel, in pixels, for a swipe to close the sidebar.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Minimum leftward speed, in pixels per millisecond, for a flick to close
/// the sidebar regardless of distance.
pub const SWIPE_VELOCITY_THRESHOLD: f64 = 0.3;

/// A completed horizontal swipe over the sidebar.
///
/// Negative values point left, towards the closed position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swipe {
    /// Horizontal travel in pixels.
    pub dx: f64,
    /// Horizontal release velocity in pixels per millisecond.
    pub vx: f64,
}

impl Swipe {
    /// Returns `true` if the swipe went far enough or fast enough to the left.
    #[must_use]
    pub fn should_close(&self) -> bool {
        self.dx <= -SWIPE_THRESHOLD || self.vx <= -SWIPE_VELOCITY_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_leftward_swipe_closes() {
        assert!(Swipe { dx: -50.0, vx: 0.0 }.should_close());
        assert!(!Swipe { dx: -49.0, vx: -0.1 }.should_close());
    }

    #[test]
    fn quick_flick_closes() {
        assert!(Swipe { dx: -10.0, vx: -0.3 }.should_close());
    }

    #[test]
    fn rightward_swipe_never_closes() {
        assert!(!Swipe { dx: 200.0, vx: 2.0 }.should_close());
    }
}
