//! Easing curves and time-driven tweens for sidebar transitions.
//!
//! A [`Tween`] moves one value from a start to a target over a fixed duration.
//! It has no clock of its own: the owner advances it with elapsed
//! milliseconds, typically from a frame callback or timer.

/// Duration of a sidebar open/close transition, in milliseconds.
pub const ANIMATION_DURATION_MS: u64 = 300;

/// Control points of the default ease curve, `cubic-bezier(0.25, 0.1, 0.25, 1)`.
pub const EASE_CONTROL_POINTS: (f64, f64, f64, f64) = (0.25, 0.1, 0.25, 1.0);

const NEWTON_ITERATIONS: usize = 8;
const BISECTION_ITERATIONS: usize = 32;
const SOLVE_EPSILON: f64 = 1e-7;

/// Maps linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Output equals input.
    Linear,
    /// CSS-style cubic Bézier through `(0,0)`, `(x1,y1)`, `(x2,y2)`, `(1,1)`.
    CubicBezier {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
}

impl Default for Easing {
    fn default() -> Self {
        let (x1, y1, x2, y2) = EASE_CONTROL_POINTS;
        Self::CubicBezier { x1, y1, x2, y2 }
    }
}

impl Easing {
    /// Applies the curve to `progress`, clamped to `[0, 1]`.
    ///
    /// The endpoints are exact: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.
    #[must_use]
    pub fn apply(&self, progress: f64) -> f64 {
        let t = progress.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t <= 0.0 || t >= 1.0 {
                    return t;
                }
                let curve_x = BezierAxis::new(x1, x2);
                let curve_y = BezierAxis::new(y1, y2);
                curve_y.sample(curve_x.solve(t))
            }
        }
    }
}

/// One axis of a unit cubic Bézier in polynomial form.
struct BezierAxis {
    a: f64,
    b: f64,
    c: f64,
}

impl BezierAxis {
    fn new(p1: f64, p2: f64) -> Self {
        let c = 3.0 * p1;
        let b = 3.0 * (p2 - p1) - c;
        let a = 1.0 - c - b;
        Self { a, b, c }
    }

    fn sample(&self, t: f64) -> f64 {
        ((self.a * t + self.b) * t + self.c) * t
    }

    fn slope(&self, t: f64) -> f64 {
        (3.0 * self.a * t + 2.0 * self.b) * t + self.c
    }

    /// Finds the curve parameter whose sample equals `x`.
    ///
    /// Newton's method first, bisection if it fails to converge.
    fn solve(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let error = self.sample(t) - x;
            if error.abs() < SOLVE_EPSILON {
                return t;
            }
            let slope = self.slope(t);
            if slope.abs() < 1e-6 {
                break;
            }
            t -= error / slope;
        }

        let (mut low, mut high) = (0.0, 1.0);
        t = x;
        for _ in 0..BISECTION_ITERATIONS {
            let value = self.sample(t);
            if (value - x).abs() < SOLVE_EPSILON {
                break;
            }
            if value < x {
                low = t;
            } else {
                high = t;
            }
            t = (low + high) / 2.0;
        }
        t
    }
}

/// Interpolates a single value over time.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f64,
    to: f64,
    duration_ms: f64,
    elapsed_ms: f64,
    easing: Easing,
}

impl Tween {
    /// Creates a tween from `from` to `to` lasting `duration_ms`.
    #[must_use]
    pub fn new(from: f64, to: f64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms as f64,
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// Advances time by `delta_ms` and returns the new value.
    ///
    /// Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, delta_ms: f64) -> f64 {
        if delta_ms.is_finite() && delta_ms > 0.0 {
            self.elapsed_ms = (self.elapsed_ms + delta_ms).min(self.duration_ms);
        }
        self.value()
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Current interpolated value. Exactly `to` once finished.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_finished() {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(self.progress())
    }

    /// Returns `true` once the full duration has elapsed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Target value.
    #[must_use]
    pub const fn target(&self) -> f64 {
        self.to
    }
}
