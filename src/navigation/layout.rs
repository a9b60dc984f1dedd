//! Geometry and layering constants for rendering the sidebar.
//!
//! These turn the controller's normalized `position` and `backdrop_opacity`
//! into concrete values a view applies.

/// Sidebar width as a fraction of the screen width.
pub const SIDEBAR_WIDTH_PERCENTAGE: f64 = 0.8;

/// Upper bound on the sidebar width, in pixels.
pub const SIDEBAR_MAX_WIDTH: f64 = 320.0;

/// Backdrop opacity when the sidebar is fully open.
pub const BACKDROP_OPACITY: f64 = 0.4;

/// Stacking order of the sidebar panel.
pub const SIDEBAR_Z_INDEX: i32 = 1000;

/// Stacking order of the backdrop, between content and sidebar.
pub const BACKDROP_Z_INDEX: i32 = 999;

/// Width of the sidebar on a screen `screen_width` pixels wide.
#[must_use]
pub fn sidebar_width(screen_width: f64) -> f64 {
    (screen_width * SIDEBAR_WIDTH_PERCENTAGE).min(SIDEBAR_MAX_WIDTH)
}

/// Horizontal offset of the panel: `-width` when closed, `0` when open.
#[must_use]
pub fn translate_x(position: f64, width: f64) -> f64 {
    -width * (1.0 - position.clamp(0.0, 1.0))
}

/// Scales a normalized backdrop value to the opacity actually drawn.
#[must_use]
pub fn visual_backdrop_opacity(backdrop: f64) -> f64 {
    backdrop.clamp(0.0, 1.0) * BACKDROP_OPACITY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_is_capped_on_wide_screens() {
        assert!((sidebar_width(375.0) - 300.0).abs() < 1e-9);
        assert!((sidebar_width(1024.0) - SIDEBAR_MAX_WIDTH).abs() < f64::EPSILON);
    }

    #[test]
    fn panel_slides_in_from_the_left() {
        assert_eq!(translate_x(0.0, 300.0), -300.0);
        assert_eq!(translate_x(1.0, 300.0), 0.0);
        assert_eq!(translate_x(0.5, 300.0), -150.0);
    }

    #[test]
    fn backdrop_scales_to_max_opacity() {
        assert!((visual_backdrop_opacity(1.0) - BACKDROP_OPACITY).abs() < f64::EPSILON);
        assert_eq!(visual_backdrop_opacity(0.0), 0.0);
    }

    #[test]
    fn sidebar_stacks_above_backdrop() {
        assert!(SIDEBAR_Z_INDEX > BACKDROP_Z_INDEX);
    }
}
