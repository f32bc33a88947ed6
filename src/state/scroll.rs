/// Scroll offset, in pixels, past which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// Pixels the gallery strip moves per prev/next press.
pub const GALLERY_SCROLL_STEP: f64 = 340.0;

/// Strictly past the threshold; exactly 300 keeps the button hidden.
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryDirection {
    Prev,
    Next,
}

/// Target offset for one gallery step from `current`. Clamping to the strip's
/// real scroll range is left to the browser.
pub fn gallery_target(current: f64, direction: GalleryDirection) -> f64 {
    match direction {
        GalleryDirection::Prev => current - GALLERY_SCROLL_STEP,
        GalleryDirection::Next => current + GALLERY_SCROLL_STEP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_boundary_at_300() {
        assert!(!back_to_top_visible(299.0));
        assert!(!back_to_top_visible(300.0));
        assert!(back_to_top_visible(301.0));
    }

    #[test]
    fn gallery_steps_by_fixed_increment() {
        assert_eq!(gallery_target(0.0, GalleryDirection::Next), 340.0);
        assert_eq!(gallery_target(500.0, GalleryDirection::Prev), 160.0);
        // Negative targets are fine; the browser clamps them to zero.
        assert_eq!(gallery_target(100.0, GalleryDirection::Prev), -240.0);
    }
}
