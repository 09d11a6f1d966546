//! Visibility gate for the feature carousel
//!
//! Two independent heuristics decide whether wheel input belongs to the
//! carousel:
//! - an `IntersectionObserver` flag, updated asynchronously by the browser
//! - a per-event check that the carousel's center sits close to the viewport center
//!
//! Both must pass. The observer is tuned so that a carousel merely peeking in
//! at the edge of the screen does not capture the page scroll.

/// Intersection ratios at which the browser reports observer entries
pub const OBSERVER_THRESHOLDS: [f64; 3] = [0.5, 0.7, 0.9];

/// Root margin shrinking the observed viewport by 10% at top and bottom
pub const OBSERVER_ROOT_MARGIN: &str = "-10% 0px -10% 0px";

/// Intersection ratio that must be exceeded to count as "in view"
pub const MIN_INTERSECTION_RATIO: f64 = 0.7;

/// Maximum distance between carousel center and viewport center,
/// as a fraction of the viewport height
pub const MAX_CENTER_OFFSET_RATIO: f64 = 0.2;

/// Interpret an intersection observer entry.
///
/// The ratio comparison is strict: an entry reported at exactly 0.7 is not in view.
pub fn is_in_view(is_intersecting: bool, intersection_ratio: f64) -> bool {
    is_intersecting && intersection_ratio > MIN_INTERSECTION_RATIO
}

/// Position of the carousel relative to the viewport, sampled per wheel event
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Top of the carousel's bounding box, relative to the viewport
    pub top: f64,
    /// Height of the carousel's bounding box
    pub height: f64,
    /// `window.innerHeight`
    pub viewport_height: f64,
}

impl Placement {
    pub fn new(top: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            top,
            height,
            viewport_height,
        }
    }

    /// Vertical distance between the carousel center and the viewport center
    pub fn center_offset(&self) -> f64 {
        let component_center = self.top + self.height / 2.0;
        let viewport_center = self.viewport_height / 2.0;
        (component_center - viewport_center).abs()
    }

    /// Whether the carousel is close enough to the viewport center to take wheel input
    pub fn is_centered(&self) -> bool {
        self.center_offset() <= self.viewport_height * MAX_CENTER_OFFSET_RATIO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_view_requires_intersection() {
        assert!(!is_in_view(false, 1.0));
        assert!(is_in_view(true, 0.9));
    }

    #[test]
    fn test_in_view_ratio_is_strict() {
        assert!(!is_in_view(true, 0.5));
        assert!(!is_in_view(true, 0.7));
        assert!(is_in_view(true, 0.71));
    }

    #[test]
    fn test_centered_placement() {
        // 600px carousel exactly centered in a 1000px viewport
        let placement = Placement::new(200.0, 600.0, 1000.0);
        assert_eq!(placement.center_offset(), 0.0);
        assert!(placement.is_centered());
    }

    #[test]
    fn test_offset_at_limit_is_centered() {
        // center at 700, viewport center at 500: offset 200 == 20% of 1000
        let placement = Placement::new(400.0, 600.0, 1000.0);
        assert_eq!(placement.center_offset(), 200.0);
        assert!(placement.is_centered());
    }

    #[test]
    fn test_offset_beyond_limit_is_rejected() {
        let below = Placement::new(401.0, 600.0, 1000.0);
        assert!(!below.is_centered());

        let above = Placement::new(-1.0, 200.0, 1000.0);
        assert!(above.center_offset() > 200.0);
        assert!(!above.is_centered());
    }

    #[test]
    fn test_large_element_at_screen_edge_is_rejected() {
        // A 2000px element whose top edge is at the viewport top covers the whole
        // screen, yet its center is far below the viewport center.
        let placement = Placement::new(0.0, 2000.0, 800.0);
        assert!(!placement.is_centered());
    }
}
