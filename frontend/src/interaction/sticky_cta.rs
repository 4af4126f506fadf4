//! Sticky call-to-action shown on narrow screens once the visitor has
//! scrolled part of the way down the page.

use super::geometry::clamp;

pub const STICKY_CTA_THRESHOLD: f64 = 0.3;
pub const RIPPLE_MS: u32 = 400;
pub const FOCUS_DELAY_MS: u32 = 600;

/// Fraction of the scrollable distance already covered. Pages that do not
/// scroll count as fully scrolled.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return 1.0;
    }
    clamp(scroll_y / scrollable, 0.0, 1.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StickyCta {
    pub visible: bool,
    pub rippling: bool,
}

impl StickyCta {
    /// Returns whether visibility flipped.
    pub fn on_scroll(&mut self, progress: f64) -> bool {
        let visible = progress > STICKY_CTA_THRESHOLD;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 800.0), 1.0);
        assert_eq!(scroll_progress(0.0, 600.0, 800.0), 1.0);
        assert_eq!(scroll_progress(300.0, 1800.0, 800.0), 0.3);
        assert_eq!(scroll_progress(-40.0, 1800.0, 800.0), 0.0);
        assert_eq!(scroll_progress(4000.0, 1800.0, 800.0), 1.0);
    }

    #[test]
    fn test_visibility_flips_past_threshold() {
        let mut cta = StickyCta::default();
        assert!(!cta.on_scroll(0.3));
        assert!(!cta.visible);
        assert!(cta.on_scroll(0.31));
        assert!(cta.visible);
        assert!(!cta.on_scroll(0.9));
        assert!(cta.on_scroll(0.1));
        assert!(!cta.visible);
    }
}
