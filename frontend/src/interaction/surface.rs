//! Pointer-reactive surfaces: the ambient spotlight that follows the pointer
//! over a container, the tilt-and-glow card, and the magnetic CTA button.

use super::geometry::{clamp, percent_of, Point, Rect};

pub const TILT_LIMIT_DEG: f64 = 8.0;
pub const ORIENTATION_TILT_LIMIT_DEG: f64 = 6.0;
const ORIENTATION_INPUT_LIMIT_DEG: f64 = 45.0;
const ORIENTATION_DIVISOR: f64 = 6.0;
pub const MAGNETIC_LIMIT_PX: f64 = 12.0;
const MAGNETIC_GAIN: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotlightConfig {
    pub radius_px: f64,
    /// CSS position used while the pointer is elsewhere.
    pub resting_position: &'static str,
    pub idle_opacity: f64,
    /// Vertical anchor of the initial sample, as a fraction of the height.
    pub anchor_y_ratio: f64,
    pub tint: &'static str,
}

impl SpotlightConfig {
    pub const fn card() -> Self {
        Self {
            radius_px: 360.0,
            resting_position: "50% 40%",
            idle_opacity: 0.35,
            anchor_y_ratio: 0.4,
            tint: "rgba(138, 96, 255, 0.24)",
        }
    }

    pub const fn section() -> Self {
        Self {
            radius_px: 600.0,
            resting_position: "50% 20%",
            idle_opacity: 0.55,
            anchor_y_ratio: 0.25,
            tint: "rgba(138, 96, 255, 0.25)",
        }
    }
}

impl Default for SpotlightConfig {
    fn default() -> Self {
        Self::card()
    }
}

/// Last known pointer offset inside a tracked element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub x: f64,
    pub y: f64,
    pub active: bool,
}

impl PointerSample {
    /// Inactive sample parked at the element's resting anchor.
    pub fn resting(rect: Option<Rect>, anchor_y_ratio: f64) -> Self {
        match rect {
            Some(rect) => Self {
                x: rect.width / 2.0,
                y: rect.height * anchor_y_ratio,
                active: false,
            },
            None => Self::default(),
        }
    }

    /// Returns `false` without touching the sample when the element could
    /// not be measured.
    pub fn on_pointer_move(&mut self, rect: Option<Rect>, client_x: f64, client_y: f64) -> bool {
        let Some(rect) = rect else {
            return false;
        };
        let Point { x, y } = rect.local(client_x, client_y);
        *self = Self { x, y, active: true };
        true
    }

    pub fn on_pointer_leave(&mut self) {
        self.active = false;
    }

    pub fn spotlight_style(&self, config: &SpotlightConfig) -> String {
        let (position, opacity) = if self.active {
            (format!("{}px {}px", self.x, self.y), 1.0)
        } else {
            (config.resting_position.to_string(), config.idle_opacity)
        };
        format!(
            "background: radial-gradient({}px circle at {}, {}, transparent 65%); opacity: {}; transition: opacity 220ms ease, background 150ms ease;",
            config.radius_px, position, config.tint, opacity
        )
    }
}

/// 3D tilt angles and a 2D glow origin for a card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltState {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub glow_x: f64,
    pub glow_y: f64,
}

impl Default for TiltState {
    fn default() -> Self {
        Self { rotate_x: 0.0, rotate_y: 0.0, glow_x: 50.0, glow_y: 50.0 }
    }
}

impl TiltState {
    pub fn on_pointer_move(&mut self, rect: Option<Rect>, client_x: f64, client_y: f64) -> bool {
        let Some(rect) = rect else {
            return false;
        };
        let local = rect.local(client_x, client_y);
        let center_x = rect.width / 2.0;
        let center_y = rect.height / 2.0;
        *self = Self {
            rotate_x: clamp((local.y - center_y) / center_y * -TILT_LIMIT_DEG, -TILT_LIMIT_DEG, TILT_LIMIT_DEG),
            rotate_y: clamp((local.x - center_x) / center_x * TILT_LIMIT_DEG, -TILT_LIMIT_DEG, TILT_LIMIT_DEG),
            glow_x: percent_of(local.x, rect.width),
            glow_y: percent_of(local.y, rect.height),
        };
        true
    }

    /// Angles return to level; the glow stays where it was so it does not snap.
    pub fn on_pointer_leave(&mut self) {
        self.rotate_x = 0.0;
        self.rotate_y = 0.0;
    }

    /// Device tilt on touch screens, `beta`/`gamma` in degrees.
    pub fn on_orientation(&mut self, beta: Option<f64>, gamma: Option<f64>) {
        let beta = clamp(beta.unwrap_or(0.0), -ORIENTATION_INPUT_LIMIT_DEG, ORIENTATION_INPUT_LIMIT_DEG);
        let gamma = clamp(gamma.unwrap_or(0.0), -ORIENTATION_INPUT_LIMIT_DEG, ORIENTATION_INPUT_LIMIT_DEG);
        self.rotate_x = clamp(-(beta / ORIENTATION_DIVISOR), -ORIENTATION_TILT_LIMIT_DEG, ORIENTATION_TILT_LIMIT_DEG);
        self.rotate_y = clamp(gamma / ORIENTATION_DIVISOR, -ORIENTATION_TILT_LIMIT_DEG, ORIENTATION_TILT_LIMIT_DEG);
    }

    pub fn transform_style(&self) -> String {
        format!(
            "transform: perspective(1200px) rotateX({}deg) rotateY({}deg);",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn glow_style(&self) -> String {
        format!(
            "background: radial-gradient(200px circle at {}% {}%, rgba(255, 255, 255, 0.15), transparent 70%);",
            self.glow_x, self.glow_y
        )
    }
}

/// A button that leans toward the pointer and carries a highlight under it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticOffset {
    pub x: f64,
    pub y: f64,
    pub glow_x: f64,
    pub glow_y: f64,
}

impl Default for MagneticOffset {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, glow_x: 50.0, glow_y: 50.0 }
    }
}

impl MagneticOffset {
    pub fn on_pointer_move(&mut self, rect: Option<Rect>, client_x: f64, client_y: f64) -> bool {
        let Some(rect) = rect else {
            return false;
        };
        let centered = rect.from_center(client_x, client_y);
        *self = Self {
            x: clamp(centered.x / rect.width * MAGNETIC_GAIN, -MAGNETIC_LIMIT_PX, MAGNETIC_LIMIT_PX),
            y: clamp(centered.y / rect.height * MAGNETIC_GAIN, -MAGNETIC_LIMIT_PX, MAGNETIC_LIMIT_PX),
            glow_x: percent_of(centered.x + rect.width / 2.0, rect.width),
            glow_y: percent_of(centered.y + rect.height / 2.0, rect.height),
        };
        true
    }

    pub fn on_pointer_leave(&mut self) {
        *self = Self::default();
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translate3d({}px, {}px, 0); --x: {}%; --y: {}%;",
            self.x, self.y, self.glow_x, self.glow_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Option<Rect> {
        Rect::measured(40.0, 80.0, 320.0, 180.0)
    }

    #[test]
    fn test_tilt_and_glow_stay_in_range_across_the_card() {
        let rect = card().unwrap();
        let mut tilt = TiltState::default();
        // Sweep past the edges too; pointer capture can report outside points.
        for step_x in -10..=42 {
            for step_y in -10..=28 {
                let client_x = rect.left + step_x as f64 * 8.0;
                let client_y = rect.top + step_y as f64 * 7.0;
                assert!(tilt.on_pointer_move(card(), client_x, client_y));
                assert!((-8.0..=8.0).contains(&tilt.rotate_x), "rotate_x {}", tilt.rotate_x);
                assert!((-8.0..=8.0).contains(&tilt.rotate_y), "rotate_y {}", tilt.rotate_y);
                assert!((0.0..=100.0).contains(&tilt.glow_x));
                assert!((0.0..=100.0).contains(&tilt.glow_y));
            }
        }
    }

    #[test]
    fn test_tilt_corners_hit_the_limits() {
        let rect = card().unwrap();
        let mut tilt = TiltState::default();
        tilt.on_pointer_move(card(), rect.left, rect.top);
        assert_eq!(tilt.rotate_x, 8.0);
        assert_eq!(tilt.rotate_y, -8.0);
        assert_eq!((tilt.glow_x, tilt.glow_y), (0.0, 0.0));

        tilt.on_pointer_move(card(), rect.left + rect.width, rect.top + rect.height);
        assert_eq!(tilt.rotate_x, -8.0);
        assert_eq!(tilt.rotate_y, 8.0);
        assert_eq!((tilt.glow_x, tilt.glow_y), (100.0, 100.0));
    }

    #[test]
    fn test_tilt_leave_keeps_glow() {
        let rect = card().unwrap();
        let mut tilt = TiltState::default();
        tilt.on_pointer_move(card(), rect.left + 80.0, rect.top + 45.0);
        let glow = (tilt.glow_x, tilt.glow_y);
        tilt.on_pointer_leave();
        assert_eq!((tilt.rotate_x, tilt.rotate_y), (0.0, 0.0));
        assert_eq!((tilt.glow_x, tilt.glow_y), glow);
    }

    #[test]
    fn test_unmeasured_element_is_ignored() {
        let mut tilt = TiltState::default();
        assert!(!tilt.on_pointer_move(None, 10.0, 10.0));
        assert_eq!(tilt, TiltState::default());

        let mut sample = PointerSample::default();
        assert!(!sample.on_pointer_move(Rect::measured(0.0, 0.0, 0.0, 0.0), 5.0, 5.0));
        assert!(!sample.active);
    }

    #[test]
    fn test_spotlight_tracks_then_rests() {
        let config = SpotlightConfig::card();
        let mut sample = PointerSample::resting(card(), config.anchor_y_ratio);
        assert_eq!((sample.x, sample.y, sample.active), (160.0, 72.0, false));
        assert!(sample.spotlight_style(&config).contains("at 50% 40%"));

        sample.on_pointer_move(card(), 100.0, 120.0);
        assert_eq!((sample.x, sample.y, sample.active), (60.0, 40.0, true));
        assert!(sample.spotlight_style(&config).contains("at 60px 40px"));
        assert!(sample.spotlight_style(&config).contains("opacity: 1;"));

        sample.on_pointer_leave();
        assert!(!sample.active);
        assert_eq!((sample.x, sample.y), (60.0, 40.0));
        assert!(sample.spotlight_style(&config).contains("opacity: 0.35;"));
    }

    #[test]
    fn test_orientation_tilt_is_softer_and_keeps_glow() {
        let mut tilt = TiltState { glow_x: 20.0, glow_y: 70.0, ..TiltState::default() };
        tilt.on_orientation(Some(90.0), Some(-90.0));
        assert_eq!(tilt.rotate_x, -6.0);
        assert_eq!(tilt.rotate_y, -6.0);
        tilt.on_orientation(Some(12.0), None);
        assert_eq!(tilt.rotate_x, -2.0);
        assert_eq!(tilt.rotate_y, 0.0);
        assert_eq!((tilt.glow_x, tilt.glow_y), (20.0, 70.0));
    }

    #[test]
    fn test_magnetic_offset_is_bounded() {
        let button = Rect::measured(0.0, 0.0, 220.0, 48.0);
        let mut offset = MagneticOffset::default();
        offset.on_pointer_move(button, 110.0, 24.0);
        assert_eq!((offset.x, offset.y, offset.glow_x, offset.glow_y), (0.0, 0.0, 50.0, 50.0));

        offset.on_pointer_move(button, 400.0, -200.0);
        assert_eq!((offset.x, offset.y), (12.0, -12.0));
        assert_eq!((offset.glow_x, offset.glow_y), (100.0, 0.0));

        offset.on_pointer_leave();
        assert_eq!(offset, MagneticOffset::default());
    }
}
