//! Interaction state machines behind the landing page widgets. Nothing in
//! here touches the DOM beyond measuring an element, so each machine runs
//! under plain unit tests with explicit timestamps.

pub mod carousel;
pub mod copy_feedback;
pub mod evasive;
pub mod geometry;
pub mod sticky_cta;
pub mod surface;

pub use carousel::{Slideshow, SlideshowConfig};
pub use copy_feedback::{CopyFeedback, CopyFeedbackConfig};
pub use evasive::{EvasiveConfig, EvasiveTarget, GameView, Mode};
pub use geometry::{Point, Rect, Size};
pub use sticky_cta::StickyCta;
pub use surface::{MagneticOffset, PointerSample, SpotlightConfig, TiltState};
