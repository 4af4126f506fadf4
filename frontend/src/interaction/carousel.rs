//! Auto-advancing slideshow that holds still while hovered or focused.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideshowConfig {
    pub advance_ms: f64,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self { advance_ms: 5000.0 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Slideshow {
    config: SlideshowConfig,
    current: usize,
    len: usize,
    hovered: bool,
    focused: bool,
    advance_at: Option<f64>,
}

impl Slideshow {
    pub fn new(len: usize, config: SlideshowConfig, now: f64) -> Self {
        let mut slideshow = Self {
            config,
            current: 0,
            len,
            hovered: false,
            focused: false,
            advance_at: None,
        };
        slideshow.reschedule(now);
        slideshow
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_paused(&self) -> bool {
        self.hovered || self.focused
    }

    pub fn next_deadline(&self) -> Option<f64> {
        self.advance_at
    }

    fn reschedule(&mut self, now: f64) {
        self.advance_at = if self.len > 1 && !self.is_paused() {
            Some(now + self.config.advance_ms)
        } else {
            None
        };
    }

    /// Jumps to `index`, wrapping out-of-range values, and restarts the
    /// countdown.
    pub fn go_to(&mut self, index: isize, now: f64) {
        if self.len == 0 {
            return;
        }
        let len = self.len as isize;
        self.current = index.rem_euclid(len) as usize;
        self.reschedule(now);
    }

    pub fn next(&mut self, now: f64) {
        self.go_to(self.current as isize + 1, now);
    }

    pub fn previous(&mut self, now: f64) {
        self.go_to(self.current as isize - 1, now);
    }

    /// Arrow-key navigation. Returns `true` when the key was consumed.
    pub fn on_key(&mut self, key: &str, now: f64) -> bool {
        match key {
            "ArrowRight" => {
                self.next(now);
                true
            }
            "ArrowLeft" => {
                self.previous(now);
                true
            }
            _ => false,
        }
    }

    pub fn on_pointer_enter(&mut self, now: f64) {
        self.hovered = true;
        self.reschedule(now);
    }

    pub fn on_pointer_leave(&mut self, now: f64) {
        self.hovered = false;
        self.reschedule(now);
    }

    pub fn on_focus_in(&mut self, now: f64) {
        self.focused = true;
        self.reschedule(now);
    }

    /// `into_carousel` is true when focus moved to another element inside
    /// the carousel, which keeps it paused.
    pub fn on_focus_out(&mut self, into_carousel: bool, now: f64) {
        if into_carousel {
            return;
        }
        self.focused = false;
        self.reschedule(now);
    }

    /// Advances when the countdown has run out. Returns whether it did.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.advance_at {
            Some(at) if now >= at => {
                self.next(now);
                true
            }
            _ => false,
        }
    }

    /// Signed distance from the current slide, taking the short way round.
    pub fn offset_of(&self, index: usize) -> isize {
        if self.len == 0 {
            return 0;
        }
        let len = self.len as isize;
        let mut offset = index as isize - self.current as isize;
        if offset * 2 > len {
            offset -= len;
        }
        if offset * 2 < -len {
            offset += len;
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three(now: f64) -> Slideshow {
        Slideshow::new(3, SlideshowConfig::default(), now)
    }

    #[test]
    fn test_advances_every_interval_and_wraps() {
        let mut slides = three(0.0);
        assert_eq!(slides.next_deadline(), Some(5000.0));
        assert!(!slides.poll(4999.0));
        assert!(slides.poll(5000.0));
        assert_eq!(slides.current(), 1);
        assert!(slides.poll(10_000.0));
        assert!(slides.poll(15_000.0));
        assert_eq!(slides.current(), 0);
    }

    #[test]
    fn test_hover_and_focus_pause() {
        let mut slides = three(0.0);
        slides.on_pointer_enter(1000.0);
        assert!(slides.is_paused());
        assert_eq!(slides.next_deadline(), None);
        assert!(!slides.poll(60_000.0));

        slides.on_focus_in(2000.0);
        slides.on_pointer_leave(3000.0);
        assert!(slides.is_paused());

        slides.on_focus_out(true, 4000.0);
        assert!(slides.is_paused());

        slides.on_focus_out(false, 4000.0);
        assert!(!slides.is_paused());
        assert_eq!(slides.next_deadline(), Some(9000.0));
    }

    #[test]
    fn test_manual_navigation_restarts_countdown() {
        let mut slides = three(0.0);
        slides.go_to(2, 4000.0);
        assert_eq!(slides.current(), 2);
        assert_eq!(slides.next_deadline(), Some(9000.0));
        assert!(!slides.poll(5000.0));

        slides.go_to(-1, 4500.0);
        assert_eq!(slides.current(), 2);
        slides.go_to(7, 4500.0);
        assert_eq!(slides.current(), 1);
    }

    #[test]
    fn test_arrow_keys() {
        let mut slides = three(0.0);
        assert!(slides.on_key("ArrowLeft", 0.0));
        assert_eq!(slides.current(), 2);
        assert!(slides.on_key("ArrowRight", 0.0));
        assert_eq!(slides.current(), 0);
        assert!(!slides.on_key("Enter", 0.0));
        assert_eq!(slides.current(), 0);
    }

    #[test]
    fn test_offsets_take_the_short_way() {
        let mut slides = three(0.0);
        assert_eq!(slides.offset_of(0), 0);
        assert_eq!(slides.offset_of(1), 1);
        assert_eq!(slides.offset_of(2), -1);
        slides.go_to(2, 0.0);
        assert_eq!(slides.offset_of(0), 1);
        assert_eq!(slides.offset_of(1), -1);
    }

    #[test]
    fn test_single_or_empty_never_schedules() {
        let mut one = Slideshow::new(1, SlideshowConfig::default(), 0.0);
        assert_eq!(one.next_deadline(), None);
        one.next(10.0);
        assert_eq!(one.current(), 0);

        let mut none = Slideshow::new(0, SlideshowConfig::default(), 0.0);
        none.next(10.0);
        none.on_key("ArrowLeft", 0.0);
        assert_eq!(none.current(), 0);
        assert_eq!(none.offset_of(3), 0);
    }
}
