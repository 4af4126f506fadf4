//! Timed feedback for the copy-email button: label, confetti and toast.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CopyFeedbackConfig {
    pub confetti_ms: f64,
    pub reset_ms: f64,
}

impl Default for CopyFeedbackConfig {
    fn default() -> Self {
        Self { confetti_ms: 1200.0, reset_ms: 3000.0 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CopyFeedback {
    config: CopyFeedbackConfig,
    copied: bool,
    confetti_until: Option<f64>,
    reset_at: Option<f64>,
}

impl CopyFeedback {
    pub fn new(config: CopyFeedbackConfig) -> Self {
        Self { config, ..Self::default() }
    }

    /// Shows the feedback optimistically; the clipboard write itself is
    /// best-effort. A second trigger replaces both deadlines.
    pub fn trigger(&mut self, now: f64) {
        self.copied = true;
        self.confetti_until = Some(now + self.config.confetti_ms);
        self.reset_at = Some(now + self.config.reset_ms);
    }

    pub fn poll(&mut self, now: f64) -> bool {
        let mut changed = false;
        if matches!(self.confetti_until, Some(until) if now >= until) {
            self.confetti_until = None;
            changed = true;
        }
        if matches!(self.reset_at, Some(at) if now >= at) {
            self.reset();
            changed = true;
        }
        changed
    }

    pub fn reset(&mut self) {
        self.copied = false;
        self.confetti_until = None;
        self.reset_at = None;
    }

    pub fn next_deadline(&self) -> Option<f64> {
        match (self.confetti_until, self.reset_at) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn show_confetti(&self) -> bool {
        self.confetti_until.is_some()
    }

    pub fn show_toast(&self) -> bool {
        self.copied
    }

    pub fn label(&self) -> &'static str {
        if self.copied {
            "Email copied!"
        } else {
            "Copy Email"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confetti_ends_before_toast() {
        let mut feedback = CopyFeedback::new(CopyFeedbackConfig::default());
        assert_eq!(feedback.label(), "Copy Email");
        feedback.trigger(100.0);
        assert_eq!(feedback.label(), "Email copied!");
        assert!(feedback.show_confetti() && feedback.show_toast());
        assert_eq!(feedback.next_deadline(), Some(1300.0));

        assert!(feedback.poll(1300.0));
        assert!(!feedback.show_confetti());
        assert!(feedback.show_toast());

        assert!(!feedback.poll(3099.0));
        assert!(feedback.poll(3100.0));
        assert!(!feedback.is_copied());
        assert_eq!(feedback.next_deadline(), None);
    }

    #[test]
    fn test_retrigger_extends_feedback() {
        let mut feedback = CopyFeedback::new(CopyFeedbackConfig::default());
        feedback.trigger(0.0);
        feedback.trigger(2500.0);
        assert!(!feedback.poll(3000.0));
        assert!(feedback.show_toast());
        assert!(feedback.show_confetti());
        assert!(feedback.poll(3700.0));
        assert!(feedback.poll(5500.0));
        assert!(!feedback.show_toast());
    }
}
