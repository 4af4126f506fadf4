use gloo_timers::callback::Timeout;

/// Milliseconds on the page's monotonic clock.
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(web_sys::js_sys::Date::now)
}

/// One pending timeout owned by one widget. Arming always cancels whatever
/// was pending, so a slot never has two callbacks in flight.
#[derive(Default)]
pub struct TimerSlot {
    timeout: Option<Timeout>,
    deadline: Option<f64>,
}

impl TimerSlot {
    pub fn arm<F>(&mut self, delay_ms: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.timeout = Some(Timeout::new(delay_ms, callback));
    }

    /// Keeps the slot pointed at `deadline` on the `now_ms` clock. Re-arming
    /// for the deadline already pending is a no-op; `None` cancels.
    pub fn arm_at<F>(&mut self, deadline: Option<f64>, now: f64, callback: F)
    where
        F: FnOnce() + 'static,
    {
        if deadline.is_some() && deadline == self.deadline && self.timeout.is_some() {
            return;
        }
        self.cancel();
        if let Some(at) = deadline {
            let delay = (at - now).max(0.0).ceil() as u32;
            self.timeout = Some(Timeout::new(delay, callback));
            self.deadline = Some(at);
        }
    }

    /// Called from the timeout's own callback: the handle is spent, so the
    /// next `arm_at` must not mistake it for a pending one.
    pub fn fired(&mut self) {
        self.timeout = None;
        self.deadline = None;
    }

    pub fn cancel(&mut self) {
        // Dropping a gloo timeout clears it.
        drop(self.timeout.take());
        self.deadline = None;
    }
}
