use gloo_timers::callback::Interval;

/// Periodic refresh of the workout clock and the rest timer.
///
/// The underlying browser interval is cleared when the ticker is cancelled or dropped.
pub struct Ticker {
    interval: Option<Interval>,
}

impl Ticker {
    pub fn start(period_millis: u32, callback: impl FnMut() + 'static) -> Self {
        Self {
            interval: Some(Interval::new(period_millis, callback)),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.interval.is_some()
    }

    pub fn cancel(&mut self) {
        if let Some(interval) = self.interval.take() {
            interval.cancel();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
