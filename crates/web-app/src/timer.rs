use chrono::{DateTime, Duration, Utc};

use liftlog_domain::RestTime;

/// Seconds added to a running rest timer by a single request of the user.
pub const DEFAULT_EXTENSION: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Finished,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    #[default]
    Unset,
    Active {
        target_time: DateTime<Utc>,
        total: u32,
    },
}

/// Countdown of the rest between two sets.
///
/// The timer is driven by wall-clock instants passed in by the caller, so that a delayed or
/// skipped refresh does not distort the remaining time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RestTimer {
    state: TimerState,
}

impl RestTimer {
    /// Start a countdown, replacing a countdown in progress.
    pub fn start(&mut self, duration: RestTime, now: DateTime<Utc>) {
        let total = u32::from(duration);
        self.state = TimerState::Active {
            target_time: now + Duration::seconds(i64::from(total)),
            total,
        };
    }

    #[must_use]
    pub fn state(&self) -> TimerState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        matches!(self.state, TimerState::Active { .. })
    }

    /// Remaining time in whole seconds, rounded up.
    #[must_use]
    pub fn remaining(&self, now: DateTime<Utc>) -> u32 {
        match self.state {
            TimerState::Unset => 0,
            TimerState::Active { target_time, .. } => {
                let millis = (target_time - now).num_milliseconds();
                u32::try_from((millis + 999) / 1000).unwrap_or(0)
            }
        }
    }

    /// Share of the total rest time still remaining, from 1.0 at the start down to 0.0.
    #[must_use]
    pub fn progress(&self, now: DateTime<Utc>) -> f64 {
        match self.state {
            TimerState::Unset => 0.0,
            TimerState::Active { target_time, total } => {
                if total == 0 {
                    return 0.0;
                }
                #[allow(clippy::cast_precision_loss)]
                let remaining = (target_time - now).num_milliseconds() as f64;
                (remaining / (f64::from(total) * 1000.0)).clamp(0.0, 1.0)
            }
        }
    }

    /// Extend a running countdown. Without a running countdown the request is ignored.
    pub fn add_time(&mut self, seconds: u32) {
        if let TimerState::Active { target_time, total } = self.state {
            self.state = TimerState::Active {
                target_time: target_time + Duration::seconds(i64::from(seconds)),
                total: total.saturating_add(seconds),
            };
        }
    }

    pub fn cancel(&mut self) {
        self.state = TimerState::Unset;
    }

    /// Advance the timer to `now`.
    ///
    /// Returns `TimerEvent::Finished` once when the countdown expires. The timer is unset
    /// afterwards, so later calls do not repeat the event.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<TimerEvent> {
        match self.state {
            TimerState::Active { target_time, .. } if now >= target_time => {
                self.state = TimerState::Unset;
                Some(TimerEvent::Finished)
            }
            _ => None,
        }
    }
}
