//! Leading-edge rate limiting for user-triggered actions.

use std::time::{Duration, Instant};

/// Lets the first call through immediately, then suppresses every call that
/// lands inside `window` of the last accepted one. Suppressed calls are dropped,
/// never replayed.
#[derive(Debug, Clone)]
pub struct LeadingThrottle {
    window: Duration,
    last_fired: Option<Instant>,
}

impl LeadingThrottle {
    pub fn new(window: Duration) -> Self {
        Self { window, last_fired: None }
    }

    /// Try to pass the gate at `now`. Returns `true` when the caller may proceed.
    pub fn try_acquire_at(&mut self, now: Instant) -> bool {
        match self.last_fired {
            Some(last) if now.saturating_duration_since(last) < self.window => false,
            _ => {
                self.last_fired = Some(now);
                true
            }
        }
    }
}
