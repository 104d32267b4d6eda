//! Push flash timer
//!
//! A push briefly pops the message bubble. The flash runs on wall-clock
//! time, separate from the swing physics, so it lasts the same on any
//! display.

use crate::consts::PUSH_FEEDBACK_MS;

/// Tracks when the current push flash ends
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PushFeedback {
    duration_ms: f64,
    /// Timestamp (ms) the flash ends; `None` when idle
    until_ms: Option<f64>,
}

impl Default for PushFeedback {
    fn default() -> Self {
        Self::new(PUSH_FEEDBACK_MS)
    }
}

impl PushFeedback {
    pub fn new(duration_ms: f64) -> Self {
        Self {
            duration_ms,
            until_ms: None,
        }
    }

    /// Start (or restart) the flash at `now_ms`
    pub fn trigger(&mut self, now_ms: f64) {
        self.until_ms = Some(now_ms + self.duration_ms);
    }

    /// Whether the flash is showing at `now_ms`. Clears itself once expired.
    pub fn update(&mut self, now_ms: f64) -> bool {
        match self.until_ms {
            Some(until) if now_ms < until => true,
            Some(_) => {
                self.until_ms = None;
                false
            }
            None => false,
        }
    }
}
