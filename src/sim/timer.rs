//! Countdown timer driving every timed behavior
//!
//! Durations are in milliseconds. The timer only counts down while active
//! and never leaves `[0, duration]`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    duration_ms: f32,
    remaining_ms: f32,
    active: bool,
}

impl Timer {
    /// Create a timer; `auto_start` decides whether it begins counting immediately
    pub fn new(duration_ms: f32, auto_start: bool) -> Self {
        let duration_ms = duration_ms.max(0.0);
        Self {
            duration_ms,
            remaining_ms: duration_ms,
            active: auto_start,
        }
    }

    /// Count down by `delta_ms` if active
    pub fn update(&mut self, delta_ms: f32) {
        if self.active {
            self.remaining_ms = (self.remaining_ms - delta_ms).clamp(0.0, self.duration_ms);
        }
    }

    /// True once an active timer has run out
    pub fn is_finished(&self) -> bool {
        self.active && self.remaining_ms <= 0.0
    }

    /// Restart from full duration and start counting
    pub fn activate(&mut self) {
        self.remaining_ms = self.duration_ms;
        self.active = true;
    }

    /// Restart from full duration, optionally leaving it stopped
    pub fn reset(&mut self, start_immediately: bool) {
        self.remaining_ms = self.duration_ms;
        self.active = start_immediately;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn remaining_ms(&self) -> f32 {
        self.remaining_ms
    }
}
