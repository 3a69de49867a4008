//! Time-bounded interpolation of a single 3-component value.

use crate::easing::Easing;
use glam::Vec3;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Tween {
    start: Vec3,
    end: Vec3,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(start: Vec3, end: Vec3, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    pub fn start_value(&self) -> Vec3 {
        self.start
    }

    pub fn end_value(&self) -> Vec3 {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Normalized progress in \[0, 1\]. Zero-length tweens are complete at once.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0) as f32
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Current sampled value. Returns `end` bit-for-bit once finished.
    pub fn value(&self) -> Vec3 {
        if self.is_finished() {
            return self.end;
        }
        let eased = self.easing.apply(self.progress());
        self.start + (self.end - self.start) * eased
    }

    /// Advance by `dt` and return the new sampled value.
    pub fn advance(&mut self, dt: Duration) -> Vec3 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }
}

/// Subject-less tween: only tracks elapsed time against a duration.
#[derive(Clone, Debug)]
pub struct SettleTimer {
    duration: Duration,
    elapsed: Duration,
}

impl SettleTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn remaining(&self) -> Duration {
        self.duration.saturating_sub(self.elapsed)
    }
}
