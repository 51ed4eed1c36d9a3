//! Time-eased value animation
//!
//! A [`Tween`] runs from one value to another over a fixed duration with an
//! easing curve, advanced by explicit frame deltas. The scroll controller
//! uses it for smooth "scroll by N items" paging; any new interaction just
//! drops the tween, which is the whole cancellation story.

use crate::easing::Easing;

/// An in-flight eased transition between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration_ms: f32,
    elapsed_ms: f32,
    easing: Easing,
}

impl Tween {
    /// Start a tween. Durations at or below zero complete on the first
    /// advance.
    pub fn new(from: f32, to: f32, duration_ms: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms: duration_ms.max(0.0),
            elapsed_ms: 0.0,
            easing,
        }
    }

    /// The destination value.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Current eased value.
    pub fn value(&self) -> f32 {
        if self.is_finished() {
            return self.to;
        }
        let t = self.elapsed_ms / self.duration_ms;
        self.from + (self.to - self.from) * self.easing.eval(t)
    }

    /// Advance by a frame delta and return the new value.
    pub fn advance(&mut self, dt_ms: f32) -> f32 {
        self.elapsed_ms += dt_ms.max(0.0);
        self.value()
    }

    pub fn is_finished(&self) -> bool {
        self.duration_ms <= 0.0 || self.elapsed_ms >= self.duration_ms
    }
}
