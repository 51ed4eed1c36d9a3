//! Scroll position controller
//!
//! Owns the authoritative scroll offset. Every write path (drag, inertia,
//! thumb, track click, programmatic stepping, adopted native scrolls) goes
//! through [`ScrollPosition::set`], so the clamp to `[0, max_scroll]` holds
//! at every observable point. Out-of-range requests are clamped silently,
//! never an error.

/// Clamped scroll offset plus its current upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollPosition {
    position: f32,
    max_scroll: f32,
}

impl ScrollPosition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> f32 {
        self.position
    }

    pub fn max_scroll(&self) -> f32 {
        self.max_scroll
    }

    /// Clamp-and-set. Returns the position actually stored.
    pub fn set(&mut self, x: f32) -> f32 {
        self.position = x.clamp(0.0, self.max_scroll);
        self.position
    }

    /// Relative move through the same clamp.
    pub fn by(&mut self, delta: f32) -> f32 {
        self.set(self.position + delta)
    }

    /// Install a new upper bound and re-clamp the position into it.
    ///
    /// Geometry changes call this; a position beyond the new bound snaps
    /// back inside rather than lingering out of range.
    pub fn set_max_scroll(&mut self, max_scroll: f32) {
        self.max_scroll = max_scroll.max(0.0);
        self.position = self.position.clamp(0.0, self.max_scroll);
    }

    /// Normalized progress through the scroll range, divisor floored at 1.
    pub fn progress(&self) -> f32 {
        (self.position / self.max_scroll.max(1.0)).clamp(0.0, 1.0)
    }

    pub fn at_start(&self) -> bool {
        self.position <= 0.0
    }

    pub fn at_end(&self) -> bool {
        self.position >= self.max_scroll
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clamps_both_ends() {
        let mut scroll = ScrollPosition::new();
        scroll.set_max_scroll(2000.0);

        assert_eq!(scroll.set(-50.0), 0.0);
        assert_eq!(scroll.set(2500.0), 2000.0);
        assert_eq!(scroll.set(1000.0), 1000.0);
    }

    #[test]
    fn shrinking_the_bound_reclamps_position() {
        let mut scroll = ScrollPosition::new();
        scroll.set_max_scroll(2000.0);
        scroll.set(1800.0);

        scroll.set_max_scroll(500.0);
        assert_eq!(scroll.get(), 500.0);
        assert!(scroll.at_end());
    }

    #[test]
    fn progress_is_defined_with_zero_range() {
        let mut scroll = ScrollPosition::new();
        scroll.set_max_scroll(0.0);
        scroll.set(0.0);

        assert_eq!(scroll.progress(), 0.0);
        assert!(scroll.at_start());
        assert!(scroll.at_end());
    }

    #[test]
    fn negative_bound_is_treated_as_zero() {
        let mut scroll = ScrollPosition::new();
        scroll.set_max_scroll(-10.0);
        assert_eq!(scroll.max_scroll(), 0.0);
        assert_eq!(scroll.set(5.0), 0.0);
    }

    #[test]
    fn relative_moves_accumulate_and_clamp() {
        let mut scroll = ScrollPosition::new();
        scroll.set_max_scroll(100.0);
        assert_eq!(scroll.by(60.0), 60.0);
        assert_eq!(scroll.by(60.0), 100.0);
        assert_eq!(scroll.by(-250.0), 0.0);
    }
}
