//! Momentum decay animation
//!
//! Post-release scrolling momentum: each frame contributes the current
//! velocity as a position delta, then multiplies the velocity by a decay
//! factor. The run settles once the magnitude drops below a floor. Decay is
//! per rendering frame rather than wall-clock scaled, matching how drag
//! velocity is sampled (pixels per ~16 ms frame).

/// A decaying velocity driving momentum scrolling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decay {
    velocity: f32,
    factor: f32,
    min_velocity: f32,
}

impl Decay {
    /// Start a decay run.
    ///
    /// `factor` is the per-frame multiplier (e.g. `0.92`); `min_velocity`
    /// the settling floor (e.g. `0.2` px/frame).
    pub fn new(velocity: f32, factor: f32, min_velocity: f32) -> Self {
        Self {
            velocity,
            factor,
            min_velocity: min_velocity.abs(),
        }
    }

    /// Whether the starting velocity is even worth a run.
    pub fn is_worth_starting(&self) -> bool {
        self.velocity.abs() >= self.min_velocity
    }

    /// Take this frame's position delta and decay the velocity.
    pub fn step(&mut self) -> f32 {
        let delta = self.velocity;
        self.velocity *= self.factor;
        delta
    }

    /// Whether the velocity has dropped below the settling floor.
    pub fn is_settled(&self) -> bool {
        self.velocity.abs() < self.min_velocity
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_after_expected_frame_count() {
        // velocity 5, factor 0.92, floor 0.2: ceil(log(0.2/5)/log(0.92)) = 39
        let mut decay = Decay::new(5.0, 0.92, 0.2);
        let mut frames = 0;
        while !decay.is_settled() {
            decay.step();
            frames += 1;
            assert!(frames < 100, "decay failed to settle");
        }
        assert_eq!(frames, 39);
    }

    #[test]
    fn below_floor_velocity_never_starts() {
        let decay = Decay::new(0.1, 0.92, 0.2);
        assert!(!decay.is_worth_starting());
        assert!(decay.is_settled());
    }

    #[test]
    fn step_returns_pre_decay_velocity() {
        let mut decay = Decay::new(10.0, 0.5, 0.2);
        assert_eq!(decay.step(), 10.0);
        assert_eq!(decay.step(), 5.0);
        assert_eq!(decay.velocity(), 2.5);
    }

    #[test]
    fn negative_velocity_decays_symmetrically() {
        let mut decay = Decay::new(-5.0, 0.92, 0.2);
        assert!(decay.is_worth_starting());
        assert!(decay.step() < 0.0);
        assert!(decay.velocity() > -5.0);
    }
}
