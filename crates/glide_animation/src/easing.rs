//! Easing functions
//!
//! Maps normalized time `t in [0, 1]` onto eased progress. The cubic-bezier
//! variant matches CSS timing functions: the curve runs from (0,0) to (1,1)
//! with two control points, `x` is time and `y` is progress, and evaluation
//! solves the parametric form for `x = t` before reading `y`.

/// A timing curve the animators can evaluate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    Linear,
    /// Cubic ease-out: fast start, gentle settle.
    EaseOutCubic,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Default for Easing {
    fn default() -> Self {
        Easing::EaseOutCubic
    }
}

impl Easing {
    /// Evaluate eased progress at normalized time `t`.
    ///
    /// `t` is clamped to `[0, 1]`; eased output may overshoot that range for
    /// bezier curves with control points outside it.
    pub fn eval(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseOutCubic => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::CubicBezier { x1, y1, x2, y2 } => bezier_progress(t, x1, y1, x2, y2),
        }
    }
}

/// One-dimensional cubic bezier through (0, 0), (p1, p2), (1, 1).
fn bezier_axis(t: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - t;
    3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t
}

fn bezier_axis_derivative(t: f32, p1: f32, p2: f32) -> f32 {
    let inv = 1.0 - t;
    3.0 * inv * inv * p1 + 6.0 * inv * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
}

/// Solve the curve parameter for time `x`, then read progress.
fn bezier_progress(x: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Newton-Raphson with a bisection fallback when the derivative is flat.
    let mut t = x;
    for _ in 0..8 {
        let error = bezier_axis(t, x1, x2) - x;
        if error.abs() < 1e-5 {
            return bezier_axis(t, y1, y2);
        }
        let slope = bezier_axis_derivative(t, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        t -= error / slope;
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    t = x;
    for _ in 0..24 {
        let current = bezier_axis(t, x1, x2);
        if (current - x).abs() < 1e-5 {
            break;
        }
        if current < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) * 0.5;
    }
    bezier_axis(t, y1, y2)
}
