//! Glide animation primitives
//!
//! Frame-driven animators for the slider engine:
//!
//! - [`Easing`] - timing curves, including CSS-style cubic beziers
//! - [`Tween`] - a time-eased value used for smooth programmatic scrolling
//! - [`Decay`] - per-frame exponential velocity decay used for momentum
//!
//! Nothing here owns a clock or a thread: callers advance animators with
//! explicit frame deltas, which keeps every animation deterministic under
//! test.

pub mod decay;
pub mod easing;
pub mod tween;

pub use decay::Decay;
pub use easing::Easing;
pub use tween::Tween;
