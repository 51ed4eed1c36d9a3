//! Glide slider interaction engine
//!
//! A headless controller for a horizontally scrolling item carousel. The
//! engine owns the authoritative scroll offset and every interaction state
//! machine around it - drag panning with momentum, the custom scrollbar's
//! thumb and track, prev/next button fades, edge margins, and the per-item
//! hover crossfade - and drives the rendering surface through the [`Host`]
//! trait with sparse inline-style writes.
//!
//! The host discovers its own markup, mints [`NodeId`]s for the pieces it
//! found ([`SliderParts`]), forwards input and layout signals as
//! [`SliderEvent`]s, and calls [`Slider::tick`] once per rendering frame.
//! Optional pieces (buttons, track, thumb, margin reference) may simply be
//! absent; the matching feature switches off without error.
//!
//! ```no_run
//! # fn demo<H: glide_slider::Host>(host: &mut H, parts: glide_slider::SliderParts) {
//! use glide_core::Capability;
//! use glide_slider::{Slider, SliderConfig, SliderEvent};
//!
//! let mut slider = Slider::new(parts, SliderConfig::default(), Capability::fine());
//! slider.mount(host);
//!
//! // Host event loop:
//! slider.handle(host, SliderEvent::Ready);
//! slider.tick(host, 16.0);
//! # }
//! ```

pub mod drag;
pub mod host;
pub mod hover;
pub mod layout;
pub mod probe;
pub mod scheduler;
pub mod scroll;
pub mod slider;
pub mod thumb;

pub use drag::{DragController, DragPhase, InertiaRun};
pub use host::{Host, ItemParts, SliderParts};
pub use hover::{HoverBinding, HoverController, HoverPhase};
pub use probe::Metrics;
pub use scroll::ScrollPosition;
pub use slider::{Response, Slider, SliderConfig, SliderEvent};
pub use thumb::ThumbController;

/// Commonly used engine types.
pub mod prelude {
    pub use crate::host::{Host, ItemParts, SliderParts};
    pub use crate::slider::{Response, Slider, SliderConfig, SliderEvent};
    pub use glide_core::{Capability, NodeId, PointerId, PointerInput, PointerKind};
}

pub use glide_core::NodeId;
