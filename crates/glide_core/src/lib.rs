//! Glide core primitives
//!
//! Shared foundation for the slider interaction engine:
//!
//! - [`events`] - numeric event type ids and input payloads delivered by the
//!   host surface (pointer samples, capability changes)
//! - [`fsm`] - the [`StateTransitions`](fsm::StateTransitions) trait that all
//!   interaction state machines implement
//! - [`node`] - opaque handles for host-discovered elements
//! - [`style`] - the inline-style "wire format" the engine writes toward the
//!   rendering surface

pub mod events;
pub mod fsm;
pub mod node;
pub mod style;

pub use events::{event_types, Capability, EventType, PointerId, PointerInput, PointerKind};
pub use fsm::StateTransitions;
pub use node::NodeId;
pub use style::{
    ComputedStyle, Cursor, StylePatch, StyleProperty, TimingCurve, Transition, Visibility,
};
