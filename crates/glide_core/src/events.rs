//! Event type ids and input payloads
//!
//! The engine never talks to a windowing system or a DOM directly: the host
//! observes its own surface and forwards events with these payloads. Event
//! kinds are plain `u32` ids so state machines can match on them in their
//! [`StateTransitions::on_event`](crate::fsm::StateTransitions::on_event)
//! tables.

/// Numeric id of an event kind.
pub type EventType = u32;

/// Well-known event type ids.
///
/// Ids below 10000 are host-facing; state machines may define private ids
/// above 10000 for internal transitions (threshold crossings, settling).
pub mod event_types {
    pub const POINTER_DOWN: u32 = 1;
    pub const POINTER_UP: u32 = 2;
    pub const POINTER_MOVE: u32 = 3;
    pub const POINTER_ENTER: u32 = 4;
    pub const POINTER_LEAVE: u32 = 5;
    pub const POINTER_CANCEL: u32 = 6;
    pub const CLICK: u32 = 7;
    pub const FOCUS_IN: u32 = 8;
    pub const FOCUS_OUT: u32 = 9;
    pub const SCROLL: u32 = 10;
    pub const RESIZE: u32 = 11;
    pub const MEDIA_SETTLED: u32 = 12;
    pub const CAPABILITY_CHANGED: u32 = 13;
    pub const READY: u32 = 14;
}

/// The class of device a pointer sample came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
}

/// Host-assigned identity of one active pointer (finger, stylus, mouse).
///
/// Used to acquire and release pointer capture on the host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u32);

/// One pointer sample as delivered by the host.
///
/// The slider pans on a single axis, so only the horizontal viewport
/// coordinate is carried. Timestamps are host clock milliseconds; the engine
/// never reads a clock of its own, which keeps every controller
/// deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub id: PointerId,
    pub kind: PointerKind,
    /// Device button, 0 = primary. Only meaningful for `PointerKind::Mouse`.
    pub button: u8,
    /// Horizontal position in viewport coordinates.
    pub x: f32,
    /// Host clock timestamp in milliseconds.
    pub timestamp_ms: f64,
}

impl PointerInput {
    /// Whether this sample may begin an interaction.
    ///
    /// Mouse input is restricted to the primary button; touch and pen are
    /// accepted unconditionally.
    pub fn starts_interaction(&self) -> bool {
        !matches!(self.kind, PointerKind::Mouse) || self.button == 0
    }
}

/// Input-device capability signal, injected by the host.
///
/// The engine never queries the environment; the host delivers the initial
/// value at construction and pushes changes as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capability {
    /// The device can hover (a cursor rests over elements without touching).
    pub hover: bool,
    /// The primary pointer is fine-grained (mouse/trackpad, not a finger).
    pub fine_pointer: bool,
}

impl Capability {
    /// Capability of a desktop-class pointer.
    pub fn fine() -> Self {
        Self {
            hover: true,
            fine_pointer: true,
        }
    }

    /// Capability of a touch-only device.
    pub fn coarse() -> Self {
        Self {
            hover: false,
            fine_pointer: false,
        }
    }

    /// Whether hover-driven visual effects should be bound at all.
    pub fn can_hover(&self) -> bool {
        self.hover && self.fine_pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_gating_applies_to_mouse_only() {
        let mut input = PointerInput {
            id: PointerId(1),
            kind: PointerKind::Mouse,
            button: 1,
            x: 0.0,
            timestamp_ms: 0.0,
        };
        assert!(!input.starts_interaction());

        input.button = 0;
        assert!(input.starts_interaction());

        input.kind = PointerKind::Touch;
        input.button = 2;
        assert!(input.starts_interaction());
    }

    #[test]
    fn hover_needs_both_capabilities() {
        assert!(Capability::fine().can_hover());
        assert!(!Capability::coarse().can_hover());
        assert!(
            !Capability {
                hover: true,
                fine_pointer: false
            }
            .can_hover()
        );
    }
}
