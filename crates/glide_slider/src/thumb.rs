//! Thumb and track controller
//!
//! Maps pointer input on the custom scrollbar onto absolute scroll
//! positions. A thumb drag keeps the grab point under the pointer; a click
//! on the rail centers the thumb at the click. Both run through the same
//! linear conversion `[0, track range] -> [0, max scroll]`, and neither
//! produces momentum.

use glide_core::{PointerId, PointerInput};
use tracing::trace;

use crate::probe::Metrics;
use crate::scroll::ScrollPosition;

/// Active thumb-drag session state.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ThumbDrag {
    pointer: PointerId,
    /// Distance from the pointer to the thumb's left edge at grab time.
    grab_offset: f32,
}

/// Scrollbar interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbController {
    session: Option<ThumbDrag>,
}

impl ThumbController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn pointer(&self) -> Option<PointerId> {
        self.session.map(|s| s.pointer)
    }

    /// Grab the thumb. The caller captures the pointer on the thumb node.
    pub fn pointer_down(&mut self, input: &PointerInput, thumb_left: f32) {
        self.session = Some(ThumbDrag {
            pointer: input.id,
            grab_offset: input.x - thumb_left,
        });
        trace!(grab_offset = input.x - thumb_left, "thumb grab");
    }

    /// Feed a pointer move. Returns the new scroll position while a session
    /// owned by this pointer is live.
    pub fn pointer_move(
        &self,
        input: &PointerInput,
        track_left: f32,
        metrics: &Metrics,
        scroll: &mut ScrollPosition,
    ) -> Option<f32> {
        let session = self.session.filter(|s| s.pointer == input.id)?;
        let thumb_x = input.x - track_left - session.grab_offset;
        Some(apply_thumb_position(thumb_x, metrics, scroll))
    }

    /// End the session. Returns `true` when this pointer owned it (the
    /// caller then releases pointer capture).
    pub fn pointer_up(&mut self, pointer: PointerId) -> bool {
        if self.session.is_some_and(|s| s.pointer == pointer) {
            self.session = None;
            true
        } else {
            false
        }
    }

    /// Click on the rail: center the thumb at the click point.
    pub fn track_click(
        &self,
        input: &PointerInput,
        track_left: f32,
        metrics: &Metrics,
        scroll: &mut ScrollPosition,
    ) -> f32 {
        let thumb_x = input.x - track_left - metrics.thumb_width / 2.0;
        apply_thumb_position(thumb_x, metrics, scroll)
    }
}

/// Convert a thumb offset along the rail into a scroll position.
fn apply_thumb_position(thumb_x: f32, metrics: &Metrics, scroll: &mut ScrollPosition) -> f32 {
    let max_thumb_x = (metrics.track_width - metrics.thumb_width).max(0.0);
    let progress = if max_thumb_x <= 0.0 {
        0.0
    } else {
        thumb_x.clamp(0.0, max_thumb_x) / max_thumb_x
    };
    scroll.set(progress * scroll.max_scroll().max(1.0))
}
