//! Drag and inertia controller
//!
//! Converts pointer input on the scroll surface into position writes and a
//! post-release momentum run. The phase machine is explicit:
//!
//! `Idle -> (pointer down) -> Armed -> (movement past threshold) ->
//! Dragging -> (release) -> Idle | Inertia -> Idle`
//!
//! A new pointer-down while momentum is running preempts the run, so at
//! most one writer of the scroll position is active per frame. The
//! controller is host-free; the slider performs pointer capture and style
//! writes around the outcomes reported here.

use glide_animation::Decay;
use glide_core::{event_types, fsm, PointerId, PointerInput, StateTransitions};
use tracing::trace;

use crate::scroll::ScrollPosition;

/// Internal transition triggers, above the shared event-type range.
pub mod drag_events {
    /// Cumulative movement crossed the drag threshold.
    pub const THRESHOLD_CROSSED: u32 = 10_000;
    /// Release velocity was high enough to start momentum.
    pub const MOMENTUM_STARTED: u32 = 10_001;
    /// Momentum decayed below the floor or hit an edge.
    pub const MOMENTUM_SETTLED: u32 = 10_002;
}

/// Phase of the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    /// Pointer is down, threshold not yet crossed.
    Armed,
    Dragging,
    /// Post-release momentum is writing the position.
    Inertia,
}

impl StateTransitions for DragPhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        match (self, event) {
            (Self::Idle, event_types::POINTER_DOWN) => Some(Self::Armed),
            // New interaction preempts a running momentum.
            (Self::Inertia, event_types::POINTER_DOWN) => Some(Self::Armed),
            (Self::Armed, drag_events::THRESHOLD_CROSSED) => Some(Self::Dragging),
            (Self::Armed, event_types::POINTER_UP) => Some(Self::Idle),
            (Self::Armed, event_types::POINTER_CANCEL) => Some(Self::Idle),
            (Self::Dragging, drag_events::MOMENTUM_STARTED) => Some(Self::Inertia),
            (Self::Dragging, event_types::POINTER_UP) => Some(Self::Idle),
            (Self::Dragging, event_types::POINTER_CANCEL) => Some(Self::Idle),
            (Self::Inertia, drag_events::MOMENTUM_SETTLED) => Some(Self::Idle),
            _ => None,
        }
    }
}

/// One momentum run: each frame contributes the decaying velocity as a
/// position delta until the floor or an edge stops it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InertiaRun {
    decay: Decay,
}

impl InertiaRun {
    /// Start a run, or `None` when the release velocity is below the floor.
    pub fn start(velocity: f32, factor: f32, min_velocity: f32) -> Option<Self> {
        let decay = Decay::new(velocity, factor, min_velocity);
        decay.is_worth_starting().then_some(Self { decay })
    }

    /// Advance one frame. Returns the new position and whether the run is
    /// over (settled or edge contact).
    pub fn advance(&mut self, scroll: &mut ScrollPosition) -> (f32, bool) {
        let position = scroll.by(self.decay.step());
        let done = self.decay.is_settled() || scroll.at_start() || scroll.at_end();
        (position, done)
    }

    pub fn velocity(&self) -> f32 {
        self.decay.velocity()
    }
}

/// What a pointer release resolved into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The sequence was not ours, or never armed.
    None,
    /// Sequence ended without momentum.
    Stopped,
    /// Momentum is now running; keep ticking.
    Coasting,
}

/// Drag state plus its velocity estimator.
#[derive(Debug, Clone)]
pub struct DragController {
    threshold: f32,
    decay_factor: f32,
    min_velocity: f32,
    frame_ms: f32,
    phase: DragPhase,
    pointer: Option<PointerId>,
    start_x: f32,
    start_scroll: f32,
    last_x: f32,
    last_time_ms: f64,
    velocity: f32,
    inertia: Option<InertiaRun>,
    did_drag: bool,
}

impl DragController {
    pub fn new(threshold: f32, decay_factor: f32, min_velocity: f32, frame_ms: f32) -> Self {
        Self {
            threshold,
            decay_factor,
            min_velocity,
            frame_ms,
            phase: DragPhase::Idle,
            pointer: None,
            start_x: 0.0,
            start_scroll: 0.0,
            last_x: 0.0,
            last_time_ms: 0.0,
            velocity: 0.0,
            inertia: None,
            did_drag: false,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    pub fn is_coasting(&self) -> bool {
        self.phase == DragPhase::Inertia
    }

    /// Whether the last pointer sequence reached `Dragging`. Stays set
    /// until [`clear_drag_flag`](Self::clear_drag_flag), so the click that
    /// trails a drag can be recognized and suppressed.
    pub fn did_drag(&self) -> bool {
        self.did_drag
    }

    pub fn clear_drag_flag(&mut self) {
        self.did_drag = false;
    }

    /// Abort whatever is in flight, momentum included.
    pub fn cancel(&mut self) {
        self.inertia = None;
        self.pointer = None;
        match self.phase {
            DragPhase::Armed | DragPhase::Dragging => {
                fsm::dispatch(&mut self.phase, event_types::POINTER_CANCEL);
            }
            DragPhase::Inertia => {
                fsm::dispatch(&mut self.phase, drag_events::MOMENTUM_SETTLED);
            }
            DragPhase::Idle => {}
        }
    }

    /// Begin a sequence. Returns `true` when the pointer was accepted (and
    /// should be captured on the scroll surface).
    pub fn pointer_down(&mut self, input: &PointerInput, scroll: &ScrollPosition) -> bool {
        if !input.starts_interaction() {
            return false;
        }
        if self.phase == DragPhase::Armed || self.phase == DragPhase::Dragging {
            return false;
        }
        // Grabbing the surface stops any running momentum.
        self.inertia = None;
        if !fsm::dispatch(&mut self.phase, event_types::POINTER_DOWN) {
            return false;
        }
        self.pointer = Some(input.id);
        self.start_x = input.x;
        self.start_scroll = scroll.get();
        self.last_x = input.x;
        self.last_time_ms = input.timestamp_ms;
        self.velocity = 0.0;
        self.did_drag = false;
        true
    }

    /// Feed a pointer move. Returns the new scroll position once the
    /// sequence is dragging; `None` while armed or for foreign pointers.
    pub fn pointer_move(
        &mut self,
        input: &PointerInput,
        scroll: &mut ScrollPosition,
    ) -> Option<f32> {
        if self.pointer != Some(input.id) {
            return None;
        }
        if self.phase == DragPhase::Armed
            && (input.x - self.start_x).abs() >= self.threshold
        {
            fsm::dispatch(&mut self.phase, drag_events::THRESHOLD_CROSSED);
            self.did_drag = true;
        }
        if self.phase != DragPhase::Dragging {
            return None;
        }

        let position = scroll.set(self.start_scroll - (input.x - self.start_x));

        // Velocity in px per ~frame; same-instant samples are floored to
        // 1 ms so the estimate stays finite.
        let dx = input.x - self.last_x;
        let dt = (input.timestamp_ms - self.last_time_ms).max(1.0) as f32;
        self.velocity = -(dx / dt) * self.frame_ms;
        self.last_x = input.x;
        self.last_time_ms = input.timestamp_ms;
        trace!(position, velocity = self.velocity, "drag move");

        Some(position)
    }

    /// End the sequence and maybe hand off to momentum.
    pub fn pointer_up(&mut self, input: &PointerInput) -> ReleaseOutcome {
        if self.pointer != Some(input.id) {
            return ReleaseOutcome::None;
        }
        self.pointer = None;
        match self.phase {
            DragPhase::Armed => {
                fsm::dispatch(&mut self.phase, event_types::POINTER_UP);
                ReleaseOutcome::Stopped
            }
            DragPhase::Dragging => {
                match InertiaRun::start(self.velocity, self.decay_factor, self.min_velocity) {
                    Some(run) => {
                        self.inertia = Some(run);
                        fsm::dispatch(&mut self.phase, drag_events::MOMENTUM_STARTED);
                        ReleaseOutcome::Coasting
                    }
                    None => {
                        fsm::dispatch(&mut self.phase, event_types::POINTER_UP);
                        ReleaseOutcome::Stopped
                    }
                }
            }
            _ => ReleaseOutcome::None,
        }
    }

    /// Advance momentum by one frame. Returns the new position while the
    /// run is live.
    pub fn tick(&mut self, scroll: &mut ScrollPosition) -> Option<f32> {
        let run = self.inertia.as_mut()?;
        let (position, done) = run.advance(scroll);
        if done {
            self.inertia = None;
            fsm::dispatch(&mut self.phase, drag_events::MOMENTUM_SETTLED);
        }
        Some(position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_core::PointerKind;

    fn controller() -> DragController {
        DragController::new(6.0, 0.92, 0.2, 16.0)
    }

    fn scroll_range(max: f32, position: f32) -> ScrollPosition {
        let mut scroll = ScrollPosition::new();
        scroll.set_max_scroll(max);
        scroll.set(position);
        scroll
    }

    fn mouse(x: f32, t: f64) -> PointerInput {
        PointerInput {
            id: PointerId(1),
            kind: PointerKind::Mouse,
            button: 0,
            x,
            timestamp_ms: t,
        }
    }

    #[test]
    fn sequence_arms_then_drags_past_threshold() {
        let mut drag = controller();
        let mut scroll = scroll_range(2000.0, 500.0);

        assert!(drag.pointer_down(&mouse(100.0, 0.0), &scroll));
        assert_eq!(drag.phase(), DragPhase::Armed);

        // 5 px is under the threshold.
        assert_eq!(drag.pointer_move(&mouse(105.0, 16.0), &mut scroll), None);
        assert_eq!(drag.phase(), DragPhase::Armed);
        assert_eq!(scroll.get(), 500.0);

        let pos = drag.pointer_move(&mouse(110.0, 32.0), &mut scroll);
        assert_eq!(drag.phase(), DragPhase::Dragging);
        assert_eq!(pos, Some(490.0));
        assert!(drag.did_drag());
    }

    #[test]
    fn secondary_mouse_button_is_ignored() {
        let mut drag = controller();
        let scroll = scroll_range(2000.0, 0.0);
        let mut input = mouse(100.0, 0.0);
        input.button = 2;
        assert!(!drag.pointer_down(&input, &scroll));
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn touch_starts_regardless_of_button() {
        let mut drag = controller();
        let scroll = scroll_range(2000.0, 0.0);
        let input = PointerInput {
            id: PointerId(7),
            kind: PointerKind::Touch,
            button: 1,
            x: 50.0,
            timestamp_ms: 0.0,
        };
        assert!(drag.pointer_down(&input, &scroll));
    }

    #[test]
    fn velocity_follows_the_sample_formula() {
        let mut drag = controller();
        let mut scroll = scroll_range(2000.0, 1000.0);
        drag.pointer_down(&mouse(100.0, 0.0), &scroll);
        drag.pointer_move(&mouse(110.0, 16.0), &mut scroll);
        // Next sample: dx = 20 over 10 ms -> -(20/10)*16 = -32 px/frame.
        drag.pointer_move(&mouse(130.0, 26.0), &mut scroll);
        assert_eq!(drag.velocity, -32.0);
    }

    #[test]
    fn release_below_floor_stops_without_momentum() {
        let mut drag = controller();
        let mut scroll = scroll_range(2000.0, 1000.0);
        drag.pointer_down(&mouse(100.0, 0.0), &scroll);
        drag.pointer_move(&mouse(110.0, 16.0), &mut scroll);
        // Barely moving sample right before release.
        drag.pointer_move(&mouse(110.1, 116.0), &mut scroll);

        assert_eq!(drag.pointer_up(&mouse(110.1, 120.0)), ReleaseOutcome::Stopped);
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert!(drag.did_drag());
    }

    #[test]
    fn fast_release_coasts_then_settles() {
        let mut drag = controller();
        let mut scroll = scroll_range(10_000.0, 5000.0);
        drag.pointer_down(&mouse(500.0, 0.0), &scroll);
        drag.pointer_move(&mouse(490.0, 16.0), &mut scroll);
        drag.pointer_move(&mouse(470.0, 32.0), &mut scroll);

        assert_eq!(drag.pointer_up(&mouse(470.0, 40.0)), ReleaseOutcome::Coasting);
        assert_eq!(drag.phase(), DragPhase::Inertia);

        let mut frames = 0;
        while drag.tick(&mut scroll).is_some() && drag.is_coasting() {
            frames += 1;
            assert!(frames < 200, "momentum failed to settle");
        }
        assert_eq!(drag.phase(), DragPhase::Idle);
        assert!(scroll.get() > 5000.0);
    }

    #[test]
    fn momentum_stops_at_the_edge() {
        let mut drag = controller();
        let mut scroll = scroll_range(100.0, 90.0);
        drag.pointer_down(&mouse(500.0, 0.0), &scroll);
        drag.pointer_move(&mouse(490.0, 16.0), &mut scroll);
        drag.pointer_move(&mouse(440.0, 32.0), &mut scroll);
        assert_eq!(drag.pointer_up(&mouse(440.0, 40.0)), ReleaseOutcome::Coasting);

        let (position, done) = (drag.tick(&mut scroll).unwrap(), !drag.is_coasting());
        assert_eq!(position, 100.0);
        assert!(done);
        assert_eq!(drag.phase(), DragPhase::Idle);
    }

    #[test]
    fn new_pointer_down_preempts_momentum() {
        let mut drag = controller();
        let mut scroll = scroll_range(10_000.0, 5000.0);
        drag.pointer_down(&mouse(500.0, 0.0), &scroll);
        drag.pointer_move(&mouse(490.0, 16.0), &mut scroll);
        drag.pointer_move(&mouse(450.0, 32.0), &mut scroll);
        drag.pointer_up(&mouse(450.0, 40.0));
        assert!(drag.is_coasting());

        assert!(drag.pointer_down(&mouse(600.0, 100.0), &scroll));
        assert_eq!(drag.phase(), DragPhase::Armed);
        assert_eq!(drag.tick(&mut scroll), None);
    }

    #[test]
    fn drag_flag_survives_release_until_cleared() {
        let mut drag = controller();
        let mut scroll = scroll_range(2000.0, 0.0);
        drag.pointer_down(&mouse(100.0, 0.0), &scroll);
        drag.pointer_move(&mouse(120.0, 16.0), &mut scroll);
        drag.pointer_up(&mouse(120.0, 20.0));

        assert!(drag.did_drag());
        drag.clear_drag_flag();
        assert!(!drag.did_drag());
    }

    #[test]
    fn foreign_pointer_moves_are_ignored() {
        let mut drag = controller();
        let mut scroll = scroll_range(2000.0, 500.0);
        drag.pointer_down(&mouse(100.0, 0.0), &scroll);

        let other = PointerInput {
            id: PointerId(9),
            kind: PointerKind::Mouse,
            button: 0,
            x: 400.0,
            timestamp_ms: 16.0,
        };
        assert_eq!(drag.pointer_move(&other, &mut scroll), None);
        assert_eq!(drag.pointer_up(&other), ReleaseOutcome::None);
        assert_eq!(drag.phase(), DragPhase::Armed);
    }

    #[test]
    fn phase_machine_rejects_unrelated_events() {
        let idle = DragPhase::Idle;
        assert_eq!(idle.on_event(drag_events::THRESHOLD_CROSSED), None);
        assert_eq!(idle.on_event(event_types::POINTER_UP), None);
        assert_eq!(
            DragPhase::Dragging.on_event(event_types::POINTER_DOWN),
            None
        );
    }
}
