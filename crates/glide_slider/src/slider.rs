//! Slider instance
//!
//! Owns the controllers and routes host events between them. The slider is
//! the only writer of the host's scroll offset; drag, momentum, thumb,
//! track clicks, and programmatic stepping all funnel through the clamped
//! [`ScrollPosition`], and a native scroll is adopted only while no engine
//! writer is active. [`Slider::tick`] advances the animated writers and
//! drains the frame's scheduled layout work.

use glide_animation::{Easing, Tween};
use glide_core::{event_types, Capability, Cursor, NodeId, PointerId, PointerInput, StylePatch};
use tracing::{debug, trace};

use crate::drag::{DragController, DragPhase, ReleaseOutcome};
use crate::host::{Host, SliderParts};
use crate::hover::HoverController;
use crate::layout;
use crate::probe::{self, Metrics};
use crate::scheduler::{Deferred, UpdateScheduler};
use crate::scroll::ScrollPosition;
use crate::thumb::ThumbController;

/// Tunable constants of one slider instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderConfig {
    /// Movement (px) a pointer sequence needs before it becomes a drag.
    pub drag_threshold: f32,
    /// Per-frame momentum multiplier.
    pub decay_factor: f32,
    /// Momentum floor (px/frame) below which a run settles.
    pub min_velocity: f32,
    /// Frame length the velocity estimate is normalized to.
    pub velocity_frame_ms: f32,
    /// Duration of the animated item-step scroll.
    pub step_scroll_ms: f32,
    /// Duration of the prev/next button opacity fade.
    pub button_fade_ms: f32,
    /// Slack (px) applied to the edge checks that drive button visibility.
    pub edge_tolerance: f32,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 6.0,
            decay_factor: 0.92,
            min_velocity: 0.2,
            velocity_frame_ms: 16.0,
            step_scroll_ms: 450.0,
            button_fade_ms: 250.0,
            edge_tolerance: 1.0,
        }
    }
}

impl SliderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag_threshold(mut self, px: f32) -> Self {
        self.drag_threshold = px;
        self
    }

    pub fn decay_factor(mut self, factor: f32) -> Self {
        self.decay_factor = factor;
        self
    }

    pub fn min_velocity(mut self, px_per_frame: f32) -> Self {
        self.min_velocity = px_per_frame;
        self
    }

    pub fn step_scroll_ms(mut self, ms: f32) -> Self {
        self.step_scroll_ms = ms;
        self
    }

    pub fn button_fade_ms(mut self, ms: f32) -> Self {
        self.button_fade_ms = ms;
        self
    }
}

/// Event stream a host feeds into [`Slider::handle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SliderEvent {
    /// Page is ready; run the initial full pass.
    Ready,
    /// Container, surface, track, or window geometry changed.
    Resized,
    /// An item image finished loading (or failed). One-shot per image.
    MediaSettled,
    CapabilityChanged(Capability),
    /// Native scroll on the surface, with the offset it reported.
    Scrolled { position: f32 },
    PointerDown { target: NodeId, input: PointerInput },
    PointerMove { input: PointerInput },
    PointerUp { input: PointerInput },
    PointerCancel { input: PointerInput },
    PointerEnter { target: NodeId },
    PointerLeave { target: NodeId },
    FocusIn { target: NodeId },
    FocusOut { target: NodeId },
    /// Click after the pointer sequence resolved; `target` is whatever the
    /// host hit-tested (a button, a link inside an item, the surface).
    Click { target: NodeId },
}

/// What [`Slider::handle`] did with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Not for us; the host proceeds with its default behavior.
    Ignored,
    Handled,
    /// The click trails a drag: the host must cancel its default action
    /// (link navigation) for this one click.
    SuppressClick,
}

/// One carousel engine instance.
pub struct Slider {
    parts: SliderParts,
    config: SliderConfig,
    capability: Capability,
    metrics: Metrics,
    scroll: ScrollPosition,
    drag: DragController,
    thumb: ThumbController,
    hover: HoverController,
    scheduler: UpdateScheduler,
    /// Animated item-step scroll, when one is running.
    glide: Option<Tween>,
}

impl Slider {
    pub fn new(parts: SliderParts, config: SliderConfig, capability: Capability) -> Self {
        Self {
            parts,
            capability,
            metrics: Metrics::default(),
            scroll: ScrollPosition::new(),
            drag: DragController::new(
                config.drag_threshold,
                config.decay_factor,
                config.min_velocity,
                config.velocity_frame_ms,
            ),
            thumb: ThumbController::new(),
            hover: HoverController::new(),
            scheduler: UpdateScheduler::new(),
            glide: None,
            config,
        }
    }

    /// Initial paint: affordance styling, one full layout pass, and the
    /// first hover-binding build.
    pub fn mount<H: Host>(&mut self, host: &mut H) {
        layout::prime(host, &self.parts, &self.config);
        self.remeasure(host);
        layout::full_sync(host, &self.parts, &self.metrics, &self.scroll, &self.config);
        self.hover.rebuild(host, &self.parts, self.capability);
        debug!(
            items = self.parts.items.len(),
            max_scroll = self.scroll.max_scroll(),
            "slider mounted"
        );
    }

    pub fn position(&self) -> f32 {
        self.scroll.get()
    }

    pub fn max_scroll(&self) -> f32 {
        self.scroll.max_scroll()
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn parts(&self) -> &SliderParts {
        &self.parts
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    pub fn is_thumb_dragging(&self) -> bool {
        self.thumb.is_dragging()
    }

    /// Whether any engine writer (drag, momentum, thumb, animated step)
    /// currently owns the scroll position.
    fn has_active_writer(&self) -> bool {
        self.drag.is_dragging()
            || self.drag.is_coasting()
            || self.thumb.is_dragging()
            || self.glide.is_some()
    }

    /// Route one host event.
    pub fn handle<H: Host>(&mut self, host: &mut H, event: SliderEvent) -> Response {
        match event {
            SliderEvent::Ready => {
                self.scheduler.request_full();
                self.scheduler.request_hover_rebuild();
                Response::Handled
            }
            SliderEvent::Resized => {
                // Momentum over stale geometry is meaningless.
                self.drag.cancel();
                self.glide = None;
                self.scheduler.request_full();
                self.scheduler.request_hover_rebuild();
                Response::Handled
            }
            SliderEvent::MediaSettled => {
                self.scheduler.request_full();
                self.scheduler.request_hover_rebuild();
                Response::Handled
            }
            SliderEvent::CapabilityChanged(capability) => {
                self.capability = capability;
                self.scheduler.request_hover_rebuild();
                Response::Handled
            }
            SliderEvent::Scrolled { position } => {
                if !self.has_active_writer() {
                    self.scroll.set(position);
                }
                self.scheduler.on_scroll();
                Response::Handled
            }
            SliderEvent::PointerDown { target, input } => self.on_pointer_down(host, target, &input),
            SliderEvent::PointerMove { input } => self.on_pointer_move(host, &input),
            SliderEvent::PointerUp { input } => self.on_pointer_up(host, &input),
            SliderEvent::PointerCancel { input } => self.on_pointer_cancel(host, &input),
            SliderEvent::PointerEnter { target } => {
                self.route_hover(host, target, event_types::POINTER_ENTER)
            }
            SliderEvent::PointerLeave { target } => {
                self.route_hover(host, target, event_types::POINTER_LEAVE)
            }
            SliderEvent::FocusIn { target } => self.route_hover(host, target, event_types::FOCUS_IN),
            SliderEvent::FocusOut { target } => {
                self.route_hover(host, target, event_types::FOCUS_OUT)
            }
            SliderEvent::Click { target } => self.on_click(target),
        }
    }

    /// Advance one rendering frame: animated writers first, then the
    /// frame's scheduled layout work.
    pub fn tick<H: Host>(&mut self, host: &mut H, dt_ms: f32) {
        let surface = self.parts.scroll_surface();

        if let Some(tween) = self.glide.as_mut() {
            tween.advance(dt_ms);
            let position = self.scroll.set(tween.value());
            let finished = tween.is_finished();
            host.set_scroll_left(surface, position);
            self.scheduler.request_cheap();
            if finished {
                self.glide = None;
            }
        } else if let Some(position) = self.drag.tick(&mut self.scroll) {
            host.set_scroll_left(surface, position);
            self.scheduler.request_cheap();
        }

        let plan = self.scheduler.drain();
        if plan.full {
            self.remeasure(host);
            layout::full_sync(host, &self.parts, &self.metrics, &self.scroll, &self.config);
        } else if plan.cheap {
            layout::cheap_sync(host, &self.parts, &self.metrics, &self.scroll, &self.config);
        }
        if plan.rebuild_hover {
            self.hover.rebuild(host, &self.parts, self.capability);
        }
        for task in plan.deferred {
            match task {
                Deferred::ClearDragFlag => self.drag.clear_drag_flag(),
            }
        }
    }

    /// Animated move by whole items, sign-directed, clamped at the edges.
    /// The tween writes the position out over the following frames.
    pub fn scroll_by_items(&mut self, n: i32) {
        self.drag.cancel();
        let target = self.scroll.get() + n as f32 * self.metrics.item_step_width;
        let target = target.clamp(0.0, self.scroll.max_scroll());
        trace!(target, "item step");
        self.glide = Some(Tween::new(
            self.scroll.get(),
            target,
            self.config.step_scroll_ms,
            Easing::EaseOutCubic,
        ));
    }

    /// Absolute clamp-and-set without animation.
    pub fn scroll_to<H: Host>(&mut self, host: &mut H, x: f32) {
        self.drag.cancel();
        self.glide = None;
        let position = self.scroll.set(x);
        host.set_scroll_left(self.parts.scroll_surface(), position);
        self.scheduler.request_cheap();
    }

    fn remeasure<H: Host>(&mut self, host: &H) {
        self.metrics = probe::measure(host, &self.parts);
        self.scroll.set_max_scroll(self.metrics.max_scroll());
    }

    fn on_pointer_down<H: Host>(
        &mut self,
        host: &mut H,
        target: NodeId,
        input: &PointerInput,
    ) -> Response {
        if self.parts.thumb == Some(target) {
            if !input.starts_interaction() {
                return Response::Ignored;
            }
            self.drag.cancel();
            self.glide = None;
            self.thumb.pointer_down(input, host.left_edge(target));
            host.capture_pointer(target, input.id);
            host.apply(target, &StylePatch::new().cursor(Cursor::Grabbing));
            return Response::Handled;
        }
        if self.parts.track == Some(target) {
            if !input.starts_interaction() {
                return Response::Ignored;
            }
            self.drag.cancel();
            self.glide = None;
            let track_left = host.left_edge(target);
            let position = self
                .thumb
                .track_click(input, track_left, &self.metrics, &mut self.scroll);
            host.set_scroll_left(self.parts.scroll_surface(), position);
            self.scheduler.request_cheap();
            return Response::Handled;
        }
        // A fresh surface grab preempts a live thumb session; only one
        // session may write the position.
        if input.starts_interaction() {
            if let Some(pointer) = self.thumb.pointer() {
                self.thumb.pointer_up(pointer);
                self.release_thumb(host, pointer);
            }
        }
        if self.drag.pointer_down(input, &self.scroll) {
            self.glide = None;
            host.capture_pointer(self.parts.scroll_surface(), input.id);
            return Response::Handled;
        }
        Response::Ignored
    }

    fn release_thumb<H: Host>(&mut self, host: &mut H, pointer: PointerId) {
        if let Some(thumb) = self.parts.thumb {
            host.release_pointer(thumb, pointer);
            host.apply(thumb, &StylePatch::new().cursor(Cursor::Grab));
        }
    }

    fn on_pointer_move<H: Host>(&mut self, host: &mut H, input: &PointerInput) -> Response {
        if self.thumb.is_dragging() {
            if let Some((track, _)) = self.parts.scrollbar() {
                let track_left = host.left_edge(track);
                if let Some(position) =
                    self.thumb
                        .pointer_move(input, track_left, &self.metrics, &mut self.scroll)
                {
                    host.set_scroll_left(self.parts.scroll_surface(), position);
                    self.scheduler.request_cheap();
                    return Response::Handled;
                }
            }
        }

        let was_dragging = self.drag.is_dragging();
        if let Some(position) = self.drag.pointer_move(input, &mut self.scroll) {
            let surface = self.parts.scroll_surface();
            if !was_dragging {
                // First dragging move: put the surface into drag dress.
                host.apply(
                    surface,
                    &StylePatch::new().cursor(Cursor::Grabbing).selectable(false),
                );
            }
            host.set_scroll_left(surface, position);
            self.scheduler.request_cheap();
            return Response::Handled;
        }
        Response::Ignored
    }

    fn on_pointer_up<H: Host>(&mut self, host: &mut H, input: &PointerInput) -> Response {
        if self.thumb.pointer_up(input.id) {
            self.release_thumb(host, input.id);
            return Response::Handled;
        }

        let was_dragging = self.drag.is_dragging();
        match self.drag.pointer_up(input) {
            ReleaseOutcome::None => Response::Ignored,
            outcome => {
                let surface = self.parts.scroll_surface();
                host.release_pointer(surface, input.id);
                if was_dragging {
                    host.apply(
                        surface,
                        &StylePatch::new().cursor(Cursor::Default).selectable(true),
                    );
                    // The flag lives long enough to swallow the click that
                    // trails this release, then resets on the next frame.
                    self.scheduler.defer(Deferred::ClearDragFlag);
                }
                if outcome == ReleaseOutcome::Coasting {
                    trace!("momentum started");
                }
                Response::Handled
            }
        }
    }

    fn on_pointer_cancel<H: Host>(&mut self, host: &mut H, input: &PointerInput) -> Response {
        if self.thumb.pointer_up(input.id) {
            self.release_thumb(host, input.id);
            return Response::Handled;
        }
        match self.drag.phase() {
            DragPhase::Armed | DragPhase::Dragging => {
                let was_dragging = self.drag.is_dragging();
                self.drag.cancel();
                let surface = self.parts.scroll_surface();
                host.release_pointer(surface, input.id);
                if was_dragging {
                    host.apply(
                        surface,
                        &StylePatch::new().cursor(Cursor::Default).selectable(true),
                    );
                    self.scheduler.defer(Deferred::ClearDragFlag);
                }
                Response::Handled
            }
            _ => Response::Ignored,
        }
    }

    fn on_click(&mut self, target: NodeId) -> Response {
        if self.parts.prev_button == Some(target) {
            self.scroll_by_items(-1);
            return Response::Handled;
        }
        if self.parts.next_button == Some(target) {
            self.scroll_by_items(1);
            return Response::Handled;
        }
        if self.drag.did_drag() {
            // Swallow this one click; the flag resets on the next frame.
            self.scheduler.defer(Deferred::ClearDragFlag);
            return Response::SuppressClick;
        }
        Response::Ignored
    }

    fn route_hover<H: Host>(&mut self, host: &mut H, target: NodeId, event: u32) -> Response {
        if self.hover.on_event(host, &self.parts, target, event) {
            Response::Handled
        } else {
            Response::Ignored
        }
    }
}
