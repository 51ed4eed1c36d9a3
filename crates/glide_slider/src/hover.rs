//! Hover crossfade controller
//!
//! Per-item hover/focus visual state, gated on a fine pointer with hover
//! support. Items with overlay visuals crossfade between primary and
//! overlay on enter; items without overlays scale the primary alone.
//! Bindings are never patched incrementally: every capability or geometry
//! change tears the whole set down and rebuilds it, so stale or duplicate
//! handlers cannot accumulate.

use glide_core::{
    event_types, fsm, Capability, NodeId, StateTransitions, StylePatch, StyleProperty,
    TimingCurve, Transition,
};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::host::{Host, ItemParts, SliderParts};

const OVERLAY_HOVER_SCALE: f32 = 1.12;
const PRIMARY_HOVER_SCALE: f32 = 0.985;
/// Scale applied to a primary with no overlay to crossfade against.
const SOLO_HOVER_SCALE: f32 = 1.08;

const PRIMARY_FADE_MS: f32 = 280.0;
const PRIMARY_MOVE_MS: f32 = 900.0;
const OVERLAY_FADE_MS: f32 = 380.0;
const OVERLAY_MOVE_MS: f32 = 1200.0;

const FADE_CURVE: TimingCurve = TimingCurve::CubicBezier(0.2, 0.8, 0.2, 1.0);
const MOVE_CURVE: TimingCurve = TimingCurve::CubicBezier(0.16, 1.0, 0.3, 1.0);

/// Hover state of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoverPhase {
    #[default]
    Base,
    Hovered,
}

impl StateTransitions for HoverPhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        match (self, event) {
            (Self::Base, event_types::POINTER_ENTER) => Some(Self::Hovered),
            (Self::Base, event_types::FOCUS_IN) => Some(Self::Hovered),
            (Self::Hovered, event_types::POINTER_LEAVE) => Some(Self::Base),
            (Self::Hovered, event_types::FOCUS_OUT) => Some(Self::Base),
            _ => None,
        }
    }
}

/// One registered routing entry: the host forwards these event types for
/// this node while the binding set is live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverBinding {
    pub target: NodeId,
    pub events: SmallVec<[u32; 4]>,
}

/// Capability-gated crossfade state for the whole item set.
#[derive(Debug, Clone, Default)]
pub struct HoverController {
    bindings: Vec<HoverBinding>,
    phases: FxHashMap<NodeId, HoverPhase>,
}

impl HoverController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bindings(&self) -> &[HoverBinding] {
        &self.bindings
    }

    pub fn is_active(&self) -> bool {
        !self.bindings.is_empty()
    }

    /// Whether enter/leave/focus events for this node should be routed here.
    pub fn handles(&self, node: NodeId) -> bool {
        self.phases.contains_key(&node)
    }

    /// Tear down and rebuild the binding set against the current items.
    ///
    /// Previously tracked items are reset to base visuals first, so a
    /// hover that was live when capability flipped does not stick.
    pub fn rebuild<H: Host>(&mut self, host: &mut H, parts: &SliderParts, capability: Capability) {
        for item in parts.items.iter().filter(|i| i.has_visuals()) {
            if self.phases.contains_key(&item.root) {
                apply_teardown(host, item);
            }
        }
        self.bindings.clear();
        self.phases.clear();

        if !capability.can_hover() {
            debug!("hover disabled, no bindings");
            return;
        }

        for item in parts.items.iter().filter(|i| i.has_visuals()) {
            apply_base(host, item);
            self.phases.insert(item.root, HoverPhase::Base);
            self.bindings.push(HoverBinding {
                target: item.root,
                events: SmallVec::from_slice(&[
                    event_types::POINTER_ENTER,
                    event_types::POINTER_LEAVE,
                    event_types::FOCUS_IN,
                    event_types::FOCUS_OUT,
                ]),
            });
        }
        debug!(bindings = self.bindings.len(), "hover bindings rebuilt");
    }

    /// Route one enter/leave/focus event for a bound item.
    pub fn on_event<H: Host>(
        &mut self,
        host: &mut H,
        parts: &SliderParts,
        node: NodeId,
        event: u32,
    ) -> bool {
        let Some(phase) = self.phases.get_mut(&node) else {
            return false;
        };
        if !fsm::dispatch(phase, event) {
            return false;
        }
        let hovered = *phase == HoverPhase::Hovered;
        if let Some(item) = parts.items.iter().find(|i| i.root == node) {
            if hovered {
                apply_hovered(host, item);
            } else {
                apply_base(host, item);
            }
        }
        true
    }

    pub fn phase(&self, node: NodeId) -> Option<HoverPhase> {
        self.phases.get(&node).copied()
    }
}

fn primary_transitions() -> [Transition; 2] {
    [
        Transition::new(StyleProperty::Opacity, PRIMARY_FADE_MS, FADE_CURVE),
        Transition::new(StyleProperty::Transform, PRIMARY_MOVE_MS, MOVE_CURVE),
    ]
}

fn overlay_transitions() -> [Transition; 2] {
    [
        Transition::new(StyleProperty::Opacity, OVERLAY_FADE_MS, FADE_CURVE),
        Transition::new(StyleProperty::Transform, OVERLAY_MOVE_MS, MOVE_CURVE),
    ]
}

/// Teardown write: base values with the transition property cleared, so a
/// surface left unbound snaps rather than animating on later style writes.
fn apply_teardown<H: Host>(host: &mut H, item: &ItemParts) {
    if let Some(primary) = item.primary {
        host.apply(
            primary,
            &StylePatch::new().opacity(1.0).scale(1.0).no_transitions(),
        );
    }
    for &overlay in &item.overlays {
        host.apply(
            overlay,
            &StylePatch::new()
                .opacity(0.0)
                .scale(1.0)
                .hit_testable(false)
                .no_transitions(),
        );
    }
}

fn apply_base<H: Host>(host: &mut H, item: &ItemParts) {
    if let Some(primary) = item.primary {
        host.apply(
            primary,
            &StylePatch::new()
                .opacity(1.0)
                .scale(1.0)
                .transitions(primary_transitions()),
        );
    }
    for &overlay in &item.overlays {
        host.apply(
            overlay,
            &StylePatch::new()
                .opacity(0.0)
                .scale(1.0)
                .hit_testable(false)
                .transitions(overlay_transitions()),
        );
    }
}

fn apply_hovered<H: Host>(host: &mut H, item: &ItemParts) {
    if item.overlays.is_empty() {
        if let Some(primary) = item.primary {
            host.apply(primary, &StylePatch::new().scale(SOLO_HOVER_SCALE));
        }
        return;
    }
    if let Some(primary) = item.primary {
        host.apply(
            primary,
            &StylePatch::new().opacity(0.0).scale(PRIMARY_HOVER_SCALE),
        );
    }
    for &overlay in &item.overlays {
        host.apply(
            overlay,
            &StylePatch::new()
                .opacity(1.0)
                .scale(OVERLAY_HOVER_SCALE)
                .hit_testable(true),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::{TestHost, TestNode};

    struct Fixture {
        host: TestHost,
        parts: SliderParts,
        item: NodeId,
        primary: NodeId,
        overlay: NodeId,
        solo_item: NodeId,
        solo_primary: NodeId,
    }

    fn fixture() -> Fixture {
        let mut host = TestHost::new();
        let container = host.add(TestNode::default());
        let item = host.add(TestNode::default());
        let primary = host.add(TestNode::default());
        let overlay = host.add(TestNode::default());
        let solo_item = host.add(TestNode::default());
        let solo_primary = host.add(TestNode::default());
        let parts = SliderParts::new(container)
            .item(ItemParts::new(item).primary(primary).overlay(overlay))
            .item(ItemParts::new(solo_item).primary(solo_primary));
        Fixture {
            host,
            parts,
            item,
            primary,
            overlay,
            solo_item,
            solo_primary,
        }
    }

    #[test]
    fn no_capability_means_no_bindings_and_base_visuals() {
        let mut fx = fixture();
        let mut hover = HoverController::new();
        hover.rebuild(&mut fx.host, &fx.parts, Capability::coarse());

        assert!(!hover.is_active());
        assert!(hover.bindings().is_empty());

        // Synthetic hover events are not routed.
        let handled = hover.on_event(
            &mut fx.host,
            &fx.parts,
            fx.item,
            event_types::POINTER_ENTER,
        );
        assert!(!handled);
        assert_eq!(fx.host.style(fx.overlay).opacity, 1.0);
        assert_eq!(fx.host.style(fx.overlay).scale, 1.0);
    }

    #[test]
    fn rebuild_applies_base_state_and_bindings() {
        let mut fx = fixture();
        let mut hover = HoverController::new();
        hover.rebuild(&mut fx.host, &fx.parts, Capability::fine());

        assert_eq!(hover.bindings().len(), 2);
        assert!(hover.handles(fx.item));
        assert!(hover.handles(fx.solo_item));

        let overlay = fx.host.style(fx.overlay);
        assert_eq!(overlay.opacity, 0.0);
        assert!(!overlay.hit_testable);
        assert_eq!(overlay.transitions[0].duration_ms, OVERLAY_FADE_MS);
        assert_eq!(overlay.transitions[1].duration_ms, OVERLAY_MOVE_MS);

        let primary = fx.host.style(fx.primary);
        assert_eq!(primary.opacity, 1.0);
        assert_eq!(primary.transitions[0].duration_ms, PRIMARY_FADE_MS);
        assert_eq!(primary.transitions[0].curve, FADE_CURVE);
    }

    #[test]
    fn enter_crossfades_and_leave_restores() {
        let mut fx = fixture();
        let mut hover = HoverController::new();
        hover.rebuild(&mut fx.host, &fx.parts, Capability::fine());

        assert!(hover.on_event(
            &mut fx.host,
            &fx.parts,
            fx.item,
            event_types::POINTER_ENTER
        ));
        assert_eq!(fx.host.style(fx.overlay).opacity, 1.0);
        assert_eq!(fx.host.style(fx.overlay).scale, OVERLAY_HOVER_SCALE);
        assert!(fx.host.style(fx.overlay).hit_testable);
        assert_eq!(fx.host.style(fx.primary).opacity, 0.0);
        assert_eq!(fx.host.style(fx.primary).scale, PRIMARY_HOVER_SCALE);

        assert!(hover.on_event(
            &mut fx.host,
            &fx.parts,
            fx.item,
            event_types::POINTER_LEAVE
        ));
        assert_eq!(fx.host.style(fx.overlay).opacity, 0.0);
        assert_eq!(fx.host.style(fx.overlay).scale, 1.0);
        assert_eq!(fx.host.style(fx.primary).opacity, 1.0);
        assert_eq!(fx.host.style(fx.primary).scale, 1.0);
    }

    #[test]
    fn solo_primary_scales_without_fading() {
        let mut fx = fixture();
        let mut hover = HoverController::new();
        hover.rebuild(&mut fx.host, &fx.parts, Capability::fine());

        hover.on_event(&mut fx.host, &fx.parts, fx.solo_item, event_types::FOCUS_IN);
        let primary = fx.host.style(fx.solo_primary);
        assert_eq!(primary.scale, SOLO_HOVER_SCALE);
        assert_eq!(primary.opacity, 1.0);
    }

    #[test]
    fn duplicate_enter_is_rejected_by_the_phase_machine() {
        let mut fx = fixture();
        let mut hover = HoverController::new();
        hover.rebuild(&mut fx.host, &fx.parts, Capability::fine());

        assert!(hover.on_event(
            &mut fx.host,
            &fx.parts,
            fx.item,
            event_types::POINTER_ENTER
        ));
        assert!(!hover.on_event(
            &mut fx.host,
            &fx.parts,
            fx.item,
            event_types::POINTER_ENTER
        ));
        assert_eq!(hover.phase(fx.item), Some(HoverPhase::Hovered));
    }

    #[test]
    fn capability_loss_resets_a_live_hover() {
        let mut fx = fixture();
        let mut hover = HoverController::new();
        hover.rebuild(&mut fx.host, &fx.parts, Capability::fine());
        hover.on_event(
            &mut fx.host,
            &fx.parts,
            fx.item,
            event_types::POINTER_ENTER,
        );
        assert_eq!(fx.host.style(fx.overlay).opacity, 1.0);

        hover.rebuild(&mut fx.host, &fx.parts, Capability::coarse());
        assert!(!hover.is_active());
        assert_eq!(fx.host.style(fx.overlay).opacity, 0.0);
        assert_eq!(fx.host.style(fx.primary).opacity, 1.0);
        // Teardown also strips the transitions it installed.
        assert!(fx.host.style(fx.overlay).transitions.is_empty());
        assert!(fx.host.style(fx.primary).transitions.is_empty());
    }

    #[test]
    fn repeated_rebuilds_do_not_duplicate_bindings() {
        let mut fx = fixture();
        let mut hover = HoverController::new();
        for _ in 0..3 {
            hover.rebuild(&mut fx.host, &fx.parts, Capability::fine());
        }
        assert_eq!(hover.bindings().len(), 2);
    }
}
