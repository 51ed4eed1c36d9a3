//! Layout synchronizer
//!
//! Derives the slider's visual state from a [`Metrics`] snapshot and the
//! current scroll position, then writes it out as style patches: edge
//! margins on the first/last item, scrollbar visibility and thumb geometry,
//! and the prev/next button fades. Every write is a pure function of its
//! inputs, so running a sync twice with unchanged geometry produces the
//! same patches both times.

use glide_core::{
    Cursor, StylePatch, StyleProperty, TimingCurve, Transition, Visibility,
};
use tracing::trace;

use crate::host::{Host, SliderParts};
use crate::probe::Metrics;
use crate::scroll::ScrollPosition;
use crate::slider::SliderConfig;

/// Narrowest the thumb is allowed to get.
const MIN_THUMB_WIDTH: f32 = 8.0;

/// One-time affordance styling applied at mount.
///
/// Buttons get their fade transition so later opacity writes animate; the
/// track refuses text selection and advertises a pointer cursor; the thumb
/// opts out of native panning and shows a grab cursor.
pub fn prime<H: Host>(host: &mut H, parts: &SliderParts, config: &SliderConfig) {
    let fade = Transition::new(StyleProperty::Opacity, config.button_fade_ms, TimingCurve::Ease);
    for button in [parts.prev_button, parts.next_button].into_iter().flatten() {
        host.apply(button, &StylePatch::new().transitions([fade]));
    }
    if let Some(track) = parts.track {
        host.apply(
            track,
            &StylePatch::new().selectable(false).cursor(Cursor::Pointer),
        );
    }
    if let Some(thumb) = parts.thumb {
        host.apply(
            thumb,
            &StylePatch::new().pan_enabled(false).cursor(Cursor::Grab),
        );
    }
}

/// Full pass: edge margins, scrollbar, buttons.
pub fn full_sync<H: Host>(
    host: &mut H,
    parts: &SliderParts,
    metrics: &Metrics,
    scroll: &ScrollPosition,
    config: &SliderConfig,
) {
    sync_edge_margins(host, parts);
    cheap_sync(host, parts, metrics, scroll, config);
}

/// Scroll-path pass: scrollbar and buttons only, margins untouched.
pub fn cheap_sync<H: Host>(
    host: &mut H,
    parts: &SliderParts,
    metrics: &Metrics,
    scroll: &ScrollPosition,
    config: &SliderConfig,
) {
    sync_scrollbar(host, parts, metrics, scroll);
    sync_buttons(host, parts, metrics, scroll, config);
}

/// Align the first and last item's outer margins with the page's
/// left-margin reference. The first visible reference wins; with none
/// visible the margins are left as they are.
fn sync_edge_margins<H: Host>(host: &mut H, parts: &SliderParts) {
    let reference = parts
        .margin_refs
        .iter()
        .copied()
        .find(|&node| host.is_visible(node));
    let Some(reference) = reference else {
        return;
    };
    let margin = host.left_edge(reference).max(0.0);
    trace!(margin, "edge margins");

    if let Some(first) = parts.first_item() {
        host.apply(first.root, &StylePatch::new().margin_left(margin));
    }
    if let Some(last) = parts.last_item() {
        host.apply(last.root, &StylePatch::new().margin_right(margin));
    }
}

fn sync_scrollbar<H: Host>(
    host: &mut H,
    parts: &SliderParts,
    metrics: &Metrics,
    scroll: &ScrollPosition,
) {
    let Some((track, thumb)) = parts.scrollbar() else {
        return;
    };

    if metrics.item_count == 0 || metrics.content_width <= metrics.viewport_width {
        host.apply(track, &StylePatch::new().displayed(false));
        return;
    }
    host.apply(track, &StylePatch::new().displayed(true));

    let proportion = metrics.visible_item_count() / metrics.item_count.max(1) as f32;
    let thumb_width = (proportion * metrics.track_width).max(MIN_THUMB_WIDTH);
    let thumb_offset = scroll.progress() * (metrics.track_width - thumb_width).max(0.0);
    trace!(thumb_width, thumb_offset, "thumb geometry");

    host.apply(
        thumb,
        &StylePatch::new()
            .width(thumb_width)
            .translate_x(thumb_offset),
    );
}

fn sync_buttons<H: Host>(
    host: &mut H,
    parts: &SliderParts,
    metrics: &Metrics,
    scroll: &ScrollPosition,
    config: &SliderConfig,
) {
    // Content that fits (within tolerance) needs no paging at all.
    let scrollable = metrics.content_width > metrics.viewport_width + config.edge_tolerance;
    let show_prev = scrollable && scroll.get() > config.edge_tolerance;
    let show_next = scrollable && scroll.get() < scroll.max_scroll() - config.edge_tolerance;

    if let Some(prev) = parts.prev_button {
        host.apply(prev, &button_patch(show_prev));
    }
    if let Some(next) = parts.next_button {
        host.apply(next, &button_patch(show_next));
    }
}

fn button_patch(shown: bool) -> StylePatch {
    if shown {
        StylePatch::new()
            .opacity(1.0)
            .visibility(Visibility::Visible)
            .hit_testable(true)
    } else {
        StylePatch::new()
            .opacity(0.0)
            .visibility(Visibility::Hidden)
            .hit_testable(false)
    }
}
