//! Geometry probe
//!
//! Pure measurement pass over the slider's parts. [`measure`] reads current
//! rendered layout through the host and returns a [`Metrics`] snapshot;
//! nothing here mutates. All derived quantities guard their divisors so
//! degenerate layouts (zero items, zero-width containers) stay finite.

use crate::host::{Host, SliderParts};

/// Fraction of the viewport used as the item step when no item exists yet.
const FALLBACK_STEP_FRACTION: f32 = 0.9;

/// One measurement snapshot of the slider's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    /// Scrollable extent of the scroll surface.
    pub content_width: f32,
    /// Visible width of the scroll surface.
    pub viewport_width: f32,
    pub item_count: usize,
    /// Distance one item advance moves the content.
    pub item_step_width: f32,
    /// Inner width of the scrollbar rail, 0 when absent.
    pub track_width: f32,
    /// Rendered width of the thumb, 0 when absent.
    pub thumb_width: f32,
}

impl Metrics {
    /// Largest valid scroll offset.
    pub fn max_scroll(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    /// Mean rendered item width, divisor floored at one item.
    pub fn average_item_width(&self) -> f32 {
        self.content_width / self.item_count.max(1) as f32
    }

    /// How many items fit the viewport, floored at 1.
    pub fn visible_item_count(&self) -> f32 {
        let avg = self.average_item_width().max(1.0);
        (self.viewport_width / avg).round().max(1.0)
    }

    /// Whether the content fits the viewport within a 1 px tolerance.
    pub fn fits(&self) -> bool {
        self.content_width <= self.viewport_width + 1.0
    }
}

/// Measure the slider's current geometry. Read-only.
pub fn measure<H: Host>(host: &H, parts: &SliderParts) -> Metrics {
    let surface = parts.scroll_surface();
    let viewport_width = host.viewport_width(surface);

    let item_step_width = match parts.first_item() {
        Some(item) => {
            let step = host.outer_width(item.root) + host.trailing_margin(item.root);
            step.max(1.0)
        }
        None => (viewport_width * FALLBACK_STEP_FRACTION).max(1.0),
    };

    Metrics {
        content_width: host.content_width(surface),
        viewport_width,
        item_count: parts.items.len(),
        item_step_width,
        track_width: parts
            .track
            .map(|track| host.viewport_width(track))
            .unwrap_or(0.0),
        thumb_width: parts
            .thumb
            .map(|thumb| host.outer_width(thumb))
            .unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::testing::{TestHost, TestNode};
    use crate::host::ItemParts;

    fn surface(host: &mut TestHost, content: f32, viewport: f32) -> glide_core::NodeId {
        host.add(TestNode {
            content_width: content,
            viewport_width: viewport,
            ..TestNode::default()
        })
    }

    #[test]
    fn step_width_comes_from_first_item() {
        let mut host = TestHost::new();
        let container = surface(&mut host, 3000.0, 1000.0);
        let first = host.add(TestNode {
            outer_width: 940.0,
            trailing_margin: 60.0,
            ..TestNode::default()
        });
        let parts = SliderParts::new(container).item(ItemParts::new(first));

        let metrics = measure(&host, &parts);
        assert_eq!(metrics.item_step_width, 1000.0);
        assert_eq!(metrics.max_scroll(), 2000.0);
    }

    #[test]
    fn step_width_falls_back_to_viewport_fraction() {
        let mut host = TestHost::new();
        let container = surface(&mut host, 0.0, 1000.0);
        let parts = SliderParts::new(container);

        let metrics = measure(&host, &parts);
        assert_eq!(metrics.item_step_width, 900.0);
        assert_eq!(metrics.item_count, 0);
    }

    #[test]
    fn zero_width_layout_stays_finite() {
        let mut host = TestHost::new();
        let container = surface(&mut host, 0.0, 0.0);
        let parts = SliderParts::new(container);

        let metrics = measure(&host, &parts);
        assert_eq!(metrics.item_step_width, 1.0);
        assert!(metrics.average_item_width().is_finite());
        assert_eq!(metrics.visible_item_count(), 1.0);
        assert_eq!(metrics.max_scroll(), 0.0);
    }

    #[test]
    fn scroller_is_measured_instead_of_container() {
        let mut host = TestHost::new();
        let container = surface(&mut host, 0.0, 0.0);
        let scroller = surface(&mut host, 2400.0, 800.0);
        let parts = SliderParts::new(container).scroller(scroller);

        let metrics = measure(&host, &parts);
        assert_eq!(metrics.content_width, 2400.0);
        assert_eq!(metrics.viewport_width, 800.0);
    }

    #[test]
    fn content_that_fits_reports_fitting() {
        let mut host = TestHost::new();
        let container = surface(&mut host, 800.5, 800.0);
        let parts = SliderParts::new(container);

        assert!(measure(&host, &parts).fits());
    }
}
