//! Host surface contract
//!
//! The engine is headless: everything it knows about the page arrives
//! through [`Host`] measurement calls, and everything it changes leaves as
//! [`StylePatch`] writes or scroll-offset pushes. A host is typically a DOM
//! bridge, but the contract is narrow enough that the test suite drives the
//! whole engine against an in-memory implementation.
//!
//! Discovery happens on the host side: it locates the container, items,
//! optional controls and the margin-reference candidates by whatever
//! selectors it owns, mints a [`NodeId`] per element, and hands the result
//! over as [`SliderParts`]. A part that was not found is simply `None` (or
//! empty) and the matching engine feature stays off.

use glide_core::{NodeId, PointerId, StylePatch};
use smallvec::SmallVec;

/// Measurement and mutation surface the engine runs against.
///
/// Measurement methods are reads of current rendered layout and must not
/// mutate. Geometry is in CSS-pixel viewport coordinates.
pub trait Host {
    /// Full scrollable width of a scroll surface (its content extent).
    fn content_width(&self, node: NodeId) -> f32;

    /// Visible width of a node (its inner/client width).
    fn viewport_width(&self, node: NodeId) -> f32;

    /// Rendered outer width of a node (border-box bounding width).
    fn outer_width(&self, node: NodeId) -> f32;

    /// Trailing (right) margin of a node.
    fn trailing_margin(&self, node: NodeId) -> f32;

    /// Distance of a node's left edge from the viewport's left edge.
    fn left_edge(&self, node: NodeId) -> f32;

    /// Whether the node is rendered with a non-empty box.
    fn is_visible(&self, node: NodeId) -> bool;

    /// Apply a sparse inline-style write to a node.
    fn apply(&mut self, node: NodeId, patch: &StylePatch);

    /// Push the authoritative scroll offset onto a scroll surface.
    fn set_scroll_left(&mut self, node: NodeId, x: f32);

    /// Route subsequent events of a pointer to a node until release.
    fn capture_pointer(&mut self, node: NodeId, pointer: PointerId);

    /// Release a pointer capture previously acquired on a node.
    fn release_pointer(&mut self, node: NodeId, pointer: PointerId);
}

/// One carousel item as discovered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemParts {
    /// The item element itself (hover/focus events target this node).
    pub root: NodeId,
    /// The item's primary visual, if any.
    pub primary: Option<NodeId>,
    /// Overlay visuals revealed on hover.
    pub overlays: SmallVec<[NodeId; 2]>,
}

impl ItemParts {
    pub fn new(root: NodeId) -> Self {
        Self {
            root,
            primary: None,
            overlays: SmallVec::new(),
        }
    }

    pub fn primary(mut self, node: NodeId) -> Self {
        self.primary = Some(node);
        self
    }

    pub fn overlay(mut self, node: NodeId) -> Self {
        self.overlays.push(node);
        self
    }

    /// Whether the item participates in the hover crossfade at all.
    pub fn has_visuals(&self) -> bool {
        self.primary.is_some() || !self.overlays.is_empty()
    }
}

/// The discovery contract: everything the host found for one slider.
///
/// Exactly one `SliderParts` (and one engine instance) exists per
/// container; the container handle is stable for the instance's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SliderParts {
    /// The slider container holding the item list.
    pub container: NodeId,
    /// The scrollable surface, when it is an ancestor distinct from the
    /// container. `None` means the container scrolls itself.
    pub scroller: Option<NodeId>,
    /// Items in document order.
    pub items: Vec<ItemParts>,
    pub prev_button: Option<NodeId>,
    pub next_button: Option<NodeId>,
    /// Custom scrollbar rail.
    pub track: Option<NodeId>,
    /// Draggable scrollbar thumb, nested in the track.
    pub thumb: Option<NodeId>,
    /// Left-margin reference candidates in document order; the first
    /// visible one wins.
    pub margin_refs: Vec<NodeId>,
}

impl SliderParts {
    pub fn new(container: NodeId) -> Self {
        Self {
            container,
            ..Default::default()
        }
    }

    pub fn scroller(mut self, node: NodeId) -> Self {
        self.scroller = Some(node);
        self
    }

    pub fn item(mut self, item: ItemParts) -> Self {
        self.items.push(item);
        self
    }

    pub fn prev_button(mut self, node: NodeId) -> Self {
        self.prev_button = Some(node);
        self
    }

    pub fn next_button(mut self, node: NodeId) -> Self {
        self.next_button = Some(node);
        self
    }

    pub fn track(mut self, node: NodeId) -> Self {
        self.track = Some(node);
        self
    }

    pub fn thumb(mut self, node: NodeId) -> Self {
        self.thumb = Some(node);
        self
    }

    pub fn margin_ref(mut self, node: NodeId) -> Self {
        self.margin_refs.push(node);
        self
    }

    /// The surface scroll offsets are read from and written to.
    pub fn scroll_surface(&self) -> NodeId {
        self.scroller.unwrap_or(self.container)
    }

    /// Track and thumb together, when both were discovered.
    pub fn scrollbar(&self) -> Option<(NodeId, NodeId)> {
        Some((self.track?, self.thumb?))
    }

    pub fn first_item(&self) -> Option<&ItemParts> {
        self.items.first()
    }

    pub fn last_item(&self) -> Option<&ItemParts> {
        self.items.last()
    }
}
