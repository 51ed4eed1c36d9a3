//! Inline-style wire format
//!
//! The engine's only output toward the rendering surface is a stream of
//! sparse inline-style writes: margins, opacity, visibility, a 2D
//! translate/scale transform, transition timing, cursor, and interaction
//! toggles. [`StylePatch`] is one such write; a host applies it over
//! whatever the element currently has. [`ComputedStyle`] is the resolved
//! state a patch folds into - hosts that need to answer "what does this
//! element look like now" (including the test host) keep one per node.
//!
//! The numeric contracts of the engine (button fade timing, crossfade
//! scales and curves) travel through this format unmodified, so a patch is
//! the unit the test suite asserts against.

use smallvec::SmallVec;

/// Element visibility, with the hidden state also dropping hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

/// Cursor shown while the pointer rests on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    Grab,
    Grabbing,
}

/// Timing curve of a transition, as cubic-bezier control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimingCurve {
    Linear,
    /// The generic `ease` curve.
    Ease,
    /// `cubic-bezier(x1, y1, x2, y2)`.
    CubicBezier(f32, f32, f32, f32),
}

/// Style properties a transition can animate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleProperty {
    Opacity,
    Transform,
    Visibility,
}

/// One property transition: duration plus timing curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub property: StyleProperty,
    pub duration_ms: f32,
    pub curve: TimingCurve,
}

impl Transition {
    pub fn new(property: StyleProperty, duration_ms: f32, curve: TimingCurve) -> Self {
        Self {
            property,
            duration_ms,
            curve,
        }
    }
}

/// Transition list as carried by patches and computed style.
pub type Transitions = SmallVec<[Transition; 3]>;

/// A sparse inline-style write.
///
/// `None` fields are left untouched on the target element. An explicit
/// `Some(default)` is how a patch resets a property (e.g.
/// `transitions: Some(empty)` clears transitions).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StylePatch {
    pub margin_left: Option<f32>,
    pub margin_right: Option<f32>,
    pub width: Option<f32>,
    pub opacity: Option<f32>,
    pub visibility: Option<Visibility>,
    pub translate_x: Option<f32>,
    pub scale: Option<f32>,
    pub transitions: Option<Transitions>,
    pub cursor: Option<Cursor>,
    /// Whether the element receives pointer events.
    pub hit_testable: Option<bool>,
    /// Whether the element is rendered at all (`display: none` when false).
    pub displayed: Option<bool>,
    /// Whether text/content selection is allowed on the element.
    pub selectable: Option<bool>,
    /// Whether the platform may handle pan gestures on the element itself.
    pub pan_enabled: Option<bool>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn margin_left(mut self, px: f32) -> Self {
        self.margin_left = Some(px);
        self
    }

    pub fn margin_right(mut self, px: f32) -> Self {
        self.margin_right = Some(px);
        self
    }

    pub fn width(mut self, px: f32) -> Self {
        self.width = Some(px);
        self
    }

    pub fn opacity(mut self, value: f32) -> Self {
        self.opacity = Some(value);
        self
    }

    pub fn visibility(mut self, value: Visibility) -> Self {
        self.visibility = Some(value);
        self
    }

    pub fn translate_x(mut self, px: f32) -> Self {
        self.translate_x = Some(px);
        self
    }

    pub fn scale(mut self, factor: f32) -> Self {
        self.scale = Some(factor);
        self
    }

    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition>) -> Self {
        self.transitions = Some(transitions.into_iter().collect());
        self
    }

    /// Clears any transition so follow-up writes land instantly.
    pub fn no_transitions(mut self) -> Self {
        self.transitions = Some(Transitions::new());
        self
    }

    pub fn cursor(mut self, cursor: Cursor) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn hit_testable(mut self, value: bool) -> Self {
        self.hit_testable = Some(value);
        self
    }

    pub fn displayed(mut self, value: bool) -> Self {
        self.displayed = Some(value);
        self
    }

    pub fn selectable(mut self, value: bool) -> Self {
        self.selectable = Some(value);
        self
    }

    pub fn pan_enabled(mut self, value: bool) -> Self {
        self.pan_enabled = Some(value);
        self
    }
}

/// Fully resolved inline style of one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedStyle {
    pub margin_left: f32,
    pub margin_right: f32,
    pub width: Option<f32>,
    pub opacity: f32,
    pub visibility: Visibility,
    pub translate_x: f32,
    pub scale: f32,
    pub transitions: Transitions,
    pub cursor: Cursor,
    pub hit_testable: bool,
    pub displayed: bool,
    pub selectable: bool,
    pub pan_enabled: bool,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            margin_left: 0.0,
            margin_right: 0.0,
            width: None,
            opacity: 1.0,
            visibility: Visibility::Visible,
            translate_x: 0.0,
            scale: 1.0,
            transitions: Transitions::new(),
            cursor: Cursor::Default,
            hit_testable: true,
            displayed: true,
            selectable: true,
            pan_enabled: true,
        }
    }
}

impl ComputedStyle {
    /// Fold a patch into the resolved style.
    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(v) = patch.margin_left {
            self.margin_left = v;
        }
        if let Some(v) = patch.margin_right {
            self.margin_right = v;
        }
        if let Some(v) = patch.width {
            self.width = Some(v);
        }
        if let Some(v) = patch.opacity {
            self.opacity = v;
        }
        if let Some(v) = patch.visibility {
            self.visibility = v;
        }
        if let Some(v) = patch.translate_x {
            self.translate_x = v;
        }
        if let Some(v) = patch.scale {
            self.scale = v;
        }
        if let Some(ref v) = patch.transitions {
            self.transitions = v.clone();
        }
        if let Some(v) = patch.cursor {
            self.cursor = v;
        }
        if let Some(v) = patch.hit_testable {
            self.hit_testable = v;
        }
        if let Some(v) = patch.displayed {
            self.displayed = v;
        }
        if let Some(v) = patch.selectable {
            self.selectable = v;
        }
        if let Some(v) = patch.pan_enabled {
            self.pan_enabled = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_only_touches_set_fields() {
        let mut style = ComputedStyle::default();
        style.opacity = 0.4;
        style.translate_x = 25.0;

        style.apply(&StylePatch::new().scale(1.12));

        assert_eq!(style.opacity, 0.4);
        assert_eq!(style.translate_x, 25.0);
        assert_eq!(style.scale, 1.12);
    }

    #[test]
    fn empty_transitions_reset_existing_ones() {
        let mut style = ComputedStyle::default();
        style.apply(&StylePatch::new().transitions([Transition::new(
            StyleProperty::Opacity,
            280.0,
            TimingCurve::CubicBezier(0.2, 0.8, 0.2, 1.0),
        )]));
        assert_eq!(style.transitions.len(), 1);

        style.apply(&StylePatch::new().no_transitions());
        assert!(style.transitions.is_empty());
    }

    #[test]
    fn default_patch_is_empty() {
        assert!(StylePatch::new().is_empty());
        assert!(!StylePatch::new().opacity(1.0).is_empty());
    }
}
