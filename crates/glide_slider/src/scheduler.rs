//! Reactive update scheduler
//!
//! Collects the work that external triggers request (full relayout, cheap
//! scrollbar/button refresh, hover rebuild, deferred flag resets) and
//! hands it out once per rendering frame. Scroll events in particular are
//! coalesced through a ticking guard: the first one schedules a cheap
//! pass, the rest of the frame's scrolls fold into it.

use smallvec::SmallVec;
use tracing::trace;

/// Work queued to run on a later frame, after the current event settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Reset the post-drag click-suppression flag.
    ClearDragFlag,
}

/// What one frame drain resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FramePlan {
    /// Re-measure and run the full layout pass (margins included).
    pub full: bool,
    /// Scrollbar and buttons only. Subsumed by `full`.
    pub cheap: bool,
    pub rebuild_hover: bool,
    pub deferred: SmallVec<[Deferred; 2]>,
}

impl FramePlan {
    pub fn is_empty(&self) -> bool {
        !self.full && !self.cheap && !self.rebuild_hover && self.deferred.is_empty()
    }
}

/// Frame-coalescing request collector.
#[derive(Debug, Clone, Default)]
pub struct UpdateScheduler {
    ticking: bool,
    full: bool,
    cheap: bool,
    rebuild_hover: bool,
    deferred: SmallVec<[Deferred; 2]>,
}

impl UpdateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request_full(&mut self) {
        self.full = true;
    }

    pub fn request_cheap(&mut self) {
        self.cheap = true;
    }

    pub fn request_hover_rebuild(&mut self) {
        self.rebuild_hover = true;
    }

    /// A native scroll arrived. Returns `true` for the first of the frame;
    /// later ones are folded into the already-scheduled pass.
    pub fn on_scroll(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        self.cheap = true;
        true
    }

    pub fn defer(&mut self, task: Deferred) {
        if !self.deferred.contains(&task) {
            self.deferred.push(task);
        }
    }

    pub fn is_idle(&self) -> bool {
        !self.full && !self.cheap && !self.rebuild_hover && self.deferred.is_empty()
    }

    /// Take this frame's plan and reset for the next one.
    pub fn drain(&mut self) -> FramePlan {
        let plan = FramePlan {
            full: self.full,
            // A full pass already covers the cheap one.
            cheap: self.cheap && !self.full,
            rebuild_hover: self.rebuild_hover,
            deferred: std::mem::take(&mut self.deferred),
        };
        self.full = false;
        self.cheap = false;
        self.rebuild_hover = false;
        self.ticking = false;
        if !plan.is_empty() {
            trace!(
                full = plan.full,
                cheap = plan.cheap,
                hover = plan.rebuild_hover,
                "frame plan"
            );
        }
        plan
    }
}
