//! State machine trait for interaction controllers
//!
//! Every interaction in the engine (drag, thumb drag, hover crossfade) is an
//! explicit state machine: a small `Copy` enum whose transitions are a pure
//! function of (state, event). Controllers dispatch event ids at the moments
//! they occur and adopt the returned state, which makes reentrancy rules
//! (who may write scroll position, when momentum is cancelled) a matter of
//! the transition table instead of callback ordering.
//!
//! ```
//! use glide_core::events::event_types::*;
//! use glide_core::fsm::StateTransitions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
//! enum Press {
//!     #[default]
//!     Up,
//!     Down,
//! }
//!
//! impl StateTransitions for Press {
//!     fn on_event(&self, event: u32) -> Option<Self> {
//!         match (self, event) {
//!             (Press::Up, POINTER_DOWN) => Some(Press::Down),
//!             (Press::Down, POINTER_UP) => Some(Press::Up),
//!             _ => None,
//!         }
//!     }
//! }
//!
//! assert_eq!(Press::Up.on_event(POINTER_DOWN), Some(Press::Down));
//! assert_eq!(Press::Up.on_event(POINTER_UP), None);
//! ```

use std::hash::Hash;

/// Trait for state types that transition on event ids.
///
/// Returning `None` means the event does not cause a transition from the
/// current state; callers keep the state they have.
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or `None` if no transition.
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// Dispatch an event against a state slot, adopting the transition if any.
///
/// Returns `true` when the state changed.
pub fn dispatch<S: StateTransitions>(state: &mut S, event: u32) -> bool {
    if let Some(next) = state.on_event(event) {
        if next != *state {
            tracing::trace!(?state, ?next, event, "state transition");
            *state = next;
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::event_types::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    enum Toggle {
        #[default]
        Off,
        On,
    }

    impl StateTransitions for Toggle {
        fn on_event(&self, event: u32) -> Option<Self> {
            match (self, event) {
                (Toggle::Off, CLICK) => Some(Toggle::On),
                (Toggle::On, CLICK) => Some(Toggle::Off),
                _ => None,
            }
        }
    }

    #[test]
    fn dispatch_adopts_transitions() {
        let mut state = Toggle::Off;
        assert!(dispatch(&mut state, CLICK));
        assert_eq!(state, Toggle::On);
        assert!(!dispatch(&mut state, POINTER_MOVE));
        assert_eq!(state, Toggle::On);
    }
}
