//! Motion state machine and one-shot reveal triggers
//!
//! Every animated element owns a [`MotionState`] with exactly two values and
//! a single legal edge: `Hidden -> Shown`. The edge is driven by a
//! [`RevealTrigger`], which disarms itself after firing so later visibility
//! changes (scrolling away and back) never replay the transition.

use tracing::trace;

/// Animation phase of a visual element
///
/// The transition is monotonic: once `Shown`, an element never returns to
/// `Hidden` for the lifetime of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MotionState {
    /// Initial state - element is at its hidden visual target
    #[default]
    Hidden,
    /// Terminal state - element has played (or is playing) its entrance
    Shown,
}

impl MotionState {
    /// Whether the entrance edge has fired
    pub fn is_shown(&self) -> bool {
        matches!(self, MotionState::Shown)
    }
}

/// How a trigger arms its `Hidden -> Shown` edge
#[derive(Clone, Copy, Debug, PartialEq)]
enum ArmKind {
    /// Fires when the viewport intersection ratio reaches a threshold
    Visibility { threshold: f32 },
    /// Fires unconditionally on the first mount call (above-the-fold header)
    Mount,
}

/// One-shot latch driving a single element's `Hidden -> Shown` edge
///
/// `observe` / `mount` return `true` exactly once, on the call that fires
/// the edge. After that the trigger is disarmed and every further input is
/// a no-op, including a visibility ratio of zero.
#[derive(Clone, Debug)]
pub struct RevealTrigger {
    kind: ArmKind,
    state: MotionState,
}

impl RevealTrigger {
    /// Default viewport intersection threshold for reveal sections
    pub const DEFAULT_THRESHOLD: f32 = 0.18;

    /// Lower threshold for the tall projects section, which should begin
    /// animating before it is fully scrolled into frame
    pub const PROJECTS_THRESHOLD: f32 = 0.15;

    /// Trigger that fires when at least `threshold` of the element's
    /// bounding box has entered the viewport
    pub fn on_visibility(threshold: f32) -> Self {
        Self {
            kind: ArmKind::Visibility { threshold },
            state: MotionState::Hidden,
        }
    }

    /// Trigger that fires on the first `mount()` call
    pub fn on_mount() -> Self {
        Self {
            kind: ArmKind::Mount,
            state: MotionState::Hidden,
        }
    }

    /// Current state of the driven element
    pub fn state(&self) -> MotionState {
        self.state
    }

    /// The visibility threshold, if this is a visibility trigger
    pub fn threshold(&self) -> Option<f32> {
        match self.kind {
            ArmKind::Visibility { threshold } => Some(threshold),
            ArmKind::Mount => None,
        }
    }

    /// Feed a viewport intersection ratio (0.0 to 1.0)
    ///
    /// Returns `true` if this observation fired the `Hidden -> Shown` edge.
    /// Mount triggers ignore visibility input entirely.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if self.state.is_shown() {
            return false;
        }
        match self.kind {
            ArmKind::Visibility { threshold } if ratio >= threshold => {
                trace!(ratio, threshold, "reveal trigger fired");
                self.state = MotionState::Shown;
                true
            }
            _ => false,
        }
    }

    /// Signal that the page has mounted
    ///
    /// Returns `true` if this call fired the edge (mount triggers only).
    pub fn mount(&mut self) -> bool {
        if self.state.is_shown() {
            return false;
        }
        match self.kind {
            ArmKind::Mount => {
                trace!("mount trigger fired");
                self.state = MotionState::Shown;
                true
            }
            ArmKind::Visibility { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_stays_hidden() {
        let mut t = RevealTrigger::on_visibility(0.18);
        assert!(!t.observe(0.0));
        assert!(!t.observe(0.17));
        assert_eq!(t.state(), MotionState::Hidden);
    }

    #[test]
    fn test_fires_exactly_once_at_threshold() {
        let mut t = RevealTrigger::on_visibility(0.18);
        assert!(t.observe(0.18));
        assert_eq!(t.state(), MotionState::Shown);
        // Further observations, including scrolling fully away, are no-ops
        assert!(!t.observe(1.0));
        assert!(!t.observe(0.0));
        assert_eq!(t.state(), MotionState::Shown);
    }

    #[test]
    fn test_projects_threshold_edge() {
        let mut t = RevealTrigger::on_visibility(RevealTrigger::PROJECTS_THRESHOLD);
        assert!(!t.observe(0.14));
        assert_eq!(t.state(), MotionState::Hidden);
        assert!(t.observe(0.15));
        assert_eq!(t.state(), MotionState::Shown);
    }

    #[test]
    fn test_mount_trigger_ignores_visibility() {
        let mut t = RevealTrigger::on_mount();
        assert!(!t.observe(1.0));
        assert_eq!(t.state(), MotionState::Hidden);
        assert!(t.mount());
        assert_eq!(t.state(), MotionState::Shown);
        assert!(!t.mount());
    }

    #[test]
    fn test_visibility_trigger_ignores_mount() {
        let mut t = RevealTrigger::on_visibility(0.18);
        assert!(!t.mount());
        assert_eq!(t.state(), MotionState::Hidden);
    }
}
