//! Reveal sequencing
//!
//! A [`RevealSequence`] wraps one section's trigger and cascades the
//! entrance transition across its direct children with a per-child stagger
//! delay. It is driven cooperatively: the host loop feeds visibility ratios
//! (or a mount signal) and advances time with [`RevealSequence::tick`], then
//! samples each child's current visuals.
//!
//! Dropping a sequence mid-flight discards any child transitions that have
//! not started or finished - teardown is a silent no-op.

use crate::prefs::MotionPrefs;
use crate::stagger::StaggerSchedule;
use crate::state::{MotionState, RevealTrigger};
use crate::variants::{fade_up, Variant, VisualTarget};

/// Interpolated visuals for one child at the current time
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualSample {
    pub opacity: f32,
    pub translate_y: f32,
}

impl From<VisualTarget> for VisualSample {
    fn from(t: VisualTarget) -> Self {
        Self {
            opacity: t.opacity,
            translate_y: t.translate_y,
        }
    }
}

/// One child's timed fade-up track
#[derive(Clone, Debug)]
struct FadeTrack {
    /// Start delay after the section's edge (ms)
    delay_ms: u32,
    /// Elapsed time since the section's edge (ms), only advanced once shown
    elapsed_ms: f32,
}

impl FadeTrack {
    /// Normalized progress of this track's own transition
    fn progress(&self, duration_ms: u32) -> f32 {
        if duration_ms == 0 {
            return 1.0;
        }
        let local = self.elapsed_ms - self.delay_ms as f32;
        (local / duration_ms as f32).clamp(0.0, 1.0)
    }
}

/// A section's reveal: one trigger, one variant, N staggered child tracks
#[derive(Clone, Debug)]
pub struct RevealSequence {
    trigger: RevealTrigger,
    variant: Variant,
    tracks: Vec<FadeTrack>,
}

impl RevealSequence {
    /// Visibility-triggered section with `child_count` staggered children
    pub fn on_visibility(threshold: f32, child_count: usize, prefs: MotionPrefs) -> Self {
        Self::with_trigger(RevealTrigger::on_visibility(threshold), child_count, prefs)
    }

    /// Mount-triggered section (the above-the-fold header)
    pub fn on_mount(child_count: usize, prefs: MotionPrefs) -> Self {
        Self::with_trigger(RevealTrigger::on_mount(), child_count, prefs)
    }

    fn with_trigger(trigger: RevealTrigger, child_count: usize, prefs: MotionPrefs) -> Self {
        let schedule = StaggerSchedule::default();
        let tracks = (0..child_count)
            .map(|i| FadeTrack {
                delay_ms: schedule.delay_for_index(i),
                elapsed_ms: 0.0,
            })
            .collect();
        Self {
            trigger,
            variant: fade_up(prefs),
            tracks,
        }
    }

    /// Section state
    pub fn state(&self) -> MotionState {
        self.trigger.state()
    }

    /// Number of child tracks
    pub fn child_count(&self) -> usize {
        self.tracks.len()
    }

    /// The entrance variant shared by every child
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Feed a viewport intersection ratio; returns true if the section's
    /// edge fired on this observation
    pub fn observe(&mut self, ratio: f32) -> bool {
        self.trigger.observe(ratio)
    }

    /// Signal page mount; returns true if the section's edge fired
    pub fn mount(&mut self) -> bool {
        self.trigger.mount()
    }

    /// Advance time by `dt_ms`
    ///
    /// Before the section's edge fires this is a no-op: child clocks only
    /// run once the section is shown, so a later trigger still plays the
    /// full cascade.
    pub fn tick(&mut self, dt_ms: f32) {
        if !self.trigger.state().is_shown() {
            return;
        }
        for track in &mut self.tracks {
            track.elapsed_ms += dt_ms;
        }
    }

    /// Current visuals for the child at `index`
    ///
    /// Hidden target before the section's edge and during the child's
    /// stagger delay; eased interpolation while in flight; shown target
    /// once settled.
    pub fn sample(&self, index: usize) -> VisualSample {
        let Some(track) = self.tracks.get(index) else {
            return self.variant.shown.into();
        };
        if !self.trigger.state().is_shown() {
            return self.variant.hidden.into();
        }

        let t = self.variant.easing.apply(track.progress(self.variant.duration_ms));
        let hidden = self.variant.hidden;
        let shown = self.variant.shown;
        VisualSample {
            opacity: hidden.opacity + (shown.opacity - hidden.opacity) * t,
            translate_y: hidden.translate_y + (shown.translate_y - hidden.translate_y) * t,
        }
    }

    /// Whether every child has reached its shown target
    pub fn is_settled(&self) -> bool {
        self.trigger.state().is_shown()
            && self
                .tracks
                .iter()
                .all(|tr| tr.progress(self.variant.duration_ms) >= 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32) {
        assert!((a - b).abs() < 1e-4, "{a} != {b}");
    }

    #[test]
    fn test_hidden_until_threshold() {
        let mut seq = RevealSequence::on_visibility(0.18, 3, MotionPrefs::full());
        seq.observe(0.1);
        seq.tick(1000.0);
        for i in 0..3 {
            let s = seq.sample(i);
            assert_close(s.opacity, 0.0);
            assert_close(s.translate_y, 14.0);
        }
        assert!(!seq.is_settled());
    }

    #[test]
    fn test_cascade_after_trigger() {
        let mut seq = RevealSequence::on_visibility(0.18, 2, MotionPrefs::full());
        assert!(seq.observe(0.2));

        // At t=20ms the first child is exactly at its start
        seq.tick(20.0);
        let first = seq.sample(0);
        assert_close(first.opacity, 0.0);

        // Second child (delay 100ms) has not started yet
        let second = seq.sample(1);
        assert_close(second.opacity, 0.0);
        assert_close(second.translate_y, 14.0);

        // Well past all delays and durations, both settle
        seq.tick(1000.0);
        for i in 0..2 {
            let s = seq.sample(i);
            assert_close(s.opacity, 1.0);
            assert_close(s.translate_y, 0.0);
        }
        assert!(seq.is_settled());
    }

    #[test]
    fn test_mount_section_needs_no_visibility() {
        let mut seq = RevealSequence::on_mount(5, MotionPrefs::full());
        assert!(seq.mount());
        assert_eq!(seq.state(), MotionState::Shown);
        seq.tick(2000.0);
        assert!(seq.is_settled());
    }

    #[test]
    fn test_time_does_not_run_while_hidden() {
        let mut seq = RevealSequence::on_visibility(0.18, 1, MotionPrefs::full());
        // Scroll time passes while the section is off screen
        seq.tick(10_000.0);
        assert!(seq.observe(0.5));
        // The cascade still starts from zero
        let s = seq.sample(0);
        assert_close(s.opacity, 0.0);
        seq.tick(1000.0);
        assert!(seq.is_settled());
    }

    #[test]
    fn test_reduced_motion_never_slides() {
        let mut seq = RevealSequence::on_visibility(0.18, 2, MotionPrefs::reduced());
        seq.observe(0.5);
        seq.tick(130.0); // mid-flight for child 0
        for i in 0..2 {
            assert_close(seq.sample(i).translate_y, 0.0);
        }
    }

    #[test]
    fn test_midflight_values_between_targets() {
        let mut seq = RevealSequence::on_visibility(0.18, 1, MotionPrefs::full());
        seq.observe(1.0);
        seq.tick(20.0 + 250.0); // half way through child 0's 500ms
        let s = seq.sample(0);
        assert!(s.opacity > 0.0 && s.opacity < 1.0);
        assert!(s.translate_y > 0.0 && s.translate_y < 14.0);
        // Settle easing front-loads progress
        assert!(s.opacity > 0.5);
    }

    #[test]
    fn test_out_of_range_child_is_settled() {
        let seq = RevealSequence::on_visibility(0.18, 1, MotionPrefs::full());
        let s = seq.sample(42);
        assert_close(s.opacity, 1.0);
    }
}
