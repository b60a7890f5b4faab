//! Transition variant table
//!
//! Pure functions from [`MotionState`] to visual targets. The page uses one
//! entrance variant (`fade_up`) plus two stateless pointer
//! micro-interactions (hover lift, press scale). All vertical motion is
//! conditioned on [`MotionPrefs`].

use crate::easing::Easing;
use crate::prefs::MotionPrefs;
use crate::state::MotionState;

/// Vertical offset of the fade-up hidden target, in logical units
pub const FADE_UP_OFFSET: f32 = 14.0;

/// Duration of the fade-up entrance, in milliseconds
pub const FADE_UP_DURATION_MS: u32 = 500;

/// Hover lift offset, in logical units (negative = upward)
pub const HOVER_LIFT_OFFSET: f32 = -2.0;

/// Hover lift duration, in milliseconds
pub const HOVER_LIFT_DURATION_MS: u32 = 150;

/// Press scale factor
pub const PRESS_SCALE: f32 = 0.98;

/// Visual target for one motion state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualTarget {
    /// Opacity in [0, 1]
    pub opacity: f32,
    /// Vertical offset in logical units (positive = downward)
    pub translate_y: f32,
}

impl VisualTarget {
    /// Fully visible, at rest
    pub fn identity() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
        }
    }
}

/// A two-state variant: visual targets for both motion states plus the
/// timing of the `Hidden -> Shown` transition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variant {
    pub hidden: VisualTarget,
    pub shown: VisualTarget,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl Variant {
    /// The visual target for a given state
    pub fn target(&self, state: MotionState) -> VisualTarget {
        match state {
            MotionState::Hidden => self.hidden,
            MotionState::Shown => self.shown,
        }
    }
}

/// The entrance variant: fade in while sliding up into place
///
/// Under reduced motion the slide component is zero; the fade remains.
pub fn fade_up(prefs: MotionPrefs) -> Variant {
    Variant {
        hidden: VisualTarget {
            opacity: 0.0,
            translate_y: if prefs.reduce { 0.0 } else { FADE_UP_OFFSET },
        },
        shown: VisualTarget::identity(),
        duration_ms: FADE_UP_DURATION_MS,
        easing: Easing::settle(),
    }
}

/// Target of a pointer micro-interaction
///
/// Stateless and reactive only: applied while the pointer condition holds,
/// with no persisted state and no interaction with the MotionState machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionTarget {
    /// Vertical offset in logical units
    pub translate_y: f32,
    /// Uniform scale factor
    pub scale: f32,
    /// Transition duration in milliseconds
    pub duration_ms: u32,
}

impl InteractionTarget {
    /// No visual change
    pub fn identity() -> Self {
        Self {
            translate_y: 0.0,
            scale: 1.0,
            duration_ms: 0,
        }
    }

    /// Whether this target leaves the element untouched
    pub fn is_identity(&self) -> bool {
        self.translate_y == 0.0 && self.scale == 1.0
    }
}

/// Hover response: lift interactive elements by 2 logical units
///
/// Identity under reduced motion.
pub fn hover_lift(prefs: MotionPrefs) -> InteractionTarget {
    if prefs.reduce {
        InteractionTarget::identity()
    } else {
        InteractionTarget {
            translate_y: HOVER_LIFT_OFFSET,
            scale: 1.0,
            duration_ms: HOVER_LIFT_DURATION_MS,
        }
    }
}

/// Press response: scale to 0.98 of natural size
pub fn press_scale() -> InteractionTarget {
    InteractionTarget {
        translate_y: 0.0,
        scale: PRESS_SCALE,
        duration_ms: HOVER_LIFT_DURATION_MS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_up_full_motion() {
        let v = fade_up(MotionPrefs::full());
        assert_eq!(v.hidden.opacity, 0.0);
        assert_eq!(v.hidden.translate_y, 14.0);
        assert_eq!(v.shown, VisualTarget::identity());
        assert_eq!(v.duration_ms, 500);
        assert_eq!(v.easing, Easing::CubicBezier(0.22, 1.0, 0.36, 1.0));
    }

    #[test]
    fn test_fade_up_reduced_motion_zeroes_offset() {
        let v = fade_up(MotionPrefs::reduced());
        assert_eq!(v.hidden.translate_y, 0.0);
        // Opacity fade is kept
        assert_eq!(v.hidden.opacity, 0.0);
        assert_eq!(v.shown.opacity, 1.0);
    }

    #[test]
    fn test_target_lookup() {
        let v = fade_up(MotionPrefs::full());
        assert_eq!(v.target(MotionState::Hidden), v.hidden);
        assert_eq!(v.target(MotionState::Shown), v.shown);
    }

    #[test]
    fn test_hover_lift() {
        let t = hover_lift(MotionPrefs::full());
        assert_eq!(t.translate_y, -2.0);
        assert_eq!(t.duration_ms, 150);
        assert!(!t.is_identity());
    }

    #[test]
    fn test_hover_lift_reduced_is_identity() {
        assert!(hover_lift(MotionPrefs::reduced()).is_identity());
    }

    #[test]
    fn test_press_scale() {
        let t = press_scale();
        assert_eq!(t.scale, 0.98);
        assert_eq!(t.translate_y, 0.0);
    }
}
