//! Folio Animation Core
//!
//! Toolkit-independent entrance animation system for the portfolio page:
//!
//! - **MotionState FSM**: two-state (`Hidden`/`Shown`) machine with a
//!   monotonic, one-shot `Hidden -> Shown` edge per element
//! - **Reveal Triggers**: visibility-threshold and mount-time triggers that
//!   disarm after firing ("once" semantics)
//! - **Variants**: pure mappings from `MotionState` to visual targets
//!   (opacity, vertical offset) with duration and easing
//! - **Stagger**: per-sibling start-delay scheduling for grouped reveals
//! - **Reduced Motion**: an explicit preference flag threaded through every
//!   variant, never read from ambient global state
//!
//! The core is driven cooperatively: the host render loop calls
//! [`RevealSequence::tick`] and samples per-child visuals each frame. No
//! threads, no blocking, and dropping a sequence mid-flight silently
//! discards any pending child transitions.

pub mod easing;
pub mod prefs;
pub mod reveal;
pub mod stagger;
pub mod state;
pub mod variants;

pub use easing::Easing;
pub use prefs::MotionPrefs;
pub use reveal::{RevealSequence, VisualSample};
pub use stagger::StaggerSchedule;
pub use state::{MotionState, RevealTrigger};
pub use variants::{fade_up, hover_lift, press_scale, InteractionTarget, Variant, VisualTarget};
