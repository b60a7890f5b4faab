//! Reduced-motion preference
//!
//! The accessibility preference is sampled once and passed explicitly into
//! every variant constructor - there is no ambient global. A source that
//! cannot be read degrades to full motion rather than failing.

use tracing::warn;

/// User motion preference, injected into every animated component
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPrefs {
    /// When true, vertical offsets collapse to zero and hover lift becomes
    /// the identity transform. Elements still fade via opacity.
    pub reduce: bool,
}

impl MotionPrefs {
    /// Full motion
    pub fn full() -> Self {
        Self { reduce: false }
    }

    /// Reduced motion
    pub fn reduced() -> Self {
        Self { reduce: true }
    }

    /// Sample the preference from a fallible source
    ///
    /// A source failure is not an error condition: the page falls back to
    /// full motion.
    pub fn from_source<E: std::fmt::Display>(source: impl FnOnce() -> Result<bool, E>) -> Self {
        match source() {
            Ok(reduce) => Self { reduce },
            Err(err) => {
                warn!(%err, "could not read reduced-motion preference, using full motion");
                Self::full()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_value_passes_through() {
        let prefs = MotionPrefs::from_source(|| Ok::<_, String>(true));
        assert!(prefs.reduce);
        let prefs = MotionPrefs::from_source(|| Ok::<_, String>(false));
        assert!(!prefs.reduce);
    }

    #[test]
    fn test_unreadable_source_means_full_motion() {
        let prefs = MotionPrefs::from_source(|| Err("no display server"));
        assert!(!prefs.reduce);
    }
}
