//! Stagger scheduling for grouped reveals
//!
//! Siblings sharing one parent trigger animate in sequence: child `i`
//! starts at `base_delay + i * interval` after the parent's edge.

/// Base delay before the first child starts, in milliseconds
pub const STAGGER_BASE_DELAY_MS: u32 = 20;

/// Delay between consecutive children, in milliseconds
pub const STAGGER_INTERVAL_MS: u32 = 80;

/// Per-sibling start-delay schedule
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggerSchedule {
    /// Delay before the first child's animation starts (ms)
    pub base_delay_ms: u32,
    /// Delay between each child's animation start (ms)
    pub interval_ms: u32,
}

impl Default for StaggerSchedule {
    fn default() -> Self {
        Self {
            base_delay_ms: STAGGER_BASE_DELAY_MS,
            interval_ms: STAGGER_INTERVAL_MS,
        }
    }
}

impl StaggerSchedule {
    /// Create a schedule with explicit timings
    pub fn new(base_delay_ms: u32, interval_ms: u32) -> Self {
        Self {
            base_delay_ms,
            interval_ms,
        }
    }

    /// Start delay for the child at `index`
    pub fn delay_for_index(&self, index: usize) -> u32 {
        self.base_delay_ms + self.interval_ms * index as u32
    }

    /// Start delays for a group of `count` children, in sibling order
    pub fn delays(&self, count: usize) -> Vec<u32> {
        (0..count).map(|i| self.delay_for_index(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delay_formula() {
        let s = StaggerSchedule::default();
        assert_eq!(s.delay_for_index(0), 20);
        assert_eq!(s.delay_for_index(1), 100);
        assert_eq!(s.delay_for_index(2), 180);
        assert_eq!(s.delay_for_index(3), 260);
        assert_eq!(s.delay_for_index(4), 340);
    }

    #[test]
    fn test_delays_strictly_increasing_no_duplicates() {
        let s = StaggerSchedule::default();
        let delays = s.delays(12);
        for pair in delays.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_custom_schedule() {
        let s = StaggerSchedule::new(0, 50);
        assert_eq!(s.delays(3), vec![0, 50, 100]);
    }
}
