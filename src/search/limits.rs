//! Cancellation for a running search: a wall-clock deadline and/or a stop
//! flag another thread can raise.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Nodes visited between two limit checks (must be a power of two).
pub const CHECK_INTERVAL: u64 = 256;

#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    deadline: Option<Instant>,
    stop: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    /// No limits: the search runs to its full depth.
    pub fn none() -> Self {
        Self::default()
    }

    /// Stop once `budget` has elapsed from now.
    pub fn with_time_limit(budget: Duration) -> Self {
        Self::none().deadline(Instant::now() + budget)
    }

    pub fn deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn stop_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop = Some(flag);
        self
    }

    pub fn is_unlimited(&self) -> bool {
        self.deadline.is_none() && self.stop.is_none()
    }

    /// True once the deadline has passed or the stop flag is raised.
    #[inline]
    pub fn should_stop(&self) -> bool {
        if let Some(flag) = &self.stop {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_never_stops() {
        let limits = SearchLimits::none();
        assert!(limits.is_unlimited());
        assert!(!limits.should_stop());
    }

    #[test]
    fn test_expired_deadline_stops() {
        let limits = SearchLimits::with_time_limit(Duration::ZERO);
        assert!(!limits.is_unlimited());
        assert!(limits.should_stop());

        let limits = SearchLimits::with_time_limit(Duration::from_secs(3600));
        assert!(!limits.should_stop());
    }

    #[test]
    fn test_stop_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let limits = SearchLimits::none().stop_flag(Arc::clone(&flag));
        assert!(!limits.should_stop());
        flag.store(true, Ordering::Relaxed);
        assert!(limits.should_stop());
    }

    #[test]
    fn test_check_interval_is_power_of_two() {
        assert!(CHECK_INTERVAL.is_power_of_two());
    }
}
