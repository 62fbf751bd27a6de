//! Cancellable deadline timers
//!
//! The host multiplexes every timer onto one thread, so a timer is only a
//! deadline. Callbacks that arrive after `cancel` or before the deadline are
//! ignored, which keeps a torn-down timer from firing into a fresh session.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timer {
    deadline_ms: Option<f64>,
}

impl Timer {
    /// Arm (or re-arm) to fire `delay_ms` after `now_ms`
    pub fn arm(&mut self, now_ms: f64, delay_ms: f64) {
        self.deadline_ms = Some(now_ms + delay_ms);
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline_ms
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn is_due(&self, now_ms: f64) -> bool {
        self.deadline_ms.is_some_and(|deadline| now_ms >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_and_due() {
        let mut timer = Timer::default();
        assert!(!timer.is_due(1e9));
        timer.arm(100.0, 500.0);
        assert_eq!(timer.deadline(), Some(600.0));
        assert!(!timer.is_due(599.0));
        assert!(timer.is_due(600.0));
    }

    #[test]
    fn test_rearm_replaces_deadline() {
        let mut timer = Timer::default();
        timer.arm(0.0, 2000.0);
        timer.arm(1000.0, 1900.0);
        assert!(!timer.is_due(2000.0));
        assert!(timer.is_due(2900.0));
    }

    #[test]
    fn test_cancel() {
        let mut timer = Timer::default();
        timer.arm(0.0, 10.0);
        timer.cancel();
        assert!(!timer.is_armed());
        assert!(!timer.is_due(100.0));
    }
}
