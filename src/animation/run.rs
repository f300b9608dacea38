//! Animation run state

use std::time::Duration;

use super::Easing;
use crate::format::AmountValue;

/// One interpolation from `start` to `end` over `duration`.
///
/// Only `elapsed` changes over the run's life, and it never moves backwards.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRun {
    pub start: AmountValue,
    pub end: AmountValue,
    pub duration: Duration,
    pub elapsed: Duration,
    pub easing: Easing,
}

impl AnimationRun {
    pub fn new(start: AmountValue, end: AmountValue, duration: Duration) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Move the run forward to `elapsed` since its start
    pub fn advance_to(&mut self, elapsed: Duration) {
        if elapsed > self.elapsed {
            self.elapsed = elapsed;
        }
    }

    /// Linear progress, `min(elapsed / duration, 1)`
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_nanos() as f64 / self.duration.as_nanos() as f64).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Value to display at the current elapsed time.
    ///
    /// Intermediate values are floored; the terminal value is `end` exactly.
    pub fn value(&self) -> AmountValue {
        if self.is_complete() {
            return self.end;
        }

        let eased = self.easing.apply(self.progress());
        let value = (self.start + (self.end - self.start) * eased).floor();

        // flooring must not overshoot a fractional end on the way down
        if self.end < self.start {
            value.max(self.end)
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_follows_quartic_ease_out() {
        let mut run = AnimationRun::new(0.0, 1000.0, Duration::from_millis(2000));
        assert_eq!(run.value(), 0.0);

        run.advance_to(Duration::from_millis(1000));
        assert_eq!(run.progress(), 0.5);
        assert_eq!(run.value(), 937.0);

        run.advance_to(Duration::from_millis(2000));
        assert!(run.is_complete());
        assert_eq!(run.value(), 1000.0);
    }

    #[test]
    fn test_elapsed_never_moves_backwards() {
        let mut run = AnimationRun::new(0.0, 100.0, Duration::from_millis(100));
        run.advance_to(Duration::from_millis(60));
        run.advance_to(Duration::from_millis(30));
        assert_eq!(run.elapsed, Duration::from_millis(60));
    }

    #[test]
    fn test_terminal_value_is_exact() {
        let mut run = AnimationRun::new(0.0, 1234.567, Duration::from_millis(10));
        run.advance_to(Duration::from_millis(50));
        assert_eq!(run.progress(), 1.0);
        assert_eq!(run.value(), 1234.567);
    }

    #[test]
    fn test_descending_run_never_undershoots_end() {
        let mut run = AnimationRun::new(100.0, 10.5, Duration::from_millis(100))
            .with_easing(Easing::Linear);
        run.advance_to(Duration::from_millis(99));
        assert!(run.value() >= 10.5);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let run = AnimationRun::new(5.0, 10.0, Duration::ZERO);
        assert!(run.is_complete());
        assert_eq!(run.value(), 10.0);
    }
}
