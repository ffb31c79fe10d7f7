use crate::attempt::Attempt;
use crate::error::{WaitError, check_argument};
use crate::time_unit::TimeUnit;

/// Each retry waits `increment` longer than the one before, starting from `initial_sleep_time`.
///
/// A negative increment gives a shrinking sequence which bottoms out at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Incrementing {
    initial_sleep_time: i64,
    increment: i64,
}

impl Incrementing {
    /// Create a new [`Incrementing`], each time value in its own unit.
    pub fn new(
        initial_sleep_time: i64,
        initial_unit: TimeUnit,
        increment: i64,
        increment_unit: TimeUnit,
    ) -> Result<Self, WaitError> {
        Self::from_millis(
            initial_unit.to_millis(initial_sleep_time),
            increment_unit.to_millis(increment),
        )
    }

    pub fn from_millis(initial_sleep_time: i64, increment: i64) -> Result<Self, WaitError> {
        check_argument(initial_sleep_time >= 0, || {
            format!("initial_sleep_time must be >= 0 but is {initial_sleep_time}")
        })?;
        tracing::debug!(initial_sleep_time, increment, "incrementing wait");
        Ok(Incrementing {
            initial_sleep_time,
            increment,
        })
    }

    pub fn compute_sleep_time<T>(&self, attempt: &Attempt<T>) -> u64 {
        let steps = i64::from(attempt.attempt_number()) - 1;
        let result = self
            .initial_sleep_time
            .saturating_add(self.increment.saturating_mul(steps));
        if result < 0 {
            tracing::trace!(result, "incrementing wait floored at zero");
            return 0;
        }
        result.unsigned_abs()
    }
}
