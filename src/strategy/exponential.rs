use crate::attempt::Attempt;
use crate::error::WaitError;
use crate::strategy::validate_backoff;
use crate::time_unit::TimeUnit;

/// Each retry waits `multiplier * 2^attempt_number` milliseconds, capped at a maximum.
///
/// The growth is in the attempt number itself, so the first failed attempt
/// already waits `2 * multiplier`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exponential {
    multiplier: i64,
    maximum_wait: i64,
}

impl Exponential {
    /// Create a new [`Exponential`] with the given multiplier and cap.
    pub fn new(multiplier: i64, maximum_time: i64, unit: TimeUnit) -> Result<Self, WaitError> {
        Self::from_millis(multiplier, unit.to_millis(maximum_time))
    }

    /// Create a new [`Exponential`] with a cap given in milliseconds.
    pub fn from_millis(multiplier: i64, maximum_wait: i64) -> Result<Self, WaitError> {
        validate_backoff(multiplier, maximum_wait)?;
        tracing::debug!(multiplier, maximum_wait, "exponential wait");
        Ok(Exponential {
            multiplier,
            maximum_wait,
        })
    }

    /// Multiplier 1 and no cap beyond `i64::MAX` milliseconds.
    pub fn unbounded() -> Self {
        Exponential {
            multiplier: 1,
            maximum_wait: i64::MAX,
        }
    }

    pub fn multiplier(&self) -> i64 {
        self.multiplier
    }

    pub fn maximum_wait(&self) -> i64 {
        self.maximum_wait
    }

    pub fn compute_sleep_time<T>(&self, attempt: &Attempt<T>) -> u64 {
        let exp = 2f64.powf(f64::from(attempt.attempt_number()));
        // `as` saturates, so a huge product lands on i64::MAX.
        let mut result = (self.multiplier as f64 * exp).round() as i64;
        if result > self.maximum_wait {
            tracing::trace!(result, maximum_wait = self.maximum_wait, "exponential wait capped");
            result = self.maximum_wait;
        }
        result.max(0).unsigned_abs()
    }
}

impl Default for Exponential {
    fn default() -> Self {
        Self::unbounded()
    }
}
