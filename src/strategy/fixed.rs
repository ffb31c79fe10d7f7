use std::time::Duration;

use crate::attempt::Attempt;
use crate::error::{WaitError, check_argument};
use crate::time_unit::TimeUnit;

/// Each retry waits the same amount of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixed {
    sleep_time: u64,
}

impl Fixed {
    /// Create a new [`Fixed`] waiting `sleep_time` in `unit`.
    pub fn new(sleep_time: i64, unit: TimeUnit) -> Result<Self, WaitError> {
        Self::from_millis(unit.to_millis(sleep_time))
    }

    /// Create a new [`Fixed`] using the given duration in milliseconds.
    pub fn from_millis(sleep_time: i64) -> Result<Self, WaitError> {
        check_argument(sleep_time >= 0, || {
            format!("sleep_time must be >= 0 but is {sleep_time}")
        })?;
        tracing::debug!(sleep_time, "fixed wait");
        Ok(Fixed {
            sleep_time: sleep_time.unsigned_abs(),
        })
    }

    pub fn sleep_time(&self) -> u64 {
        self.sleep_time
    }

    pub fn compute_sleep_time<T>(&self, _attempt: &Attempt<T>) -> u64 {
        self.sleep_time
    }
}

impl From<Duration> for Fixed {
    fn from(delay: Duration) -> Self {
        let millis = i64::try_from(delay.as_millis()).unwrap_or(i64::MAX);
        Self {
            sleep_time: millis.unsigned_abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ignores_attempt_number() {
        let fixed = Fixed::new(1, TimeUnit::Seconds).unwrap();
        for n in [1, 2, 12, 1_000] {
            let attempt = Attempt::<()>::with_error("nope", n, Duration::from_millis(6546));
            assert_eq!(fixed.compute_sleep_time(&attempt), 1_000);
        }
    }

    #[test]
    fn fixed_rejects_negative_sleep_time() {
        assert_eq!(
            Fixed::from_millis(-1000),
            Err(WaitError::InvalidArgument("sleep_time must be >= 0 but is -1000".into()))
        );
    }

    #[test]
    fn fixed_from_duration_saturates() {
        assert_eq!(Fixed::from(Duration::from_millis(250)).sleep_time(), 250);
        assert_eq!(Fixed::from(Duration::MAX).sleep_time(), i64::MAX as u64);
    }
}
