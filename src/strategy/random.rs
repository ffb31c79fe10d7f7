use std::sync::{LazyLock, Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::attempt::Attempt;
use crate::error::{WaitError, check_argument};
use crate::time_unit::TimeUnit;

/// Generator shared by every [`Range`] in the process.
static RNG: LazyLock<Mutex<StdRng>> = LazyLock::new(|| Mutex::new(StdRng::from_os_rng()));

/// Each retry waits a random time in `[minimum, maximum)` milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    minimum: i64,
    maximum: i64,
}

impl Range {
    /// Create a new [`Range`] between zero and `maximum_time`.
    pub fn up_to(maximum_time: i64, unit: TimeUnit) -> Result<Self, WaitError> {
        Self::from_millis(0, unit.to_millis(maximum_time))
    }

    /// Create a new [`Range`] with both bounds in their own unit.
    pub fn new(
        minimum_time: i64,
        minimum_unit: TimeUnit,
        maximum_time: i64,
        maximum_unit: TimeUnit,
    ) -> Result<Self, WaitError> {
        Self::from_millis(
            minimum_unit.to_millis(minimum_time),
            maximum_unit.to_millis(maximum_time),
        )
    }

    pub fn from_millis(minimum: i64, maximum: i64) -> Result<Self, WaitError> {
        check_argument(minimum >= 0, || format!("minimum must be >= 0 but is {minimum}"))?;
        check_argument(maximum > minimum, || {
            format!("maximum must be > minimum but maximum is {maximum} and minimum is {minimum}")
        })?;
        tracing::debug!(minimum, maximum, "random wait");
        Ok(Range { minimum, maximum })
    }

    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    pub fn maximum(&self) -> i64 {
        self.maximum
    }

    pub fn compute_sleep_time<T>(&self, _attempt: &Attempt<T>) -> u64 {
        let random_millis = random_positive_i64() % (self.maximum - self.minimum);
        (random_millis + self.minimum).unsigned_abs()
    }
}

/// A uniformly drawn non-negative `i64`.
fn random_positive_i64() -> i64 {
    let raw: i64 = RNG
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .random();
    positive(raw)
}

/// `raw.abs()`, except that `i64::MIN` has no positive counterpart and is
/// swapped for its neighbour first.
fn positive(raw: i64) -> i64 {
    let raw = if raw == i64::MIN { i64::MIN + 1 } else { raw };
    raw.abs()
}
