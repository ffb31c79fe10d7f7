use crate::attempt::Attempt;
use crate::error::WaitError;
use crate::strategy::validate_backoff;
use crate::time_unit::TimeUnit;

/// Each retry waits `multiplier * fib(attempt_number)` milliseconds, capped at a maximum.
///
/// Depending on the problem at hand, a fibonacci delay strategy might perform better and lead to
/// better throughput than the [`Exponential`](crate::strategy::Exponential) strategy.
///
/// See ["A Performance Comparison of Different Backoff Algorithms under Different Rebroadcast
/// Probabilities for MANETs"](https://www.researchgate.net/publication/255672213_A_Performance_Comparison_of_Different_Backoff_Algorithms_under_Different_Rebroadcast_Probabilities_for_MANET's)
/// for more details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fibonacci {
    multiplier: i64,
    maximum_wait: i64,
}

impl Fibonacci {
    /// Create a new [`Fibonacci`] with the given multiplier and cap.
    pub fn new(multiplier: i64, maximum_time: i64, unit: TimeUnit) -> Result<Self, WaitError> {
        Self::from_millis(multiplier, unit.to_millis(maximum_time))
    }

    /// Create a new [`Fibonacci`] with a cap given in milliseconds.
    pub fn from_millis(multiplier: i64, maximum_wait: i64) -> Result<Self, WaitError> {
        validate_backoff(multiplier, maximum_wait)?;
        tracing::debug!(multiplier, maximum_wait, "fibonacci wait");
        Ok(Fibonacci {
            multiplier,
            maximum_wait,
        })
    }

    /// Multiplier 1 and no cap beyond `i64::MAX` milliseconds.
    pub fn unbounded() -> Self {
        Fibonacci {
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
        // An overflowing product is treated exactly like one above the cap.
        let result = fib(attempt.attempt_number())
            .and_then(|fib| self.multiplier.checked_mul(fib))
            .filter(|result| (0..=self.maximum_wait).contains(result))
            .unwrap_or_else(|| {
                tracing::trace!(maximum_wait = self.maximum_wait, "fibonacci wait capped");
                self.maximum_wait
            });
        result.max(0).unsigned_abs()
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// The `n`th Fibonacci number, or `None` once it no longer fits in an `i64`.
fn fib(n: u32) -> Option<i64> {
    let (mut prev, mut curr) = (1i64, 0i64);
    for _ in 0..n {
        let sum = prev.checked_add(curr)?;
        prev = curr;
        curr = sum;
    }
    Some(curr)
}
