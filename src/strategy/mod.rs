//! Different ways of deciding how long to wait before the next attempt.
//!
//! Every strategy is a pure function of the last failed [`Attempt`]; the
//! [`WaitStrategy`] enum gathers them behind one constructor surface.
use std::time::Duration;

use crate::attempt::Attempt;
use crate::error::{WaitError, check_argument};
use crate::time_unit::TimeUnit;

/// Errors of a chosen type decide the wait.
pub mod error_wait;
pub use error_wait::ErrorWait;

/// Each retry doubles the wait, up to a cap.
pub mod exponential;
pub use exponential::Exponential;

/// Each retry waits the next Fibonacci number, up to a cap.
pub mod fibonacci;
pub use fibonacci::Fibonacci;

/// A fixed delay strategy that yields the same duration for each retry.
pub mod fixed;
pub use fixed::Fixed;

/// Each retry waits a constant step longer than the last.
pub mod incrementing;
pub use incrementing::Incrementing;

/// Several strategies summed together.
pub mod join;
pub use join::Join;

/// A no-delay strategy that always waits zero.
pub mod nodelay;
pub use nodelay::NoWait;

#[cfg(feature = "random")]
mod random;
#[cfg(feature = "random")]
pub use random::Range;

/// A configured wait strategy, built once and evaluated after every failed attempt.
///
/// Strategies are immutable and cheap to clone, and may be shared between threads.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tarry::{Attempt, TimeUnit, WaitStrategy};
///
/// let wait = WaitStrategy::join([
///     WaitStrategy::exponential_up_to(1, TimeUnit::Minutes)?,
///     WaitStrategy::fixed(250, TimeUnit::Milliseconds)?,
/// ])?;
///
/// let attempt = Attempt::<()>::with_error("timed out", 3, Duration::from_secs(1));
/// assert_eq!(wait.compute_sleep_time(&attempt), 8 + 250);
/// # Ok::<(), tarry::WaitError>(())
/// ```
#[derive(Debug, Clone)]
pub enum WaitStrategy {
    NoWait(NoWait),
    Fixed(Fixed),
    #[cfg(feature = "random")]
    Random(Range),
    Incrementing(Incrementing),
    Exponential(Exponential),
    Fibonacci(Fibonacci),
    ErrorWait(ErrorWait),
    Join(Join),
}

impl WaitStrategy {
    /// Retry immediately.
    pub fn no_wait() -> Self {
        WaitStrategy::NoWait(NoWait)
    }

    /// Wait `sleep_time` before every retry.
    pub fn fixed(sleep_time: i64, unit: TimeUnit) -> Result<Self, WaitError> {
        Fixed::new(sleep_time, unit).map(Self::from)
    }

    /// Wait a random time between zero (inclusive) and `maximum_time` (exclusive).
    #[cfg(feature = "random")]
    pub fn random(maximum_time: i64, unit: TimeUnit) -> Result<Self, WaitError> {
        Range::up_to(maximum_time, unit).map(Self::from)
    }

    /// Wait a random time between `minimum_time` (inclusive) and `maximum_time` (exclusive).
    #[cfg(feature = "random")]
    pub fn random_between(
        minimum_time: i64,
        minimum_unit: TimeUnit,
        maximum_time: i64,
        maximum_unit: TimeUnit,
    ) -> Result<Self, WaitError> {
        Range::new(minimum_time, minimum_unit, maximum_time, maximum_unit).map(Self::from)
    }

    /// Wait `initial_sleep_time` after the first attempt, then `increment` more after each one.
    pub fn incrementing(
        initial_sleep_time: i64,
        initial_unit: TimeUnit,
        increment: i64,
        increment_unit: TimeUnit,
    ) -> Result<Self, WaitError> {
        Incrementing::new(initial_sleep_time, initial_unit, increment, increment_unit)
            .map(Self::from)
    }

    /// Wait `2^n` milliseconds after attempt `n`, without a cap.
    pub fn exponential() -> Self {
        Exponential::unbounded().into()
    }

    /// Wait `2^n` milliseconds after attempt `n`, never more than `maximum_time`.
    pub fn exponential_up_to(maximum_time: i64, unit: TimeUnit) -> Result<Self, WaitError> {
        Exponential::new(1, maximum_time, unit).map(Self::from)
    }

    /// Wait `multiplier * 2^n` milliseconds after attempt `n`, never more than `maximum_time`.
    pub fn exponential_with(
        multiplier: i64,
        maximum_time: i64,
        unit: TimeUnit,
    ) -> Result<Self, WaitError> {
        Exponential::new(multiplier, maximum_time, unit).map(Self::from)
    }

    /// Wait `fib(n)` milliseconds after attempt `n`, without a cap.
    pub fn fibonacci() -> Self {
        Fibonacci::unbounded().into()
    }

    /// Wait `fib(n)` milliseconds after attempt `n`, never more than `maximum_time`.
    pub fn fibonacci_up_to(maximum_time: i64, unit: TimeUnit) -> Result<Self, WaitError> {
        Fibonacci::new(1, maximum_time, unit).map(Self::from)
    }

    /// Wait `multiplier * fib(n)` milliseconds after attempt `n`, never more than `maximum_time`.
    pub fn fibonacci_with(
        multiplier: i64,
        maximum_time: i64,
        unit: TimeUnit,
    ) -> Result<Self, WaitError> {
        Fibonacci::new(multiplier, maximum_time, unit).map(Self::from)
    }

    /// Wait `function(error)` milliseconds when the attempt failed with an `E`, zero otherwise.
    pub fn error_wait<E, F>(function: F) -> Self
    where
        E: std::error::Error + 'static,
        F: Fn(&E) -> u64 + Send + Sync + 'static,
    {
        ErrorWait::new(function).into()
    }

    /// Wait for the sum of all the given strategies.
    pub fn join<I>(strategies: I) -> Result<Self, WaitError>
    where
        I: IntoIterator,
        I::Item: Into<Option<WaitStrategy>>,
    {
        Join::new(strategies).map(Self::from)
    }

    /// How many milliseconds to wait after `attempt`.
    pub fn compute_sleep_time<T>(&self, attempt: &Attempt<T>) -> u64 {
        match self {
            WaitStrategy::NoWait(s) => s.compute_sleep_time(attempt),
            WaitStrategy::Fixed(s) => s.compute_sleep_time(attempt),
            #[cfg(feature = "random")]
            WaitStrategy::Random(s) => s.compute_sleep_time(attempt),
            WaitStrategy::Incrementing(s) => s.compute_sleep_time(attempt),
            WaitStrategy::Exponential(s) => s.compute_sleep_time(attempt),
            WaitStrategy::Fibonacci(s) => s.compute_sleep_time(attempt),
            WaitStrategy::ErrorWait(s) => s.compute_sleep_time(attempt),
            WaitStrategy::Join(s) => s.compute_sleep_time(attempt),
        }
    }

    /// [`compute_sleep_time`](Self::compute_sleep_time) as a [`Duration`].
    pub fn sleep_duration<T>(&self, attempt: &Attempt<T>) -> Duration {
        Duration::from_millis(self.compute_sleep_time(attempt))
    }
}

impl Default for WaitStrategy {
    fn default() -> Self {
        Self::no_wait()
    }
}

macro_rules! impl_from_strategy {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for WaitStrategy {
                fn from(strategy: $ty) -> Self {
                    WaitStrategy::$variant(strategy)
                }
            }
        )*
    };
}

impl_from_strategy!(
    NoWait(NoWait),
    Fixed(Fixed),
    Incrementing(Incrementing),
    Exponential(Exponential),
    Fibonacci(Fibonacci),
    ErrorWait(ErrorWait),
    Join(Join),
);

#[cfg(feature = "random")]
impl_from_strategy!(Random(Range));

impl From<Duration> for WaitStrategy {
    fn from(delay: Duration) -> Self {
        Fixed::from(delay).into()
    }
}

/// Checks shared by the exponential and fibonacci strategies.
pub(crate) fn validate_backoff(multiplier: i64, maximum_wait: i64) -> Result<(), WaitError> {
    check_argument(multiplier > 0, || format!("multiplier must be > 0 but is {multiplier}"))?;
    check_argument(maximum_wait >= 0, || {
        format!("maximum_wait must be >= 0 but is {maximum_wait}")
    })?;
    check_argument(multiplier < maximum_wait, || {
        format!("multiplier must be < maximum_wait ({maximum_wait}) but is {multiplier}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(n: u32) -> Attempt<bool> {
        Attempt::with_error("failed", n, Duration::from_millis(6546))
    }

    #[test]
    fn dispatches_to_each_kind() {
        let attempt = failed(4);
        assert_eq!(WaitStrategy::no_wait().compute_sleep_time(&attempt), 0);
        assert_eq!(WaitStrategy::default().compute_sleep_time(&attempt), 0);
        assert_eq!(
            WaitStrategy::fixed(1, TimeUnit::Seconds).unwrap().compute_sleep_time(&attempt),
            1000
        );
        assert_eq!(WaitStrategy::exponential().compute_sleep_time(&attempt), 16);
        assert_eq!(WaitStrategy::fibonacci().compute_sleep_time(&attempt), 3);
        assert_eq!(
            WaitStrategy::fibonacci_up_to(2, TimeUnit::Milliseconds)
                .unwrap()
                .compute_sleep_time(&attempt),
            2
        );
        assert_eq!(
            WaitStrategy::exponential_with(3, 20, TimeUnit::Milliseconds)
                .unwrap()
                .compute_sleep_time(&attempt),
            20
        );
        assert_eq!(
            WaitStrategy::error_wait(|_: &std::fmt::Error| 7).compute_sleep_time(&attempt),
            0
        );
        assert_eq!(
            WaitStrategy::from(Duration::from_secs(2)).sleep_duration(&attempt),
            Duration::from_secs(2)
        );
    }

    #[test]
    fn error_wait_variant_matches_its_struct() {
        let wait = WaitStrategy::error_wait(|_: &std::fmt::Error| 7);
        assert!(matches!(wait, WaitStrategy::ErrorWait(_)));
        let attempt = Attempt::<()>::with_error(std::fmt::Error, 1, Duration::ZERO);
        assert_eq!(wait.compute_sleep_time(&attempt), 7);
    }

    #[cfg(feature = "random")]
    #[test]
    fn random_through_the_enum() {
        let wait = WaitStrategy::random_between(1, TimeUnit::Seconds, 2, TimeUnit::Seconds).unwrap();
        let attempt = failed(1);
        for _ in 0..100 {
            assert!((1000..2000).contains(&wait.compute_sleep_time(&attempt)));
        }
        assert!(WaitStrategy::random(0, TimeUnit::Seconds).is_err());
    }

    #[test]
    fn backoff_validation_order() {
        assert!(validate_backoff(1, i64::MAX).is_ok());
        assert_eq!(
            validate_backoff(0, -1).unwrap_err().to_string(),
            "multiplier must be > 0 but is 0"
        );
        assert_eq!(
            validate_backoff(5, -1).unwrap_err().to_string(),
            "maximum_wait must be >= 0 but is -1"
        );
    }
}
