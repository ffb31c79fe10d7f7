//! The record of a single completed try, handed to a wait strategy.
use std::error::Error;
use std::time::Duration;

/// The error type an [`Attempt`] carries when its try failed.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// An immutable snapshot of one completed try of a retried operation.
///
/// The retry loop builds one of these after every try and passes it to
/// [`WaitStrategy::compute_sleep_time`](crate::WaitStrategy::compute_sleep_time).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use tarry::Attempt;
///
/// let attempt = Attempt::<()>::with_error("connection refused", 3, Duration::from_millis(750));
/// assert_eq!(attempt.attempt_number(), 3);
/// assert!(attempt.has_error());
/// assert_eq!(attempt.error().map(|e| e.to_string()), Some("connection refused".to_string()));
/// ```
#[derive(Debug)]
pub struct Attempt<T> {
    outcome: Result<T, BoxError>,
    attempt_number: u32,
    delay_since_first_attempt: Duration,
}

impl<T> Attempt<T> {
    /// Record a try that produced `result`.
    pub fn with_result(result: T, attempt_number: u32, delay_since_first_attempt: Duration) -> Self {
        Attempt {
            outcome: Ok(result),
            attempt_number,
            delay_since_first_attempt,
        }
    }

    /// Record a try that failed with `error`.
    pub fn with_error(
        error: impl Into<BoxError>,
        attempt_number: u32,
        delay_since_first_attempt: Duration,
    ) -> Self {
        Attempt {
            outcome: Err(error.into()),
            attempt_number,
            delay_since_first_attempt,
        }
    }

    /// The ordinal of this try, starting at 1.
    pub fn attempt_number(&self) -> u32 {
        self.attempt_number
    }

    /// Time elapsed since the first try began.
    pub fn delay_since_first_attempt(&self) -> Duration {
        self.delay_since_first_attempt
    }

    pub fn has_result(&self) -> bool {
        self.outcome.is_ok()
    }

    pub fn has_error(&self) -> bool {
        self.outcome.is_err()
    }

    /// The value produced by the try, if it succeeded.
    pub fn result(&self) -> Option<&T> {
        self.outcome.as_ref().ok()
    }

    /// The error captured from the try, if it failed.
    pub fn error(&self) -> Option<&(dyn Error + Send + Sync + 'static)> {
        self.outcome.as_ref().err().map(|e| &**e)
    }

    pub fn into_outcome(self) -> Result<T, BoxError> {
        self.outcome
    }
}
