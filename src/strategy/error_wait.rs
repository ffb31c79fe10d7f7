use std::error::Error;
use std::fmt;
use std::sync::Arc;

use crate::attempt::Attempt;

type Mapper = dyn Fn(&(dyn Error + Send + Sync + 'static)) -> Option<u64> + Send + Sync;

/// Waits for a time derived from the failed attempt's error, when that error is of a given type.
///
/// Attempts that succeeded, or that failed with an error of any other type, wait zero.
/// Typical use is honouring a server supplied "retry after" value.
///
/// ```
/// use std::time::Duration;
/// use tarry::{Attempt, strategy::ErrorWait};
///
/// #[derive(Debug)]
/// struct RetryAfter(u64);
///
/// impl std::fmt::Display for RetryAfter {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "retry after {}s", self.0)
///     }
/// }
///
/// impl std::error::Error for RetryAfter {}
///
/// let wait = ErrorWait::new(|e: &RetryAfter| e.0 * 1000);
/// let attempt = Attempt::<()>::with_error(RetryAfter(3), 1, Duration::ZERO);
/// assert_eq!(wait.compute_sleep_time(&attempt), 3000);
/// ```
#[derive(Clone)]
pub struct ErrorWait {
    error_type: &'static str,
    mapper: Arc<Mapper>,
}

impl ErrorWait {
    /// Create a new [`ErrorWait`] applying `function` to errors of type `E`.
    pub fn new<E, F>(function: F) -> Self
    where
        E: Error + 'static,
        F: Fn(&E) -> u64 + Send + Sync + 'static,
    {
        let error_type = std::any::type_name::<E>();
        tracing::debug!(error_type, "error wait");
        ErrorWait {
            error_type,
            mapper: Arc::new(move |error: &(dyn Error + Send + Sync + 'static)| {
                error.downcast_ref::<E>().map(&function)
            }),
        }
    }

    /// Name of the error type this strategy reacts to.
    pub fn error_type(&self) -> &'static str {
        self.error_type
    }

    pub fn compute_sleep_time<T>(&self, attempt: &Attempt<T>) -> u64 {
        attempt
            .error()
            .and_then(|error| (self.mapper)(error))
            .unwrap_or(0)
    }
}

impl fmt::Debug for ErrorWait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorWait")
            .field("error_type", &self.error_type)
            .finish_non_exhaustive()
    }
}
