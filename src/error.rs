//! Errors raised while building a wait strategy.
use thiserror::Error;

/// Error returned by the wait strategy constructors.
///
/// Evaluating a strategy never fails; every check happens when the strategy is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WaitError {
    /// A single parameter violates its own constraint, e.g. a negative sleep time.
    #[error("{0}")]
    InvalidArgument(String),

    /// The set of strategies handed to [`join`](crate::strategy::WaitStrategy::join)
    /// is unusable as a whole: it is empty or one of its members is missing.
    #[error("{0}")]
    InvalidState(String),
}

impl WaitError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::warn!(%message, "rejected wait strategy argument");
        WaitError::InvalidArgument(message)
    }

    pub(crate) fn invalid_state(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::warn!(%message, "rejected wait strategy set");
        WaitError::InvalidState(message)
    }

    /// Returns `true` if this error concerns a single parameter.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, WaitError::InvalidArgument(_))
    }

    /// Returns `true` if this error concerns the strategy set as a whole.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, WaitError::InvalidState(_))
    }
}

/// Fail with [`WaitError::InvalidArgument`] unless `condition` holds.
pub(crate) fn check_argument(condition: bool, message: impl FnOnce() -> String) -> Result<(), WaitError> {
    if condition {
        Ok(())
    } else {
        Err(WaitError::invalid_argument(message()))
    }
}
