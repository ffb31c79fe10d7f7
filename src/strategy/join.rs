use crate::attempt::Attempt;
use crate::error::WaitError;
use crate::strategy::WaitStrategy;

/// Waits for the sum of what each of its strategies asks for.
#[derive(Debug, Clone)]
pub struct Join {
    strategies: Vec<WaitStrategy>,
}

impl Join {
    /// Join the given strategies, in order.
    ///
    /// Accepts anything yielding `WaitStrategy` or `Option<WaitStrategy>`; an
    /// empty list or a `None` member is rejected.
    pub fn new<I>(strategies: I) -> Result<Self, WaitError>
    where
        I: IntoIterator,
        I::Item: Into<Option<WaitStrategy>>,
    {
        let mut joined = Vec::new();
        for strategy in strategies {
            match strategy.into() {
                Some(strategy) => joined.push(strategy),
                None => return Err(WaitError::invalid_state("Cannot have a null wait strategy")),
            }
        }
        if joined.is_empty() {
            return Err(WaitError::invalid_state("Must have at least one wait strategy"));
        }
        tracing::debug!(count = joined.len(), "joined wait");
        Ok(Join { strategies: joined })
    }

    pub fn strategies(&self) -> &[WaitStrategy] {
        &self.strategies
    }

    pub fn compute_sleep_time<T>(&self, attempt: &Attempt<T>) -> u64 {
        self.strategies
            .iter()
            .fold(0u64, |total, strategy| {
                total.saturating_add(strategy.compute_sleep_time(attempt))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_unit::TimeUnit;
    use std::time::Duration;

    fn failed(n: u32) -> Attempt<bool> {
        Attempt::with_error("failed", n, Duration::ZERO)
    }

    #[test]
    fn sums_members() {
        let join = Join::new([
            WaitStrategy::fixed(50, TimeUnit::Milliseconds).unwrap(),
            WaitStrategy::incrementing(0, TimeUnit::Milliseconds, 10, TimeUnit::Milliseconds)
                .unwrap(),
            WaitStrategy::fibonacci(),
        ])
        .unwrap();
        assert_eq!(join.strategies().len(), 3);
        assert_eq!(join.compute_sleep_time(&failed(1)), 51);
        assert_eq!(join.compute_sleep_time(&failed(6)), 108);
    }

    #[test]
    fn nested_joins() {
        let inner = WaitStrategy::join([WaitStrategy::fixed(5, TimeUnit::Milliseconds).unwrap()])
            .unwrap();
        let outer = Join::new([inner.clone(), inner]).unwrap();
        assert_eq!(outer.compute_sleep_time(&failed(3)), 10);
    }

    #[test]
    fn saturates_instead_of_overflowing() {
        let big = WaitStrategy::fixed(i64::MAX, TimeUnit::Milliseconds).unwrap();
        let two = Join::new([big.clone(), big.clone()]).unwrap();
        assert_eq!(two.compute_sleep_time(&failed(1)), u64::MAX - 1);

        let three = Join::new([big.clone(), big.clone(), big]).unwrap();
        assert_eq!(three.compute_sleep_time(&failed(1)), u64::MAX);
    }

    #[test]
    fn requires_at_least_one_strategy() {
        let err = Join::new(Vec::<WaitStrategy>::new()).unwrap_err();
        assert_eq!(err, WaitError::InvalidState("Must have at least one wait strategy".into()));
    }

    #[test]
    fn rejects_missing_strategy() {
        let err = Join::new([
            Some(WaitStrategy::fibonacci()),
            None,
            Some(WaitStrategy::fixed(100, TimeUnit::Milliseconds).unwrap()),
        ])
        .unwrap_err();
        assert!(err.is_invalid_state());
        assert_eq!(err.to_string(), "Cannot have a null wait strategy");
    }
}
