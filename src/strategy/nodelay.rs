use crate::attempt::Attempt;

/// Each retry happens immediately without any delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NoWait;

impl NoWait {
    pub fn compute_sleep_time<T>(&self, _attempt: &Attempt<T>) -> u64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_wait_is_always_zero() {
        let attempt = Attempt::<()>::with_error("nope", 18, std::time::Duration::from_millis(9879));
        assert_eq!(NoWait.compute_sleep_time(&attempt), 0);
    }
}
