//! Units for the time-valued parameters of the strategy constructors.

/// The unit a time-valued constructor parameter is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    #[default]
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Convert `value` in this unit to milliseconds.
    ///
    /// Finer units truncate toward zero. Coarser units saturate at `i64::MIN` / `i64::MAX`.
    ///
    /// ```
    /// use tarry::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Seconds.to_millis(3), 3_000);
    /// assert_eq!(TimeUnit::Microseconds.to_millis(1_999), 1);
    /// assert_eq!(TimeUnit::Days.to_millis(i64::MAX), i64::MAX);
    /// ```
    pub fn to_millis(self, value: i64) -> i64 {
        match self {
            TimeUnit::Nanoseconds => value / 1_000_000,
            TimeUnit::Microseconds => value / 1_000,
            TimeUnit::Milliseconds => value,
            TimeUnit::Seconds => value.saturating_mul(1_000),
            TimeUnit::Minutes => value.saturating_mul(60_000),
            TimeUnit::Hours => value.saturating_mul(3_600_000),
            TimeUnit::Days => value.saturating_mul(86_400_000),
        }
    }
}
