//! Declarative wait strategy descriptions (feature-gated)
//!
//! [`WaitConfig`] lets a strategy tree live in a configuration file. Building it
//! runs exactly the same validation as the constructors on [`WaitStrategy`].
//!
//! # Example
//!
//! ```rust
//! use tarry::WaitConfig;
//!
//! let json = r#"{
//!     "kind": "join",
//!     "strategies": [
//!         { "kind": "fixed", "sleep_time": 1, "unit": "seconds" },
//!         { "kind": "exponential", "maximum_time": 30000 }
//!     ]
//! }"#;
//!
//! let config: WaitConfig = serde_json::from_str(json).unwrap();
//! let wait = config.build().unwrap();
//! # let attempt = tarry::Attempt::<()>::with_error("nope", 2, std::time::Duration::ZERO);
//! # assert_eq!(wait.compute_sleep_time(&attempt), 1004);
//! ```
use serde::{Deserialize, Serialize};

use crate::error::WaitError;
use crate::strategy::WaitStrategy;
use crate::time_unit::TimeUnit;

fn default_multiplier() -> i64 {
    1
}

fn unbounded() -> i64 {
    i64::MAX
}

/// A serializable description of a [`WaitStrategy`].
///
/// Error-driven waits carry a function and can only be built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WaitConfig {
    NoWait,
    Fixed {
        sleep_time: i64,
        #[serde(default)]
        unit: TimeUnit,
    },
    #[cfg(feature = "random")]
    Random {
        #[serde(default)]
        minimum_time: i64,
        maximum_time: i64,
        #[serde(default)]
        unit: TimeUnit,
    },
    Incrementing {
        initial_sleep_time: i64,
        increment: i64,
        #[serde(default)]
        unit: TimeUnit,
    },
    Exponential {
        #[serde(default = "default_multiplier")]
        multiplier: i64,
        #[serde(default = "unbounded")]
        maximum_time: i64,
        #[serde(default)]
        unit: TimeUnit,
    },
    Fibonacci {
        #[serde(default = "default_multiplier")]
        multiplier: i64,
        #[serde(default = "unbounded")]
        maximum_time: i64,
        #[serde(default)]
        unit: TimeUnit,
    },
    Join { strategies: Vec<WaitConfig> },
}

impl WaitConfig {
    /// Validate the description and build the strategy it names.
    pub fn build(&self) -> Result<WaitStrategy, WaitError> {
        match *self {
            WaitConfig::NoWait => Ok(WaitStrategy::no_wait()),
            WaitConfig::Fixed { sleep_time, unit } => WaitStrategy::fixed(sleep_time, unit),
            #[cfg(feature = "random")]
            WaitConfig::Random {
                minimum_time,
                maximum_time,
                unit,
            } => WaitStrategy::random_between(minimum_time, unit, maximum_time, unit),
            WaitConfig::Incrementing {
                initial_sleep_time,
                increment,
                unit,
            } => WaitStrategy::incrementing(initial_sleep_time, unit, increment, unit),
            WaitConfig::Exponential {
                multiplier,
                maximum_time,
                unit,
            } => WaitStrategy::exponential_with(multiplier, maximum_time, unit),
            WaitConfig::Fibonacci {
                multiplier,
                maximum_time,
                unit,
            } => WaitStrategy::fibonacci_with(multiplier, maximum_time, unit),
            WaitConfig::Join { ref strategies } => {
                let built = strategies
                    .iter()
                    .map(WaitConfig::build)
                    .collect::<Result<Vec<_>, _>>()?;
                WaitStrategy::join(built)
            }
        }
    }
}

impl TryFrom<WaitConfig> for WaitStrategy {
    type Error = WaitError;

    fn try_from(config: WaitConfig) -> Result<Self, WaitError> {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attempt::Attempt;
    use std::time::Duration;

    fn failed(n: u32) -> Attempt<bool> {
        Attempt::with_error("failed", n, Duration::ZERO)
    }

    #[test]
    fn defaults_match_the_constructors() {
        let config: WaitConfig = serde_json::from_str(r#"{"kind": "fibonacci"}"#).unwrap();
        assert_eq!(
            config,
            WaitConfig::Fibonacci {
                multiplier: 1,
                maximum_time: i64::MAX,
                unit: TimeUnit::Milliseconds,
            }
        );
        let wait = config.build().unwrap();
        assert_eq!(wait.compute_sleep_time(&failed(6)), 8);
    }

    #[test]
    fn units_are_snake_case() {
        let config: WaitConfig =
            serde_json::from_str(r#"{"kind": "fixed", "sleep_time": 2, "unit": "minutes"}"#).unwrap();
        let wait = WaitStrategy::try_from(config).unwrap();
        assert_eq!(wait.compute_sleep_time(&failed(1)), 120_000);
    }

    #[test]
    fn incrementing_from_json() {
        let config: WaitConfig = serde_json::from_str(
            r#"{"kind": "incrementing", "initial_sleep_time": 500, "increment": 100}"#,
        )
        .unwrap();
        let wait = config.build().unwrap();
        assert_eq!(wait.compute_sleep_time(&failed(3)), 700);
    }

    #[test]
    fn invalid_values_fail_at_build() {
        let config: WaitConfig =
            serde_json::from_str(r#"{"kind": "exponential", "multiplier": 0}"#).unwrap();
        assert_eq!(
            config.build().unwrap_err(),
            WaitError::InvalidArgument("multiplier must be > 0 but is 0".into())
        );

        let empty = WaitConfig::Join { strategies: vec![] };
        assert!(empty.build().unwrap_err().is_invalid_state());
    }

    #[test]
    fn nested_join_errors_propagate() {
        let config = WaitConfig::Join {
            strategies: vec![
                WaitConfig::NoWait,
                WaitConfig::Fixed {
                    sleep_time: -1,
                    unit: TimeUnit::Seconds,
                },
            ],
        };
        assert_eq!(
            config.build().unwrap_err().to_string(),
            "sleep_time must be >= 0 but is -1000"
        );
    }

    #[test]
    fn round_trips_through_json() {
        let config = WaitConfig::Join {
            strategies: vec![WaitConfig::NoWait, WaitConfig::Exponential {
                multiplier: 2,
                maximum_time: 10,
                unit: TimeUnit::Seconds,
            }],
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: WaitConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
