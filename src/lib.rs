//! # Tarry
//!
//! Decide how long to wait before retrying an operation that failed.
//!
//! `tarry` never sleeps and never calls your operation. The retry loop you already
//! have records each try as an [`Attempt`], asks a [`WaitStrategy`] how many
//! milliseconds to wait, and does the waiting itself.
//!
//! ## Features
//!
//! - Fixed, random, incrementing, exponential and fibonacci waits
//! - Waits driven by the error a try failed with (e.g. a "retry after" hint)
//! - Joining several strategies into one whose wait is their sum
//! - All parameters validated when the strategy is built; evaluation never fails
//!
//! ## Usage Examples
//!
//! ### Synchronous Usage
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use tarry::{Attempt, TimeUnit, WaitStrategy};
//!
//! let wait = WaitStrategy::fibonacci_with(10, 1, TimeUnit::Seconds)?;
//! let start = Instant::now();
//!
//! let mut outcome = Err("never ran");
//! for attempt_number in 1..=3 {
//!     outcome = some_operation(attempt_number);
//!     let Err(err) = outcome else { break };
//!     let attempt = Attempt::<()>::with_error(err, attempt_number, start.elapsed());
//!     std::thread::sleep(wait.sleep_duration(&attempt));
//! }
//! assert_eq!(outcome, Ok("success"));
//!
//! # fn some_operation(n: u32) -> Result<&'static str, &'static str> {
//! #     if n < 2 { Err("failure") } else { Ok("success") }
//! # }
//! # Ok::<(), tarry::WaitError>(())
//! ```
//!
//! ### Asynchronous Usage
//!
//! ```rust
//! use std::time::Duration;
//! use tarry::{Attempt, TimeUnit, WaitStrategy};
//!
//! async fn pause(wait: &WaitStrategy, attempt_number: u32) {
//!     let attempt = Attempt::<()>::with_error("busy", attempt_number, Duration::ZERO);
//!     tokio::time::sleep(wait.sleep_duration(&attempt)).await;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `random`: Enables randomized waits (depends on rand, on by default)
//! - `serde`: Enables `WaitConfig`, a deserializable strategy description
pub mod attempt;
#[cfg(feature = "serde")]
pub mod config;
pub mod error;
pub mod strategy;
pub mod time_unit;

pub use attempt::{Attempt, BoxError};
#[cfg(feature = "serde")]
pub use config::WaitConfig;
pub use error::WaitError;
pub use strategy::WaitStrategy;
pub use time_unit::TimeUnit;
