//! # Snowflake
//!
//! Coordinator-free 64-bit unique identifiers in the Twitter Snowflake layout.
//!
//! ```text
//! | 0 | timestamp (41 bits) | machine (10 bits) | sequence (12 bits) |
//! ```
//!
//! - 📈 Time-sorted: ids from one generator never decrease
//! - 🔒 Thread-safe: one lock per generator covers the whole generation step
//! - 🌐 Distributed-ready: uniqueness across hosts comes from the machine id
//! - 🕰️ Clock-aware: regressions and range exhaustion are reported, never papered over
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use snowflake::Snowflake;
//!
//! let epoch = Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap();
//! let generator = Snowflake::new(1, epoch)?;
//! let id = generator.generate()?;
//! let (timestamp, machine, sequence) = generator.extract.decompose(id);
//! # Ok::<(), snowflake::SnowflakeError>(())
//! ```

#![forbid(unsafe_code)]

pub mod clock;
mod config;
mod error;
mod extractor;
mod generator;

#[cfg(test)]
pub mod tests;

pub use clock::{Clock, FnClock, ManualClock, SystemClock};
pub use config::{SnowflakeConfig, SnowflakeConfigBuilder, SnowflakeConfigError};
pub use error::SnowflakeError;
pub use extractor::SnowflakeExtractor;
pub use generator::Snowflake;
