//! SnowflakeConfig builder for constructing configuration

use chrono::{DateTime, NaiveDate, Utc};

use super::{SnowflakeConfig, SnowflakeConfigError};

pub(super) const DEFAULT_MACHINE_BITS: u8 = 10;
pub(super) const DEFAULT_EPOCH_MS: i64 = 1451606400000; // January 1, 2016 UTC
pub(super) const DEFAULT_SPIN_ENABLED: bool = true;
pub(super) const DEFAULT_SPIN_LOOPS: u32 = 64;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for SnowflakeConfig
#[derive(Debug, Clone)]
pub struct SnowflakeConfigBuilder {
    pub(super) machine_bits: u8,
    pub(super) epoch_ms: i64,
    pub(super) spin_enabled: bool,
    pub(super) spin_loops: u32,
    pub(super) spin_yield_every: u32,
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub fn new() -> Self {
        Self {
            machine_bits: DEFAULT_MACHINE_BITS,
            epoch_ms: DEFAULT_EPOCH_MS,
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set the number of bits for machine ID (6-16)
    /// Sequence bits will be automatically set to (22 - machine_bits)
    pub fn machine_bits(mut self, bits: u8) -> Result<Self, SnowflakeConfigError> {
        if !(6..=16).contains(&bits) {
            return Err(SnowflakeConfigError::InvalidMachineBits { bits });
        }
        self.machine_bits = bits;
        Ok(self)
    }

    /// Set the epoch instant
    pub fn epoch(mut self, epoch: DateTime<Utc>) -> Self {
        self.epoch_ms = epoch.timestamp_millis();
        self
    }

    /// Set the epoch in milliseconds since the Unix epoch
    pub const fn epoch_millis(mut self, epoch_ms: i64) -> Self {
        self.epoch_ms = epoch_ms;
        self
    }

    /// Set the epoch to midnight UTC of a `YYYY-MM-DD` date
    pub fn epoch_date(self, date: &str) -> Result<Self, SnowflakeConfigError> {
        let invalid = || SnowflakeConfigError::InvalidEpochDate {
            input: date.to_owned(),
        };
        let midnight = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| invalid())?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(invalid)?;
        Ok(self.epoch(midnight.and_utc()))
    }

    /// Enable or disable busy spinning before sleeping on sequence exhaustion
    pub const fn enable_spin(mut self, enable: bool) -> Self {
        self.spin_enabled = enable;
        self
    }

    /// Set number of spin loops attempted before falling back to sleep
    pub const fn spin_loops(mut self, loops: u32) -> Self {
        self.spin_loops = loops;
        self
    }

    /// Set spin yield cadence. Yield every N spin iterations; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Build the final SnowflakeConfig
    pub fn build(self) -> SnowflakeConfig {
        SnowflakeConfig::from_builder(self)
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
