//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last timestamp + sequence, guarded by one lock
//! - `wait` - Polling past an exhausted tick
//! - `generate` - ID generation logic

mod generate;
mod state;
mod wait;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::clock::{Clock, SystemClock};
use crate::config::SnowflakeConfig;
use crate::error::SnowflakeError;
use crate::extractor::SnowflakeExtractor;

use state::State;
use wait::wait_past;

/// Snowflake ID generator.
///
/// Every call to [`generate`](Snowflake::generate) runs under a single lock,
/// so one instance can be shared across threads (e.g. in an `Arc`) and still
/// never issue the same `(timestamp, sequence)` pair twice.
#[derive(Debug)]
pub struct Snowflake<C: Clock = SystemClock> {
    state: Mutex<State>,
    clock: C,
    machine_prefix: u64,
    max_seq: u16,
    ts_shift: u8,
    max_ts: i64,
    epoch: i64,

    machine_id: u16,
    config: SnowflakeConfig,
    pub extract: SnowflakeExtractor,
}

impl Snowflake {
    pub const TIMESTAMP_BITS: u32 = 41;
    pub const MACHINE_AND_SEQUENCE_BITS: u8 = 22;

    /// Create with the default bit layout and the system clock
    pub fn new(machine_id: u16, epoch: DateTime<Utc>) -> Result<Self, SnowflakeError> {
        Self::with_config(machine_id, SnowflakeConfig::builder().epoch(epoch).build())
    }

    /// Create with custom configuration and the system clock
    pub fn with_config(machine_id: u16, config: SnowflakeConfig) -> Result<Self, SnowflakeError> {
        Self::with_clock(machine_id, config, SystemClock)
    }
}

impl<C: Clock> Snowflake<C> {
    /// Create with custom configuration reading time from `clock`
    pub fn with_clock(
        machine_id: u16,
        config: SnowflakeConfig,
        clock: C,
    ) -> Result<Self, SnowflakeError> {
        Self::validate_machine_id(machine_id, &config)?;
        Self::validate_epoch(&config, &clock)?;
        debug!(
            machine_id,
            epoch_ms = config.epoch_millis(),
            machine_bits = config.machine_bits(),
            "snowflake generator created"
        );
        Ok(Self::build(machine_id, config, clock))
    }

    fn validate_machine_id(machine_id: u16, config: &SnowflakeConfig) -> Result<(), SnowflakeError> {
        let max = config.max_machine_id();
        if machine_id > max {
            return Err(SnowflakeError::MachineIdOutOfRange { machine_id, max });
        }
        Ok(())
    }

    fn validate_epoch(config: &SnowflakeConfig, clock: &C) -> Result<(), SnowflakeError> {
        let now_ms = clock.now_millis();
        let epoch_ms = config.epoch_millis();
        if epoch_ms > now_ms {
            warn!(epoch_ms, now_ms, "rejecting epoch in the future");
            return Err(SnowflakeError::EpochInFuture { epoch_ms, now_ms });
        }
        Ok(())
    }

    fn build(machine_id: u16, config: SnowflakeConfig, clock: C) -> Self {
        Self {
            state: Mutex::new(State::default()),
            clock,
            machine_prefix: (machine_id as u64) << config.machine_shift(),
            max_seq: config.max_sequence(),
            ts_shift: config.timestamp_shift(),
            max_ts: config.max_timestamp() as i64,
            epoch: config.epoch_millis(),
            machine_id,
            config,
            extract: SnowflakeExtractor::new(config),
        }
    }

    #[inline(always)]
    pub const fn machine_id(&self) -> u16 {
        self.machine_id
    }

    #[inline(always)]
    pub const fn config(&self) -> &SnowflakeConfig {
        &self.config
    }

    #[inline(always)]
    pub const fn max_machine_id(&self) -> u16 {
        self.config.max_machine_id()
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> u16 {
        self.config.max_sequence()
    }

    /// Relative timestamp of the last successfully issued id (0 before the first)
    pub fn last_timestamp(&self) -> u64 {
        self.state.lock().timestamp()
    }

    /// Current time in ms since the epoch; negative if the clock reads before it
    #[inline(always)]
    pub(crate) fn now_ms(&self) -> i64 {
        self.clock.now_millis().saturating_sub(self.epoch)
    }

    pub(crate) fn wait_next_millis(&self, from_ts: i64) -> i64 {
        wait_past(from_ts, &self.config, || self.now_ms())
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: u64, sequence: u16) -> u64 {
        (timestamp << self.ts_shift) | self.machine_prefix | (sequence as u64)
    }
}
