//! Configuration for Snowflake generator

mod builder;

use thiserror::Error;

pub use builder::SnowflakeConfigBuilder;
use builder::{
    DEFAULT_EPOCH_MS, DEFAULT_MACHINE_BITS, DEFAULT_SPIN_ENABLED, DEFAULT_SPIN_LOOPS,
    DEFAULT_SPIN_YIELD_EVERY,
};

use crate::Snowflake;

/// Errors related to `SnowflakeConfig` builder validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeConfigError {
    /// Provided machine bits are out of the supported range [6, 16]
    #[error("Machine bits {bits} must be between 6 and 16")]
    InvalidMachineBits { bits: u8 },

    /// Epoch date is not a valid `YYYY-MM-DD` calendar date
    #[error("Epoch date {input:?} is not a valid YYYY-MM-DD date")]
    InvalidEpochDate { input: String },
}

/// Bit layout, epoch and wait tuning for a Snowflake generator.
///
/// Layout, most significant first: 1 zero bit, 41 timestamp bits, then
/// `machine_bits` machine bits and `22 - machine_bits` sequence bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeConfig {
    machine_bits: u8,
    epoch_ms: i64,
    timestamp_shift: u8,
    machine_shift: u8,
    timestamp_mask: u64,
    machine_mask: u16,
    sequence_mask: u16,
    spin_enabled: bool,
    spin_loops: u32,
    spin_yield_every: u32,
}

impl SnowflakeConfig {
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> u16 {
        ((1u32 << bits) - 1) as u16
    }

    fn new(machine_bits: u8, epoch_ms: i64) -> Self {
        let sequence_bits = Snowflake::MACHINE_AND_SEQUENCE_BITS - machine_bits;
        Self {
            machine_bits,
            epoch_ms,
            timestamp_shift: Snowflake::MACHINE_AND_SEQUENCE_BITS,
            // machine sits directly above the sequence field
            machine_shift: sequence_bits,
            timestamp_mask: (1u64 << Snowflake::TIMESTAMP_BITS) - 1,
            machine_mask: Self::calculate_mask(machine_bits),
            sequence_mask: Self::calculate_mask(sequence_bits),
            spin_enabled: DEFAULT_SPIN_ENABLED,
            spin_loops: DEFAULT_SPIN_LOOPS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    pub(crate) fn from_builder(b: SnowflakeConfigBuilder) -> Self {
        let mut cfg = Self::new(b.machine_bits, b.epoch_ms);
        cfg.spin_enabled = b.spin_enabled;
        cfg.spin_loops = b.spin_loops;
        cfg.spin_yield_every = b.spin_yield_every;
        cfg
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    /// Epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch_millis(&self) -> i64 {
        self.epoch_ms
    }

    #[inline(always)]
    pub const fn machine_bits(&self) -> u8 {
        self.machine_bits
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        Snowflake::MACHINE_AND_SEQUENCE_BITS - self.machine_bits
    }

    #[inline(always)]
    pub const fn max_machine_id(&self) -> u16 {
        self.machine_mask
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> u16 {
        self.sequence_mask
    }

    /// Largest relative timestamp the layout can hold
    #[inline(always)]
    pub const fn max_timestamp(&self) -> u64 {
        self.timestamp_mask
    }

    #[inline(always)]
    pub const fn spin_enabled(&self) -> bool {
        self.spin_enabled
    }

    #[inline(always)]
    pub const fn spin_loops(&self) -> u32 {
        self.spin_loops
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    #[inline(always)]
    pub(crate) const fn timestamp_shift(&self) -> u8 {
        self.timestamp_shift
    }

    #[inline(always)]
    pub(crate) const fn machine_shift(&self) -> u8 {
        self.machine_shift
    }

    #[inline(always)]
    pub(crate) const fn timestamp_mask(&self) -> u64 {
        self.timestamp_mask
    }

    #[inline(always)]
    pub(crate) const fn machine_mask(&self) -> u16 {
        self.machine_mask
    }

    #[inline(always)]
    pub(crate) const fn sequence_mask(&self) -> u16 {
        self.sequence_mask
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MACHINE_BITS, DEFAULT_EPOCH_MS)
    }
}
