use chrono::{DateTime, Utc};

use crate::config::SnowflakeConfig;

/// Snowflake component extractor
#[derive(Debug, Copy, Clone)]
pub struct SnowflakeExtractor {
    config: SnowflakeConfig,
}

impl SnowflakeExtractor {
    pub(crate) fn new(config: SnowflakeConfig) -> Self {
        Self { config }
    }

    /// Extract relative timestamp (ms since the configured epoch)
    #[inline(always)]
    pub fn timestamp(&self, id: u64) -> u64 {
        (id >> self.config.timestamp_shift()) & self.config.timestamp_mask()
    }

    #[inline(always)]
    pub fn machine(&self, id: u64) -> u16 {
        ((id >> self.config.machine_shift()) & self.config.machine_mask() as u64) as u16
    }

    #[inline(always)]
    pub fn sequence(&self, id: u64) -> u16 {
        (id & self.config.sequence_mask() as u64) as u16
    }

    /// Decompose an id into timestamp, machine ID, and sequence
    #[inline]
    pub fn decompose(&self, id: u64) -> (u64, u16, u16) {
        (self.timestamp(id), self.machine(id), self.sequence(id))
    }

    /// Absolute instant the id was issued at, or `None` if it falls outside
    /// chrono's representable range
    pub fn datetime(&self, id: u64) -> Option<DateTime<Utc>> {
        let millis = self
            .config
            .epoch_millis()
            .checked_add(self.timestamp(id) as i64)?;
        DateTime::<Utc>::from_timestamp_millis(millis)
    }
}
