use thiserror::Error;

/// Represents errors that can occur while constructing a generator or generating ids
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Machine id does not fit in the configured machine field
    #[error("Machine ID {machine_id} is out of range. Maximum allowed value is {max}")]
    MachineIdOutOfRange { machine_id: u16, max: u16 },

    /// Epoch lies after the current time, so relative timestamps would be negative
    #[error("Epoch {epoch_ms} is in the future (current time is {now_ms})")]
    EpochInFuture { epoch_ms: i64, now_ms: i64 },

    /// Time since epoch no longer fits in the timestamp field
    #[error("Timestamp overflow: {timestamp} ms since epoch exceeds maximum {max}, unable to generate any more ids")]
    TimestampOverflow { timestamp: i64, max: i64 },

    /// Clock moved backwards relative to the last successful generation
    #[error("Clock moved backwards. Refusing to generate id for {} milliseconds", lag_ms(.last, .now))]
    ClockRegression { last: i64, now: i64 },
}

impl SnowflakeError {
    /// Milliseconds the clock has to catch up before generation can resume.
    /// Zero for every variant other than `ClockRegression`.
    pub fn regression_delta(&self) -> i64 {
        match self {
            SnowflakeError::ClockRegression { last, now } => lag_ms(last, now),
            _ => 0,
        }
    }
}

// Clocks may report anything down to i64::MIN
fn lag_ms(last: &i64, now: &i64) -> i64 {
    last.saturating_sub(*now)
}
