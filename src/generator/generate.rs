//! ID generation logic
//!
//! The whole read-compare-update-compose sequence runs under the state lock.
//! State is only written after every check has passed, so a failed call
//! leaves the generator exactly as it found it.

use tracing::{trace, warn};

use super::state::State;
use super::Snowflake;
use crate::clock::Clock;
use crate::error::SnowflakeError;

impl<C: Clock> Snowflake<C> {
    /// Generate a new Snowflake ID
    ///
    /// Blocks (holding the lock) while waiting for the next millisecond when
    /// the current tick's sequence space is exhausted.
    pub fn generate(&self) -> Result<u64, SnowflakeError> {
        let mut state = self.state.lock();
        let last = state.timestamp() as i64;
        let now = self.checked_now(last)?;

        let next = if now == last {
            let sequence = state.next_sequence(self.max_seq);
            if sequence == 0 {
                trace!(timestamp = now, "sequence exhausted, waiting for next millisecond");
                let advanced = self.wait_next_millis(last);
                self.check_overflow(advanced)?;
                State::new(advanced as u64, 0)
            } else {
                State::new(now as u64, sequence)
            }
        } else {
            State::new(now as u64, 0)
        };

        *state = next;
        Ok(self.assemble_id(next.timestamp(), next.sequence()))
    }

    /// Current relative time, rejected if it overflowed or ran behind `last`
    #[inline]
    fn checked_now(&self, last: i64) -> Result<i64, SnowflakeError> {
        let now = self.now_ms();
        self.check_overflow(now)?;
        if now < last {
            warn!(last, now, delta = last.saturating_sub(now), "clock moved backwards");
            return Err(SnowflakeError::ClockRegression { last, now });
        }
        Ok(now)
    }

    #[inline]
    fn check_overflow(&self, timestamp: i64) -> Result<(), SnowflakeError> {
        if timestamp > self.max_ts {
            warn!(timestamp, max = self.max_ts, "timestamp overflow");
            return Err(SnowflakeError::TimestampOverflow {
                timestamp,
                max: self.max_ts,
            });
        }
        Ok(())
    }
}
