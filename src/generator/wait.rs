//! Waiting out an exhausted tick
//!
//! Runs with the generator lock held, so every other caller is parked behind
//! it. The wait therefore never sleeps longer than one short, fixed interval
//! between clock reads: a burst of hot polls while the tick is likely to roll
//! over any moment, then a steady sub-millisecond poll.

use std::thread;
use std::time::Duration;

use crate::config::SnowflakeConfig;

/// Pause between clock reads once the hot polls are used up
pub const POLL_INTERVAL: Duration = Duration::from_micros(250);

/// Poll `get_time` until it reads past `from_timestamp` and return that reading.
///
/// The first `spin_loops` polls (when spin is enabled) only issue a spin hint,
/// yielding the thread every `spin_yield_every` of them. Every later poll
/// sleeps [`POLL_INTERVAL`].
pub fn wait_past<F>(from_timestamp: i64, config: &SnowflakeConfig, get_time: F) -> i64
where
    F: Fn() -> i64,
{
    let hot_polls = if config.spin_enabled() {
        config.spin_loops()
    } else {
        0
    };
    let yield_every = config.spin_yield_every();
    let mut polls = 0u32;

    loop {
        let now = get_time();
        if now > from_timestamp {
            return now;
        }

        if polls < hot_polls {
            std::hint::spin_loop();
            if yield_every != 0 && polls % yield_every == yield_every - 1 {
                thread::yield_now();
            }
            polls += 1;
        } else {
            thread::sleep(POLL_INTERVAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Instant;

    #[test]
    fn test_returns_first_advanced_reading() {
        let config = SnowflakeConfig::default();
        assert_eq!(wait_past(100, &config, || 200), 200);
    }

    #[test]
    fn test_ignores_equal_and_earlier_readings() {
        let config = SnowflakeConfig::builder().spin_loops(2).build();
        let reads = Cell::new(0usize);
        let script = [100, 99, 100, 98, 101];
        let ts = wait_past(100, &config, || {
            let i = reads.get();
            reads.set(i + 1);
            script[i]
        });
        assert_eq!(ts, 101);
        assert_eq!(reads.get(), 5);
    }

    #[test]
    fn test_sleeps_stay_short_without_spin() {
        let config = SnowflakeConfig::builder().enable_spin(false).build();
        let reads = Cell::new(0u32);
        let started = Instant::now();
        let ts = wait_past(7, &config, || {
            reads.set(reads.get() + 1);
            if reads.get() > 40 {
                8
            } else {
                7
            }
        });
        assert_eq!(ts, 8);
        // 40 polls at POLL_INTERVAL
        assert!(started.elapsed() < Duration::from_millis(500));
    }
}
