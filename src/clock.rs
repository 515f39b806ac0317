//! Clock sources for Snowflake generation
//!
//! The generator never calls the system time directly; it reads whatever
//! [`Clock`] it was built with. Production code uses [`SystemClock`], tests
//! drive a [`ManualClock`] or an [`FnClock`] to script exact time sequences.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};

/// Source of wall-clock time in milliseconds since the Unix epoch
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc::now()`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    #[inline(always)]
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// Clock that only moves when told to.
///
/// Share it through an `Arc` so a test can keep a handle while the generator
/// owns the other.
#[derive(Debug)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self::from_millis(at.timestamp_millis())
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    /// Jump to an absolute instant; may move backwards
    pub fn set(&self, at: DateTime<Utc>) {
        self.set_millis(at.timestamp_millis());
    }

    pub fn set_millis(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }

    /// Move forward (or backward, for a negative delta) by `delta`
    pub fn advance(&self, delta: TimeDelta) {
        self.millis
            .fetch_add(delta.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

/// Adapter turning any `Fn() -> i64` closure into a [`Clock`]
pub struct FnClock<F>(F);

impl<F> FnClock<F>
where
    F: Fn() -> i64 + Send + Sync,
{
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Clock for FnClock<F>
where
    F: Fn() -> i64 + Send + Sync,
{
    #[inline]
    fn now_millis(&self) -> i64 {
        (self.0)()
    }
}

impl<F> std::fmt::Debug for FnClock<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnClock")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_system_clock_is_reasonable() {
        let now = SystemClock.now_millis();
        // After 2024-01-01, before 2100-01-01
        assert!(now > 1704067200000);
        assert!(now < 4102444800000);
    }

    #[test]
    fn test_manual_clock_set_and_advance() {
        let start = Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now_millis(), 1451606400000);

        clock.advance(TimeDelta::milliseconds(5));
        assert_eq!(clock.now_millis(), 1451606400005);

        clock.advance(TimeDelta::milliseconds(-10));
        assert_eq!(clock.now_millis(), 1451606399995);

        clock.set(Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(clock.now_millis(), 1483228800000);
    }

    #[test]
    fn test_arc_clock_shares_state() {
        let clock = Arc::new(ManualClock::from_millis(0));
        let handle = Arc::clone(&clock);
        handle.set_millis(42);
        assert_eq!(clock.now_millis(), 42);
    }

    #[test]
    fn test_fn_clock_reads_closure() {
        let calls = AtomicUsize::new(0);
        let clock = FnClock::new(move || calls.fetch_add(1, Ordering::SeqCst) as i64);
        assert_eq!(clock.now_millis(), 0);
        assert_eq!(clock.now_millis(), 1);
        assert_eq!(clock.now_millis(), 2);
    }
}
