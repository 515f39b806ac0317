//! Mutable generator state guarded by the generator's lock
//!
//! `last_timestamp` and `sequence` only ever change together, inside one
//! critical section, so they travel as a single value.

/// Timestamp (ms since epoch) and sequence of the last issued id
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    last_timestamp: u64,
    sequence: u16,
}

impl State {
    #[inline(always)]
    pub const fn new(last_timestamp: u64, sequence: u16) -> Self {
        Self {
            last_timestamp,
            sequence,
        }
    }

    #[inline(always)]
    pub const fn timestamp(self) -> u64 {
        self.last_timestamp
    }

    #[inline(always)]
    pub const fn sequence(self) -> u16 {
        self.sequence
    }

    /// Sequence after this one within the same tick, wrapping to 0 past `max_seq`
    #[inline(always)]
    pub const fn next_sequence(self, max_seq: u16) -> u16 {
        self.sequence.wrapping_add(1) & max_seq
    }
}
