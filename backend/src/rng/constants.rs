//! Fixed parameters of the subtractive generator.
//!
//! Changing any of these breaks parity with the reference sequence.

/// Seed mixing constant (digits of the golden ratio)
pub const MSEED: i32 = 161_803_398;

/// Exclusive upper bound of every raw sample (`i32::MAX`)
pub const MBIG: i32 = i32::MAX;

/// Length of the state array. Slot 0 is never used.
pub const STATE_LEN: usize = 56;

/// Multiplier used to scatter the initial values across the state array
pub const SEED_LAG: i32 = 21;

/// Number of warm-up passes over the state array
pub const INIT_PASSES: usize = 4;

/// Offset of the partner slot during warm-up
pub const SHUFFLE_OFFSET: usize = 30;
