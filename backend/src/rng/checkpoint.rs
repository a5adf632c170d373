//! Checkpoint - Save/Load Generator State
//!
//! Enables pausing a generator mid-sequence and resuming it later, possibly in
//! another process.
//!
//! # Critical Invariants
//!
//! - **Continuation**: A restored generator produces exactly the values the
//!   original would have produced next
//! - **Integrity**: Snapshots carry a SHA256 hash of their contents and are
//!   rejected if it does not match
//! - **Range**: Every restored state slot lies in `[0, MBIG)`

use super::constants::{MBIG, SEED_LAG, STATE_LEN};
use super::error::CheckpointError;
use super::lagged_fibonacci::CsRandom;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

// ============================================================================
// Snapshot Structures
// ============================================================================

/// Complete generator state snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomSnapshot {
    /// Seed the generator was constructed with
    pub seed: i32,

    /// Leading cursor position
    pub next_slot: usize,

    /// Trailing cursor position
    pub lag_slot: usize,

    /// Full state array, slot 0 included
    pub seed_array: Vec<i32>,

    /// Raw samples consumed before the snapshot was taken
    pub samples_drawn: u64,

    /// SHA256 of the fields above (for validation)
    pub state_hash: String,
}

/// Hashed view of a snapshot; field order is the canonical hashing order.
#[derive(Serialize)]
struct HashedFields<'a> {
    seed: i32,
    next_slot: usize,
    lag_slot: usize,
    seed_array: &'a [i32],
    samples_drawn: u64,
}

/// Compute the SHA256 hash (lowercase hex) of a snapshot's state fields
pub fn compute_state_hash(
    seed: i32,
    next_slot: usize,
    lag_slot: usize,
    seed_array: &[i32],
    samples_drawn: u64,
) -> Result<String, CheckpointError> {
    let json = serde_json::to_string(&HashedFields {
        seed,
        next_slot,
        lag_slot,
        seed_array,
        samples_drawn,
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

impl RandomSnapshot {
    /// Serialize to a JSON string
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse from a JSON string. The result is not validated until restored.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        Ok(serde_json::from_str(json)?)
    }
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Whether a cursor pair can occur after `samples_drawn` draws.
///
/// Before the first draw the cursors sit at (0, 21). Afterwards both lie in
/// `[1, 55]` with the trailing cursor 21 slots ahead of the leading one, mod 55.
fn cursors_reachable(next_slot: usize, lag_slot: usize, samples_drawn: u64) -> bool {
    let lag = SEED_LAG as usize;
    if samples_drawn == 0 {
        return (next_slot, lag_slot) == (0, lag);
    }
    next_slot >= 1 && lag_slot == (next_slot + lag - 1) % (STATE_LEN - 1) + 1
}

/// Validate snapshot integrity before restoring
///
/// Checks, in order: array length, cursor range, cursor pairing, slot values, hash.
pub fn validate_snapshot(snapshot: &RandomSnapshot) -> Result<(), CheckpointError> {
    if snapshot.seed_array.len() != STATE_LEN {
        return Err(CheckpointError::WrongStateLength {
            expected: STATE_LEN,
            actual: snapshot.seed_array.len(),
        });
    }

    for (name, value) in [("next_slot", snapshot.next_slot), ("lag_slot", snapshot.lag_slot)] {
        if value >= STATE_LEN {
            return Err(CheckpointError::CursorOutOfRange { name, value });
        }
    }

    if !cursors_reachable(snapshot.next_slot, snapshot.lag_slot, snapshot.samples_drawn) {
        return Err(CheckpointError::CursorMismatch {
            next_slot: snapshot.next_slot,
            lag_slot: snapshot.lag_slot,
            samples_drawn: snapshot.samples_drawn,
        });
    }

    for (index, &value) in snapshot.seed_array.iter().enumerate().skip(1) {
        if !(0..MBIG).contains(&value) {
            return Err(CheckpointError::ValueOutOfRange { index, value });
        }
    }

    let actual = compute_state_hash(
        snapshot.seed,
        snapshot.next_slot,
        snapshot.lag_slot,
        &snapshot.seed_array,
        snapshot.samples_drawn,
    )?;
    if actual != snapshot.state_hash {
        return Err(CheckpointError::HashMismatch {
            expected: snapshot.state_hash.clone(),
            actual,
        });
    }

    Ok(())
}

// ============================================================================
// Save / Restore
// ============================================================================

impl CsRandom {
    /// Capture the full generator state
    ///
    /// # Example
    /// ```
    /// use csrandom_core_rs::CsRandom;
    ///
    /// let mut rng = CsRandom::new(42);
    /// rng.next_int();
    /// let snapshot = rng.snapshot().unwrap();
    ///
    /// let mut resumed = CsRandom::restore(&snapshot).unwrap();
    /// assert_eq!(resumed.next_int(), rng.next_int());
    /// ```
    pub fn snapshot(&self) -> Result<RandomSnapshot, CheckpointError> {
        let (next_slot, lag_slot) = self.cursors();
        let seed_array = self.state().to_vec();
        let state_hash = compute_state_hash(
            self.seed(),
            next_slot,
            lag_slot,
            &seed_array,
            self.samples_drawn(),
        )?;

        Ok(RandomSnapshot {
            seed: self.seed(),
            next_slot,
            lag_slot,
            seed_array,
            samples_drawn: self.samples_drawn(),
            state_hash,
        })
    }

    /// Rebuild a generator from a validated snapshot
    pub fn restore(snapshot: &RandomSnapshot) -> Result<Self, CheckpointError> {
        validate_snapshot(snapshot)?;

        let mut seed_array = [0i32; STATE_LEN];
        seed_array.copy_from_slice(&snapshot.seed_array);

        Ok(CsRandom::from_parts(
            snapshot.seed,
            snapshot.next_slot,
            snapshot.lag_slot,
            seed_array,
            snapshot.samples_drawn,
        ))
    }
}
