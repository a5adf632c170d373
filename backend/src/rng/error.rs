//! Error types for the generator and its checkpoints

use thiserror::Error;

/// Input validation errors raised by the sampling entry points
///
/// Neither variant is ever produced by internal state; when one is returned
/// the generator has not been advanced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RandomError {
    #[error("Invalid range: minValue {min} cannot be bigger than maxValue {max}")]
    InvalidRange { min: i64, max: i64 },

    #[error("Buffer is nil")]
    NilBuffer,
}

/// Errors raised while restoring a generator from a snapshot
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckpointError {
    #[error("State array has {actual} slots, expected {expected}")]
    WrongStateLength { expected: usize, actual: usize },

    #[error("Cursor {name} = {value} outside [0, 55]")]
    CursorOutOfRange { name: &'static str, value: usize },

    #[error("Cursors ({next_slot}, {lag_slot}) unreachable after {samples_drawn} draws")]
    CursorMismatch {
        next_slot: usize,
        lag_slot: usize,
        samples_drawn: u64,
    },

    #[error("State slot {index} holds {value}, outside [0, MBIG)")]
    ValueOutOfRange { index: usize, value: i32 },

    #[error("State hash mismatch: expected {expected}, computed {actual}")]
    HashMismatch { expected: String, actual: String },

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CheckpointError {
    fn from(err: serde_json::Error) -> Self {
        CheckpointError::Serialization(err.to_string())
    }
}
