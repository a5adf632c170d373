//! CsRandom Core - Rust Engine
//!
//! Bit-exact reproduction of the .NET `System.Random` pseudo-random number
//! generator, so sequences produced by a seeded `System.Random` can be
//! replayed or verified from Rust.
//!
//! # Architecture
//!
//! - **rng**: The generator, its constants, errors and checkpoints
//! - **ffi**: Python bindings (feature `pyo3`)
//!
//! # Critical Invariants
//!
//! 1. Same seed produces the same sequence as the reference runtime
//! 2. All seeding and sampling arithmetic wraps at 32 bits
//! 3. Not cryptographically secure
//! 4. Invalid arguments are reported, never clamped

// Module declarations
pub mod rng;

// Re-exports for convenience
pub use rng::{CheckpointError, CsRandom, RandomError, RandomSnapshot};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn csrandom_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::random::PyRandom>()?;
    Ok(())
}
