//! Deterministic random number generation
//!
//! Bit-exact reproduction of the .NET `System.Random` subtractive
//! lagged-Fibonacci generator (Knuth's algorithm as given in Numerical
//! Recipes in C, 2nd Ed.).
//! CRITICAL: Same seed MUST produce the same sequence as the reference runtime.

pub mod checkpoint;
pub mod constants;
mod error;
mod lagged_fibonacci;

pub use checkpoint::RandomSnapshot;
pub use error::{CheckpointError, RandomError};
pub use lagged_fibonacci::CsRandom;
