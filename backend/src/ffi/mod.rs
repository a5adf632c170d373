//! FFI (Foreign Function Interface) module
//!
//! PyO3 bindings for exposing the Rust generator to Python.
//!
//! # Design Principles
//!
//! 1. **Minimal boundary**: Only the public sampling surface and checkpoints
//! 2. **Simple types**: Integers, floats, bytearrays and JSON strings
//! 3. **Safe errors**: Every Rust error becomes a Python exception

pub mod random;
