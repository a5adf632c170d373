//! PyO3 wrapper for CsRandom
//!
//! This module provides the Python interface to the Rust generator.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyByteArray, PyBytes, PySlice};

use crate::rng::{CheckpointError, CsRandom, RandomError, RandomSnapshot};

fn random_err(err: RandomError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

fn checkpoint_err(err: CheckpointError) -> PyErr {
    match err {
        CheckpointError::Serialization(msg) => {
            PyErr::new::<PyRuntimeError, _>(format!("Checkpoint serialization failed: {}", msg))
        }
        other => PyErr::new::<PyValueError, _>(format!("Invalid checkpoint: {}", other)),
    }
}

/// Python wrapper for the Rust generator
///
/// # Example (from Python)
///
/// ```python
/// from csrandom_core_rs import Random
///
/// rng = Random(42)
/// assert rng.next_int() == 1434747710
/// buf = bytearray(16)
/// rng.next_bytes(buf)
/// saved = rng.snapshot_json()
/// resumed = Random.from_snapshot_json(saved)
/// ```
#[pyclass(name = "Random")]
pub struct PyRandom {
    inner: CsRandom,
}

#[pymethods]
impl PyRandom {
    /// Create a new generator; every 32-bit seed is valid
    #[new]
    fn new(seed: i32) -> Self {
        PyRandom {
            inner: CsRandom::new(seed),
        }
    }

    fn next_int(&mut self) -> i32 {
        self.inner.next_int()
    }

    /// Raises ValueError if min_value > max_value
    fn next_range(&mut self, min_value: i32, max_value: i32) -> PyResult<i32> {
        self.inner.next_range(min_value, max_value).map_err(random_err)
    }

    /// Raises ValueError if max_value < 0
    fn next_ceiling(&mut self, max_value: i32) -> PyResult<i32> {
        self.inner.next_ceiling(max_value).map_err(random_err)
    }

    fn next_double(&mut self) -> f64 {
        self.inner.next_double()
    }

    /// Fill a bytearray in place
    ///
    /// Raises ValueError if `buffer` is None.
    #[pyo3(signature = (buffer))]
    fn next_bytes(&mut self, buffer: Option<&Bound<'_, PyByteArray>>) -> PyResult<()> {
        let buffer = buffer.ok_or_else(|| random_err(RandomError::NilBuffer))?;
        let py = buffer.py();
        let mut bytes = vec![0u8; buffer.len()];
        self.inner.fill_bytes(&mut bytes);
        // buffer[:] = bytes
        buffer.call_method1(
            "__setitem__",
            (PySlice::full_bound(py), PyBytes::new_bound(py, &bytes)),
        )?;
        Ok(())
    }

    #[getter]
    fn seed(&self) -> i32 {
        self.inner.seed()
    }

    #[getter]
    fn samples_drawn(&self) -> u64 {
        self.inner.samples_drawn()
    }

    /// Serialize the full generator state to JSON
    fn snapshot_json(&self) -> PyResult<String> {
        self.inner
            .snapshot()
            .and_then(|snapshot| snapshot.to_json())
            .map_err(checkpoint_err)
    }

    /// Resume a generator from `snapshot_json()` output
    #[staticmethod]
    fn from_snapshot_json(json: &str) -> PyResult<Self> {
        let snapshot = RandomSnapshot::from_json(json).map_err(checkpoint_err)?;
        let inner = CsRandom::restore(&snapshot).map_err(checkpoint_err)?;
        Ok(PyRandom { inner })
    }
}
