//! FFI Integration Tests for the Python `Random` class
//!
//! Runs only with `--features pyo3`.

#[cfg(feature = "pyo3")]
mod ffi_tests {
    use csrandom_core_rs::ffi::random::PyRandom;
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;
    use pyo3::types::PyByteArray;

    /// next_bytes fills the whole bytearray in place, same bytes as the Rust API
    #[test]
    fn test_ffi_next_bytes_fills_bytearray() {
        Python::with_gil(|py| {
            let rng = py.get_type_bound::<PyRandom>().call1((42,)).unwrap();
            let buffer = PyByteArray::new_bound(py, &[0u8; 8]);

            rng.call_method1("next_bytes", (buffer.clone(),)).unwrap();

            assert_eq!(buffer.to_vec(), vec![62, 23, 186, 150, 174, 4, 205, 59]);
            assert_eq!(buffer.len(), 8, "length must not change");
            let drawn: u64 = rng.getattr("samples_drawn").unwrap().extract().unwrap();
            assert_eq!(drawn, 8);
        });
    }

    #[test]
    fn test_ffi_next_bytes_none_raises() {
        Python::with_gil(|py| {
            let rng = py.get_type_bound::<PyRandom>().call1((42,)).unwrap();

            let err = rng.call_method1("next_bytes", (py.None(),)).unwrap_err();
            assert!(err.is_instance_of::<PyValueError>(py));
        });
    }

    #[test]
    fn test_ffi_snapshot_round_trip() {
        Python::with_gil(|py| {
            let class = py.get_type_bound::<PyRandom>();
            let rng = class.call1((42,)).unwrap();
            rng.call_method0("next_int").unwrap();

            let json = rng.call_method0("snapshot_json").unwrap();
            let resumed = class.call_method1("from_snapshot_json", (json,)).unwrap();

            let a: i32 = rng.call_method0("next_int").unwrap().extract().unwrap();
            let b: i32 = resumed.call_method0("next_int").unwrap().extract().unwrap();
            assert_eq!(a, b);
            assert_eq!(a, 302596119);
        });
    }
}
