//! Utility functions exposed to Python.
//!
//! Provides the version string and logging setup for the `tbsweep` module.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tracing_subscriber::EnvFilter;

/// Returns the package version string.
#[pyfunction]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Routes sweep logs to stderr.
///
/// `level` is an `EnvFilter` directive such as `"info"` or `"tbsweep_core=debug"`;
/// `RUST_LOG` wins when set. Calling it again is a no-op.
///
/// # Errors
///
/// `ValueError` if `level` is not a valid filter directive.
#[pyfunction]
#[pyo3(signature = (level = "info"))]
pub fn init_logging(level: &str) -> PyResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| PyValueError::new_err(format!("Invalid log level '{level}': {e}")))?,
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    Ok(())
}
