//! Python bindings for the testbench configuration sweep generator.
//!
//! This crate exposes the sweep core to VUnit `run.py` scripts via PyO3. It provides:
//! 1. **Encoding:** `encode`, `decode`, and `combinations` over Python values.
//! 2. **Driving:** `gen_tests` and `sweep_testbench`, registering runs through `add_config`.
//! 3. **Plans:** `SweepPlan` built from a dict, a JSON file, or a preset, and applied to a
//!    VUnit library.
//! 4. **Statistics and utilities:** `SweepStats`, `version`, and `init_logging`.

use pyo3::prelude::*;

/// Python value and plan conversion.
pub mod conversion;
/// Adapter from VUnit test objects to the core registration interface.
pub mod framework;
/// Sweep plan binding (`PySweepPlan`).
pub mod plan;
/// Statistics binding (`PySweepStats`).
pub mod stats;
/// Module-level sweep functions.
pub mod sweep;
/// Utility functions (version, logging).
pub mod utils;

/// Registers all sweep classes and functions onto the given Python module.
///
/// # Errors
///
/// A `PyErr` if registration fails.
pub fn register_sweep_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<plan::PySweepPlan>()?;
    m.add_class::<stats::PySweepStats>()?;

    m.add_function(wrap_pyfunction!(sweep::encode, m)?)?;
    m.add_function(wrap_pyfunction!(sweep::decode, m)?)?;
    m.add_function(wrap_pyfunction!(sweep::combinations, m)?)?;
    m.add_function(wrap_pyfunction!(sweep::gen_tests, m)?)?;
    m.add_function(wrap_pyfunction!(sweep::sweep_testbench, m)?)?;
    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_logging, m)?)?;

    m.add("DEFAULT_GENERIC", tbsweep_core::sweep::DEFAULT_GENERIC)?;

    Ok(())
}

#[pymodule]
fn tbsweep(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_sweep_module(m)
}
