//! Module-level sweep functions.
//!
//! These replace the per-script `encode` and `gen_*_tests` helpers of a VUnit `run.py`:
//!
//! ```python
//! tb = vunit_lib.test_bench("tb_pred_sample")
//! for test in tb.get_tests():
//!     tbsweep.gen_tests(test, [("SMPL_ORDER_PY", [0, 1, 2]), ("VAR2_PY", ["0"])])
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use tbsweep_core::sweep::{self as engine, Combination, DEFAULT_GENERIC, SweepDriver, TestCase};

use crate::conversion::{py_to_dimensions, py_to_pairs};
use crate::framework::{VunitTest, discover_tests, py_to_selector};
use crate::stats::PySweepStats;

/// Encode `(name, value)` pairs (or a dict) as `name:value,...`.
#[pyfunction]
pub fn encode(pairs: &Bound<'_, PyAny>) -> PyResult<String> {
    let combination = Combination::from_pairs(py_to_pairs(pairs)?);
    Ok(engine::encode(&combination))
}

/// Split an encoded identifier into `(name, value)` string pairs.
#[pyfunction]
pub fn decode(encoded: &str) -> PyResult<Vec<(String, String)>> {
    engine::decode(encoded)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Enumerate every combination of `dimensions`, last dimension fastest.
///
/// Each combination is a list of `(name, rendered value)` pairs.
#[pyfunction]
pub fn combinations(dimensions: &Bound<'_, PyAny>) -> PyResult<Vec<Vec<(String, String)>>> {
    let dims = py_to_dimensions(dimensions)?;
    Ok(engine::enumerate(&dims)
        .map(|c| {
            c.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        })
        .collect())
}

/// Register one run per combination on a single VUnit test case.
///
/// Returns the number of runs registered. An empty dimension list registers nothing.
#[pyfunction]
#[pyo3(signature = (test, dimensions, generic = DEFAULT_GENERIC))]
pub fn gen_tests(
    test: &Bound<'_, PyAny>,
    dimensions: &Bound<'_, PyAny>,
    generic: &str,
) -> PyResult<usize> {
    let dims = py_to_dimensions(dimensions)?;
    let mut test = VunitTest::new(test.clone())?;
    engine::sweep(&dims, generic, &mut test)
}

/// Sweep every test case of a VUnit testbench.
///
/// `rules` is a list of `(selector, dimensions)`; the first rule whose selector matches a
/// test case is applied. Selectors are `None`, a test name, a list of names, or a callable
/// taking the test name.
#[pyfunction]
#[pyo3(signature = (testbench, rules, generic = DEFAULT_GENERIC))]
pub fn sweep_testbench(
    testbench: &Bound<'_, PyAny>,
    rules: &Bound<'_, PyAny>,
    generic: &str,
) -> PyResult<PySweepStats> {
    let mut tests = discover_tests(testbench)?;
    let names: Vec<String> = tests.iter().map(|t| t.name().to_string()).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let tb_name = testbench
        .getattr("name")
        .and_then(|n| n.extract::<String>())
        .unwrap_or_else(|_| "testbench".to_string());
    let mut driver = SweepDriver::new(tb_name).with_generic(generic);
    for entry in rules.try_iter()? {
        let (selector, dims): (Bound<'_, PyAny>, Bound<'_, PyAny>) = entry?.extract()?;
        driver = driver.rule(py_to_selector(&selector, &name_refs)?, py_to_dimensions(&dims)?);
    }

    Ok(driver.run(tests.iter_mut())?.into())
}
