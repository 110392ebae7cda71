//! Sweep plan Python binding.
//!
//! A `SweepPlan` replaces a whole driving script: build it from a dict, a JSON file, or a
//! preset, then `apply` it to a VUnit library. Test cases come from VUnit discovery; the
//! plan's own `tests` lists are only used by `run_names`/`count` previews.

use pyo3::prelude::*;
use tracing::debug;
use tbsweep_core::SweepPlan;
use tbsweep_core::config::presets;

use crate::conversion::{config_err, py_dict_to_plan};
use crate::framework::discover_tests;
use crate::stats::PySweepStats;

/// Python-exposed sweep plan: wraps the core `SweepPlan`.
#[pyclass(name = "SweepPlan")]
#[derive(Debug)]
pub struct PySweepPlan {
    /// Wrapped plan.
    pub inner: SweepPlan,
}

#[pymethods]
impl PySweepPlan {
    /// Creates a plan from a dict using the plan file schema.
    #[new]
    fn new(py: Python<'_>, plan: &Bound<'_, PyAny>) -> PyResult<Self> {
        Ok(Self {
            inner: py_dict_to_plan(py, plan)?,
        })
    }

    /// Loads a JSON plan file.
    #[staticmethod]
    fn load(path: &str) -> PyResult<Self> {
        let inner = SweepPlan::load(path).map_err(|e| config_err(&e))?;
        Ok(Self { inner })
    }

    /// Returns a built-in preset.
    #[staticmethod]
    fn from_preset(name: &str) -> PyResult<Self> {
        let inner = presets::by_name(name).map_err(|e| config_err(&e))?;
        Ok(Self { inner })
    }

    /// Names accepted by `from_preset`.
    #[staticmethod]
    fn presets() -> Vec<&'static str> {
        presets::names()
    }

    /// Testbench names in driving order.
    fn testbenches(&self) -> Vec<String> {
        self.inner
            .testbenches
            .iter()
            .map(|tb| tb.name.clone())
            .collect()
    }

    /// Run names the plan yields for its listed test cases.
    fn run_names(&self) -> Vec<String> {
        let (previews, _) = self.inner.preview();
        previews.iter().flat_map(|p| p.run_names()).collect()
    }

    /// Statistics for the listed test cases.
    fn count(&self) -> PySweepStats {
        self.inner.preview().1.into()
    }

    /// Registers runs on every testbench of `library` (`library.test_bench(name)`).
    fn apply(&self, library: &Bound<'_, PyAny>) -> PyResult<PySweepStats> {
        let mut total = tbsweep_core::stats::SweepStats::default();
        for tb in &self.inner.testbenches {
            let testbench = library.call_method1("test_bench", (tb.name.as_str(),))?;
            let mut tests = discover_tests(&testbench)?;
            debug!(testbench = %tb.name, tests = tests.len(), "discovered test cases");
            let stats = tb.driver(&self.inner.generic).run(tests.iter_mut())?;
            total.merge(&stats);
        }
        Ok(total.into())
    }
}
