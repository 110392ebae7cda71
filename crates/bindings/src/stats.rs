//! Statistics Python binding.
//!
//! Exposes sweep statistics to Python: getters for the counters, `print` for the
//! human-readable report, and `to_dict` for export.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use tbsweep_core::stats::SweepStats;

/// Python-exposed statistics: wraps `SweepStats`.
#[pyclass(name = "SweepStats")]
#[derive(Clone, Debug)]
pub struct PySweepStats {
    /// Wrapped counters.
    pub inner: SweepStats,
}

#[pymethods]
impl PySweepStats {
    #[getter]
    fn testbenches(&self) -> u64 {
        self.inner.testbenches
    }

    #[getter]
    fn tests_seen(&self) -> u64 {
        self.inner.tests_seen
    }

    #[getter]
    fn tests_swept(&self) -> u64 {
        self.inner.tests_swept
    }

    #[getter]
    fn tests_skipped(&self) -> u64 {
        self.inner.tests_skipped
    }

    #[getter]
    fn registrations(&self) -> u64 {
        self.inner.registrations
    }

    /// Print the report.
    fn print(&self) {
        self.inner.print();
    }

    /// Counters as a plain dict.
    fn to_dict<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let d = PyDict::new(py);
        d.set_item("testbenches", self.inner.testbenches)?;
        d.set_item("tests_seen", self.inner.tests_seen)?;
        d.set_item("tests_swept", self.inner.tests_swept)?;
        d.set_item("tests_skipped", self.inner.tests_skipped)?;
        d.set_item("registrations", self.inner.registrations)?;
        Ok(d)
    }

    fn __repr__(&self) -> String {
        format!(
            "SweepStats(testbenches={}, tests_seen={}, registrations={})",
            self.inner.testbenches, self.inner.tests_seen, self.inner.registrations
        )
    }
}

impl From<SweepStats> for PySweepStats {
    fn from(inner: SweepStats) -> Self {
        Self { inner }
    }
}
