//! VUnit adapter.
//!
//! Wraps VUnit test objects so the core driver can register runs on them:
//! a test case is anything with a `name` attribute and an
//! `add_config(name=..., generics={...})` method.

use pyo3::prelude::*;
use pyo3::types::{PyDict, PyString};
use tbsweep_core::sweep::{Registrar, Registration, Selector, TestCase};

/// A discovered VUnit test case (or any object with the same surface).
#[derive(Debug)]
pub struct VunitTest<'py> {
    obj: Bound<'py, PyAny>,
    name: String,
}

impl<'py> VunitTest<'py> {
    /// Wraps `obj`, reading its `name` once.
    ///
    /// # Errors
    ///
    /// A `PyErr` if `obj.name` is missing or not a string.
    pub fn new(obj: Bound<'py, PyAny>) -> PyResult<Self> {
        let name = obj.getattr("name")?.extract()?;
        Ok(Self { obj, name })
    }
}

impl Registrar for VunitTest<'_> {
    type Error = PyErr;

    fn register(&mut self, registration: Registration) -> PyResult<()> {
        let py = self.obj.py();
        let generics = PyDict::new(py);
        generics.set_item(&registration.generic, &registration.payload)?;
        let kwargs = PyDict::new(py);
        kwargs.set_item("name", &registration.name)?;
        kwargs.set_item("generics", generics)?;
        let _ = self.obj.call_method("add_config", (), Some(&kwargs))?;
        Ok(())
    }
}

impl TestCase for VunitTest<'_> {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Collects the test cases of a VUnit testbench via `get_tests()`.
///
/// # Errors
///
/// A `PyErr` if `get_tests` fails or a test object has no `name`.
pub fn discover_tests<'py>(testbench: &Bound<'py, PyAny>) -> PyResult<Vec<VunitTest<'py>>> {
    testbench
        .call_method0("get_tests")?
        .try_iter()?
        .map(|t| VunitTest::new(t?))
        .collect()
}

/// Converts a Python selector into a driver selector.
///
/// `None` selects every test; a string selects one test by name; a list or tuple of
/// strings selects any of them; a callable is evaluated against `names` up front so
/// its exceptions surface here rather than during driving.
///
/// # Errors
///
/// A `PyErr` if a callable raises or the selector has an unsupported shape.
pub fn py_to_selector(selector: &Bound<'_, PyAny>, names: &[&str]) -> PyResult<Selector> {
    if selector.is_none() {
        return Ok(Selector::Any);
    }
    if selector.is_instance_of::<PyString>() {
        return Ok(Selector::Named(selector.extract()?));
    }
    if selector.is_callable() {
        let mut picked = Vec::new();
        for &name in names {
            if selector.call1((name,))?.is_truthy()? {
                picked.push(name.to_string());
            }
        }
        return Ok(Selector::OneOf(picked));
    }
    Ok(Selector::OneOf(selector.extract()?))
}
