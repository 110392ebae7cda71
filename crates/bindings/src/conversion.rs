//! Python↔Rust conversion.
//!
//! Converts Python objects into the core types:
//! 1. **Values:** `bool`, `int`, and `str` map to their tagged variants; anything else is kept
//!    as the text of its `str()`, so the encoded form matches what the script author sees.
//! 2. **Dimensions:** A dict or a sequence of `(name, values)` pairs, order preserved.
//! 3. **Plans:** A plan dict, round-tripped through JSON into `SweepPlan`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyInt, PyString};
use tbsweep_core::common::ConfigError;
use tbsweep_core::sweep::Dimension;
use tbsweep_core::{SweepPlan, Value};

/// Maps a plan error onto `ValueError`.
pub fn config_err(e: &ConfigError) -> PyErr {
    PyValueError::new_err(format!("Invalid sweep plan: {e}"))
}

/// Converts one Python value.
///
/// `bool` is checked before `int` since it is an `int` subclass. Integers outside the
/// 64-bit range and floats fall back to their `str()` form.
///
/// # Errors
///
/// A `PyErr` if the object's `str()` raises.
pub fn py_to_value(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    if obj.is_instance_of::<PyBool>() {
        return Ok(Value::Bool(obj.extract()?));
    }
    if obj.is_instance_of::<PyInt>() {
        if let Ok(i) = obj.extract::<i64>() {
            return Ok(Value::Int(i));
        }
        if let Ok(u) = obj.extract::<u64>() {
            return Ok(Value::UInt(u));
        }
    }
    if obj.is_instance_of::<PyString>() {
        return Ok(Value::Text(obj.extract()?));
    }
    Ok(Value::Text(obj.str()?.extract()?))
}

/// Converts one `(name, values)` entry.
fn py_to_dimension(name: &Bound<'_, PyAny>, values: &Bound<'_, PyAny>) -> PyResult<Dimension> {
    let name: String = name.extract()?;
    let values = values
        .try_iter()?
        .map(|v| py_to_value(&v?))
        .collect::<PyResult<Vec<_>>>()?;
    Ok(Dimension { name, values })
}

/// Converts dimensions given as a dict (`{"SMPL_ORDER_PY": [0, 1, 2]}`) or a sequence of
/// `(name, values)` pairs.
///
/// # Errors
///
/// A `PyErr` if the object has neither shape or a value cannot be read.
pub fn py_to_dimensions(obj: &Bound<'_, PyAny>) -> PyResult<Vec<Dimension>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        return dict
            .iter()
            .map(|(k, v)| py_to_dimension(&k, &v))
            .collect();
    }
    obj.try_iter()?
        .map(|entry| {
            let (name, values): (Bound<'_, PyAny>, Bound<'_, PyAny>) = entry?.extract()?;
            py_to_dimension(&name, &values)
        })
        .collect()
}

/// Converts `(name, value)` pairs (or a dict) into rendered pairs, order preserved.
///
/// # Errors
///
/// A `PyErr` if the object has neither shape.
pub fn py_to_pairs(obj: &Bound<'_, PyAny>) -> PyResult<Vec<(String, Value)>> {
    if let Ok(dict) = obj.downcast::<PyDict>() {
        return dict
            .iter()
            .map(|(k, v)| Ok((k.extract()?, py_to_value(&v)?)))
            .collect();
    }
    obj.try_iter()?
        .map(|entry| {
            let (k, v): (String, Bound<'_, PyAny>) = entry?.extract()?;
            Ok((k, py_to_value(&v)?))
        })
        .collect()
}

/// Converts a Python plan dict to a `SweepPlan`.
///
/// The dict is serialized with `json.dumps` and parsed by the core, so the schema is the
/// same as for plan files.
///
/// # Errors
///
/// A `PyErr` if the dict is not JSON-serializable or not a valid plan.
pub fn py_dict_to_plan(py: Python<'_>, dict: &Bound<'_, PyAny>) -> PyResult<SweepPlan> {
    let json = py.import("json")?;
    let json_str: String = json.getattr("dumps")?.call1((dict,))?.extract()?;
    SweepPlan::from_json_str(&json_str).map_err(|e| config_err(&e))
}
