//! Sweep dimensions.
//!
//! A dimension is one named testbench parameter together with the ordered list of
//! values it should take. Dimensions are declared once per sweep and never mutated.

use serde::{Deserialize, Serialize};

use crate::common::{DimensionParseError, Value};

/// A named parameter and its ordered candidate values.
///
/// The value list may be empty; such a dimension enumerates to nothing and
/// silences the whole sweep it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Parameter name as seen by the testbench decoder (e.g. `SMPL_ORDER_PY`).
    pub name: String,
    /// Candidate values in declaration order.
    pub values: Vec<Value>,
}

impl Dimension {
    /// Creates a dimension from a name and any iterable of value-convertible items.
    ///
    /// # Arguments
    ///
    /// * `name` - Parameter name.
    /// * `values` - Candidate values, in the order they should be swept.
    pub fn new<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses the command-line shorthand `NAME=v1,v2,...`.
    ///
    /// Each value token is typed with [`Value::parse_token`]. `NAME=` yields an
    /// empty dimension.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionParseError`] if there is no `=` or the name is empty.
    pub fn parse(spec: &str) -> Result<Self, DimensionParseError> {
        let (name, values) = spec
            .split_once('=')
            .ok_or_else(|| DimensionParseError::MissingEquals(spec.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(DimensionParseError::EmptyName(spec.to_string()));
        }
        let values = if values.is_empty() {
            Vec::new()
        } else {
            values.split(',').map(Value::parse_token).collect()
        };
        Ok(Self {
            name: name.to_string(),
            values,
        })
    }

    /// Number of candidate values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the dimension has no candidate values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
