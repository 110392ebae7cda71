//! Common types shared across the sweep pipeline.
//!
//! This module provides:
//! 1. **Values:** The tagged `Value` type carried by dimensions and combinations.
//! 2. **Error Handling:** Plan, decode, and dimension-parsing error enums.

/// Error types for plan loading, decoding, and dimension parsing.
pub mod error;

/// Tagged parameter values and their canonical rendering.
pub mod value;

pub use error::{ConfigError, DecodeError, DimensionParseError};
pub use value::Value;
