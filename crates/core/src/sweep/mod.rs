//! Configuration sweep pipeline.
//!
//! This module turns declared dimensions into registered simulation runs. It provides:
//! 1. **Dimensions:** Named parameters with ordered candidate values.
//! 2. **Enumeration:** The lazy Cartesian product of a dimension list.
//! 3. **Encoding:** The canonical `name:value,...` identifier and its decoder.
//! 4. **Driving:** Rule selection per discovered test case and registration.

/// Named parameter dimensions.
pub mod dimension;

/// Per-testbench sweep driver and the registration interface.
pub mod driver;

/// Canonical identifier encoding and decoding.
pub mod encode;

/// Cartesian-product enumeration.
pub mod enumerate;

pub use dimension::Dimension;
pub use driver::{
    DiscoveredTest, Registrar, Registration, Selector, SweepDriver, SweepRule, TestCase, sweep,
};
pub use encode::{DEFAULT_GENERIC, decode, encode, encode_pairs, lookup};
pub use enumerate::{Combination, Combinations, combination_count, enumerate};
