//! Configuration sweep generator for VHDL testbenches.
//!
//! This crate expands declared testbench parameters into simulation runs:
//! 1. **Values and dimensions:** Named parameters with ordered, opaque candidate values.
//! 2. **Enumeration:** Deterministic Cartesian product, last dimension fastest.
//! 3. **Encoding:** One canonical `name:value,...` string per combination, used both as the
//!    run name and as the payload generic decoded by the testbench.
//! 4. **Driving:** Per-testbench rules that select test cases and register one run per combination
//!    with an injected [`Registrar`].
//! 5. **Plans:** JSON sweep plans and built-in presets, plus sweep statistics.

/// Shared value and error types.
pub mod common;
/// Sweep plans (JSON) and built-in presets.
pub mod config;
/// Dimensions, enumeration, encoding, and the sweep driver.
pub mod sweep;
/// Sweep statistics collection and reporting.
pub mod stats;

/// Root plan type; load with `SweepPlan::load` or pick one from `config::presets`.
pub use crate::config::SweepPlan;
/// Tagged parameter value.
pub use crate::common::Value;
/// Registration interface implemented by framework adapters.
pub use crate::sweep::{Registrar, Registration, TestCase};
/// Per-testbench driver.
pub use crate::sweep::SweepDriver;
