//! Shared test infrastructure.

/// Tracing setup for tests.
pub mod harness;

/// Framework doubles.
pub mod mocks;
