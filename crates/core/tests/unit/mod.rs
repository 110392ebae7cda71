//! # Unit Components
//!
//! Behavioural tests grouped by the part of the crate they exercise.

/// Sweep plan loading, validation, and presets.
pub mod config;

/// Enumeration, encoding, and driving.
///
/// - Counting, ordering, and determinism properties of the enumerator.
/// - Canonical encoding and decoding.
/// - Rule selection and registration through framework doubles.
pub mod sweep;
