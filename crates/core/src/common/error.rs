//! Error types.
//!
//! The sweep core itself has almost no failure modes: enumeration and encoding are
//! total. Errors only arise at the edges:
//! 1. **Plan loading:** Reading and validating a JSON sweep plan.
//! 2. **Decoding:** Splitting an encoded identifier back into pairs.
//! 3. **Command-line dimensions:** Parsing `NAME=v1,v2` shorthands.
//!
//! An empty dimension is deliberately absent from this taxonomy: it enumerates to
//! zero combinations and is never reported as a failure.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a sweep plan.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The plan file could not be read.
    #[error("could not read sweep plan '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The plan is not valid JSON or does not match the plan schema.
    #[error("invalid sweep plan: {0}")]
    Json(#[from] serde_json::Error),

    /// A testbench entry has an empty name.
    #[error("testbench #{index} has an empty name")]
    EmptyTestbenchName {
        /// Zero-based position of the testbench in the plan.
        index: usize,
    },

    /// A dimension has an empty name.
    #[error("testbench '{testbench}', rule #{rule}: dimension #{index} has an empty name")]
    EmptyDimensionName {
        /// Testbench the rule belongs to.
        testbench: String,
        /// Zero-based rule index.
        rule: usize,
        /// Zero-based dimension index.
        index: usize,
    },

    /// The same dimension name is declared twice in one rule.
    #[error("testbench '{testbench}', rule #{rule}: dimension '{name}' is declared more than once")]
    DuplicateDimension {
        /// Testbench the rule belongs to.
        testbench: String,
        /// Zero-based rule index.
        rule: usize,
        /// The repeated name.
        name: String,
    },

    /// A requested preset does not exist.
    #[error("unknown preset '{0}'")]
    UnknownPreset(String),
}

/// Failure to split an encoded identifier back into `name:value` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A pair has no `:` separating the name from the value.
    #[error("pair #{index} ('{pair}') has no ':' separator")]
    MissingSeparator {
        /// Zero-based position of the pair.
        index: usize,
        /// The offending text.
        pair: String,
    },

    /// A pair has an empty name.
    #[error("pair #{index} has an empty name")]
    EmptyKey {
        /// Zero-based position of the pair.
        index: usize,
    },
}

/// Failure to parse a `NAME=v1,v2,...` dimension shorthand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionParseError {
    /// No `=` between name and values.
    #[error("expected NAME=VALUES, got '{0}'")]
    MissingEquals(String),

    /// The name before `=` is empty.
    #[error("dimension name is empty in '{0}'")]
    EmptyName(String),
}
