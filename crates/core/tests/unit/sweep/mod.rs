/// Driver rule selection and registration.
pub mod driver;
/// Canonical encoding and decoding.
pub mod encoding;
/// End-to-end sweeps of the Predictor testbench dimension sets.
pub mod scenarios;
