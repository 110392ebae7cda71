use tbsweep_core::sweep::Dimension;

/// Routes `tracing` output through the test writer; safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Dimension of `len` integer values `0..len`.
pub fn int_dim(name: &str, len: i64) -> Dimension {
    Dimension::new(name, 0..len)
}
