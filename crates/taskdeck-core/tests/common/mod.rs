use tracing_subscriber::EnvFilter;

/// Opt-in test logging: `RUST_LOG=taskdeck_core=debug cargo test`.
pub fn init_tracing() {
  let filter =
    EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| {
        EnvFilter::new("warn")
      });
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_target(true)
    .with_test_writer()
    .try_init();
}
