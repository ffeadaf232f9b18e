/// Set RUST_LOG to control verbosity, e.g. RUST_LOG=debug or
/// RUST_LOG=camera_trainer=trace.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
