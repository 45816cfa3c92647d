use tracing_subscriber::EnvFilter;

/// Initializes structured logging for the application.
///
/// Filtering is controlled through `RUST_LOG` (e.g.
/// `RUST_LOG=pharmacy_orders=debug`); without it, `info` and above are
/// shown.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
