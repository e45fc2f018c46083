//! Logging setup for the CLI.

/// Initialize timestamped, leveled logging on stdout.
///
/// Defaults to `info`; `RUST_LOG` overrides.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_target(false)
        .init();
}
