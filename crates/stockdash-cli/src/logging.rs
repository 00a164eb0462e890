use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// Install the global subscriber. Output goes to stderr so stdout stays
/// clean for table and JSON output; `RUST_LOG` overrides the `warn` default.
pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
