use tracing_subscriber::{fmt, EnvFilter};

/// Warnings and errors from this crate only.
pub const DEFAULT_FILTER: &str = "code_scan=warn";

/// Installs the global subscriber on stderr, so stdout only ever carries
/// scan results.
pub fn init() {
    fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}
