use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,highcard_engine=info,highcard_cli=info";

/// Initialize logging for the application.
///
/// Diagnostics go to stderr so command output on stdout stays parseable.
/// `RUST_LOG` overrides the default filter. Calling this more than once is
/// harmless; only the first subscriber is installed.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
