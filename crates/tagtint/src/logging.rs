//! Logging setup for the command-line front end.
//!
//! Logs go to stderr so they never mix with rendered output on stdout.

use tracing_subscriber::EnvFilter;

/// Builds the filter from a level or directive string (`"debug"`,
/// `"tagtint_scanner=trace"`). Falls back to `warn` when it does not parse.
fn filter_from_level(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global tracing subscriber.
///
/// If a subscriber is already set (e.g. in tests), this silently keeps the
/// existing one.
pub fn init_logging(level: &str) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter_from_level(level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
