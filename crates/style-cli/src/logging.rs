//! Tracing subscriber setup. Logs go to stderr so stdout stays parseable.

use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global subscriber.
///
/// `verbose` forces DEBUG. Otherwise `RUST_LOG` is honored, defaulting to
/// `warn`.
pub fn init(verbose: bool) {
    let result = if verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    } else {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
    };

    // Only fails when a subscriber is already installed.
    if result.is_ok() {
        tracing::debug!("Verbose mode enabled");
    }
}
