//! Logging initialization.
//!
//! Controlled by `MINIGIT_LOG`, an `EnvFilter` directive such as `debug` or
//! `minigit::commands=info`. When unset only warnings are shown. Events are
//! written to stderr so stdout carries nothing but the command transcript.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives
pub const LOG_ENV: &str = "MINIGIT_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber.
///
/// Calling it a second time is harmless; the first subscriber stays in place.
pub fn init() {
    use tracing_subscriber::layer::SubscriberExt as _;
    use tracing_subscriber::util::SubscriberInitExt as _;

    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}
