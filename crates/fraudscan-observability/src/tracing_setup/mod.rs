//! Tracing setup: structured logging and event helpers.

pub mod events;

use fraudscan_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a full `EnvFilter` directive string.
pub const LOG_FILTER_ENV: &str = "FRAUDSCAN_LOG";

/// Initialize the tracing subscriber with human-readable output on stderr.
///
/// Respects the `FRAUDSCAN_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Safe to call more than once; later
/// calls are no-ops.
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig::default());
}

/// Initialize tracing from config. `FRAUDSCAN_LOG`, when set, takes priority
/// over `config.log_level`.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    let filter = build_filter(config);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let _ = if config.json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.try_init()
    };
}

/// The filter `init_tracing_with` would install.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}
