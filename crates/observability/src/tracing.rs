//! Subscriber setup: JSON events filtered through `RUST_LOG`.

use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` when it parses, `fallback` otherwise.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Install the JSON subscriber with [`DEFAULT_FILTER`] as the fallback.
pub fn init() {
    init_with_fallback(DEFAULT_FILTER);
}

/// Install the JSON subscriber. Returns `false` when a global subscriber was
/// already set, in which case nothing changes.
pub fn init_with_fallback(fallback: &str) -> bool {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter(fallback))
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_current_span(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
