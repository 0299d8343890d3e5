//! Logging setup and structured error reporting.

/// Install the process-wide JSON subscriber. Later calls are no-ops.
pub fn init() {
    tracing::init();
}

/// Structured events for [`coverline_core::Error`] values.
pub mod report;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use report::report;
