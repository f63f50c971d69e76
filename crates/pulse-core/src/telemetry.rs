//! Tracing setup — opt-in subscriber for binaries and tests.

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber, filtered by `PULSE_LOG`.
///
/// Falls back to `warn` when the variable is unset. Safe to call more than
/// once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("PULSE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
