//! Telemetry helpers for applications embedding `splinechart`.
//!
//! The chart logs through `tracing` only; installing a subscriber stays the
//! host application's decision. `init_default_tracing` is a convenience for
//! demos and small tools.

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_TRACING_FILTER: &str = "splinechart=info";

/// Initializes a compact `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_TRACING_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
