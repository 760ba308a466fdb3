//! Telemetry helpers for applications embedding `dashboard-charts`.
//!
//! Tracing setup stays explicit and opt-in. Hosts can either call one of the
//! `init_*` helpers here or wire their own `tracing` subscriber and filters.
//! Render-cycle decisions (skipped renders, hover transitions) are emitted at
//! `debug`/`trace` level under the `dashboard_charts` target.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "dashboard_charts=info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when no initialization is performed (feature disabled) or if a
/// global subscriber was already set by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`], with a caller-chosen filter used when
/// `RUST_LOG` is absent or unparsable (e.g. `"dashboard_charts=trace"` to watch
/// hover transitions).
#[must_use]
pub fn init_tracing_with_fallback_filter(fallback: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback;
        false
    }
}
