//! Opt-in tracing setup for hosts embedding `chart-geometry`.
//!
//! The engine only emits `tracing` events (series changes, recompute passes,
//! configuration coercions). Hosts either install their own subscriber or call
//! one of the helpers below when the `telemetry` feature is enabled.

/// Directive used when `RUST_LOG` is unset.
pub const DEFAULT_TRACING_DIRECTIVE: &str = "chart_geometry=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_TRACING_DIRECTIVE`].
///
/// Returns `false` when the feature is disabled or a global subscriber is
/// already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_directive(DEFAULT_TRACING_DIRECTIVE)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"chart_geometry=trace"` to see every recompute pass.
#[must_use]
pub fn init_tracing_with_directive(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
