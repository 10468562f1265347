//! Opt-in `tracing` setup for applications embedding `scalediv`.
//!
//! Rebuilds report at `debug`, tolerance fallbacks at `trace` and rejected or
//! capped inputs at `warn`. Hosts that already install a subscriber can ignore
//! this module.

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "scalediv=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG` or [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is disabled or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive.
///
/// An unparsable directive also yields `false`.
#[must_use]
pub fn init_tracing_with_filter(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .or_else(|_| tracing_subscriber::EnvFilter::try_new(fallback_directive));
        let Ok(filter) = filter else {
            return false;
        };

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
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
