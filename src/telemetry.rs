//! Opt-in `tracing` bootstrap for hosts embedding `timeline-rs`.
//!
//! The engine only emits events through the `tracing` facade. Hosts that already
//! run a subscriber can ignore this module entirely.

/// Filter used when `RUST_LOG` is unset: quiet host, gesture lifecycle from the engine.
pub const DEFAULT_FILTER: &str = "info,timeline_rs=debug";

/// Subscriber knobs for [`init_tracing`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryOptions {
    /// `EnvFilter` directives applied when `RUST_LOG` is unset or invalid.
    pub fallback_filter: String,
    /// Prints the emitting module (`timeline_rs::api::...`) on each line.
    pub with_target: bool,
}

impl Default for TelemetryOptions {
    fn default() -> Self {
        Self {
            fallback_filter: DEFAULT_FILTER.to_owned(),
            with_target: true,
        }
    }
}

impl TelemetryOptions {
    #[must_use]
    pub fn with_fallback_filter(mut self, directives: impl Into<String>) -> Self {
        self.fallback_filter = directives.into();
        self
    }

    #[must_use]
    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }
}

/// Installs a compact fmt subscriber with [`TelemetryOptions::default`].
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing(&TelemetryOptions::default())
}

/// Installs a global compact fmt subscriber.
///
/// Returns `false` without the `telemetry` feature, or when the host already set
/// a global subscriber.
#[must_use]
pub fn init_tracing(options: &TelemetryOptions) -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&options.fallback_filter))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let initialized = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(options.with_target)
            .compact()
            .try_init()
            .is_ok();
        if initialized {
            tracing::debug!(filter = %options.fallback_filter, "timeline tracing initialized");
        }
        initialized
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = options;
        false
    }
}
