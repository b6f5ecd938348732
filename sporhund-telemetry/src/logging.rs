//! ## sporhund-telemetry::logging
//! **Structured logging with tracing**
//!
//! Subscriber initialization plus a span-wrapped event log helper used by
//! instrumentation façades to annotate recorded events with metadata.

use opentelemetry::KeyValue;
use tracing::info_span;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the global subscriber, filtered by `RUST_LOG` with an
    /// `info` fallback.
    pub fn init() {
        Self::init_with_filter("info")
    }

    /// Installs the global subscriber with `directive` as the fallback
    /// filter when `RUST_LOG` is unset. The directive usually comes from
    /// `TelemetryConfig::log_filter`.
    pub fn init_with_filter(directive: &str) {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
            )
            .with_thread_names(true)
            .with_span_events(FmtSpan::ENTER)
            .init()
    }

    /// Logs one instrumentation event with structured metadata.
    #[inline]
    pub fn log_event(event_type: &str, metadata: Vec<KeyValue>) {
        let span = info_span!(
            "instrumentation_event",
            event_type = event_type,
            otel.kind = "INTERNAL"
        );
        let _guard = span.enter();

        tracing::info!(
            metadata = ?metadata,
            "Instrumentation event recorded"
        );
    }
}
