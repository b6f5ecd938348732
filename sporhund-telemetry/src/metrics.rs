//! ## sporhund-telemetry::metrics
//! **Prometheus recorder for substrate activity**
//!
//! ### Components:
//! - `sporhund_records_total`: counter of recorded instrumentation events
//! - `sporhund_dump_duration_ns`: histogram of counter-table dump times

use prometheus::{Counter, Histogram, HistogramOpts, Registry};

#[derive(Debug, Clone)]
pub struct MetricsRecorder {
    pub registry: prometheus::Registry,
    pub records_total: prometheus::Counter,
    pub dump_duration: prometheus::Histogram,
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsRecorder {
    pub fn new() -> Self {
        let registry = Registry::new();
        let records_total =
            Counter::new("sporhund_records_total", "Total recorded instrumentation events")
                .unwrap();

        let dump_duration = Histogram::with_opts(
            HistogramOpts::new("sporhund_dump_duration_ns", "Counter table dump time")
                .buckets(vec![10_000.0, 100_000.0, 1_000_000.0, 10_000_000.0]),
        )
        .unwrap();

        registry.register(Box::new(records_total.clone())).unwrap();
        registry.register(Box::new(dump_duration.clone())).unwrap();

        Self {
            registry,
            records_total,
            dump_duration,
        }
    }

    pub fn gather_metrics(&self) -> Result<String, prometheus::Error> {
        use prometheus::Encoder;
        let encoder = prometheus::TextEncoder::new();
        let mut buffer = Vec::<u8>::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap())
    }

    pub fn inc_records(&self) {
        self.records_total.inc();
    }
}
