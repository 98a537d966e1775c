//! Run counters exported through the `metrics` facade
//!
//! Counters are no-ops until a recorder is installed with
//! [`install_prometheus`].

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Commands applied, labelled by kind
    Commands,
    /// Query results written to the sink
    Results,
    /// Records that failed, labelled by error kind
    Errors,
}

impl CounterMetric {
    fn name(&self) -> &'static str {
        match self {
            CounterMetric::Commands => "ladder_book_commands_total",
            CounterMetric::Results => "ladder_book_results_total",
            CounterMetric::Errors => "ladder_book_errors_total",
        }
    }
}

/// Increment a counter carrying a `kind` label
pub fn increment_kind(metric: CounterMetric, kind: &'static str) {
    metrics::counter!(metric.name(), "kind" => kind).increment(1);
}

/// Increment an unlabelled counter
pub fn increment(metric: CounterMetric) {
    metrics::counter!(metric.name()).increment(1);
}

/// Install a global Prometheus recorder and return a handle for rendering
pub fn install_prometheus() -> anyhow::Result<PrometheusHandle> {
    PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics recorder: {}", e))
}
