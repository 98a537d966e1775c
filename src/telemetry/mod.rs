//! Telemetry module
//!
//! Logging and run metrics

mod counters;
mod logging;

pub use counters::{increment, increment_kind, install_prometheus, CounterMetric};
pub use logging::{init_logging, LogFormat};

use crate::config::TelemetryConfig;
use anyhow::Context;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;

/// Holds the metrics handle for the end-of-run snapshot
pub struct TelemetryGuard {
    snapshot: Option<(PathBuf, PrometheusHandle)>,
}

impl TelemetryGuard {
    /// Write the Prometheus text exposition if a snapshot path was configured
    pub fn write_metrics_snapshot(&self) -> anyhow::Result<()> {
        if let Some((path, handle)) = &self.snapshot {
            std::fs::write(path, handle.render())
                .with_context(|| format!("failed to write metrics to {}", path.display()))?;
            tracing::info!(path = %path.display(), "Metrics snapshot written");
        }
        Ok(())
    }
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    init_logging(&config.log_level, config.log_format)?;

    let snapshot = match &config.metrics_snapshot {
        Some(path) => Some((path.clone(), install_prometheus()?)),
        None => None,
    };

    Ok(TelemetryGuard { snapshot })
}
