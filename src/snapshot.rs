// Per-render snapshot assembly: metrics + device profile + bind address

use crate::device_profile::DeviceProfile;
use crate::metrics_repo::{MetricError, MetricsRepo};
use crate::models::StationSnapshot;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::time::{Duration, timeout};

/// Builds one immutable StationSnapshot per render. Pure composition: no
/// caching, no retries; each field's optionality is preserved end-to-end.
pub struct SnapshotAssembler {
    metrics: Arc<MetricsRepo>,
    profile_path: PathBuf,
    bind_address: String,
    collector_timeout: Duration,
}

impl SnapshotAssembler {
    pub fn new(
        metrics: Arc<MetricsRepo>,
        profile_path: impl Into<PathBuf>,
        bind_address: String,
        collector_timeout: Duration,
    ) -> Self {
        Self {
            metrics,
            profile_path: profile_path.into(),
            bind_address,
            collector_timeout,
        }
    }

    pub async fn assemble(&self) -> StationSnapshot {
        // Collectors are read-only and independent; run them concurrently
        // and keep whichever succeeded.
        let (uptime, cpu_load_percent, memory, disk, cpu_temperature_c) = tokio::join!(
            guarded("uptime", self.collector_timeout, self.metrics.uptime()),
            guarded("cpu_load", self.collector_timeout, self.metrics.cpu_load()),
            guarded("memory", self.collector_timeout, self.metrics.memory()),
            guarded("disk", self.collector_timeout, self.metrics.disk()),
            guarded(
                "temperature",
                self.collector_timeout,
                self.metrics.temperature()
            ),
        );

        let device_config = self.load_profile();

        StationSnapshot {
            uptime,
            ip_address: self.bind_address.clone(),
            cpu_load_percent,
            memory,
            disk,
            cpu_temperature_c,
            device_config,
        }
    }

    /// Fresh profile read, for callers that want the PV section alone.
    pub fn load_profile(&self) -> DeviceProfile {
        DeviceProfile::load(&self.profile_path)
    }
}

/// A failed or wedged collector logs a warning and yields None for its
/// field only; the rest of the snapshot still renders.
async fn guarded<T>(
    operation: &'static str,
    limit: Duration,
    fut: impl Future<Output = Result<T, MetricError>>,
) -> Option<T> {
    match timeout(limit, fut).await {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, operation, "metric unavailable");
            None
        }
        Err(_) => {
            tracing::warn!(
                operation,
                timeout_ms = limit.as_millis() as u64,
                "metric collector timed out"
            );
            None
        }
    }
}
