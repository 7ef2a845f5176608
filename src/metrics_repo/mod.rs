// Station health metrics via sysinfo

mod linux;

use crate::models::{DiskUsage, MemoryUsage, UptimeBreakdown};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use sysinfo::{Disks, System};
use tracing::instrument;

/// Why a single metric read produced no value. Never fatal: the assembler
/// degrades any of these to an absent snapshot field.
#[derive(Debug, thiserror::Error)]
pub enum MetricError {
    #[error("metric source unavailable: {0}")]
    Unavailable(String),
    #[error("sysinfo lock poisoned: {0}")]
    LockPoisoned(String),
    #[error("collector task join: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Point-in-time host probes. Each operation is independent; a failed read
/// yields an error for that metric only and is retried naturally on the
/// next render. The thermal-zone path is injected so tests can point the
/// repo at fixture files instead of real sysfs.
pub struct MetricsRepo {
    sys: Arc<std::sync::Mutex<System>>,
    disks: Arc<std::sync::Mutex<Disks>>,
    last_cpu_refresh: Arc<std::sync::Mutex<Option<(Instant, f64)>>>,
    thermal_zone: PathBuf,
}

impl MetricsRepo {
    pub fn new(thermal_zone: impl Into<PathBuf>) -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        let disks = Disks::new_with_refreshed_list();
        Self {
            sys: Arc::new(std::sync::Mutex::new(sys)),
            disks: Arc::new(std::sync::Mutex::new(disks)),
            last_cpu_refresh: Arc::new(std::sync::Mutex::new(None)),
            thermal_zone: thermal_zone.into(),
        }
    }

    /// Whole-second system uptime, decomposed for display.
    #[instrument(skip(self), fields(repo = "metrics", operation = "uptime"))]
    pub async fn uptime(&self) -> Result<UptimeBreakdown, MetricError> {
        tokio::task::spawn_blocking(|| Ok(UptimeBreakdown::from_secs(System::uptime()))).await?
    }

    /// Aggregate CPU utilization in [0, 100]. Usage deltas need a baseline,
    /// so samples closer together than sysinfo's minimum update interval
    /// return the previous reading instead of blocking.
    #[instrument(skip(self), fields(repo = "metrics", operation = "cpu_load"))]
    pub async fn cpu_load(&self) -> Result<f64, MetricError> {
        let sys = self.sys.clone();
        let last_cpu_refresh = self.last_cpu_refresh.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| MetricError::LockPoisoned(e.to_string()))?;
            let mut guard = last_cpu_refresh
                .lock()
                .map_err(|e| MetricError::LockPoisoned(e.to_string()))?;

            let now = Instant::now();
            let usage = match *guard {
                Some((prev_ts, prev_usage)) => {
                    if now.duration_since(prev_ts) >= sysinfo::MINIMUM_CPU_UPDATE_INTERVAL {
                        sys.refresh_cpu_all();
                        let new_usage = sys.global_cpu_usage() as f64;
                        *guard = Some((now, new_usage));
                        new_usage
                    } else {
                        prev_usage
                    }
                }
                None => {
                    // First call establishes the measurement baseline.
                    sys.refresh_cpu_all();
                    *guard = Some((now, 0.0));
                    0.0
                }
            };
            Ok(usage.clamp(0.0, 100.0))
        })
        .await?
    }

    /// Used and total memory, rounded to the nearest MB.
    #[instrument(skip(self), fields(repo = "metrics", operation = "memory"))]
    pub async fn memory(&self) -> Result<MemoryUsage, MetricError> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| MetricError::LockPoisoned(e.to_string()))?;
            sys.refresh_memory();

            let total = sys.total_memory();
            if total == 0 {
                return Err(MetricError::Unavailable("memory counters".into()));
            }
            let used = total.saturating_sub(sys.available_memory());
            Ok(MemoryUsage {
                used_mb: to_mb(used),
                total_mb: to_mb(total),
            })
        })
        .await?
    }

    /// Root-filesystem usage, identified by mount point rather than device
    /// name (root devices differ across hosts: /dev/root, /dev/mmcblk0p2,
    /// /dev/sda1, ...).
    #[instrument(skip(self), fields(repo = "metrics", operation = "disk"))]
    pub async fn disk(&self) -> Result<DiskUsage, MetricError> {
        let disks = self.disks.clone();
        tokio::task::spawn_blocking(move || {
            let mut disks_guard = disks
                .lock()
                .map_err(|e| MetricError::LockPoisoned(e.to_string()))?;
            disks_guard.refresh(false);
            let root = disks_guard
                .list()
                .iter()
                .find(|d| d.mount_point() == Path::new("/"))
                .ok_or_else(|| MetricError::Unavailable("root filesystem mount".into()))?;
            let total = root.total_space();
            let used = total.saturating_sub(root.available_space());
            Ok(DiskUsage {
                used: format_size(used),
                total: format_size(total),
            })
        })
        .await?
    }

    /// CPU temperature in Celsius with two-decimal precision, read as
    /// millidegrees from the configured thermal-zone file. Hosts without a
    /// thermal zone report unavailable.
    #[instrument(skip(self), fields(repo = "metrics", operation = "temperature"))]
    pub async fn temperature(&self) -> Result<f64, MetricError> {
        let path = self.thermal_zone.clone();
        tokio::task::spawn_blocking(move || {
            let milli = linux::read_thermal_millidegrees(&path).ok_or_else(|| {
                MetricError::Unavailable(format!("thermal zone {}", path.display()))
            })?;
            Ok((milli as f64 / 10.0).round() / 100.0)
        })
        .await?
    }
}

fn to_mb(bytes: u64) -> u64 {
    ((bytes as f64) / (1024.0 * 1024.0)).round() as u64
}

/// Human-readable byte count in df -h style: one decimal, 1024-based units.
pub fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes}B")
    } else {
        format!("{value:.1}{}", UNITS[unit])
    }
}
