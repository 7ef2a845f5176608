// Station health snapshot models

use serde::{Deserialize, Serialize};

use crate::device_profile::DeviceProfile;

/// System uptime decomposed for display. Source resolution is whole
/// seconds; fractional uptime is discarded at the read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UptimeBreakdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl UptimeBreakdown {
    /// Floor-division with remainder at each step: secs -> mins -> hours -> days.
    pub fn from_secs(total: u64) -> Self {
        let seconds = total % 60;
        let total = total / 60;
        let minutes = total % 60;
        let total = total / 60;
        let hours = total % 24;
        let days = total / 24;
        Self {
            days,
            hours,
            minutes,
            seconds,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryUsage {
    pub used_mb: u64,
    pub total_mb: u64,
}

/// Root-filesystem usage, human-formatted (the presentation contract for
/// disk space is strings, not byte counts).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskUsage {
    pub used: String,
    pub total: String,
}

/// One render cycle's view of the station: built fresh per request, never
/// cached or mutated. Every metric field is independently optional; a
/// missing one never blocks the others.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationSnapshot {
    pub uptime: Option<UptimeBreakdown>,
    /// Server bind address; empty when unavailable.
    pub ip_address: String,
    pub cpu_load_percent: Option<f64>,
    pub memory: Option<MemoryUsage>,
    pub disk: Option<DiskUsage>,
    pub cpu_temperature_c: Option<f64>,
    pub device_config: DeviceProfile,
}
