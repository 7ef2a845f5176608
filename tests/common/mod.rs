// Shared test helpers

use solarstation::metrics_repo::MetricsRepo;
use solarstation::snapshot::SnapshotAssembler;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::time::Duration;

pub const SAMPLE_PROFILE: &str = r#"
# pi-solar hardware profile
pi-solar-charger="Victron BlueSolar"
pi-solar-chrate="MPPT 75/10"
pi-solar-pvtype="60W=PolyX"
pi-solar-pvrate="60W"
pi-solar-battype="AGM Deep Cycle"
pi-solar-batrate="12V 44Ah"
"#;

pub fn write_profile(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("pi-solar.conf");
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn write_thermal(dir: &Path, millidegrees: &str) -> PathBuf {
    let path = dir.join("temp");
    std::fs::write(&path, millidegrees).unwrap();
    path
}

/// Assembler over live metrics with fixture paths. Generous timeout so
/// spawn_blocking scheduling jitter cannot fail a test.
pub fn test_assembler(profile_path: &Path, thermal_zone: &Path) -> SnapshotAssembler {
    SnapshotAssembler::new(
        Arc::new(MetricsRepo::new(thermal_zone)),
        profile_path,
        "127.0.0.1".to_string(),
        Duration::from_millis(2000),
    )
}
