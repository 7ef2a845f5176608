// Thermal-zone sensor reads (sysfs-style millidegree files)

use std::path::Path;

/// Read a millidegree integer from a thermal-zone file. None when the file
/// is missing, unreadable, or not an integer.
pub(super) fn read_thermal_millidegrees(path: &Path) -> Option<i64> {
    let content = std::fs::read_to_string(path).ok()?;
    content.trim().parse::<i64>().ok()
}
