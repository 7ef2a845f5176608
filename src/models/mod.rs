// Domain models

mod station;

pub use station::{DiskUsage, MemoryUsage, StationSnapshot, UptimeBreakdown};
