use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub station: StationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationConfig {
    /// PV device profile file (line-oriented KEY=VALUE). May be absent on
    /// hosts without a configured PV system; the dashboard renders anyway.
    pub device_profile: String,
    #[serde(default = "default_thermal_zone")]
    pub thermal_zone: String,
    /// Per-collector guard against a wedged system probe.
    #[serde(default = "default_collector_timeout_ms")]
    pub collector_timeout_ms: u64,
}

fn default_thermal_zone() -> String {
    "/sys/class/thermal/thermal_zone0/temp".into()
}

fn default_collector_timeout_ms() -> u64 {
    250
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.station.device_profile.is_empty(),
            "station.device_profile must be non-empty"
        );
        anyhow::ensure!(
            !self.station.thermal_zone.is_empty(),
            "station.thermal_zone must be non-empty"
        );
        anyhow::ensure!(
            self.station.collector_timeout_ms > 0,
            "station.collector_timeout_ms must be > 0, got {}",
            self.station.collector_timeout_ms
        );
        Ok(())
    }
}
