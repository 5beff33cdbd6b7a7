use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub stats: StatsConfig,
    pub refresh: RefreshConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    /// Flat directory the collector writes `*.json` snapshot files into.
    pub dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    /// How often the background worker re-collects and reloads the catalog.
    pub interval_secs: u64,
    /// Shell command that refreshes the snapshot directory; omit to only
    /// reload whatever files are already there.
    #[serde(default)]
    pub collect_command: Option<String>,
    /// Deadline for the collect command before the refresh tick is skipped.
    #[serde(default = "default_collect_timeout_secs")]
    pub collect_timeout_secs: u64,
}

fn default_collect_timeout_secs() -> u64 {
    120
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
        anyhow::ensure!(!self.stats.dir.is_empty(), "stats.dir must be non-empty");
        anyhow::ensure!(
            self.refresh.interval_secs > 0,
            "refresh.interval_secs must be > 0, got {}",
            self.refresh.interval_secs
        );
        anyhow::ensure!(
            self.refresh.collect_timeout_secs > 0,
            "refresh.collect_timeout_secs must be > 0, got {}",
            self.refresh.collect_timeout_secs
        );
        if let Some(cmd) = &self.refresh.collect_command {
            anyhow::ensure!(
                !cmd.trim().is_empty(),
                "refresh.collect_command must be non-empty when set"
            );
        }
        Ok(())
    }
}
