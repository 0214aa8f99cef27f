use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub procfs: ProcfsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// Engine settings; passed to `Procfs::new` instead of living in globals.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcfsConfig {
    /// Process-information root every kernel source is resolved against.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Overrides the platform's `_SC_CLK_TCK`.
    #[serde(default)]
    pub clock_ticks_per_sec: Option<u64>,
    /// Emit debug events for degraded fields and early-terminated enumerations.
    #[serde(default)]
    pub debug: bool,
}

fn default_root() -> PathBuf {
    PathBuf::from("/proc")
}

impl Default for ProcfsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            clock_ticks_per_sec: None,
            debug: false,
        }
    }
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
        anyhow::ensure!(!self.server.host.is_empty(), "server.host must be non-empty");
        anyhow::ensure!(
            !self.procfs.root.as_os_str().is_empty(),
            "procfs.root must be non-empty"
        );
        if let Some(hz) = self.procfs.clock_ticks_per_sec {
            anyhow::ensure!(hz > 0, "procfs.clock_ticks_per_sec must be > 0, got {}", hz);
        }
        Ok(())
    }
}
