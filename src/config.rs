use crate::error::{EmpdeskError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File name picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "empdesk.yml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Mongodb,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default)]
    pub backend: StoreBackend,

    #[serde(default = "default_uri")]
    pub uri: String,

    #[serde(default = "default_db_name")]
    pub name: String,

    /// Upper bound for every single database call, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_uri() -> String {
    "mongodb://localhost:27017".to_string()
}

fn default_db_name() -> String {
    "empdesk".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            backend: StoreBackend::default(),
            uri: default_uri(),
            name: default_db_name(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl DatabaseSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Optional path of a daily-rolling JSON log file.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl AppConfig {
    /// Reads configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] in
    /// `working_dir` if it exists. Falls back to defaults otherwise.
    pub fn load(path: Option<&Path>, working_dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let candidate = working_dir.join(DEFAULT_CONFIG_FILE);
                if candidate.exists() {
                    Self::from_file(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(EmpdeskError::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        let config: AppConfig = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.database.timeout_ms == 0 {
            return Err(EmpdeskError::Config(
                "database.timeout_ms must be greater than zero".to_string(),
            ));
        }
        if self.database.backend == StoreBackend::Mongodb && self.database.uri.trim().is_empty() {
            return Err(EmpdeskError::Config(
                "database.uri is required for the mongodb backend".to_string(),
            ));
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.database.backend, StoreBackend::Mongodb);
        assert_eq!(config.database.timeout(), Duration::from_secs(5));
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.database.name, "empdesk");
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_FILE),
            "server:\n  port: 8080\ndatabase:\n  backend: memory\n",
        )
        .unwrap();

        let config = AppConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.backend, StoreBackend::Memory);
        assert_eq!(config.database.timeout_ms, 5000);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let result = AppConfig::load(Some(&dir.path().join("nope.yml")), dir.path());
        assert!(matches!(result, Err(EmpdeskError::Config(_))));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = AppConfig::default();
        config.database.timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yml");
        let mut config = AppConfig::default();
        config.database.name = "hr".to_string();
        config.save(&path).unwrap();

        let loaded = AppConfig::load(Some(&path), dir.path()).unwrap();
        assert_eq!(loaded.database.name, "hr");
    }
}
