//! Configuration management for the MangaMad host.
//!
//! Handles loading, saving, and validating configuration from
//! platform-specific config directories.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application name used for config directory.
const APP_NAME: &str = "MangaMad";

/// Default config filename.
const CONFIG_FILENAME: &str = "config.toml";

/// Default origin of the MangaMad site.
pub const DEFAULT_BASE_URL: &str = "https://mangamad.com";

/// Browser user agent sent with every request.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Log levels accepted by `logging.level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site and HTTP client settings.
    pub source: SourceConfig,

    /// Log output settings.
    pub logging: LoggingConfig,
}

/// Site and HTTP client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Origin all request paths are joined onto.
    pub base_url: String,

    /// User agent for the HTTP client.
    pub user_agent: String,

    /// Request timeout in seconds.
    pub timeout_sec: u64,

    /// Enable source debug logging.
    pub debug: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_sec: 30,
            debug: false,
        }
    }
}

/// Log output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Config {
    /// Returns the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Returns the full path to the config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        Ok(Self::config_dir()?.join(CONFIG_FILENAME))
    }

    /// Loads configuration from a specific path.
    ///
    /// A missing file yields the defaults; nothing is written.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        Ok(config)
    }

    /// Saves configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match url::Url::parse(&self.source.base_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") && url.has_host() => {
                if url.path() != "/" {
                    return Err(ConfigError::InvalidValue {
                        key: "source.base_url".to_string(),
                        message: format!("'{}' must be a site root", self.source.base_url),
                    });
                }
            }
            _ => {
                return Err(ConfigError::InvalidValue {
                    key: "source.base_url".to_string(),
                    message: format!("'{}' is not an http(s) URL", self.source.base_url),
                });
            }
        }

        if self.source.timeout_sec == 0 {
            return Err(ConfigError::InvalidValue {
                key: "source.timeout_sec".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            return Err(ConfigError::InvalidValue {
                key: "logging.level".to_string(),
                message: format!("expected one of {}", LOG_LEVELS.join(", ")),
            });
        }

        Ok(())
    }

    /// Returns the log filter directive to use when `RUST_LOG` is unset.
    pub fn log_directive(&self, verbose: bool) -> &str {
        if verbose || self.source.debug {
            "debug"
        } else {
            &self.logging.level
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.source.base_url, "https://mangamad.com");
        assert_eq!(config.source.timeout_sec, 30);
        assert!(!config.source.debug);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_round_trip() {
        let mut config = Config::default();
        config.source.base_url = "https://mirror.example.org".to_string();
        let file = NamedTempFile::new().unwrap();

        config.save_to(file.path()).unwrap();

        let loaded = Config::load_from(file.path()).unwrap();
        assert_eq!(loaded.source.base_url, "https://mirror.example.org");
        assert_eq!(loaded.source.user_agent, config.source.user_agent);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.source.base_url, DEFAULT_BASE_URL);
        assert!(!path.exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "[source]\ndebug = true\n").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert!(config.source.debug);
        assert_eq!(config.source.timeout_sec, 30);
        assert_eq!(config.log_directive(false), "debug");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.source.base_url = "ftp://mangamad.com".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.source.base_url = "https://mirror.example.org/mm/".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.source.base_url = "https://mirror.example.org/".to_string();
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.source.timeout_sec = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_log_directive() {
        let config = Config::default();
        assert_eq!(config.log_directive(false), "info");
        assert_eq!(config.log_directive(true), "debug");
    }
}
