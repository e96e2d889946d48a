//! Persistent CLI Configuration Loader
//!
//! Configuration is loaded from `~/.config/viva/config.toml` on Linux,
//! `~/Library/Application Support/viva/config.toml` on macOS and
//! `%APPDATA%\viva\config.toml` on Windows. Command-line flags override
//! anything set here.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

use viva_core::RotatorConfig;
use viva_providers::{DEFAULT_TIPS_ENDPOINT, NetworkConfig};

/// CLI Configuration structure loaded from TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliConfig {
    /// URL of the tips list resource.
    pub endpoint: Option<String>,
    /// HTTP timeout in seconds.
    pub timeout_seconds: Option<u64>,
    /// Seconds between automatic tip rotations.
    pub rotation_seconds: Option<u64>,
    /// Length of the fade between tips, in milliseconds.
    pub transition_millis: Option<u64>,
    /// Enable file logging by default.
    pub enable_logging: Option<bool>,
    /// Offline mode by default.
    pub offline: Option<bool>,
}

impl CliConfig {
    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("viva"))
    }

    /// Returns the full path to the config file.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Attempts to load configuration from the default config file location.
    /// Returns `CliConfig::default()` if the file doesn't exist or fails to parse.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            debug!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            debug!("No config file found at {:?}", path);
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|e| {
                warn!("Failed to parse config file {:?}: {}", path, e);
                Self::default()
            }),
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Saves the current configuration to the default config file location.
    pub fn save(&self) -> Result<PathBuf, std::io::Error> {
        let path = Self::config_path().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;

        std::fs::write(&path, content)?;
        debug!("Saved configuration to {:?}", path);
        Ok(path)
    }

    /// Configuration written by `viva init-config`.
    pub fn sample() -> Self {
        let defaults = RotatorConfig::default();
        CliConfig {
            endpoint: Some(DEFAULT_TIPS_ENDPOINT.to_string()),
            timeout_seconds: Some(NetworkConfig::default().timeout_seconds),
            rotation_seconds: Some(defaults.rotation_interval.as_secs()),
            transition_millis: Some(defaults.transition_delay.as_millis() as u64),
            enable_logging: Some(false),
            offline: Some(false),
        }
    }

    /// Network settings with file values applied over the defaults.
    pub fn network(&self) -> NetworkConfig {
        let mut network = NetworkConfig::default();
        if let Some(endpoint) = &self.endpoint {
            network.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            network.timeout_seconds = timeout;
        }
        network
    }

    /// Rotator settings with file values applied over `base`.
    pub fn rotator(&self, base: RotatorConfig) -> RotatorConfig {
        let mut rotator = base;
        if let Some(secs) = self.rotation_seconds {
            rotator.rotation_interval = Duration::from_secs(secs);
        }
        if let Some(ms) = self.transition_millis {
            rotator.transition_delay = Duration::from_millis(ms);
        }
        rotator
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CliConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.offline.is_none());
        assert_eq!(config.network(), NetworkConfig::default());
        assert_eq!(config.rotator(RotatorConfig::default()), RotatorConfig::default());
    }

    #[test]
    fn test_config_serialization() {
        let config = CliConfig {
            endpoint: Some("https://viva.example/api/tips/".to_string()),
            rotation_seconds: Some(45),
            ..Default::default()
        };
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("rotation-seconds = 45"));
        assert!(toml_str.contains("https://viva.example/api/tips/"));
        assert_eq!(CliConfig::parse(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let config = CliConfig::parse(
            r#"
            endpoint = "http://10.0.0.5:8000/api/tips/"
            timeout-seconds = 3
            rotation-seconds = 60
            transition-millis = 150
            "#,
        )
        .unwrap();

        let network = config.network();
        assert_eq!(network.endpoint, "http://10.0.0.5:8000/api/tips/");
        assert_eq!(network.timeout_seconds, 3);

        let rotator = config.rotator(RotatorConfig::default());
        assert_eq!(rotator.rotation_interval, Duration::from_secs(60));
        assert_eq!(rotator.transition_delay, Duration::from_millis(150));
    }

    #[test]
    fn test_sample_is_valid() {
        let sample = CliConfig::sample();
        assert!(sample.network().validate().is_ok());
        assert!(sample.rotator(RotatorConfig::default()).validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_types() {
        assert!(CliConfig::parse("rotation-seconds = \"soon\"").is_err());
    }
}
