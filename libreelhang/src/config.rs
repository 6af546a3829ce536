//! Configuration management for Reelhang

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::identity::IdentityConfig;

/// Default collection endpoint, used when no config file exists.
pub const DEFAULT_ENDPOINT: &str = "https://ghibliapi.vercel.app/films/";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub identity: Option<IdentityConfig>,
    #[serde(default)]
    pub ui: UiDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub endpoint: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiDefaults {
    pub tick_rate_ms: u64,
}

impl Default for UiDefaults {
    fn default() -> Self {
        Self { tick_rate_ms: 100 }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing config file is not an error: the game runs with defaults
    /// so first launch needs no setup. A file that exists but fails to
    /// parse is reported.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default_config());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            catalog: CatalogConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
            },
            identity: None,
            ui: UiDefaults::default(),
        }
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("REELHANG_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("reelhang").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default_config();

        assert_eq!(config.catalog.endpoint, DEFAULT_ENDPOINT);
        assert!(config.identity.is_none());
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_load_from_path_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[catalog]
endpoint = "https://catalog.example/films/"

[ui]
tick_rate_ms = 250

[identity]
api_key = "key"
auth_domain = "example.firebaseapp.com"
project_id = "example-513bd"
storage_bucket = "example.appspot.com"
messaging_sender_id = "482475502624"
app_id = "1:482475502624:web:abc"
measurement_id = "G-XXXX"
"#
        )
        .unwrap();

        let config = Config::load_from_path(&file.path().to_path_buf()).unwrap();

        assert_eq!(config.catalog.endpoint, "https://catalog.example/films/");
        assert_eq!(config.ui.tick_rate_ms, 250);
        let identity = config.identity.unwrap();
        assert_eq!(identity.project_id, "example-513bd");
        assert_eq!(identity.measurement_id, Some("G-XXXX".to_string()));
    }

    #[test]
    fn test_load_from_path_minimal_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[catalog]
endpoint = "https://catalog.example/films/"
"#
        )
        .unwrap();

        let config = Config::load_from_path(&file.path().to_path_buf()).unwrap();

        assert!(config.identity.is_none());
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn test_load_from_path_malformed_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not valid toml [[[").unwrap();

        let result = Config::load_from_path(&file.path().to_path_buf());

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config"));
    }

    #[test]
    fn test_load_from_missing_path() {
        let path = PathBuf::from("/nonexistent/reelhang/config.toml");
        let result = Config::load_from_path(&path);

        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to read config file"));
    }
}
