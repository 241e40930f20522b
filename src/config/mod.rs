//! Configuration management for authprobe

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Endpoint of the browser-automation scan service
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanner_url: Option<String>,

    /// Gemini API key for AI enhancement
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gemini_api_key: Option<String>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Page scan timeout in seconds
    #[serde(default = "default_scan_timeout")]
    pub scan_timeout_secs: u64,
}

fn default_scan_timeout() -> u64 {
    60
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            format: None,
            scan_timeout_secs: default_scan_timeout(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".authprobe").join("config.yaml"))
    }

    /// Resolve the config path from an optional override
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, honoring an optional path override
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration, honoring an optional path override
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_yaml::to_string(self)
            .map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // Config holds an API key, so restrict to owner on Unix systems
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Scan service endpoint, preferring the environment over the config file
    pub fn resolve_scanner_url(&self) -> Result<String> {
        if let Ok(url) = std::env::var("AUTHPROBE_SCANNER_URL") {
            if !url.is_empty() {
                return Ok(url);
            }
        }
        self.scanner_url
            .clone()
            .ok_or_else(|| ConfigError::MissingScannerUrl.into())
    }

    /// Gemini API key, preferring the environment over the config file
    pub fn resolve_gemini_api_key(&self) -> Option<String> {
        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.is_empty() {
                return Some(key);
            }
        }
        self.gemini_api_key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        let config = Config {
            scanner_url: Some("http://localhost:8700".to_string()),
            gemini_api_key: Some("test-key".to_string()),
            preferences: Preferences {
                format: Some("json".to_string()),
                scan_timeout_secs: 30,
            },
        };

        config.save_to(path.clone()).unwrap();
        let loaded = Config::load_from(path).unwrap();

        assert_eq!(loaded.scanner_url.as_deref(), Some("http://localhost:8700"));
        assert_eq!(loaded.gemini_api_key.as_deref(), Some("test-key"));
        assert_eq!(loaded.preferences.scan_timeout_secs, 30);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = Config::load_from(dir.path().join("nope.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_preferences_default_timeout() {
        let prefs = Preferences::default();
        assert_eq!(prefs.scan_timeout_secs, 60);
    }

    #[cfg(unix)]
    #[test]
    fn test_save_restricts_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");

        Config::default().save_to(path.clone()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn test_resolve_path_override() {
        let path = Config::resolve_path(Some("/tmp/custom.yaml")).unwrap();
        assert_eq!(path, PathBuf::from("/tmp/custom.yaml"));
    }
}
