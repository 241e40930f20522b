//! Error types for the authprobe CLI

use thiserror::Error;

/// Result type alias for authprobe operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Faults from the page-scanning collaborator.
///
/// These never reach the caller as errors: the pipeline converts them into a
/// `method = "error"` response, which is not cached.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Scan request timed out")]
    Timeout,

    #[error("Failed to connect to scan service")]
    Unreachable,

    #[error("Scan service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid scan response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ScanError::Timeout
        } else if err.is_connect() {
            ScanError::Unreachable
        } else {
            ScanError::InvalidResponse(err.to_string())
        }
    }
}

/// Faults from the AI-enhancement collaborator.
///
/// The Enhancer adapter absorbs these into a degraded-but-successful
/// `static_only` outcome; they never cross the adapter boundary.
#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("Model request timed out")]
    Timeout,

    #[error("Failed to connect to model API")]
    Unreachable,

    #[error("Model API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid model response: {0}")]
    InvalidResponse(String),

    #[error("API key not configured. Run `authprobe init` or set GEMINI_API_KEY.")]
    MissingApiKey,
}

impl From<reqwest::Error> for EnhanceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            EnhanceError::Timeout
        } else if err.is_connect() {
            EnhanceError::Unreachable
        } else {
            EnhanceError::InvalidResponse(err.to_string())
        }
    }
}

/// Cache storage errors
///
/// Absorbed by `AnalysisCache`; a failing cache degrades to always-miss
/// rather than failing the analysis.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Cache I/O error: {0}")]
    Io(String),

    #[error("Could not determine cache directory")]
    NoCacheDir,
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found. Run `authprobe init` to set up.")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error(
        "Scan service endpoint not configured. Run `authprobe init` or set AUTHPROBE_SCANNER_URL."
    )]
    MissingScannerUrl,
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_error_timeout_message() {
        let err = ScanError::Timeout;
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_scan_error_status() {
        let err = ScanError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("502"));
        assert!(msg.contains("bad gateway"));
    }

    #[test]
    fn test_enhance_error_missing_key_mentions_init() {
        let err = EnhanceError::MissingApiKey;
        assert!(err.to_string().contains("authprobe init"));
    }

    #[test]
    fn test_enhance_error_status() {
        let err = EnhanceError::Status {
            status: 429,
            body: "quota exceeded".to_string(),
        };
        assert!(err.to_string().contains("429"));
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound;
        assert!(err.to_string().contains("authprobe init"));
    }

    #[test]
    fn test_config_error_missing_scanner() {
        let err = ConfigError::MissingScannerUrl;
        assert!(err.to_string().contains("AUTHPROBE_SCANNER_URL"));
    }

    #[test]
    fn test_error_from_config_error() {
        let cfg_err = ConfigError::NotFound;
        let err: Error = cfg_err.into();

        match err {
            Error::Config(ConfigError::NotFound) => (),
            _ => panic!("Expected Error::Config(ConfigError::NotFound)"),
        }
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }

    #[test]
    fn test_error_other() {
        let err = Error::Other("Custom error".to_string());
        assert!(err.to_string().contains("Custom error"));
    }
}
