//! Runtime configuration.
//!
//! Defaults are usable as-is. An optional JSON file named by
//! `DEEP_SPACE_EYE_CONFIG` overrides them, and a few environment variables
//! override the file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable naming the JSON configuration file.
pub const CONFIG_PATH_ENV: &str = "DEEP_SPACE_EYE_CONFIG";

/// Environment variables checked (in order) for the text-generation API key.
pub const API_KEY_ENVS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

/// Environment variable overriding the text-generation model.
pub const MODEL_ENV: &str = "GEMINI_MODEL";

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Application configuration.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    /// API key for the text-generation service. Enrichment degrades to the
    /// fallback text when absent.
    pub api_key: Option<String>,
    /// Text-generation model name.
    pub model: String,
    /// Sampling temperature for enrichment requests.
    pub temperature: f32,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Number of decorative background stars.
    pub star_count: usize,
    /// Seed for star placement and orbital phases. Random when unset.
    pub seed: Option<u64>,
    /// Font file with CJK glyphs. Common system locations are tried when unset.
    pub cjk_font_path: Option<PathBuf>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-3-flash-preview".to_string(),
            temperature: 0.7,
            request_timeout_secs: 30,
            star_count: 2000,
            seed: None,
            cjk_font_path: None,
        }
    }
}

impl ExplorerConfig {
    /// Load from the file named by [`CONFIG_PATH_ENV`] (if any), then apply
    /// environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Parse a JSON configuration file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply overrides from a variable lookup. Empty values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = API_KEY_ENVS.iter().find_map(|k| non_empty(k)) {
            self.api_key = Some(key);
        }
        if let Some(model) = non_empty(MODEL_ENV) {
            self.model = model;
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ExplorerConfig::default();
        assert!(config.api_key.is_none());
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "star_count": 10, "seed": 7 }}"#).unwrap();

        let config = ExplorerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.star_count, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.temperature, 0.7);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = ExplorerConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ExplorerConfig::from_file(Path::new("/nonexistent/explorer.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ExplorerConfig::default();
        config.apply_env(|key| match key {
            "API_KEY" => Some("secret".to_string()),
            "GEMINI_MODEL" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.model, "gemini-3-flash-preview");
    }

    #[test]
    fn test_primary_api_key_env_wins() {
        let mut config = ExplorerConfig::default();
        config.apply_env(|key| match key {
            "GEMINI_API_KEY" => Some("primary".to_string()),
            "API_KEY" => Some("secondary".to_string()),
            _ => None,
        });
        assert_eq!(config.api_key.as_deref(), Some("primary"));
    }
}
