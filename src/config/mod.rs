use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::errors::PromptError;

pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
const MAX_DEBOUNCE_MS: u64 = 60_000;

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the prompt history and the working draft
    pub data_dir: PathBuf,

    /// Quiet period before a burst of edits is re-synthesized in watch mode
    pub debounce_ms: u64,

    /// Directory exports are written to when none is given
    pub export_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir()
                .map(|dir| dir.join("promptgen"))
                .unwrap_or_else(|| PathBuf::from("./data")),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            export_dir: None,
        }
    }
}

/// Partial configuration as read from a file; absent keys keep the value
/// from the layer below.
#[derive(Clone, Debug, Default, Deserialize)]
struct FileConfig {
    data_dir: Option<PathBuf>,
    debounce_ms: Option<u64>,
    export_dir: Option<PathBuf>,
}

impl Config {
    /// Initialize configuration from various sources
    pub async fn init(data_dir_override: Option<&Path>) -> Result<Self> {
        debug!("Initializing configuration");

        let mut config = Self::default();

        // Try to load from configuration files
        if let Some(file_config) = Self::load_from_file().await? {
            config.merge_with(file_config);
        }

        // Environment wins over files
        config.load_from_env();

        if let Some(dir) = data_dir_override {
            config.data_dir = dir.to_path_buf();
        }

        config.validate()?;

        // Ensure data directory exists
        if !config.data_dir.exists() {
            std::fs::create_dir_all(&config.data_dir)?;
        }

        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(&mut self) {
        if let Ok(data_dir) = std::env::var("PROMPTGEN_DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(debounce) = std::env::var("PROMPTGEN_DEBOUNCE_MS") {
            match debounce.parse() {
                Ok(ms) => self.debounce_ms = ms,
                Err(_) => debug!("Ignoring unparseable PROMPTGEN_DEBOUNCE_MS={}", debounce),
            }
        }

        if let Ok(export_dir) = std::env::var("PROMPTGEN_EXPORT_DIR") {
            self.export_dir = Some(PathBuf::from(export_dir));
        }
    }

    /// Candidate configuration files, highest priority first
    pub fn config_paths() -> Vec<PathBuf> {
        let mut config_paths = vec![
            PathBuf::from("./.promptgen.json"),
            PathBuf::from("./promptgen.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            config_paths.push(config_dir.join("promptgen").join("promptgen.json"));
        }

        config_paths
    }

    /// Load the first configuration file that exists
    async fn load_from_file() -> Result<Option<FileConfig>> {
        for path in Self::config_paths() {
            if path.exists() {
                debug!("Loading configuration from: {}", path.display());
                let content = tokio::fs::read_to_string(&path).await?;
                let config: FileConfig = serde_json::from_str(&content).map_err(|e| {
                    PromptError::Config(format!("{}: {}", path.display(), e))
                })?;
                return Ok(Some(config));
            }
        }

        Ok(None)
    }

    fn merge_with(&mut self, other: FileConfig) {
        if let Some(data_dir) = other.data_dir {
            self.data_dir = data_dir;
        }
        if let Some(debounce_ms) = other.debounce_ms {
            self.debounce_ms = debounce_ms;
        }
        if other.export_dir.is_some() {
            self.export_dir = other.export_dir;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), PromptError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(PromptError::Config("data_dir must not be empty".to_string()));
        }

        if self.debounce_ms == 0 || self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(PromptError::Config(format!(
                "debounce_ms must be between 1 and {}",
                MAX_DEBOUNCE_MS
            )));
        }

        Ok(())
    }

    /// Where exports go when the command gives no directory
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.debounce_ms, DEFAULT_DEBOUNCE_MS);
        assert!(config.validate().is_ok());
        assert_eq!(config.export_dir(), PathBuf::from("."));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        config.debounce_ms = 0;
        assert!(config.validate().is_err());

        config.debounce_ms = MAX_DEBOUNCE_MS + 1;
        assert!(config.validate().is_err());

        config.debounce_ms = 250;
        config.data_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_layer_only_overrides_present_keys() {
        let mut config = Config::default();
        let original_dir = config.data_dir.clone();
        let file: FileConfig = serde_json::from_str(r#"{"debounce_ms": 120}"#).unwrap();

        config.merge_with(file);
        assert_eq!(config.debounce_ms, 120);
        assert_eq!(config.data_dir, original_dir);
    }

    #[test]
    fn test_config_paths_order() {
        let paths = Config::config_paths();
        assert_eq!(paths[0], PathBuf::from("./.promptgen.json"));
        assert_eq!(paths[1], PathBuf::from("./promptgen.json"));
    }
}
