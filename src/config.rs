use std::path::Path;

use crate::error::ConfigError;
use crate::export::ExportConfig;
use crate::game::{exact_sqrt, GenerationConfig};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: GenerationConfig,
    pub export: ExportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board: GenerationConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.size == 0 {
            return Err(ConfigError::Validation("board.size must be > 0".into()));
        }
        if exact_sqrt(self.board.size).is_none() {
            return Err(ConfigError::Validation(
                "board.size must be a perfect square".into(),
            ));
        }
        if self.board.greens_per_player == 0 {
            return Err(ConfigError::Validation(
                "board.greens_per_player must be > 0".into(),
            ));
        }
        if self.board.total_demand() > self.board.size {
            return Err(ConfigError::Validation(
                "board.size is too small for the configured per-player draws".into(),
            ));
        }
        if self.export.player_one_file.is_empty() || self.export.player_two_file.is_empty() {
            return Err(ConfigError::Validation(
                "export file names must not be empty".into(),
            ));
        }
        if self.export.player_one_file == self.export.player_two_file {
            return Err(ConfigError::Validation(
                "export file names must differ".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
