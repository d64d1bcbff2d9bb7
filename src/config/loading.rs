use std::{fs, path::Path};

use tracing::debug;

use super::{Config, ConfigPaths};
use crate::{NowPlayingError, Result};

impl Config {
    /// Loads the configuration from a TOML file.
    ///
    /// A missing file is not an error: defaults are returned instead.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration file exists but cannot be read
    /// - The TOML content is invalid
    /// - The configuration fails validation
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| NowPlayingError::IoError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| NowPlayingError::toml_parse(e, Some(path)))?;
        config.validate()?;

        Ok(config)
    }

    /// Loads the configuration from the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or
    /// [`Config::load`] fails.
    pub fn load_default() -> Result<Config> {
        let path = ConfigPaths::main_config()?;
        Self::load(&path)
    }

    /// Parses and validates a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or validation fails.
    pub fn from_toml(content: &str) -> Result<Config> {
        let config: Config =
            toml::from_str(content).map_err(|e| NowPlayingError::toml_parse(e, None))?;
        config.validate()?;

        Ok(config)
    }

    /// Checks values serde cannot check.
    ///
    /// # Errors
    ///
    /// Returns [`NowPlayingError::InvalidConfigField`] for an empty ignore
    /// pattern, which would match every player.
    pub fn validate(&self) -> Result<()> {
        if self
            .media
            .ignored_players
            .iter()
            .any(|pattern| pattern.trim().is_empty())
        {
            return Err(NowPlayingError::InvalidConfigField {
                field: "ignored_players".to_string(),
                component: "media".to_string(),
                reason: "patterns must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the JSON schema of the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the schema cannot be serialized.
    pub fn schema_json() -> Result<String> {
        let schema = schemars::schema_for!(Config);
        serde_json::to_string_pretty(&schema).map_err(|e| NowPlayingError::ConfigValidation {
            component: "schema".to_string(),
            details: e.to_string(),
        })
    }
}
