use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::Log;
use crate::errors::ConfigError;

/// Environment variable naming a TOML file to load a `SnapshotConfig` from.
pub const CONFIG_PATH_ENV: &str = "SLIPPI_GAMESTATE_CONFIG";

/// Knobs for `GameState::finalize_frame`.
///
/// Any field left out of a config file keeps its default.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SnapshotConfig {
    /// Airborne players below this height count as off stage.
    pub off_stage_y_threshold: f32,

    /// Remove exploded/charging Samus articles from `projectiles`.
    pub drop_spent_projectiles: bool,

    /// Force `iasa` off for anything that isn't an A attack.
    pub clear_special_iasa: bool,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            off_stage_y_threshold: -6.0,
            drop_spent_projectiles: true,
            clear_special_iasa: true,
        }
    }
}

impl SnapshotConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Reads and parses the TOML file at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        tracing::info!(target: Log::Config, ?path, "Loading snapshot config");

        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Loads from the file named by `SLIPPI_GAMESTATE_CONFIG`, falling back to defaults if the
    /// variable isn't set or the file can't be used.
    pub fn from_env() -> Self {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => config,

            Err(error) => {
                tracing::warn!(target: Log::Config, ?error, ?path, "Unable to load snapshot config, using defaults");
                Self::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = SnapshotConfig::from_toml_str("drop_spent_projectiles = false").expect("valid toml");

        assert!(!config.drop_spent_projectiles);
        assert_eq!(config.off_stage_y_threshold, -6.0);
        assert!(config.clear_special_iasa);
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = SnapshotConfig::from_toml_str("").expect("empty toml is valid");
        assert_eq!(config, SnapshotConfig::default());
    }

    #[test]
    fn test_bad_type_is_parse_error() {
        let result = SnapshotConfig::from_toml_str("off_stage_y_threshold = \"low\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = SnapshotConfig::load("/definitely/not/a/real/snapshot.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
