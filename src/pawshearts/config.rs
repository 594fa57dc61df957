use crate::error::Result;
use crate::identity::DEFAULT_AVATAR_URL;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";

/// Configuration for pawshearts, stored in `<config dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PawsConfig {
    /// Catalog file to seed sessions from, instead of the built-in pets
    #[serde(default)]
    pub catalog: Option<PathBuf>,

    /// Profile image given to mocked users
    #[serde(default = "default_avatar_url")]
    pub avatar_url: String,

    /// Force colored output on or off; detected from the terminal when absent
    #[serde(default)]
    pub color: Option<bool>,
}

fn default_avatar_url() -> String {
    DEFAULT_AVATAR_URL.to_string()
}

impl Default for PawsConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            avatar_url: default_avatar_url(),
            color: None,
        }
    }
}

impl PawsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: PawsConfig = serde_json::from_str(&content)?;

        // Relative catalog paths are relative to the config file
        if let Some(catalog) = config.catalog.take() {
            config.catalog = Some(if catalog.is_relative() {
                config_dir.as_ref().join(catalog)
            } else {
                catalog
            });
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PawsConfig::default();
        assert_eq!(config.catalog, None);
        assert_eq!(config.avatar_url, DEFAULT_AVATAR_URL);
        assert_eq!(config.color, None);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = PawsConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, PawsConfig::default());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), r#"{"color": false}"#).unwrap();

        let config = PawsConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.color, Some(false));
        assert_eq!(config.avatar_url, DEFAULT_AVATAR_URL);
    }

    #[test]
    fn test_relative_catalog_resolves_against_config_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"catalog": "pets.json"}"#,
        )
        .unwrap();

        let config = PawsConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.catalog, Some(temp_dir.path().join("pets.json")));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "{not json").unwrap();
        assert!(PawsConfig::load(temp_dir.path()).is_err());
    }
}
