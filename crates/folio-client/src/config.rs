use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persistent configuration, stored as TOML under the user config dir.
///
/// Every field is optional; what a command actually requires is checked at
/// the point of use (a listing needs a content source, `contact send` needs
/// a relay URL).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Base URL of the Strapi-style content API.
    #[serde(default)]
    pub api_url: Option<String>,

    /// Base URL for resolving relative CMS asset paths. Defaults to the
    /// API base when unset.
    #[serde(default)]
    pub asset_base: Option<String>,

    /// Static content directory (used when no API URL is configured).
    #[serde(default)]
    pub content_dir: Option<PathBuf>,

    /// Email-relay endpoint for contact submissions.
    #[serde(default)]
    pub relay_url: Option<String>,
}

/// Values taken from CLI flags, overriding both environment and file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_url: Option<String>,
    pub asset_base: Option<String>,
    pub content_dir: Option<PathBuf>,
    pub relay_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).map_err(|e| Error::Config(e.to_string()))?;
        let config: Config = toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::Config(e.to_string()))?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| Error::Config(e.to_string()))?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("folio").join("config.toml"))
            .ok_or_else(|| Error::Config("could not determine the user config directory".to_string()))
    }

    /// Merge resolution order: CLI flag > environment variable > config
    /// file. Environment variables: `FOLIO_API_URL`, `FOLIO_ASSET_BASE`,
    /// `FOLIO_CONTENT_DIR`, `FOLIO_RELAY_URL`.
    pub fn resolve(file: Config, overrides: Overrides) -> Config {
        Config {
            api_url: overrides
                .api_url
                .or_else(|| env_var("FOLIO_API_URL"))
                .or(file.api_url),
            asset_base: overrides
                .asset_base
                .or_else(|| env_var("FOLIO_ASSET_BASE"))
                .or(file.asset_base),
            content_dir: overrides
                .content_dir
                .or_else(|| env_var("FOLIO_CONTENT_DIR").map(PathBuf::from))
                .or(file.content_dir),
            relay_url: overrides
                .relay_url
                .or_else(|| env_var("FOLIO_RELAY_URL"))
                .or(file.relay_url),
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            api_url: Some("https://cms.example.com/api".to_string()),
            asset_base: None,
            content_dir: Some(PathBuf::from("/srv/content")),
            relay_url: Some("https://relay.example.com/send".to_string()),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn overrides_beat_the_file() {
        let file = Config {
            api_url: Some("https://file.example.com".to_string()),
            relay_url: Some("https://file-relay.example.com".to_string()),
            ..Default::default()
        };
        let overrides = Overrides {
            api_url: Some("https://flag.example.com".to_string()),
            ..Default::default()
        };

        let resolved = Config::resolve(file, overrides);
        assert_eq!(resolved.api_url.as_deref(), Some("https://flag.example.com"));
        assert_eq!(
            resolved.relay_url.as_deref(),
            Some("https://file-relay.example.com")
        );
    }
}
