use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fs, path::PathBuf};

use crate::provider::ProviderId;

/// Configuration for a single provider (e.g., API key).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub api_key: String,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Optional explicit provider order, e.g. ["openweather", "darksky"].
    /// When absent, every known provider is queried in its default order.
    /// Order matters: coordinate resolution is first-write-wins.
    pub provider_order: Option<Vec<String>>,

    /// Example TOML:
    /// [providers.openweather]
    /// api_key = "..."
    pub providers: HashMap<String, ProviderConfig>,
}

impl Config {
    /// The ordered provider list the aggregator should query.
    pub fn provider_order(&self) -> Result<Vec<ProviderId>> {
        match &self.provider_order {
            None => Ok(ProviderId::all().to_vec()),
            Some(names) => names
                .iter()
                .map(|name| ProviderId::try_from(name.as_str()))
                .collect(),
        }
    }

    pub fn has_provider(&self, id: ProviderId) -> bool {
        self.providers.contains_key(id.as_str())
    }

    pub fn provider_config(&self, id: ProviderId) -> Option<&ProviderConfig> {
        self.providers.get(id.as_str())
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "multiweather", "multiweather-server")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Convenience helper: set/replace a provider API key.
    pub fn upsert_provider_api_key(&mut self, provider_id: ProviderId, api_key: String) {
        self.providers.insert(provider_id.as_str().to_string(), ProviderConfig { api_key });
    }

    /// Returns API key for a provider, if present.
    pub fn provider_api_key(&self, provider_id: ProviderId) -> Option<&str> {
        self.providers.get(provider_id.as_str()).map(|cfg| cfg.api_key.as_str())
    }

    pub fn is_provider_configured(&self, provider_id: ProviderId) -> bool {
        self.provider_api_key(provider_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::ProviderId;

    #[test]
    fn default_order_covers_all_providers() {
        let cfg = Config::default();
        let order = cfg.provider_order().expect("default order must parse");

        assert_eq!(order, vec![ProviderId::OpenWeather, ProviderId::DarkSky]);
    }

    #[test]
    fn explicit_order_is_respected() {
        let cfg = Config {
            provider_order: Some(vec!["darksky".into(), "openweather".into()]),
            ..Config::default()
        };

        let order = cfg.provider_order().expect("explicit order must parse");
        assert_eq!(order, vec![ProviderId::DarkSky, ProviderId::OpenWeather]);
    }

    #[test]
    fn unknown_provider_in_order_errors() {
        let cfg = Config {
            provider_order: Some(vec!["doesnotexist".into()]),
            ..Config::default()
        };

        let err = cfg.provider_order().unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }

    #[test]
    fn set_api_key_for_provider() {
        let mut cfg = Config::default();

        cfg.upsert_provider_api_key(ProviderId::OpenWeather, "OPEN_KEY".into());

        let key = cfg.provider_api_key(ProviderId::OpenWeather);
        assert_eq!(key, Some("OPEN_KEY"));
        assert!(cfg.is_provider_configured(ProviderId::OpenWeather));
        assert!(!cfg.is_provider_configured(ProviderId::DarkSky));
    }

    #[test]
    fn upsert_replaces_existing_key() {
        let mut cfg = Config::default();

        cfg.upsert_provider_api_key(ProviderId::DarkSky, "OLD_KEY".into());
        cfg.upsert_provider_api_key(ProviderId::DarkSky, "NEW_KEY".into());

        assert_eq!(cfg.provider_api_key(ProviderId::DarkSky), Some("NEW_KEY"));
    }

    #[test]
    fn toml_roundtrip_preserves_keys_and_order() {
        let mut cfg = Config {
            provider_order: Some(vec!["darksky".into(), "openweather".into()]),
            ..Config::default()
        };
        cfg.upsert_provider_api_key(ProviderId::DarkSky, "KEY".into());

        let text = toml::to_string_pretty(&cfg).expect("config must serialize");
        let parsed: Config = toml::from_str(&text).expect("config must parse back");

        assert_eq!(parsed.provider_api_key(ProviderId::DarkSky), Some("KEY"));
        assert_eq!(
            parsed.provider_order().unwrap(),
            vec![ProviderId::DarkSky, ProviderId::OpenWeather]
        );
    }
}
