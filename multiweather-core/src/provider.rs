use crate::{
    Config,
    error::ProviderError,
    model::Reading,
    provider::{darksky::DarkSkyProvider, openweather::OpenWeatherProvider},
};
use async_trait::async_trait;
use std::{convert::TryFrom, fmt::Debug};

pub mod darksky;
pub mod openweather;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderId {
    OpenWeather,
    DarkSky,
}

impl ProviderId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenWeather => "openweather",
            ProviderId::DarkSky => "darksky",
        }
    }

    pub const fn all() -> &'static [ProviderId] {
        &[ProviderId::OpenWeather, ProviderId::DarkSky]
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ProviderId {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let lower = value.to_lowercase();

        match lower.as_str() {
            "openweather" => Ok(ProviderId::OpenWeather),
            "darksky" => Ok(ProviderId::DarkSky),
            _ => Err(anyhow::anyhow!(
                "Unknown provider '{value}'. Supported providers: openweather, darksky."
            )),
        }
    }
}

/// The capability every weather source must implement.
///
/// One invocation performs at most one outbound call and returns a
/// normalized [`Reading`]. A `(0.0, 0.0)` coordinate pair on input means
/// the caller does not know the location; an adapter that cannot work
/// without coordinates returns the all-zero sentinel reading instead of
/// an error. No retries happen at this level.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    fn id(&self) -> ProviderId;

    async fn fetch_reading(
        &self,
        city: &str,
        lat: f64,
        long: f64,
    ) -> Result<Reading, ProviderError>;
}

/// Construct a provider from config and explicit ProviderId.
pub fn provider_from_config(
    id: ProviderId,
    config: &Config,
) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.provider_api_key(id).ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for provider '{id}'.\n\
                 Hint: run `multiweather configure {id} --api-key <KEY>` first."
        )
    })?;

    let boxed: Box<dyn WeatherProvider> = match id {
        ProviderId::OpenWeather => Box::new(OpenWeatherProvider::new(api_key.to_owned())),
        ProviderId::DarkSky => Box::new(DarkSkyProvider::new(api_key.to_owned())),
    };

    Ok(boxed)
}

/// Construct the ordered provider list the aggregator will query.
pub fn providers_from_config(config: &Config) -> anyhow::Result<Vec<Box<dyn WeatherProvider>>> {
    config
        .provider_order()?
        .into_iter()
        .map(|id| provider_from_config(id, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn provider_id_as_str_roundtrip() {
        for id in ProviderId::all() {
            let s = id.as_str();
            let parsed = ProviderId::try_from(s).expect("roundtrip should succeed");
            assert_eq!(*id, parsed);
        }
    }

    #[test]
    fn unknown_provider_error() {
        let err = ProviderId::try_from("doesnotexist").unwrap_err();
        assert!(err.to_string().contains("Unknown provider"));
    }

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config::default();
        let err = provider_from_config(ProviderId::OpenWeather, &cfg).unwrap_err();
        assert!(err.to_string().contains("No API key configured for provider"));
    }

    #[test]
    fn providers_from_config_builds_ordered_list() {
        let mut cfg = Config::default();
        cfg.upsert_provider_api_key(ProviderId::OpenWeather, "OPEN_KEY".to_string());
        cfg.upsert_provider_api_key(ProviderId::DarkSky, "DARK_KEY".to_string());

        let providers = providers_from_config(&cfg).expect("both providers configured");
        let ids: Vec<_> = providers.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec![ProviderId::OpenWeather, ProviderId::DarkSky]);
    }

    #[test]
    fn providers_from_config_errors_when_one_key_missing() {
        let mut cfg = Config::default();
        cfg.upsert_provider_api_key(ProviderId::OpenWeather, "OPEN_KEY".to_string());

        let err = providers_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("darksky"));
    }
}
