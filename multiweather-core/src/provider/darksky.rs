use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{error::ProviderError, model::Reading, units};

use super::{ProviderId, WeatherProvider};

const DEFAULT_BASE_URL: &str = "https://api.darksky.net";

/// Coordinate-keyed adapter for the Dark Sky forecast API.
///
/// The API is keyed on latitude/longitude alone; the city name is never
/// sent. Without coordinates there is nothing to ask, so the adapter
/// short-circuits with the all-zero sentinel reading instead of calling
/// out. The temperature unit depends on the `flags.units` field of the
/// response.
#[derive(Debug, Clone)]
pub struct DarkSkyProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl DarkSkyProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the adapter at a different host, for tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct DsCurrently {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct DsFlags {
    units: String,
}

#[derive(Debug, Deserialize)]
struct DsResponse {
    currently: DsCurrently,
    flags: DsFlags,
}

#[async_trait]
impl WeatherProvider for DarkSkyProvider {
    fn id(&self) -> ProviderId {
        ProviderId::DarkSky
    }

    async fn fetch_reading(
        &self,
        city: &str,
        lat: f64,
        long: f64,
    ) -> Result<Reading, ProviderError> {
        if lat == 0.0 && long == 0.0 {
            tracing::debug!(city, "no coordinates yet, skipping darksky call");
            return Ok(Reading::default());
        }

        let url = format!(
            "{}/forecast/{}/{:.4},{:.4}",
            self.base_url, self.api_key, lat, long
        );

        let res = self
            .http
            .get(&url)
            .query(&[("exclude", "minutely,hourly,daily,alerts")])
            .send()
            .await?
            .error_for_status()?;

        let body = res.text().await?;
        let parsed: DsResponse = serde_json::from_str(&body)?;

        // The upstream tends to report "us" units regardless of locale;
        // "si" is handled in case that ever changes.
        let (celsius, fahrenheit) = match parsed.flags.units.as_str() {
            "us" => {
                let f = parsed.currently.temperature;
                (units::fahrenheit_to_celsius(f)?, f)
            }
            "si" => {
                let c = parsed.currently.temperature;
                (c, units::celsius_to_fahrenheit(c)?)
            }
            other => {
                tracing::warn!(city, units = other, "unexpected unit flag from darksky");
                return Err(ProviderError::Unit(other.to_string()));
            }
        };

        // Kelvin is always derived from Celsius as the canonical
        // cross-check of the conversion.
        let kelvin = units::celsius_to_kelvin(celsius)?;

        Ok(Reading {
            celsius,
            fahrenheit,
            kelvin,
            latitude: lat,
            longitude: long,
        })
    }
}
