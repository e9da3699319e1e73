use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{error::ProviderError, model::Reading, units};

use super::{ProviderId, WeatherProvider};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

/// City-keyed adapter for the OpenWeatherMap current-weather API.
///
/// Only the city name is used to build the query; coordinates supplied by
/// the caller are ignored on input. Coordinates discovered in the
/// response are attached to the reading when the caller did not know the
/// location. The API reports temperature on the absolute scale.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
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
struct OwMain {
    /// Kelvin: the API uses the absolute scale unless asked otherwise.
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct OwCoord {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwResponse {
    main: OwMain,
    coord: Option<OwCoord>,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    fn id(&self) -> ProviderId {
        ProviderId::OpenWeather
    }

    async fn fetch_reading(
        &self,
        city: &str,
        lat: f64,
        long: f64,
    ) -> Result<Reading, ProviderError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body = res.text().await?;
        let parsed: OwResponse = serde_json::from_str(&body)?;

        let kelvin = parsed.main.temp;
        let celsius = units::kelvin_to_celsius(kelvin)?;
        let fahrenheit = units::kelvin_to_fahrenheit(kelvin)?;

        let mut reading = Reading {
            celsius,
            fahrenheit,
            kelvin,
            ..Reading::default()
        };

        // Discovered coordinates matter only when the caller had none.
        // A response without them is not an error.
        if lat == 0.0 && long == 0.0 {
            match parsed.coord {
                Some(coord) if coord.lat != 0.0 && coord.lon != 0.0 => {
                    tracing::info!(
                        city,
                        lat = coord.lat,
                        long = coord.lon,
                        "coordinates resolved by openweather"
                    );
                    reading.latitude = coord.lat;
                    reading.longitude = coord.lon;
                }
                _ => {
                    tracing::debug!(city, "no coordinates in openweather response");
                }
            }
        }

        Ok(reading)
    }
}
