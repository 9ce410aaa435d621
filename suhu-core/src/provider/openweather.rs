use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{
    config::Config,
    error::{Result, WeatherError},
    model::{Coordinates, SearchQuery, WeatherSnapshot},
    provider::{Geocoder, WeatherProvider, truncate_body},
};

/// OpenWeather geocoding + current weather client.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    lang: String,
    geocoding_url: String,
    weather_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(config: &Config) -> Self {
        Self::with_http(Client::new(), config)
    }

    pub fn with_http(http: Client, config: &Config) -> Self {
        if !config.has_api_key() {
            warn!("No OpenWeather API key configured; requests will be rejected by the provider");
        }

        Self {
            api_key: config.api_key().to_string(),
            lang: config.lang.clone(),
            geocoding_url: config.endpoints.geocoding.clone(),
            weather_url: config.endpoints.weather.clone(),
            http,
        }
    }
}

#[derive(Debug, Deserialize)]
struct OwGeocodeEntry {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    /// Relative humidity in percent; values above 100 are rejected.
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    dt: Option<i64>,
    main: OwMain,
    weather: Vec<OwWeather>,
}

#[async_trait]
impl Geocoder for OpenWeatherClient {
    async fn resolve(&self, query: &SearchQuery) -> Result<Coordinates> {
        debug!(query = %query, "Geocoding place name");

        let res = self
            .http
            .get(&self.geocoding_url)
            .query(&[("q", query.as_str()), ("limit", "1"), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                WeatherError::lookup_failed(format!("failed to send geocoding request: {e}"))
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            WeatherError::lookup_failed(format!("failed to read geocoding response body: {e}"))
        })?;

        if !status.is_success() {
            warn!(%status, "Geocoding request rejected");
            return Err(WeatherError::lookup_failed(format!(
                "geocoding request failed with status {status}: {}",
                truncate_body(&body),
            )));
        }

        let candidates: Vec<OwGeocodeEntry> = serde_json::from_str(&body).map_err(|e| {
            WeatherError::lookup_failed(format!("failed to parse geocoding JSON: {e}"))
        })?;

        let first = candidates
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::location_not_found(query.as_str()))?;

        let coords = Coordinates::new(first.lat, first.lon).ok_or_else(|| {
            WeatherError::lookup_failed(format!(
                "geocoding returned non-finite coordinates ({}, {})",
                first.lat, first.lon
            ))
        })?;

        debug!(query = %query, %coords, "Resolved place name");
        Ok(coords)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn fetch_current(&self, coords: Coordinates) -> Result<WeatherSnapshot> {
        debug!(%coords, "Fetching current weather");

        let lat = coords.latitude().to_string();
        let lon = coords.longitude().to_string();

        let res = self
            .http
            .get(&self.weather_url)
            .query(&[
                ("lat", lat.as_str()),
                ("lon", lon.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
                ("lang", self.lang.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::fetch(format!("failed to send weather request: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::fetch(format!("failed to read weather response body: {e}")))?;

        if !status.is_success() {
            warn!(%status, "Weather request rejected");
            return Err(WeatherError::fetch(format!(
                "weather request failed with status {status}: {}",
                truncate_body(&body),
            )));
        }

        let parsed: OwCurrentResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherError::fetch(format!("failed to parse weather JSON: {e}")))?;

        let primary = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::fetch("weather response contained no conditions"))?;

        if parsed.main.humidity > 100 {
            return Err(WeatherError::fetch(format!(
                "weather response reported humidity {}%",
                parsed.main.humidity
            )));
        }

        Ok(WeatherSnapshot {
            location_name: parsed.name,
            description: primary.description,
            condition: primary.main,
            temperature_c: parsed.main.temp,
            humidity_pct: parsed.main.humidity,
            observed_at: parsed.dt.and_then(unix_to_utc),
        })
    }
}

fn unix_to_utc(ts: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
}
