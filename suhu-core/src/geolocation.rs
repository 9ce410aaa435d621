//! Device position lookup for the "use my location" action.
//!
//! A terminal has no positioning hardware to ask, so the stock
//! implementation estimates the position from the public IP address.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::fmt::Debug;
use tracing::{debug, warn};

use crate::{
    config::GeolocationConfig,
    error::{Result, WeatherError},
    model::Coordinates,
    provider::truncate_body,
};

#[async_trait]
pub trait Geolocator: Send + Sync + Debug {
    /// Fails with [`WeatherError::GeolocationDenied`] when the position can't be obtained.
    async fn current_position(&self) -> Result<Coordinates>;
}

/// Build the configured geolocator, or `None` when the capability is switched off.
pub fn geolocator_from_config(config: &GeolocationConfig) -> Option<IpGeolocator> {
    config.enabled.then(|| IpGeolocator::new(config.lookup_url.clone()))
}

#[derive(Debug, Clone)]
pub struct IpGeolocator {
    lookup_url: String,
    http: Client,
}

impl IpGeolocator {
    pub fn new(lookup_url: String) -> Self {
        Self { lookup_url, http: Client::new() }
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    status: String,
    message: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn current_position(&self) -> Result<Coordinates> {
        debug!(url = %self.lookup_url, "Looking up position from IP address");

        let res = self
            .http
            .get(&self.lookup_url)
            .query(&[("fields", "status,message,lat,lon")])
            .send()
            .await
            .map_err(|e| WeatherError::geolocation_denied(format!("lookup request failed: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::geolocation_denied(format!("failed to read lookup body: {e}")))?;

        if !status.is_success() {
            warn!(%status, "IP geolocation rejected");
            return Err(WeatherError::geolocation_denied(format!(
                "lookup failed with status {status}: {}",
                truncate_body(&body)
            )));
        }

        let parsed: IpLookupResponse = serde_json::from_str(&body)
            .map_err(|e| WeatherError::geolocation_denied(format!("failed to parse lookup JSON: {e}")))?;

        if parsed.status != "success" {
            return Err(WeatherError::geolocation_denied(
                parsed.message.unwrap_or_else(|| "lookup unsuccessful".to_string()),
            ));
        }

        parsed
            .lat
            .zip(parsed.lon)
            .and_then(|(lat, lon)| Coordinates::new(lat, lon))
            .ok_or_else(|| WeatherError::geolocation_denied("lookup returned no usable position"))
    }
}
