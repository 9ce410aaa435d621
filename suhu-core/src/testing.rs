//! In-crate fakes for the provider and geolocation traits.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::{
    error::Result,
    geolocation::Geolocator,
    model::{Coordinates, SearchQuery, WeatherSnapshot},
    provider::{Geocoder, WeatherProvider},
};

/// Ordered record of the calls made against the fakes.
#[derive(Debug, Default)]
pub(crate) struct CallLog(Mutex<Vec<String>>);

impl CallLog {
    pub(crate) fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn push(&self, entry: String) {
        self.0.lock().expect("call log poisoned").push(entry);
    }

    pub(crate) fn entries(&self) -> Vec<String> {
        self.0.lock().expect("call log poisoned").clone()
    }
}

#[derive(Debug)]
pub(crate) struct FakeGeocoder {
    pub(crate) log: Arc<CallLog>,
    pub(crate) outcome: Result<Coordinates>,
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    async fn resolve(&self, query: &SearchQuery) -> Result<Coordinates> {
        self.log.push(format!("geocode:{query}"));
        self.outcome.clone()
    }
}

#[derive(Debug)]
pub(crate) struct FakeWeather {
    pub(crate) log: Arc<CallLog>,
    pub(crate) outcome: Result<WeatherSnapshot>,
}

#[async_trait]
impl WeatherProvider for FakeWeather {
    async fn fetch_current(&self, coords: Coordinates) -> Result<WeatherSnapshot> {
        self.log.push(format!("weather:{},{}", coords.latitude(), coords.longitude()));
        self.outcome.clone()
    }
}

#[derive(Debug)]
pub(crate) struct FakeGeolocator {
    pub(crate) log: Arc<CallLog>,
    pub(crate) outcome: Result<Coordinates>,
}

#[async_trait]
impl Geolocator for FakeGeolocator {
    async fn current_position(&self) -> Result<Coordinates> {
        self.log.push("position".to_string());
        self.outcome.clone()
    }
}

pub(crate) fn jakarta() -> Coordinates {
    Coordinates::new(-6.2, 106.8).expect("finite")
}

pub(crate) fn jakarta_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        location_name: "Jakarta".to_string(),
        description: "berawan".to_string(),
        condition: "Clouds".to_string(),
        temperature_c: 30.0,
        humidity_pct: 70,
        observed_at: None,
    }
}
