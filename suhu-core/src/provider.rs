use async_trait::async_trait;
use std::fmt::Debug;

use crate::{
    error::Result,
    model::{Coordinates, SearchQuery, WeatherSnapshot},
};

pub mod openweather;

pub use openweather::OpenWeatherClient;

/// Resolves a free-text place name to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    /// Returns the first (highest-confidence) match only.
    async fn resolve(&self, query: &SearchQuery) -> Result<Coordinates>;
}

/// Fetches current conditions for a coordinate pair.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn fetch_current(&self, coords: Coordinates) -> Result<WeatherSnapshot>;
}

/// Shorten a response body before it lands in an error or a log line.
pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() <= MAX {
        return body.to_string();
    }

    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}
