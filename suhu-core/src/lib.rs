//! Core library for the `suhu` weather card.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather geocoding and current-weather clients
//! - Device position lookup
//! - The view state controller and the card it renders
//!
//! It is used by `suhu-cli`, but the controller is independent of any
//! particular front end.

pub mod config;
pub mod controller;
pub mod error;
pub mod geolocation;
pub mod icon;
pub mod model;
pub mod provider;
pub mod resolver;
pub mod state;
pub mod units;
pub mod view;

#[cfg(test)]
mod testing;

pub use config::{Config, DisplayPreferences};
pub use controller::{LoadingHook, WeatherController};
pub use error::{ErrorKind, Result, WeatherError};
pub use geolocation::{Geolocator, IpGeolocator};
pub use icon::{IconId, map_condition};
pub use model::{Coordinates, SearchQuery, WeatherSnapshot};
pub use provider::{Geocoder, OpenWeatherClient, WeatherProvider};
pub use resolver::LocationResolver;
pub use state::{Theme, UiState};
pub use units::{TemperatureUnit, format_temperature, to_display_unit};
pub use view::WeatherCard;
