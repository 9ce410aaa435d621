//! View state controller.
//!
//! Owns the [`UiState`] and exposes the actions the card offers. Every
//! failure is converted into the state's error message here; nothing
//! propagates past this boundary.

use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    config::{Config, DisplayPreferences},
    error::{Result, WeatherError},
    geolocation::{Geolocator, geolocator_from_config},
    model::{SearchQuery, WeatherSnapshot},
    provider::OpenWeatherClient,
    resolver::LocationResolver,
    state::UiState,
    view::WeatherCard,
};

/// Called with the new value on every loading-flag transition.
pub type LoadingHook = Box<dyn Fn(bool) + Send + Sync>;

pub struct WeatherController {
    resolver: LocationResolver,
    state: UiState,
    loading_hook: Option<LoadingHook>,
}

impl WeatherController {
    pub fn new(resolver: LocationResolver, preferences: DisplayPreferences) -> Self {
        let state = UiState { theme: preferences.theme, unit: preferences.unit, ..UiState::default() };
        Self { resolver, state, loading_hook: None }
    }

    /// Wire the OpenWeather client and the configured geolocator.
    pub fn from_config(config: &Config) -> Self {
        let client = Arc::new(OpenWeatherClient::new(config));
        let geolocator = geolocator_from_config(&config.geolocation)
            .map(|g| Arc::new(g) as Arc<dyn Geolocator>);

        let resolver = LocationResolver::new(client.clone(), client, geolocator);
        Self::new(resolver, config.display)
    }

    pub fn with_loading_hook(mut self, hook: LoadingHook) -> Self {
        self.loading_hook = Some(hook);
        self
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    /// The card for the current snapshot in the current unit.
    pub fn card(&self) -> Option<WeatherCard> {
        self.state.snapshot.as_ref().map(|s| WeatherCard::new(s, self.state.unit))
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
    }

    pub fn toggle_theme(&mut self) {
        self.state.theme = self.state.theme.toggled();
    }

    pub fn toggle_unit(&mut self) {
        self.state.unit = self.state.unit.toggled();
    }

    /// Search for the current search text.
    ///
    /// Blank text is rejected before any request is made.
    pub async fn search_by_name(&mut self) {
        let query = match SearchQuery::try_from(self.state.search_text.as_str()) {
            Ok(query) => query,
            Err(e) => {
                self.report(&e);
                return;
            }
        };

        self.begin_fetch();
        let outcome = self.resolver.weather_for_query(&query).await;
        self.finish_fetch(outcome);
    }

    /// Fetch the weather at the device position.
    pub async fn use_current_location(&mut self) {
        if !self.resolver.supports_geolocation() {
            self.report(&WeatherError::GeolocationUnsupported);
            return;
        }

        self.begin_fetch();
        let outcome = self.resolver.weather_for_current_position().await;
        self.finish_fetch(outcome);
    }

    fn begin_fetch(&mut self) {
        self.state.error = None;
        self.set_loading(true);
    }

    fn finish_fetch(&mut self, outcome: Result<WeatherSnapshot>) {
        match outcome {
            Ok(snapshot) => {
                info!(location = %snapshot.location_name, "Weather updated");
                self.state.snapshot = Some(snapshot);
            }
            // Any previous snapshot stays on the card.
            Err(e) => self.report(&e),
        }
        self.set_loading(false);
    }

    fn report(&mut self, err: &WeatherError) {
        warn!(error = %err, "Weather action failed");
        self.state.error = Some(err.user_message().to_string());
    }

    fn set_loading(&mut self, loading: bool) {
        self.state.loading = loading;
        if let Some(hook) = &self.loading_hook {
            hook(loading);
        }
    }
}
