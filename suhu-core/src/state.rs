use serde::{Deserialize, Serialize};

use crate::{model::WeatherSnapshot, units::TemperatureUnit};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Everything the card renders from. Only [`crate::WeatherController`] mutates it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    pub(crate) theme: Theme,
    pub(crate) unit: TemperatureUnit,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    pub(crate) snapshot: Option<WeatherSnapshot>,
    pub(crate) search_text: String,
}

impl UiState {
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn unit(&self) -> TemperatureUnit {
        self.unit
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Current error message, `None` when there is nothing to show.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Most recent successful fetch. May be stale if a later attempt failed.
    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }
}
