use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt};

use crate::error::WeatherError;

/// Trimmed, non-empty place name typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for SearchQuery {
    type Error = WeatherError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(WeatherError::Validation);
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Returns `None` unless both components are finite.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        (latitude.is_finite() && longitude.is_finite()).then_some(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

/// Result of one successful current-weather fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location_name: String,
    /// Localized, human-readable description, e.g. "berawan".
    pub description: String,
    /// Provider condition category, e.g. "Clouds".
    pub condition: String,
    pub temperature_c: f64,
    pub humidity_pct: u8,
    pub observed_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_is_trimmed() {
        let query = SearchQuery::try_from("  Jakarta \n").expect("valid query");
        assert_eq!(query.as_str(), "Jakarta");
    }

    #[test]
    fn blank_query_is_a_validation_error() {
        for input in ["", "   ", "\t\n"] {
            assert_eq!(SearchQuery::try_from(input).unwrap_err(), WeatherError::Validation);
        }
    }

    #[test]
    fn coordinates_must_be_finite() {
        assert!(Coordinates::new(-6.2, 106.8).is_some());
        assert!(Coordinates::new(f64::NAN, 106.8).is_none());
        assert!(Coordinates::new(-6.2, f64::INFINITY).is_none());
    }
}
