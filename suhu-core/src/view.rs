use chrono::{DateTime, Utc};

use crate::{
    icon::{IconId, map_condition},
    model::WeatherSnapshot,
    units::{TemperatureUnit, format_temperature},
};

/// Display-ready contents of the weather card.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherCard {
    pub location_name: String,
    pub description: String,
    /// e.g. "30°C" or "86°F".
    pub temperature: String,
    /// e.g. "70%".
    pub humidity: String,
    /// Label of the unit toggle, the symbol of the unit in use.
    pub unit_label: &'static str,
    pub icon: IconId,
    pub observed_at: Option<DateTime<Utc>>,
}

impl WeatherCard {
    pub fn new(snapshot: &WeatherSnapshot, unit: TemperatureUnit) -> Self {
        Self {
            location_name: snapshot.location_name.clone(),
            description: snapshot.description.clone(),
            temperature: format_temperature(snapshot.temperature_c, unit),
            humidity: format!("{}%", snapshot.humidity_pct),
            unit_label: unit.symbol(),
            icon: map_condition(&snapshot.condition),
            observed_at: snapshot.observed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::jakarta_snapshot;

    #[test]
    fn celsius_card() {
        let card = WeatherCard::new(&jakarta_snapshot(), TemperatureUnit::Celsius);

        assert_eq!(card.location_name, "Jakarta");
        assert_eq!(card.description, "berawan");
        assert_eq!(card.temperature, "30°C");
        assert_eq!(card.humidity, "70%");
        assert_eq!(card.unit_label, "°C");
        assert_eq!(card.icon, IconId::Cloudy);
    }

    #[test]
    fn fahrenheit_card_only_changes_temperature() {
        let celsius = WeatherCard::new(&jakarta_snapshot(), TemperatureUnit::Celsius);
        let fahrenheit = WeatherCard::new(&jakarta_snapshot(), TemperatureUnit::Fahrenheit);

        assert_eq!(fahrenheit.temperature, "86°F");
        assert_eq!(fahrenheit.unit_label, "°F");
        assert_eq!(fahrenheit.humidity, celsius.humidity);
        assert_eq!(fahrenheit.icon, celsius.icon);
    }
}
