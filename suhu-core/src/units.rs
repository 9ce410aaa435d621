use serde::{Deserialize, Serialize};

/// Unit the card displays temperatures in. Providers always report Celsius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn toggled(self) -> Self {
        match self {
            TemperatureUnit::Celsius => TemperatureUnit::Fahrenheit,
            TemperatureUnit::Fahrenheit => TemperatureUnit::Celsius,
        }
    }

    pub fn is_celsius(self) -> bool {
        self == TemperatureUnit::Celsius
    }

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// Convert a Celsius reading into the unit being displayed.
pub fn to_display_unit(temp_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => temp_c,
        TemperatureUnit::Fahrenheit => temp_c * 9.0 / 5.0 + 32.0,
    }
}

/// "30°C", "86°F", "21.5°C". At most one decimal, no trailing ".0".
pub fn format_temperature(temp_c: f64, unit: TemperatureUnit) -> String {
    let value = (to_display_unit(temp_c, unit) * 10.0).round() / 10.0;
    // avoid printing "-0"
    let value = if value == 0.0 { 0.0 } else { value };

    let mut text = format!("{value:.1}");
    if text.ends_with(".0") {
        text.truncate(text.len() - 2);
    }

    format!("{text}{}", unit.symbol())
}
