use std::fmt;

/// Animated icon shown under the measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    ClearDay,
    Cloudy,
    Rain,
    Snow,
    Wind,
    Sleet,
    Fog,
}

impl IconId {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconId::ClearDay => "CLEAR_DAY",
            IconId::Cloudy => "CLOUDY",
            IconId::Rain => "RAIN",
            IconId::Snow => "SNOW",
            IconId::Wind => "WIND",
            IconId::Sleet => "SLEET",
            IconId::Fog => "FOG",
        }
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a provider condition category (`weather[0].main`) to an icon.
///
/// Matching is exact and case-sensitive; anything unknown is drawn as
/// [`IconId::Cloudy`].
pub fn map_condition(condition: &str) -> IconId {
    match condition {
        "Clear" => IconId::ClearDay,
        "Clouds" => IconId::Cloudy,
        "Rain" => IconId::Rain,
        "Snow" => IconId::Snow,
        "Drizzle" => IconId::Sleet,
        "Mist" | "Smoke" | "Haze" | "Dust" | "Fog" | "Sand" | "Ash" => IconId::Fog,
        "Thunderstorm" | "Squall" | "Tornado" => IconId::Wind,
        _ => IconId::Cloudy,
    }
}
