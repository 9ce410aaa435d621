//! Error taxonomy for the weather card.
//!
//! Every failure a user action can hit ends up as one of these variants.
//! The `Display` text is meant for logs; what the card shows comes from
//! [`WeatherError::user_message`].

use thiserror::Error;

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeatherError {
    /// Search text was empty or whitespace only.
    #[error("search query is empty")]
    Validation,

    /// The geocoding request itself failed (transport, status or body).
    #[error("geocoding request failed: {message}")]
    LookupFailed { message: String },

    /// Geocoding succeeded but returned no candidates.
    #[error("no location matches '{query}'")]
    LocationNotFound { query: String },

    #[error("weather request failed: {message}")]
    Fetch { message: String },

    #[error("geolocation is not available on this device")]
    GeolocationUnsupported,

    #[error("could not determine the current position: {message}")]
    GeolocationDenied { message: String },
}

/// Coarse error kind, one per user-visible failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Lookup,
    Fetch,
    GeolocationUnsupported,
    GeolocationDenied,
}

impl WeatherError {
    pub fn lookup_failed<S: Into<String>>(message: S) -> Self {
        Self::LookupFailed { message: message.into() }
    }

    pub fn location_not_found<S: Into<String>>(query: S) -> Self {
        Self::LocationNotFound { query: query.into() }
    }

    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch { message: message.into() }
    }

    pub fn geolocation_denied<S: Into<String>>(message: S) -> Self {
        Self::GeolocationDenied { message: message.into() }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::Validation => ErrorKind::Validation,
            WeatherError::LookupFailed { .. } | WeatherError::LocationNotFound { .. } => {
                ErrorKind::Lookup
            }
            WeatherError::Fetch { .. } => ErrorKind::Fetch,
            WeatherError::GeolocationUnsupported => ErrorKind::GeolocationUnsupported,
            WeatherError::GeolocationDenied { .. } => ErrorKind::GeolocationDenied,
        }
    }

    /// Message shown on the card. The card has a single display locale.
    pub fn user_message(&self) -> &'static str {
        match self {
            WeatherError::Validation => "Silakan masukkan nama lokasi",
            WeatherError::LookupFailed { .. } => "Gagal mencari lokasi",
            WeatherError::LocationNotFound { .. } => "Lokasi tidak ditemukan",
            WeatherError::Fetch { .. } => "Gagal mengambil data cuaca. Silakan coba lagi nanti.",
            WeatherError::GeolocationUnsupported => "Geolokasi tidak didukung di perangkat Anda.",
            WeatherError::GeolocationDenied { .. } => {
                "Tidak dapat mengakses lokasi Anda. Pastikan izin lokasi diaktifkan."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_variants_share_a_kind() {
        assert_eq!(WeatherError::lookup_failed("500").kind(), ErrorKind::Lookup);
        assert_eq!(WeatherError::location_not_found("Atlantis").kind(), ErrorKind::Lookup);
    }

    #[test]
    fn user_messages_distinguish_failed_and_missing_lookups() {
        assert_eq!(WeatherError::lookup_failed("boom").user_message(), "Gagal mencari lokasi");
        assert_eq!(
            WeatherError::location_not_found("Atlantis").user_message(),
            "Lokasi tidak ditemukan"
        );
    }

    #[test]
    fn display_keeps_technical_detail() {
        let err = WeatherError::fetch("status 503");
        assert!(err.to_string().contains("status 503"));
        assert!(!err.user_message().contains("503"));
    }
}
