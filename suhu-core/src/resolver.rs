//! Location resolution: turn user text or the device position into
//! coordinates, then fetch the weather there.

use std::sync::Arc;
use tracing::debug;

use crate::{
    error::{ErrorKind, Result, WeatherError},
    geolocation::Geolocator,
    model::{Coordinates, SearchQuery, WeatherSnapshot},
    provider::{Geocoder, WeatherProvider},
};

#[derive(Debug, Clone)]
pub struct LocationResolver {
    geocoder: Arc<dyn Geocoder>,
    weather: Arc<dyn WeatherProvider>,
    geolocator: Option<Arc<dyn Geolocator>>,
}

impl LocationResolver {
    pub fn new(
        geocoder: Arc<dyn Geocoder>,
        weather: Arc<dyn WeatherProvider>,
        geolocator: Option<Arc<dyn Geolocator>>,
    ) -> Self {
        Self { geocoder, weather, geolocator }
    }

    pub fn supports_geolocation(&self) -> bool {
        self.geolocator.is_some()
    }

    /// Geocode `query`, then fetch the weather at the first match.
    ///
    /// The weather request is only issued once geocoding has succeeded.
    pub async fn weather_for_query(&self, query: &SearchQuery) -> Result<WeatherSnapshot> {
        let coords = self.geocoder.resolve(query).await.map_err(|e| match e.kind() {
            ErrorKind::Lookup => e,
            _ => WeatherError::lookup_failed(e.to_string()),
        })?;

        debug!(query = %query, %coords, "Geocoded search query");
        self.fetch_weather(coords).await
    }

    pub async fn weather_for_current_position(&self) -> Result<WeatherSnapshot> {
        let geolocator = self.geolocator.as_ref().ok_or(WeatherError::GeolocationUnsupported)?;

        let coords = geolocator.current_position().await.map_err(|e| match e.kind() {
            ErrorKind::GeolocationDenied => e,
            _ => WeatherError::geolocation_denied(e.to_string()),
        })?;

        debug!(%coords, "Obtained device position");
        self.fetch_weather(coords).await
    }

    async fn fetch_weather(&self, coords: Coordinates) -> Result<WeatherSnapshot> {
        self.weather.fetch_current(coords).await.map_err(|e| match e {
            WeatherError::Fetch { .. } => e,
            other => WeatherError::fetch(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{
        CallLog, FakeGeocoder, FakeGeolocator, FakeWeather, jakarta, jakarta_snapshot,
    };

    fn resolver(
        log: &Arc<CallLog>,
        geocode: Result<Coordinates>,
        weather: Result<WeatherSnapshot>,
        position: Option<Result<Coordinates>>,
    ) -> LocationResolver {
        let geolocator = position.map(|outcome| {
            Arc::new(FakeGeolocator { log: log.clone(), outcome }) as Arc<dyn Geolocator>
        });

        LocationResolver::new(
            Arc::new(FakeGeocoder { log: log.clone(), outcome: geocode }),
            Arc::new(FakeWeather { log: log.clone(), outcome: weather }),
            geolocator,
        )
    }

    fn query(text: &str) -> SearchQuery {
        SearchQuery::try_from(text).expect("valid query")
    }

    #[tokio::test]
    async fn geocodes_before_fetching_weather() {
        let log = CallLog::shared();
        let resolver = resolver(&log, Ok(jakarta()), Ok(jakarta_snapshot()), None);

        let snapshot = resolver.weather_for_query(&query("Jakarta")).await.expect("snapshot");

        assert_eq!(snapshot, jakarta_snapshot());
        assert_eq!(log.entries(), vec!["geocode:Jakarta", "weather:-6.2,106.8"]);
    }

    #[tokio::test]
    async fn no_match_never_reaches_the_weather_endpoint() {
        let log = CallLog::shared();
        let resolver = resolver(
            &log,
            Err(WeatherError::location_not_found("Atlantis")),
            Ok(jakarta_snapshot()),
            None,
        );

        let err = resolver.weather_for_query(&query("Atlantis")).await.unwrap_err();

        assert_eq!(err, WeatherError::location_not_found("Atlantis"));
        assert_eq!(log.entries(), vec!["geocode:Atlantis"]);
    }

    #[tokio::test]
    async fn weather_failures_are_reported_as_fetch_errors() {
        let log = CallLog::shared();
        let resolver = resolver(
            &log,
            Ok(jakarta()),
            Err(WeatherError::lookup_failed("unexpected")),
            None,
        );

        let err = resolver.weather_for_query(&query("Jakarta")).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Fetch);
    }

    #[tokio::test]
    async fn current_position_without_geolocator_is_unsupported() {
        let log = CallLog::shared();
        let resolver = resolver(&log, Ok(jakarta()), Ok(jakarta_snapshot()), None);

        assert!(!resolver.supports_geolocation());
        let err = resolver.weather_for_current_position().await.unwrap_err();

        assert_eq!(err, WeatherError::GeolocationUnsupported);
        assert!(log.entries().is_empty());
    }

    #[tokio::test]
    async fn current_position_feeds_the_weather_client() {
        let log = CallLog::shared();
        let resolver = resolver(&log, Ok(jakarta()), Ok(jakarta_snapshot()), Some(Ok(jakarta())));

        let snapshot = resolver.weather_for_current_position().await.expect("snapshot");

        assert_eq!(snapshot.location_name, "Jakarta");
        assert_eq!(log.entries(), vec!["position", "weather:-6.2,106.8"]);
    }

    #[tokio::test]
    async fn denied_position_stops_before_weather() {
        let log = CallLog::shared();
        let resolver = resolver(
            &log,
            Ok(jakarta()),
            Ok(jakarta_snapshot()),
            Some(Err(WeatherError::geolocation_denied("user said no"))),
        );

        let err = resolver.weather_for_current_position().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::GeolocationDenied);
        assert_eq!(log.entries(), vec!["position"]);
    }
}
