//! City lookup: geocode the name, then fetch conditions at the coordinates.

use tracing::instrument;

use crate::config::WorldInfoConfig;
use crate::geocoding::Geocoder;
use crate::models::CityInfo;
use crate::weather::WeatherClient;
use crate::Result;

/// Service value owning both upstream clients, built once at startup
#[derive(Debug, Clone)]
pub struct WorldInfoService {
    geocoder: Geocoder,
    weather: WeatherClient,
}

impl WorldInfoService {
    #[must_use]
    pub fn new(geocoder: Geocoder, weather: WeatherClient) -> Self {
        Self { geocoder, weather }
    }

    /// Build both clients from configuration
    pub fn from_config(config: &WorldInfoConfig) -> Result<Self> {
        Ok(Self::new(
            Geocoder::new(&config.geocoding)?,
            WeatherClient::new(&config.forecast)?,
        ))
    }

    /// Look up a city. The forecast call runs only after geocoding succeeded,
    /// and either failure fails the whole lookup.
    #[instrument(skip(self))]
    pub async fn city_info(&self, city: &str) -> Result<CityInfo> {
        let location = self.geocoder.resolve(city).await?;
        let conditions = self
            .weather
            .fetch(location.latitude, location.longitude)
            .await?;
        Ok(CityInfo::merge(location, conditions))
    }
}
