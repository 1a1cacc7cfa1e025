//! Weather and local time lookup for OpenMeteo
//!
//! The forecast endpoint is queried with `timezone=auto`, so the service
//! infers the timezone from the coordinates and reports the current weather
//! timestamp in local time.

use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

use crate::config::ForecastConfig;
use crate::models::Conditions;
use crate::{Result, WorldInfoError};

pub mod open_meteo;

/// Client for the OpenMeteo forecast endpoint
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
}

impl WeatherClient {
    /// Create a new weather client from its configuration section
    pub fn new(config: &ForecastConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            WorldInfoError::config(format!("Failed to create forecast HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch current weather and local time at a coordinate.
    ///
    /// Coordinates are passed through unchecked.
    #[instrument(skip(self))]
    pub async fn fetch(&self, latitude: f64, longitude: f64) -> Result<Conditions> {
        let url = format!("{}/forecast", self.base_url);
        debug!("OpenMeteo request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", latitude.to_string()),
                ("longitude", longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await
            .map_err(|e| {
                warn!("Forecast request failed: {}", e);
                WorldInfoError::conditions_unavailable(format!("request failed: {e}"))
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!("Forecast returned status {}", status);
            return Err(WorldInfoError::conditions_unavailable(format!(
                "forecast service returned {status}"
            )));
        }

        let forecast: open_meteo::ForecastResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse forecast response: {}", e);
            WorldInfoError::conditions_unavailable(format!("invalid forecast response: {e}"))
        })?;

        let conditions = forecast.into_conditions().ok_or_else(|| {
            warn!("Forecast response has no current_weather block");
            WorldInfoError::conditions_unavailable("no current weather data available")
        })?;

        info!(
            "Current conditions at {} ({}): {:.1}°C, code {}",
            conditions.local_time,
            conditions.timezone,
            conditions.temperature,
            conditions.weather_code
        );
        Ok(conditions)
    }
}
