//! Geocoding: resolve a free-text place name to coordinates.
//! Uses Nominatim (OpenStreetMap), which asks every client to identify itself
//! through the `User-Agent` header.

use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

use crate::config::GeocodingConfig;
use crate::models::Location;
use crate::{Result, WorldInfoError};

/// Client for the Nominatim search endpoint
#[derive(Debug, Clone)]
pub struct Geocoder {
    client: Client,
    base_url: String,
}

impl Geocoder {
    /// Create a new geocoder from its configuration section
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        let client = builder.build().map_err(|e| {
            WorldInfoError::config(format!("Failed to create geocoding HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve a place name to the best matching location.
    ///
    /// Every failure (unreachable service, error status, zero matches,
    /// malformed coordinates) is reported as [`WorldInfoError::PlaceNotFound`].
    #[instrument(skip(self))]
    pub async fn resolve(&self, query: &str) -> Result<Location> {
        let url = format!("{}/search", self.base_url);
        debug!("Nominatim request URL: {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("format", "json"), ("limit", "1")])
            .send()
            .await
            .map_err(|e| {
                warn!("Geocoding request failed: {}", e);
                WorldInfoError::place_not_found(query)
            })?;

        if response.status() != StatusCode::OK {
            warn!("Geocoding returned status {}", response.status());
            return Err(WorldInfoError::place_not_found(query));
        }

        let matches: Vec<nominatim::SearchResult> = response.json().await.map_err(|e| {
            warn!("Geocoding parse error: {}", e);
            WorldInfoError::place_not_found(query)
        })?;

        let Some(best) = matches.into_iter().next() else {
            info!("No results found for '{}'", query);
            return Err(WorldInfoError::place_not_found(query));
        };

        let location = Location::try_from(best).map_err(|e| {
            warn!("Geocoding returned unparseable coordinates: {}", e);
            WorldInfoError::place_not_found(query)
        })?;

        info!(
            "Resolved '{}' to {} ({})",
            query,
            location.display_name,
            location.format_coordinates()
        );
        Ok(location)
    }
}

/// Nominatim response structures
mod nominatim {
    use super::Location;
    use serde::Deserialize;
    use std::num::ParseFloatError;

    /// One match from `/search?format=json`
    #[derive(Debug, Deserialize)]
    pub struct SearchResult {
        pub lat: Coordinate,
        pub lon: Coordinate,
        pub display_name: String,
    }

    /// Nominatim encodes coordinates as strings; plain numbers are accepted too
    #[derive(Debug, Deserialize)]
    #[serde(untagged)]
    pub enum Coordinate {
        Number(f64),
        Text(String),
    }

    impl Coordinate {
        fn value(&self) -> Result<f64, ParseFloatError> {
            match self {
                Coordinate::Number(value) => Ok(*value),
                Coordinate::Text(text) => text.trim().parse(),
            }
        }
    }

    impl TryFrom<SearchResult> for Location {
        type Error = ParseFloatError;

        fn try_from(result: SearchResult) -> Result<Self, Self::Error> {
            Ok(Location::new(
                result.lat.value()?,
                result.lon.value()?,
                result.display_name,
            ))
        }
    }
}
