//! Merged lookup result served by `/info`

use serde::Serialize;

use super::{Conditions, Location};

/// Place, local time and current weather for one city
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CityInfo {
    #[serde(rename = "città")]
    pub city: String,
    #[serde(rename = "latitudine")]
    pub latitude: f64,
    #[serde(rename = "longitudine")]
    pub longitude: f64,
    #[serde(rename = "fuso_orario")]
    pub timezone: String,
    #[serde(rename = "orario_locale")]
    pub local_time: String,
    #[serde(rename = "meteo")]
    pub weather: CurrentWeather,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CurrentWeather {
    #[serde(rename = "temperatura_°C")]
    pub temperature: f64,
    #[serde(rename = "vento_km/h")]
    pub wind_speed: f64,
    #[serde(rename = "codice_meteo")]
    pub weather_code: i64,
}

impl CityInfo {
    /// Merge a resolved place with the conditions fetched for it
    #[must_use]
    pub fn merge(location: Location, conditions: Conditions) -> Self {
        Self {
            city: location.display_name,
            latitude: location.latitude,
            longitude: location.longitude,
            timezone: conditions.timezone,
            local_time: conditions.local_time,
            weather: CurrentWeather {
                temperature: conditions.temperature,
                wind_speed: conditions.wind_speed,
                weather_code: conditions.weather_code,
            },
        }
    }
}
