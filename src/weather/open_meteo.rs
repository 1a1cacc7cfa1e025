//! `OpenMeteo` API response structures and conversion utilities

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

use crate::models::Conditions;
use crate::models::conditions::{UNKNOWN_LOCAL_TIME, UNKNOWN_TIMEZONE};

/// Response of `/v1/forecast?current_weather=true&timezone=auto`
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub timezone: Option<String>,
    pub current_weather: Option<CurrentWeather>,
}

/// The `current_weather` block. Measurements are required; a block without
/// them fails to deserialize.
#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    pub time: Option<String>,
    pub temperature: f64,
    pub windspeed: f64,
    #[serde(deserialize_with = "integral_code")]
    pub weathercode: i64,
}

impl ForecastResponse {
    /// Split into conditions, or `None` when there is no current weather block
    pub fn into_conditions(self) -> Option<Conditions> {
        let current = self.current_weather?;
        Some(Conditions {
            timezone: self
                .timezone
                .unwrap_or_else(|| UNKNOWN_TIMEZONE.to_string()),
            local_time: current
                .time
                .unwrap_or_else(|| UNKNOWN_LOCAL_TIME.to_string()),
            temperature: current.temperature,
            wind_speed: current.windspeed,
            weather_code: current.weathercode,
        })
    }
}

/// WMO codes are integers, but an integral float such as `3.0` is accepted
fn integral_code<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Integer(i64),
        Float(f64),
    }

    match Code::deserialize(deserializer)? {
        Code::Integer(code) => Ok(code),
        Code::Float(code) if code.fract() == 0.0 && code.abs() < i64::MAX as f64 => {
            Ok(code as i64)
        }
        Code::Float(code) => Err(D::Error::custom(format!(
            "weathercode must be an integer, got {code}"
        ))),
    }
}
