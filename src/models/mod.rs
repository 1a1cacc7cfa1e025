//! Data models for the world info service
//!
//! - Location: resolved place and coordinates
//! - Conditions: current weather and local time at a coordinate
//! - CityInfo: the two merged into the response payload

pub mod city_info;
pub mod conditions;
pub mod location;

pub use city_info::{CityInfo, CurrentWeather};
pub use conditions::Conditions;
pub use location::Location;
