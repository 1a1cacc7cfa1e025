//! `WorldInfo` - city lookup with current weather and local time
//!
//! Resolves a city name through a geocoding service, then asks a forecast
//! service for the current weather and the local time at the resulting
//! coordinates, and serves the merged result over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod geocoding;
pub mod lookup;
pub mod models;
pub mod telemetry;
pub mod weather;
pub mod web;

// Re-export core types for public API
pub use config::WorldInfoConfig;
pub use error::WorldInfoError;
pub use geocoding::Geocoder;
pub use lookup::WorldInfoService;
pub use models::{CityInfo, Conditions, Location};
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WorldInfoError>;
