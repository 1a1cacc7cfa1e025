//! Current conditions and local time at a location

/// Timezone reported when the forecast service omits it
pub const UNKNOWN_TIMEZONE: &str = "sconosciuto";

/// Local time reported when the current weather block omits it
pub const UNKNOWN_LOCAL_TIME: &str = "n.d.";

/// Snapshot of the weather right now, plus the local clock
#[derive(Debug, Clone, PartialEq)]
pub struct Conditions {
    /// IANA timezone inferred from the coordinates
    pub timezone: String,
    /// Local time as an ISO 8601 string without offset
    pub local_time: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Wind speed in km/h
    pub wind_speed: f64,
    /// WMO weather code
    pub weather_code: i64,
}
