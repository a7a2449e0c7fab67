use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-widget/0.1.0";

/// Open-Meteo API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Keyless IP geolocation lookup
pub const IP_LOCATION_URL: &str = "https://ipapi.co/json/";

/// Variables requested for the multi-day forecast, in wire order
pub const DAILY_VARIABLES: &str =
    "temperature_2m_max,temperature_2m_min,precipitation_sum,weathercode,windspeed_10m_max";

/// Interval between fetch cycles
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(60_000);

/// How long a transient notification stays on screen
pub const NOTIFICATION_DISMISS_AFTER: Duration = Duration::from_millis(3_000);

pub const UNABLE_TO_FETCH_CURRENT: &str = "Unable to fetch current weather data.";
pub const UNABLE_TO_FETCH_DAILY: &str = "Unable to fetch daily weather data.";
pub const LOCATION_UNSUPPORTED_ALERT: &str = "Geolocation is not supported on this platform.";
