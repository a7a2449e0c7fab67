use std::time::Duration;

use crate::constants::{
    IP_LOCATION_URL, NOTIFICATION_DISMISS_AFTER, OPEN_METEO_API_BASE, REFRESH_INTERVAL,
};

/// Widget configuration.
///
/// There is no file or environment layer: the defaults are what the widget
/// runs with. Tests override the URLs to point at a mock server and shorten
/// the intervals.
#[derive(Debug, Clone)]
pub struct WidgetConfig {
    /// Open-Meteo API base URL (default: <https://api.open-meteo.com/v1>)
    pub base_url: String,

    /// IP geolocation lookup URL
    pub location_url: String,

    /// Delay between fetch cycles (default: 60s)
    pub refresh_interval: Duration,

    /// Lifetime of a transient notification (default: 3s)
    pub notification_dismiss_after: Duration,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            base_url: OPEN_METEO_API_BASE.to_string(),
            location_url: IP_LOCATION_URL.to_string(),
            refresh_interval: REFRESH_INTERVAL,
            notification_dismiss_after: NOTIFICATION_DISMISS_AFTER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = WidgetConfig::default();
        assert_eq!(config.base_url, "https://api.open-meteo.com/v1");
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert_eq!(config.notification_dismiss_after, Duration::from_secs(3));
    }
}
