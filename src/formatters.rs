use crate::classifier::{classify, WeatherCategory};
use crate::models::{CurrentConditions, DailyForecast, DailyForecastEntry, Units};
use crate::sink::NotificationKind;

/// Shown in place of a value the API reported as `null`
const MISSING_VALUE: &str = "n/a";

/// Formats current conditions for the "today" region
pub fn format_current(conditions: &CurrentConditions) -> String {
    let category = classify(conditions.weather_code);
    format!(
        "Today's Weather\n  Current Temperature: {}{}\n  Current Wind Speed: {} {}\n  Weather: {} {}\n",
        conditions.temperature,
        conditions.units.temperature,
        conditions.wind_speed,
        conditions.units.wind_speed,
        category.symbol(),
        category.description()
    )
}

/// Formats one block per forecast day, in the order given
pub fn format_daily(forecast: &DailyForecast) -> Vec<String> {
    forecast
        .days
        .iter()
        .map(|day| format_day(day, &forecast.units))
        .collect()
}

fn format_day(day: &DailyForecastEntry, units: &Units) -> String {
    let category = day.weather_code.map_or(WeatherCategory::Unknown, classify);
    format!(
        "{}\n  Max Temp: {}{}\n  Min Temp: {}{}\n  Precipitation: {} {}\n  Weather: {} {}\n  Max Wind Speed: {} {}\n",
        day.date.format("%-m/%-d/%Y"),
        value_or_placeholder(day.max_temp),
        units.temperature,
        value_or_placeholder(day.min_temp),
        units.temperature,
        value_or_placeholder(day.precipitation),
        units.precipitation,
        category.symbol(),
        category.description(),
        value_or_placeholder(day.max_wind_speed),
        units.wind_speed
    )
}

fn value_or_placeholder(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING_VALUE.to_string(), |v| v.to_string())
}

/// Text shown for a transient notification
pub fn notification_text(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::FetchStarted => "Fetching latest weather data...",
        NotificationKind::UpdateSucceeded => "Weather updated.",
        NotificationKind::Error => "Error fetching weather data.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(y: i32, m: u32, d: u32, max: f64, min: f64) -> DailyForecastEntry {
        DailyForecastEntry {
            date: NaiveDate::from_ymd_opt(y, m, d).expect("valid date"),
            max_temp: Some(max),
            min_temp: Some(min),
            precipitation: Some(0.4),
            weather_code: Some(61),
            max_wind_speed: Some(11.0),
        }
    }

    #[test]
    fn test_format_current() {
        let text = format_current(&CurrentConditions {
            temperature: 68.5,
            wind_speed: 7.2,
            weather_code: 0,
            units: Units::default(),
        });
        assert!(text.contains("Current Temperature: 68.5\u{00b0}F"));
        assert!(text.contains("Current Wind Speed: 7.2 km/h"));
        assert!(text.contains("Clear sky"));
        assert!(!text.contains("Feels Like"));
    }

    #[test]
    fn test_format_daily_one_block_per_day() {
        let forecast = DailyForecast {
            days: vec![day(2024, 1, 1, 50.0, 30.0), day(2024, 1, 2, 55.0, 35.0)],
            units: Units::default(),
        };
        let blocks = format_daily(&forecast);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("1/1/2024"));
        assert!(blocks[0].contains("Max Temp: 50\u{00b0}F"));
        assert!(blocks[1].starts_with("1/2/2024"));
        assert!(blocks[1].contains("Max Temp: 55\u{00b0}F"));
        assert!(blocks[1].contains("Min Temp: 35\u{00b0}F"));
        assert!(blocks[1].contains("Precipitation: 0.4 mm"));
    }

    #[test]
    fn test_format_day_with_missing_values() {
        let mut missing = day(2024, 3, 5, 60.0, 40.0);
        missing.precipitation = None;
        missing.weather_code = None;
        missing.max_wind_speed = None;

        let blocks = format_daily(&DailyForecast {
            days: vec![missing],
            units: Units::default(),
        });
        assert!(blocks[0].contains("Max Temp: 60\u{00b0}F"));
        assert!(blocks[0].contains("Precipitation: n/a mm"));
        assert!(blocks[0].contains("Max Wind Speed: n/a km/h"));
        assert!(blocks[0].contains("Unknown"));
    }

    #[test]
    fn test_format_daily_empty() {
        let forecast = DailyForecast {
            days: vec![],
            units: Units::default(),
        };
        assert!(format_daily(&forecast).is_empty());
    }

    #[test]
    fn test_notification_text() {
        assert!(notification_text(NotificationKind::Error).contains("Error"));
    }
}
