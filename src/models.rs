use chrono::NaiveDate;
use serde::Deserialize;

use crate::client::ForecastError;

// ============================================================================
// Open-Meteo API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub current_weather: Option<CurrentWeatherData>,
    #[serde(default)]
    pub current_weather_units: Option<CurrentWeatherUnits>,
}

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherData {
    pub temperature: f64,
    pub windspeed: f64,
    pub weathercode: i32,
}

#[derive(Debug, Deserialize)]
pub struct CurrentWeatherUnits {
    pub temperature: Option<String>,
    pub windspeed: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DailyForecastResponse {
    pub daily: Option<DailyData>,
    #[serde(default)]
    pub daily_units: Option<DailyUnits>,
}

/// Five parallel sequences; index `i` describes the same day in each.
/// The API sends `null` for days it has no value for.
#[derive(Debug, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Vec<Option<f64>>,
    pub precipitation_sum: Vec<Option<f64>>,
    pub weathercode: Vec<Option<i32>>,
    #[serde(rename = "windspeed_10m_max")]
    pub wind_speed_max: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct DailyUnits {
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Option<String>,
    pub precipitation_sum: Option<String>,
    #[serde(rename = "windspeed_10m_max")]
    pub wind_speed_max: Option<String>,
}

// ============================================================================
// Widget Models
// ============================================================================

/// Geographic position, captured once and reused for every fetch cycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Unit labels reported by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Units {
    pub temperature: String,
    pub wind_speed: String,
    pub precipitation: String,
}

impl Default for Units {
    fn default() -> Self {
        Self {
            temperature: "\u{00b0}F".to_string(),
            wind_speed: "km/h".to_string(),
            precipitation: "mm".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrentConditions {
    pub temperature: f64,
    pub wind_speed: f64,
    pub weather_code: i32,
    pub units: Units,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecastEntry {
    pub date: NaiveDate,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    pub precipitation: Option<f64>,
    pub weather_code: Option<i32>,
    pub max_wind_speed: Option<f64>,
}

/// Forecast days in the order the API returned them
#[derive(Debug, Clone, PartialEq)]
pub struct DailyForecast {
    pub days: Vec<DailyForecastEntry>,
    pub units: Units,
}

impl TryFrom<CurrentWeatherResponse> for CurrentConditions {
    type Error = ForecastError;

    fn try_from(response: CurrentWeatherResponse) -> Result<Self, Self::Error> {
        let data = response.current_weather.ok_or_else(|| {
            ForecastError::Malformed("no current_weather block in response".to_string())
        })?;

        let mut units = Units::default();
        if let Some(reported) = response.current_weather_units {
            if let Some(temperature) = reported.temperature {
                units.temperature = temperature;
            }
            if let Some(wind_speed) = reported.windspeed {
                units.wind_speed = wind_speed;
            }
        }

        Ok(Self {
            temperature: data.temperature,
            wind_speed: data.windspeed,
            weather_code: data.weathercode,
            units,
        })
    }
}

impl TryFrom<DailyForecastResponse> for DailyForecast {
    type Error = ForecastError;

    fn try_from(response: DailyForecastResponse) -> Result<Self, Self::Error> {
        let daily = response
            .daily
            .ok_or_else(|| ForecastError::Malformed("no daily block in response".to_string()))?;

        let mut units = Units::default();
        if let Some(reported) = response.daily_units {
            if let Some(temperature) = reported.temperature_max {
                units.temperature = temperature;
            }
            if let Some(wind_speed) = reported.wind_speed_max {
                units.wind_speed = wind_speed;
            }
            if let Some(precipitation) = reported.precipitation_sum {
                units.precipitation = precipitation;
            }
        }

        Ok(Self {
            days: daily.into_entries()?,
            units,
        })
    }
}

impl DailyData {
    /// Zip the parallel sequences into one entry per day, preserving order.
    pub fn into_entries(self) -> Result<Vec<DailyForecastEntry>, ForecastError> {
        let len = self.time.len();
        let lengths = [
            self.temperature_max.len(),
            self.temperature_min.len(),
            self.precipitation_sum.len(),
            self.weathercode.len(),
            self.wind_speed_max.len(),
        ];
        if lengths.iter().any(|l| *l != len) {
            return Err(ForecastError::Malformed(format!(
                "daily sequences differ in length: time={len}, others={lengths:?}"
            )));
        }

        let mut entries = Vec::with_capacity(len);
        for i in 0..len {
            let date = NaiveDate::parse_from_str(&self.time[i], "%Y-%m-%d").map_err(|e| {
                ForecastError::Malformed(format!("invalid date {:?}: {e}", self.time[i]))
            })?;

            entries.push(DailyForecastEntry {
                date,
                max_temp: self.temperature_max[i],
                min_temp: self.temperature_min[i],
                precipitation: self.precipitation_sum[i],
                weather_code: self.weathercode[i],
                max_wind_speed: self.wind_speed_max[i],
            });
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_days() -> DailyData {
        DailyData {
            time: vec!["2024-01-01".to_string(), "2024-01-02".to_string()],
            temperature_max: vec![Some(50.0), Some(55.0)],
            temperature_min: vec![Some(30.0), Some(35.0)],
            precipitation_sum: vec![Some(0.0), Some(1.2)],
            weathercode: vec![Some(0), Some(61)],
            wind_speed_max: vec![Some(10.0), Some(12.5)],
        }
    }

    #[test]
    fn test_daily_entries_preserve_order() {
        let entries = two_days().into_entries().expect("should parse");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"));
        assert_eq!(entries[0].max_temp, Some(50.0));
        assert_eq!(entries[0].min_temp, Some(30.0));
        assert_eq!(entries[1].max_temp, Some(55.0));
        assert_eq!(entries[1].min_temp, Some(35.0));
        assert_eq!(entries[1].weather_code, Some(61));
    }

    #[test]
    fn test_daily_null_values_are_kept_as_missing() {
        let data: DailyData = serde_json::from_value(serde_json::json!({
            "time": ["2024-01-01", "2024-01-02"],
            "temperature_2m_max": [50.0, null],
            "temperature_2m_min": [30.0, 35.0],
            "precipitation_sum": [0.0, null],
            "weathercode": [0, null],
            "windspeed_10m_max": [10.0, 12.5]
        }))
        .expect("should deserialize");

        let entries = data.into_entries().expect("should parse");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].precipitation, Some(0.0));
        assert_eq!(entries[1].max_temp, None);
        assert_eq!(entries[1].precipitation, None);
        assert_eq!(entries[1].weather_code, None);
        assert_eq!(entries[1].min_temp, Some(35.0));
    }

    #[test]
    fn test_daily_entries_reject_length_mismatch() {
        let mut data = two_days();
        data.weathercode.pop();
        let err = data.into_entries().unwrap_err();
        assert!(matches!(err, ForecastError::Malformed(_)));
    }

    #[test]
    fn test_daily_entries_reject_bad_date() {
        let mut data = two_days();
        data.time[1] = "tomorrow".to_string();
        assert!(data.into_entries().is_err());
    }

    #[test]
    fn test_empty_daily_is_empty_forecast() {
        let data = DailyData {
            time: vec![],
            temperature_max: vec![],
            temperature_min: vec![],
            precipitation_sum: vec![],
            weathercode: vec![],
            wind_speed_max: vec![],
        };
        assert!(data.into_entries().expect("should parse").is_empty());
    }

    #[test]
    fn test_current_conditions_from_response() {
        let response: CurrentWeatherResponse = serde_json::from_value(serde_json::json!({
            "current_weather": { "temperature": 71.3, "windspeed": 9.4, "weathercode": 2 },
            "current_weather_units": { "temperature": "\u{00b0}F", "windspeed": "km/h" }
        }))
        .expect("should deserialize");

        let conditions = CurrentConditions::try_from(response).expect("should convert");
        assert_eq!(conditions.temperature, 71.3);
        assert_eq!(conditions.wind_speed, 9.4);
        assert_eq!(conditions.weather_code, 2);
        assert_eq!(conditions.units.wind_speed, "km/h");
    }

    #[test]
    fn test_missing_current_block_is_malformed() {
        let response: CurrentWeatherResponse =
            serde_json::from_value(serde_json::json!({ "latitude": 1.0 }))
                .expect("should deserialize");
        assert!(CurrentConditions::try_from(response).is_err());
    }

    #[test]
    fn test_daily_units_fallback() {
        let response = DailyForecastResponse {
            daily: Some(two_days()),
            daily_units: None,
        };
        let forecast = DailyForecast::try_from(response).expect("should convert");
        assert_eq!(forecast.units, Units::default());
        assert_eq!(forecast.days.len(), 2);
    }
}
