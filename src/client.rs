use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::WidgetConfig;
use crate::constants::{DAILY_VARIABLES, USER_AGENT};
use crate::models::{
    Coordinates, CurrentConditions, CurrentWeatherResponse, DailyForecast, DailyForecastResponse,
};

/// Forecast request errors. Every variant is a per-request network error.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The request could not be sent or the body could not be read
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-2xx status
    #[error("Request failed with status: {0}")]
    Status(reqwest::StatusCode),

    /// The body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Malformed(String),
}

/// Source of current conditions and multi-day forecasts
#[async_trait]
pub trait ForecastClient: Send + Sync {
    async fn fetch_current(&self, coordinates: Coordinates)
        -> Result<CurrentConditions, ForecastError>;

    async fn fetch_daily(&self, coordinates: Coordinates) -> Result<DailyForecast, ForecastError>;
}

/// Open-Meteo HTTP client
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    base_url: String,
}

impl OpenMeteoClient {
    /// Creates a client against the configured base URL
    pub fn new(config: &WidgetConfig) -> Result<Self, ForecastError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn current_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&current_weather=true&temperature_unit=fahrenheit&timezone=auto",
            self.base_url, coordinates.latitude, coordinates.longitude
        )
    }

    pub fn daily_url(&self, coordinates: Coordinates) -> String {
        format!(
            "{}/forecast?latitude={}&longitude={}&daily={}&temperature_unit=fahrenheit&timezone=auto",
            self.base_url, coordinates.latitude, coordinates.longitude, DAILY_VARIABLES
        )
    }

    /// Makes an HTTP GET request and deserializes the JSON response
    async fn make_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, ForecastError> {
        debug!(url = %url, "Requesting forecast data");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForecastError::Status(status));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ForecastError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl ForecastClient for OpenMeteoClient {
    #[instrument(skip(self), fields(lat = %coordinates.latitude, lon = %coordinates.longitude))]
    async fn fetch_current(
        &self,
        coordinates: Coordinates,
    ) -> Result<CurrentConditions, ForecastError> {
        let url = self.current_url(coordinates);
        let response: CurrentWeatherResponse = self.make_request(&url).await?;
        CurrentConditions::try_from(response)
    }

    #[instrument(skip(self), fields(lat = %coordinates.latitude, lon = %coordinates.longitude))]
    async fn fetch_daily(&self, coordinates: Coordinates) -> Result<DailyForecast, ForecastError> {
        let url = self.daily_url(coordinates);
        let response: DailyForecastResponse = self.make_request(&url).await?;
        DailyForecast::try_from(response)
    }
}
