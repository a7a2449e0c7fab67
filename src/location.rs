//! One-shot acquisition of the device position.
//!
//! Location is requested exactly once per widget session; there is no retry
//! and no fallback position.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::WidgetConfig;
use crate::constants::USER_AGENT;
use crate::models::Coordinates;

/// Location service errors
#[derive(Debug, Error)]
pub enum LocationError {
    #[error("Geolocation is not supported")]
    Unsupported,
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location request timed out")]
    Timeout,
    #[error("Location unavailable: {0}")]
    Unavailable(String),
}

impl LocationError {
    /// Unsupported platforms get an alert instead of an error notification
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }
}

#[async_trait]
pub trait LocationProvider: Send + Sync {
    async fn acquire_location(&self) -> Result<Coordinates, LocationError>;
}

/// A position known ahead of time
#[derive(Debug, Clone, Copy)]
pub struct FixedLocation(pub Coordinates);

#[async_trait]
impl LocationProvider for FixedLocation {
    async fn acquire_location(&self) -> Result<Coordinates, LocationError> {
        Ok(self.0)
    }
}

/// A platform without any location capability
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLocation;

#[async_trait]
impl LocationProvider for NoLocation {
    async fn acquire_location(&self) -> Result<Coordinates, LocationError> {
        Err(LocationError::Unsupported)
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupResponse {
    latitude: Option<f64>,
    longitude: Option<f64>,
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

/// Approximate position from a keyless IP geolocation lookup
#[derive(Debug, Clone)]
pub struct IpLocationProvider {
    client: Client,
    url: String,
}

impl IpLocationProvider {
    pub fn new(config: &WidgetConfig) -> Result<Self, LocationError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        Ok(Self {
            client,
            url: config.location_url.clone(),
        })
    }
}

#[async_trait]
impl LocationProvider for IpLocationProvider {
    async fn acquire_location(&self) -> Result<Coordinates, LocationError> {
        debug!(url = %self.url, "Looking up location");

        let response = self.client.get(&self.url).send().await.map_err(|e| {
            if e.is_timeout() {
                LocationError::Timeout
            } else {
                LocationError::Unavailable(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::FORBIDDEN {
            return Err(LocationError::PermissionDenied);
        }
        if !status.is_success() {
            return Err(LocationError::Unavailable(format!("HTTP {status}")));
        }

        let body: IpLookupResponse = response
            .json()
            .await
            .map_err(|e| LocationError::Unavailable(e.to_string()))?;

        if body.error {
            return Err(LocationError::Unavailable(
                body.reason.unwrap_or_else(|| "lookup refused".to_string()),
            ));
        }

        match (body.latitude, body.longitude) {
            (Some(latitude), Some(longitude)) => {
                info!("Got location: {}, {}", latitude, longitude);
                Ok(Coordinates::new(latitude, longitude))
            }
            _ => Err(LocationError::Unavailable(
                "lookup returned no coordinates".to_string(),
            )),
        }
    }
}
