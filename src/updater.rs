//! Fetch-and-render orchestration.
//!
//! Location is acquired once. After that a fetch cycle starts immediately and
//! then every refresh interval for as long as the widget runs. Cycles are
//! never cancelled and may overlap; each cycle's current and daily requests
//! run as separate tasks and write to the sink whenever they finish.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::watch;
use tracing::{error, info, warn};

use crate::classifier::theme;
use crate::client::ForecastClient;
use crate::constants::{
    LOCATION_UNSUPPORTED_ALERT, UNABLE_TO_FETCH_CURRENT, UNABLE_TO_FETCH_DAILY,
};
use crate::formatters::{format_current, format_daily};
use crate::location::{LocationError, LocationProvider};
use crate::models::Coordinates;
use crate::sink::{NotificationKind, PresentationSink};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdaterState {
    Idle,
    LocatingUser,
    Active(Coordinates),
    LocationDenied,
    LocationUnsupported,
}

/// Reasons the updater stops. Once active it never stops.
#[derive(Debug, Error)]
pub enum UpdaterError {
    #[error("Cannot start weather updates: {0}")]
    Location(#[from] LocationError),
}

pub struct WeatherUpdater {
    location: Arc<dyn LocationProvider>,
    client: Arc<dyn ForecastClient>,
    sink: Arc<dyn PresentationSink>,
    refresh_interval: Duration,
    state: watch::Sender<UpdaterState>,
}

impl WeatherUpdater {
    pub fn new(
        location: Arc<dyn LocationProvider>,
        client: Arc<dyn ForecastClient>,
        sink: Arc<dyn PresentationSink>,
        refresh_interval: Duration,
    ) -> Self {
        let (state, _) = watch::channel(UpdaterState::Idle);
        Self {
            location,
            client,
            sink,
            refresh_interval,
            state,
        }
    }

    /// Follow state transitions
    pub fn subscribe(&self) -> watch::Receiver<UpdaterState> {
        self.state.subscribe()
    }

    /// Acquire the location, then run fetch cycles forever.
    ///
    /// Only returns when the location cannot be acquired.
    pub async fn run(self) -> Result<Infallible, UpdaterError> {
        self.state.send_replace(UpdaterState::LocatingUser);

        let coordinates = match self.location.acquire_location().await {
            Ok(coordinates) => coordinates,
            Err(e) if e.is_unsupported() => {
                error!("Geolocation unavailable on this platform");
                self.state.send_replace(UpdaterState::LocationUnsupported);
                self.sink.alert(LOCATION_UNSUPPORTED_ALERT);
                return Err(e.into());
            }
            Err(e) => {
                error!("Error fetching location: {}", e);
                self.state.send_replace(UpdaterState::LocationDenied);
                self.sink.notify(NotificationKind::Error);
                return Err(e.into());
            }
        };

        info!(
            "Starting weather updates for {}, {} every {:?}",
            coordinates.latitude, coordinates.longitude, self.refresh_interval
        );
        self.state.send_replace(UpdaterState::Active(coordinates));
        self.sink.show_container();

        // The first tick completes immediately.
        let mut ticker = tokio::time::interval(self.refresh_interval);
        let mut cycle: u64 = 0;
        loop {
            ticker.tick().await;
            cycle += 1;
            self.start_cycle(cycle, coordinates);
        }
    }

    /// Issue both requests of one fetch cycle without waiting for them
    fn start_cycle(&self, cycle: u64, coordinates: Coordinates) {
        self.sink.notify(NotificationKind::FetchStarted);

        tokio::spawn(refresh_current(
            cycle,
            coordinates,
            Arc::clone(&self.client),
            Arc::clone(&self.sink),
        ));
        tokio::spawn(refresh_daily(
            cycle,
            coordinates,
            Arc::clone(&self.client),
            Arc::clone(&self.sink),
        ));
    }
}

async fn refresh_current(
    cycle: u64,
    coordinates: Coordinates,
    client: Arc<dyn ForecastClient>,
    sink: Arc<dyn PresentationSink>,
) {
    match client.fetch_current(coordinates).await {
        Ok(conditions) => {
            sink.render_current(&format_current(&conditions));
            sink.notify(NotificationKind::UpdateSucceeded);
            sink.render_theme(theme(conditions.weather_code));
        }
        Err(e) => {
            warn!(cycle, "Error fetching current weather data: {}", e);
            sink.render_current(UNABLE_TO_FETCH_CURRENT);
            sink.notify(NotificationKind::Error);
        }
    }
}

async fn refresh_daily(
    cycle: u64,
    coordinates: Coordinates,
    client: Arc<dyn ForecastClient>,
    sink: Arc<dyn PresentationSink>,
) {
    match client.fetch_daily(coordinates).await {
        Ok(forecast) => {
            sink.render_daily(&format_daily(&forecast));
            sink.notify(NotificationKind::UpdateSucceeded);
        }
        Err(e) => {
            warn!(cycle, "Error fetching daily weather data: {}", e);
            sink.render_daily(&[UNABLE_TO_FETCH_DAILY.to_string()]);
            sink.notify(NotificationKind::Error);
        }
    }
}
