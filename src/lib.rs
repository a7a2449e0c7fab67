//! Terminal weather widget
//!
//! Acquires the device location once, then fetches current conditions and a
//! multi-day forecast from Open-Meteo every minute and renders them.

pub mod classifier;
pub mod client;
pub mod config;
pub mod constants;
pub mod formatters;
pub mod location;
pub mod models;
pub mod sink;
pub mod updater;

pub use classifier::{classify, theme, BackgroundTheme, WeatherCategory};
pub use client::{ForecastClient, ForecastError, OpenMeteoClient};
pub use config::WidgetConfig;
pub use location::{FixedLocation, IpLocationProvider, LocationError, LocationProvider, NoLocation};
pub use models::{Coordinates, CurrentConditions, DailyForecast, DailyForecastEntry, Units};
pub use sink::{NotificationKind, PresentationSink, TerminalSink};
pub use updater::{UpdaterError, UpdaterState, WeatherUpdater};
