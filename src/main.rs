use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use weather_widget::{
    IpLocationProvider, OpenMeteoClient, TerminalSink, WeatherUpdater, WidgetConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_widget=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting weather widget");

    let config = WidgetConfig::default();
    let updater = WeatherUpdater::new(
        Arc::new(IpLocationProvider::new(&config)?),
        Arc::new(OpenMeteoClient::new(&config)?),
        Arc::new(TerminalSink::new(config.notification_dismiss_after)),
        config.refresh_interval,
    );

    match updater.run().await {
        Ok(never) => match never {},
        Err(e) => Err(e.into()),
    }
}
