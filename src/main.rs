use anyhow::Result;
use funnel_estimator::config::{LoggingSettings, Settings};
use funnel_estimator::domain::config_types::LogFormat;
use funnel_estimator::infrastructure::log_messages::application;
use funnel_estimator::Application;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    init_tracing(&settings.logging);

    info!(
        industry = %settings.scenario.industry_key,
        "{}",
        application::STARTING
    );

    let app = Application::with_settings(settings).await;
    app.run().await?;

    Ok(())
}

/// Logs go to stderr so stdout carries only the JSON report
fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_str()));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Compact => builder.compact().init(),
    }
}
