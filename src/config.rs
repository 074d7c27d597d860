use crate::domain::config_types::{LogFormat, LogLevel};
use crate::domain::{CaseStudyStrength, ServiceType};
use config::{Config, ConfigError, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub data: DataSettings,
    pub logging: LoggingSettings,
    pub scenario: ScenarioSettings,
}

/// Locations of the reference data files
#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub industries_path: PathBuf,
    pub global_config_path: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: LogLevel,
    pub format: LogFormat,
}

/// The agency's answers for a single estimate.
///
/// Values stay raw here; they are validated when the estimate is built so
/// that bad input is reported as a validation error rather than a
/// configuration error.
#[derive(Debug, Deserialize, Clone)]
pub struct ScenarioSettings {
    pub industry_key: String,
    pub service_type: ServiceType,
    pub case_study_strength: CaseStudyStrength,
    pub price_low: Decimal,
    pub price_high: Decimal,
    pub close_rate: f64,
    pub prospects_per_month: u64,
    pub capacity_calls_per_month: u32,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("data.industries_path", "data/industries.csv")?
            .set_default("data.global_config_path", "data/global-config.json")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("scenario.industry_key", "dentists")?
            .set_default("scenario.service_type", "SEO")?
            .set_default("scenario.case_study_strength", "some")?
            .set_default("scenario.price_low", 1000)?
            .set_default("scenario.price_high", 3000)?
            .set_default("scenario.close_rate", 0.2)?
            .set_default("scenario.prospects_per_month", 10000)?
            .set_default("scenario.capacity_calls_per_month", 10)?
            // Add configuration file if it exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{environment}")).required(false))
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with prefix
            .add_source(
                Environment::with_prefix("FUNNEL_ESTIMATOR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
