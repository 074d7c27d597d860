//! Reference data loading with built-in fallbacks
//!
//! The `read_*` functions surface every failure; the `load_*` functions
//! never fail and substitute defaults so the estimator always receives a
//! configuration.

use crate::domain::{GlobalConfig, IndustryCatalog};
use crate::infrastructure::log_messages::data;
use crate::Result;
use std::path::Path;
use tracing::{error, info, instrument};

pub async fn read_global_config(path: &Path) -> Result<GlobalConfig> {
    let json = tokio::fs::read_to_string(path).await?;
    Ok(GlobalConfig::from_json(&json)?)
}

pub async fn read_industries(path: &Path) -> Result<IndustryCatalog> {
    let csv = tokio::fs::read_to_string(path).await?;
    Ok(IndustryCatalog::from_csv(&csv)?)
}

/// Read the global configuration, falling back to [`GlobalConfig::fallback`]
#[instrument]
pub async fn load_global_config(path: &Path) -> GlobalConfig {
    info!("{}", data::LOADING_GLOBAL_CONFIG);
    match read_global_config(path).await {
        Ok(config) => {
            info!("{}", data::GLOBAL_CONFIG_LOADED);
            config
        }
        Err(err) => {
            error!(error = %err, "{}", data::GLOBAL_CONFIG_FALLBACK);
            GlobalConfig::fallback()
        }
    }
}

/// Read the industry dataset, falling back to an empty catalog
#[instrument]
pub async fn load_industries(path: &Path) -> IndustryCatalog {
    info!("{}", data::LOADING_INDUSTRIES);
    match read_industries(path).await {
        Ok(catalog) => {
            info!(industries = catalog.len(), "{}", data::INDUSTRIES_LOADED);
            catalog
        }
        Err(err) => {
            error!(error = %err, "{}", data::INDUSTRIES_FALLBACK);
            IndustryCatalog::default()
        }
    }
}
