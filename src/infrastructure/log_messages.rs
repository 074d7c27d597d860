//! Log message constants for infrastructure components
//!
//! This module centralizes the log messages emitted while loading reference
//! data and running the estimator, so wording stays consistent. Variable
//! details are attached as structured `tracing` fields, not interpolated.

/// Application startup and lifecycle messages
pub mod application {
    pub const STARTING: &str = "Starting funnel estimator";
    pub const SETTINGS_LOADED: &str = "Settings loaded";
    pub const ESTIMATE_READY: &str = "Funnel estimate ready";
    pub const FINISHED: &str = "Funnel estimator finished";
}

/// Reference data loading messages
pub mod data {
    pub const LOADING_GLOBAL_CONFIG: &str = "Loading global configuration";
    pub const GLOBAL_CONFIG_LOADED: &str = "Global configuration loaded";
    pub const GLOBAL_CONFIG_FALLBACK: &str =
        "Failed to load global configuration, using built-in defaults";
    pub const LOADING_INDUSTRIES: &str = "Loading industry dataset";
    pub const INDUSTRIES_LOADED: &str = "Industry dataset loaded";
    pub const INDUSTRIES_FALLBACK: &str =
        "Failed to load industry dataset, continuing with an empty catalog";
}

/// Advisory warnings about an estimate
pub mod advisories {
    pub const VOLUME_EXCEEDS_TAM: &str =
        "Requested volume exceeds the addressable market for this industry";
    pub const CAPACITY_EXCEEDED: &str =
        "Projected appointments exceed the stated sales capacity";
    pub const VOLUME_BELOW_MINIMUM: &str =
        "Requested volume is below the configured minimum outreach volume";
    pub const CAPACITY_OUTSIDE_RANGE: &str =
        "Sales capacity is outside the configured selectable range";
    pub const CLOSE_RATE_NOT_OFFERED: &str =
        "Close rate is not one of the configured options";
}
