//! Validation constants for domain types
//!
//! This module centralizes the limits, fallback values and magic numbers
//! used throughout the domain layer so the estimator and the boundary
//! loaders agree on them.

/// Industry identifier limits
pub mod industry {
    /// Maximum industry key length
    pub const MAX_KEY_LENGTH: usize = 100;

    /// Maximum display name / plural label length
    pub const MAX_LABEL_LENGTH: usize = 200;
}

/// Built-in global configuration used when the configuration document
/// cannot be read or parsed
pub mod fallback {
    pub const LEAD_TO_APPOINTMENT_RATE: f64 = 0.4;
    pub const MAX_TOUCHES_PER_BUSINESS: u64 = 2;

    pub const MULTIPLIER_NONE: f64 = 1.2;
    pub const MULTIPLIER_SOME: f64 = 1.0;
    pub const MULTIPLIER_STRONG: f64 = 0.8;

    pub const DEFAULT_PCPL_MIN: f64 = 450.0;
    pub const DEFAULT_PCPL_MAX: f64 = 650.0;

    pub const VOLUME_MIN: u64 = 5_000;
    pub const VOLUME_MAX_DEFAULT: u64 = 50_000;
    pub const VOLUME_DEFAULT: u64 = 10_000;

    pub const CAPACITY_MIN: u32 = 4;
    pub const CAPACITY_MAX: u32 = 40;
    pub const CAPACITY_DEFAULT: u32 = 10;

    pub const CLOSE_RATE_OPTIONS: &[f64] = &[0.1, 0.2, 0.3, 0.4];
    pub const CLOSE_RATE_DEFAULT: f64 = 0.2;

    pub const PRICE_MIN: i64 = 200;
    pub const PRICE_MAX: i64 = 50_000;

    pub const SCHEDULING_URL: &str = "https://calendly.com/your-link";
}

/// Revenue presentation smoothing
pub mod revenue {
    /// MRR is rounded to the nearest multiple of this many currency units
    pub const MRR_ROUNDING_UNIT: i64 = 100;

    pub const MONTHS_PER_YEAR: i64 = 12;
}

/// Sales capacity checks
pub mod capacity {
    /// Appointments above `capacity * WARNING_FACTOR` trigger a capacity warning
    pub const WARNING_FACTOR: f64 = 1.5;
}

/// Client projection limits
pub mod clients {
    /// Every projection models at least this many signed clients
    pub const MINIMUM_MODELED_CLIENTS: u64 = 1;
}
