//! Domain types and business logic for the funnel estimator
//!
//! The estimator pipeline lives in [`estimator`]; the remaining modules hold
//! the validated input types, reference data and the small helpers callers
//! use around an estimate.

pub mod booking;
pub mod config_types;
pub mod errors;
pub mod estimator;
pub mod global_config;
pub mod industry;
pub mod presentation;
pub mod pricing;
pub mod types;
pub mod validation_constants;
pub mod volume;

pub use booking::{booking_link, capacity_warning, BookingRequest, ServiceType};
pub use errors::{PriceLevel, ValidationError};
pub use estimator::{
    adjust_pcpl, appointment_range, calculate_all, client_range, lead_range, revenue_range,
    AdjustedPcpl, CalculationResult, CalculatorInputs, CountRange, RevenueRange,
};
pub use global_config::{CaseStudyMultipliers, GlobalConfig, PricingBounds};
pub use industry::{CatalogError, IndustryBenchmark, IndustryCatalog};
pub use pricing::validate_pricing;
pub use types::*;
pub use volume::{is_within_tam, max_volume};
