//! Funnel Estimator - outbound campaign projections for agencies
//!
//! Turns a monthly prospect volume, industry benchmarks and the agency's
//! pricing into lead, appointment, client and revenue ranges.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::{Application, EstimateReport};
pub use domain::calculate_all;
pub use error::{Error, Result};
