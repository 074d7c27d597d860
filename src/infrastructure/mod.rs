//! Infrastructure layer for the funnel estimator
//!
//! This module contains the boundary code that reads reference data from
//! disk, plus the shared log message catalogue.

pub mod loader;
pub mod log_messages;

pub use loader::{load_global_config, load_industries, read_global_config, read_industries};
