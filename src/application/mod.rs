//! Application services and business logic orchestration
//!
//! This module ties the loaded reference data, the validated scenario and
//! the estimator together into a report.

pub mod app;
pub mod report;

pub use app::Application;
pub use report::{Advisory, EstimateReport, EstimateSummary};
