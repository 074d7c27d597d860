//! Error types for boundary validation of estimator inputs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which end of a price range a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceLevel {
    Low,
    High,
}

impl fmt::Display for PriceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceLevel::Low => write!(f, "Low"),
            PriceLevel::High => write!(f, "High"),
        }
    }
}

/// Errors raised while turning raw caller input into estimator inputs
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{level} price must be a positive amount, got {value}")]
    InvalidPrice { level: PriceLevel, value: Decimal },

    #[error("{level} price must be between ${min} and ${max}")]
    PriceOutOfRange {
        level: PriceLevel,
        min: Decimal,
        max: Decimal,
    },

    #[error("High price must be greater than or equal to low price")]
    PriceRangeInverted,

    #[error("Close rate must be greater than 0 and at most 1, got {0}")]
    InvalidCloseRate(f64),

    #[error("Sales capacity must be at least one call per month")]
    InvalidCapacity,

    #[error("Invalid industry key: {0:?}")]
    InvalidIndustryKey(String),
}
