//! Validated domain types for the funnel estimator
//!
//! Every bounded scalar that reaches the estimator is wrapped in a newtype
//! so the pipeline itself never has to re-check its domain.

use crate::domain::errors::{PriceLevel, ValidationError};
use crate::domain::validation_constants::industry::MAX_KEY_LENGTH;
use nutype::nutype;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier of an industry benchmark record (e.g. "dentists")
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_KEY_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct IndustryKey(String);

impl IndustryKey {
    pub fn parse(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = raw.into();
        Self::try_new(raw.clone()).map_err(|_| ValidationError::InvalidIndustryKey(raw))
    }
}

/// Prospects per lead: how many prospects must be contacted to produce one lead
///
/// Always finite and strictly positive, so it is safe as a divisor.
#[nutype(
    validate(finite, greater = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct Pcpl(f64);

/// Multiplier applied to PCPL bounds for a case-study tier
#[nutype(
    validate(finite, greater = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct Multiplier(f64);

/// Fraction of leads that book an appointment
#[nutype(
    validate(finite, greater = 0.0, less_or_equal = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct ConversionRate(f64);

/// Fraction of appointments that sign as clients, in (0, 1]
#[nutype(
    validate(finite, greater = 0.0, less_or_equal = 1.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)
)]
pub struct CloseRate(f64);

impl CloseRate {
    pub fn parse(raw: f64) -> Result<Self, ValidationError> {
        Self::try_new(raw).map_err(|_| ValidationError::InvalidCloseRate(raw))
    }
}

/// Monthly retainer price in currency units
///
/// Zero and negative prices are rejected rather than defaulted.
#[nutype(
    validate(predicate = |price| *price > Decimal::ZERO),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct Price(Decimal);

impl Price {
    /// Validate a raw amount for one end of a price range
    pub fn for_level(raw: Decimal, level: PriceLevel) -> Result<Self, ValidationError> {
        Self::try_new(raw).map_err(|_| ValidationError::InvalidPrice { level, value: raw })
    }
}

/// Number of prospects contacted per month
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRef,
    Display
))]
pub struct ProspectVolume(u64);

/// Estimated number of reachable businesses in an industry (TAM)
#[nutype(derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRef,
    Display
))]
pub struct BusinessCount(u64);

/// Maximum outreach touches allowed per business
#[nutype(
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct TouchesPerBusiness(u64);

/// Sales calls the agency can take per month
#[nutype(
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct CallCapacity(u32);

impl CallCapacity {
    pub fn parse(raw: u32) -> Result<Self, ValidationError> {
        Self::try_new(raw).map_err(|_| ValidationError::InvalidCapacity)
    }
}

/// Qualitative rating of the agency's proof of past results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaseStudyStrength {
    None,
    #[default]
    Some,
    Strong,
}

impl CaseStudyStrength {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStudyStrength::None => "none",
            CaseStudyStrength::Some => "some",
            CaseStudyStrength::Strong => "strong",
        }
    }
}

impl fmt::Display for CaseStudyStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CaseStudyStrength {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(CaseStudyStrength::None),
            "some" => Ok(CaseStudyStrength::Some),
            "strong" => Ok(CaseStudyStrength::Strong),
            _ => Err(format!("Invalid case study strength: {s}")),
        }
    }
}
