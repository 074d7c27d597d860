//! Hand-off from an estimate to a sales conversation
//!
//! Builds the scheduling link that carries the estimate to the booking page
//! and flags estimates the agency could not staff.

use crate::domain::estimator::{CalculationResult, CountRange};
use crate::domain::types::{CallCapacity, CloseRate, IndustryKey, Price, ProspectVolume};
use crate::domain::validation_constants::capacity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Service the agency sells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ServiceType {
    #[default]
    #[serde(rename = "SEO")]
    Seo,
    #[serde(rename = "Google Ads")]
    GoogleAds,
    #[serde(rename = "Website design or dev")]
    WebsiteDesign,
    #[serde(rename = "Multi service")]
    MultiService,
    #[serde(rename = "Other")]
    Other,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Seo => "SEO",
            ServiceType::GoogleAds => "Google Ads",
            ServiceType::WebsiteDesign => "Website design or dev",
            ServiceType::MultiService => "Multi service",
            ServiceType::Other => "Other",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            ServiceType::Seo,
            ServiceType::GoogleAds,
            ServiceType::WebsiteDesign,
            ServiceType::MultiService,
            ServiceType::Other,
        ]
        .into_iter()
        .find(|service| service.as_str().eq_ignore_ascii_case(s.trim()))
        .ok_or_else(|| format!("Invalid service type: {s}"))
    }
}

/// True when the best case books well past what the agency can take
pub fn capacity_warning(appointments: &CountRange, call_capacity: CallCapacity) -> bool {
    appointments.max as f64 > f64::from(call_capacity.into_inner()) * capacity::WARNING_FACTOR
}

/// The estimate details forwarded to the scheduling page
#[derive(Debug, Clone)]
pub struct BookingRequest<'a> {
    pub industry: &'a IndustryKey,
    pub service_type: ServiceType,
    pub prospects: ProspectVolume,
    pub result: &'a CalculationResult,
    pub price_low: Price,
    pub price_high: Price,
    pub close_rate: CloseRate,
}

impl BookingRequest<'_> {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let range = |counts: &CountRange| format!("{}-{}", counts.min, counts.max);
        vec![
            ("industry", self.industry.to_string()),
            ("service_type", self.service_type.to_string()),
            ("prospects", self.prospects.to_string()),
            ("leads_range", range(&self.result.leads)),
            ("appointments_range", range(&self.result.appointments)),
            ("clients_range", range(&self.result.clients)),
            ("price_low", self.price_low.to_string()),
            ("price_high", self.price_high.to_string()),
            ("close_rate", self.close_rate.to_string()),
        ]
    }
}

/// Append the estimate to the scheduling URL as percent-encoded query
/// parameters
pub fn booking_link(scheduling_url: &str, request: &BookingRequest<'_>) -> String {
    let query = request
        .query_pairs()
        .into_iter()
        .map(|(name, value)| format!("{name}={}", urlencoding::encode(&value)))
        .collect::<Vec<_>>()
        .join("&");
    let separator = if scheduling_url.contains('?') { '&' } else { '?' };
    format!("{scheduling_url}{separator}{query}")
}
