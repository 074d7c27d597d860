//! Serializable output of one estimator run

use crate::domain::presentation::{format_currency, format_number, format_percentage, format_range};
use crate::domain::{
    CalculationResult, CallCapacity, CaseStudyStrength, CloseRate, IndustryKey, ProspectVolume,
    ServiceType,
};
use serde::Serialize;

/// Something the agency should know about an estimate; never blocks it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    VolumeExceedsMarket {
        requested: ProspectVolume,
        suggested_cap: ProspectVolume,
    },
    CapacityExceeded {
        appointments_max: u64,
        capacity: CallCapacity,
    },
    VolumeBelowMinimum {
        requested: ProspectVolume,
        minimum: u64,
    },
    CapacityOutsideRange {
        capacity: CallCapacity,
        min: u32,
        max: u32,
    },
    CloseRateNotOffered {
        close_rate: CloseRate,
        options: Vec<CloseRate>,
    },
}

/// Display strings for the headline numbers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EstimateSummary {
    pub prospects_per_lead: String,
    pub leads: String,
    pub appointments: String,
    pub clients: String,
    pub monthly_revenue: String,
    pub annual_revenue: String,
    pub close_rate: String,
}

impl EstimateSummary {
    pub fn new(result: &CalculationResult, close_rate: CloseRate) -> Self {
        let pcpl = &result.pcpl;
        let revenue = &result.revenue;
        Self {
            prospects_per_lead: format!(
                "1 lead per {} to {} prospects (mid-point {})",
                pcpl.min_adj.round(),
                pcpl.max_adj.round(),
                pcpl.mid.round()
            ),
            leads: format_range(result.leads.min, result.leads.max, format_number),
            appointments: format_range(
                result.appointments.min,
                result.appointments.max,
                format_number,
            ),
            clients: format_range(result.clients.min, result.clients.max, format_number),
            monthly_revenue: format_range(revenue.mrr_low, revenue.mrr_high, format_currency),
            annual_revenue: format_range(revenue.annual_low, revenue.annual_high, format_currency),
            close_rate: format_percentage(close_rate.into_inner()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EstimateReport {
    pub industry: IndustryKey,
    pub industry_name: String,
    pub service_type: ServiceType,
    pub case_study_strength: CaseStudyStrength,
    pub prospects_per_month: ProspectVolume,
    pub result: CalculationResult,
    pub summary: EstimateSummary,
    pub booking_link: String,
    pub advisories: Vec<Advisory>,
}
