//! Funnel estimation pipeline
//!
//! Projects prospects → leads → appointments → clients → revenue. Each stage
//! is a pure function of the previous stage's output plus configuration, and
//! [`calculate_all`] composes them in order. Given its validated inputs the
//! pipeline is total: it cannot fail and has no side effects beyond a debug
//! trace event.

use crate::domain::errors::ValidationError;
use crate::domain::global_config::{GlobalConfig, PricingBounds};
use crate::domain::industry::IndustryBenchmark;
use crate::domain::pricing::validate_pricing;
use crate::domain::types::{
    CaseStudyStrength, CloseRate, ConversionRate, Pcpl, Price, ProspectVolume,
};
use crate::domain::validation_constants::{clients, revenue};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything a single estimate needs besides the global configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorInputs<'a> {
    pub industry: &'a IndustryBenchmark,
    pub case_study_strength: CaseStudyStrength,
    pub price_low: Price,
    pub price_high: Price,
    pub close_rate: CloseRate,
    pub prospects_per_month: ProspectVolume,
}

impl<'a> CalculatorInputs<'a> {
    /// Assemble inputs whose price pair has been checked against `bounds`
    pub fn try_new(
        industry: &'a IndustryBenchmark,
        case_study_strength: CaseStudyStrength,
        (price_low, price_high): (Price, Price),
        close_rate: CloseRate,
        prospects_per_month: ProspectVolume,
        bounds: &PricingBounds,
    ) -> Result<Self, ValidationError> {
        validate_pricing(price_low, price_high, bounds)?;
        Ok(Self {
            industry,
            case_study_strength,
            price_low,
            price_high,
            close_rate,
            prospects_per_month,
        })
    }
}

/// PCPL bounds after the case-study multiplier has been applied
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdjustedPcpl {
    pub min_adj: f64,
    pub max_adj: f64,
    pub mid: f64,
}

impl AdjustedPcpl {
    pub fn from_bounds(min: Pcpl, max: Pcpl) -> Self {
        let min_adj = min.into_inner();
        let max_adj = max.into_inner();
        Self {
            min_adj,
            max_adj,
            mid: (min_adj + max_adj) / 2.0,
        }
    }
}

/// Low / mid / high projection of a funnel stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    pub min: u64,
    pub mid: u64,
    pub max: u64,
}

impl CountRange {
    fn map(&self, f: impl Fn(u64) -> u64) -> Self {
        Self {
            min: f(self.min),
            mid: f(self.mid),
            max: f(self.max),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueRange {
    pub mrr_low: Decimal,
    pub mrr_high: Decimal,
    pub annual_low: Decimal,
    pub annual_high: Decimal,
}

/// Full funnel projection; every field is derived from the inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub pcpl: AdjustedPcpl,
    pub leads: CountRange,
    pub appointments: CountRange,
    pub clients: CountRange,
    pub revenue: RevenueRange,
}

/// Round half away from zero; negative and NaN inputs clamp to 0
fn round_count(value: f64) -> u64 {
    value.round() as u64
}

/// Scale the industry's PCPL bounds by the case-study multiplier.
///
/// Weaker proof (multiplier > 1) means more prospects per lead.
pub fn adjust_pcpl(
    industry: &IndustryBenchmark,
    strength: CaseStudyStrength,
    config: &GlobalConfig,
) -> AdjustedPcpl {
    let multiplier = config
        .case_study_multipliers
        .for_strength(strength)
        .into_inner();
    let (base_min, base_max) = industry.pcpl_bounds(config);

    let min_adj = base_min.into_inner() * multiplier;
    let max_adj = base_max.into_inner() * multiplier;

    AdjustedPcpl {
        min_adj,
        max_adj,
        mid: (min_adj + max_adj) / 2.0,
    }
}

/// The worst-case ratio (highest PCPL) yields the fewest leads. The middle
/// estimate divides by the mean PCPL, which is not the mean of the two
/// lead bounds.
pub fn lead_range(prospects: ProspectVolume, pcpl: &AdjustedPcpl) -> CountRange {
    let prospects = prospects.into_inner() as f64;
    CountRange {
        min: round_count(prospects / pcpl.max_adj),
        mid: round_count(prospects / pcpl.mid),
        max: round_count(prospects / pcpl.min_adj),
    }
}

pub fn appointment_range(leads: &CountRange, rate: ConversionRate) -> CountRange {
    let rate = rate.into_inner();
    leads.map(|count| round_count(count as f64 * rate))
}

/// Every bound is floored at one modeled client.
pub fn client_range(appointments: &CountRange, close_rate: CloseRate) -> CountRange {
    let close_rate = close_rate.into_inner();
    appointments.map(|count| {
        round_count(count as f64 * close_rate).max(clients::MINIMUM_MODELED_CLIENTS)
    })
}

/// MRR is smoothed to the nearest hundred currency units before
/// annualizing. Amounts beyond `Decimal::MAX` saturate.
pub fn revenue_range(clients: &CountRange, price_low: Price, price_high: Price) -> RevenueRange {
    let monthly = |count: u64, price: Price| {
        round_to_unit(saturating_mul(Decimal::from(count), price.into_inner()))
    };
    let mrr_low = monthly(clients.min, price_low);
    let mrr_high = monthly(clients.max, price_high);
    let months = Decimal::from(revenue::MONTHS_PER_YEAR);

    RevenueRange {
        mrr_low,
        mrr_high,
        annual_low: saturating_mul(mrr_low, months),
        annual_high: saturating_mul(mrr_high, months),
    }
}

fn saturating_mul(lhs: Decimal, rhs: Decimal) -> Decimal {
    lhs.checked_mul(rhs).unwrap_or(Decimal::MAX)
}

fn round_to_unit(amount: Decimal) -> Decimal {
    let unit = Decimal::from(revenue::MRR_ROUNDING_UNIT);
    let units = (amount / unit).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    saturating_mul(units, unit)
}

/// Run the whole funnel projection for one set of inputs
pub fn calculate_all(inputs: &CalculatorInputs<'_>, config: &GlobalConfig) -> CalculationResult {
    let pcpl = adjust_pcpl(inputs.industry, inputs.case_study_strength, config);
    let leads = lead_range(inputs.prospects_per_month, &pcpl);
    let appointments = appointment_range(&leads, config.lead_to_appointment_rate);
    let clients = client_range(&appointments, inputs.close_rate);
    let revenue = revenue_range(&clients, inputs.price_low, inputs.price_high);

    debug!(
        industry = %inputs.industry.key,
        case_study_strength = %inputs.case_study_strength,
        prospects = %inputs.prospects_per_month,
        leads_mid = leads.mid,
        clients_mid = clients.mid,
        mrr_low = %revenue.mrr_low,
        mrr_high = %revenue.mrr_high,
        "Funnel estimate calculated"
    );

    CalculationResult {
        pcpl,
        leads,
        appointments,
        clients,
        revenue,
    }
}
