//! Process-wide estimator configuration
//!
//! A `GlobalConfig` is loaded once and then passed explicitly into every
//! calculation. Deserialization validates each bounded field through the
//! newtypes in [`crate::domain::types`].

use crate::domain::types::{
    CallCapacity, CaseStudyStrength, CloseRate, ConversionRate, Multiplier, Pcpl, Price,
    ProspectVolume, TouchesPerBusiness,
};
use crate::domain::validation_constants::fallback;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// PCPL multiplier per case-study tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaseStudyMultipliers {
    pub none: Multiplier,
    pub some: Multiplier,
    pub strong: Multiplier,
}

impl CaseStudyMultipliers {
    pub fn for_strength(&self, strength: CaseStudyStrength) -> Multiplier {
        match strength {
            CaseStudyStrength::None => self.none,
            CaseStudyStrength::Some => self.some,
            CaseStudyStrength::Strong => self.strong,
        }
    }
}

/// Bounds of the monthly outreach volume selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeSlider {
    pub min: u64,
    pub max_default: u64,
    pub default: u64,
}

/// Bounds of the monthly sales-call capacity selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacitySlider {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl VolumeSlider {
    /// The upper end is industry-specific, see `max_volume`
    pub fn admits(&self, prospects: ProspectVolume) -> bool {
        prospects.into_inner() >= self.min
    }
}

impl CapacitySlider {
    pub fn admits(&self, capacity: CallCapacity) -> bool {
        (self.min..=self.max).contains(&capacity.into_inner())
    }
}

/// Accepted retainer price range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingBounds {
    pub min: Price,
    pub max: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalConfig {
    pub lead_to_appointment_rate: ConversionRate,
    pub max_touches_per_business: TouchesPerBusiness,
    pub case_study_multipliers: CaseStudyMultipliers,
    pub default_pcpl_min: Pcpl,
    pub default_pcpl_max: Pcpl,
    pub volume_slider: VolumeSlider,
    pub capacity_slider: CapacitySlider,
    pub close_rate_options: Vec<CloseRate>,
    pub close_rate_default: CloseRate,
    pub pricing: PricingBounds,
    /// Scheduling page that receives the estimate as query parameters
    #[serde(rename = "calendly_url")]
    pub scheduling_url: String,
}

impl GlobalConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn offers_close_rate(&self, close_rate: CloseRate) -> bool {
        self.close_rate_options.contains(&close_rate)
    }

    /// Built-in configuration substituted when the configuration document
    /// is missing or invalid
    pub fn fallback() -> Self {
        Self {
            lead_to_appointment_rate: ConversionRate::try_new(fallback::LEAD_TO_APPOINTMENT_RATE)
                .expect("Fallback lead-to-appointment rate is valid"),
            max_touches_per_business: TouchesPerBusiness::try_new(
                fallback::MAX_TOUCHES_PER_BUSINESS,
            )
            .expect("Fallback touches per business is valid"),
            case_study_multipliers: CaseStudyMultipliers {
                none: Multiplier::try_new(fallback::MULTIPLIER_NONE)
                    .expect("Fallback multiplier is valid"),
                some: Multiplier::try_new(fallback::MULTIPLIER_SOME)
                    .expect("Fallback multiplier is valid"),
                strong: Multiplier::try_new(fallback::MULTIPLIER_STRONG)
                    .expect("Fallback multiplier is valid"),
            },
            default_pcpl_min: Pcpl::try_new(fallback::DEFAULT_PCPL_MIN)
                .expect("Fallback PCPL minimum is valid"),
            default_pcpl_max: Pcpl::try_new(fallback::DEFAULT_PCPL_MAX)
                .expect("Fallback PCPL maximum is valid"),
            volume_slider: VolumeSlider {
                min: fallback::VOLUME_MIN,
                max_default: fallback::VOLUME_MAX_DEFAULT,
                default: fallback::VOLUME_DEFAULT,
            },
            capacity_slider: CapacitySlider {
                min: fallback::CAPACITY_MIN,
                max: fallback::CAPACITY_MAX,
                default: fallback::CAPACITY_DEFAULT,
            },
            close_rate_options: fallback::CLOSE_RATE_OPTIONS
                .iter()
                .map(|rate| CloseRate::try_new(*rate).expect("Fallback close rate is valid"))
                .collect(),
            close_rate_default: CloseRate::try_new(fallback::CLOSE_RATE_DEFAULT)
                .expect("Fallback close rate is valid"),
            pricing: PricingBounds {
                min: Price::try_new(Decimal::from(fallback::PRICE_MIN))
                    .expect("Fallback minimum price is valid"),
                max: Price::try_new(Decimal::from(fallback::PRICE_MAX))
                    .expect("Fallback maximum price is valid"),
            },
            scheduling_url: fallback::SCHEDULING_URL.to_string(),
        }
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self::fallback()
    }
}
