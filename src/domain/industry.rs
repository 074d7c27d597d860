//! Industry benchmark records and the catalog that holds them
//!
//! The catalog is parsed from a flat, comma-separated dataset whose first
//! line names the columns. Columns are located by name, so their order in
//! the file does not matter.

use crate::domain::global_config::GlobalConfig;
use crate::domain::types::{BusinessCount, IndustryKey, Pcpl, ProspectVolume};
use crate::domain::validation_constants::industry::MAX_LABEL_LENGTH;
use crate::domain::volume::max_volume;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Column names of the industry dataset
pub mod columns {
    pub const INDUSTRY_KEY: &str = "industry_key";
    pub const DISPLAY_NAME: &str = "industry_display_name";
    pub const PLURAL_LABEL: &str = "industry_plural_label";
    pub const BUSINESS_COUNT: &str = "estimated_business_count";
    pub const PCPL_MIN: &str = "pcpl_min";
    pub const PCPL_MAX: &str = "pcpl_max";
    pub const STARTER_VOLUME: &str = "starter_volume_default";
    pub const MAX_SUGGESTED_VOLUME: &str = "max_suggested_volume";
    pub const EXAMPLE_TEXT: &str = "example_text";
    pub const NOTES: &str = "notes";
}

/// Errors in the structure of an industry dataset
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Industry dataset is empty")]
    EmptyDataset,

    #[error("Industry dataset is missing required column: {0}")]
    MissingColumn(&'static str),
}

/// Immutable benchmark data for one industry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryBenchmark {
    pub key: IndustryKey,
    pub display_name: String,
    pub plural_label: String,
    pub estimated_business_count: BusinessCount,
    /// Absent when the dataset cell was blank, zero or malformed
    pub pcpl_min: Option<Pcpl>,
    pub pcpl_max: Option<Pcpl>,
    pub starter_volume_default: Option<ProspectVolume>,
    pub max_suggested_volume: Option<ProspectVolume>,
    pub example_text: Option<String>,
    pub notes: Option<String>,
}

impl IndustryBenchmark {
    pub fn new(
        key: IndustryKey,
        display_name: impl Into<String>,
        plural_label: impl Into<String>,
        estimated_business_count: BusinessCount,
    ) -> Self {
        Self {
            key,
            display_name: display_name.into(),
            plural_label: plural_label.into(),
            estimated_business_count,
            pcpl_min: None,
            pcpl_max: None,
            starter_volume_default: None,
            max_suggested_volume: None,
            example_text: None,
            notes: None,
        }
    }

    pub fn with_pcpl(mut self, pcpl_min: Option<Pcpl>, pcpl_max: Option<Pcpl>) -> Self {
        self.pcpl_min = pcpl_min;
        self.pcpl_max = pcpl_max;
        self
    }

    /// Base PCPL bounds, substituting each missing bound with the
    /// configured default independently
    pub fn pcpl_bounds(&self, config: &GlobalConfig) -> (Pcpl, Pcpl) {
        (
            self.pcpl_min.unwrap_or(config.default_pcpl_min),
            self.pcpl_max.unwrap_or(config.default_pcpl_max),
        )
    }

    /// Upper bound offered for monthly outreach volume.
    ///
    /// A curated `max_suggested_volume` from the dataset takes precedence
    /// over the cap derived from the addressable market.
    pub fn suggested_volume_cap(&self, config: &GlobalConfig) -> ProspectVolume {
        self.max_suggested_volume.unwrap_or_else(|| {
            max_volume(
                self.estimated_business_count,
                config.max_touches_per_business,
                config.volume_slider.max_default,
            )
        })
    }

    fn matches(&self, lowered_query: &str) -> bool {
        self.display_name.to_lowercase().contains(lowered_query)
            || self.plural_label.to_lowercase().contains(lowered_query)
            || self.key.as_ref().to_lowercase().contains(lowered_query)
    }
}

/// Positions of the known columns within a dataset header
struct ColumnLayout {
    key: usize,
    display_name: Option<usize>,
    plural_label: Option<usize>,
    business_count: Option<usize>,
    pcpl_min: Option<usize>,
    pcpl_max: Option<usize>,
    starter_volume: Option<usize>,
    max_suggested_volume: Option<usize>,
    example_text: Option<usize>,
    notes: Option<usize>,
}

impl ColumnLayout {
    fn from_header(header: &str) -> Result<Self, CatalogError> {
        let names: Vec<&str> = header.split(',').map(str::trim).collect();
        let position = |name: &str| names.iter().position(|candidate| *candidate == name);

        Ok(Self {
            key: position(columns::INDUSTRY_KEY)
                .ok_or(CatalogError::MissingColumn(columns::INDUSTRY_KEY))?,
            display_name: position(columns::DISPLAY_NAME),
            plural_label: position(columns::PLURAL_LABEL),
            business_count: position(columns::BUSINESS_COUNT),
            pcpl_min: position(columns::PCPL_MIN),
            pcpl_max: position(columns::PCPL_MAX),
            starter_volume: position(columns::STARTER_VOLUME),
            max_suggested_volume: position(columns::MAX_SUGGESTED_VOLUME),
            example_text: position(columns::EXAMPLE_TEXT),
            notes: position(columns::NOTES),
        })
    }

    fn parse_row(&self, line: &str) -> Option<IndustryBenchmark> {
        let cells: Vec<&str> = line.split(',').collect();
        let cell = |index: Option<usize>| {
            index
                .and_then(|i| cells.get(i))
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        let key = IndustryKey::try_new(cell(Some(self.key))?.to_string()).ok()?;
        let display_name = cell(self.display_name).filter(|name| is_label(name))?;
        let plural_label = cell(self.plural_label)
            .filter(|label| is_label(label))
            .unwrap_or(display_name)
            .to_string();
        let display_name = display_name.to_string();
        let business_count = cell(self.business_count)
            .and_then(parse_leading_integer)
            .unwrap_or_default();

        Some(IndustryBenchmark {
            key,
            display_name,
            plural_label,
            estimated_business_count: BusinessCount::new(business_count),
            pcpl_min: cell(self.pcpl_min).and_then(parse_pcpl),
            pcpl_max: cell(self.pcpl_max).and_then(parse_pcpl),
            starter_volume_default: cell(self.starter_volume)
                .and_then(parse_leading_integer)
                .map(ProspectVolume::new),
            max_suggested_volume: cell(self.max_suggested_volume)
                .and_then(parse_leading_integer)
                .map(ProspectVolume::new),
            example_text: cell(self.example_text).map(str::to_string),
            notes: cell(self.notes).map(str::to_string),
        })
    }
}

fn is_label(value: &str) -> bool {
    value.chars().count() <= MAX_LABEL_LENGTH
}

/// Parse the integer prefix of a cell: "450" and "450.7" both give 450,
/// while "", "-5" and "n/a" give nothing
fn parse_leading_integer(cell: &str) -> Option<u64> {
    let end = cell
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(cell.len());
    cell[..end].parse().ok()
}

/// Zero PCPL counts as absent so the configured default applies
fn parse_pcpl(cell: &str) -> Option<Pcpl> {
    parse_leading_integer(cell)
        .filter(|value| *value > 0)
        .and_then(|value| Pcpl::try_new(value as f64).ok())
}

/// All industry benchmarks available for selection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndustryCatalog {
    industries: Vec<IndustryBenchmark>,
}

impl IndustryCatalog {
    pub fn new(industries: Vec<IndustryBenchmark>) -> Self {
        Self { industries }
    }

    pub fn from_csv(content: &str) -> Result<Self, CatalogError> {
        let mut lines = content.lines().filter(|line| !line.trim().is_empty());
        let header = lines.next().ok_or(CatalogError::EmptyDataset)?;
        let layout = ColumnLayout::from_header(header)?;

        let mut industries = Vec::new();
        for (index, line) in lines.enumerate() {
            match layout.parse_row(line) {
                Some(industry) => {
                    if let (Some(min), Some(max)) = (industry.pcpl_min, industry.pcpl_max) {
                        if min > max {
                            warn!(
                                industry = %industry.key,
                                pcpl_min = %min,
                                pcpl_max = %max,
                                "Industry PCPL bounds are inverted"
                            );
                        }
                    }
                    industries.push(industry);
                }
                None => warn!(
                    row = index + 2,
                    "Skipping industry row without a usable key or display name"
                ),
            }
        }

        Ok(Self { industries })
    }

    pub fn len(&self) -> usize {
        self.industries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.industries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndustryBenchmark> {
        self.industries.iter()
    }

    /// Case-insensitive substring search over display name, plural label
    /// and key
    pub fn search(&self, query: &str) -> Vec<&IndustryBenchmark> {
        let lowered = query.trim().to_lowercase();
        self.industries
            .iter()
            .filter(|industry| industry.matches(&lowered))
            .collect()
    }

    pub fn find_by_key(&self, key: &str) -> Option<&IndustryBenchmark> {
        self.industries
            .iter()
            .find(|industry| industry.key.as_ref() == key)
    }
}
