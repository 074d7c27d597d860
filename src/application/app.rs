use crate::application::report::{Advisory, EstimateReport, EstimateSummary};
use crate::config::{ScenarioSettings, Settings};
use crate::domain::{
    booking_link, calculate_all, capacity_warning, is_within_tam, BookingRequest,
    CalculatorInputs, CallCapacity, CloseRate, GlobalConfig, IndustryCatalog, IndustryKey, Price,
    PriceLevel, ProspectVolume,
};
use crate::infrastructure::log_messages::{advisories, application};
use crate::infrastructure::{load_global_config, load_industries};
use crate::{Error, Result};
use tracing::{info, instrument, warn};

/// Main application struct that holds the loaded reference data and runs
/// the configured scenario through the estimator
pub struct Application {
    settings: Settings,
    global_config: GlobalConfig,
    catalog: IndustryCatalog,
}

impl Application {
    #[instrument]
    pub async fn new() -> Result<Self> {
        let settings = Settings::new()?;
        info!("{}", application::SETTINGS_LOADED);
        Ok(Self::with_settings(settings).await)
    }

    /// Load the reference data named in `settings`; missing or invalid
    /// files fall back to built-in defaults
    pub async fn with_settings(settings: Settings) -> Self {
        let global_config = load_global_config(&settings.data.global_config_path).await;
        let catalog = load_industries(&settings.data.industries_path).await;
        Self::from_parts(settings, global_config, catalog)
    }

    pub fn from_parts(
        settings: Settings,
        global_config: GlobalConfig,
        catalog: IndustryCatalog,
    ) -> Self {
        Self {
            settings,
            global_config,
            catalog,
        }
    }

    /// Estimate the scenario from the loaded settings
    pub fn estimate(&self) -> Result<EstimateReport> {
        self.estimate_scenario(&self.settings.scenario)
    }

    #[instrument(skip_all, fields(industry = %scenario.industry_key))]
    pub fn estimate_scenario(&self, scenario: &ScenarioSettings) -> Result<EstimateReport> {
        let config = &self.global_config;
        let key = IndustryKey::parse(scenario.industry_key.as_str())?;
        let industry = self
            .catalog
            .find_by_key(key.as_ref())
            .ok_or_else(|| Error::not_found(format!("industry '{key}'")))?;

        let price_low = Price::for_level(scenario.price_low, PriceLevel::Low)?;
        let price_high = Price::for_level(scenario.price_high, PriceLevel::High)?;
        let close_rate = CloseRate::parse(scenario.close_rate)?;
        let capacity = CallCapacity::parse(scenario.capacity_calls_per_month)?;
        let prospects = ProspectVolume::new(scenario.prospects_per_month);

        let mut advisories_raised = Self::range_advisories(config, prospects, capacity, close_rate);
        if !is_within_tam(
            prospects,
            industry.estimated_business_count,
            config.max_touches_per_business,
        ) {
            let suggested_cap = industry.suggested_volume_cap(config);
            warn!(
                requested = %prospects,
                suggested_cap = %suggested_cap,
                "{}",
                advisories::VOLUME_EXCEEDS_TAM
            );
            advisories_raised.push(Advisory::VolumeExceedsMarket {
                requested: prospects,
                suggested_cap,
            });
        }

        let inputs = CalculatorInputs::try_new(
            industry,
            scenario.case_study_strength,
            (price_low, price_high),
            close_rate,
            prospects,
            &config.pricing,
        )?;
        let result = calculate_all(&inputs, config);

        if capacity_warning(&result.appointments, capacity) {
            warn!(
                appointments_max = result.appointments.max,
                capacity = %capacity,
                "{}",
                advisories::CAPACITY_EXCEEDED
            );
            advisories_raised.push(Advisory::CapacityExceeded {
                appointments_max: result.appointments.max,
                capacity,
            });
        }

        let link = booking_link(
            &config.scheduling_url,
            &BookingRequest {
                industry: &industry.key,
                service_type: scenario.service_type,
                prospects,
                result: &result,
                price_low,
                price_high,
                close_rate,
            },
        );

        info!(
            leads_mid = result.leads.mid,
            clients_mid = result.clients.mid,
            mrr_high = %result.revenue.mrr_high,
            "{}",
            application::ESTIMATE_READY
        );

        Ok(EstimateReport {
            industry: industry.key.clone(),
            industry_name: industry.display_name.clone(),
            service_type: scenario.service_type,
            case_study_strength: scenario.case_study_strength,
            prospects_per_month: prospects,
            summary: EstimateSummary::new(&result, close_rate),
            result,
            booking_link: link,
            advisories: advisories_raised,
        })
    }

    /// Scenario values the configured selectors would not offer. These are
    /// reported but the estimate still runs.
    fn range_advisories(
        config: &GlobalConfig,
        prospects: ProspectVolume,
        capacity: CallCapacity,
        close_rate: CloseRate,
    ) -> Vec<Advisory> {
        let mut raised = Vec::new();

        if !config.volume_slider.admits(prospects) {
            warn!(
                requested = %prospects,
                minimum = config.volume_slider.min,
                "{}",
                advisories::VOLUME_BELOW_MINIMUM
            );
            raised.push(Advisory::VolumeBelowMinimum {
                requested: prospects,
                minimum: config.volume_slider.min,
            });
        }

        if !config.capacity_slider.admits(capacity) {
            warn!(
                capacity = %capacity,
                min = config.capacity_slider.min,
                max = config.capacity_slider.max,
                "{}",
                advisories::CAPACITY_OUTSIDE_RANGE
            );
            raised.push(Advisory::CapacityOutsideRange {
                capacity,
                min: config.capacity_slider.min,
                max: config.capacity_slider.max,
            });
        }

        if !config.offers_close_rate(close_rate) {
            warn!(close_rate = %close_rate, "{}", advisories::CLOSE_RATE_NOT_OFFERED);
            raised.push(Advisory::CloseRateNotOffered {
                close_rate,
                options: config.close_rate_options.clone(),
            });
        }

        raised
    }

    #[instrument(skip(self))]
    pub async fn run(self) -> Result<()> {
        let report = self.estimate()?;
        println!("{}", serde_json::to_string_pretty(&report)?);
        info!("{}", application::FINISHED);
        Ok(())
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn global_config(&self) -> &GlobalConfig {
        &self.global_config
    }

    pub fn catalog(&self) -> &IndustryCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DataSettings, LoggingSettings};
    use crate::domain::config_types::{LogFormat, LogLevel};
    use crate::domain::{CaseStudyStrength, ServiceType, ValidationError};
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    const DATASET: &str = "\
industry_key,industry_display_name,industry_plural_label,estimated_business_count,pcpl_min,pcpl_max
dentists,Dentist,dentists,135000,450,650
florists,Florist,florists,1000,,
";

    fn scenario() -> ScenarioSettings {
        ScenarioSettings {
            industry_key: "dentists".to_string(),
            service_type: ServiceType::Seo,
            case_study_strength: CaseStudyStrength::Some,
            price_low: Decimal::from(1_000),
            price_high: Decimal::from(3_000),
            close_rate: 0.2,
            prospects_per_month: 10_000,
            capacity_calls_per_month: 10,
        }
    }

    fn app() -> Application {
        let settings = Settings {
            data: DataSettings {
                industries_path: PathBuf::from("unused.csv"),
                global_config_path: PathBuf::from("unused.json"),
            },
            logging: LoggingSettings {
                level: LogLevel::Info,
                format: LogFormat::Compact,
            },
            scenario: scenario(),
        };
        Application::from_parts(
            settings,
            GlobalConfig::fallback(),
            IndustryCatalog::from_csv(DATASET).unwrap(),
        )
    }

    #[test]
    fn test_estimates_configured_scenario() {
        let report = app().estimate().unwrap();

        assert_eq!(report.industry.as_ref(), "dentists");
        assert_eq!(report.result.leads.mid, 18);
        assert_eq!(report.result.clients.max, 2);
        assert_eq!(report.result.revenue.annual_high, Decimal::from(72_000));
        assert_eq!(report.summary.monthly_revenue, "$1,000 to $6,000");
        assert!(report.advisories.is_empty());
        assert!(report
            .booking_link
            .starts_with("https://calendly.com/your-link?industry=dentists&"));
    }

    #[test]
    fn test_unknown_industry_is_not_found() {
        let mut scenario = scenario();
        scenario.industry_key = "astronauts".to_string();

        assert!(matches!(
            app().estimate_scenario(&scenario),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_zero_price_is_rejected() {
        let mut scenario = scenario();
        scenario.price_low = Decimal::ZERO;

        assert!(matches!(
            app().estimate_scenario(&scenario),
            Err(Error::Validation(ValidationError::InvalidPrice {
                level: PriceLevel::Low,
                ..
            }))
        ));
    }

    #[test]
    fn test_prices_outside_configured_bounds_are_rejected() {
        let mut scenario = scenario();
        scenario.price_high = Decimal::from(75_000);

        assert!(matches!(
            app().estimate_scenario(&scenario),
            Err(Error::Validation(ValidationError::PriceOutOfRange {
                level: PriceLevel::High,
                ..
            }))
        ));
    }

    #[test]
    fn test_invalid_close_rate_is_rejected() {
        let mut scenario = scenario();
        scenario.close_rate = 0.0;

        assert!(matches!(
            app().estimate_scenario(&scenario),
            Err(Error::Validation(ValidationError::InvalidCloseRate(_)))
        ));
    }

    #[test]
    fn test_volume_beyond_market_warns_but_still_estimates() {
        let mut scenario = scenario();
        scenario.industry_key = "florists".to_string();
        scenario.prospects_per_month = 5_000;

        let report = app().estimate_scenario(&scenario).unwrap();

        assert_eq!(
            report.advisories,
            vec![Advisory::VolumeExceedsMarket {
                requested: ProspectVolume::new(5_000),
                suggested_cap: ProspectVolume::new(2_000),
            }]
        );
        // default PCPL 450..650 applies to the florists row
        assert_eq!(report.result.pcpl.min_adj, 450.0);
        assert_eq!(report.result.leads.max, 11);
    }

    #[test]
    fn test_capacity_advisory() {
        let mut scenario = scenario();
        scenario.prospects_per_month = 50_000;
        scenario.capacity_calls_per_month = 4;

        let report = app().estimate_scenario(&scenario).unwrap();

        // 50000 / 450 = 111 leads at best, 44 appointments > 4 * 1.5
        assert_eq!(report.result.appointments.max, 44);
        assert!(report.advisories.contains(&Advisory::CapacityExceeded {
            appointments_max: 44,
            capacity: CallCapacity::try_new(4).unwrap(),
        }));
    }

    #[test]
    fn test_values_outside_configured_ranges_are_reported() {
        let mut scenario = scenario();
        scenario.prospects_per_month = 1_000;
        scenario.capacity_calls_per_month = 60;
        scenario.close_rate = 0.25;

        let report = app().estimate_scenario(&scenario).unwrap();

        assert_eq!(
            report.advisories,
            vec![
                Advisory::VolumeBelowMinimum {
                    requested: ProspectVolume::new(1_000),
                    minimum: 5_000,
                },
                Advisory::CapacityOutsideRange {
                    capacity: CallCapacity::try_new(60).unwrap(),
                    min: 4,
                    max: 40,
                },
                Advisory::CloseRateNotOffered {
                    close_rate: CloseRate::try_new(0.25).unwrap(),
                    options: GlobalConfig::fallback().close_rate_options,
                },
            ]
        );
        assert_eq!(report.result.leads.mid, 2);
    }
}
