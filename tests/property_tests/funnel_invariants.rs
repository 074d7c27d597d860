use funnel_estimator::domain::{
    calculate_all, is_within_tam, max_volume, BusinessCount, CalculationResult, CalculatorInputs,
    CaseStudyStrength, CloseRate, GlobalConfig, IndustryBenchmark, IndustryKey, Pcpl, Price,
    ProspectVolume, TouchesPerBusiness,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

pub mod generators {
    use super::*;

    /// Industries with a valid, ordered PCPL pair
    pub fn industry() -> impl Strategy<Value = IndustryBenchmark> {
        (1u64..2_000_000, 50u32..2_000, 0u32..2_000).prop_map(|(count, min, spread)| {
            IndustryBenchmark::new(
                IndustryKey::try_new("generated".to_string()).unwrap(),
                "Generated",
                "generated businesses",
                BusinessCount::new(count),
            )
            .with_pcpl(
                Some(Pcpl::try_new(f64::from(min)).unwrap()),
                Some(Pcpl::try_new(f64::from(min + spread)).unwrap()),
            )
        })
    }

    pub fn strength() -> impl Strategy<Value = CaseStudyStrength> {
        prop_oneof![
            Just(CaseStudyStrength::None),
            Just(CaseStudyStrength::Some),
            Just(CaseStudyStrength::Strong),
        ]
    }

    pub fn close_rate() -> impl Strategy<Value = CloseRate> {
        (1u32..=100).prop_map(|percent| CloseRate::try_new(f64::from(percent) / 100.0).unwrap())
    }

    /// Ordered whole-unit price pair
    pub fn prices() -> impl Strategy<Value = (Price, Price)> {
        (200i64..20_000, 0i64..30_000).prop_map(|(low, spread)| {
            (
                Price::try_new(Decimal::from(low)).unwrap(),
                Price::try_new(Decimal::from(low + spread)).unwrap(),
            )
        })
    }

    pub fn prospects() -> impl Strategy<Value = ProspectVolume> {
        (0u64..1_000_000).prop_map(ProspectVolume::new)
    }
}

use generators::*;

fn estimate(
    industry: &IndustryBenchmark,
    strength: CaseStudyStrength,
    close_rate: CloseRate,
    (price_low, price_high): (Price, Price),
    prospects: ProspectVolume,
) -> CalculationResult {
    let inputs = CalculatorInputs {
        industry,
        case_study_strength: strength,
        price_low,
        price_high,
        close_rate,
        prospects_per_month: prospects,
    };
    calculate_all(&inputs, &GlobalConfig::fallback())
}

proptest! {
    #[test]
    fn prop_every_range_is_ordered(
        industry in industry(),
        strength in strength(),
        close_rate in close_rate(),
        prices in prices(),
        prospects in prospects(),
    ) {
        let result = estimate(&industry, strength, close_rate, prices, prospects);

        prop_assert!(result.pcpl.min_adj <= result.pcpl.mid);
        prop_assert!(result.pcpl.mid <= result.pcpl.max_adj);
        for range in [result.leads, result.appointments, result.clients] {
            prop_assert!(range.min <= range.mid, "{:?}", range);
            prop_assert!(range.mid <= range.max, "{:?}", range);
        }
        prop_assert!(result.revenue.mrr_low <= result.revenue.mrr_high);
    }

    #[test]
    fn prop_funnel_narrows_at_each_stage(
        industry in industry(),
        strength in strength(),
        prices in prices(),
        prospects in prospects(),
    ) {
        let full_close = CloseRate::try_new(1.0).unwrap();
        let result = estimate(&industry, strength, full_close, prices, prospects);

        prop_assert!(result.appointments.max <= result.leads.max);
        prop_assert!(result.leads.max <= prospects.into_inner());
    }

    #[test]
    fn prop_at_least_one_client_is_modeled(
        industry in industry(),
        strength in strength(),
        close_rate in close_rate(),
        prices in prices(),
        prospects in prospects(),
    ) {
        let result = estimate(&industry, strength, close_rate, prices, prospects);

        prop_assert!(result.clients.min >= 1);
        prop_assert!(result.revenue.mrr_high > Decimal::ZERO);
    }

    #[test]
    fn prop_revenue_is_smoothed_and_annualized(
        industry in industry(),
        strength in strength(),
        close_rate in close_rate(),
        prices in prices(),
        prospects in prospects(),
    ) {
        let revenue = estimate(&industry, strength, close_rate, prices, prospects).revenue;
        let hundred = Decimal::from(100);
        let months = Decimal::from(12);

        prop_assert_eq!(revenue.mrr_low % hundred, Decimal::ZERO);
        prop_assert_eq!(revenue.mrr_high % hundred, Decimal::ZERO);
        prop_assert_eq!(revenue.annual_low, revenue.mrr_low * months);
        prop_assert_eq!(revenue.annual_high, revenue.mrr_high * months);
    }

    #[test]
    fn prop_stronger_proof_never_yields_fewer_leads(
        industry in industry(),
        close_rate in close_rate(),
        prices in prices(),
        prospects in prospects(),
    ) {
        let none = estimate(&industry, CaseStudyStrength::None, close_rate, prices, prospects);
        let some = estimate(&industry, CaseStudyStrength::Some, close_rate, prices, prospects);
        let strong = estimate(&industry, CaseStudyStrength::Strong, close_rate, prices, prospects);

        for (weaker, stronger) in [(&none, &some), (&some, &strong), (&none, &strong)] {
            prop_assert!(weaker.leads.min <= stronger.leads.min);
            prop_assert!(weaker.leads.mid <= stronger.leads.mid);
            prop_assert!(weaker.leads.max <= stronger.leads.max);
        }
    }

    #[test]
    fn prop_more_prospects_never_shrink_the_funnel(
        industry in industry(),
        strength in strength(),
        close_rate in close_rate(),
        prices in prices(),
        low in 0u64..500_000,
        extra in 0u64..500_000,
    ) {
        let smaller = estimate(&industry, strength, close_rate, prices, ProspectVolume::new(low));
        let larger = estimate(
            &industry,
            strength,
            close_rate,
            prices,
            ProspectVolume::new(low + extra),
        );

        for (before, after) in [
            (smaller.leads, larger.leads),
            (smaller.appointments, larger.appointments),
            (smaller.clients, larger.clients),
        ] {
            prop_assert!(before.min <= after.min, "{:?} -> {:?}", before, after);
            prop_assert!(before.mid <= after.mid, "{:?} -> {:?}", before, after);
            prop_assert!(before.max <= after.max, "{:?} -> {:?}", before, after);
        }
        prop_assert!(smaller.revenue.mrr_low <= larger.revenue.mrr_low);
        prop_assert!(smaller.revenue.mrr_high <= larger.revenue.mrr_high);
        prop_assert!(smaller.revenue.annual_low <= larger.revenue.annual_low);
        prop_assert!(smaller.revenue.annual_high <= larger.revenue.annual_high);
    }

    #[test]
    fn prop_suggested_cap_stays_within_market(
        count in 0u64..10_000_000,
        touches in 1u64..5,
        max_default in 1u64..100_000,
    ) {
        let businesses = BusinessCount::new(count);
        let touches = TouchesPerBusiness::try_new(touches).unwrap();
        let cap = max_volume(businesses, touches, max_default);

        prop_assert!(cap.into_inner() <= max_default);
        prop_assert!(is_within_tam(cap, businesses, touches));
    }
}
