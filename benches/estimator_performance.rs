//! Performance benchmarks for the funnel estimator
//!
//! Covers the full projection for each case-study tier and the dataset
//! parsing done once at startup.

use criterion::{criterion_group, criterion_main, Criterion};
use funnel_estimator::domain::{
    calculate_all, BusinessCount, CalculatorInputs, CaseStudyStrength, CloseRate, GlobalConfig,
    IndustryBenchmark, IndustryCatalog, IndustryKey, Pcpl, Price, ProspectVolume,
};
use rust_decimal::Decimal;
use std::hint::black_box;

fn dentists() -> IndustryBenchmark {
    IndustryBenchmark::new(
        IndustryKey::try_new("dentists".to_string()).expect("key is valid"),
        "Dentist",
        "dentists",
        BusinessCount::new(135_000),
    )
    .with_pcpl(
        Some(Pcpl::try_new(450.0).expect("450 is valid")),
        Some(Pcpl::try_new(650.0).expect("650 is valid")),
    )
}

fn bench_calculate_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_all");
    let config = GlobalConfig::fallback();
    let industry = dentists();

    for strength in [
        CaseStudyStrength::None,
        CaseStudyStrength::Some,
        CaseStudyStrength::Strong,
    ] {
        group.bench_function(strength.as_str(), |b| {
            let inputs = CalculatorInputs {
                industry: &industry,
                case_study_strength: strength,
                price_low: Price::try_new(Decimal::from(1_000)).expect("price is valid"),
                price_high: Price::try_new(Decimal::from(3_000)).expect("price is valid"),
                close_rate: CloseRate::try_new(0.2).expect("close rate is valid"),
                prospects_per_month: ProspectVolume::new(10_000),
            };

            b.iter(|| black_box(calculate_all(black_box(&inputs), &config)));
        });
    }

    group.finish();
}

fn bench_catalog_parsing(c: &mut Criterion) {
    let mut dataset = String::from(
        "industry_key,industry_display_name,industry_plural_label,estimated_business_count,pcpl_min,pcpl_max\n",
    );
    for i in 0..500 {
        dataset.push_str(&format!("industry-{i},Industry {i},industries,{},400,600\n", 1_000 + i));
    }

    c.bench_function("catalog_from_csv_500_rows", |b| {
        b.iter(|| black_box(IndustryCatalog::from_csv(black_box(&dataset))))
    });

    let catalog = IndustryCatalog::from_csv(&dataset).expect("dataset is valid");
    c.bench_function("catalog_search", |b| {
        b.iter(|| black_box(catalog.search(black_box("industry 42"))))
    });
}

criterion_group!(benches, bench_calculate_all, bench_catalog_parsing);
criterion_main!(benches);
