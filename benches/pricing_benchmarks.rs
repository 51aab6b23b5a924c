//! Performance benchmarks for the shift pricing engine.
//!
//! Covers the pure tier lookups, schedule aggregation at several sizes
//! and the shift calculation endpoint end to end.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use shift_pricing::api::{AppState, ShiftCalculationRequest, create_router};
use shift_pricing::calculation::{build_shift_calculations, calculate_penalty, calculate_rate};
use shift_pricing::config::{ConfigLoader, PenaltyTable, RateTable};
use shift_pricing::models::ScheduleEntry;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/default").expect("Failed to load config");
    AppState::new(config)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 14).expect("valid date")
}

/// Builds a schedule of consecutive day shifts, every third one overnight.
fn create_schedule(entry_count: usize) -> Vec<ScheduleEntry> {
    (0..entry_count)
        .map(|i| {
            let date = (today() + Duration::days(i as i64)).format("%Y-%m-%d").to_string();
            if i % 3 == 2 {
                ScheduleEntry::new(&date, "22:00", "06:00")
            } else {
                ScheduleEntry::new(&date, "09:00", "17:00")
            }
        })
        .collect()
}

fn bench_tier_lookups(c: &mut Criterion) {
    let rates = RateTable::default();
    let penalties = PenaltyTable::default();

    c.bench_function("calculate_rate_0_to_30", |b| {
        b.iter(|| {
            for days in 0..=30 {
                black_box(calculate_rate(black_box(days), &rates));
            }
        })
    });

    c.bench_function("calculate_penalty_0_to_168", |b| {
        b.iter(|| {
            for hours in (0..=168).step_by(6) {
                black_box(calculate_penalty(black_box(hours), &penalties));
            }
        })
    });
}

fn bench_schedule_scaling(c: &mut Criterion) {
    let rates = RateTable::default();
    let mut group = c.benchmark_group("schedule_scaling");

    for entry_count in [1usize, 10, 100].iter() {
        let schedule = create_schedule(*entry_count);

        group.throughput(Throughput::Elements(*entry_count as u64));
        group.bench_with_input(
            BenchmarkId::new("entries", entry_count),
            entry_count,
            |b, _| b.iter(|| black_box(build_shift_calculations(&schedule, today(), &rates))),
        );
    }

    group.finish();
}

fn bench_calculate_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let request = ShiftCalculationRequest {
        schedule: create_schedule(10),
        today: Some(today()),
    };
    let body = serde_json::to_string(&request).unwrap();

    c.bench_function("shifts_calculate_10_entries", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/shifts/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_tier_lookups,
    bench_schedule_scaling,
    bench_calculate_endpoint,
);
criterion_main!(benches);
