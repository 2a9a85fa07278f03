// ABOUTME: Criterion benchmarks for load aggregation, injury-risk merging, and engine ingestion
// ABOUTME: Measures how daily processing scales with session size and stored history length
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Criterion benchmarks for the daily processing pipeline.
//!
//! Measures session aggregation over growing exercise lists, merging a day
//! into records carrying weeks of history, the full async ingestion path, and
//! weekly load statistics.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use chrono::{Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use loadrisk_core::models::{
    AdaptationType, BodyPartLocation, BodyPartSide, ExerciseAction, FunctionalMovementType,
    MuscleAction, Side, StandardErrorRange, SymptomKind, SymptomReport, TrainingSession,
};
use loadrisk_engine::{InMemoryInjuryRiskStore, InjuryRiskEngine};
use loadrisk_intelligence::config::CompensationSeverityConfig;
use loadrisk_intelligence::training_load::{TrainingLoadCalculator, WeekLoad, WeeklyLoadSeries};
use loadrisk_intelligence::{
    AthleteInjuryRisk, DailyInput, FunctionalMovementLibrary, FunctionalMovementPairs,
    InjuryRiskAccumulator, InjuryRiskConfig, SessionLoadAggregator,
};
use std::sync::Arc;
use tokio::runtime::Runtime;
use uuid::Uuid;

const MOVEMENTS: [(MuscleAction, FunctionalMovementType); 6] = [
    (MuscleAction::Concentric, FunctionalMovementType::KneeExtension),
    (MuscleAction::Eccentric, FunctionalMovementType::KneeFlexion),
    (MuscleAction::Concentric, FunctionalMovementType::HipExtension),
    (MuscleAction::Concentric, FunctionalMovementType::ShoulderHorizontalAdduction),
    (MuscleAction::Eccentric, FunctionalMovementType::ElbowFlexion),
    (MuscleAction::Isometric, FunctionalMovementType::TrunkFlexion),
];

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

#[allow(clippy::cast_precision_loss)]
fn exercise(index: usize) -> ExerciseAction {
    let (action, movement) = MOVEMENTS[index % MOVEMENTS.len()];
    let load = 20.0 + (index % 7) as f64 * 5.0;
    ExerciseAction::builder(format!("ex_{index}"), format!("Exercise {index}"), action)
        .joint_action(1, movement)
        .joint_action(2, FunctionalMovementType::AnklePlantarFlexion)
        .loads(
            StandardErrorRange::observed(load),
            StandardErrorRange::observed(load * 0.9),
        )
        .instability(0.5, 0.5)
        .adaptation(AdaptationType::StrengthEnduranceStrength)
        .build()
        .unwrap()
}

fn training_session(id: &str, event_date: NaiveDate, exercises: usize) -> TrainingSession {
    TrainingSession {
        session_id: id.to_owned(),
        event_date,
        exercises: (0..exercises).map(exercise).collect(),
    }
}

fn day_input(day: NaiveDate) -> DailyInput {
    let reported_at = Utc.from_utc_datetime(&day.and_time(NaiveTime::from_hms_opt(20, 0, 0).unwrap()));
    DailyInput {
        event_date: day,
        processed_at: reported_at,
        sessions: vec![training_session(&format!("session_{day}"), day, 8)],
        symptoms: vec![SymptomReport::new(
            BodyPartSide::new(BodyPartLocation::Hamstrings, Side::Left),
            reported_at,
            SymptomKind::Tight,
            Some(3),
        )],
    }
}

fn aggregator() -> SessionLoadAggregator {
    SessionLoadAggregator::new(
        FunctionalMovementPairs::standard(),
        Arc::new(FunctionalMovementLibrary::standard()),
        CompensationSeverityConfig::default(),
    )
}

fn history(accumulator: &InjuryRiskAccumulator, athlete_id: Uuid, days: i64) -> AthleteInjuryRisk {
    (0..days).fold(AthleteInjuryRisk::new(athlete_id), |risk, offset| {
        let input = day_input(start_date() + Duration::days(offset));
        accumulator.merge(Some(risk), athlete_id, &input).unwrap()
    })
}

/// Benchmark session aggregation with growing exercise lists
#[allow(clippy::cast_possible_truncation)]
fn bench_session_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_aggregation");
    let aggregator = aggregator();

    for count in [1_usize, 10, 50] {
        let session = training_session("bench", start_date(), count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("aggregate_session", count),
            &session,
            |b, session| {
                b.iter(|| aggregator.aggregate_session(black_box(session), None));
            },
        );
    }

    group.finish();
}

/// Benchmark merging one day into records with prior history
fn bench_injury_risk_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("injury_risk_merge");
    let accumulator = InjuryRiskAccumulator::new(InjuryRiskConfig::default(), aggregator());
    let athlete_id = Uuid::from_u128(7);

    for days in [0_i64, 7, 20] {
        let prior = history(&accumulator, athlete_id, days);
        let input = day_input(start_date() + Duration::days(days));
        group.bench_with_input(BenchmarkId::new("merge_day", days), &prior, |b, prior| {
            b.iter(|| accumulator.merge(Some(black_box(prior.clone())), athlete_id, black_box(&input)));
        });
    }

    group.finish();
}

/// Benchmark the full async ingestion path against the in-memory store
fn bench_engine_ingest(c: &mut Criterion) {
    let rt = Runtime::new().unwrap();
    let mut group = c.benchmark_group("engine_ingest");
    group.sample_size(50);

    let engine = InjuryRiskEngine::new(
        InjuryRiskConfig::default(),
        Arc::new(InMemoryInjuryRiskStore::new()),
    )
    .unwrap();
    let athlete_id = Uuid::from_u128(11);
    let input = day_input(start_date());

    group.bench_function("ingest_same_day", |b| {
        b.iter(|| rt.block_on(async { engine.ingest(athlete_id, black_box(&input)).await }));
    });

    group.finish();
}

/// Benchmark weekly load statistics
#[allow(clippy::cast_precision_loss)]
fn bench_load_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_statistics");
    let calculator = TrainingLoadCalculator::default();
    let series = WeeklyLoadSeries::new(
        (0..5)
            .map(|week| {
                WeekLoad::from_observed((0..7).map(move |day| Some(40.0 + f64::from(week * 7 + day) % 11.0 * 4.0)))
            })
            .collect(),
    );

    group.bench_function("signals_and_assessment", |b| {
        b.iter(|| {
            let signals = calculator.signals(black_box(&series));
            calculator.assess_overreaching(&signals)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_session_aggregation,
    bench_injury_risk_merge,
    bench_engine_ingest,
    bench_load_statistics,
);
criterion_main!(benches);
