// ABOUTME: Integration tests for the injury-risk store and the async ingestion engine
// ABOUTME: Covers persistence, failure handling, symptom propagation, and concurrent ingestion
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use common::{curl, daily_input, date, report, session};
use loadrisk_core::errors::{AppError, AppResult, ErrorCode};
use loadrisk_core::models::{BodyPartLocation as L, BodyPartSide, Side, SymptomKind};
use loadrisk_engine::{InMemoryInjuryRiskStore, InjuryRiskEngine, InjuryRiskStore};
use loadrisk_intelligence::training_load::{RiskLevel, WeekLoad, WeeklyLoadSeries};
use loadrisk_intelligence::{AthleteInjuryRisk, InjuryRiskConfig, RelativeLoadLevel};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

fn engine_over(store: Arc<dyn InjuryRiskStore>) -> InjuryRiskEngine {
    InjuryRiskEngine::new(InjuryRiskConfig::default(), store).unwrap()
}

#[tokio::test]
async fn test_in_memory_store_round_trip() {
    let store = InMemoryInjuryRiskStore::new();
    let athlete_id = Uuid::new_v4();
    assert!(store.get(athlete_id).await.unwrap().is_none());
    assert!(store.is_empty());

    let mut risk = AthleteInjuryRisk::new(athlete_id);
    risk.get_or_insert(BodyPartSide::new(L::Knee, Side::Left));
    store.put(athlete_id, &risk).await.unwrap();
    assert_eq!(store.get(athlete_id).await.unwrap(), Some(risk.clone()));

    risk.get_or_insert(BodyPartSide::new(L::Knee, Side::Right));
    store.put(athlete_id, &risk).await.unwrap();
    assert_eq!(store.get(athlete_id).await.unwrap().unwrap().len(), 2);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_store_rejects_record_of_another_athlete() {
    let store = InMemoryInjuryRiskStore::new();
    let risk = AthleteInjuryRisk::new(Uuid::new_v4());
    let error = store.put(Uuid::new_v4(), &risk).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_ingest_fresh_athlete() {
    common::init_test_logging();
    let store = Arc::new(InMemoryInjuryRiskStore::new());
    let engine = engine_over(store.clone());
    let athlete_id = Uuid::new_v4();
    let day = date(2025, 3, 12);

    let outcome = engine
        .ingest(athlete_id, &daily_input(day, vec![session("s1", day, vec![curl(10.0)])], vec![]))
        .await
        .unwrap();

    assert_eq!(outcome.relative_load_level, RelativeLoadLevel::High);
    assert!(outcome.touched.contains(&BodyPartSide::new(L::Biceps, Side::Left)));
    assert!(outcome.soreness_sources.is_empty());
    assert_eq!(store.get(athlete_id).await.unwrap(), Some(outcome.risk));
}

#[tokio::test]
async fn test_reingesting_same_day_is_idempotent() {
    let engine = engine_over(Arc::new(InMemoryInjuryRiskStore::new()));
    let athlete_id = Uuid::new_v4();
    let day = date(2025, 3, 12);
    let input = daily_input(
        day,
        vec![session("s1", day, vec![curl(10.0)])],
        vec![report(L::Biceps, Side::Left, SymptomKind::Tight, Some(3), day)],
    );

    let first = engine.ingest(athlete_id, &input).await.unwrap();
    let second = engine.ingest(athlete_id, &input).await.unwrap();
    assert_eq!(first.risk, second.risk);
    assert_eq!(first.touched, second.touched);
}

#[derive(Default)]
struct FailingStore {
    fail_get: bool,
    gets: AtomicUsize,
    puts: AtomicUsize,
}

#[async_trait]
impl InjuryRiskStore for FailingStore {
    async fn get(&self, _athlete_id: Uuid) -> AppResult<Option<AthleteInjuryRisk>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        if self.fail_get {
            return Err(AppError::storage("backend unavailable"));
        }
        Ok(None)
    }

    async fn put(&self, _athlete_id: Uuid, _risk: &AthleteInjuryRisk) -> AppResult<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        Err(AppError::storage("disk full"))
    }
}

#[tokio::test]
async fn test_failed_read_aborts_before_merge() {
    let store = Arc::new(FailingStore {
        fail_get: true,
        ..FailingStore::default()
    });
    let engine = engine_over(store.clone());
    let day = date(2025, 3, 12);

    let error = engine
        .ingest(Uuid::new_v4(), &daily_input(day, vec![session("s1", day, vec![curl(10.0)])], vec![]))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
    assert_eq!(store.gets.load(Ordering::SeqCst), 1);
    assert_eq!(store.puts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_failed_write_is_reported() {
    let store = Arc::new(FailingStore::default());
    let engine = engine_over(store.clone());
    let day = date(2025, 3, 12);

    let error = engine
        .ingest(Uuid::new_v4(), &daily_input(day, vec![session("s1", day, vec![curl(10.0)])], vec![]))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
    assert_eq!(store.puts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_symptoms_propagate_through_anatomy_graph() {
    let engine = engine_over(Arc::new(InMemoryInjuryRiskStore::new()));
    let day = date(2025, 3, 12);
    let outcome = engine
        .ingest(
            Uuid::new_v4(),
            &daily_input(
                day,
                vec![],
                vec![report(L::Hamstrings, Side::Right, SymptomKind::Ache, Some(4), day)],
            ),
        )
        .await
        .unwrap();

    assert_eq!(outcome.propagation.counts(L::Hamstrings).overactive, 1);
    assert_eq!(
        outcome.soreness_sources,
        vec![(L::LowerBack, 1), (L::Glutes, 1), (L::Groin, 1), (L::Calves, 1)]
    );
    assert_eq!(outcome.touched, vec![BodyPartSide::new(L::Hamstrings, Side::Right)]);
}

#[test]
fn test_symptom_kinds_map_to_propagation_rules() {
    let engine = engine_over(Arc::new(InMemoryInjuryRiskStore::new()));
    let day = date(2025, 3, 12);

    let counters = engine
        .propagate(&[
            report(L::Quads, Side::Left, SymptomKind::Knots, None, day),
            report(L::Knee, Side::Left, SymptomKind::Sharp, Some(6), day),
            report(L::Calves, Side::Left, SymptomKind::Inflammation, Some(6), day),
        ])
        .unwrap();
    assert_eq!(counters.counts(L::Quads).tight, 1);
    assert_eq!(counters.counts(L::Hamstrings).underactive_risk, 1);
    // knee pain weakens quads and hamstrings
    assert_eq!(counters.counts(L::Quads).weakness, 1);
    assert_eq!(counters.counts(L::Calves).tight_risk, 1);
    assert_eq!(counters.counts(L::Calves).overactive, 0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_concurrent_ingests_for_one_athlete_are_serialized() {
    let store = Arc::new(InMemoryInjuryRiskStore::new());
    let engine = Arc::new(engine_over(store.clone()));
    let athlete_id = Uuid::new_v4();
    let day = date(2025, 3, 12);

    let handles: Vec<_> = ["morning", "evening"]
        .into_iter()
        .map(|session_id| {
            let engine = Arc::clone(&engine);
            let input = daily_input(day, vec![session(session_id, day, vec![curl(10.0)])], vec![]);
            tokio::spawn(async move { engine.ingest(athlete_id, &input).await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let risk = store.get(athlete_id).await.unwrap().unwrap();
    let biceps = risk.get(&BodyPartSide::new(L::Biceps, Side::Left)).unwrap();
    assert_eq!(biceps.volume.contributions().len(), 2);
    assert!(common::approx(biceps.volume.concentric_volume_today.observed_value, 20.0));
    assert_eq!(engine.active_athletes(), 0);
}

#[tokio::test]
async fn test_athlete_locks_are_released_after_ingest() {
    let engine = engine_over(Arc::new(InMemoryInjuryRiskStore::new()));
    let day = date(2025, 3, 12);
    for _ in 0..3 {
        let input = daily_input(day, vec![session("s1", day, vec![curl(10.0)])], vec![]);
        engine.ingest(Uuid::new_v4(), &input).await.unwrap();
    }
    assert_eq!(engine.active_athletes(), 0);

    let rejected = daily_input(
        day,
        vec![],
        vec![report(L::Knee, Side::Left, SymptomKind::Sharp, Some(11), day)],
    );
    assert!(engine.ingest(Uuid::new_v4(), &rejected).await.is_err());
    assert_eq!(engine.active_athletes(), 0);
}

#[test]
fn test_load_report_classifies_signals() {
    let engine = engine_over(Arc::new(InMemoryInjuryRiskStore::new()));
    let week = |values: &[f64]| WeekLoad::from_observed(values.iter().copied().map(Some));
    let series = WeeklyLoadSeries::new(vec![
        week(&[50.0, 80.0, 60.0, 50.0]),
        week(&[60.0, 80.0, 65.0, 60.0]),
        week(&[40.0, 70.0, 55.0, 30.0]),
        week(&[50.0, 60.0, 55.0, 50.0]),
        week(&[50.0, 50.0, 55.0, 60.0]),
    ]);

    let report = engine.load_report(&series);
    assert!(report.signals.acwr.is_some());
    // monotony of about 4.2 crosses the monotony threshold
    assert!(report
        .assessment
        .risk_factors
        .iter()
        .any(|factor| factor.contains("monotony")));
    assert_ne!(report.assessment.risk_level, RiskLevel::Low);
}
