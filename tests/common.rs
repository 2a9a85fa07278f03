// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides dates, exercise builders, sessions, symptom reports, and quiet logging
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `loadrisk_engine`

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use loadrisk_core::models::{
    AdaptationType, BodyPartLocation, BodyPartSide, ExerciseAction, FunctionalMovementType,
    MuscleAction, Side, StandardErrorRange, SymptomKind, SymptomReport, TrainingSession,
};
use loadrisk_intelligence::config::CompensationSeverityConfig;
use loadrisk_intelligence::{
    DailyInput, FunctionalMovementLibrary, FunctionalMovementPairs, InjuryRiskAccumulator,
    InjuryRiskConfig, SessionLoadAggregator,
};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Evening processing time on `day`
pub fn evening(day: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&day.and_time(NaiveTime::from_hms_opt(20, 0, 0).unwrap()))
}

/// Left and right observed loads
pub fn both_sides(load: f64) -> (StandardErrorRange, StandardErrorRange) {
    (
        StandardErrorRange::observed(load),
        StandardErrorRange::observed(load),
    )
}

/// Single-joint exercise with equal left and right load
pub fn single_joint(
    id: &str,
    action: MuscleAction,
    movement: FunctionalMovementType,
    load: f64,
) -> ExerciseAction {
    let (left, right) = both_sides(load);
    ExerciseAction::builder(id, id, action)
        .joint_action(1, movement)
        .loads(left, right)
        .adaptation(AdaptationType::MaximalStrengthHypertrophic)
        .build()
        .unwrap()
}

/// Concentric biceps curl
pub fn curl(load: f64) -> ExerciseAction {
    single_joint("curl", MuscleAction::Concentric, FunctionalMovementType::ElbowFlexion, load)
}

/// Concentric hamstring curl
pub fn leg_curl(load: f64) -> ExerciseAction {
    single_joint("leg_curl", MuscleAction::Concentric, FunctionalMovementType::KneeFlexion, load)
}

/// Back squat: knee and hip extension with ankle work
pub fn squat(load: f64) -> ExerciseAction {
    let (left, right) = both_sides(load);
    ExerciseAction::builder("squat", "Back Squat", MuscleAction::Concentric)
        .joint_action(1, FunctionalMovementType::KneeExtension)
        .joint_action(1, FunctionalMovementType::HipExtension)
        .joint_action(2, FunctionalMovementType::AnklePlantarFlexion)
        .joint_action(3, FunctionalMovementType::TrunkExtension)
        .loads(left, right)
        .instability(0.5, 0.2)
        .adaptation(AdaptationType::StrengthEnduranceStrength)
        .build()
        .unwrap()
}

/// Session holding `exercises`
pub fn session(id: &str, event_date: NaiveDate, exercises: Vec<ExerciseAction>) -> TrainingSession {
    TrainingSession {
        session_id: id.to_owned(),
        event_date,
        exercises,
    }
}

/// Symptom reported on the evening of `day`
pub fn report(
    location: BodyPartLocation,
    side: Side,
    kind: SymptomKind,
    severity: Option<u8>,
    day: NaiveDate,
) -> SymptomReport {
    SymptomReport::new(BodyPartSide::new(location, side), evening(day), kind, severity)
}

/// Daily input processed on the evening of `day`
pub fn daily_input(
    day: NaiveDate,
    sessions: Vec<TrainingSession>,
    symptoms: Vec<SymptomReport>,
) -> DailyInput {
    DailyInput {
        event_date: day,
        processed_at: evening(day),
        sessions,
        symptoms,
    }
}

/// Aggregator over the reference movement data
pub fn aggregator() -> SessionLoadAggregator {
    SessionLoadAggregator::new(
        FunctionalMovementPairs::standard(),
        Arc::new(FunctionalMovementLibrary::standard()),
        CompensationSeverityConfig::default(),
    )
}

/// Accumulator with default configuration
pub fn accumulator() -> InjuryRiskAccumulator {
    InjuryRiskAccumulator::new(InjuryRiskConfig::default(), aggregator())
}

/// Whether two floats agree to within a tolerance
pub fn approx(actual: Option<f64>, expected: f64) -> bool {
    actual.is_some_and(|value| (value - expected).abs() < 1e-9)
}
