// ABOUTME: Integration tests for weekly load statistics and overreaching classification
// ABOUTME: Uses a four-week chronic baseline fixture plus sparse and degenerate series
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use loadrisk_core::models::StandardErrorRange;
use loadrisk_intelligence::training_load::{
    LoadManagementSignals, RiskLevel, TrainingLoadCalculator, WeekLoad, WeeklyLoadSeries,
};

fn week(values: &[f64]) -> WeekLoad {
    WeekLoad::from_observed(values.iter().copied().map(Some))
}

fn observed(value: Option<StandardErrorRange>) -> f64 {
    value.and_then(|range| range.observed_value).unwrap()
}

fn fixture() -> WeeklyLoadSeries {
    WeeklyLoadSeries::new(vec![
        week(&[50.0, 80.0, 60.0, 50.0]),
        week(&[60.0, 80.0, 65.0, 60.0]),
        week(&[40.0, 70.0, 55.0, 30.0]),
        week(&[50.0, 60.0, 55.0, 50.0]),
        week(&[50.0, 50.0, 55.0, 60.0]),
    ])
}

#[test]
fn test_ramp_is_percent_change_of_weekly_totals() {
    let calculator = TrainingLoadCalculator::default();
    let series = WeeklyLoadSeries::new(vec![week(&[20.0; 7]), week(&[10.0; 7])]);
    assert!((observed(calculator.ramp(&series)) - 100.0).abs() < 1e-9);

    // 240 this week against 265 last week
    let ramp = observed(calculator.ramp(&fixture()));
    assert!((ramp - (240.0 / 265.0 - 1.0) * 100.0).abs() < 1e-9);
}

#[test]
fn test_fixture_signals() {
    let calculator = TrainingLoadCalculator::default();
    let signals = calculator.signals(&fixture());

    // acute mean 60; chronic weekly means 66.25, 48.75, 53.75, 53.75
    assert!((observed(signals.freshness) - -4.375).abs() < 1e-9);
    assert!((observed(signals.acwr) - 60.0 / 55.625).abs() < 1e-9);

    let monotony = observed(signals.monotony);
    assert!((monotony - 60.0 / 200.0_f64.sqrt()).abs() < 1e-9);
    assert!((observed(signals.strain) - 240.0 * monotony).abs() < 1e-6);
    assert!(signals.strain_spike.is_some());
    assert!(signals.ramp.is_some());
}

#[test]
fn test_sparse_series_yields_no_ratios() {
    let calculator = TrainingLoadCalculator::default();
    let series = WeeklyLoadSeries::new(vec![
        WeekLoad::from_observed([Some(10.0), None, Some(10.0)]),
        WeekLoad::default(),
        WeekLoad::default(),
        WeekLoad::default(),
        WeekLoad::default(),
    ]);

    let signals = calculator.signals(&series);
    assert!(signals.ramp.is_none());
    assert!(signals.acwr.is_none());
    assert!(signals.freshness.is_none());
    // two equal days have no spread
    assert!(signals.monotony.is_none());
    assert!(signals.strain.is_none());
    assert!(signals.strain_spike.is_none());
}

#[test]
fn test_chronic_baseline_needs_minimum_weeks() {
    let calculator = TrainingLoadCalculator::default();
    let one_chronic_week = WeeklyLoadSeries::new(vec![week(&[10.0, 20.0]), week(&[10.0, 20.0])]);
    assert!(calculator.acwr(&one_chronic_week).is_none());
    assert!(calculator.ramp(&one_chronic_week).is_some());

    let two_chronic_weeks = WeeklyLoadSeries::new(vec![
        week(&[10.0, 20.0]),
        week(&[10.0, 20.0]),
        week(&[10.0, 20.0]),
    ]);
    assert!((observed(calculator.acwr(&two_chronic_weeks)) - 1.0).abs() < 1e-9);
}

#[test]
fn test_error_ranges_propagate() {
    let calculator = TrainingLoadCalculator::default();
    let series = WeeklyLoadSeries::new(vec![
        WeekLoad::new(vec![StandardErrorRange::with_bounds(90.0, 100.0, 110.0)]),
        WeekLoad::new(vec![StandardErrorRange::observed(50.0)]),
    ]);
    let ramp = calculator.ramp(&series).unwrap();
    assert!(approx_eq(ramp.observed_value, 100.0));
    assert!(approx_eq(ramp.lowest_value(), 80.0));
    assert!(approx_eq(ramp.highest_value(), 120.0));
}

#[test]
fn test_bounded_baselines_keep_ranges_ordered() {
    let calculator = TrainingLoadCalculator::default();
    let bounded = |lower, observed, upper| {
        WeekLoad::new(vec![StandardErrorRange::with_bounds(lower, observed, upper)])
    };

    let uncertain_acute = WeeklyLoadSeries::new(vec![
        bounded(90.0, 100.0, 110.0),
        week(&[120.0]),
        week(&[120.0]),
    ]);
    let freshness = calculator.freshness(&uncertain_acute).unwrap();
    assert!(approx_eq(freshness.lowest_value(), 10.0));
    assert!(approx_eq(freshness.observed_value, 20.0));
    assert!(approx_eq(freshness.highest_value(), 30.0));

    let uncertain_chronic = WeeklyLoadSeries::new(vec![
        week(&[100.0]),
        bounded(40.0, 50.0, 60.0),
        bounded(40.0, 50.0, 60.0),
    ]);
    let acwr = calculator.acwr(&uncertain_chronic).unwrap();
    assert!(approx_eq(acwr.lowest_value(), 100.0 / 60.0));
    assert!(approx_eq(acwr.observed_value, 2.0));
    assert!(approx_eq(acwr.highest_value(), 2.5));

    for signal in [freshness, acwr] {
        assert!(signal.lowest_value().unwrap() <= signal.highest_value().unwrap());
    }
}

fn approx_eq(value: Option<f64>, expected: f64) -> bool {
    value.is_some_and(|v| (v - expected).abs() < 1e-9)
}

#[test]
fn test_assess_overreaching() {
    let calculator = TrainingLoadCalculator::default();
    let with_acwr = |acwr: f64| LoadManagementSignals {
        acwr: Some(StandardErrorRange::observed(acwr)),
        ..LoadManagementSignals::default()
    };

    let high = calculator.assess_overreaching(&with_acwr(1.6));
    assert_eq!(high.risk_level, RiskLevel::High);
    assert_eq!(high.risk_factors.len(), 1);

    let moderate = calculator.assess_overreaching(&with_acwr(1.35));
    assert_eq!(moderate.risk_level, RiskLevel::Moderate);

    let low = calculator.assess_overreaching(&LoadManagementSignals::default());
    assert_eq!(low.risk_level, RiskLevel::Low);
    assert!(low.risk_factors.is_empty());

    let two_warnings = LoadManagementSignals {
        monotony: Some(StandardErrorRange::observed(2.5)),
        ..with_acwr(1.35)
    };
    assert_eq!(
        calculator.assess_overreaching(&two_warnings).risk_level,
        RiskLevel::High
    );
}
