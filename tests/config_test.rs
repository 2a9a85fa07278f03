// ABOUTME: Unit tests for injury-risk and logging configuration
// ABOUTME: Validates defaults, environment overrides, validation errors, and error mapping
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use loadrisk_core::errors::{AppError, ErrorCode};
use loadrisk_engine::{LogFormat, LoggingConfig};
use loadrisk_intelligence::config::{CompensationSeverityConfig, TierConfig};
use loadrisk_intelligence::{ConfigError, InjuryRiskConfig};
use serial_test::serial;
use std::env;

const OVERRIDES: [&str; 4] = [
    "LOADRISK_SHORT_WINDOW_DAYS",
    "LOADRISK_LONG_WINDOW_DAYS",
    "LOADRISK_VOLUME_RAMP_TIERS",
    "LOADRISK_ACWR_HIGH",
];

fn clear_overrides() {
    for name in OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
fn test_default_config_validation() {
    let config = InjuryRiskConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.windows.short_days, 10);
    assert_eq!(config.windows.long_days, 20);
    assert_eq!(config, InjuryRiskConfig::new());
}

#[test]
#[serial]
fn test_environment_variable_override() {
    env::set_var("LOADRISK_SHORT_WINDOW_DAYS", "7");
    env::set_var("LOADRISK_LONG_WINDOW_DAYS", "28");
    env::set_var("LOADRISK_VOLUME_RAMP_TIERS", "1.6, 1.4,1.2");
    env::set_var("LOADRISK_ACWR_HIGH", "1.8");

    let config = InjuryRiskConfig::load();
    clear_overrides();
    let config = config.unwrap();

    assert_eq!(config.windows.short_days, 7);
    assert_eq!(config.windows.long_days, 28);
    assert_eq!(config.volume_tiers.breakpoints, vec![1.6, 1.4, 1.2]);
    assert!((config.load_statistics.acwr_high - 1.8).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    env::set_var("LOADRISK_SHORT_WINDOW_DAYS", "ten");
    let result = InjuryRiskConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::Parse(_))));

    env::set_var("LOADRISK_VOLUME_RAMP_TIERS", "1.5,abc");
    let result = InjuryRiskConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_override_failing_validation_is_rejected() {
    env::set_var("LOADRISK_SHORT_WINDOW_DAYS", "30");
    let result = InjuryRiskConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::InvalidRange(_))));
}

#[test]
fn test_validation_errors() {
    let mut config = InjuryRiskConfig::default();
    config.volume_tiers.breakpoints = vec![1.15, 1.3, 1.5];
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = InjuryRiskConfig::default();
    config.compensation_tiers.breakpoints.clear();
    assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));

    let mut config = InjuryRiskConfig::default();
    config.compensation_tiers.breakpoints = vec![150.0, 10.0];
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let mut config = InjuryRiskConfig::default();
    config.windows.short_days = 0;
    assert!(matches!(config.validate(), Err(ConfigError::ValueOutOfRange(_))));

    let mut config = InjuryRiskConfig::default();
    config.votes.consensus_percent = 120.0;
    assert!(config.validate().is_err());

    let mut config = InjuryRiskConfig::default();
    config.compensation_severity.severe_factor = 0.01;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = InjuryRiskConfig::default();
    config.load_statistics.min_chronic_weeks = 6;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = InjuryRiskConfig::default();
    config.relative_load.moderate_ratio = 1.5;
    assert!(config.validate().is_err());
}

#[test]
fn test_tier_lookup() {
    let tiers = TierConfig::volume_ramp();
    assert_eq!(tiers.tier_for(2.0), 1);
    assert_eq!(tiers.tier_for(1.5), 1);
    assert_eq!(tiers.tier_for(1.4), 2);
    assert_eq!(tiers.tier_for(1.2), 3);
    assert_eq!(tiers.tier_for(1.0), 0);

    let percent = TierConfig::compensation_percent();
    assert_eq!(percent.tier_for(12.0), 2);
    assert_eq!(percent.tier_for(4.9), 0);
}

#[test]
fn test_severity_factor_bands() {
    let severity = CompensationSeverityConfig::default();
    assert!((severity.factor_for(0) - 0.04).abs() < f64::EPSILON);
    assert!((severity.factor_for(2) - 0.04).abs() < f64::EPSILON);
    assert!((severity.factor_for(3) - 0.08).abs() < f64::EPSILON);
    assert!((severity.factor_for(8) - 0.16).abs() < f64::EPSILON);
    assert!((severity.factor_for(9) - 0.20).abs() < f64::EPSILON);
    assert!((severity.factor_for(10) - 0.20).abs() < f64::EPSILON);
}

#[test]
fn test_config_error_maps_to_app_error() {
    let missing: AppError = ConfigError::MissingField("volume_tiers.breakpoints").into();
    assert_eq!(missing.code, ErrorCode::ConfigMissing);
    assert!(missing.message.contains("volume_tiers.breakpoints"));

    let invalid: AppError = ConfigError::Parse("Invalid LOADRISK_ACWR_HIGH".into()).into();
    assert_eq!(invalid.code, ErrorCode::ConfigInvalid);
    assert!(invalid.code.is_configuration());
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_spans);
    assert_eq!(config.environment, "production");

    let defaults = LoggingConfig::from_env();
    assert_eq!(defaults.format, LogFormat::Pretty);
    assert_eq!(defaults.service_name, "loadrisk-engine");
}
