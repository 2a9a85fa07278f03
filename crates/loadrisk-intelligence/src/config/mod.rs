// ABOUTME: Tunable thresholds for windows, tiers, votes, and load statistics
// ABOUTME: Defaults from constants, LOADRISK_* environment overrides, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Injury-Risk Configuration
//!
//! Every breakpoint the accumulator and the statistics engine use is a named
//! parameter here rather than a literal in the algorithm. Load order is
//! defaults, then environment overrides, then validation.

mod error;

pub use error::ConfigError;

use loadrisk_core::constants::{
    compensation, load_statistics, relative_load, volume, votes, windows,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Complete configuration for the injury-risk engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InjuryRiskConfig {
    /// Trailing window lengths
    pub windows: WindowConfig,
    /// Week-over-week volume ramp tiers
    pub volume_tiers: TierConfig,
    /// Compensation percentage tiers
    pub compensation_tiers: TierConfig,
    /// Severity bands used when distributing compensation load
    pub compensation_severity: CompensationSeverityConfig,
    /// Consensus ballot settings
    pub votes: VoteConfig,
    /// Weekly load statistics settings
    pub load_statistics: LoadStatisticsConfig,
    /// Relative load level breakpoints
    pub relative_load: RelativeLoadConfig,
}

/// Trailing window lengths in days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Short window (the `0_10` counters)
    pub short_days: i64,
    /// Long window (the `0_20` counters); also the retention horizon
    pub long_days: i64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            short_days: windows::SHORT_WINDOW_DAYS,
            long_days: windows::LONG_WINDOW_DAYS,
        }
    }
}

/// Descending breakpoints mapping a value to a tier (1 = most severe, 0 = none)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierConfig {
    /// Strictly descending thresholds; the value reaching index `i` gets tier `i + 1`
    pub breakpoints: Vec<f64>,
}

impl TierConfig {
    /// Tier for the given value
    #[must_use]
    pub fn tier_for(&self, value: f64) -> u8 {
        self.breakpoints
            .iter()
            .position(|breakpoint| value >= *breakpoint)
            .map_or(0, |index| (index + 1) as u8)
    }

    fn validate(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.breakpoints.is_empty() {
            return Err(ConfigError::MissingField(field));
        }
        if self.breakpoints.iter().any(|value| !value.is_finite() || *value <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(field));
        }
        if self.breakpoints.windows(2).any(|pair| pair[1] >= pair[0]) {
            return Err(ConfigError::InvalidRange(field));
        }
        Ok(())
    }

    /// Default week-over-week volume ramp tiers
    #[must_use]
    pub fn volume_ramp() -> Self {
        Self {
            breakpoints: volume::RAMP_TIER_BREAKPOINTS.to_vec(),
        }
    }

    /// Default compensation percentage tiers
    #[must_use]
    pub fn compensation_percent() -> Self {
        Self {
            breakpoints: compensation::PERCENT_TIER_BREAKPOINTS.to_vec(),
        }
    }
}

/// Severity bands (0-10 scale) and the share of load shifted at each
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompensationSeverityConfig {
    /// Highest severity in the mild band
    pub mild_max: u8,
    /// Highest severity in the moderate band
    pub moderate_max: u8,
    /// Highest severity in the severe band
    pub severe_max: u8,
    /// Factor for mild severity
    pub mild_factor: f64,
    /// Factor for moderate severity
    pub moderate_factor: f64,
    /// Factor for severe severity
    pub severe_factor: f64,
    /// Factor above the severe band
    pub extreme_factor: f64,
}

impl CompensationSeverityConfig {
    /// Share of a receiver's load attributed to compensation at this severity
    #[must_use]
    pub fn factor_for(&self, severity: u8) -> f64 {
        if severity <= self.mild_max {
            self.mild_factor
        } else if severity <= self.moderate_max {
            self.moderate_factor
        } else if severity <= self.severe_max {
            self.severe_factor
        } else {
            self.extreme_factor
        }
    }
}

impl Default for CompensationSeverityConfig {
    fn default() -> Self {
        Self {
            mild_max: compensation::MILD_MAX_SEVERITY,
            moderate_max: compensation::MODERATE_MAX_SEVERITY,
            severe_max: compensation::SEVERE_MAX_SEVERITY,
            mild_factor: compensation::MILD_FACTOR,
            moderate_factor: compensation::MODERATE_FACTOR,
            severe_factor: compensation::SEVERE_FACTOR,
            extreme_factor: compensation::EXTREME_FACTOR,
        }
    }
}

/// Consensus ballot settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteConfig {
    /// 20-day occurrences a signal needs before it casts a vote
    pub signal_threshold: u32,
    /// Minimum total votes before a leading classification is reported
    pub min_votes: u32,
    /// Share of all votes (percent) the leading classification must hold
    pub consensus_percent: f64,
}

impl Default for VoteConfig {
    fn default() -> Self {
        Self {
            signal_threshold: votes::SIGNAL_THRESHOLD,
            min_votes: votes::MIN_VOTES,
            consensus_percent: votes::CONSENSUS_PERCENT,
        }
    }
}

/// Weekly load statistics settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadStatisticsConfig {
    /// Prior weeks forming the chronic baseline
    pub chronic_weeks: usize,
    /// Non-empty chronic weeks required for ACWR and freshness
    pub min_chronic_weeks: usize,
    /// ACWR at or above which overreaching risk is high
    pub acwr_high: f64,
    /// ACWR at or above which overreaching risk is moderate
    pub acwr_moderate: f64,
    /// Monotony at or above which variety is insufficient
    pub monotony_high: f64,
    /// Strain spike at or above which the current week is anomalous
    pub strain_spike_high: f64,
}

impl Default for LoadStatisticsConfig {
    fn default() -> Self {
        Self {
            chronic_weeks: load_statistics::CHRONIC_WEEKS,
            min_chronic_weeks: load_statistics::MIN_CHRONIC_WEEKS,
            acwr_high: load_statistics::ACWR_HIGH,
            acwr_moderate: load_statistics::ACWR_MODERATE,
            monotony_high: load_statistics::MONOTONY_HIGH,
            strain_spike_high: load_statistics::STRAIN_SPIKE_HIGH,
        }
    }
}

/// Breakpoints for today's volume relative to last week's daily average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelativeLoadConfig {
    /// Ratio at or above which the level is high
    pub high_ratio: f64,
    /// Ratio at or above which the level is moderate
    pub moderate_ratio: f64,
}

impl Default for RelativeLoadConfig {
    fn default() -> Self {
        Self {
            high_ratio: relative_load::HIGH_RATIO,
            moderate_ratio: relative_load::MODERATE_RATIO,
        }
    }
}

impl Default for InjuryRiskConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl InjuryRiskConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            windows: WindowConfig::default(),
            volume_tiers: TierConfig::volume_ramp(),
            compensation_tiers: TierConfig::compensation_percent(),
            compensation_severity: CompensationSeverityConfig::default(),
            votes: VoteConfig::default(),
            load_statistics: LoadStatisticsConfig::default(),
            relative_load: RelativeLoadConfig::default(),
        }
    }

    /// Load configuration from defaults and environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an environment value fails to parse or the
    /// resulting configuration is invalid
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::new().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a window is zero or inverted, a breakpoint list is
    /// not strictly descending, or a percentage falls outside 0-100
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.windows.short_days <= 0 || self.windows.long_days <= 0 {
            return Err(ConfigError::ValueOutOfRange("window lengths must be positive"));
        }
        if self.windows.short_days > self.windows.long_days {
            return Err(ConfigError::InvalidRange(
                "short window must not exceed the long window",
            ));
        }

        self.volume_tiers.validate("volume_tiers.breakpoints")?;
        self.compensation_tiers
            .validate("compensation_tiers.breakpoints")?;
        if self
            .compensation_tiers
            .breakpoints
            .iter()
            .any(|percent| *percent > 100.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "compensation tier breakpoints must be percentages",
            ));
        }

        self.validate_severity()?;

        if self.votes.signal_threshold == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "votes.signal_threshold must be at least 1",
            ));
        }
        if !(0.0..=100.0).contains(&self.votes.consensus_percent) {
            return Err(ConfigError::ValueOutOfRange(
                "votes.consensus_percent must be between 0 and 100",
            ));
        }

        self.validate_load_statistics()?;

        let relative = &self.relative_load;
        if relative.moderate_ratio <= 0.0 || relative.moderate_ratio >= relative.high_ratio {
            return Err(ConfigError::InvalidRange(
                "relative_load ratios must satisfy 0 < moderate < high",
            ));
        }
        Ok(())
    }

    fn validate_severity(&self) -> Result<(), ConfigError> {
        let severity = &self.compensation_severity;
        if !(severity.mild_max < severity.moderate_max && severity.moderate_max < severity.severe_max)
        {
            return Err(ConfigError::InvalidRange(
                "compensation severity bands must be ascending",
            ));
        }
        let factors = [
            severity.mild_factor,
            severity.moderate_factor,
            severity.severe_factor,
            severity.extreme_factor,
        ];
        if factors.iter().any(|factor| !(0.0..=1.0).contains(factor)) {
            return Err(ConfigError::ValueOutOfRange(
                "compensation factors must be between 0 and 1",
            ));
        }
        if factors.windows(2).any(|pair| pair[1] < pair[0]) {
            return Err(ConfigError::InvalidRange(
                "compensation factors must not decrease with severity",
            ));
        }
        Ok(())
    }

    fn validate_load_statistics(&self) -> Result<(), ConfigError> {
        let stats = &self.load_statistics;
        if stats.chronic_weeks == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "load_statistics.chronic_weeks must be at least 1",
            ));
        }
        if stats.min_chronic_weeks == 0 || stats.min_chronic_weeks > stats.chronic_weeks {
            return Err(ConfigError::InvalidRange(
                "load_statistics.min_chronic_weeks must be between 1 and chronic_weeks",
            ));
        }
        if stats.acwr_moderate >= stats.acwr_high {
            return Err(ConfigError::InvalidRange(
                "load_statistics.acwr_moderate must be below acwr_high",
            ));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_list(env_var_name: &str, target: &mut Vec<f64>) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .split(',')
                .map(|part| part.trim().parse::<f64>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Windows
        Self::apply_env_var("LOADRISK_SHORT_WINDOW_DAYS", &mut self.windows.short_days)?;
        Self::apply_env_var("LOADRISK_LONG_WINDOW_DAYS", &mut self.windows.long_days)?;

        // Tiers
        Self::apply_env_list(
            "LOADRISK_VOLUME_RAMP_TIERS",
            &mut self.volume_tiers.breakpoints,
        )?;
        Self::apply_env_list(
            "LOADRISK_COMPENSATION_PERCENT_TIERS",
            &mut self.compensation_tiers.breakpoints,
        )?;

        // Votes
        Self::apply_env_var(
            "LOADRISK_VOTE_SIGNAL_THRESHOLD",
            &mut self.votes.signal_threshold,
        )?;
        Self::apply_env_var("LOADRISK_VOTE_MIN_VOTES", &mut self.votes.min_votes)?;
        Self::apply_env_var(
            "LOADRISK_VOTE_CONSENSUS_PERCENT",
            &mut self.votes.consensus_percent,
        )?;

        // Load statistics
        let stats = &mut self.load_statistics;
        Self::apply_env_var("LOADRISK_CHRONIC_WEEKS", &mut stats.chronic_weeks)?;
        Self::apply_env_var("LOADRISK_MIN_CHRONIC_WEEKS", &mut stats.min_chronic_weeks)?;
        Self::apply_env_var("LOADRISK_ACWR_HIGH", &mut stats.acwr_high)?;
        Self::apply_env_var("LOADRISK_ACWR_MODERATE", &mut stats.acwr_moderate)?;
        Self::apply_env_var("LOADRISK_MONOTONY_HIGH", &mut stats.monotony_high)?;
        Self::apply_env_var("LOADRISK_STRAIN_SPIKE_HIGH", &mut stats.strain_spike_high)?;

        // Relative load
        Self::apply_env_var(
            "LOADRISK_RELATIVE_LOAD_HIGH",
            &mut self.relative_load.high_ratio,
        )?;
        Self::apply_env_var(
            "LOADRISK_RELATIVE_LOAD_MODERATE",
            &mut self.relative_load.moderate_ratio,
        )?;

        Ok(self)
    }
}
