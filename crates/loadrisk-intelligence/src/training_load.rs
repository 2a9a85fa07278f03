// ABOUTME: Weekly training-load statistics: ramp, ACWR, monotony, strain, freshness, strain spike
// ABOUTME: Every statistic carries its error range and is None when the data cannot support it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Training Load
//!
//! Statistics over a [`WeeklyLoadSeries`] ordered most recent first. Week 0
//! is the acute week; weeks `1..=chronic_weeks` form the chronic baseline.
//! Empty weeks contribute no data point.
//!
//! ## References
//!
//! - Gabbett, T.J. (2016). The training-injury prevention paradox. *Br J Sports Med*, 50(5), 273-280.
//! - Foster, C. (1998). Monitoring training in athletes with reference to overtraining syndrome.
//!   *Med Sci Sports Exerc*, 30(7), 1164-1168.

use loadrisk_core::models::StandardErrorRange;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::LoadStatisticsConfig;

/// Load values recorded in one week; empty values are missing days
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekLoad {
    /// Per-day (or per-session) loads
    pub values: Vec<StandardErrorRange>,
}

impl WeekLoad {
    /// Week from explicit values
    #[must_use]
    pub fn new(values: Vec<StandardErrorRange>) -> Self {
        Self { values }
    }

    /// Week from plain observed values; `None` is a missing day
    pub fn from_observed(values: impl IntoIterator<Item = Option<f64>>) -> Self {
        Self::new(
            values
                .into_iter()
                .map(|value| value.map(StandardErrorRange::observed).unwrap_or_default())
                .collect(),
        )
    }

    /// Whether the week has no usable value
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(StandardErrorRange::is_empty)
    }

    /// Sum of the week's values
    #[must_use]
    pub fn total(&self) -> Option<StandardErrorRange> {
        StandardErrorRange::sum(&self.values)
    }

    /// Mean of the week's values
    #[must_use]
    pub fn average(&self) -> Option<StandardErrorRange> {
        StandardErrorRange::average(&self.values)
    }
}

/// Weekly loads, most recent first
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeeklyLoadSeries {
    /// Week 0 is the current (acute) week
    pub weeks: Vec<WeekLoad>,
}

impl WeeklyLoadSeries {
    /// Series from weeks ordered most recent first
    #[must_use]
    pub fn new(weeks: Vec<WeekLoad>) -> Self {
        Self { weeks }
    }

    /// Week `index` weeks back, if recorded
    #[must_use]
    pub fn week(&self, index: usize) -> Option<&WeekLoad> {
        self.weeks.get(index).filter(|week| !week.is_empty())
    }
}

/// All load-management signals for one series
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadManagementSignals {
    /// Week-over-week change in total load, percent
    pub ramp: Option<StandardErrorRange>,
    /// Acute:chronic workload ratio
    pub acwr: Option<StandardErrorRange>,
    /// Mean over standard deviation of the current week
    pub monotony: Option<StandardErrorRange>,
    /// Current week total times monotony
    pub strain: Option<StandardErrorRange>,
    /// Chronic average minus acute average
    pub freshness: Option<StandardErrorRange>,
    /// Standard score of the current strain against recent strains
    pub strain_spike: Option<StandardErrorRange>,
}

/// Overall overreaching risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No threshold crossed
    Low,
    /// One warning threshold crossed
    Moderate,
    /// A high threshold crossed, or several warnings at once
    High,
}

/// Overreaching classification with the reasons behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverreachingAssessment {
    /// Classification
    pub risk_level: RiskLevel,
    /// Human-readable reasons, one per threshold crossed
    pub risk_factors: Vec<String>,
}

/// Computes load statistics with configured baselines and thresholds
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingLoadCalculator {
    config: LoadStatisticsConfig,
}

impl Default for TrainingLoadCalculator {
    fn default() -> Self {
        Self::new(LoadStatisticsConfig::default())
    }
}

impl TrainingLoadCalculator {
    /// Calculator with explicit settings
    #[must_use]
    pub const fn new(config: LoadStatisticsConfig) -> Self {
        Self { config }
    }

    fn chronic_weeks<'a>(&self, series: &'a WeeklyLoadSeries) -> impl Iterator<Item = &'a WeekLoad> {
        series
            .weeks
            .iter()
            .skip(1)
            .take(self.config.chronic_weeks)
            .filter(|week| !week.is_empty())
    }

    fn chronic_average(&self, series: &WeeklyLoadSeries) -> Option<StandardErrorRange> {
        let averages: Vec<StandardErrorRange> =
            self.chronic_weeks(series).filter_map(WeekLoad::average).collect();
        if averages.len() < self.config.min_chronic_weeks {
            return None;
        }
        StandardErrorRange::average(&averages)
    }

    /// Percent change of this week's total over last week's
    #[must_use]
    pub fn ramp(&self, series: &WeeklyLoadSeries) -> Option<StandardErrorRange> {
        let current = series.week(0)?.total()?;
        let prior = series.week(1)?.total()?;
        if prior.observed_or_zero().abs() < f64::EPSILON {
            return None;
        }
        let ratio = current.divide_range(&prior);
        Some(ratio.subtract(&StandardErrorRange::observed(1.0)).multiply(100.0))
    }

    /// Acute average over the mean of the chronic weekly averages
    #[must_use]
    pub fn acwr(&self, series: &WeeklyLoadSeries) -> Option<StandardErrorRange> {
        let acute = series.week(0)?.average()?;
        let chronic = self.chronic_average(series)?;
        if chronic.observed_or_zero().abs() < f64::EPSILON {
            return None;
        }
        Some(acute.divide_range(&chronic))
    }

    /// Mean over sample standard deviation of one week
    #[must_use]
    pub fn monotony(week: &WeekLoad) -> Option<StandardErrorRange> {
        let mean = week.average()?;
        let deviation = StandardErrorRange::stddev(&week.values)?;
        if deviation.observed_or_zero().abs() < f64::EPSILON {
            return None;
        }
        Some(mean.divide_range(&deviation))
    }

    /// Week total times monotony
    #[must_use]
    pub fn strain(week: &WeekLoad) -> Option<StandardErrorRange> {
        let monotony = Self::monotony(week)?;
        Some(week.total()?.multiply_range(&monotony))
    }

    /// Chronic average minus acute average; negative means fatigue
    #[must_use]
    pub fn freshness(&self, series: &WeeklyLoadSeries) -> Option<StandardErrorRange> {
        let acute = series.week(0)?.average()?;
        let chronic = self.chronic_average(series)?;
        Some(chronic.subtract(&acute))
    }

    /// Standard score of this week's strain among this and the chronic weeks' strains
    #[must_use]
    pub fn strain_spike(&self, series: &WeeklyLoadSeries) -> Option<StandardErrorRange> {
        let current = Self::strain(series.week(0)?)?;
        let mut strains = vec![current];
        strains.extend(self.chronic_weeks(series).filter_map(Self::strain));
        if strains.len() < 2 {
            return None;
        }
        let mean = StandardErrorRange::average(&strains)?;
        let deviation = StandardErrorRange::stddev(&strains)?;
        if deviation.observed_or_zero().abs() < f64::EPSILON {
            return None;
        }
        Some(current.subtract(&mean).divide_range(&deviation))
    }

    /// Every signal for the series
    #[must_use]
    pub fn signals(&self, series: &WeeklyLoadSeries) -> LoadManagementSignals {
        let acute = series.week(0);
        let signals = LoadManagementSignals {
            ramp: self.ramp(series),
            acwr: self.acwr(series),
            monotony: acute.and_then(Self::monotony),
            strain: acute.and_then(Self::strain),
            freshness: self.freshness(series),
            strain_spike: self.strain_spike(series),
        };
        debug!(weeks = series.weeks.len(), ?signals, "load signals computed");
        signals
    }

    /// Classify overreaching risk from the signals
    #[must_use]
    pub fn assess_overreaching(&self, signals: &LoadManagementSignals) -> OverreachingAssessment {
        let observed = |value: Option<StandardErrorRange>| value.and_then(|v| v.observed_value);
        let mut risk_factors = Vec::new();
        let mut high = false;

        if let Some(acwr) = observed(signals.acwr) {
            if acwr >= self.config.acwr_high {
                high = true;
                risk_factors.push(format!(
                    "Acute:chronic workload ratio {acwr:.2} exceeds {:.2}",
                    self.config.acwr_high
                ));
            } else if acwr >= self.config.acwr_moderate {
                risk_factors.push(format!(
                    "Acute:chronic workload ratio {acwr:.2} exceeds {:.2}",
                    self.config.acwr_moderate
                ));
            }
        }
        if let Some(monotony) = observed(signals.monotony) {
            if monotony >= self.config.monotony_high {
                risk_factors.push(format!(
                    "Training monotony {monotony:.2} exceeds {:.2}",
                    self.config.monotony_high
                ));
            }
        }
        if let Some(spike) = observed(signals.strain_spike) {
            if spike >= self.config.strain_spike_high {
                risk_factors.push(format!(
                    "Strain spike {spike:.2} exceeds {:.2}",
                    self.config.strain_spike_high
                ));
            }
        }

        let risk_level = if high || risk_factors.len() >= 2 {
            RiskLevel::High
        } else if risk_factors.is_empty() {
            RiskLevel::Low
        } else {
            RiskLevel::Moderate
        };
        OverreachingAssessment {
            risk_level,
            risk_factors,
        }
    }
}
