// ABOUTME: Folds one day of sessions and symptoms into an athlete's injury-risk records
// ABOUTME: Idempotent: re-merging the same input leaves every record unchanged
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Duration, NaiveDate, Utc};
use loadrisk_core::constants::windows::DAYS_PER_WEEK;
use loadrisk_core::errors::{AppError, AppResult};
use loadrisk_core::models::{BodyPartSide, StandardErrorRange, SymptomReport, TrainingSession};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::record::AthleteInjuryRisk;
use super::volume::tracking_week_start;
use crate::config::{InjuryRiskConfig, RelativeLoadConfig};
use crate::session_load::{SessionLoad, SessionLoadAggregator};

const MAX_SYMPTOM_SEVERITY: u8 = 10;

/// Everything that happened to an athlete on one day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DailyInput {
    /// Day being processed
    pub event_date: NaiveDate,
    /// When the input was processed; stamped on vote changes
    pub processed_at: DateTime<Utc>,
    /// Sessions to add or replace
    #[serde(default)]
    pub sessions: Vec<TrainingSession>,
    /// Symptoms reported
    #[serde(default)]
    pub symptoms: Vec<SymptomReport>,
}

/// Today's total load relative to the recent daily average
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelativeLoadLevel {
    /// Below the moderate breakpoint
    Low = 1,
    /// Between the moderate and high breakpoints
    Moderate = 2,
    /// At or above the high breakpoint, or no baseline to compare with
    High = 3,
}

impl RelativeLoadLevel {
    /// Numeric level (1 low, 2 moderate, 3 high)
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Level for a ratio of today's load to the baseline daily load
    #[must_use]
    pub fn from_ratio(ratio: f64, config: &RelativeLoadConfig) -> Self {
        if ratio >= config.high_ratio {
            Self::High
        } else if ratio >= config.moderate_ratio {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

/// Applies daily inputs to injury-risk records
#[derive(Debug, Clone)]
pub struct InjuryRiskAccumulator {
    config: InjuryRiskConfig,
    aggregator: SessionLoadAggregator,
}

impl InjuryRiskAccumulator {
    /// Accumulator using `aggregator` to turn sessions into loads
    #[must_use]
    pub const fn new(config: InjuryRiskConfig, aggregator: SessionLoadAggregator) -> Self {
        Self { config, aggregator }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &InjuryRiskConfig {
        &self.config
    }

    /// Merge one day into the athlete's records
    ///
    /// Symptoms are applied before sessions are aggregated, so a prime mover
    /// reported weak or in spasm today already shifts today's load onto its
    /// compensating groups. Only body-part-sides touched by the input are
    /// brought up to the input's date.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when `prior` belongs to another athlete
    /// or a symptom severity is out of range, and propagates aggregation errors
    #[instrument(skip(self, prior, input), fields(%athlete_id, event_date = %input.event_date))]
    pub fn merge(
        &self,
        prior: Option<AthleteInjuryRisk>,
        athlete_id: Uuid,
        input: &DailyInput,
    ) -> AppResult<AthleteInjuryRisk> {
        let mut risk = match prior {
            Some(prior) if prior.athlete_id == athlete_id => prior,
            Some(prior) => {
                return Err(AppError::invalid_input(format!(
                    "prior injury-risk record belongs to athlete {}",
                    prior.athlete_id
                ))
                .with_athlete_id(athlete_id));
            }
            None => {
                debug!("no prior injury-risk record, starting fresh");
                AthleteInjuryRisk::new(athlete_id)
            }
        };

        let mut touched = BTreeSet::new();
        for report in &input.symptoms {
            validate_symptom(report, athlete_id)?;
            risk.get_or_insert(report.body_part)
                .record_symptom(report.kind, report.date(), report.severity);
            touched.insert(report.body_part);
        }

        for session in &input.sessions {
            for record in risk.records_mut() {
                if record.volume.remove(session.event_date, &session.session_id) {
                    touched.insert(record.body_part_side);
                }
            }
        }

        let session_loads = input
            .sessions
            .iter()
            .map(|session| self.aggregator.aggregate_session(session, Some(&risk)))
            .collect::<AppResult<Vec<SessionLoad>>>()?;
        for session_load in session_loads {
            for (side, load) in session_load.loads {
                risk.get_or_insert(side).volume.upsert(
                    session_load.event_date,
                    &session_load.session_id,
                    load,
                );
                touched.insert(side);
            }
        }

        let mut votes_changed = 0_usize;
        for side in &touched {
            if risk
                .get_or_insert(*side)
                .refresh(input.event_date, input.processed_at, &self.config)
            {
                debug!(body_part_side = %side, "vote counts changed");
                votes_changed += 1;
            }
        }

        info!(
            sessions = input.sessions.len(),
            symptoms = input.symptoms.len(),
            touched = touched.len(),
            votes_changed,
            "daily input merged"
        );
        Ok(risk)
    }

    /// Relative load level of `event_date` across every stored part
    ///
    /// Compares today's total volume with last week's average daily volume,
    /// both read from retained contributions so parts trained last week but
    /// not today still count toward the baseline. With no baseline the level
    /// is high.
    #[must_use]
    pub fn relative_load_level(
        &self,
        risk: &AthleteInjuryRisk,
        event_date: NaiveDate,
    ) -> RelativeLoadLevel {
        let week_start = tracking_week_start(event_date);
        let last_week_start = week_start - Duration::days(DAYS_PER_WEEK);
        let tomorrow = event_date + Duration::days(1);

        let mut today = StandardErrorRange::default();
        let mut last_week = StandardErrorRange::default();
        for (_, record) in risk.iter() {
            today.add(&record.volume.total_volume_between(event_date, tomorrow));
            last_week.add(&record.volume.total_volume_between(last_week_start, week_start));
        }
        let baseline = last_week.observed_or_zero() / DAYS_PER_WEEK as f64;
        if baseline <= 0.0 {
            return RelativeLoadLevel::High;
        }
        RelativeLoadLevel::from_ratio(today.observed_or_zero() / baseline, &self.config.relative_load)
    }

    /// Body-part-sides whose records sit at `event_date`
    #[must_use]
    pub fn parts_on(risk: &AthleteInjuryRisk, event_date: NaiveDate) -> Vec<BodyPartSide> {
        risk.iter()
            .filter(|(_, record)| record.event_date == Some(event_date))
            .map(|(side, _)| *side)
            .collect()
    }
}

fn validate_symptom(report: &SymptomReport, athlete_id: Uuid) -> AppResult<()> {
    match report.severity {
        Some(severity) if severity > MAX_SYMPTOM_SEVERITY => Err(AppError::invalid_input(
            format!(
                "symptom severity must be between 0 and {MAX_SYMPTOM_SEVERITY}, got {severity}"
            ),
        )
        .with_athlete_id(athlete_id)
        .with_resource_id(report.body_part.to_string())),
        _ => Ok(()),
    }
}
