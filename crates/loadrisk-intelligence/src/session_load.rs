// ABOUTME: Distributes exercise loads onto body-part-sides by movement role, with compensation
// ABOUTME: Per-exercise maps are summed so the session result does not depend on exercise order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Load Aggregation
//!
//! Each joint action of an exercise is paired to the movement that actually
//! receives load, then the movement's groups take their share by priority and
//! role. When a prime mover is itself compromised on the event date (per the
//! prior risk record), the movement's compensating groups take on extra load.

use chrono::{Duration, NaiveDate};
use loadrisk_core::errors::{AppError, AppResult};
use loadrisk_core::models::{
    AdaptationType, BodyPartSide, ExerciseAction, MuscleAction, Side, StandardErrorRange,
    SymptomKind, TrainingSession,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::config::CompensationSeverityConfig;
use crate::functional_movement::{
    muscle_ratio, priority_ratio, stability_rating, BodyPartFunction, FunctionalMovement,
    FunctionalMovementLibrary, FunctionalMovementPairs,
};
use crate::injury_risk::{AthleteInjuryRisk, BodyPartInjuryRisk};

type Loads = BTreeMap<BodyPartSide, MuscleLoad>;

/// Load one body-part-side carried in one session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MuscleLoad {
    /// Concentric and isometric load as prime mover
    pub prime_mover_concentric: StandardErrorRange,
    /// Eccentric load as prime mover
    pub prime_mover_eccentric: StandardErrorRange,
    /// Concentric and isometric load as synergist, stabilizer, or fixator
    pub synergist_concentric: StandardErrorRange,
    /// Eccentric load as synergist, stabilizer, or fixator
    pub synergist_eccentric: StandardErrorRange,
    /// Concentric load taken over from a compromised prime mover
    pub compensating_concentric: StandardErrorRange,
    /// Eccentric load taken over from a compromised prime mover
    pub compensating_eccentric: StandardErrorRange,
    /// Prime-mover load this part carried while itself a compensation cause
    pub compensation_cause_volume: StandardErrorRange,
    /// Parts this part compensated for
    pub compensating_causes: BTreeSet<BodyPartSide>,
    /// Load by the adaptation goal of the exercises that produced it
    pub adaptation_volume: BTreeMap<AdaptationType, StandardErrorRange>,
}

impl MuscleLoad {
    /// Concentric load across all roles
    #[must_use]
    pub fn concentric_load(&self) -> StandardErrorRange {
        total(&[
            self.prime_mover_concentric,
            self.synergist_concentric,
            self.compensating_concentric,
        ])
    }

    /// Eccentric load across all roles
    #[must_use]
    pub fn eccentric_load(&self) -> StandardErrorRange {
        total(&[
            self.prime_mover_eccentric,
            self.synergist_eccentric,
            self.compensating_eccentric,
        ])
    }

    /// Concentric plus eccentric load
    #[must_use]
    pub fn total_load(&self) -> StandardErrorRange {
        total(&[self.concentric_load(), self.eccentric_load()])
    }

    /// Compensating load in both directions
    #[must_use]
    pub fn compensating_load(&self) -> StandardErrorRange {
        total(&[self.compensating_concentric, self.compensating_eccentric])
    }

    /// Load carried in a role, excluding compensation, for one direction
    #[must_use]
    pub fn role_load(&self, eccentric: bool) -> StandardErrorRange {
        if eccentric {
            total(&[self.prime_mover_eccentric, self.synergist_eccentric])
        } else {
            total(&[self.prime_mover_concentric, self.synergist_concentric])
        }
    }

    /// Whether the part carried any load
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_load().is_empty() && self.compensation_cause_volume.is_empty()
    }

    fn add_role(
        &mut self,
        function: BodyPartFunction,
        eccentric: bool,
        load: &StandardErrorRange,
        adaptation: AdaptationType,
    ) {
        let bucket = match (function, eccentric) {
            (BodyPartFunction::PrimeMover, false) => &mut self.prime_mover_concentric,
            (BodyPartFunction::PrimeMover, true) => &mut self.prime_mover_eccentric,
            (_, false) => &mut self.synergist_concentric,
            (_, true) => &mut self.synergist_eccentric,
        };
        bucket.add(load);
        self.adaptation_volume.entry(adaptation).or_default().add(load);
    }

    fn add_compensation(
        &mut self,
        cause: BodyPartSide,
        eccentric: bool,
        load: &StandardErrorRange,
        adaptation: AdaptationType,
    ) {
        if eccentric {
            self.compensating_eccentric.add(load);
        } else {
            self.compensating_concentric.add(load);
        }
        self.compensating_causes.insert(cause);
        self.adaptation_volume.entry(adaptation).or_default().add(load);
    }

    /// Fold another load into this one
    pub fn merge(&mut self, other: &Self) {
        self.prime_mover_concentric.add(&other.prime_mover_concentric);
        self.prime_mover_eccentric.add(&other.prime_mover_eccentric);
        self.synergist_concentric.add(&other.synergist_concentric);
        self.synergist_eccentric.add(&other.synergist_eccentric);
        self.compensating_concentric.add(&other.compensating_concentric);
        self.compensating_eccentric.add(&other.compensating_eccentric);
        self.compensation_cause_volume.add(&other.compensation_cause_volume);
        self.compensating_causes
            .extend(other.compensating_causes.iter().copied());
        for (adaptation, volume) in &other.adaptation_volume {
            self.adaptation_volume.entry(*adaptation).or_default().add(volume);
        }
    }
}

fn total(parts: &[StandardErrorRange]) -> StandardErrorRange {
    StandardErrorRange::sum(parts).unwrap_or_default()
}

fn merge_into(target: &mut Loads, source: Loads) {
    for (side, load) in source {
        target.entry(side).or_default().merge(&load);
    }
}

/// Loads produced by one session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionLoad {
    /// Session identifier
    pub session_id: String,
    /// Date the session happened
    pub event_date: NaiveDate,
    /// Load per body-part-side
    pub loads: BTreeMap<BodyPartSide, MuscleLoad>,
}

/// Turns sessions into per-part loads using the shared movement reference data
#[derive(Debug, Clone)]
pub struct SessionLoadAggregator {
    pairs: FunctionalMovementPairs,
    library: Arc<FunctionalMovementLibrary>,
    severity: CompensationSeverityConfig,
}

impl SessionLoadAggregator {
    /// Aggregator over explicit reference data
    #[must_use]
    pub const fn new(
        pairs: FunctionalMovementPairs,
        library: Arc<FunctionalMovementLibrary>,
        severity: CompensationSeverityConfig,
    ) -> Self {
        Self {
            pairs,
            library,
            severity,
        }
    }

    /// Movement library in use
    #[must_use]
    pub fn library(&self) -> &Arc<FunctionalMovementLibrary> {
        &self.library
    }

    /// Load every body-part-side carries for one exercise
    ///
    /// `prior` supplies the symptom history used to spot compromised prime
    /// movers on `event_date`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a malformed exercise, or a
    /// configuration error when a movement cannot be paired or has no definition
    #[instrument(skip(self, exercise, prior), fields(exercise_id = %exercise.id))]
    pub fn exercise_load(
        &self,
        exercise: &ExerciseAction,
        event_date: NaiveDate,
        prior: Option<&AthleteInjuryRisk>,
    ) -> AppResult<BTreeMap<BodyPartSide, MuscleLoad>> {
        exercise.validate()?;
        let mut loads = Loads::new();
        for joint_action in &exercise.joint_actions {
            let movement_type = self
                .pairs
                .pair(exercise.primary_muscle_action, joint_action.movement)?;
            let movement = self.library.get(movement_type)?;
            let action_loads = self.joint_action_load(
                exercise,
                movement,
                priority_ratio(joint_action.priority),
                event_date,
                prior,
            );
            merge_into(&mut loads, action_loads);
        }
        debug!(parts = loads.len(), "exercise load distributed");
        Ok(loads)
    }

    fn joint_action_load(
        &self,
        exercise: &ExerciseAction,
        movement: &FunctionalMovement,
        priority: f64,
        event_date: NaiveDate,
        prior: Option<&AthleteInjuryRisk>,
    ) -> Loads {
        let eccentric = exercise.primary_muscle_action == MuscleAction::Eccentric;
        let stability = stability_rating(exercise, movement.movement_type);
        let (left, right) = exercise.dosed_loads();
        let mut loads = Loads::new();
        let mut causes = Vec::new();

        for (location, function) in movement.loaded_parts() {
            let ratio = priority * muscle_ratio(function, stability);
            for side in BodyPartSide::sides_for(location) {
                let base = if side.side == Side::Right { &right } else { &left };
                let load = base.multiply(ratio);
                if load.observed_or_zero() <= 0.0 {
                    continue;
                }
                let part = loads.entry(side).or_default();
                part.add_role(function, eccentric, &load, exercise.adaptation_type);
                if function == BodyPartFunction::PrimeMover {
                    if let Some(severity) = prior
                        .and_then(|risk| risk.get(&side))
                        .and_then(|record| compensation_severity(record, event_date))
                    {
                        part.compensation_cause_volume.add(&load);
                        causes.push((side, severity));
                    }
                }
            }
        }

        for (cause, severity) in causes {
            self.distribute_compensation(
                movement,
                cause,
                severity,
                eccentric,
                exercise.adaptation_type,
                &mut loads,
            );
        }
        loads
    }

    fn distribute_compensation(
        &self,
        movement: &FunctionalMovement,
        cause: BodyPartSide,
        severity: u8,
        eccentric: bool,
        adaptation: AdaptationType,
        loads: &mut Loads,
    ) {
        let receivers = movement.parts_receiving_compensation();
        if receivers.is_empty() {
            return;
        }
        let share = self.severity.factor_for(severity) / receivers.len() as f64;
        for &location in receivers {
            for side in BodyPartSide::sides_for(location) {
                if !side.side.compatible_with(cause.side) {
                    continue;
                }
                let Some(receiver) = loads.get_mut(&side) else {
                    continue;
                };
                let compensating = receiver.role_load(eccentric).multiply(share);
                if compensating.observed_or_zero() <= 0.0 {
                    continue;
                }
                debug!(%cause, receiver = %side, severity, "compensation load applied");
                receiver.add_compensation(cause, eccentric, &compensating, adaptation);
            }
        }
    }

    /// Loads of one session, summed over its exercises
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an empty session id, or any error
    /// from [`Self::exercise_load`]
    #[instrument(skip(self, session, prior), fields(session_id = %session.session_id))]
    pub fn aggregate_session(
        &self,
        session: &TrainingSession,
        prior: Option<&AthleteInjuryRisk>,
    ) -> AppResult<SessionLoad> {
        if session.session_id.trim().is_empty() {
            return Err(AppError::invalid_input("session_id must not be empty"));
        }
        let mut loads = Loads::new();
        for exercise in &session.exercises {
            let exercise_loads = self.exercise_load(exercise, session.event_date, prior)?;
            merge_into(&mut loads, exercise_loads);
        }
        Ok(SessionLoad {
            session_id: session.session_id.clone(),
            event_date: session.event_date,
            loads,
        })
    }

    /// Loads of several sessions folded into one map
    ///
    /// # Errors
    ///
    /// Returns the first error from [`Self::aggregate_session`]
    pub fn aggregate_day(
        &self,
        sessions: &[TrainingSession],
        prior: Option<&AthleteInjuryRisk>,
    ) -> AppResult<BTreeMap<BodyPartSide, MuscleLoad>> {
        let mut loads = Loads::new();
        for session in sessions {
            merge_into(&mut loads, self.aggregate_session(session, prior)?.loads);
        }
        Ok(loads)
    }
}

/// Severity with which a part acts as a compensation cause on `event_date`, if it does
///
/// Spasm, adhesions, and inflammation reported that day contribute their
/// severities, which read the pain-family levels of the same day; the other
/// triggers mark the part as a cause at severity zero. Recent excessive strain
/// counts only alongside non-functional overreaching.
fn compensation_severity(record: &BodyPartInjuryRisk, event_date: NaiveDate) -> Option<u8> {
    let on_date = record
        .compensation_trigger_dates()
        .any(|date| date == Some(event_date));
    let recent = event_date - Duration::days(1);
    let overreaching = record.states.last_excessive_strain_date >= Some(recent)
        && record.states.last_non_functional_overreaching_date >= Some(recent);
    let reported = |kind: SymptomKind| record.last_symptom_date(kind) == Some(event_date);
    (on_date || overreaching).then(|| {
        [
            (SymptomKind::MuscleSpasm, record.get_muscle_spasm_severity(event_date)),
            (SymptomKind::Adhesions, record.get_adhesions_severity(event_date)),
            (SymptomKind::Inflammation, record.get_inflammation_severity(event_date)),
        ]
        .into_iter()
        .filter(|(kind, _)| reported(*kind))
        .map(|(_, severity)| severity)
        .max()
        .unwrap_or(0)
    })
}
