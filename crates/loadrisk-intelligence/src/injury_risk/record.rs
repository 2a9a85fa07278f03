// ABOUTME: Per body-part-side injury-risk record composed of volume, symptom, and vote sub-records
// ABOUTME: The athlete container serializes as a list and rejects duplicate body-part-sides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use loadrisk_core::errors::AppError;
use loadrisk_core::models::{AdaptationType, BodyPartSide, StandardErrorRange, SymptomKind};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{Entry, Iter};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::symptoms::{QualitativeStates, SymptomWindow};
use super::volume::{CompensationWindow, VolumeWindow};
use super::votes::VoteTally;
use crate::config::InjuryRiskConfig;

/// Whether `date` falls inside the `days`-long window ending at `event_date`
#[must_use]
pub fn in_window(date: NaiveDate, event_date: NaiveDate, days: i64) -> bool {
    let age = (event_date - date).num_days();
    (0..days).contains(&age)
}

/// Most severe of two tiers; zero means "no tier" and never wins
#[must_use]
pub fn merge_tiers(a: u8, b: u8) -> u8 {
    match (a, b) {
        (0, other) | (other, 0) => other,
        (a, b) => a.min(b),
    }
}

/// Later of two optional dates
#[must_use]
pub fn merge_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<NaiveDate> {
    a.max(b)
}

/// Largest single-day volume seen for an adaptation goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyMaximum {
    /// Volume on that day
    pub volume: StandardErrorRange,
    /// Day it happened
    pub event_date: NaiveDate,
}

/// Historical daily maxima per adaptation goal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdaptationMaxima {
    /// Maximum per goal
    pub maxima: BTreeMap<AdaptationType, DailyMaximum>,
}

impl AdaptationMaxima {
    /// Fold in one day's per-goal totals; a tie keeps the earlier record
    pub fn update(&mut self, event_date: NaiveDate, totals: &BTreeMap<AdaptationType, StandardErrorRange>) {
        for (adaptation, volume) in totals {
            let Some(observed) = volume.observed_value else {
                continue;
            };
            let candidate = DailyMaximum {
                volume: *volume,
                event_date,
            };
            match self.maxima.entry(*adaptation) {
                Entry::Vacant(slot) => {
                    slot.insert(candidate);
                }
                Entry::Occupied(mut slot) => {
                    if observed > slot.get().volume.observed_or_zero() {
                        slot.insert(candidate);
                    }
                }
            }
        }
    }
}

/// Risk state of one body-part-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPartInjuryRisk {
    /// Part and side this record tracks
    pub body_part_side: BodyPartSide,
    /// Latest date the record has been brought up to
    pub event_date: Option<NaiveDate>,
    /// Training volume
    pub volume: VolumeWindow,
    /// Compensation share of the volume
    pub compensation: CompensationWindow,
    /// Windowed symptom history
    pub symptoms: SymptomWindow,
    /// Qualitative last-seen dates
    pub states: QualitativeStates,
    /// Consensus ballot
    pub votes: VoteTally,
    /// Daily volume maxima per adaptation goal
    pub adaptation: AdaptationMaxima,
}

impl BodyPartInjuryRisk {
    /// Fresh zeroed record
    #[must_use]
    pub fn new(body_part_side: BodyPartSide) -> Self {
        Self {
            body_part_side,
            event_date: None,
            volume: VolumeWindow::default(),
            compensation: CompensationWindow::default(),
            symptoms: SymptomWindow::default(),
            states: QualitativeStates::default(),
            votes: VoteTally::default(),
            adaptation: AdaptationMaxima::default(),
        }
    }

    /// Record a symptom in the windowed history and the qualitative states
    pub fn record_symptom(&mut self, kind: SymptomKind, date: NaiveDate, level: Option<u8>) {
        self.symptoms.record(kind, date, level);
        self.states.record(kind, date, level);
    }

    /// Most recent date a symptom kind was seen
    #[must_use]
    pub fn last_symptom_date(&self, kind: SymptomKind) -> Option<NaiveDate> {
        if kind.is_windowed() {
            self.symptoms.track(kind).last_date
        } else {
            self.states.last_date(kind)
        }
    }

    /// Last-seen dates of every kind that can make this part a compensation cause
    pub fn compensation_trigger_dates(&self) -> impl Iterator<Item = Option<NaiveDate>> + '_ {
        SymptomKind::COMPENSATION_TRIGGERS
            .into_iter()
            .map(|kind| self.last_symptom_date(kind))
    }

    fn highest_level_on(&self, kinds: &[SymptomKind], date: NaiveDate) -> u8 {
        kinds
            .iter()
            .map(|kind| self.symptoms.level_on(*kind, date))
            .max()
            .unwrap_or(0)
    }

    /// Inflammation severity on `date`: the worst sharp or ache level that day
    #[must_use]
    pub fn get_inflammation_severity(&self, date: NaiveDate) -> u8 {
        self.highest_level_on(&[SymptomKind::Sharp, SymptomKind::Ache], date)
    }

    /// Muscle-spasm severity on `date`: the worst tight, sharp, ache, or spasm level that day
    #[must_use]
    pub fn get_muscle_spasm_severity(&self, date: NaiveDate) -> u8 {
        self.highest_level_on(
            &[
                SymptomKind::Tight,
                SymptomKind::Sharp,
                SymptomKind::Ache,
                SymptomKind::MuscleSpasm,
            ],
            date,
        )
    }

    /// Adhesions severity on `date`: the worst tight, sharp, ache, or knots level that day
    #[must_use]
    pub fn get_adhesions_severity(&self, date: NaiveDate) -> u8 {
        self.highest_level_on(
            &[
                SymptomKind::Tight,
                SymptomKind::Sharp,
                SymptomKind::Ache,
                SymptomKind::Knots,
            ],
            date,
        )
    }

    /// Bring the record up to `event_date`: evict, then recompute every sub-record
    ///
    /// The record never moves backwards; an earlier date recomputes at the
    /// current one. Returns whether the vote counts changed.
    pub fn refresh(
        &mut self,
        event_date: NaiveDate,
        processed_at: DateTime<Utc>,
        config: &InjuryRiskConfig,
    ) -> bool {
        let event_date = self
            .event_date
            .map_or(event_date, |current| current.max(event_date));
        self.event_date = Some(event_date);
        self.volume.recompute(event_date, config);
        self.compensation.recompute(&self.volume, event_date, config);
        self.symptoms.recompute(event_date, &config.windows);

        let mut totals: BTreeMap<AdaptationType, StandardErrorRange> = BTreeMap::new();
        for load in self.volume.loads_on(event_date) {
            for (adaptation, volume) in &load.adaptation_volume {
                totals.entry(*adaptation).or_default().add(volume);
            }
        }
        self.adaptation.update(event_date, &totals);

        self.votes.recompute(
            &self.symptoms,
            self.compensation.compensation_count_last_0_20_days,
            &config.votes,
            processed_at,
        )
    }
}

/// Every tracked body-part-side of one athlete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AthleteInjuryRiskList", into = "AthleteInjuryRiskList")]
pub struct AthleteInjuryRisk {
    /// Athlete the records belong to
    pub athlete_id: Uuid,
    items: BTreeMap<BodyPartSide, BodyPartInjuryRisk>,
}

impl AthleteInjuryRisk {
    /// Athlete with no records
    #[must_use]
    pub const fn new(athlete_id: Uuid) -> Self {
        Self {
            athlete_id,
            items: BTreeMap::new(),
        }
    }

    /// Record for a body-part-side
    #[must_use]
    pub fn get(&self, side: &BodyPartSide) -> Option<&BodyPartInjuryRisk> {
        self.items.get(side)
    }

    /// Record for a body-part-side, created fresh when missing
    pub fn get_or_insert(&mut self, side: BodyPartSide) -> &mut BodyPartInjuryRisk {
        self.items
            .entry(side)
            .or_insert_with(|| BodyPartInjuryRisk::new(side))
    }

    /// Mutable iteration over every record
    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut BodyPartInjuryRisk> {
        self.items.values_mut()
    }

    /// Iterate records in body-part-side order
    pub fn iter(&self) -> Iter<'_, BodyPartSide, BodyPartInjuryRisk> {
        self.items.iter()
    }

    /// Number of tracked body-part-sides
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is tracked yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Serialize, Deserialize)]
struct AthleteInjuryRiskList {
    athlete_id: Uuid,
    items: Vec<BodyPartInjuryRisk>,
}

impl TryFrom<AthleteInjuryRiskList> for AthleteInjuryRisk {
    type Error = AppError;

    fn try_from(list: AthleteInjuryRiskList) -> Result<Self, Self::Error> {
        let mut items = BTreeMap::new();
        for record in list.items {
            let side = record.body_part_side;
            if items.insert(side, record).is_some() {
                return Err(AppError::invalid_input(format!(
                    "duplicate injury-risk record for {side}"
                ))
                .with_athlete_id(list.athlete_id));
            }
        }
        Ok(Self {
            athlete_id: list.athlete_id,
            items,
        })
    }
}

impl From<AthleteInjuryRisk> for AthleteInjuryRiskList {
    fn from(risk: AthleteInjuryRisk) -> Self {
        Self {
            athlete_id: risk.athlete_id,
            items: risk.items.into_values().collect(),
        }
    }
}
