// ABOUTME: Retained symptom events, per-category windowed tracks, and qualitative last-seen dates
// ABOUTME: Counts are always recomputed from the retained events; last-seen values survive eviction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use loadrisk_core::models::SymptomKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::record::{in_window, merge_dates};
use crate::config::WindowConfig;

/// One symptom of one kind on one date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEvent {
    /// Category
    pub kind: SymptomKind,
    /// Date it was reported for
    pub date: NaiveDate,
    /// Highest severity reported that day
    pub level: Option<u8>,
}

/// Windowed counters for one symptom category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomTrack {
    /// Days with the symptom in the short window
    pub count_last_0_10_days: u32,
    /// Days with the symptom in the long window
    pub count_last_0_20_days: u32,
    /// Severity on the most recent day reported
    pub last_level: Option<u8>,
    /// Most recent day reported
    pub last_date: Option<NaiveDate>,
}

impl SymptomTrack {
    fn observe(&mut self, date: NaiveDate, level: Option<u8>) {
        match self.last_date {
            Some(last) if last > date => {}
            Some(last) if last == date => self.last_level = self.last_level.max(level),
            _ => {
                self.last_date = Some(date);
                self.last_level = level;
            }
        }
    }
}

/// Symptom history of one body-part-side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SymptomWindow {
    events: Vec<SymptomEvent>,
    /// One track per windowed category that has ever been reported
    pub tracks: BTreeMap<SymptomKind, SymptomTrack>,
}

impl SymptomWindow {
    /// Retained events, ordered by kind then date
    #[must_use]
    pub fn events(&self) -> &[SymptomEvent] {
        &self.events
    }

    /// Track for a category (zeroed when never reported)
    #[must_use]
    pub fn track(&self, kind: SymptomKind) -> SymptomTrack {
        self.tracks.get(&kind).copied().unwrap_or_default()
    }

    /// Record a symptom; a repeat of the same kind and date keeps the higher level
    pub fn record(&mut self, kind: SymptomKind, date: NaiveDate, level: Option<u8>) {
        match self
            .events
            .binary_search_by(|event| (event.kind, event.date).cmp(&(kind, date)))
        {
            Ok(index) => {
                let event = &mut self.events[index];
                event.level = event.level.max(level);
            }
            Err(index) => self.events.insert(index, SymptomEvent { kind, date, level }),
        }
        if kind.is_windowed() {
            self.tracks.entry(kind).or_default().observe(date, level);
        }
    }

    /// Highest level reported for a kind on a date, zero when none
    #[must_use]
    pub fn level_on(&self, kind: SymptomKind, date: NaiveDate) -> u8 {
        self.events
            .iter()
            .filter(|event| event.kind == kind && event.date == date)
            .filter_map(|event| event.level)
            .max()
            .unwrap_or(0)
    }

    /// Drop events outside the long window and recount every track
    pub fn recompute(&mut self, event_date: NaiveDate, windows: &WindowConfig) {
        self.events
            .retain(|event| event.date > event_date || in_window(event.date, event_date, windows.long_days));
        for (kind, track) in &mut self.tracks {
            let dates = || {
                self.events
                    .iter()
                    .filter(move |event| event.kind == *kind)
                    .map(|event| event.date)
            };
            track.count_last_0_10_days = count_in(dates(), event_date, windows.short_days);
            track.count_last_0_20_days = count_in(dates(), event_date, windows.long_days);
        }
    }
}

fn count_in(dates: impl Iterator<Item = NaiveDate>, event_date: NaiveDate, days: i64) -> u32 {
    let count = dates.filter(|date| in_window(*date, event_date, days)).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

/// Last-seen dates for symptoms that are tracked as states rather than counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualitativeStates {
    /// Last muscle spasm
    pub last_muscle_spasm_date: Option<NaiveDate>,
    /// Severity of the last muscle spasm
    pub muscle_spasm_level: Option<u8>,
    /// Last adhesions
    pub last_adhesions_date: Option<NaiveDate>,
    /// Last inhibition
    pub last_inhibited_date: Option<NaiveDate>,
    /// Last excessive strain
    pub last_excessive_strain_date: Option<NaiveDate>,
    /// Last non-functional overreaching
    pub last_non_functional_overreaching_date: Option<NaiveDate>,
    /// Last functional overreaching
    pub last_functional_overreaching_date: Option<NaiveDate>,
    /// Last inflammation
    pub last_inflammation_date: Option<NaiveDate>,
    /// Last muscle imbalance
    pub last_muscle_imbalance_date: Option<NaiveDate>,
    /// Last tendinopathy
    pub last_tendinopathy_date: Option<NaiveDate>,
    /// Last tendinosis
    pub last_tendinosis_date: Option<NaiveDate>,
    /// Last altered joint arthrokinematics
    pub last_altered_joint_arthrokinematics_date: Option<NaiveDate>,
    /// Last movement-dysfunction stress
    pub last_movement_dysfunction_stress_date: Option<NaiveDate>,
    /// Last time the part was flagged as a dysfunction cause
    pub last_dysfunction_cause_date: Option<NaiveDate>,
}

impl QualitativeStates {
    fn slot(&mut self, kind: SymptomKind) -> Option<&mut Option<NaiveDate>> {
        let slot = match kind {
            SymptomKind::MuscleSpasm => &mut self.last_muscle_spasm_date,
            SymptomKind::Adhesions => &mut self.last_adhesions_date,
            SymptomKind::Inhibited => &mut self.last_inhibited_date,
            SymptomKind::ExcessiveStrain => &mut self.last_excessive_strain_date,
            SymptomKind::NonFunctionalOverreaching => {
                &mut self.last_non_functional_overreaching_date
            }
            SymptomKind::FunctionalOverreaching => &mut self.last_functional_overreaching_date,
            SymptomKind::Inflammation => &mut self.last_inflammation_date,
            SymptomKind::MuscleImbalance => &mut self.last_muscle_imbalance_date,
            SymptomKind::Tendinopathy => &mut self.last_tendinopathy_date,
            SymptomKind::Tendinosis => &mut self.last_tendinosis_date,
            SymptomKind::AlteredJointArthrokinematics => {
                &mut self.last_altered_joint_arthrokinematics_date
            }
            SymptomKind::MovementDysfunctionStress => {
                &mut self.last_movement_dysfunction_stress_date
            }
            SymptomKind::DysfunctionCause => &mut self.last_dysfunction_cause_date,
            _ => return None,
        };
        Some(slot)
    }

    /// Last date a qualitative kind was seen; `None` for windowed kinds
    #[must_use]
    pub fn last_date(&self, kind: SymptomKind) -> Option<NaiveDate> {
        let mut copy = *self;
        copy.slot(kind).and_then(|slot| *slot)
    }

    /// Advance the last-seen date of a qualitative kind
    pub fn record(&mut self, kind: SymptomKind, date: NaiveDate, level: Option<u8>) {
        let previous = self.last_muscle_spasm_date;
        let Some(slot) = self.slot(kind) else {
            return;
        };
        *slot = merge_dates(*slot, Some(date));
        if kind == SymptomKind::MuscleSpasm {
            match previous {
                Some(last) if last > date => {}
                Some(last) if last == date => {
                    self.muscle_spasm_level = self.muscle_spasm_level.max(level);
                }
                _ => self.muscle_spasm_level = level,
            }
        }
    }
}
