// ABOUTME: Consensus ballot over persistent symptom signals for one body-part-side
// ABOUTME: Classifies the part as overactive, underactive, or weak once enough signals agree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use loadrisk_core::models::SymptomKind;
use serde::{Deserialize, Serialize};

use super::symptoms::SymptomWindow;
use crate::config::VoteConfig;

/// Classification a vote count argues for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteKind {
    /// Overactive and shortened
    OveractiveShort,
    /// Overactive and lengthened
    OveractiveLong,
    /// Underactive and shortened
    UnderactiveShort,
    /// Underactive and lengthened
    UnderactiveLong,
    /// Weak
    Weak,
}

impl VoteKind {
    /// Every classification, in ballot order
    pub const ALL: [Self; 5] = [
        Self::OveractiveShort,
        Self::OveractiveLong,
        Self::UnderactiveShort,
        Self::UnderactiveLong,
        Self::Weak,
    ];

    /// Symptom categories that count toward this classification
    #[must_use]
    pub const fn qualifying_symptoms(self) -> &'static [SymptomKind] {
        match self {
            Self::OveractiveShort => &[
                SymptomKind::OveractiveShort,
                SymptomKind::Tight,
                SymptomKind::Knots,
                SymptomKind::Short,
            ],
            Self::OveractiveLong => &[SymptomKind::OveractiveLong, SymptomKind::Long],
            Self::UnderactiveShort => &[SymptomKind::UnderactiveShort, SymptomKind::Short],
            Self::UnderactiveLong => &[SymptomKind::UnderactiveLong, SymptomKind::Long],
            Self::Weak => &[SymptomKind::Weak],
        }
    }
}

/// Vote counts and when they last changed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteTally {
    /// Signals arguing overactive-short
    pub overactive_short_vote_count: u32,
    /// Signals arguing overactive-long
    pub overactive_long_vote_count: u32,
    /// Signals arguing underactive-short
    pub underactive_short_vote_count: u32,
    /// Signals arguing underactive-long
    pub underactive_long_vote_count: u32,
    /// Signals arguing weak
    pub weak_vote_count: u32,
    /// Processing time of the last count change
    pub last_vote_updated_date_time: Option<DateTime<Utc>>,
}

impl VoteTally {
    /// Count for one classification
    #[must_use]
    pub const fn count(&self, kind: VoteKind) -> u32 {
        match kind {
            VoteKind::OveractiveShort => self.overactive_short_vote_count,
            VoteKind::OveractiveLong => self.overactive_long_vote_count,
            VoteKind::UnderactiveShort => self.underactive_short_vote_count,
            VoteKind::UnderactiveLong => self.underactive_long_vote_count,
            VoteKind::Weak => self.weak_vote_count,
        }
    }

    fn set(&mut self, kind: VoteKind, count: u32) {
        let slot = match kind {
            VoteKind::OveractiveShort => &mut self.overactive_short_vote_count,
            VoteKind::OveractiveLong => &mut self.overactive_long_vote_count,
            VoteKind::UnderactiveShort => &mut self.underactive_short_vote_count,
            VoteKind::UnderactiveLong => &mut self.underactive_long_vote_count,
            VoteKind::Weak => &mut self.weak_vote_count,
        };
        *slot = count;
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> u32 {
        VoteKind::ALL.iter().map(|kind| self.count(*kind)).sum()
    }

    /// Share of all votes held by one classification, 0-100
    #[must_use]
    pub fn get_percentage(&self, kind: VoteKind) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        f64::from(self.count(kind)) / f64::from(total) * 100.0
    }

    /// Whether no other classification has a strictly higher count
    #[must_use]
    pub fn is_highest_count(&self, kind: VoteKind) -> bool {
        let count = self.count(kind);
        count > 0 && VoteKind::ALL.iter().all(|other| self.count(*other) <= count)
    }

    /// Classification with enough votes and a clear enough majority
    ///
    /// Ties between leading classifications resolve in ballot order.
    #[must_use]
    pub fn leading_classification(&self, config: &VoteConfig) -> Option<VoteKind> {
        VoteKind::ALL.into_iter().find(|kind| {
            self.is_highest_count(*kind)
                && self.count(*kind) >= config.min_votes
                && self.get_percentage(*kind) >= config.consensus_percent
        })
    }

    /// Recount from the symptom tracks and the compensation day count
    ///
    /// Returns whether any count changed; only then does the update time move.
    pub fn recompute(
        &mut self,
        symptoms: &SymptomWindow,
        compensation_days: u32,
        config: &VoteConfig,
        processed_at: DateTime<Utc>,
    ) -> bool {
        let mut changed = false;
        for kind in VoteKind::ALL {
            let mut count = kind
                .qualifying_symptoms()
                .iter()
                .filter(|symptom| symptoms.track(**symptom).count_last_0_20_days >= config.signal_threshold)
                .count();
            if kind == VoteKind::Weak && compensation_days >= config.signal_threshold {
                count += 1;
            }
            let count = u32::try_from(count).unwrap_or(u32::MAX);
            if self.count(kind) != count {
                self.set(kind, count);
                changed = true;
            }
        }
        if changed {
            self.last_vote_updated_date_time = Some(processed_at);
        }
        changed
    }
}
