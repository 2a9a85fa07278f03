// ABOUTME: Retained per-session load contributions with daily, weekly, and compensation roll-ups
// ABOUTME: Contributions are keyed by (date, session id) so a re-sent session replaces its old load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Duration, NaiveDate};
use loadrisk_core::constants::windows::DAYS_PER_WEEK;
use loadrisk_core::models::StandardErrorRange;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::record::{in_window, merge_dates};
use crate::config::{InjuryRiskConfig, TierConfig};
use crate::session_load::MuscleLoad;

/// Load one session put on one body-part-side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContribution {
    /// Date of the session
    pub event_date: NaiveDate,
    /// Session identifier
    pub session_id: String,
    /// Load carried
    pub load: MuscleLoad,
}

/// Training volume of one body-part-side
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeWindow {
    contributions: Vec<SessionContribution>,
    /// Concentric load today, all roles
    pub concentric_volume_today: StandardErrorRange,
    /// Eccentric load today, all roles
    pub eccentric_volume_today: StandardErrorRange,
    /// Prime-mover concentric load today
    pub prime_mover_concentric_volume_today: StandardErrorRange,
    /// Prime-mover eccentric load today
    pub prime_mover_eccentric_volume_today: StandardErrorRange,
    /// Synergist concentric load today
    pub synergist_concentric_volume_today: StandardErrorRange,
    /// Synergist eccentric load today
    pub synergist_eccentric_volume_today: StandardErrorRange,
    /// Compensating concentric load today
    pub compensating_concentric_volume_today: StandardErrorRange,
    /// Compensating eccentric load today
    pub compensating_eccentric_volume_today: StandardErrorRange,
    /// Concentric load earlier in the current tracking week
    pub concentric_volume_this_week: StandardErrorRange,
    /// Eccentric load earlier in the current tracking week
    pub eccentric_volume_this_week: StandardErrorRange,
    /// Concentric load in the previous tracking week
    pub concentric_volume_last_week: StandardErrorRange,
    /// Eccentric load in the previous tracking week
    pub eccentric_volume_last_week: StandardErrorRange,
    /// (this week + today) / last week, total load
    pub total_volume_ramp_today: Option<StandardErrorRange>,
    /// (this week + today) / last week, eccentric load
    pub eccentric_volume_ramp_today: Option<StandardErrorRange>,
    /// Tier of the total ramp (1 most severe, 0 none)
    pub total_volume_ramp_tier: u8,
    /// Tier of the eccentric ramp
    pub eccentric_volume_ramp_tier: u8,
}

impl VolumeWindow {
    /// Retained contributions, ordered by date then session id
    #[must_use]
    pub fn contributions(&self) -> &[SessionContribution] {
        &self.contributions
    }

    /// Insert or replace the contribution of a session
    pub fn upsert(&mut self, event_date: NaiveDate, session_id: &str, load: MuscleLoad) {
        let key = (event_date, session_id);
        match self
            .contributions
            .binary_search_by(|c| (c.event_date, c.session_id.as_str()).cmp(&key))
        {
            Ok(index) => self.contributions[index].load = load,
            Err(index) => self.contributions.insert(
                index,
                SessionContribution {
                    event_date,
                    session_id: session_id.to_owned(),
                    load,
                },
            ),
        }
    }

    /// Remove the contribution of a session; returns whether one existed
    pub fn remove(&mut self, event_date: NaiveDate, session_id: &str) -> bool {
        let before = self.contributions.len();
        self.contributions
            .retain(|c| !(c.event_date == event_date && c.session_id == session_id));
        before != self.contributions.len()
    }

    /// Loads dated `date`
    pub fn loads_on(&self, date: NaiveDate) -> impl Iterator<Item = &MuscleLoad> {
        self.contributions
            .iter()
            .filter(move |c| c.event_date == date)
            .map(|c| &c.load)
    }

    /// Total concentric plus eccentric load today
    #[must_use]
    pub fn total_volume_today(&self) -> StandardErrorRange {
        sum(&[self.concentric_volume_today, self.eccentric_volume_today])
    }

    /// Total concentric plus eccentric load last week
    #[must_use]
    pub fn total_volume_last_week(&self) -> StandardErrorRange {
        sum(&[self.concentric_volume_last_week, self.eccentric_volume_last_week])
    }

    /// Concentric plus eccentric load of retained contributions dated in `[start, end)`
    ///
    /// Reads the contributions directly, so it does not depend on when the
    /// roll-ups were last recomputed.
    #[must_use]
    pub fn total_volume_between(&self, start: NaiveDate, end: NaiveDate) -> StandardErrorRange {
        let loads = loads_where(&self.contributions, |date| date >= start && date < end);
        sum(&[
            sum_of(&loads, MuscleLoad::concentric_load),
            sum_of(&loads, MuscleLoad::eccentric_load),
        ])
    }

    /// Evict old contributions, then recompute every roll-up and ramp
    pub fn recompute(&mut self, event_date: NaiveDate, config: &InjuryRiskConfig) {
        let long_days = config.windows.long_days;
        self.contributions
            .retain(|c| c.event_date > event_date || in_window(c.event_date, event_date, long_days));

        let week_start = tracking_week_start(event_date);
        let last_week_start = week_start - Duration::days(DAYS_PER_WEEK);

        let today = loads_where(&self.contributions, |date| date == event_date);
        let this_week = loads_where(&self.contributions, |date| {
            date >= week_start && date < event_date
        });
        let last_week = loads_where(&self.contributions, |date| {
            date >= last_week_start && date < week_start
        });

        self.concentric_volume_today = sum_of(&today, MuscleLoad::concentric_load);
        self.eccentric_volume_today = sum_of(&today, MuscleLoad::eccentric_load);
        self.prime_mover_concentric_volume_today = sum_of(&today, |l| l.prime_mover_concentric);
        self.prime_mover_eccentric_volume_today = sum_of(&today, |l| l.prime_mover_eccentric);
        self.synergist_concentric_volume_today = sum_of(&today, |l| l.synergist_concentric);
        self.synergist_eccentric_volume_today = sum_of(&today, |l| l.synergist_eccentric);
        self.compensating_concentric_volume_today = sum_of(&today, |l| l.compensating_concentric);
        self.compensating_eccentric_volume_today = sum_of(&today, |l| l.compensating_eccentric);
        self.concentric_volume_this_week = sum_of(&this_week, MuscleLoad::concentric_load);
        self.eccentric_volume_this_week = sum_of(&this_week, MuscleLoad::eccentric_load);
        self.concentric_volume_last_week = sum_of(&last_week, MuscleLoad::concentric_load);
        self.eccentric_volume_last_week = sum_of(&last_week, MuscleLoad::eccentric_load);

        let total_recent = sum(&[
            self.concentric_volume_this_week,
            self.eccentric_volume_this_week,
            self.concentric_volume_today,
            self.eccentric_volume_today,
        ]);
        let eccentric_recent = sum(&[self.eccentric_volume_this_week, self.eccentric_volume_today]);
        self.total_volume_ramp_today = ramp(&total_recent, &self.total_volume_last_week());
        self.eccentric_volume_ramp_today = ramp(&eccentric_recent, &self.eccentric_volume_last_week);
        self.total_volume_ramp_tier = tier(self.total_volume_ramp_today.as_ref(), &config.volume_tiers);
        self.eccentric_volume_ramp_tier =
            tier(self.eccentric_volume_ramp_today.as_ref(), &config.volume_tiers);
    }
}

/// Share of today's load taken over from compromised prime movers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompensationWindow {
    /// Compensating load as a percentage of today's total load
    pub total_compensation_percent: Option<StandardErrorRange>,
    /// Compensating eccentric load as a percentage of today's eccentric load
    pub eccentric_compensation_percent: Option<StandardErrorRange>,
    /// Tier of the total percentage (1 most severe, 0 none)
    pub total_compensation_percent_tier: u8,
    /// Tier of the eccentric percentage
    pub eccentric_compensation_percent_tier: u8,
    /// Prime-mover load this part carried today while a compensation cause
    pub compensating_causes_volume_today: StandardErrorRange,
    /// Most recent day the part compensated
    pub last_compensation_date: Option<NaiveDate>,
    /// Days with compensation in the long window
    pub compensation_count_last_0_20_days: u32,
}

impl CompensationWindow {
    /// Recompute from the retained contributions of `volume`
    ///
    /// Call after [`VolumeWindow::recompute`] so today's totals are current.
    pub fn recompute(&mut self, volume: &VolumeWindow, event_date: NaiveDate, config: &InjuryRiskConfig) {
        let today: Vec<&MuscleLoad> = volume.loads_on(event_date).collect();
        let compensating_today = sum(&[
            volume.compensating_concentric_volume_today,
            volume.compensating_eccentric_volume_today,
        ]);
        self.total_compensation_percent =
            percent(&compensating_today, &volume.total_volume_today());
        self.eccentric_compensation_percent = percent(
            &volume.compensating_eccentric_volume_today,
            &volume.eccentric_volume_today,
        );
        self.total_compensation_percent_tier =
            tier(self.total_compensation_percent.as_ref(), &config.compensation_tiers);
        self.eccentric_compensation_percent_tier =
            tier(self.eccentric_compensation_percent.as_ref(), &config.compensation_tiers);
        self.compensating_causes_volume_today = sum_of(&today, |l| l.compensation_cause_volume);

        let compensation_days: BTreeSet<NaiveDate> = volume
            .contributions()
            .iter()
            .filter(|c| c.load.compensating_load().observed_or_zero() > 0.0)
            .map(|c| c.event_date)
            .collect();
        self.last_compensation_date = merge_dates(
            self.last_compensation_date,
            compensation_days.iter().next_back().copied(),
        );
        let in_long_window = compensation_days
            .iter()
            .filter(|date| in_window(**date, event_date, config.windows.long_days))
            .count();
        self.compensation_count_last_0_20_days = u32::try_from(in_long_window).unwrap_or(u32::MAX);
    }
}

/// Monday of the tracking week holding `date`
#[must_use]
pub fn tracking_week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

fn loads_where(
    contributions: &[SessionContribution],
    keep: impl Fn(NaiveDate) -> bool,
) -> Vec<&MuscleLoad> {
    contributions
        .iter()
        .filter(|c| keep(c.event_date))
        .map(|c| &c.load)
        .collect()
}

fn sum(parts: &[StandardErrorRange]) -> StandardErrorRange {
    StandardErrorRange::sum(parts).unwrap_or_default()
}

fn sum_of(loads: &[&MuscleLoad], field: impl Fn(&MuscleLoad) -> StandardErrorRange) -> StandardErrorRange {
    let values: Vec<StandardErrorRange> = loads.iter().map(|load| field(load)).collect();
    sum(&values)
}

fn ramp(recent: &StandardErrorRange, last_week: &StandardErrorRange) -> Option<StandardErrorRange> {
    if last_week.observed_or_zero() <= 0.0 {
        return None;
    }
    Some(recent.divide_range(last_week))
}

fn percent(part: &StandardErrorRange, whole: &StandardErrorRange) -> Option<StandardErrorRange> {
    if whole.observed_or_zero() <= 0.0 {
        return None;
    }
    let part = if part.is_empty() {
        StandardErrorRange::observed(0.0)
    } else {
        *part
    };
    Some(part.divide_range(whole).multiply(100.0))
}

fn tier(value: Option<&StandardErrorRange>, tiers: &TierConfig) -> u8 {
    value
        .and_then(|range| range.observed_value)
        .map_or(0, |observed| tiers.tier_for(observed))
}
