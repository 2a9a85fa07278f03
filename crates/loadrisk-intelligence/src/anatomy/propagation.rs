// ABOUTME: Explicit accumulator threaded through anatomy-graph propagation calls
// ABOUTME: Per-location signal counters plus an ordered log of every increment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use loadrisk_core::models::BodyPartLocation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Qualitative signal raised on a body part during propagation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropagationSignal {
    /// The part itself is tight
    Tight,
    /// Risk of the part becoming tight
    TightRisk,
    /// The part itself is overactive
    Overactive,
    /// Risk of the part becoming overactive
    OveractiveRisk,
    /// Risk of the part becoming underactive
    UnderactiveRisk,
    /// Likely weakness
    Weakness,
    /// The part may be the origin of soreness felt elsewhere
    PossibleSorenessSource,
}

/// Counters for one location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalCounts {
    /// Times marked tight
    pub tight: u32,
    /// Tight-risk increments
    pub tight_risk: u32,
    /// Times marked overactive
    pub overactive: u32,
    /// Overactive-risk increments
    pub overactive_risk: u32,
    /// Underactive-risk increments
    pub underactive_risk: u32,
    /// Weakness increments
    pub weakness: u32,
    /// Possible-soreness-source increments
    pub possible_soreness_source: u32,
}

impl SignalCounts {
    /// Current count for one signal
    #[must_use]
    pub const fn get(&self, signal: PropagationSignal) -> u32 {
        match signal {
            PropagationSignal::Tight => self.tight,
            PropagationSignal::TightRisk => self.tight_risk,
            PropagationSignal::Overactive => self.overactive,
            PropagationSignal::OveractiveRisk => self.overactive_risk,
            PropagationSignal::UnderactiveRisk => self.underactive_risk,
            PropagationSignal::Weakness => self.weakness,
            PropagationSignal::PossibleSorenessSource => self.possible_soreness_source,
        }
    }

    fn increment(&mut self, signal: PropagationSignal) {
        let slot = match signal {
            PropagationSignal::Tight => &mut self.tight,
            PropagationSignal::TightRisk => &mut self.tight_risk,
            PropagationSignal::Overactive => &mut self.overactive,
            PropagationSignal::OveractiveRisk => &mut self.overactive_risk,
            PropagationSignal::UnderactiveRisk => &mut self.underactive_risk,
            PropagationSignal::Weakness => &mut self.weakness,
            PropagationSignal::PossibleSorenessSource => &mut self.possible_soreness_source,
        };
        *slot = slot.saturating_add(1);
    }
}

/// One logged increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagationStep {
    /// Location the propagation call started from
    pub source: BodyPartLocation,
    /// Location whose counter changed
    pub target: BodyPartLocation,
    /// Counter that changed
    pub signal: PropagationSignal,
}

/// Counters and mutation log carried across propagation calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropagationCounters {
    counts: BTreeMap<BodyPartLocation, SignalCounts>,
    steps: Vec<PropagationStep>,
}

impl PropagationCounters {
    /// Empty accumulator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment one counter and log it
    pub fn record(
        &mut self,
        source: BodyPartLocation,
        target: BodyPartLocation,
        signal: PropagationSignal,
    ) {
        self.counts.entry(target).or_default().increment(signal);
        self.steps.push(PropagationStep {
            source,
            target,
            signal,
        });
    }

    /// Counters for a location (zero when never touched)
    #[must_use]
    pub fn counts(&self, location: BodyPartLocation) -> SignalCounts {
        self.counts.get(&location).copied().unwrap_or_default()
    }

    /// Every increment, in application order
    #[must_use]
    pub fn steps(&self) -> &[PropagationStep] {
        &self.steps
    }

    /// Locations touched so far
    pub fn touched(&self) -> impl Iterator<Item = BodyPartLocation> + '_ {
        self.counts.keys().copied()
    }

    /// Candidate soreness origins, most frequently implicated first
    ///
    /// Ties keep location order so the ranking is deterministic.
    #[must_use]
    pub fn ranked_soreness_sources(&self) -> Vec<(BodyPartLocation, u32)> {
        let mut ranked: Vec<(BodyPartLocation, u32)> = self
            .counts
            .iter()
            .filter(|(_, counts)| counts.possible_soreness_source > 0)
            .map(|(location, counts)| (*location, counts.possible_soreness_source))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }
}
