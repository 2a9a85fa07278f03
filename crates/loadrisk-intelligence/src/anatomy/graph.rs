// ABOUTME: Immutable anatomy graph with inverse relation indices
// ABOUTME: Propagates tight, pain, and soreness reports to related parts through an explicit accumulator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use loadrisk_core::errors::{AppError, AppResult};
use loadrisk_core::models::BodyPartLocation;
use std::collections::BTreeMap;
use tracing::debug;

use super::body_part::{BodyPart, BodyPartFactory, StandardBodyPartFactory};
use super::propagation::{PropagationCounters, PropagationSignal};

/// Reference-data graph of biomechanical relations between body parts
///
/// Built once, then shared read-only (typically behind an `Arc`).
#[derive(Debug, Clone)]
pub struct AnatomyGraph {
    nodes: BTreeMap<BodyPartLocation, BodyPart>,
    inverse_synergists: BTreeMap<BodyPartLocation, Vec<BodyPartLocation>>,
    inverse_agonists: BTreeMap<BodyPartLocation, Vec<BodyPartLocation>>,
    inverse_antagonists: BTreeMap<BodyPartLocation, Vec<BodyPartLocation>>,
}

impl AnatomyGraph {
    /// Build the graph by asking `factory` for every tracked location
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the factory has no node for a tracked
    /// location, returns a node for the wrong location, or a relation points at a
    /// location that is not a graph node
    pub fn new(factory: &dyn BodyPartFactory) -> AppResult<Self> {
        let mut nodes = BTreeMap::new();
        for location in BodyPartLocation::TRACKED {
            let part = factory.body_part(location).ok_or_else(|| {
                AppError::config(format!("no anatomy relations for {location}"))
                    .with_resource_id(location.as_str())
            })?;
            if part.location != location {
                return Err(AppError::config(format!(
                    "factory returned {} when asked for {location}",
                    part.location
                ))
                .with_resource_id(location.as_str()));
            }
            nodes.insert(location, part);
        }

        for part in nodes.values() {
            if let Some(missing) = part.related().find(|target| !nodes.contains_key(target)) {
                return Err(AppError::config(format!(
                    "{} references {missing}, which is not a graph node",
                    part.location
                ))
                .with_resource_id(part.location.as_str()));
            }
        }

        let inverse_synergists = invert(&nodes, |part| &part.synergists);
        let inverse_agonists = invert(&nodes, |part| &part.agonists);
        let inverse_antagonists = invert(&nodes, |part| &part.antagonists);

        debug!(nodes = nodes.len(), "anatomy graph built");
        Ok(Self {
            nodes,
            inverse_synergists,
            inverse_agonists,
            inverse_antagonists,
        })
    }

    /// Graph built from the reference relation table
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the reference table is inconsistent
    pub fn standard() -> AppResult<Self> {
        Self::new(&StandardBodyPartFactory)
    }

    /// Node for a location; aggregates resolve to their canonical group
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the location is not a graph node
    pub fn body_part(&self, location: BodyPartLocation) -> AppResult<&BodyPart> {
        let resolved = location.get_muscle_group();
        self.nodes.get(&resolved).ok_or_else(|| {
            AppError::config(format!("{resolved} is not an anatomy graph node"))
                .with_resource_id(resolved.as_str())
        })
    }

    /// Every node, in location order
    pub fn body_parts(&self) -> impl Iterator<Item = &BodyPart> {
        self.nodes.values()
    }

    /// Parts listing `location` as a synergist
    #[must_use]
    pub fn inverse_synergists(&self, location: BodyPartLocation) -> &[BodyPartLocation] {
        lookup(&self.inverse_synergists, location.get_muscle_group())
    }

    /// Parts listing `location` as an agonist
    #[must_use]
    pub fn inverse_agonists(&self, location: BodyPartLocation) -> &[BodyPartLocation] {
        lookup(&self.inverse_agonists, location.get_muscle_group())
    }

    /// Parts listing `location` as an antagonist
    #[must_use]
    pub fn inverse_antagonists(&self, location: BodyPartLocation) -> &[BodyPartLocation] {
        lookup(&self.inverse_antagonists, location.get_muscle_group())
    }

    /// Propagate a tightness report
    ///
    /// The target's tight counter rises; each antagonist gains underactive risk
    /// and each synergist of each antagonist gains overactive risk.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a visited location is not a graph node
    pub fn mark_tight(
        &self,
        location: BodyPartLocation,
        mut counters: PropagationCounters,
    ) -> AppResult<PropagationCounters> {
        let part = self.body_part(location)?;
        let source = part.location;
        counters.record(source, source, PropagationSignal::Tight);
        for &antagonist in &part.antagonists {
            counters.record(source, antagonist, PropagationSignal::UnderactiveRisk);
            for &synergist in &self.body_part(antagonist)?.synergists {
                counters.record(source, synergist, PropagationSignal::OveractiveRisk);
            }
        }
        Ok(counters)
    }

    /// Propagate a pain report
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the location is not a graph node
    pub fn mark_pain(
        &self,
        location: BodyPartLocation,
        mut counters: PropagationCounters,
    ) -> AppResult<PropagationCounters> {
        let part = self.body_part(location)?;
        let source = part.location;
        if part.is_joint() {
            for &stabilizer in &part.stabilizers {
                counters.record(source, stabilizer, PropagationSignal::TightRisk);
                counters.record(source, stabilizer, PropagationSignal::OveractiveRisk);
            }
            for &mover in part.agonists.iter().chain(&part.antagonists) {
                counters.record(source, mover, PropagationSignal::Weakness);
            }
        } else {
            for &antagonist in &part.antagonists {
                counters.record(source, antagonist, PropagationSignal::Weakness);
            }
        }
        Ok(self.mark_soreness_sources(source, counters))
    }

    /// Propagate a soreness report
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the location is not a graph node
    pub fn mark_sore(
        &self,
        location: BodyPartLocation,
        mut counters: PropagationCounters,
    ) -> AppResult<PropagationCounters> {
        let part = self.body_part(location)?;
        let source = part.location;
        counters.record(source, source, PropagationSignal::Overactive);
        for &antagonist in &part.antagonists {
            counters.record(source, antagonist, PropagationSignal::Weakness);
        }
        Ok(self.mark_soreness_sources(source, counters))
    }

    fn mark_soreness_sources(
        &self,
        source: BodyPartLocation,
        mut counters: PropagationCounters,
    ) -> PropagationCounters {
        for &origin in self
            .inverse_synergists(source)
            .iter()
            .chain(self.inverse_agonists(source))
        {
            counters.record(source, origin, PropagationSignal::PossibleSorenessSource);
        }
        counters
    }
}

fn invert(
    nodes: &BTreeMap<BodyPartLocation, BodyPart>,
    relation: impl Fn(&BodyPart) -> &Vec<BodyPartLocation>,
) -> BTreeMap<BodyPartLocation, Vec<BodyPartLocation>> {
    let mut inverse: BTreeMap<BodyPartLocation, Vec<BodyPartLocation>> = BTreeMap::new();
    for part in nodes.values() {
        for &target in relation(part) {
            inverse.entry(target).or_default().push(part.location);
        }
    }
    inverse
}

fn lookup(
    index: &BTreeMap<BodyPartLocation, Vec<BodyPartLocation>>,
    location: BodyPartLocation,
) -> &[BodyPartLocation] {
    index.get(&location).map(Vec::as_slice).unwrap_or_default()
}
