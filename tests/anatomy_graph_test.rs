// ABOUTME: Integration tests for the anatomy graph and qualitative signal propagation
// ABOUTME: Covers construction errors, inverse indices, and tight/pain/sore propagation rules
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use loadrisk_core::errors::ErrorCode;
use loadrisk_core::models::BodyPartLocation as L;
use loadrisk_core::models::BodyPartLocation;
use loadrisk_intelligence::anatomy::{
    BodyPart, BodyPartFactory, PropagationSignal, StandardBodyPartFactory,
};
use loadrisk_intelligence::{AnatomyGraph, PropagationCounters};

fn graph() -> AnatomyGraph {
    AnatomyGraph::standard().unwrap()
}

#[test]
fn test_standard_graph_covers_every_tracked_location() {
    let graph = graph();
    assert_eq!(graph.body_parts().count(), BodyPartLocation::TRACKED.len());
    for location in BodyPartLocation::TRACKED {
        assert_eq!(graph.body_part(location).unwrap().location, location);
    }
}

#[test]
fn test_aggregates_resolve_to_canonical_group() {
    let graph = graph();
    assert_eq!(graph.body_part(L::UpperBody).unwrap().location, L::UpperBackNeck);
    assert_eq!(graph.body_part(L::LowerBody).unwrap().location, L::Glutes);
    assert_eq!(graph.body_part(L::FullBody).unwrap().location, L::CoreStabilizers);
}

#[test]
fn test_inverse_indices_are_exact_transposes() {
    let graph = graph();
    for part in graph.body_parts() {
        for &target in &part.synergists {
            assert!(graph.inverse_synergists(target).contains(&part.location));
        }
        for &target in &part.agonists {
            assert!(graph.inverse_agonists(target).contains(&part.location));
        }
        for &target in &part.antagonists {
            assert!(graph.inverse_antagonists(target).contains(&part.location));
        }
    }

    for location in BodyPartLocation::TRACKED {
        for &origin in graph.inverse_synergists(location) {
            assert!(graph.body_part(origin).unwrap().synergists.contains(&location));
        }
        for &origin in graph.inverse_agonists(location) {
            assert!(graph.body_part(origin).unwrap().agonists.contains(&location));
        }
        for &origin in graph.inverse_antagonists(location) {
            assert!(graph.body_part(origin).unwrap().antagonists.contains(&location));
        }
    }
}

#[test]
fn test_mark_tight_marks_antagonists_and_their_synergists() {
    let graph = graph();
    for part in graph.body_parts() {
        let counters = graph.mark_tight(part.location, PropagationCounters::new()).unwrap();
        assert_eq!(counters.counts(part.location).tight, 1);

        for &antagonist in &part.antagonists {
            let underactive = counters
                .steps()
                .iter()
                .filter(|step| {
                    step.target == antagonist && step.signal == PropagationSignal::UnderactiveRisk
                })
                .count();
            assert_eq!(underactive, 1, "{} -> {antagonist}", part.location);

            for &synergist in &graph.body_part(antagonist).unwrap().synergists {
                let expected = part
                    .antagonists
                    .iter()
                    .filter(|other| graph.body_part(**other).unwrap().synergists.contains(&synergist))
                    .count();
                assert_eq!(
                    counters.counts(synergist).overactive_risk as usize,
                    expected,
                    "{} -> {antagonist} -> {synergist}",
                    part.location
                );
            }
        }
    }
}

#[test]
fn test_mark_pain_on_joint() {
    let counters = graph().mark_pain(L::Knee, PropagationCounters::new()).unwrap();

    for stabilizer in [L::Calves, L::Glutes, L::Groin] {
        let counts = counters.counts(stabilizer);
        assert_eq!(counts.tight_risk, 1);
        assert_eq!(counts.overactive_risk, 1);
    }
    assert_eq!(counters.counts(L::Quads).weakness, 1);
    assert_eq!(counters.counts(L::Hamstrings).weakness, 1);
    assert!(counters.ranked_soreness_sources().is_empty());
}

#[test]
fn test_mark_pain_on_muscle_weakens_antagonists() {
    let counters = graph().mark_pain(L::Biceps, PropagationCounters::new()).unwrap();
    assert_eq!(counters.counts(L::Triceps).weakness, 1);
    assert_eq!(counters.counts(L::Biceps).tight_risk, 0);
    // lats and forearm list biceps as a synergist; the elbow lists it as an agonist
    let sources: Vec<BodyPartLocation> = counters
        .ranked_soreness_sources()
        .into_iter()
        .map(|(location, _)| location)
        .collect();
    assert_eq!(sources, vec![L::Elbow, L::Lats, L::Forearm]);
}

#[test]
fn test_mark_sore_ranks_soreness_sources() {
    let counters = graph().mark_sore(L::Hamstrings, PropagationCounters::new()).unwrap();

    assert_eq!(counters.counts(L::Hamstrings).overactive, 1);
    assert_eq!(counters.counts(L::Quads).weakness, 1);
    assert_eq!(counters.counts(L::HipFlexor).weakness, 1);
    assert_eq!(
        counters.ranked_soreness_sources(),
        vec![(L::LowerBack, 1), (L::Glutes, 1), (L::Groin, 1), (L::Calves, 1)]
    );
}

#[test]
fn test_counters_thread_through_calls() {
    let graph = graph();
    let counters = graph.mark_sore(L::Quads, PropagationCounters::new()).unwrap();
    let first_steps = counters.steps().len();
    let counters = graph.mark_sore(L::Quads, counters).unwrap();

    assert_eq!(counters.counts(L::Quads).overactive, 2);
    assert_eq!(counters.steps().len(), first_steps * 2);
    assert!(counters.touched().any(|location| location == L::Hamstrings));
}

struct MissingAchilles;

impl BodyPartFactory for MissingAchilles {
    fn body_part(&self, location: BodyPartLocation) -> Option<BodyPart> {
        if location == L::Achilles {
            None
        } else {
            StandardBodyPartFactory.body_part(location)
        }
    }
}

struct DanglingRelation;

impl BodyPartFactory for DanglingRelation {
    fn body_part(&self, location: BodyPartLocation) -> Option<BodyPart> {
        let part = StandardBodyPartFactory.body_part(location)?;
        if location == L::Shin {
            Some(part.with_synergists(&[L::LowerBody]))
        } else {
            Some(part)
        }
    }
}

#[test]
fn test_missing_relations_are_configuration_errors() {
    let error = AnatomyGraph::new(&MissingAchilles).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert_eq!(error.context.resource_id.as_deref(), Some("achilles"));

    let error = AnatomyGraph::new(&DanglingRelation).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    assert!(error.message.contains("lower_body"));
}
