// ABOUTME: Integration tests for movement pairing, the movement library, and load ratios
// ABOUTME: Checks antagonist symmetry, role merging, and priority/role/instability scaling
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use loadrisk_core::errors::ErrorCode;
use loadrisk_core::models::{BodyPartLocation as L, FunctionalMovementType as F, MuscleAction};
use loadrisk_intelligence::functional_movement::{
    muscle_ratio, priority_ratio, stability_rating, BodyPartFunction, FunctionalMovement,
};
use loadrisk_intelligence::{FunctionalMovementLibrary, FunctionalMovementPairs};

#[test]
fn test_standard_pairs_are_symmetric_and_complete() {
    let pairs = FunctionalMovementPairs::standard();
    for movement in F::ALL {
        let antagonist = pairs
            .antagonist(movement)
            .unwrap_or_else(|| panic!("{movement} has no antagonist"));
        assert_eq!(pairs.antagonist(antagonist), Some(movement));
    }
    assert_eq!(pairs.antagonist(F::TrunkRotation), Some(F::TrunkRotation));
}

#[test]
fn test_pair_resolves_by_muscle_action() {
    let pairs = FunctionalMovementPairs::standard();
    assert_eq!(pairs.pair(MuscleAction::Concentric, F::ElbowFlexion).unwrap(), F::ElbowFlexion);
    assert_eq!(pairs.pair(MuscleAction::Isometric, F::ElbowFlexion).unwrap(), F::ElbowFlexion);
    assert_eq!(pairs.pair(MuscleAction::Eccentric, F::ElbowFlexion).unwrap(), F::ElbowExtension);
    assert_eq!(pairs.pair(MuscleAction::Eccentric, F::KneeExtension).unwrap(), F::KneeFlexion);
}

#[test]
fn test_unmapped_eccentric_pair_is_config_error() {
    let pairs = FunctionalMovementPairs::from_pairs(&[(F::KneeFlexion, F::KneeExtension)]);
    assert_eq!(pairs.pair(MuscleAction::Eccentric, F::KneeFlexion).unwrap(), F::KneeExtension);

    let error = pairs.pair(MuscleAction::Eccentric, F::HipFlexion).unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigError);
    // concentric work never needs the table
    assert_eq!(pairs.pair(MuscleAction::Concentric, F::HipFlexion).unwrap(), F::HipFlexion);
}

#[test]
fn test_library_defines_every_movement_with_a_prime_mover() {
    let library = FunctionalMovementLibrary::standard();
    assert_eq!(library.len(), F::ALL.len());
    for movement in F::ALL {
        let definition = library.get(movement).unwrap();
        assert_eq!(definition.movement_type, movement);
        assert!(
            definition.parts_with(BodyPartFunction::PrimeMover).next().is_some(),
            "{movement} has no prime mover"
        );
    }
}

#[test]
fn test_library_missing_definition_is_config_error() {
    let library = FunctionalMovementLibrary::from_movements([
        FunctionalMovement::new(F::ElbowFlexion).prime_movers(&[L::Biceps]),
    ]);
    assert_eq!(library.len(), 1);
    assert_eq!(library.get(F::ElbowExtension).unwrap_err().code, ErrorCode::ConfigError);
}

#[test]
fn test_roles_merge_by_ranking() {
    assert_eq!(
        BodyPartFunction::Synergist.merge(BodyPartFunction::PrimeMover),
        BodyPartFunction::PrimeMover
    );
    assert_eq!(
        BodyPartFunction::Fixator.merge(BodyPartFunction::Stabilizer),
        BodyPartFunction::Stabilizer
    );
    assert_eq!(
        BodyPartFunction::Antagonist.merge(BodyPartFunction::Fixator),
        BodyPartFunction::Antagonist
    );

    let library = FunctionalMovementLibrary::standard();
    let elbow_flexion = library.get(F::ElbowFlexion).unwrap();
    // listed as prime mover and synergist
    assert_eq!(elbow_flexion.function_of(L::Biceps), Some(BodyPartFunction::PrimeMover));
    // listed as stabilizer and antagonist
    assert_eq!(elbow_flexion.function_of(L::Forearm), Some(BodyPartFunction::Stabilizer));
    assert_eq!(elbow_flexion.function_of(L::Triceps), Some(BodyPartFunction::Antagonist));
    assert!(elbow_flexion.loaded_parts().all(|(part, _)| part != L::Triceps));

    let knee_flexion = library.get(F::KneeFlexion).unwrap();
    assert_eq!(knee_flexion.function_of(L::Calves), Some(BodyPartFunction::Stabilizer));
    assert_eq!(knee_flexion.parts_receiving_compensation(), &[L::Calves, L::Groin]);
}

#[test]
fn test_priority_and_role_ratios() {
    assert!((priority_ratio(1) - 1.0).abs() < f64::EPSILON);
    assert!((priority_ratio(2) - 0.6).abs() < f64::EPSILON);
    assert!((priority_ratio(3) - 0.3).abs() < f64::EPSILON);
    assert!((priority_ratio(4) - 0.15).abs() < f64::EPSILON);
    assert!(priority_ratio(5).abs() < f64::EPSILON);

    assert!((muscle_ratio(BodyPartFunction::PrimeMover, 0.8) - 1.0).abs() < f64::EPSILON);
    assert!((muscle_ratio(BodyPartFunction::Synergist, 0.8) - 0.6).abs() < f64::EPSILON);
    assert!((muscle_ratio(BodyPartFunction::Stabilizer, 0.0) - 0.05).abs() < 1e-12);
    assert!((muscle_ratio(BodyPartFunction::Stabilizer, 1.0) - 0.2).abs() < 1e-12);
    assert!((muscle_ratio(BodyPartFunction::Fixator, 0.0) - 0.2).abs() < 1e-12);
    assert!((muscle_ratio(BodyPartFunction::Fixator, 1.0) - 0.3).abs() < 1e-12);
    assert!(muscle_ratio(BodyPartFunction::Antagonist, 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_stability_rating_weights_by_joint() {
    let squat = common::squat(100.0);
    // knee: 0.7 lower, 0.3 upper on ratings halved to 0.25 and 0.1
    assert!((stability_rating(&squat, F::KneeExtension) - 0.205).abs() < 1e-12);
    // trunk splits evenly
    assert!((stability_rating(&squat, F::TrunkExtension) - 0.175).abs() < 1e-12);

    let curl = common::curl(10.0);
    assert!(stability_rating(&curl, F::ElbowFlexion).abs() < f64::EPSILON);
}
