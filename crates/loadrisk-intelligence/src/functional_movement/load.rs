// ABOUTME: Ratios that scale an exercise's load onto each muscle group of a movement
// ABOUTME: Joint-action priority, muscle role, and joint-weighted instability of the exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use loadrisk_core::constants::load_distribution::{
    FIXATOR_BASE, FIXATOR_SLOPE, PRIME_MOVER_RATIO, PRIORITY_1_RATIO, PRIORITY_2_RATIO,
    PRIORITY_3_RATIO, PRIORITY_4_RATIO, STABILITY_RATING_SCALE, STABILIZER_BASE,
    STABILIZER_SLOPE, SYNERGIST_RATIO,
};
use loadrisk_core::models::{ExerciseAction, FunctionalMovementType, Joint};

use super::library::BodyPartFunction;

/// Share of the exercise load a joint action of this priority carries
#[must_use]
pub const fn priority_ratio(priority: u8) -> f64 {
    match priority {
        1 => PRIORITY_1_RATIO,
        2 => PRIORITY_2_RATIO,
        3 => PRIORITY_3_RATIO,
        4 => PRIORITY_4_RATIO,
        _ => 0.0,
    }
}

/// Instability the exercise imposes on the joint `movement` acts at
///
/// Ratings are halved onto a 0-1 scale, then weighted between lower and upper
/// body by joint family. Zero unless the exercise applies instability.
#[must_use]
pub fn stability_rating(exercise: &ExerciseAction, movement: FunctionalMovementType) -> f64 {
    if !exercise.apply_instability {
        return 0.0;
    }
    let (lower_weight, upper_weight) = match movement.joint() {
        Joint::Ankle => (0.8, 0.2),
        Joint::Knee => (0.7, 0.3),
        Joint::Hip => (0.6, 0.4),
        Joint::Pelvis | Joint::Trunk => (0.5, 0.5),
        Joint::Elbow | Joint::Wrist => (0.2, 0.8),
        Joint::ShoulderScapula => (0.3, 0.7),
    };
    let lower = exercise.lower_body_stability_rating / STABILITY_RATING_SCALE;
    let upper = exercise.upper_body_stability_rating / STABILITY_RATING_SCALE;
    lower.mul_add(lower_weight, upper * upper_weight)
}

/// Share of the joint-action load a group with this role carries
#[must_use]
pub fn muscle_ratio(function: BodyPartFunction, stability_rating: f64) -> f64 {
    match function {
        BodyPartFunction::PrimeMover => PRIME_MOVER_RATIO,
        BodyPartFunction::Synergist => SYNERGIST_RATIO,
        BodyPartFunction::Stabilizer => STABILIZER_SLOPE.mul_add(stability_rating, STABILIZER_BASE),
        BodyPartFunction::Fixator => FIXATOR_SLOPE.mul_add(stability_rating, FIXATOR_BASE),
        BodyPartFunction::Antagonist => 0.0,
    }
}
