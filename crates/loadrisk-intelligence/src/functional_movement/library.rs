// ABOUTME: Reference library mapping each functional movement to the muscle groups that perform it
// ABOUTME: Each group holds one role per movement, resolved by the body-part-function merge ranking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use loadrisk_core::errors::{AppError, AppResult};
use loadrisk_core::models::{BodyPartLocation, FunctionalMovementType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use BodyPartLocation as L;
use FunctionalMovementType as F;

/// Role a muscle group plays in a movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPartFunction {
    /// Main force producer
    PrimeMover,
    /// Produces the opposing motion
    Antagonist,
    /// Assists the prime mover
    Synergist,
    /// Steadies the moving joint
    Stabilizer,
    /// Anchors the segment the movement works from
    Fixator,
}

impl BodyPartFunction {
    /// Merge ranking; the lower rank wins when a group holds two roles
    #[must_use]
    pub const fn ranking(self) -> u8 {
        match self {
            Self::PrimeMover => 0,
            Self::Stabilizer => 1,
            Self::Synergist => 2,
            Self::Antagonist => 3,
            Self::Fixator => 4,
        }
    }

    /// Role that survives when a group is assigned both
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        if other.ranking() < self.ranking() {
            other
        } else {
            self
        }
    }

    /// Whether this role carries load during the movement
    #[must_use]
    pub const fn is_loaded(self) -> bool {
        !matches!(self, Self::Antagonist)
    }
}

/// Muscle groups involved in one functional movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionalMovement {
    /// Movement described
    pub movement_type: FunctionalMovementType,
    roles: BTreeMap<BodyPartLocation, BodyPartFunction>,
    parts_receiving_compensation: Vec<BodyPartLocation>,
}

impl FunctionalMovement {
    /// Movement with no groups assigned
    #[must_use]
    pub const fn new(movement_type: FunctionalMovementType) -> Self {
        Self {
            movement_type,
            roles: BTreeMap::new(),
            parts_receiving_compensation: Vec::new(),
        }
    }

    fn assign(mut self, parts: &[BodyPartLocation], function: BodyPartFunction) -> Self {
        for &part in parts {
            let merged = self
                .roles
                .get(&part)
                .map_or(function, |existing| existing.merge(function));
            self.roles.insert(part, merged);
        }
        self
    }

    /// Add prime movers
    #[must_use]
    pub fn prime_movers(self, parts: &[BodyPartLocation]) -> Self {
        self.assign(parts, BodyPartFunction::PrimeMover)
    }

    /// Add synergists
    #[must_use]
    pub fn synergists(self, parts: &[BodyPartLocation]) -> Self {
        self.assign(parts, BodyPartFunction::Synergist)
    }

    /// Add stabilizers
    #[must_use]
    pub fn stabilizers(self, parts: &[BodyPartLocation]) -> Self {
        self.assign(parts, BodyPartFunction::Stabilizer)
    }

    /// Add fixators
    #[must_use]
    pub fn fixators(self, parts: &[BodyPartLocation]) -> Self {
        self.assign(parts, BodyPartFunction::Fixator)
    }

    /// Add antagonists
    #[must_use]
    pub fn antagonists(self, parts: &[BodyPartLocation]) -> Self {
        self.assign(parts, BodyPartFunction::Antagonist)
    }

    /// Set the groups that take over when a prime mover cannot
    #[must_use]
    pub fn receiving_compensation(mut self, parts: &[BodyPartLocation]) -> Self {
        self.parts_receiving_compensation = parts.to_vec();
        self
    }

    /// Role of a group in this movement, if it has one
    #[must_use]
    pub fn function_of(&self, part: BodyPartLocation) -> Option<BodyPartFunction> {
        self.roles.get(&part).copied()
    }

    /// Groups with the given role
    pub fn parts_with(&self, function: BodyPartFunction) -> impl Iterator<Item = BodyPartLocation> + '_ {
        self.roles
            .iter()
            .filter(move |(_, role)| **role == function)
            .map(|(part, _)| *part)
    }

    /// Groups that carry load, with their role
    pub fn loaded_parts(&self) -> impl Iterator<Item = (BodyPartLocation, BodyPartFunction)> + '_ {
        self.roles
            .iter()
            .filter(|(_, role)| role.is_loaded())
            .map(|(part, role)| (*part, *role))
    }

    /// Groups that take over when a prime mover cannot
    #[must_use]
    pub fn parts_receiving_compensation(&self) -> &[BodyPartLocation] {
        &self.parts_receiving_compensation
    }
}

/// Immutable handle to every movement definition
#[derive(Debug, Clone)]
pub struct FunctionalMovementLibrary {
    movements: BTreeMap<FunctionalMovementType, FunctionalMovement>,
}

impl FunctionalMovementLibrary {
    /// Library covering all movement types
    #[must_use]
    pub fn standard() -> Self {
        Self::from_movements(FunctionalMovementType::ALL.into_iter().map(standard_movement))
    }

    /// Library from explicit definitions; a later definition replaces an earlier one
    pub fn from_movements(movements: impl IntoIterator<Item = FunctionalMovement>) -> Self {
        let movements: BTreeMap<_, _> = movements
            .into_iter()
            .map(|movement| (movement.movement_type, movement))
            .collect();
        debug!(movements = movements.len(), "functional movement library loaded");
        Self { movements }
    }

    /// Definition of a movement
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the movement has no definition
    pub fn get(&self, movement: FunctionalMovementType) -> AppResult<&FunctionalMovement> {
        self.movements.get(&movement).ok_or_else(|| {
            AppError::config(format!("no functional movement definition for {movement}"))
                .with_resource_id(movement.to_string())
        })
    }

    /// Number of defined movements
    #[must_use]
    pub fn len(&self) -> usize {
        self.movements.len()
    }

    /// Whether the library is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }
}

impl Default for FunctionalMovementLibrary {
    fn default() -> Self {
        Self::standard()
    }
}

const ANKLE_FIXATORS: [BodyPartLocation; 6] = [
    L::Calves,
    L::Hamstrings,
    L::Groin,
    L::Quads,
    L::HipFlexor,
    L::Glutes,
];

// Long function: one arm per movement type
fn standard_movement(movement: FunctionalMovementType) -> FunctionalMovement {
    match movement {
        F::AnkleDorsiflexion => FunctionalMovement::new(movement)
            .prime_movers(&[L::Shin])
            .stabilizers(&[L::Shin, L::Calves])
            .fixators(&ANKLE_FIXATORS)
            .antagonists(&[L::Shin, L::Calves]),
        F::AnklePlantarFlexion => FunctionalMovement::new(movement)
            .prime_movers(&[L::Calves])
            .synergists(&[L::Shin, L::Calves])
            .stabilizers(&[L::Shin, L::Calves])
            .fixators(&ANKLE_FIXATORS)
            .antagonists(&[L::Shin])
            .receiving_compensation(&[L::Shin]),
        F::InversionOfTheFoot => FunctionalMovement::new(movement)
            .prime_movers(&[L::Shin, L::Calves])
            .synergists(&[L::Calves])
            .stabilizers(&[L::Shin])
            .fixators(&ANKLE_FIXATORS)
            .antagonists(&[L::Shin, L::Calves]),
        F::EversionOfTheFoot => FunctionalMovement::new(movement)
            .prime_movers(&[L::Shin])
            .synergists(&[L::Calves])
            .stabilizers(&[L::Shin, L::Calves])
            .fixators(&ANKLE_FIXATORS)
            .antagonists(&[L::Shin, L::Calves])
            .receiving_compensation(&[L::Calves]),
        F::AnkleDorsiflexionAndInversion => FunctionalMovement::new(movement)
            .prime_movers(&[L::Shin])
            .stabilizers(&[L::Shin])
            .fixators(&ANKLE_FIXATORS)
            .antagonists(&[L::Shin, L::Calves]),
        F::AnklePlantarFlexionAndEversion => FunctionalMovement::new(movement)
            .prime_movers(&[L::Calves])
            .synergists(&[L::Shin])
            .stabilizers(&[L::Shin, L::Calves])
            .fixators(&ANKLE_FIXATORS)
            .antagonists(&[L::Shin])
            .receiving_compensation(&[L::Shin]),
        F::KneeFlexion => FunctionalMovement::new(movement)
            .prime_movers(&[L::Hamstrings])
            .synergists(&[L::Calves, L::Groin])
            .stabilizers(&ANKLE_FIXATORS)
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Glutes, L::Shin, L::Calves])
            .antagonists(&[L::Quads])
            .receiving_compensation(&[L::Calves, L::Groin]),
        F::KneeExtension => FunctionalMovement::new(movement)
            .prime_movers(&[L::Quads])
            .stabilizers(&ANKLE_FIXATORS)
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Glutes, L::Shin, L::Calves])
            .antagonists(&[L::Calves, L::Hamstrings, L::Groin]),
        F::TibialExternalRotation => FunctionalMovement::new(movement)
            .prime_movers(&[L::Hamstrings])
            .fixators(&ANKLE_FIXATORS)
            .antagonists(&[L::Hamstrings]),
        F::TibialInternalRotation => FunctionalMovement::new(movement)
            .prime_movers(&[L::Hamstrings])
            .synergists(&[L::Groin, L::Calves])
            .fixators(&ANKLE_FIXATORS)
            .antagonists(&[L::Hamstrings])
            .receiving_compensation(&[L::Groin, L::Calves]),
        F::HipAdduction => FunctionalMovement::new(movement)
            .prime_movers(&[L::Groin])
            .synergists(&[L::Hamstrings, L::DeepRotatorsHip, L::Glutes])
            .stabilizers(&[L::DeepRotatorsHip])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals])
            .antagonists(&[L::Quads, L::HipFlexor, L::Glutes])
            .receiving_compensation(&[L::Hamstrings, L::DeepRotatorsHip, L::Glutes]),
        F::HipAbduction => FunctionalMovement::new(movement)
            .prime_movers(&[L::Glutes])
            .synergists(&[L::Quads, L::HipFlexor, L::Glutes])
            .stabilizers(&[L::DeepRotatorsHip])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals])
            .antagonists(&[L::Groin, L::DeepRotatorsHip])
            .receiving_compensation(&[L::Quads, L::HipFlexor]),
        F::HipInternalRotation => FunctionalMovement::new(movement)
            .prime_movers(&[L::Glutes])
            .synergists(&[L::Hamstrings, L::Groin, L::HipFlexor, L::Glutes])
            .stabilizers(&[L::DeepRotatorsHip])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals])
            .antagonists(&[L::Hamstrings, L::Groin, L::DeepRotatorsHip, L::Glutes])
            .receiving_compensation(&[L::Hamstrings, L::Groin, L::HipFlexor]),
        F::HipExternalRotation => FunctionalMovement::new(movement)
            .prime_movers(&[L::DeepRotatorsHip])
            .synergists(&[L::Hamstrings, L::Groin, L::DeepRotatorsHip, L::Glutes])
            .stabilizers(&[L::DeepRotatorsHip, L::Glutes])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals])
            .antagonists(&[L::Hamstrings, L::Groin, L::HipFlexor, L::Glutes])
            .receiving_compensation(&[L::Hamstrings, L::Groin, L::Glutes]),
        F::HipExtension => FunctionalMovement::new(movement)
            .prime_movers(&[L::Glutes])
            .synergists(&[L::Hamstrings, L::Groin])
            .stabilizers(&[L::DeepRotatorsHip])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals])
            .antagonists(&[L::Groin, L::Quads, L::HipFlexor])
            .receiving_compensation(&[L::Hamstrings, L::Groin]),
        F::HipFlexion => FunctionalMovement::new(movement)
            .prime_movers(&[L::HipFlexor])
            .synergists(&[L::Groin, L::Quads, L::HipFlexor])
            .stabilizers(&[L::DeepRotatorsHip])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals])
            .antagonists(&[L::Hamstrings, L::Groin, L::Glutes])
            .receiving_compensation(&[L::Groin, L::Quads, L::Glutes]),
        F::HipHorizontalAbduction => FunctionalMovement::new(movement)
            .prime_movers(&[L::DeepRotatorsHip])
            .synergists(&[L::HipFlexor, L::DeepRotatorsHip, L::Glutes])
            .stabilizers(&[L::Groin, L::DeepRotatorsHip, L::Glutes])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals])
            .antagonists(&[L::Groin])
            .receiving_compensation(&[L::HipFlexor, L::Glutes]),
        F::HipHorizontalAdduction => FunctionalMovement::new(movement)
            .prime_movers(&[L::Groin])
            .synergists(&[L::Groin])
            .stabilizers(&[L::Groin, L::DeepRotatorsHip, L::Glutes])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals])
            .antagonists(&[L::HipFlexor, L::DeepRotatorsHip, L::Glutes])
            .receiving_compensation(&[L::Hamstrings, L::DeepRotatorsHip, L::Glutes]),
        F::PelvicAnteriorTilt => FunctionalMovement::new(movement)
            .prime_movers(&[L::Quads, L::HipFlexor, L::LowerBack, L::Lats])
            .synergists(&[L::CoreStabilizers, L::Groin, L::HipFlexor])
            .stabilizers(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::DeepRotatorsHip, L::Glutes])
            .antagonists(&[L::Obliques, L::Abdominals])
            .receiving_compensation(&[L::Groin]),
        F::PelvicPosteriorTilt => FunctionalMovement::new(movement)
            .prime_movers(&[L::Obliques, L::Abdominals])
            .synergists(&[L::Hamstrings, L::Obliques, L::Groin, L::Glutes])
            .stabilizers(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::DeepRotatorsHip, L::Glutes])
            .antagonists(&[L::Quads, L::HipFlexor, L::LowerBack, L::Lats])
            .receiving_compensation(&[L::Hamstrings]),
        F::TrunkFlexion => FunctionalMovement::new(movement)
            .prime_movers(&[L::Abdominals])
            .synergists(&[L::HipFlexor, L::Obliques])
            .stabilizers(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor])
            .fixators(&[L::Glutes, L::DeepRotatorsHip, L::HipFlexor, L::Quads, L::Groin, L::Hamstrings])
            .antagonists(&[L::LowerBack, L::Lats])
            .receiving_compensation(&[L::HipFlexor, L::Obliques]),
        F::TrunkExtension => FunctionalMovement::new(movement)
            .prime_movers(&[L::LowerBack, L::Lats, L::CoreStabilizers])
            .stabilizers(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor])
            .fixators(&[L::Glutes, L::DeepRotatorsHip, L::HipFlexor, L::Quads, L::Groin, L::Hamstrings])
            .antagonists(&[L::HipFlexor, L::Obliques, L::Abdominals]),
        F::TrunkLateralFlexion => FunctionalMovement::new(movement)
            .prime_movers(&[L::LowerBack])
            .synergists(&[L::LowerBack, L::Lats, L::Obliques])
            .stabilizers(&[L::Quads, L::HipFlexor, L::CoreStabilizers, L::Obliques, L::LowerBack])
            .fixators(&[L::Glutes, L::DeepRotatorsHip, L::HipFlexor, L::Quads, L::Groin, L::Hamstrings])
            .antagonists(&[L::LowerBack, L::Lats, L::Obliques])
            .receiving_compensation(&[L::Lats, L::Obliques]),
        F::TrunkRotation => FunctionalMovement::new(movement)
            .prime_movers(&[L::Obliques])
            .synergists(&[L::Lats, L::HipFlexor])
            .stabilizers(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor])
            .fixators(&[L::Glutes, L::DeepRotatorsHip, L::HipFlexor, L::Quads, L::Groin, L::Hamstrings])
            .antagonists(&[L::Obliques])
            .receiving_compensation(&[L::Lats, L::HipFlexor]),
        F::TrunkFlexionWithRotation => FunctionalMovement::new(movement)
            .prime_movers(&[L::Obliques, L::Abdominals])
            .synergists(&[L::Lats, L::HipFlexor])
            .stabilizers(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor])
            .fixators(&[L::Glutes, L::DeepRotatorsHip, L::HipFlexor, L::Quads, L::Groin, L::Hamstrings])
            .antagonists(&[L::Obliques, L::LowerBack])
            .receiving_compensation(&[L::Lats, L::HipFlexor]),
        F::TrunkExtensionWithRotation => FunctionalMovement::new(movement)
            .prime_movers(&[L::LowerBack, L::Obliques])
            .synergists(&[L::Lats, L::HipFlexor])
            .stabilizers(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor])
            .fixators(&[L::Glutes, L::DeepRotatorsHip, L::HipFlexor, L::Quads, L::Groin, L::Hamstrings])
            .antagonists(&[L::HipFlexor, L::Obliques, L::Abdominals])
            .receiving_compensation(&[L::Lats, L::HipFlexor]),
        F::ElbowFlexion => FunctionalMovement::new(movement)
            .prime_movers(&[L::Biceps])
            .synergists(&[L::Biceps])
            .stabilizers(&[L::Forearm])
            .fixators(&[L::Chest, L::UpperBackNeck, L::Deltoid, L::Lats, L::RotatorCuff])
            .antagonists(&[L::Triceps, L::Forearm]),
        F::ElbowExtension => FunctionalMovement::new(movement)
            .prime_movers(&[L::Triceps])
            .synergists(&[L::Forearm])
            .stabilizers(&[L::Forearm])
            .fixators(&[L::Chest, L::UpperBackNeck, L::Deltoid, L::Lats, L::RotatorCuff])
            .antagonists(&[L::Biceps])
            .receiving_compensation(&[L::Forearm]),
        F::ShoulderHorizontalAdduction => FunctionalMovement::new(movement)
            .prime_movers(&[L::UpperBackNeck, L::Chest])
            .synergists(&[L::Deltoid, L::Chest])
            .stabilizers(&[L::RotatorCuff, L::UpperBackNeck])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals, L::UpperBackNeck, L::Chest])
            .antagonists(&[L::UpperBackNeck, L::Deltoid])
            .receiving_compensation(&[L::Deltoid]),
        F::ShoulderHorizontalAbduction => FunctionalMovement::new(movement)
            .prime_movers(&[L::UpperBackNeck, L::Deltoid])
            .synergists(&[L::UpperBackNeck])
            .stabilizers(&[L::RotatorCuff, L::UpperBackNeck])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals, L::UpperBackNeck, L::Chest])
            .antagonists(&[L::Deltoid, L::UpperBackNeck, L::Chest]),
        F::ShoulderFlexionAndScapularUpwardRotation => FunctionalMovement::new(movement)
            .prime_movers(&[L::Deltoid, L::UpperBackNeck])
            .synergists(&[L::UpperBackNeck, L::Chest, L::Biceps])
            .stabilizers(&[L::RotatorCuff, L::UpperBackNeck])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals, L::UpperBackNeck, L::Chest])
            .antagonists(&[L::Lats, L::UpperBackNeck, L::Deltoid, L::Chest, L::Triceps])
            .receiving_compensation(&[L::Chest, L::Biceps]),
        F::ShoulderExtensionAndScapularDownwardRotation => FunctionalMovement::new(movement)
            .prime_movers(&[L::Lats, L::Chest])
            .synergists(&[L::UpperBackNeck, L::Lats, L::Deltoid, L::Triceps])
            .stabilizers(&[L::RotatorCuff, L::UpperBackNeck])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals, L::UpperBackNeck, L::Chest])
            .antagonists(&[L::UpperBackNeck, L::Deltoid, L::Chest, L::Biceps])
            .receiving_compensation(&[L::UpperBackNeck, L::Deltoid, L::Triceps]),
        F::ShoulderAbductionAndScapularUpwardRotation => FunctionalMovement::new(movement)
            .prime_movers(&[L::Deltoid, L::UpperBackNeck])
            .synergists(&[L::UpperBackNeck, L::RotatorCuff])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals, L::UpperBackNeck, L::Chest])
            .antagonists(&[L::Lats, L::UpperBackNeck, L::RotatorCuff, L::Chest, L::Biceps, L::Triceps])
            .receiving_compensation(&[L::RotatorCuff]),
        F::ShoulderAdductionAndScapularDownwardRotation => FunctionalMovement::new(movement)
            .prime_movers(&[L::Lats, L::Chest])
            .synergists(&[L::UpperBackNeck, L::Lats, L::RotatorCuff, L::Chest, L::Biceps, L::Triceps])
            .stabilizers(&[L::RotatorCuff, L::UpperBackNeck])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals, L::UpperBackNeck, L::Chest])
            .antagonists(&[L::UpperBackNeck, L::RotatorCuff, L::Deltoid])
            .receiving_compensation(&[L::UpperBackNeck, L::RotatorCuff, L::Biceps, L::Triceps]),
        F::InternalRotation => FunctionalMovement::new(movement)
            .prime_movers(&[L::RotatorCuff])
            .synergists(&[L::Lats, L::Deltoid, L::Chest])
            .stabilizers(&[L::RotatorCuff])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals, L::UpperBackNeck, L::Chest])
            .antagonists(&[L::RotatorCuff, L::Deltoid])
            .receiving_compensation(&[L::Lats, L::Deltoid, L::Chest]),
        F::ExternalRotation => FunctionalMovement::new(movement)
            .prime_movers(&[L::RotatorCuff])
            .synergists(&[L::Deltoid])
            .stabilizers(&[L::RotatorCuff])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::LowerBack, L::HipFlexor, L::Abdominals, L::UpperBackNeck, L::Chest])
            .antagonists(&[L::Lats, L::RotatorCuff, L::Deltoid, L::Chest])
            .receiving_compensation(&[L::Deltoid]),
        F::ScapularElevation => FunctionalMovement::new(movement)
            .prime_movers(&[L::UpperBackNeck])
            .synergists(&[L::UpperBackNeck])
            .stabilizers(&[L::UpperBackNeck])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::DeepRotatorsHip, L::HipFlexor, L::LowerBack, L::Abdominals])
            .antagonists(&[L::UpperBackNeck, L::Chest]),
        F::ScapularDepression => FunctionalMovement::new(movement)
            .prime_movers(&[L::UpperBackNeck])
            .synergists(&[L::Chest])
            .stabilizers(&[L::UpperBackNeck])
            .fixators(&[L::CoreStabilizers, L::Obliques, L::DeepRotatorsHip, L::HipFlexor, L::LowerBack, L::Abdominals])
            .antagonists(&[L::UpperBackNeck])
            .receiving_compensation(&[L::Chest]),
        F::AnkleDorsiflexionAndEversion => FunctionalMovement::new(movement)
            .prime_movers(&[L::Shin])
            .stabilizers(&[L::Calves])
            .fixators(&ANKLE_FIXATORS)
            .antagonists(&[L::Calves]),
        F::AnklePlantarFlexionAndInversion => FunctionalMovement::new(movement)
            .prime_movers(&[L::Calves])
            .stabilizers(&[L::Shin])
            .fixators(&ANKLE_FIXATORS)
            .antagonists(&[L::Shin])
            .receiving_compensation(&[L::Shin]),
        F::WristFlexion => FunctionalMovement::new(movement)
            .prime_movers(&[L::Forearm])
            .fixators(&[L::Biceps, L::Triceps])
            .antagonists(&[L::Forearm]),
        F::WristExtension => FunctionalMovement::new(movement)
            .prime_movers(&[L::Forearm])
            .fixators(&[L::Biceps, L::Triceps])
            .antagonists(&[L::Forearm]),
    }
}
