// ABOUTME: Antagonist pairing of functional movements used to resolve eccentric actions
// ABOUTME: An unmapped eccentric pairing is a configuration error, never a silent zero load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use loadrisk_core::errors::{AppError, AppResult};
use loadrisk_core::models::{FunctionalMovementType, MuscleAction};
use std::collections::BTreeMap;

use FunctionalMovementType as F;

const STANDARD_PAIRS: [(F, F); 22] = [
    (F::AnkleDorsiflexion, F::AnklePlantarFlexion),
    (F::InversionOfTheFoot, F::EversionOfTheFoot),
    (F::AnkleDorsiflexionAndInversion, F::AnklePlantarFlexionAndEversion),
    (F::AnkleDorsiflexionAndEversion, F::AnklePlantarFlexionAndInversion),
    (F::KneeFlexion, F::KneeExtension),
    (F::TibialExternalRotation, F::TibialInternalRotation),
    (F::HipAdduction, F::HipAbduction),
    (F::HipInternalRotation, F::HipExternalRotation),
    (F::HipExtension, F::HipFlexion),
    (F::HipHorizontalAbduction, F::HipHorizontalAdduction),
    (F::PelvicAnteriorTilt, F::PelvicPosteriorTilt),
    (F::TrunkFlexion, F::TrunkExtension),
    (F::TrunkLateralFlexion, F::TrunkLateralFlexion),
    (F::TrunkRotation, F::TrunkRotation),
    (F::TrunkFlexionWithRotation, F::TrunkExtensionWithRotation),
    (F::ElbowFlexion, F::ElbowExtension),
    (F::ShoulderHorizontalAdduction, F::ShoulderHorizontalAbduction),
    (
        F::ShoulderFlexionAndScapularUpwardRotation,
        F::ShoulderExtensionAndScapularDownwardRotation,
    ),
    (
        F::ShoulderAbductionAndScapularUpwardRotation,
        F::ShoulderAdductionAndScapularDownwardRotation,
    ),
    (F::InternalRotation, F::ExternalRotation),
    (F::ScapularElevation, F::ScapularDepression),
    (F::WristFlexion, F::WristExtension),
];

/// Symmetric table of antagonist motions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionalMovementPairs {
    partners: BTreeMap<FunctionalMovementType, FunctionalMovementType>,
}

impl FunctionalMovementPairs {
    /// Table covering every movement type
    #[must_use]
    pub fn standard() -> Self {
        Self::from_pairs(&STANDARD_PAIRS)
    }

    /// Table built from explicit pairs; each pair is registered in both directions
    #[must_use]
    pub fn from_pairs(pairs: &[(FunctionalMovementType, FunctionalMovementType)]) -> Self {
        let mut partners = BTreeMap::new();
        for &(first, second) in pairs {
            partners.insert(first, second);
            partners.insert(second, first);
        }
        Self { partners }
    }

    /// Antagonist motion of `movement`, if configured
    #[must_use]
    pub fn antagonist(&self, movement: FunctionalMovementType) -> Option<FunctionalMovementType> {
        self.partners.get(&movement).copied()
    }

    /// Movement that actually receives load for a joint action
    ///
    /// Concentric and isometric actions load the movement itself; an eccentric
    /// action resists, and therefore loads, the antagonist motion.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when an eccentric action meets a movement
    /// with no configured antagonist
    pub fn pair(
        &self,
        muscle_action: MuscleAction,
        movement: FunctionalMovementType,
    ) -> AppResult<FunctionalMovementType> {
        match muscle_action {
            MuscleAction::Concentric | MuscleAction::Isometric => Ok(movement),
            MuscleAction::Eccentric => self.antagonist(movement).ok_or_else(|| {
                AppError::config(format!("no antagonist motion configured for {movement}"))
                    .with_resource_id(movement.to_string())
            }),
        }
    }
}

impl Default for FunctionalMovementPairs {
    fn default() -> Self {
        Self::standard()
    }
}
