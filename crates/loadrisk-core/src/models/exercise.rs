// ABOUTME: Exercise mechanics vocabulary: muscle actions, joint actions, and training sessions
// ABOUTME: ExerciseAction is built through a validating builder and rejects unknown fields on input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::standard_error_range::StandardErrorRange;
use crate::constants::load_distribution::STABILITY_RATING_SCALE;
use crate::errors::{AppError, AppResult};

/// How a muscle produces force during the exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleAction {
    /// Shortening under load
    Concentric,
    /// Lengthening under load
    Eccentric,
    /// Static hold under load
    Isometric,
}

/// Joint (or joint family) a functional movement happens at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    /// Ankle, foot, and tibial rotation
    Ankle,
    /// Knee
    Knee,
    /// Hip
    Hip,
    /// Pelvis
    Pelvis,
    /// Trunk
    Trunk,
    /// Elbow
    Elbow,
    /// Shoulder girdle and scapula
    ShoulderScapula,
    /// Wrist
    Wrist,
}

/// Joint actions bridging exercise mechanics and muscle biomechanics
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionalMovementType {
    AnkleDorsiflexion,
    AnklePlantarFlexion,
    InversionOfTheFoot,
    EversionOfTheFoot,
    AnkleDorsiflexionAndInversion,
    AnklePlantarFlexionAndEversion,
    KneeFlexion,
    KneeExtension,
    TibialExternalRotation,
    TibialInternalRotation,
    HipAdduction,
    HipAbduction,
    HipInternalRotation,
    HipExternalRotation,
    HipExtension,
    HipFlexion,
    HipHorizontalAbduction,
    HipHorizontalAdduction,
    PelvicAnteriorTilt,
    PelvicPosteriorTilt,
    TrunkFlexion,
    TrunkExtension,
    TrunkLateralFlexion,
    TrunkRotation,
    TrunkFlexionWithRotation,
    TrunkExtensionWithRotation,
    ElbowFlexion,
    ElbowExtension,
    ShoulderHorizontalAdduction,
    ShoulderHorizontalAbduction,
    ShoulderFlexionAndScapularUpwardRotation,
    ShoulderExtensionAndScapularDownwardRotation,
    ShoulderAbductionAndScapularUpwardRotation,
    ShoulderAdductionAndScapularDownwardRotation,
    InternalRotation,
    ExternalRotation,
    ScapularElevation,
    ScapularDepression,
    AnkleDorsiflexionAndEversion,
    AnklePlantarFlexionAndInversion,
    WristFlexion,
    WristExtension,
}

use FunctionalMovementType as F;

impl FunctionalMovementType {
    /// Every movement type, in catalogue order
    pub const ALL: [Self; 42] = [
        F::AnkleDorsiflexion,
        F::AnklePlantarFlexion,
        F::InversionOfTheFoot,
        F::EversionOfTheFoot,
        F::AnkleDorsiflexionAndInversion,
        F::AnklePlantarFlexionAndEversion,
        F::KneeFlexion,
        F::KneeExtension,
        F::TibialExternalRotation,
        F::TibialInternalRotation,
        F::HipAdduction,
        F::HipAbduction,
        F::HipInternalRotation,
        F::HipExternalRotation,
        F::HipExtension,
        F::HipFlexion,
        F::HipHorizontalAbduction,
        F::HipHorizontalAdduction,
        F::PelvicAnteriorTilt,
        F::PelvicPosteriorTilt,
        F::TrunkFlexion,
        F::TrunkExtension,
        F::TrunkLateralFlexion,
        F::TrunkRotation,
        F::TrunkFlexionWithRotation,
        F::TrunkExtensionWithRotation,
        F::ElbowFlexion,
        F::ElbowExtension,
        F::ShoulderHorizontalAdduction,
        F::ShoulderHorizontalAbduction,
        F::ShoulderFlexionAndScapularUpwardRotation,
        F::ShoulderExtensionAndScapularDownwardRotation,
        F::ShoulderAbductionAndScapularUpwardRotation,
        F::ShoulderAdductionAndScapularDownwardRotation,
        F::InternalRotation,
        F::ExternalRotation,
        F::ScapularElevation,
        F::ScapularDepression,
        F::AnkleDorsiflexionAndEversion,
        F::AnklePlantarFlexionAndInversion,
        F::WristFlexion,
        F::WristExtension,
    ];

    /// Joint family the movement happens at
    #[must_use]
    pub const fn joint(self) -> Joint {
        match self {
            F::AnkleDorsiflexion
            | F::AnklePlantarFlexion
            | F::InversionOfTheFoot
            | F::EversionOfTheFoot
            | F::AnkleDorsiflexionAndInversion
            | F::AnklePlantarFlexionAndEversion
            | F::AnkleDorsiflexionAndEversion
            | F::AnklePlantarFlexionAndInversion
            | F::TibialExternalRotation
            | F::TibialInternalRotation => Joint::Ankle,
            F::KneeFlexion | F::KneeExtension => Joint::Knee,
            F::HipAdduction
            | F::HipAbduction
            | F::HipInternalRotation
            | F::HipExternalRotation
            | F::HipExtension
            | F::HipFlexion
            | F::HipHorizontalAbduction
            | F::HipHorizontalAdduction => Joint::Hip,
            F::PelvicAnteriorTilt | F::PelvicPosteriorTilt => Joint::Pelvis,
            F::TrunkFlexion
            | F::TrunkExtension
            | F::TrunkLateralFlexion
            | F::TrunkRotation
            | F::TrunkFlexionWithRotation
            | F::TrunkExtensionWithRotation => Joint::Trunk,
            F::ElbowFlexion | F::ElbowExtension => Joint::Elbow,
            F::WristFlexion | F::WristExtension => Joint::Wrist,
            F::ShoulderHorizontalAdduction
            | F::ShoulderHorizontalAbduction
            | F::ShoulderFlexionAndScapularUpwardRotation
            | F::ShoulderExtensionAndScapularDownwardRotation
            | F::ShoulderAbductionAndScapularUpwardRotation
            | F::ShoulderAdductionAndScapularDownwardRotation
            | F::InternalRotation
            | F::ExternalRotation
            | F::ScapularElevation
            | F::ScapularDepression => Joint::ShoulderScapula,
        }
    }
}

impl fmt::Display for FunctionalMovementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let camel = format!("{self:?}");
        let mut snake = String::with_capacity(camel.len() + 8);
        for (index, ch) in camel.char_indices() {
            if ch.is_ascii_uppercase() {
                if index > 0 {
                    snake.push('_');
                }
                snake.push(ch.to_ascii_lowercase());
            } else {
                snake.push(ch);
            }
        }
        f.write_str(&snake)
    }
}

/// Training-goal classifier attached to every exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdaptationType {
    /// No adaptation goal recorded
    NotTracked,
    /// Strength endurance with a cardiorespiratory emphasis
    StrengthEnduranceCardiorespiratory,
    /// Strength endurance with a strength emphasis
    StrengthEnduranceStrength,
    /// Power drills
    PowerDrill,
    /// Maximal strength and hypertrophy
    MaximalStrengthHypertrophic,
    /// Explosive power actions
    PowerExplosiveAction,
}

/// One `(priority, movement)` entry of an exercise's joint-action list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JointAction {
    /// Biomechanical significance, 1 being the most significant
    pub priority: u8,
    /// Movement performed at the joint
    pub movement: FunctionalMovementType,
}

/// How much of the exercise was performed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dosage {
    /// Repetition-based work
    Repetitions {
        /// Repetitions per set
        reps: u32,
        /// Number of sets
        sets: u32,
    },
    /// Time-based work; load is expressed per minute
    Duration {
        /// Seconds under load
        seconds: u32,
    },
}

impl Dosage {
    /// Multiplier applied to the exercise's raw load
    #[must_use]
    pub fn load_multiplier(&self) -> f64 {
        match *self {
            Self::Repetitions { reps, sets } => f64::from(reps) * f64::from(sets),
            Self::Duration { seconds } => f64::from(seconds) / 60.0,
        }
    }
}

/// Static description of one exercise's mechanics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExerciseAction {
    /// Exercise identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Dominant muscle action
    pub primary_muscle_action: MuscleAction,
    /// Joint actions ordered by biomechanical significance
    pub joint_actions: Vec<JointAction>,
    /// Raw mechanical load on the left side before muscle decomposition
    pub total_load_left: StandardErrorRange,
    /// Raw mechanical load on the right side before muscle decomposition
    pub total_load_right: StandardErrorRange,
    /// Lower-body instability, 0 (stable) to 2 (unstable)
    pub lower_body_stability_rating: f64,
    /// Upper-body instability, 0 (stable) to 2 (unstable)
    pub upper_body_stability_rating: f64,
    /// Whether instability increases stabilizer load
    #[serde(default)]
    pub apply_instability: bool,
    /// Training goal
    pub adaptation_type: AdaptationType,
    /// Amount performed; absent means the totals already include it
    #[serde(default)]
    pub dosage: Option<Dosage>,
}

impl ExerciseAction {
    /// Start building an exercise action
    pub fn builder(
        id: impl Into<String>,
        name: impl Into<String>,
        primary_muscle_action: MuscleAction,
    ) -> ExerciseActionBuilder {
        ExerciseActionBuilder {
            action: Self {
                id: id.into(),
                name: name.into(),
                primary_muscle_action,
                joint_actions: Vec::new(),
                total_load_left: StandardErrorRange::default(),
                total_load_right: StandardErrorRange::default(),
                lower_body_stability_rating: 0.0,
                upper_body_stability_rating: 0.0,
                apply_instability: false,
                adaptation_type: AdaptationType::NotTracked,
                dosage: None,
            },
        }
    }

    /// Left and right loads after applying the dosage multiplier
    #[must_use]
    pub fn dosed_loads(&self) -> (StandardErrorRange, StandardErrorRange) {
        let multiplier = self.dosage.map_or(1.0, |dosage| dosage.load_multiplier());
        (
            self.total_load_left.multiply(multiplier),
            self.total_load_right.multiply(multiplier),
        )
    }

    /// Check ratings and priorities
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error when a stability rating is outside 0-2
    /// or a joint action has priority zero
    pub fn validate(&self) -> AppResult<()> {
        for (label, rating) in [
            ("lower_body_stability_rating", self.lower_body_stability_rating),
            ("upper_body_stability_rating", self.upper_body_stability_rating),
        ] {
            if !(0.0..=STABILITY_RATING_SCALE).contains(&rating) {
                return Err(AppError::invalid_input(format!(
                    "{label} must be between 0 and {STABILITY_RATING_SCALE}, got {rating}"
                ))
                .with_resource_id(self.id.clone()));
            }
        }
        if self.joint_actions.iter().any(|action| action.priority == 0) {
            return Err(AppError::invalid_input("joint action priority starts at 1")
                .with_resource_id(self.id.clone()));
        }
        Ok(())
    }
}

/// Builder for [`ExerciseAction`]
#[derive(Debug, Clone)]
pub struct ExerciseActionBuilder {
    action: ExerciseAction,
}

impl ExerciseActionBuilder {
    /// Append a joint action
    #[must_use]
    pub fn joint_action(mut self, priority: u8, movement: FunctionalMovementType) -> Self {
        self.action.joint_actions.push(JointAction { priority, movement });
        self
    }

    /// Set left and right raw loads
    #[must_use]
    pub fn loads(mut self, left: StandardErrorRange, right: StandardErrorRange) -> Self {
        self.action.total_load_left = left;
        self.action.total_load_right = right;
        self
    }

    /// Set stability ratings and enable instability weighting
    #[must_use]
    pub fn instability(mut self, lower: f64, upper: f64) -> Self {
        self.action.lower_body_stability_rating = lower;
        self.action.upper_body_stability_rating = upper;
        self.action.apply_instability = true;
        self
    }

    /// Set the adaptation type
    #[must_use]
    pub fn adaptation(mut self, adaptation_type: AdaptationType) -> Self {
        self.action.adaptation_type = adaptation_type;
        self
    }

    /// Set the dosage
    #[must_use]
    pub fn dosage(mut self, dosage: Dosage) -> Self {
        self.action.dosage = Some(dosage);
        self
    }

    /// Finish building
    ///
    /// # Errors
    ///
    /// Returns an error if the assembled action fails [`ExerciseAction::validate`]
    pub fn build(self) -> AppResult<ExerciseAction> {
        self.action.validate()?;
        Ok(self.action)
    }
}

/// One planned or completed training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainingSession {
    /// Stable identifier; re-processing a session replaces its earlier contribution
    pub session_id: String,
    /// Day the session happened
    pub event_date: NaiveDate,
    /// Exercises performed
    pub exercises: Vec<ExerciseAction>,
}
