// ABOUTME: Anatomical vocabulary: body-part locations, sides, and the body-part-side key
// ABOUTME: Aggregate regions resolve to a canonical muscle group through a fixed lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Structural category of a body-part location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPartKind {
    /// Articulation between bones
    Joint,
    /// Muscle group
    Muscle,
    /// Ligament or tendon
    Ligament,
    /// Region made up of several muscle groups
    Aggregate,
}

/// Closed enumeration of anatomical sites tracked by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyPartLocation {
    // joints
    /// Glenohumeral joint
    Shoulder,
    /// Elbow joint
    Elbow,
    /// Wrist joint
    Wrist,
    /// Hip joint
    Hip,
    /// Knee joint
    Knee,
    /// Ankle joint
    Ankle,
    // ligaments and tendons
    /// Iliotibial band
    ItBand,
    /// Achilles tendon
    Achilles,
    // muscle groups
    /// Pectorals
    Chest,
    /// Rectus abdominis
    Abdominals,
    /// Internal and external obliques
    Obliques,
    /// Transverse abdominis and deep trunk stabilizers
    CoreStabilizers,
    /// Erector spinae and quadratus lumborum
    LowerBack,
    /// Trapezius, rhomboids, and neck extensors
    UpperBackNeck,
    /// Latissimus dorsi
    Lats,
    /// Deltoids
    Deltoid,
    /// Rotator cuff
    RotatorCuff,
    /// Biceps
    Biceps,
    /// Triceps
    Triceps,
    /// Forearm flexors and extensors
    Forearm,
    /// Iliopsoas and hip flexors
    HipFlexor,
    /// Gluteals
    Glutes,
    /// Piriformis and deep hip rotators
    DeepRotatorsHip,
    /// Adductors
    Groin,
    /// Quadriceps
    Quads,
    /// Hamstrings
    Hamstrings,
    /// Gastrocnemius and soleus
    Calves,
    /// Tibialis anterior and peroneals
    Shin,
    // aggregates
    /// Whole upper body
    UpperBody,
    /// Whole lower body
    LowerBody,
    /// Whole body
    FullBody,
}

use BodyPartLocation as L;

const UPPER_BODY_GROUPS: [BodyPartLocation; 10] = [
    L::Chest,
    L::UpperBackNeck,
    L::Lats,
    L::Deltoid,
    L::RotatorCuff,
    L::Biceps,
    L::Triceps,
    L::Forearm,
    L::Abdominals,
    L::Obliques,
];

const LOWER_BODY_GROUPS: [BodyPartLocation; 8] = [
    L::HipFlexor,
    L::Glutes,
    L::DeepRotatorsHip,
    L::Groin,
    L::Quads,
    L::Hamstrings,
    L::Calves,
    L::Shin,
];

const FULL_BODY_GROUPS: [BodyPartLocation; 20] = [
    L::Chest,
    L::Abdominals,
    L::Obliques,
    L::CoreStabilizers,
    L::LowerBack,
    L::UpperBackNeck,
    L::Lats,
    L::Deltoid,
    L::RotatorCuff,
    L::Biceps,
    L::Triceps,
    L::Forearm,
    L::HipFlexor,
    L::Glutes,
    L::DeepRotatorsHip,
    L::Groin,
    L::Quads,
    L::Hamstrings,
    L::Calves,
    L::Shin,
];

impl BodyPartLocation {
    /// Every non-aggregate location: the nodes of the anatomy graph
    pub const TRACKED: [Self; 28] = [
        L::Shoulder,
        L::Elbow,
        L::Wrist,
        L::Hip,
        L::Knee,
        L::Ankle,
        L::ItBand,
        L::Achilles,
        L::Chest,
        L::Abdominals,
        L::Obliques,
        L::CoreStabilizers,
        L::LowerBack,
        L::UpperBackNeck,
        L::Lats,
        L::Deltoid,
        L::RotatorCuff,
        L::Biceps,
        L::Triceps,
        L::Forearm,
        L::HipFlexor,
        L::Glutes,
        L::DeepRotatorsHip,
        L::Groin,
        L::Quads,
        L::Hamstrings,
        L::Calves,
        L::Shin,
    ];

    /// Aggregate regions
    pub const AGGREGATES: [Self; 3] = [L::UpperBody, L::LowerBody, L::FullBody];

    /// Structural category of this location
    #[must_use]
    pub const fn kind(self) -> BodyPartKind {
        match self {
            L::Shoulder | L::Elbow | L::Wrist | L::Hip | L::Knee | L::Ankle => BodyPartKind::Joint,
            L::ItBand | L::Achilles => BodyPartKind::Ligament,
            L::UpperBody | L::LowerBody | L::FullBody => BodyPartKind::Aggregate,
            _ => BodyPartKind::Muscle,
        }
    }

    /// Whether this location is a joint
    #[must_use]
    pub const fn is_joint(self) -> bool {
        matches!(self.kind(), BodyPartKind::Joint)
    }

    /// Whether this location is an aggregate region
    #[must_use]
    pub const fn is_aggregate(self) -> bool {
        matches!(self.kind(), BodyPartKind::Aggregate)
    }

    /// Whether the location exists on both sides of the body
    #[must_use]
    pub const fn is_bilateral(self) -> bool {
        !matches!(
            self,
            L::Abdominals | L::CoreStabilizers | L::LowerBack | L::UpperBody | L::LowerBody | L::FullBody
        )
    }

    /// Resolve an aggregate to its canonical muscle group; other locations resolve to themselves
    #[must_use]
    pub const fn get_muscle_group(self) -> Self {
        match self {
            L::UpperBody => L::UpperBackNeck,
            L::LowerBody => L::Glutes,
            L::FullBody => L::CoreStabilizers,
            other => other,
        }
    }

    /// Muscle groups covered by an aggregate region (empty for non-aggregates)
    #[must_use]
    pub const fn constituents(self) -> &'static [Self] {
        match self {
            L::UpperBody => &UPPER_BODY_GROUPS,
            L::LowerBody => &LOWER_BODY_GROUPS,
            L::FullBody => &FULL_BODY_GROUPS,
            _ => &[],
        }
    }

    /// Stable snake-case identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            L::Shoulder => "shoulder",
            L::Elbow => "elbow",
            L::Wrist => "wrist",
            L::Hip => "hip",
            L::Knee => "knee",
            L::Ankle => "ankle",
            L::ItBand => "it_band",
            L::Achilles => "achilles",
            L::Chest => "chest",
            L::Abdominals => "abdominals",
            L::Obliques => "obliques",
            L::CoreStabilizers => "core_stabilizers",
            L::LowerBack => "lower_back",
            L::UpperBackNeck => "upper_back_neck",
            L::Lats => "lats",
            L::Deltoid => "deltoid",
            L::RotatorCuff => "rotator_cuff",
            L::Biceps => "biceps",
            L::Triceps => "triceps",
            L::Forearm => "forearm",
            L::HipFlexor => "hip_flexor",
            L::Glutes => "glutes",
            L::DeepRotatorsHip => "deep_rotators_hip",
            L::Groin => "groin",
            L::Quads => "quads",
            L::Hamstrings => "hamstrings",
            L::Calves => "calves",
            L::Shin => "shin",
            L::UpperBody => "upper_body",
            L::LowerBody => "lower_body",
            L::FullBody => "full_body",
        }
    }
}

impl fmt::Display for BodyPartLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyPartLocation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TRACKED
            .iter()
            .chain(Self::AGGREGATES.iter())
            .copied()
            .find(|location| location.as_str() == s)
            .ok_or_else(|| AppError::invalid_input(format!("unknown body part location: {s}")))
    }
}

/// Side of the body a record refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Midline or unsided
    None = 0,
    /// Left side
    Left = 1,
    /// Right side
    Right = 2,
}

impl Side {
    /// Numeric code (0 none, 1 left, 2 right)
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether two sides can affect one another (equal, or either unsided)
    #[must_use]
    pub fn compatible_with(self, other: Self) -> bool {
        self == other || self == Self::None || other == Self::None
    }
}

impl TryFrom<u8> for Side {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Left),
            2 => Ok(Self::Right),
            other => Err(AppError::invalid_input(format!("unknown side code: {other}"))),
        }
    }
}

/// The unit of risk tracking: a location on a particular side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyPartSide {
    /// Anatomical location
    pub body_part_location: BodyPartLocation,
    /// Side of the body
    pub side: Side,
}

impl BodyPartSide {
    /// Create a new body-part-side key
    #[must_use]
    pub const fn new(body_part_location: BodyPartLocation, side: Side) -> Self {
        Self {
            body_part_location,
            side,
        }
    }

    /// Keys a location is tracked under: both sides when bilateral, unsided otherwise
    #[must_use]
    pub fn sides_for(location: BodyPartLocation) -> Vec<Self> {
        if location.is_bilateral() {
            vec![Self::new(location, Side::Left), Self::new(location, Side::Right)]
        } else {
            vec![Self::new(location, Side::None)]
        }
    }
}

impl fmt::Display for BodyPartSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.body_part_location, self.side.code())
    }
}
