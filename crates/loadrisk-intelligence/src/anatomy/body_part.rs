// ABOUTME: Anatomy graph nodes and the factory that supplies each node's relations
// ABOUTME: StandardBodyPartFactory encodes the reference agonist/antagonist/synergist/stabilizer table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use loadrisk_core::models::{BodyPartKind, BodyPartLocation};
use serde::{Deserialize, Serialize};

use BodyPartLocation as L;

/// One node of the anatomy graph with its outgoing relations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyPart {
    /// Location this node describes
    pub location: BodyPartLocation,
    /// Joint, muscle, or ligament
    pub kind: BodyPartKind,
    /// Parts producing the same action (joints only)
    pub agonists: Vec<BodyPartLocation>,
    /// Parts producing the opposing action
    pub antagonists: Vec<BodyPartLocation>,
    /// Parts assisting this part's action
    pub synergists: Vec<BodyPartLocation>,
    /// Parts holding this part steady
    pub stabilizers: Vec<BodyPartLocation>,
}

impl BodyPart {
    /// Node with no relations
    #[must_use]
    pub fn new(location: BodyPartLocation) -> Self {
        Self {
            location,
            kind: location.kind(),
            agonists: Vec::new(),
            antagonists: Vec::new(),
            synergists: Vec::new(),
            stabilizers: Vec::new(),
        }
    }

    /// Set agonists
    #[must_use]
    pub fn with_agonists(mut self, agonists: &[BodyPartLocation]) -> Self {
        self.agonists = agonists.to_vec();
        self
    }

    /// Set antagonists
    #[must_use]
    pub fn with_antagonists(mut self, antagonists: &[BodyPartLocation]) -> Self {
        self.antagonists = antagonists.to_vec();
        self
    }

    /// Set synergists
    #[must_use]
    pub fn with_synergists(mut self, synergists: &[BodyPartLocation]) -> Self {
        self.synergists = synergists.to_vec();
        self
    }

    /// Set stabilizers
    #[must_use]
    pub fn with_stabilizers(mut self, stabilizers: &[BodyPartLocation]) -> Self {
        self.stabilizers = stabilizers.to_vec();
        self
    }

    /// Whether this node is a joint
    #[must_use]
    pub const fn is_joint(&self) -> bool {
        matches!(self.kind, BodyPartKind::Joint)
    }

    /// Every location this node points at, across all relation sets
    pub fn related(&self) -> impl Iterator<Item = BodyPartLocation> + '_ {
        self.agonists
            .iter()
            .chain(&self.antagonists)
            .chain(&self.synergists)
            .chain(&self.stabilizers)
            .copied()
    }
}

/// Source of relation data for graph construction
pub trait BodyPartFactory: Send + Sync {
    /// Node for a tracked location, or `None` when the factory has no data for it
    fn body_part(&self, location: BodyPartLocation) -> Option<BodyPart>;
}

/// Reference relation table for the 28 tracked locations
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBodyPartFactory;

impl BodyPartFactory for StandardBodyPartFactory {
    fn body_part(&self, location: BodyPartLocation) -> Option<BodyPart> {
        let part = BodyPart::new(location);
        let part = match location {
            L::Shoulder => part
                .with_agonists(&[L::Deltoid, L::Chest])
                .with_antagonists(&[L::Lats, L::UpperBackNeck])
                .with_stabilizers(&[L::RotatorCuff, L::UpperBackNeck]),
            L::Elbow => part
                .with_agonists(&[L::Biceps])
                .with_antagonists(&[L::Triceps])
                .with_stabilizers(&[L::Forearm]),
            L::Wrist => part.with_agonists(&[L::Forearm]),
            L::Hip => part
                .with_agonists(&[L::HipFlexor, L::Quads])
                .with_antagonists(&[L::Glutes, L::Hamstrings])
                .with_stabilizers(&[L::DeepRotatorsHip, L::Groin, L::CoreStabilizers]),
            L::Knee => part
                .with_agonists(&[L::Quads])
                .with_antagonists(&[L::Hamstrings])
                .with_stabilizers(&[L::Calves, L::Glutes, L::Groin]),
            L::Ankle => part
                .with_agonists(&[L::Calves])
                .with_antagonists(&[L::Shin])
                .with_stabilizers(&[L::Shin]),
            L::ItBand => part
                .with_agonists(&[L::Glutes])
                .with_antagonists(&[L::Groin])
                .with_synergists(&[L::Quads]),
            L::Achilles => part
                .with_agonists(&[L::Calves])
                .with_antagonists(&[L::Shin]),
            L::Chest => part
                .with_antagonists(&[L::UpperBackNeck, L::Lats])
                .with_synergists(&[L::Deltoid, L::Triceps])
                .with_stabilizers(&[L::RotatorCuff]),
            L::Abdominals => part
                .with_antagonists(&[L::LowerBack])
                .with_synergists(&[L::Obliques, L::HipFlexor])
                .with_stabilizers(&[L::CoreStabilizers]),
            L::Obliques => part
                .with_antagonists(&[L::LowerBack])
                .with_synergists(&[L::Abdominals])
                .with_stabilizers(&[L::CoreStabilizers]),
            L::CoreStabilizers => part.with_synergists(&[L::Abdominals, L::Obliques, L::LowerBack]),
            L::LowerBack => part
                .with_antagonists(&[L::Abdominals])
                .with_synergists(&[L::Glutes, L::Hamstrings, L::Lats])
                .with_stabilizers(&[L::CoreStabilizers]),
            L::UpperBackNeck => part
                .with_antagonists(&[L::Chest])
                .with_synergists(&[L::Lats, L::Deltoid])
                .with_stabilizers(&[L::RotatorCuff]),
            L::Lats => part
                .with_antagonists(&[L::Deltoid, L::Chest])
                .with_synergists(&[L::UpperBackNeck, L::Biceps, L::Triceps])
                .with_stabilizers(&[L::CoreStabilizers, L::RotatorCuff]),
            L::Deltoid => part
                .with_antagonists(&[L::Lats])
                .with_synergists(&[L::Chest, L::UpperBackNeck])
                .with_stabilizers(&[L::RotatorCuff]),
            L::RotatorCuff => part
                .with_synergists(&[L::Deltoid])
                .with_stabilizers(&[L::UpperBackNeck]),
            L::Biceps => part
                .with_antagonists(&[L::Triceps])
                .with_synergists(&[L::Forearm, L::Deltoid])
                .with_stabilizers(&[L::RotatorCuff]),
            L::Triceps => part
                .with_antagonists(&[L::Biceps])
                .with_synergists(&[L::Chest, L::Deltoid])
                .with_stabilizers(&[L::Forearm]),
            L::Forearm => part.with_synergists(&[L::Biceps]),
            L::HipFlexor => part
                .with_antagonists(&[L::Glutes, L::Hamstrings])
                .with_synergists(&[L::Quads, L::Groin, L::Abdominals])
                .with_stabilizers(&[L::CoreStabilizers]),
            L::Glutes => part
                .with_antagonists(&[L::HipFlexor])
                .with_synergists(&[L::Hamstrings, L::DeepRotatorsHip, L::LowerBack])
                .with_stabilizers(&[L::CoreStabilizers]),
            L::DeepRotatorsHip => part
                .with_antagonists(&[L::Groin])
                .with_synergists(&[L::Glutes])
                .with_stabilizers(&[L::CoreStabilizers]),
            L::Groin => part
                .with_antagonists(&[L::Glutes, L::DeepRotatorsHip])
                .with_synergists(&[L::HipFlexor, L::Hamstrings])
                .with_stabilizers(&[L::CoreStabilizers]),
            L::Quads => part
                .with_antagonists(&[L::Hamstrings])
                .with_synergists(&[L::HipFlexor])
                .with_stabilizers(&[L::Glutes, L::Calves]),
            L::Hamstrings => part
                .with_antagonists(&[L::Quads, L::HipFlexor])
                .with_synergists(&[L::Glutes, L::Calves, L::Groin])
                .with_stabilizers(&[L::CoreStabilizers]),
            L::Calves => part
                .with_antagonists(&[L::Shin])
                .with_synergists(&[L::Hamstrings]),
            L::Shin => part.with_antagonists(&[L::Calves]),
            L::UpperBody | L::LowerBody | L::FullBody => return None,
        };
        Some(part)
    }
}
