// ABOUTME: Reported symptom vocabulary and the per-report input record
// ABOUTME: Windowed categories feed trailing counters, qualitative ones only a last-seen date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::body_part::BodyPartSide;

/// Category of a reported or derived symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymptomKind {
    // windowed
    /// Dull ache
    Ache,
    /// Sharp pain
    Sharp,
    /// Tightness
    Tight,
    /// Knots or trigger points
    Knots,
    /// Muscle held in a shortened state
    Short,
    /// Muscle held in a lengthened state
    Long,
    /// Weakness
    Weak,
    /// Overactive while shortened
    OveractiveShort,
    /// Overactive while lengthened
    OveractiveLong,
    /// Underactive while shortened
    UnderactiveShort,
    /// Underactive while lengthened
    UnderactiveLong,
    // qualitative
    /// Muscle spasm
    MuscleSpasm,
    /// Adhesions
    Adhesions,
    /// Neural inhibition
    Inhibited,
    /// Excessive strain
    ExcessiveStrain,
    /// Non-functional overreaching
    NonFunctionalOverreaching,
    /// Functional overreaching
    FunctionalOverreaching,
    /// Inflammation
    Inflammation,
    /// Muscle imbalance
    MuscleImbalance,
    /// Tendinopathy
    Tendinopathy,
    /// Tendinosis
    Tendinosis,
    /// Altered joint arthrokinematics
    AlteredJointArthrokinematics,
    /// Movement dysfunction under stress
    MovementDysfunctionStress,
    /// Source of a movement dysfunction
    DysfunctionCause,
}

impl SymptomKind {
    /// Categories tracked with trailing 10- and 20-day counters
    pub const WINDOWED: [Self; 11] = [
        Self::Ache,
        Self::Sharp,
        Self::Tight,
        Self::Knots,
        Self::Short,
        Self::Long,
        Self::Weak,
        Self::OveractiveShort,
        Self::OveractiveLong,
        Self::UnderactiveShort,
        Self::UnderactiveLong,
    ];

    /// Categories that mark a prime mover as a compensation cause
    pub const COMPENSATION_TRIGGERS: [Self; 7] = [
        Self::Weak,
        Self::MuscleSpasm,
        Self::Adhesions,
        Self::Short,
        Self::Long,
        Self::Inhibited,
        Self::Inflammation,
    ];

    /// Whether this category keeps trailing-window counters
    #[must_use]
    pub const fn is_windowed(self) -> bool {
        matches!(
            self,
            Self::Ache
                | Self::Sharp
                | Self::Tight
                | Self::Knots
                | Self::Short
                | Self::Long
                | Self::Weak
                | Self::OveractiveShort
                | Self::OveractiveLong
                | Self::UnderactiveShort
                | Self::UnderactiveLong
        )
    }

    /// Whether a same-day report of this kind marks a prime mover as a compensation cause
    #[must_use]
    pub const fn triggers_compensation(self) -> bool {
        matches!(
            self,
            Self::Weak
                | Self::MuscleSpasm
                | Self::Adhesions
                | Self::Short
                | Self::Long
                | Self::Inhibited
                | Self::Inflammation
        )
    }

    /// Stable snake-case identifier
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ache => "ache",
            Self::Sharp => "sharp",
            Self::Tight => "tight",
            Self::Knots => "knots",
            Self::Short => "short",
            Self::Long => "long",
            Self::Weak => "weak",
            Self::OveractiveShort => "overactive_short",
            Self::OveractiveLong => "overactive_long",
            Self::UnderactiveShort => "underactive_short",
            Self::UnderactiveLong => "underactive_long",
            Self::MuscleSpasm => "muscle_spasm",
            Self::Adhesions => "adhesions",
            Self::Inhibited => "inhibited",
            Self::ExcessiveStrain => "excessive_strain",
            Self::NonFunctionalOverreaching => "non_functional_overreaching",
            Self::FunctionalOverreaching => "functional_overreaching",
            Self::Inflammation => "inflammation",
            Self::MuscleImbalance => "muscle_imbalance",
            Self::Tendinopathy => "tendinopathy",
            Self::Tendinosis => "tendinosis",
            Self::AlteredJointArthrokinematics => "altered_joint_arthrokinematics",
            Self::MovementDysfunctionStress => "movement_dysfunction_stress",
            Self::DysfunctionCause => "dysfunction_cause",
        }
    }
}

impl fmt::Display for SymptomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One symptom reported against a body-part-side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SymptomReport {
    /// Where the symptom was felt
    pub body_part: BodyPartSide,
    /// When the report was made
    pub reported_at: DateTime<Utc>,
    /// Symptom category
    pub kind: SymptomKind,
    /// Severity on a 0-10 scale, when given
    #[serde(default)]
    pub severity: Option<u8>,
}

impl SymptomReport {
    /// Create a report
    #[must_use]
    pub const fn new(
        body_part: BodyPartSide,
        reported_at: DateTime<Utc>,
        kind: SymptomKind,
        severity: Option<u8>,
    ) -> Self {
        Self {
            body_part,
            reported_at,
            kind,
            severity,
        }
    }

    /// Calendar day the report belongs to
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.reported_at.date_naive()
    }
}
