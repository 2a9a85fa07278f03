// ABOUTME: Core data models for the load and injury-risk engine
// ABOUTME: Re-exports anatomy keys, the uncertainty-carrying range, exercise and symptom inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Value types shared by every stage of the engine. None of them own
//! long-lived state; the durable per-athlete risk record lives in the
//! intelligence crate.
//!
//! - `BodyPartLocation`, `Side`, `BodyPartSide`: the unit of risk tracking
//! - `StandardErrorRange`: the unit of currency for loads and statistics
//! - `ExerciseAction`, `TrainingSession`: exercise mechanics input
//! - `SymptomReport`: reported symptom input

mod body_part;
mod exercise;
mod standard_error_range;
mod symptom;

// Anatomy domain
pub use body_part::{BodyPartKind, BodyPartLocation, BodyPartSide, Side};

// Numeric domain
pub use standard_error_range::StandardErrorRange;

// Exercise domain
pub use exercise::{
    AdaptationType, Dosage, ExerciseAction, ExerciseActionBuilder, FunctionalMovementType, Joint,
    JointAction, MuscleAction, TrainingSession,
};

// Symptom domain
pub use symptom::{SymptomKind, SymptomReport};
