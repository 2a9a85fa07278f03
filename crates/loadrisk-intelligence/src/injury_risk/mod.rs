// ABOUTME: Durable per-athlete injury-risk state and the daily accumulator that updates it
// ABOUTME: Re-exports the record sub-structures, the athlete container, and the accumulator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Injury Risk
//!
//! One [`BodyPartInjuryRisk`] per body-part-side, built from cohesive
//! sub-records:
//!
//! - [`VolumeWindow`]: retained session contributions and volume ramps
//! - [`CompensationWindow`]: share of load taken over from compromised parts
//! - [`SymptomWindow`] and [`QualitativeStates`]: symptom history
//! - [`VoteTally`]: consensus classification over persistent signals
//! - [`AdaptationMaxima`]: best daily volume per adaptation goal
//!
//! Every windowed counter is recomputed from retained events whenever the
//! record is refreshed, so re-processing a day never double counts.

mod accumulator;
mod record;
mod symptoms;
mod volume;
mod votes;

pub use accumulator::{DailyInput, InjuryRiskAccumulator, RelativeLoadLevel};
pub use record::{
    in_window, merge_dates, merge_tiers, AdaptationMaxima, AthleteInjuryRisk, BodyPartInjuryRisk,
    DailyMaximum,
};
pub use symptoms::{QualitativeStates, SymptomEvent, SymptomTrack, SymptomWindow};
pub use volume::{tracking_week_start, CompensationWindow, SessionContribution, VolumeWindow};
pub use votes::{VoteKind, VoteTally};
