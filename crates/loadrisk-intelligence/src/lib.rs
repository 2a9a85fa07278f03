// ABOUTME: Algorithms for biomechanical load distribution and windowed injury-risk tracking
// ABOUTME: Anatomy graph, movement library, session aggregation, risk accumulation, load statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Load Risk Intelligence
//!
//! Pure, synchronous computation over the models in `loadrisk-core`. Reference
//! data (the anatomy graph and the functional movement library) is immutable
//! and meant to be shared behind `Arc`.
//!
//! ## Modules
//!
//! - **anatomy**: Relation graph and qualitative signal propagation
//! - **functional_movement**: Movement roles, antagonist pairs, load ratios
//! - **session_load**: Exercise and session load distribution with compensation
//! - **injury_risk**: Per body-part-side risk records and the daily accumulator
//! - **training_load**: ACWR, monotony, strain and related weekly statistics
//! - **config**: Tunable thresholds with environment overrides

/// Anatomy graph and propagation counters
pub mod anatomy;

/// Injury-risk configuration
pub mod config;

/// Functional movement reference data
pub mod functional_movement;

/// Injury-risk records and accumulation
pub mod injury_risk;

/// Session load aggregation
pub mod session_load;

/// Weekly training-load statistics
pub mod training_load;

pub use anatomy::{AnatomyGraph, PropagationCounters};
pub use config::{ConfigError, InjuryRiskConfig};
pub use functional_movement::{FunctionalMovementLibrary, FunctionalMovementPairs};
pub use injury_risk::{AthleteInjuryRisk, DailyInput, InjuryRiskAccumulator, RelativeLoadLevel};
pub use session_load::{MuscleLoad, SessionLoad, SessionLoadAggregator};
pub use training_load::{LoadManagementSignals, TrainingLoadCalculator, WeeklyLoadSeries};
