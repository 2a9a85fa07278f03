// ABOUTME: Functional movement reference data and load-distribution ratios
// ABOUTME: Re-exports antagonist pairs, the movement library, and the ratio helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Functional Movements
//!
//! An exercise declares joint actions; each joint action names a movement.
//! The library says which muscle groups perform that movement and in which
//! role, and the ratio helpers say how much of the exercise load each group
//! carries.

mod library;
mod load;
mod pairs;

pub use library::{BodyPartFunction, FunctionalMovement, FunctionalMovementLibrary};
pub use load::{muscle_ratio, priority_ratio, stability_rating};
pub use pairs::FunctionalMovementPairs;
