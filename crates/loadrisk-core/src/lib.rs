// ABOUTME: Core types and constants for the biomechanical load and injury-risk engine
// ABOUTME: Foundation crate with error handling, anatomy vocabulary, and input models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Load Risk Core
//!
//! Foundation crate providing shared types and constants for the load and
//! injury-risk engine. It changes rarely so the algorithm crates above it can
//! rebuild incrementally.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Default thresholds and fixed biomechanical ratios
//! - **models**: Anatomy keys, `StandardErrorRange`, exercises and symptoms

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants organized by domain
pub mod constants;

/// Core data models (body parts, exercises, symptoms, ranges)
pub mod models;
