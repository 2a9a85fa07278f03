// ABOUTME: Main library entry point for the biomechanical load and injury-risk engine
// ABOUTME: Wires the algorithm crates to persistence, logging, and the async ingestion facade
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # Loadrisk Engine
//!
//! Turns strength-and-conditioning sessions and self-reported symptoms into
//! per-muscle training load and rolling injury-risk indicators.
//!
//! ## Architecture
//!
//! - **`loadrisk-core`**: anatomy vocabulary, exercise model, error types,
//!   and uncertainty-carrying numbers
//! - **`loadrisk-intelligence`**: anatomy graph, movement library, session
//!   aggregation, injury-risk accumulation, and weekly load statistics
//! - **This crate**: record storage, structured logging, and the
//!   [`InjuryRiskEngine`] that serializes ingestion per athlete
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use loadrisk_core::errors::AppResult;
//! use loadrisk_engine::{InMemoryInjuryRiskStore, InjuryRiskEngine};
//! use loadrisk_intelligence::InjuryRiskConfig;
//!
//! # async fn run() -> AppResult<()> {
//! let engine = InjuryRiskEngine::new(
//!     InjuryRiskConfig::default(),
//!     Arc::new(InMemoryInjuryRiskStore::new()),
//! )?;
//! let input = serde_json::from_str(r#"{"event_date":"2025-03-03","processed_at":"2025-03-03T20:00:00Z"}"#)?;
//! let outcome = engine.ingest(uuid::Uuid::new_v4(), &input).await?;
//! println!("relative load level {}", outcome.relative_load_level.code());
//! # Ok(())
//! # }
//! ```

/// Async ingestion facade over the accumulator, the store, and the anatomy graph
pub mod engine;

/// Structured logging configuration
pub mod logging;

/// Persistence contract for injury-risk records
pub mod store;

pub use engine::{IngestionOutcome, InjuryRiskEngine, LoadReport};
pub use logging::{LogFormat, LoggingConfig};
pub use store::{InMemoryInjuryRiskStore, InjuryRiskStore};
