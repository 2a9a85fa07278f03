// ABOUTME: Persistence contract for per-athlete injury-risk records
// ABOUTME: In-memory implementation keeps whole serialized records in a DashMap
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use async_trait::async_trait;
use dashmap::DashMap;
use loadrisk_core::errors::{AppError, AppResult};
use loadrisk_intelligence::AthleteInjuryRisk;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Storage backend for injury-risk records
///
/// Implementations replace the whole record on `put`. Callers serialize the
/// read-modify-write cycle per athlete; the store itself does not lock.
#[async_trait]
pub trait InjuryRiskStore: Send + Sync {
    /// Load the record of an athlete, `None` when nothing is stored yet
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or the stored record is corrupt
    async fn get(&self, athlete_id: Uuid) -> AppResult<Option<AthleteInjuryRisk>>;

    /// Store the record of an athlete, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the record belongs to another athlete or cannot be written
    async fn put(&self, athlete_id: Uuid, risk: &AthleteInjuryRisk) -> AppResult<()>;
}

/// Process-local store holding serialized records
///
/// Records are stored as JSON so every `get` hands out an independent copy.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInjuryRiskStore {
    records: Arc<DashMap<Uuid, Vec<u8>>>,
}

impl InMemoryInjuryRiskStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of athletes stored
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no athlete is stored
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl InjuryRiskStore for InMemoryInjuryRiskStore {
    async fn get(&self, athlete_id: Uuid) -> AppResult<Option<AthleteInjuryRisk>> {
        let Some(bytes) = self.records.get(&athlete_id).map(|entry| entry.value().clone()) else {
            return Ok(None);
        };
        let risk: AthleteInjuryRisk = serde_json::from_slice(&bytes)?;
        debug!(%athlete_id, parts = risk.len(), "injury-risk record loaded");
        Ok(Some(risk))
    }

    async fn put(&self, athlete_id: Uuid, risk: &AthleteInjuryRisk) -> AppResult<()> {
        if risk.athlete_id != athlete_id {
            return Err(AppError::invalid_input(format!(
                "record for athlete {} stored under {athlete_id}",
                risk.athlete_id
            ))
            .with_athlete_id(athlete_id));
        }
        let bytes = serde_json::to_vec(risk)?;
        self.records.insert(athlete_id, bytes);
        debug!(%athlete_id, parts = risk.len(), "injury-risk record stored");
        Ok(())
    }
}
