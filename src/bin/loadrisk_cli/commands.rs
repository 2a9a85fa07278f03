// ABOUTME: Subcommand implementations for the loadrisk CLI
// ABOUTME: File loading, engine wiring, and JSON rendering of results
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use anyhow::{anyhow, Result};
use loadrisk_engine::engine::InjuryRiskEngine;
use loadrisk_engine::store::{InMemoryInjuryRiskStore, InjuryRiskStore};
use loadrisk_intelligence::training_load::WeeklyLoadSeries;
use loadrisk_intelligence::{AthleteInjuryRisk, DailyInput, InjuryRiskConfig};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

#[derive(Deserialize)]
#[serde(untagged)]
enum InputFile {
    Many(Vec<DailyInput>),
    One(Box<DailyInput>),
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path)
        .await
        .map_err(|error| anyhow!("cannot read {}: {error}", path.display()))?;
    serde_json::from_str(&text).map_err(|error| anyhow!("invalid JSON in {}: {error}", path.display()))
}

/// Ingest one or more days and render the last outcome
pub async fn ingest(
    config: InjuryRiskConfig,
    input: &Path,
    athlete_id: Option<Uuid>,
    prior: Option<&Path>,
) -> Result<String> {
    let store = Arc::new(InMemoryInjuryRiskStore::new());
    let prior: Option<AthleteInjuryRisk> = match prior {
        Some(path) => Some(read_json(path).await?),
        None => None,
    };
    let athlete_id = match (&prior, athlete_id) {
        (Some(record), Some(id)) if record.athlete_id != id => {
            return Err(anyhow!(
                "prior record belongs to athlete {}, not {id}",
                record.athlete_id
            ));
        }
        (Some(record), _) => record.athlete_id,
        (None, Some(id)) => id,
        (None, None) => Uuid::new_v4(),
    };
    if let Some(record) = &prior {
        store.put(athlete_id, record).await?;
    }

    let days = match read_json::<InputFile>(input).await? {
        InputFile::Many(days) => days,
        InputFile::One(day) => vec![*day],
    };
    let engine = InjuryRiskEngine::new(config, store)?;
    let mut last = None;
    for day in &days {
        last = Some(engine.ingest(athlete_id, day).await?);
    }
    let outcome = last.ok_or_else(|| anyhow!("{} holds no daily inputs", input.display()))?;
    info!(%athlete_id, days = days.len(), "ingestion complete");
    Ok(serde_json::to_string_pretty(&outcome)?)
}

/// Compute and render load statistics for a weekly series
pub async fn stats(config: InjuryRiskConfig, series: &Path) -> Result<String> {
    let series: WeeklyLoadSeries = read_json(series).await?;
    let engine = InjuryRiskEngine::new(config, Arc::new(InMemoryInjuryRiskStore::new()))?;
    Ok(serde_json::to_string_pretty(&engine.load_report(&series))?)
}
