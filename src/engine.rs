// ABOUTME: Async facade tying the store, the accumulator, and the anatomy graph together
// ABOUTME: Serializes each athlete's read-merge-write cycle and reports load and propagation results
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use dashmap::DashMap;
use loadrisk_core::errors::AppResult;
use loadrisk_core::models::{BodyPartLocation, BodyPartSide, SymptomKind, SymptomReport};
use loadrisk_intelligence::functional_movement::{FunctionalMovementLibrary, FunctionalMovementPairs};
use loadrisk_intelligence::training_load::{
    LoadManagementSignals, OverreachingAssessment, TrainingLoadCalculator, WeeklyLoadSeries,
};
use loadrisk_intelligence::{
    AnatomyGraph, AthleteInjuryRisk, DailyInput, InjuryRiskAccumulator, InjuryRiskConfig,
    PropagationCounters, RelativeLoadLevel, SessionLoadAggregator,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::logging::EngineLogger;
use crate::store::InjuryRiskStore;

/// Result of ingesting one day for one athlete
#[derive(Debug, Clone, Serialize)]
pub struct IngestionOutcome {
    /// Updated records, already persisted
    pub risk: AthleteInjuryRisk,
    /// Today's load relative to last week's daily average
    pub relative_load_level: RelativeLoadLevel,
    /// Body-part-sides brought up to the input date
    pub touched: Vec<BodyPartSide>,
    /// Qualitative signals raised by today's symptoms
    pub propagation: PropagationCounters,
    /// Likely origins of reported soreness, most implicated first
    pub soreness_sources: Vec<(BodyPartLocation, u32)>,
}

/// Load statistics with their overreaching classification
#[derive(Debug, Clone, Serialize)]
pub struct LoadReport {
    /// Every computed signal
    pub signals: LoadManagementSignals,
    /// Classification derived from the signals
    pub assessment: OverreachingAssessment,
}

/// Entry point for daily ingestion and load statistics
pub struct InjuryRiskEngine {
    store: Arc<dyn InjuryRiskStore>,
    accumulator: InjuryRiskAccumulator,
    graph: Arc<AnatomyGraph>,
    calculator: TrainingLoadCalculator,
    athlete_locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl InjuryRiskEngine {
    /// Engine over the reference anatomy graph and movement library
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the reference anatomy table is inconsistent
    pub fn new(config: InjuryRiskConfig, store: Arc<dyn InjuryRiskStore>) -> AppResult<Self> {
        let graph = Arc::new(AnatomyGraph::standard()?);
        let library = Arc::new(FunctionalMovementLibrary::standard());
        Ok(Self::with_reference_data(config, store, graph, library))
    }

    /// Engine over explicit reference data
    #[must_use]
    pub fn with_reference_data(
        config: InjuryRiskConfig,
        store: Arc<dyn InjuryRiskStore>,
        graph: Arc<AnatomyGraph>,
        library: Arc<FunctionalMovementLibrary>,
    ) -> Self {
        let aggregator = SessionLoadAggregator::new(
            FunctionalMovementPairs::standard(),
            library,
            config.compensation_severity.clone(),
        );
        let calculator = TrainingLoadCalculator::new(config.load_statistics.clone());
        Self {
            store,
            accumulator: InjuryRiskAccumulator::new(config, aggregator),
            graph,
            calculator,
            athlete_locks: DashMap::new(),
        }
    }

    /// Anatomy graph in use
    #[must_use]
    pub fn graph(&self) -> &Arc<AnatomyGraph> {
        &self.graph
    }

    fn lock_for(&self, athlete_id: Uuid) -> Arc<Mutex<()>> {
        self.athlete_locks
            .entry(athlete_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    // Drops the athlete's lock once no other ingest holds or awaits it. The
    // shard lock taken by `remove_if` keeps `lock_for` from cloning it meanwhile.
    fn release_lock(&self, athlete_id: Uuid) {
        self.athlete_locks
            .remove_if(&athlete_id, |_, lock| Arc::strong_count(lock) == 1);
    }

    /// Athletes with an ingest in flight or waiting
    #[must_use]
    pub fn active_athletes(&self) -> usize {
        self.athlete_locks.len()
    }

    /// Merge one day into an athlete's stored records
    ///
    /// A failed read aborts before anything is merged; a failed write is
    /// returned and nothing is reported as ingested.
    ///
    /// # Errors
    ///
    /// Returns store errors, invalid-input errors for malformed input, and
    /// configuration errors from load aggregation or propagation
    #[instrument(skip(self, input), fields(%athlete_id, event_date = %input.event_date))]
    pub async fn ingest(&self, athlete_id: Uuid, input: &DailyInput) -> AppResult<IngestionOutcome> {
        let lock = self.lock_for(athlete_id);
        let outcome = {
            let _guard = lock.lock().await;
            self.ingest_serialized(athlete_id, input).await
        };
        drop(lock);
        self.release_lock(athlete_id);
        outcome
    }

    async fn ingest_serialized(
        &self,
        athlete_id: Uuid,
        input: &DailyInput,
    ) -> AppResult<IngestionOutcome> {
        let started = Instant::now();

        let prior = self.store.get(athlete_id).await.inspect_err(|error| {
            warn!(%error, "injury-risk record could not be loaded");
            EngineLogger::log_store_failure("get", athlete_id);
        })?;
        let risk = self.accumulator.merge(prior, athlete_id, input)?;
        let propagation = self.propagate(&input.symptoms)?;
        let relative_load_level = self.accumulator.relative_load_level(&risk, input.event_date);

        self.store.put(athlete_id, &risk).await.inspect_err(|error| {
            warn!(%error, "injury-risk record could not be stored");
            EngineLogger::log_store_failure("put", athlete_id);
        })?;

        let touched = InjuryRiskAccumulator::parts_on(&risk, input.event_date);
        EngineLogger::log_ingestion(
            athlete_id,
            touched.len(),
            relative_load_level.code(),
            u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        );
        Ok(IngestionOutcome {
            soreness_sources: propagation.ranked_soreness_sources(),
            risk,
            relative_load_level,
            touched,
            propagation,
        })
    }

    /// Run the anatomy graph over the reported symptoms
    ///
    /// Tightness and knots propagate as tightness, sharp pain as pain, and
    /// aches as soreness; other categories raise no graph signals.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a reported location is not a graph node
    pub fn propagate(&self, symptoms: &[SymptomReport]) -> AppResult<PropagationCounters> {
        symptoms
            .iter()
            .try_fold(PropagationCounters::new(), |counters, report| {
                let location = report.body_part.body_part_location;
                match report.kind {
                    SymptomKind::Tight | SymptomKind::Knots => {
                        self.graph.mark_tight(location, counters)
                    }
                    SymptomKind::Sharp => self.graph.mark_pain(location, counters),
                    SymptomKind::Ache => self.graph.mark_sore(location, counters),
                    _ => Ok(counters),
                }
            })
    }

    /// Load-management signals and overreaching classification for a weekly series
    #[must_use]
    pub fn load_report(&self, series: &WeeklyLoadSeries) -> LoadReport {
        let signals = self.calculator.signals(series);
        let assessment = self.calculator.assess_overreaching(&signals);
        EngineLogger::log_load_report(assessment.risk_level, assessment.risk_factors.len());
        LoadReport {
            signals,
            assessment,
        }
    }
}
