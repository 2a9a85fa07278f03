// ABOUTME: Logging configuration and structured logging setup for the injury-risk engine
// ABOUTME: Builds one tracing-subscriber fmt layer per output format and emits engine events
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Structured logging configuration
//!
//! Configuration comes from the environment:
//!
//! | Variable | Effect |
//! |----------|--------|
//! | `RUST_LOG` | filter directives, defaults to `info` |
//! | `LOG_FORMAT` | `json`, `compact`, anything else is pretty |
//! | `ENVIRONMENT` | `production` turns on location, thread and span output |
//! | `LOG_INCLUDE_LOCATION` / `_THREAD` / `_SPANS` | enable one detail when set |
//! | `SERVICE_NAME` / `SERVICE_VERSION` | reported in the startup event |

use anyhow::Result;
use loadrisk_intelligence::training_load::RiskLevel;
use serde_json::json;
use std::convert::Infallible;
use std::env;
use std::io;
use std::str::FromStr;
use tracing::{info, warn, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};
use uuid::Uuid;

/// Default service name reported in structured logs
pub const SERVICE_NAME: &str = "loadrisk-engine";

const ENGINE_TARGETS: [&str; 3] = ["loadrisk_engine", "loadrisk_intelligence", "loadrisk_cli"];

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level applied to the engine crates (trace, debug, info, warn, error)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
    /// Include thread ids and names
    pub include_thread: bool,
    /// Emit span open/close events, useful for timing `ingest`
    pub include_spans: bool,
    /// Service name for structured logging
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Deployment environment (development, staging, production)
    pub environment: String,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event on stdout
    Json,
    /// Multi-line human output on stdout
    #[default]
    Pretty,
    /// Single-line output on stderr, keeps CLI results on stdout clean
    Compact,
}

impl FromStr for LogFormat {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim().to_ascii_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: LogFormat::Pretty,
            include_location: false,
            include_thread: false,
            include_spans: false,
            service_name: SERVICE_NAME.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
            environment: "development".into(),
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var_os(name).is_some()
}

impl LoggingConfig {
    /// Create logging configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment = env::var("ENVIRONMENT").unwrap_or(defaults.environment);
        let production = environment == "production";

        Self {
            level: env::var("RUST_LOG").unwrap_or(defaults.level),
            format: env::var("LOG_FORMAT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or_default(),
            include_location: production || env_flag("LOG_INCLUDE_LOCATION"),
            include_thread: production || env_flag("LOG_INCLUDE_THREAD"),
            include_spans: production || env_flag("LOG_INCLUDE_SPANS"),
            service_name: env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: env::var("SERVICE_VERSION").unwrap_or(defaults.service_version),
            environment,
        }
    }

    /// Filter built from `RUST_LOG` (or the configured level) with the engine crates pinned
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        let base = env::var("RUST_LOG").unwrap_or_else(|_| self.level.clone());
        ENGINE_TARGETS
            .into_iter()
            .fold(EnvFilter::new(base), |filter, target| {
                filter.add_directive(
                    format!("{target}={}", self.level)
                        .parse()
                        .unwrap_or_else(|_| Level::INFO.into()),
                )
            })
    }

    fn span_events(&self) -> FmtSpan {
        if self.include_spans {
            FmtSpan::NEW | FmtSpan::CLOSE
        } else {
            FmtSpan::NONE
        }
    }

    fn output_layer(&self) -> BoxedLayer {
        match self.format {
            LogFormat::Json => fmt::layer()
                .json()
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_thread_ids(self.include_thread)
                .with_thread_names(self.include_thread)
                .with_span_events(self.span_events())
                .with_writer(io::stdout)
                .boxed(),
            LogFormat::Pretty => fmt::layer()
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .with_thread_ids(self.include_thread)
                .with_thread_names(self.include_thread)
                .with_span_events(self.span_events())
                .with_writer(io::stdout)
                .boxed(),
            LogFormat::Compact => fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(io::stderr)
                .boxed(),
        }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.output_layer())
            .with(self.env_filter())
            .try_init()?;

        let summary = json!({
            "service": {
                "name": self.service_name,
                "version": self.service_version,
                "environment": self.environment,
            },
            "logging": {
                "level": self.level,
                "format": format!("{:?}", self.format),
                "location": self.include_location,
                "thread": self.include_thread,
                "spans": self.include_spans,
            },
        });
        info!(
            service.name = %self.service_name,
            service.version = %self.service_version,
            environment = %self.environment,
            "logging initialized: {summary}"
        );
        Ok(())
    }
}

/// Initialize logging with default configuration
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_default() -> Result<()> {
    LoggingConfig::default().init()
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}

/// Structured log events shared by the engine and the CLI
pub struct EngineLogger;

impl EngineLogger {
    /// Log a completed ingestion
    pub fn log_ingestion(athlete_id: Uuid, touched: usize, relative_load_level: u8, duration_ms: u64) {
        info!(
            athlete.id = %athlete_id,
            ingest.touched = touched,
            ingest.relative_load_level = relative_load_level,
            ingest.duration_ms = duration_ms,
            "Daily input ingested"
        );
    }

    /// Log a failed store call; successful calls are logged at debug by the store
    pub fn log_store_failure(operation: &str, athlete_id: Uuid) {
        warn!(
            store.operation = %operation,
            athlete.id = %athlete_id,
            "Store operation failed"
        );
    }

    /// Log an overreaching classification
    pub fn log_load_report(risk_level: RiskLevel, risk_factors: usize) {
        info!(
            load.risk_level = ?risk_level,
            load.risk_factors = risk_factors,
            "Load report computed"
        );
    }
}
