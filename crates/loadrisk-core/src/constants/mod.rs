// ABOUTME: Engine-wide constants grouped by domain
// ABOUTME: Window lengths, load-distribution ratios, and default thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants used as configuration defaults and as fixed biomechanical ratios.

/// Trailing window lengths for symptom and compensation counters
pub mod windows {
    /// Short trailing window (days 0-9 relative to the record date)
    pub const SHORT_WINDOW_DAYS: i64 = 10;
    /// Long trailing window (days 0-19 relative to the record date)
    pub const LONG_WINDOW_DAYS: i64 = 20;
    /// Days in one tracking week
    pub const DAYS_PER_WEEK: i64 = 7;
}

/// How a joint action's load is split across the muscles that produce it
pub mod load_distribution {
    /// Share of load for a priority-1 joint action
    pub const PRIORITY_1_RATIO: f64 = 1.0;
    /// Share of load for a priority-2 joint action
    pub const PRIORITY_2_RATIO: f64 = 0.6;
    /// Share of load for a priority-3 joint action
    pub const PRIORITY_3_RATIO: f64 = 0.3;
    /// Share of load for a priority-4 joint action
    pub const PRIORITY_4_RATIO: f64 = 0.15;

    /// Prime movers carry the full attributed load
    pub const PRIME_MOVER_RATIO: f64 = 1.0;
    /// Synergists carry a fixed share
    pub const SYNERGIST_RATIO: f64 = 0.6;
    /// Stabilizer share scales with instability: `slope * rating + base`
    pub const STABILIZER_SLOPE: f64 = 0.15;
    /// Stabilizer base share
    pub const STABILIZER_BASE: f64 = 0.05;
    /// Fixator share scales with instability: `slope * rating + base`
    pub const FIXATOR_SLOPE: f64 = 0.10;
    /// Fixator base share
    pub const FIXATOR_BASE: f64 = 0.20;

    /// Stability ratings arrive on a 0-2 scale and are halved before weighting
    pub const STABILITY_RATING_SCALE: f64 = 2.0;
}

/// Compensation severity bands (0-10 symptom scale) and their load factors
pub mod compensation {
    /// Upper bound of the mild band
    pub const MILD_MAX_SEVERITY: u8 = 2;
    /// Upper bound of the moderate band
    pub const MODERATE_MAX_SEVERITY: u8 = 5;
    /// Upper bound of the severe band
    pub const SEVERE_MAX_SEVERITY: u8 = 8;
    /// Factor applied in the mild band
    pub const MILD_FACTOR: f64 = 0.04;
    /// Factor applied in the moderate band
    pub const MODERATE_FACTOR: f64 = 0.08;
    /// Factor applied in the severe band
    pub const SEVERE_FACTOR: f64 = 0.16;
    /// Factor applied above the severe band
    pub const EXTREME_FACTOR: f64 = 0.20;

    /// Compensation-percent breakpoints for tiers 1, 2, 3
    pub const PERCENT_TIER_BREAKPOINTS: [f64; 3] = [15.0, 10.0, 5.0];
}

/// Week-over-week volume ramp breakpoints for tiers 1, 2, 3
pub mod volume {
    /// Ratio of this week's volume to last week's at which each tier begins
    pub const RAMP_TIER_BREAKPOINTS: [f64; 3] = [1.5, 1.3, 1.15];
}

/// Consensus ballot defaults
pub mod votes {
    /// 20-day occurrences a signal needs before it casts a vote
    pub const SIGNAL_THRESHOLD: u32 = 3;
    /// Minimum total votes before a classification is reported
    pub const MIN_VOTES: u32 = 2;
    /// Share of the ballot the leading classification must hold
    pub const CONSENSUS_PERCENT: f64 = 50.0;
}

/// Weekly load statistics defaults
pub mod load_statistics {
    /// Number of prior weeks forming the chronic baseline
    pub const CHRONIC_WEEKS: usize = 4;
    /// Non-empty chronic weeks required before ACWR and freshness are defined
    pub const MIN_CHRONIC_WEEKS: usize = 2;
    /// ACWR above which overreaching risk is high
    pub const ACWR_HIGH: f64 = 1.5;
    /// ACWR above which overreaching risk is moderate
    pub const ACWR_MODERATE: f64 = 1.3;
    /// Monotony above which training variety is insufficient
    pub const MONOTONY_HIGH: f64 = 2.0;
    /// Standardised strain spike above which the current week is anomalous
    pub const STRAIN_SPIKE_HIGH: f64 = 1.2;
}

/// Relative load level breakpoints (today's volume / last week's daily average)
pub mod relative_load {
    /// Ratio at or above which today's load is high
    pub const HIGH_RATIO: f64 = 1.2;
    /// Ratio at or above which today's load is moderate
    pub const MODERATE_RATIO: f64 = 0.8;
}
