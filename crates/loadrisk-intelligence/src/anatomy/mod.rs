// ABOUTME: Anatomy knowledge base and qualitative signal propagation
// ABOUTME: Re-exports graph nodes, the relation factory, the graph, and propagation counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Anatomy
//!
//! Answers "what else is affected if this part is sore, tight, or painful?".
//! The graph is a directed multigraph: a part may appear in several relation
//! sets of the same node, and traversal simply counts every appearance.

mod body_part;
mod graph;
mod propagation;

pub use body_part::{BodyPart, BodyPartFactory, StandardBodyPartFactory};
pub use graph::AnatomyGraph;
pub use propagation::{PropagationCounters, PropagationSignal, PropagationStep, SignalCounts};
