//! Pairwise contradiction detection and resolution (spec §4.6).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::ChunkId;

/// Conflict type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    Architectural,
    Technical,
    Temporal,
    Outcome,
    Decision,
    Methodology,
    Pattern,
}

/// Conflict severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Low,
    Medium,
    High,
    Critical,
}

/// A detected pairwise conflict between two chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    pub chunk_a: ChunkId,
    pub chunk_b: ChunkId,
    pub conflict_type: ConflictType,
    pub severity: Severity,
    pub rationale: String,
    pub detected_at: DateTime<Utc>,
}

/// A resolution strategy for a conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionStrategyKind {
    AcceptLatest,
    AcceptHighest,
    Merge,
    ManualReview,
    Contextual,
    Evolutionary,
    DomainSpecific,
}

/// One candidate resolution for a conflict, with supporting detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionStrategy {
    pub kind: ResolutionStrategyKind,
    pub confidence: f32,
    pub rationale: String,
    pub steps: Vec<String>,
    pub risks: Vec<String>,
    pub benefits: Vec<String>,
}
