//! Decay/freshness scoring service port (spec §4.5).

use async_trait::async_trait;

use crate::entities::freshness::{DecayClassification, DecayScore, FreshnessStatus};
use crate::error::Result;
use crate::value_objects::ChunkId;

/// Decay/freshness scoring and the retention sweep it feeds (spec §4.5).
#[async_trait]
pub trait DecayServiceInterface: Send + Sync {
    /// Compute the current decay score for one chunk.
    async fn score(&self, chunk_id: &ChunkId) -> Result<DecayScore>;

    /// Classify a score against the configured summarization/deletion
    /// thresholds.
    fn classify(&self, score: &DecayScore) -> DecayClassification;

    /// Full freshness report: score plus human-readable alerts and
    /// suggested actions.
    async fn freshness(&self, chunk_id: &ChunkId) -> Result<FreshnessStatus>;

    /// Sweep a repository's chunks, returning ids that cross the
    /// summarization or deletion threshold. Does not mutate anything —
    /// callers decide what to do with the result.
    async fn sweep(&self, repository: &str) -> Result<Vec<(ChunkId, DecayClassification)>>;
}
