//! Relationship graph service port (spec §4.4).

use async_trait::async_trait;

use crate::entities::relationship::{ConfidenceSource, Direction, GraphPath, NodeStats, RelationType, Relationship};
use crate::error::Result;
use crate::value_objects::{ChunkId, RelationshipId};

/// Input for `link_chunks`.
#[derive(Debug, Clone)]
pub struct LinkChunksInput {
    pub source_id: ChunkId,
    pub target_id: ChunkId,
    pub relation_type: RelationType,
    pub confidence: f32,
    pub confidence_source: ConfidenceSource,
}

/// Relationship graph construction, traversal, and validation (spec §4.4).
#[async_trait]
pub trait RelationshipServiceInterface: Send + Sync {
    /// Create an explicit edge. Rejects self-loops and duplicate
    /// `(source, target, relation_type)` triples.
    async fn link_chunks(&self, input: LinkChunksInput) -> Result<RelationshipId>;

    /// Remove an edge.
    async fn unlink(&self, id: &RelationshipId) -> Result<()>;

    /// Bounded breadth-first traversal from `chunk_id`. `max_depth` is
    /// clamped to 10; traversal maintains a visited set to prevent cycles.
    async fn get_related(
        &self,
        chunk_id: &ChunkId,
        direction: Direction,
        max_depth: u32,
        relation_types: Option<Vec<RelationType>>,
    ) -> Result<Vec<GraphPath>>;

    /// Record a validation event against an existing edge.
    async fn validate_relationship(
        &self,
        id: &RelationshipId,
        user_certainty: Option<f32>,
        note: Option<String>,
    ) -> Result<Relationship>;

    /// Run all four auto-detectors (temporal, causal, reference,
    /// problem-solution) over the chunks newly stored in one ingestion call
    /// and persist any edges they propose above their confidence floor.
    async fn auto_detect(&self, chunk_id: &ChunkId) -> Result<Vec<RelationshipId>>;

    /// Per-node degree/centrality statistics, computed over the subgraph
    /// reachable from `chunk_id` within `max_depth`.
    async fn node_stats(&self, chunk_id: &ChunkId, max_depth: u32) -> Result<NodeStats>;
}
