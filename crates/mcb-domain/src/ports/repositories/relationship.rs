//! Relationship graph storage port (spec §4.4).

use async_trait::async_trait;

use crate::entities::relationship::{Direction, RelationType, Relationship};
use crate::error::Result;
use crate::value_objects::{ChunkId, RelationshipId};

/// Filters applied to an adjacency query.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyFilter {
    pub relation_types: Option<Vec<RelationType>>,
    pub min_confidence: Option<f32>,
    pub limit: Option<usize>,
}

/// Port for persisted relationship edges between chunks.
#[async_trait]
pub trait RelationshipRepository: Send + Sync {
    /// Persist a new edge. Implementations must reject an attempt to create
    /// a second `parent_child` edge for a `target_id` that already has one
    /// (spec §8: "`parent_child(P,C)` must be unique per `C`").
    async fn create_relationship(&self, relationship: &Relationship) -> Result<()>;

    /// Fetch a single edge by id.
    async fn get_relationship(&self, id: &RelationshipId) -> Result<Option<Relationship>>;

    /// Update an existing edge (confidence, validation bookkeeping).
    async fn update_relationship(&self, relationship: &Relationship) -> Result<()>;

    /// Adjacency query: all edges touching `chunk_id` in the requested
    /// direction, filtered.
    async fn get_adjacent(
        &self,
        chunk_id: &ChunkId,
        direction: Direction,
        filter: &AdjacencyFilter,
    ) -> Result<Vec<Relationship>>;

    /// Delete an edge.
    async fn delete_relationship(&self, id: &RelationshipId) -> Result<()>;

    /// Delete every edge touching a chunk (used on chunk deletion).
    async fn delete_relationships_for_chunk(&self, chunk_id: &ChunkId) -> Result<()>;
}
