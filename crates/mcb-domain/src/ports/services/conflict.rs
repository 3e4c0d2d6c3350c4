//! Pairwise contradiction detection and resolution service port (spec §4.6).

use async_trait::async_trait;

use crate::entities::conflict::{Conflict, ResolutionStrategy};
use crate::error::Result;
use crate::value_objects::ChunkId;

/// Conflict detection and resolution strategy generation (spec §4.6).
#[async_trait]
pub trait ConflictServiceInterface: Send + Sync {
    /// Detect pairwise conflicts between `chunk_id` and its semantic
    /// neighborhood within the same repository.
    async fn detect(&self, chunk_id: &ChunkId) -> Result<Vec<Conflict>>;

    /// Propose resolution strategies for a previously detected conflict,
    /// ranked by confidence.
    async fn propose_resolutions(&self, conflict: &Conflict) -> Result<Vec<ResolutionStrategy>>;
}
