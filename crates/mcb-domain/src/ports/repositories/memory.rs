//! Chunk repository port — the storage boundary for the memory engine's
//! primary record (spec §3, §4.2).

use async_trait::async_trait;

use crate::entities::memory::{Chunk, ChunkFilter, SessionSummary};
use crate::error::Result;
use crate::value_objects::{ChunkId, SessionKey};

/// Full-text search hit with a BM25 rank score, used as one input stream to
/// the hybrid/RRF search fusion (spec §4.3).
#[derive(Debug, Clone)]
pub struct FtsSearchResult {
    pub id: ChunkId,
    /// BM25 rank score (lower is better, typically negative).
    pub rank: f64,
}

/// Port for chunk storage: CRUD, full-text search, and timeline traversal.
///
/// This port is storage-agnostic; [`crate::ports::providers::VectorStoreProvider`]
/// owns the actual vector index. `ChunkRepository` is the structured-metadata
/// side of the same logical record.
#[async_trait]
pub trait ChunkRepository: Send + Sync {
    /// Persist a new chunk.
    async fn store_chunk(&self, chunk: &Chunk) -> Result<()>;

    /// Fetch a chunk by id.
    async fn get_chunk(&self, id: &ChunkId) -> Result<Option<Chunk>>;

    /// Look up a chunk by content hash, for ingestion-time deduplication.
    async fn find_by_hash(&self, content_hash: &str) -> Result<Option<Chunk>>;

    /// Full-text search returning ids with BM25 rank scores for hybrid
    /// fusion with vector similarity.
    async fn search(&self, query: &str, filter: Option<&ChunkFilter>, limit: usize)
        -> Result<Vec<FtsSearchResult>>;

    /// Update an existing chunk's metadata (decay, refresh, task updates).
    async fn update_chunk(&self, chunk: &Chunk) -> Result<()>;

    /// Delete a chunk.
    async fn delete_chunk(&self, id: &ChunkId) -> Result<()>;

    /// Batch fetch, preserving the order and duplicates of `ids` is not
    /// required — callers re-associate results by id.
    async fn get_chunks_by_ids(&self, ids: &[ChunkId]) -> Result<Vec<Chunk>>;

    /// List chunks belonging to a repository, newest first, bounded by
    /// `limit`. Used by the auto-relationship detector's candidate pool and
    /// by thread/conflict detection.
    async fn list_by_repository(&self, repository: &str, limit: usize) -> Result<Vec<Chunk>>;

    /// Enumerate distinct repositories that have at least one stored chunk.
    /// Backs the "discover repositories" helper — spec's Open Questions
    /// resolution: derived from store indices, never hard-coded.
    async fn list_repositories(&self) -> Result<Vec<String>>;

    /// Chunks in timeline order around an anchor (progressive disclosure).
    async fn get_timeline(
        &self,
        anchor_id: &ChunkId,
        before: usize,
        after: usize,
        filter: Option<ChunkFilter>,
    ) -> Result<Vec<Chunk>>;

    /// Performs the store session summary operation.
    async fn store_session_summary(&self, summary: &SessionSummary) -> Result<()>;
    /// Performs the get session summary operation.
    async fn get_session_summary(&self, session_id: &SessionKey) -> Result<Option<SessionSummary>>;
}
