//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md#service-ports)
//!
//! Ingestion and progressive-fallback search ports — the memory engine's two
//! primary data-flow entrypoints (spec §2, §4.2, §4.3).

use async_trait::async_trait;

use crate::entities::memory::{
    Chunk, ChunkFilter, ChunkType, MemorySearchIndex, MemorySearchResult, SessionSummary,
};
use crate::error::Result;
use crate::value_objects::{ChunkId, SessionKey};

/// Input payload for `store_chunk` (spec §4.2).
#[derive(Debug, Clone)]
pub struct StoreChunkInput {
    pub content: String,
    pub session_id: String,
    pub repository: Option<String>,
    pub branch: Option<String>,
    pub files_modified: Vec<String>,
    pub tools_used: Vec<String>,
    pub tags: Vec<String>,
    pub client_type: Option<String>,
    /// Caller-asserted type; `None` triggers content-heuristic classification
    /// (spec §4.2 step 6).
    pub r#type: Option<ChunkType>,
    pub parent_chunk: Option<ChunkId>,
}

/// Result of `store_chunk`.
#[derive(Debug, Clone)]
pub struct StoreChunkOutput {
    pub chunk_id: ChunkId,
    pub r#type: ChunkType,
    pub summary: String,
    pub stored_at: chrono::DateTime<chrono::Utc>,
    /// `true` if an existing chunk with the same content hash was returned
    /// instead of creating a new one.
    pub deduplicated: bool,
}

/// Input payload for `create_session_summary`.
#[derive(Debug, Clone)]
pub struct CreateSessionSummaryInput {
    pub session_id: SessionKey,
    pub topics: Vec<String>,
    pub decisions: Vec<String>,
    pub next_steps: Vec<String>,
    pub key_files: Vec<String>,
}

/// Ingestion pipeline: validate, normalize, detect context, chunk, embed,
/// store, and (asynchronously) auto-link (spec §4.2).
#[async_trait]
pub trait IngestionServiceInterface: Send + Sync {
    /// Run the full ingestion pipeline for one caller payload.
    ///
    /// # Errors
    /// Returns `InvalidArgument` on validation failure (before any side
    /// effect), or `External` if the embedding/vector-store step fails.
    async fn store_chunk(&self, input: StoreChunkInput) -> Result<StoreChunkOutput>;

    /// Fetch a chunk by id.
    async fn get_chunk(&self, id: &ChunkId) -> Result<Option<Chunk>>;

    /// Delete a chunk by id.
    async fn delete_chunk(&self, id: &ChunkId) -> Result<()>;

    /// Chunks in timeline order around an anchor (progressive disclosure
    /// step 2).
    async fn get_timeline(
        &self,
        anchor_id: &ChunkId,
        before: usize,
        after: usize,
        filter: Option<ChunkFilter>,
    ) -> Result<Vec<Chunk>>;

    /// Batch fetch by id (progressive disclosure step 3).
    async fn get_chunks_by_ids(&self, ids: &[ChunkId]) -> Result<Vec<Chunk>>;

    /// Create or update a session summary.
    async fn create_session_summary(&self, input: CreateSessionSummaryInput) -> Result<()>;

    /// Get a session summary.
    async fn get_session_summary(&self, session_id: &SessionKey) -> Result<Option<SessionSummary>>;
}

/// Caller-facing query for progressive-fallback search (spec §4.3).
#[derive(Debug, Clone)]
pub struct MemorySearchQuery {
    pub query: String,
    pub repository: Option<String>,
    pub types: Option<Vec<ChunkType>>,
    pub limit: usize,
    pub min_relevance: f32,
    pub recency_bias: Option<f32>,
}

/// Which tier a search result was produced by — surfaced so callers and
/// `search_explained` can report why a result was included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchTier {
    Strict,
    RelaxedRelevance,
    RelatedRepository,
    Broadest,
}

/// Outcome of a progressive-fallback search.
#[derive(Debug, Clone)]
pub struct MemorySearchOutcome {
    pub results: Vec<MemorySearchResult>,
    pub tier_used: SearchTier,
    pub query_time_ms: u64,
    pub total: usize,
}

/// Progressive-fallback semantic search and its non-fallback counterpart
/// (spec §4.3).
#[async_trait]
pub trait MemorySearchServiceInterface: Send + Sync {
    /// Run the four-tier progressive-fallback search, stopping at the first
    /// tier that yields results.
    async fn search(&self, query: MemorySearchQuery) -> Result<MemorySearchOutcome>;

    /// Non-fallback search: never widens scope. Returns `TenantMismatch` if
    /// the repository filter would need to be relaxed to find results,
    /// rather than relaxing it. Recommended for automated deletions.
    async fn secure_search(&self, query: MemorySearchQuery) -> Result<MemorySearchOutcome>;

    /// Token-efficient index-only search (3-layer workflow step 1).
    async fn memory_search(&self, query: MemorySearchQuery) -> Result<Vec<MemorySearchIndex>>;

    /// Generate an embedding for content without storing anything.
    async fn embed_content(&self, content: &str) -> Result<crate::value_objects::Embedding>;
}
