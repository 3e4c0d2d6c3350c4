//! Ingestion pipeline (spec §4.2): validate, normalize, build metadata,
//! detect context, classify, embed, store, persist optional parent link, and
//! fire the bounded auto-relationship task.
//!
//! Splitting long content into multiple chunks (spec §4.2 step 5) is
//! delegated to an external chunking service per §1's Non-goals; this
//! engine's `store_chunk` call always produces exactly one chunk, matching
//! the port's single-output contract.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use mcb_domain::ports::{
    ChunkRepository, CreateSessionSummaryInput, EmbeddingProvider, IngestionServiceInterface,
    RelationshipRepository, StoreChunkInput, StoreChunkOutput,
};
use mcb_domain::{
    Chunk, ChunkFilter, ChunkId, ChunkMetadata, ChunkType, Error, RepositoryName, Result,
    SessionKey, SessionSummary,
};

use crate::engine::relationship::RelationshipEngine;

/// Reference ingestion pipeline over the in-memory stores.
pub struct IngestionEngine {
    chunks: Arc<dyn ChunkRepository>,
    relationships: Arc<dyn RelationshipRepository>,
    embeddings: Arc<dyn EmbeddingProvider>,
    relationship_engine: Arc<RelationshipEngine>,
}

impl IngestionEngine {
    #[must_use]
    pub fn new(
        chunks: Arc<dyn ChunkRepository>,
        relationships: Arc<dyn RelationshipRepository>,
        embeddings: Arc<dyn EmbeddingProvider>,
        relationship_engine: Arc<RelationshipEngine>,
    ) -> Self {
        Self { chunks, relationships, embeddings, relationship_engine }
    }
}

/// Classify a chunk's type from content heuristics (spec §4.2 step 6) when
/// the caller did not assert one.
fn classify_content(content: &str) -> ChunkType {
    let lower = content.to_lowercase();
    if lower.contains("decided to") || lower.contains("we will use") || lower.contains("architecture") {
        ChunkType::ArchitectureDecision
    } else if lower.contains("fixed") || lower.contains("solved") || lower.contains("resolved") {
        ChunkType::Solution
    } else if lower.contains("error") || lower.contains("bug") || lower.contains("fails") || lower.contains("issue") {
        ChunkType::Problem
    } else if lower.contains("refactor") || lower.contains("added") || lower.contains("changed") {
        ChunkType::CodeChange
    } else if lower.ends_with('?') {
        ChunkType::Question
    } else {
        ChunkType::Discussion
    }
}

fn derive_summary(content: &str) -> String {
    let first_line = content.lines().next().unwrap_or(content);
    mcb_utils::text::truncate_graphemes(first_line, 120)
}

#[async_trait]
impl IngestionServiceInterface for IngestionEngine {
    async fn store_chunk(&self, input: StoreChunkInput) -> Result<StoreChunkOutput> {
        // Step 1: validate.
        if input.content.trim().is_empty() {
            return Err(Error::invalid_argument("content must not be empty"));
        }
        if input.session_id.trim().is_empty() {
            return Err(Error::invalid_argument("session_id must not be empty"));
        }

        // Step 2: normalize repository, compose session key.
        let repository = input
            .repository
            .as_deref()
            .map_or_else(RepositoryName::global, RepositoryName::normalize);
        let session_id = SessionKey::compose(&repository, &input.session_id, Utc::now().timestamp());

        let content_hash = mcb_utils::hash::content_hash_str(&input.content);
        if let Some(existing) = self.chunks.find_by_hash(&content_hash).await? {
            return Ok(StoreChunkOutput {
                chunk_id: existing.id,
                r#type: existing.r#type,
                summary: existing.summary,
                stored_at: existing.timestamp,
                deduplicated: true,
            });
        }

        // Step 3: build metadata.
        let mut metadata = ChunkMetadata::with_defaults(repository.as_str());
        metadata.branch = input.branch.clone();
        metadata.files_modified = input.files_modified.clone();
        metadata.tools_used = input.tools_used.clone();
        metadata.tags = input.tags.clone();

        // Step 4: detect context (client type is the only signal this
        // self-contained engine has access to; VCS/language detection needs
        // filesystem access the domain layer does not have).
        if let Some(client_type) = &input.client_type {
            metadata
                .extended_metadata
                .insert("client_type".to_string(), serde_json::Value::String(client_type.clone()));
        }

        // Step 6: classify type.
        let r#type = input.r#type.unwrap_or_else(|| classify_content(&input.content));
        let summary = derive_summary(&input.content);

        // Step 7: embed.
        let embedding = self.embeddings.embed(&input.content).await?;

        let chunk_id = ChunkId::new();
        let chunk = Chunk {
            id: chunk_id,
            session_id,
            timestamp: Utc::now(),
            r#type,
            content: input.content,
            summary: summary.clone(),
            embedding: Some(embedding),
            metadata,
            related_chunks: Vec::new(),
            content_hash,
        };

        // Step 9: store.
        self.chunks.store_chunk(&chunk).await?;

        // Step 8: persist parent link, if supplied.
        if let Some(parent_id) = input.parent_chunk {
            self.relationship_engine.link_parent_child(parent_id, chunk_id).await?;
        }

        // Step 10: asynchronous, bounded, best-effort auto-relationship.
        let engine = Arc::clone(&self.relationship_engine);
        tokio::spawn(async move {
            if let Err(err) = engine.auto_detect(&chunk_id).await {
                tracing::warn!(chunk_id = %chunk_id, error = %err, "auto-relationship detection failed");
            }
        });

        Ok(StoreChunkOutput { chunk_id, r#type, summary, stored_at: chunk.timestamp, deduplicated: false })
    }

    async fn get_chunk(&self, id: &ChunkId) -> Result<Option<Chunk>> {
        self.chunks.get_chunk(id).await
    }

    async fn delete_chunk(&self, id: &ChunkId) -> Result<()> {
        self.relationships.delete_relationships_for_chunk(id).await?;
        self.chunks.delete_chunk(id).await
    }

    async fn get_timeline(
        &self,
        anchor_id: &ChunkId,
        before: usize,
        after: usize,
        filter: Option<ChunkFilter>,
    ) -> Result<Vec<Chunk>> {
        self.chunks.get_timeline(anchor_id, before, after, filter).await
    }

    async fn get_chunks_by_ids(&self, ids: &[ChunkId]) -> Result<Vec<Chunk>> {
        self.chunks.get_chunks_by_ids(ids).await
    }

    async fn create_session_summary(&self, input: CreateSessionSummaryInput) -> Result<()> {
        self.chunks
            .store_session_summary(&SessionSummary {
                session_id: input.session_id,
                topics: input.topics,
                decisions: input.decisions,
                next_steps: input.next_steps,
                key_files: input.key_files,
                created_at: Utc::now(),
            })
            .await
    }

    async fn get_session_summary(&self, session_id: &SessionKey) -> Result<Option<SessionSummary>> {
        self.chunks.get_session_summary(session_id).await
    }
}

