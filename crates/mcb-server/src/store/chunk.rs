//! In-memory [`ChunkRepository`] backed by a sharded [`DashMap`].

use async_trait::async_trait;
use dashmap::DashMap;
use mcb_domain::ports::{ChunkRepository, FtsSearchResult};
use mcb_domain::{Chunk, ChunkFilter, ChunkId, Error, Result, SessionKey, SessionSummary};

/// Reference chunk store: id-keyed map plus a `content_hash -> id` index for
/// ingestion-time dedup (spec §4.2 step 1).
#[derive(Debug, Default)]
pub struct InMemoryChunkRepository {
    chunks: DashMap<ChunkId, Chunk>,
    by_hash: DashMap<String, ChunkId>,
    summaries: DashMap<String, SessionSummary>,
}

impl InMemoryChunkRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches_filter(chunk: &Chunk, filter: &ChunkFilter) -> bool {
    if let Some(repository) = &filter.repository {
        if chunk.repository() != repository {
            return false;
        }
    }
    if let Some(types) = &filter.types {
        if !types.contains(&chunk.r#type) {
            return false;
        }
    }
    if let Some(session_id) = &filter.session_id {
        if chunk.session_id.as_str() != session_id {
            return false;
        }
    }
    if let Some(branch) = &filter.branch {
        if chunk.metadata.branch.as_deref() != Some(branch.as_str()) {
            return false;
        }
    }
    if let Some(tags) = &filter.tags {
        if !tags.iter().all(|t| chunk.metadata.tags.contains(t)) {
            return false;
        }
    }
    if let Some((start, end)) = &filter.time_range {
        if chunk.timestamp < *start || chunk.timestamp > *end {
            return false;
        }
    }
    true
}

#[async_trait]
impl ChunkRepository for InMemoryChunkRepository {
    async fn store_chunk(&self, chunk: &Chunk) -> Result<()> {
        self.by_hash
            .insert(chunk.content_hash.clone(), chunk.id);
        self.chunks.insert(chunk.id, chunk.clone());
        Ok(())
    }

    async fn get_chunk(&self, id: &ChunkId) -> Result<Option<Chunk>> {
        Ok(self.chunks.get(id).map(|e| e.value().clone()))
    }

    async fn find_by_hash(&self, content_hash: &str) -> Result<Option<Chunk>> {
        let Some(id) = self.by_hash.get(content_hash).map(|e| *e.value()) else {
            return Ok(None);
        };
        self.get_chunk(&id).await
    }

    async fn search(
        &self,
        query: &str,
        filter: Option<&ChunkFilter>,
        limit: usize,
    ) -> Result<Vec<FtsSearchResult>> {
        let tokens = mcb_utils::text::tokenize(query, 2);
        let mut hits: Vec<FtsSearchResult> = self
            .chunks
            .iter()
            .filter(|entry| filter.is_none_or(|f| matches_filter(entry.value(), f)))
            .filter_map(|entry| {
                let chunk = entry.value();
                let haystack = mcb_utils::text::tokenize(
                    &format!("{} {}", chunk.summary, chunk.content),
                    2,
                );
                let overlap = tokens.intersection(&haystack).count();
                if overlap == 0 {
                    return None;
                }
                // Cheap pseudo-BM25 rank: more overlapping tokens -> more negative rank.
                Some(FtsSearchResult { id: chunk.id, rank: -(overlap as f64) })
            })
            .collect();
        hits.sort_by(|a, b| a.rank.partial_cmp(&b.rank).unwrap_or(std::cmp::Ordering::Equal));
        hits.truncate(limit);
        Ok(hits)
    }

    async fn update_chunk(&self, chunk: &Chunk) -> Result<()> {
        if !self.chunks.contains_key(&chunk.id) {
            return Err(Error::chunk_not_found(chunk.id.to_string()));
        }
        self.chunks.insert(chunk.id, chunk.clone());
        Ok(())
    }

    async fn delete_chunk(&self, id: &ChunkId) -> Result<()> {
        if let Some((_, chunk)) = self.chunks.remove(id) {
            self.by_hash.remove(&chunk.content_hash);
        }
        Ok(())
    }

    async fn get_chunks_by_ids(&self, ids: &[ChunkId]) -> Result<Vec<Chunk>> {
        Ok(ids.iter().filter_map(|id| self.chunks.get(id).map(|e| e.value().clone())).collect())
    }

    async fn list_by_repository(&self, repository: &str, limit: usize) -> Result<Vec<Chunk>> {
        let mut chunks: Vec<Chunk> = self
            .chunks
            .iter()
            .filter(|e| e.value().repository() == repository)
            .map(|e| e.value().clone())
            .collect();
        chunks.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        chunks.truncate(limit);
        Ok(chunks)
    }

    async fn list_repositories(&self) -> Result<Vec<String>> {
        let mut repos: Vec<String> =
            self.chunks.iter().map(|e| e.value().repository().to_string()).collect();
        repos.sort();
        repos.dedup();
        Ok(repos)
    }

    async fn get_timeline(
        &self,
        anchor_id: &ChunkId,
        before: usize,
        after: usize,
        filter: Option<ChunkFilter>,
    ) -> Result<Vec<Chunk>> {
        let Some(anchor) = self.get_chunk(anchor_id).await? else {
            return Err(Error::chunk_not_found(anchor_id.to_string()));
        };
        let mut same_repo: Vec<Chunk> = self
            .chunks
            .iter()
            .filter(|e| e.value().repository() == anchor.repository())
            .filter(|e| filter.as_ref().is_none_or(|f| matches_filter(e.value(), f)))
            .map(|e| e.value().clone())
            .collect();
        same_repo.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        let anchor_pos = same_repo.iter().position(|c| c.id == *anchor_id).unwrap_or(0);
        let start = anchor_pos.saturating_sub(before);
        let end = (anchor_pos + after + 1).min(same_repo.len());
        Ok(same_repo[start..end].to_vec())
    }

    async fn store_session_summary(&self, summary: &SessionSummary) -> Result<()> {
        self.summaries.insert(summary.session_id.as_str().to_string(), summary.clone());
        Ok(())
    }

    async fn get_session_summary(&self, session_id: &SessionKey) -> Result<Option<SessionSummary>> {
        Ok(self.summaries.get(session_id.as_str()).map(|e| e.value().clone()))
    }
}
