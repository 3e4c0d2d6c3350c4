//! Progressive-fallback search (spec §4.3): four tiers, hybrid BM25 +
//! semantic scoring, and the non-fallback `secure_search` variant.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use mcb_domain::constants::search::{HYBRID_SEARCH_BM25_WEIGHT, HYBRID_SEARCH_SEMANTIC_WEIGHT, SEARCH_OVERFETCH_MULTIPLIER};
use mcb_domain::entities::memory::ChunkFilter;
use mcb_domain::ports::{
    ChunkRepository, EmbeddingProvider, FtsSearchResult, MemorySearchOutcome, MemorySearchQuery,
    MemorySearchServiceInterface, SearchTier,
};
use mcb_domain::{ChunkId, Embedding, Error, MemorySearchIndex, MemorySearchResult, RepositoryName, Result};

/// Operational search knobs (spec §6: "Search-related knobs ... are in
/// config", not domain constants).
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub relaxed_min_relevance: f32,
    pub broadest_min_relevance: f32,
    pub max_related_repos: usize,
    pub enable_repository_fallback: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            relaxed_min_relevance: 0.5,
            broadest_min_relevance: 0.0,
            max_related_repos: 3,
            enable_repository_fallback: true,
        }
    }
}

pub struct MemorySearchEngine {
    chunks: Arc<dyn ChunkRepository>,
    embeddings: Arc<dyn EmbeddingProvider>,
    config: SearchConfig,
}

impl MemorySearchEngine {
    #[must_use]
    pub fn new(chunks: Arc<dyn ChunkRepository>, embeddings: Arc<dyn EmbeddingProvider>, config: SearchConfig) -> Self {
        Self { chunks, embeddings, config }
    }

    fn to_filter(query: &MemorySearchQuery, repository: Option<String>) -> ChunkFilter {
        ChunkFilter { repository, types: query.types.clone(), ..ChunkFilter::default() }
    }

    /// Hybrid-score and rank one tier's candidate pool against the query
    /// embedding, returning results at or above `min_relevance`.
    async fn run_tier(
        &self,
        query: &MemorySearchQuery,
        query_embedding: &Embedding,
        filter: Option<ChunkFilter>,
        min_relevance: f32,
    ) -> Result<Vec<MemorySearchResult>> {
        let overfetch = query.limit.max(1) * SEARCH_OVERFETCH_MULTIPLIER;
        let fts = self.chunks.search(&query.query, filter.as_ref(), overfetch).await?;
        if fts.is_empty() {
            return Ok(Vec::new());
        }
        let bm25_unit = normalize_ranks(&fts);

        let ids: Vec<ChunkId> = fts.iter().map(|r| r.id).collect();
        let chunks = self.chunks.get_chunks_by_ids(&ids).await?;
        let mut by_id: HashMap<ChunkId, _> = chunks.into_iter().map(|c| (c.id, c)).collect();

        let mut scored = Vec::new();
        for hit in &fts {
            let Some(chunk) = by_id.remove(&hit.id) else { continue };
            let semantic = chunk
                .embedding
                .as_ref()
                .map_or(0.0, |e| query_embedding.cosine_similarity(e).max(0.0));
            let bm25 = *bm25_unit.get(&hit.id).unwrap_or(&0.0);
            let score = (HYBRID_SEARCH_BM25_WEIGHT as f32) * bm25 + (HYBRID_SEARCH_SEMANTIC_WEIGHT as f32) * semantic;
            if score >= min_relevance {
                scored.push(MemorySearchResult { chunk, score });
            }
        }
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| b.chunk.timestamp.cmp(&a.chunk.timestamp))
        });
        scored.truncate(query.limit);
        Ok(scored)
    }

    /// Related-repository candidates ordered by longest-common-prefix length
    /// (descending), ties broken lexicographically (SPEC_FULL §4.3).
    async fn related_repository_candidates(&self, repository: &str) -> Result<Vec<String>> {
        let all = self.chunks.list_repositories().await?;
        let original = RepositoryName::normalize(repository);
        let original_segments: std::collections::HashSet<&str> = original.segments().into_iter().collect();

        let mut candidates: Vec<String> = all
            .into_iter()
            .filter(|r| r != original.as_str())
            .filter(|r| {
                let segments = RepositoryName::normalize(r).segments();
                segments.iter().any(|s| original_segments.contains(s))
            })
            .collect();

        candidates.sort_by(|a, b| {
            let lcp_a = longest_common_prefix(original.as_str(), a);
            let lcp_b = longest_common_prefix(original.as_str(), b);
            lcp_b.cmp(&lcp_a).then_with(|| a.cmp(b))
        });
        candidates.truncate(self.config.max_related_repos);
        Ok(candidates)
    }
}

fn longest_common_prefix(a: &str, b: &str) -> usize {
    a.bytes().zip(b.bytes()).take_while(|(x, y)| x == y).count()
}

/// Min-max normalize BM25 ranks (lower is better) into `[0, 1]`, best rank
/// mapping to 1.0.
fn normalize_ranks(results: &[FtsSearchResult]) -> HashMap<ChunkId, f32> {
    let (min, max) = results.iter().fold((f64::MAX, f64::MIN), |(lo, hi), r| (lo.min(r.rank), hi.max(r.rank)));
    let span = max - min;
    results
        .iter()
        .map(|r| {
            let unit = if span.abs() < f64::EPSILON { 1.0 } else { 1.0 - ((r.rank - min) / span) };
            (r.id, unit as f32)
        })
        .collect()
}

#[async_trait]
impl MemorySearchServiceInterface for MemorySearchEngine {
    async fn search(&self, query: MemorySearchQuery) -> Result<MemorySearchOutcome> {
        let started = Instant::now();
        let query_embedding = self.embeddings.embed(&query.query).await?;

        // Tier 1: strict.
        let filter = query.repository.clone().map(|r| Self::to_filter(&query, Some(r)));
        let strict = self.run_tier(&query, &query_embedding, filter.clone(), query.min_relevance).await?;
        if !strict.is_empty() {
            return Ok(finish(strict, SearchTier::Strict, started));
        }

        // Tier 2: relaxed relevance, same repository.
        let relaxed = self
            .run_tier(&query, &query_embedding, filter.clone(), self.config.relaxed_min_relevance)
            .await?;
        if !relaxed.is_empty() {
            return Ok(finish(relaxed, SearchTier::RelaxedRelevance, started));
        }

        // Tier 3: related-repository probe.
        if self.config.enable_repository_fallback {
            if let Some(repository) = &query.repository {
                for candidate in self.related_repository_candidates(repository).await? {
                    let candidate_filter = Self::to_filter(&query, Some(candidate));
                    let hits = self
                        .run_tier(&query, &query_embedding, Some(candidate_filter), self.config.relaxed_min_relevance)
                        .await?;
                    if !hits.is_empty() {
                        return Ok(finish(hits, SearchTier::RelatedRepository, started));
                    }
                }
            }
        }

        // Tier 4: broadest — clear repository and type filters.
        let broadest_query = MemorySearchQuery { repository: None, types: None, ..query };
        let broadest = self.run_tier(&broadest_query, &query_embedding, None, self.config.broadest_min_relevance).await?;
        Ok(finish(broadest, SearchTier::Broadest, started))
    }

    async fn secure_search(&self, query: MemorySearchQuery) -> Result<MemorySearchOutcome> {
        let started = Instant::now();
        let query_embedding = self.embeddings.embed(&query.query).await?;
        let requested_repo = query.repository.clone();
        let filter = requested_repo.clone().map(|r| Self::to_filter(&query, Some(r)));
        let strict = self.run_tier(&query, &query_embedding, filter, query.min_relevance).await?;
        if strict.is_empty() && requested_repo.is_some() {
            return Err(Error::tenant_mismatch(
                requested_repo.clone().unwrap_or_default(),
                requested_repo.unwrap_or_default(),
            ));
        }
        Ok(finish(strict, SearchTier::Strict, started))
    }

    async fn memory_search(&self, query: MemorySearchQuery) -> Result<Vec<MemorySearchIndex>> {
        let outcome = self.search(query).await?;
        Ok(outcome
            .results
            .into_iter()
            .map(|r| MemorySearchIndex {
                id: r.chunk.id,
                r#type: r.chunk.r#type,
                relevance_score: r.score,
                tags: r.chunk.metadata.tags.clone(),
                session_id: r.chunk.session_id.to_string(),
                repository: r.chunk.repository().to_string(),
                content_preview: mcb_utils::text::truncate_graphemes(&r.chunk.content, 160),
                timestamp: r.chunk.timestamp,
            })
            .collect())
    }

    async fn embed_content(&self, content: &str) -> Result<Embedding> {
        self.embeddings.embed(content).await
    }
}

fn finish(results: Vec<MemorySearchResult>, tier_used: SearchTier, started: Instant) -> MemorySearchOutcome {
    let total = results.len();
    MemorySearchOutcome { results, tier_used, query_time_ms: started.elapsed().as_millis() as u64, total }
}
