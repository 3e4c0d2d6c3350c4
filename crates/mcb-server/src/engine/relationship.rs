//! Relationship graph service (spec §4.4): construction, bounded BFS
//! traversal, validation, and the four auto-detectors.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use mcb_domain::constants::tenancy::{AUTO_RELATIONSHIP_CANDIDATE_LIMIT, RELATIONSHIP_MAX_DEPTH};
use mcb_domain::entities::relationship::{ConfidenceSource, Direction, RelationType};
use mcb_domain::ports::{AdjacencyFilter, ChunkRepository, LinkChunksInput, RelationshipRepository, RelationshipServiceInterface};
use mcb_domain::{ChunkId, ChunkType, Error, GraphPath, NodeStats, Relationship, RelationshipId, Result};

/// Minimum cosine similarity for the problem/solution auto-detector (spec
/// §4.4: "above a semantic threshold (~0.7)").
const PROBLEM_SOLUTION_THRESHOLD: f32 = 0.7;
/// Temporal-proximity window for the temporal detector.
const TEMPORAL_WINDOW_SECS: i64 = 2 * 60;
/// Confidence below which an auto-detected edge is discarded.
const MIN_AUTO_CONFIDENCE: f32 = 0.5;

pub struct RelationshipEngine {
    chunks: Arc<dyn ChunkRepository>,
    relationships: Arc<dyn RelationshipRepository>,
}

impl RelationshipEngine {
    #[must_use]
    pub fn new(chunks: Arc<dyn ChunkRepository>, relationships: Arc<dyn RelationshipRepository>) -> Self {
        Self { chunks, relationships }
    }

    /// Persist an explicit `parent_child` edge with confidence 1.0 (spec
    /// §4.2 step 8).
    pub async fn link_parent_child(&self, parent_id: ChunkId, child_id: ChunkId) -> Result<()> {
        let edge = Relationship {
            id: RelationshipId::new(),
            source_id: parent_id,
            target_id: child_id,
            relation_type: RelationType::ParentChild,
            confidence: 1.0,
            confidence_source: ConfidenceSource::Explicit,
            created_at: Utc::now(),
            validation_count: 0,
            last_validated: None,
            validation_note: None,
        };
        self.relationships.create_relationship(&edge).await
    }

    /// Run the four auto-detectors between `chunk_id` and up to
    /// [`AUTO_RELATIONSHIP_CANDIDATE_LIMIT`] recent same-repository chunks
    /// (spec §4.2 step 10).
    pub async fn auto_detect(&self, chunk_id: &ChunkId) -> Result<Vec<RelationshipId>> {
        let Some(anchor) = self.chunks.get_chunk(chunk_id).await? else {
            return Err(Error::chunk_not_found(chunk_id.to_string()));
        };
        let candidates = self
            .chunks
            .list_by_repository(anchor.repository(), AUTO_RELATIONSHIP_CANDIDATE_LIMIT)
            .await?;

        let mut created = Vec::new();
        for candidate in candidates.iter().filter(|c| c.id != anchor.id) {
            for (relation_type, confidence) in detect_pair(&anchor, candidate) {
                if confidence < MIN_AUTO_CONFIDENCE {
                    continue;
                }
                let edge = Relationship {
                    id: RelationshipId::new(),
                    source_id: anchor.id,
                    target_id: candidate.id,
                    relation_type,
                    confidence,
                    confidence_source: ConfidenceSource::Inferred,
                    created_at: Utc::now(),
                    validation_count: 0,
                    last_validated: None,
                    validation_note: None,
                };
                if self.relationships.create_relationship(&edge).await.is_ok() {
                    created.push(edge.id);
                }
            }
        }
        Ok(created)
    }
}

/// Run the temporal, causal, reference, and problem-solution detectors for
/// one (anchor, candidate) pair, earlier chunk first.
fn detect_pair(anchor: &mcb_domain::Chunk, candidate: &mcb_domain::Chunk) -> Vec<(RelationType, f32)> {
    let (earlier, later) = if anchor.timestamp <= candidate.timestamp {
        (anchor, candidate)
    } else {
        (candidate, anchor)
    };
    let mut hits = Vec::new();

    // Temporal: close wall-clock proximity + same session.
    let delta = (later.timestamp - earlier.timestamp).num_seconds().abs();
    if delta <= TEMPORAL_WINDOW_SECS && earlier.session_id == later.session_id {
        hits.push((RelationType::FollowsUp, 0.6));
    }

    // Causal: problem -> later solution, decision -> later code change.
    if earlier.r#type == ChunkType::Problem && later.r#type == ChunkType::Solution {
        hits.push((RelationType::SolvedBy, 0.75));
    }
    if earlier.r#type == ChunkType::ArchitectureDecision && later.r#type == ChunkType::CodeChange {
        hits.push((RelationType::LedTo, 0.7));
    }

    // Reference: lexical cross-reference via shared file names.
    let shares_file = earlier
        .metadata
        .files_modified
        .iter()
        .any(|f| later.metadata.files_modified.contains(f));
    if shares_file {
        hits.push((RelationType::References, 0.55));
    }

    // Problem-solution: embedding similarity above threshold.
    if let (Some(a), Some(b)) = (&anchor.embedding, &candidate.embedding) {
        let sim = a.cosine_similarity(b);
        if sim >= PROBLEM_SOLUTION_THRESHOLD
            && ((anchor.r#type == ChunkType::Problem && candidate.r#type == ChunkType::Solution)
                || (anchor.r#type == ChunkType::Solution && candidate.r#type == ChunkType::Problem))
        {
            hits.push((RelationType::SolvedBy, sim));
        }
    }

    hits
}

#[async_trait]
impl RelationshipServiceInterface for RelationshipEngine {
    async fn link_chunks(&self, input: LinkChunksInput) -> Result<RelationshipId> {
        if input.source_id == input.target_id {
            return Err(Error::invalid_argument("a chunk cannot be related to itself"));
        }
        let filter = AdjacencyFilter {
            relation_types: Some(vec![input.relation_type]),
            min_confidence: None,
            limit: None,
        };
        let existing = self.relationships.get_adjacent(&input.source_id, Direction::Outgoing, &filter).await?;
        if existing.iter().any(|e| e.target_id == input.target_id) {
            return Err(Error::conflict(format!(
                "duplicate {} edge {} -> {}",
                input.relation_type.as_str(),
                input.source_id,
                input.target_id
            )));
        }
        let edge = Relationship {
            id: RelationshipId::new(),
            source_id: input.source_id,
            target_id: input.target_id,
            relation_type: input.relation_type,
            confidence: input.confidence.clamp(0.0, 1.0),
            confidence_source: input.confidence_source,
            created_at: Utc::now(),
            validation_count: 0,
            last_validated: None,
            validation_note: None,
        };
        self.relationships.create_relationship(&edge).await?;
        Ok(edge.id)
    }

    async fn unlink(&self, id: &RelationshipId) -> Result<()> {
        self.relationships.delete_relationship(id).await
    }

    async fn get_related(
        &self,
        chunk_id: &ChunkId,
        direction: Direction,
        max_depth: u32,
        relation_types: Option<Vec<RelationType>>,
    ) -> Result<Vec<GraphPath>> {
        let max_depth = max_depth.min(RELATIONSHIP_MAX_DEPTH);
        let filter = AdjacencyFilter { relation_types, min_confidence: None, limit: None };

        let mut visited = HashSet::from([*chunk_id]);
        let mut queue = VecDeque::from([(*chunk_id, 0u32, Vec::<RelationType>::new(), 1.0f32)]);
        let mut paths = Vec::new();

        while let Some((current, depth, path_type, score)) = queue.pop_front() {
            if depth >= max_depth {
                continue;
            }
            for edge in self.relationships.get_adjacent(&current, direction, &filter).await? {
                let next = if edge.source_id == current { edge.target_id } else { edge.source_id };
                if !visited.insert(next) {
                    continue;
                }
                let mut next_path = path_type.clone();
                next_path.push(edge.relation_type);
                let next_score = score * edge.confidence;
                paths.push(GraphPath { chunk_id: next, score: next_score, depth: depth + 1, path_type: next_path.clone() });
                queue.push_back((next, depth + 1, next_path, next_score));
            }
        }
        paths.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        Ok(paths)
    }

    async fn validate_relationship(
        &self,
        id: &RelationshipId,
        user_certainty: Option<f32>,
        note: Option<String>,
    ) -> Result<Relationship> {
        let Some(mut edge) = self.relationships.get_relationship(id).await? else {
            return Err(Error::not_found(format!("relationship {id}")));
        };
        edge.record_validation(user_certainty, note, Utc::now());
        self.relationships.update_relationship(&edge).await?;
        Ok(edge)
    }

    async fn auto_detect(&self, chunk_id: &ChunkId) -> Result<Vec<RelationshipId>> {
        RelationshipEngine::auto_detect(self, chunk_id).await
    }

    async fn node_stats(&self, chunk_id: &ChunkId, max_depth: u32) -> Result<NodeStats> {
        let paths = self.get_related(chunk_id, Direction::Both, max_depth, None).await?;
        let degree = self
            .relationships
            .get_adjacent(chunk_id, Direction::Both, &AdjacencyFilter::default())
            .await?
            .len() as u32;
        let centrality = if paths.is_empty() { 0.0 } else { paths.iter().map(|p| p.score).sum::<f32>() / paths.len() as f32 };
        Ok(NodeStats { degree, centrality })
    }
}
