//! Pairwise conflict detection and resolver (spec §4.6).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use mcb_domain::entities::conflict::{ConflictType, ResolutionStrategyKind, Severity};
use mcb_domain::entities::memory::Outcome;
use mcb_domain::entities::relationship::{Direction, RelationType};
use mcb_domain::ports::{AdjacencyFilter, ChunkRepository, ConflictServiceInterface, RelationshipRepository};
use mcb_domain::{Chunk, ChunkType, Conflict, Error, Result};

/// Candidate pool size for a conflict scan (mirrors the auto-relationship
/// detector's candidate bound; no dedicated spec constant exists).
const CONFLICT_CANDIDATE_LIMIT: usize = 20;
/// Minimum shared-word ratio for the outcome heuristic (spec §4.6).
const OUTCOME_OVERLAP_THRESHOLD: f32 = 0.3;

const OPPOSING_KEYWORD_PAIRS: &[(&str, &str)] = &[
    ("sync", "async"),
    ("sql", "nosql"),
    ("rest", "graphql"),
    ("microservice", "monolith"),
];

pub struct ConflictEngine {
    chunks: Arc<dyn ChunkRepository>,
    relationships: Arc<dyn RelationshipRepository>,
}

impl ConflictEngine {
    #[must_use]
    pub fn new(chunks: Arc<dyn ChunkRepository>, relationships: Arc<dyn RelationshipRepository>) -> Self {
        Self { chunks, relationships }
    }

    async fn has_supersedes_edge(&self, a: &Chunk, b: &Chunk) -> Result<bool> {
        let filter = AdjacencyFilter { relation_types: Some(vec![RelationType::Supersedes]), min_confidence: None, limit: None };
        let edges = self.relationships.get_adjacent(&a.id, Direction::Both, &filter).await?;
        Ok(edges.iter().any(|e| e.source_id == b.id || e.target_id == b.id))
    }
}

fn opposite_outcome(a: Outcome, b: Outcome) -> bool {
    matches!(
        (a, b),
        (Outcome::Success, Outcome::Failed)
            | (Outcome::Failed, Outcome::Success)
            | (Outcome::Success, Outcome::Abandoned)
            | (Outcome::Abandoned, Outcome::Success)
    )
}

fn outcome_conflict(a: &Chunk, b: &Chunk) -> Option<Conflict> {
    let overlap = mcb_utils::text::jaccard_overlap(&a.summary, &b.summary);
    if overlap > OUTCOME_OVERLAP_THRESHOLD && opposite_outcome(a.metadata.outcome, b.metadata.outcome) {
        return Some(Conflict {
            chunk_a: a.id,
            chunk_b: b.id,
            conflict_type: ConflictType::Outcome,
            severity: Severity::High,
            rationale: format!("lexically similar summaries (overlap {overlap:.2}) report opposite outcomes"),
            detected_at: Utc::now(),
        });
    }
    None
}

fn architectural_conflict(a: &Chunk, b: &Chunk) -> Option<Conflict> {
    if a.r#type != ChunkType::ArchitectureDecision || b.r#type != ChunkType::ArchitectureDecision {
        return None;
    }
    let (la, lb) = (a.content.to_lowercase(), b.content.to_lowercase());
    for (left, right) in OPPOSING_KEYWORD_PAIRS {
        let a_has_left = la.contains(left);
        let b_has_right = lb.contains(right);
        let a_has_right = la.contains(right);
        let b_has_left = lb.contains(left);
        if (a_has_left && b_has_right) || (a_has_right && b_has_left) {
            return Some(Conflict {
                chunk_a: a.id,
                chunk_b: b.id,
                conflict_type: ConflictType::Architectural,
                severity: Severity::Critical,
                rationale: format!("opposing architectural keywords detected: '{left}' vs '{right}'"),
                detected_at: Utc::now(),
            });
        }
    }
    None
}

#[async_trait]
impl ConflictServiceInterface for ConflictEngine {
    async fn detect(&self, chunk_id: &mcb_domain::ChunkId) -> Result<Vec<Conflict>> {
        let Some(anchor) = self.chunks.get_chunk(chunk_id).await? else {
            return Err(Error::chunk_not_found(chunk_id.to_string()));
        };
        let candidates = self.chunks.list_by_repository(anchor.repository(), CONFLICT_CANDIDATE_LIMIT).await?;

        let mut conflicts = Vec::new();
        for candidate in candidates.iter().filter(|c| c.id != anchor.id) {
            if let Some(c) = outcome_conflict(&anchor, candidate) {
                conflicts.push(c);
            }
            if let Some(c) = architectural_conflict(&anchor, candidate) {
                conflicts.push(c);
            }

            let shares_tag = anchor.metadata.tags.iter().any(|t| candidate.metadata.tags.contains(t));
            if shares_tag && anchor.timestamp != candidate.timestamp && !self.has_supersedes_edge(&anchor, candidate).await? {
                conflicts.push(Conflict {
                    chunk_a: anchor.id,
                    chunk_b: candidate.id,
                    conflict_type: ConflictType::Pattern,
                    severity: Severity::Medium,
                    rationale: "shared methodology tag with no explicit supersedes edge".to_string(),
                    detected_at: Utc::now(),
                });
            }
        }
        Ok(conflicts)
    }

    async fn propose_resolutions(&self, conflict: &Conflict) -> Result<Vec<mcb_domain::entities::conflict::ResolutionStrategy>> {
        use mcb_domain::entities::conflict::ResolutionStrategy;

        let mut strategies = Vec::new();
        match conflict.conflict_type {
            ConflictType::Outcome => {
                strategies.push(ResolutionStrategy {
                    kind: ResolutionStrategyKind::AcceptLatest,
                    confidence: 0.6,
                    rationale: "the more recent outcome reflects the current state".to_string(),
                    steps: vec!["mark the older chunk's outcome as superseded".to_string()],
                    risks: vec!["the newer chunk may itself be reverted".to_string()],
                    benefits: vec!["resolves the contradiction without manual effort".to_string()],
                });
                strategies.push(ResolutionStrategy {
                    kind: ResolutionStrategyKind::ManualReview,
                    confidence: 0.4,
                    rationale: "outcome conflicts can hide a genuine regression".to_string(),
                    steps: vec!["surface both chunks to a reviewer".to_string()],
                    risks: vec![],
                    benefits: vec!["avoids silently picking the wrong outcome".to_string()],
                });
            }
            ConflictType::Architectural | ConflictType::Decision => {
                strategies.push(ResolutionStrategy {
                    kind: ResolutionStrategyKind::ManualReview,
                    confidence: 0.7,
                    rationale: "architectural contradictions need a human decision".to_string(),
                    steps: vec!["schedule a design review".to_string(), "record the chosen direction as a new decision chunk".to_string()],
                    risks: vec!["the team may re-litigate a settled decision".to_string()],
                    benefits: vec!["produces an explicit, auditable resolution".to_string()],
                });
                strategies.push(ResolutionStrategy {
                    kind: ResolutionStrategyKind::Evolutionary,
                    confidence: 0.5,
                    rationale: "architecture decisions often evolve rather than conflict".to_string(),
                    steps: vec!["link the newer decision to the older one with a supersedes edge".to_string()],
                    risks: vec![],
                    benefits: vec!["preserves history instead of discarding the earlier decision".to_string()],
                });
            }
            ConflictType::Pattern | ConflictType::Methodology => {
                strategies.push(ResolutionStrategy {
                    kind: ResolutionStrategyKind::Evolutionary,
                    confidence: 0.65,
                    rationale: "a methodology shift without an explicit supersedes edge is usually intentional drift".to_string(),
                    steps: vec!["add a supersedes edge from the newer chunk to the older one".to_string()],
                    risks: vec![],
                    benefits: vec!["keeps the pattern history navigable".to_string()],
                });
            }
            ConflictType::Technical | ConflictType::Temporal => {
                strategies.push(ResolutionStrategy {
                    kind: ResolutionStrategyKind::Contextual,
                    confidence: 0.5,
                    rationale: "technical/temporal conflicts often depend on context not captured by either chunk".to_string(),
                    steps: vec!["compare the two chunks' branch and session context".to_string()],
                    risks: vec![],
                    benefits: vec!["avoids discarding context-valid information".to_string()],
                });
            }
        }
        strategies.push(ResolutionStrategy {
            kind: ResolutionStrategyKind::DomainSpecific,
            confidence: 0.3,
            rationale: "a domain-specific resolver may have more precise heuristics".to_string(),
            steps: vec!["fall back to manual review if no domain resolver is configured".to_string()],
            risks: vec![],
            benefits: vec![],
        });
        strategies.sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap_or(std::cmp::Ordering::Equal));
        Ok(strategies)
    }
}
