//! Typed directed edges between chunks (spec §3, §4.4).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ChunkId, RelationshipId};

/// Relationship type between two chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationType {
    LedTo,
    SolvedBy,
    DependsOn,
    Enables,
    ConflictsWith,
    Supersedes,
    RelatedTo,
    FollowsUp,
    Precedes,
    LearnedFrom,
    Teaches,
    Exemplifies,
    ReferencedBy,
    References,
    ParentChild,
}

impl RelationType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LedTo => "led_to",
            Self::SolvedBy => "solved_by",
            Self::DependsOn => "depends_on",
            Self::Enables => "enables",
            Self::ConflictsWith => "conflicts_with",
            Self::Supersedes => "supersedes",
            Self::RelatedTo => "related_to",
            Self::FollowsUp => "follows_up",
            Self::Precedes => "precedes",
            Self::LearnedFrom => "learned_from",
            Self::Teaches => "teaches",
            Self::Exemplifies => "exemplifies",
            Self::ReferencedBy => "referenced_by",
            Self::References => "references",
            Self::ParentChild => "parent_child",
        }
    }
}

/// Provenance of a relationship's confidence value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceSource {
    Explicit,
    Derived,
    Inferred,
    UserCertified,
}

/// A typed directed edge between two chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Relationship {
    pub id: RelationshipId,
    pub source_id: ChunkId,
    pub target_id: ChunkId,
    pub relation_type: RelationType,
    /// In `[0, 1]`.
    pub confidence: f32,
    pub confidence_source: ConfidenceSource,
    pub created_at: DateTime<Utc>,
    pub validation_count: u32,
    pub last_validated: Option<DateTime<Utc>>,
    pub validation_note: Option<String>,
}

impl Relationship {
    /// Record a validation event: bumps `validation_count`, sets
    /// `last_validated`, and optionally overrides `confidence` with a
    /// caller-supplied `user_certainty`.
    pub fn record_validation(
        &mut self,
        user_certainty: Option<f32>,
        note: Option<String>,
        now: DateTime<Utc>,
    ) {
        if let Some(certainty) = user_certainty {
            self.confidence = certainty.clamp(0.0, 1.0);
            self.confidence_source = ConfidenceSource::UserCertified;
        }
        self.validation_count += 1;
        self.last_validated = Some(now);
        if note.is_some() {
            self.validation_note = note;
        }
    }
}

/// Traversal direction for adjacency queries (spec §4.4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Incoming,
    Outgoing,
    Both,
}

/// A single hop result from graph traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphPath {
    pub chunk_id: ChunkId,
    pub score: f32,
    pub depth: u32,
    pub path_type: Vec<RelationType>,
}

/// Per-node graph statistics computed during traversal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeStats {
    pub degree: u32,
    pub centrality: f32,
}
