//! The memory chunk entity and its supporting metadata (spec §3).

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{ChunkId, Embedding, SessionKey};

/// Chunk type (spec §3). Unknown values are rejected at the boundary —
/// `FromStr` returns an error rather than a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkType {
    Problem,
    Solution,
    ArchitectureDecision,
    CodeChange,
    Discussion,
    SessionSummary,
    Analysis,
    Verification,
    Question,
    Task,
    TaskUpdate,
    TaskProgress,
}

impl ChunkType {
    /// Canonical snake_case string form, used as the importance-multiplier
    /// lookup key in [`crate::constants::decay::IMPORTANCE_MULTIPLIERS`].
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Problem => "problem",
            Self::Solution => "solution",
            Self::ArchitectureDecision => "architecture_decision",
            Self::CodeChange => "code_change",
            Self::Discussion => "discussion",
            Self::SessionSummary => "session_summary",
            Self::Analysis => "analysis",
            Self::Verification => "verification",
            Self::Question => "question",
            Self::Task => "task",
            Self::TaskUpdate => "task_update",
            Self::TaskProgress => "task_progress",
        }
    }

    /// Whether this chunk type belongs to the task subsystem (spec §4.10).
    #[must_use]
    pub fn is_task_family(&self) -> bool {
        matches!(self, Self::Task | Self::TaskUpdate | Self::TaskProgress)
    }
}

impl std::str::FromStr for ChunkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "problem" => Ok(Self::Problem),
            "solution" => Ok(Self::Solution),
            "architecture_decision" => Ok(Self::ArchitectureDecision),
            "code_change" => Ok(Self::CodeChange),
            "discussion" => Ok(Self::Discussion),
            "session_summary" => Ok(Self::SessionSummary),
            "analysis" => Ok(Self::Analysis),
            "verification" => Ok(Self::Verification),
            "question" => Ok(Self::Question),
            "task" => Ok(Self::Task),
            "task_update" => Ok(Self::TaskUpdate),
            "task_progress" => Ok(Self::TaskProgress),
            other => Err(format!("Unknown chunk type: {other}")),
        }
    }
}

/// Outcome of the work a chunk records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Failed,
    InProgress,
    Abandoned,
}

impl Outcome {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failed => "failed",
            Self::InProgress => "in_progress",
            Self::Abandoned => "abandoned",
        }
    }
}

/// Subjective difficulty of the work a chunk records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Simple,
    Moderate,
    Complex,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Moderate => "moderate",
            Self::Complex => "complex",
        }
    }
}

/// Task status (spec §4.10 state machine). See
/// [`crate::entities::task::TaskTransition`] for the enforced transition
/// table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Completed,
    Blocked,
    Cancelled,
    OnHold,
}

impl TaskStatus {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
            Self::Cancelled => "cancelled",
            Self::OnHold => "on_hold",
        }
    }

    /// Whether `self` is terminal (no outgoing transitions).
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

/// Task-specific fields, present only on `task`/`task_update`/`task_progress`
/// chunks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskFields {
    pub task_status: Option<TaskStatus>,
    pub task_priority: Option<TaskPriority>,
    pub task_assignee: Option<String>,
    pub task_due_date: Option<DateTime<Utc>>,
    pub task_estimate: Option<f64>,
    pub task_progress: Option<u8>,
    pub task_dependencies: Vec<ChunkId>,
    pub task_blocks: Vec<ChunkId>,
    pub time_spent: Option<f64>,
}

/// Structured metadata envelope attached to every chunk (spec §3).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkMetadata {
    pub repository: String,
    pub branch: Option<String>,
    pub files_modified: Vec<String>,
    pub tools_used: Vec<String>,
    pub tags: Vec<String>,
    pub outcome: Outcome,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub task: TaskFields,
    /// Open-ended mapping keyed by well-known constants (parent chunk id,
    /// location context, language versions, dependencies, etc).
    #[serde(default)]
    pub extended_metadata: HashMap<String, serde_json::Value>,
}

impl ChunkMetadata {
    /// Build a metadata envelope with ingestion-time defaults: `outcome =
    /// in_progress`, `difficulty = simple` (spec §4.2 step 3).
    #[must_use]
    pub fn with_defaults(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            branch: None,
            files_modified: Vec::new(),
            tools_used: Vec::new(),
            tags: Vec::new(),
            outcome: Outcome::InProgress,
            difficulty: Difficulty::Simple,
            task: TaskFields::default(),
            extended_metadata: HashMap::new(),
        }
    }
}

/// The primary record: a typed unit of remembered text with metadata and an
/// embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    pub id: ChunkId,
    /// Composite `repository "::" session` key, never the raw session alone.
    pub session_id: SessionKey,
    pub timestamp: DateTime<Utc>,
    pub r#type: ChunkType,
    pub content: String,
    pub summary: String,
    pub embedding: Option<Embedding>,
    pub metadata: ChunkMetadata,
    /// Derived back-reference list; not authoritative — the relationship
    /// graph repository is the source of truth.
    #[serde(default)]
    pub related_chunks: Vec<ChunkId>,
    pub content_hash: String,
}

impl Chunk {
    /// Repository this chunk belongs to (read from metadata, which is
    /// authoritative — `session_id`'s repository component must agree with
    /// it by construction).
    #[must_use]
    pub fn repository(&self) -> &str {
        &self.metadata.repository
    }
}

/// Memory search hit: chunk plus a relevance score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorySearchResult {
    pub chunk: Chunk,
    pub score: f32,
}

/// Token-efficient memory search index result (step 1 of the 3-layer
/// search → timeline → details workflow).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemorySearchIndex {
    pub id: ChunkId,
    pub r#type: ChunkType,
    pub relevance_score: f32,
    pub tags: Vec<String>,
    pub content_preview: String,
    pub session_id: String,
    pub repository: String,
    pub timestamp: DateTime<Utc>,
}

/// Filter specification for chunk queries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChunkFilter {
    pub tags: Option<Vec<String>>,
    pub types: Option<Vec<ChunkType>>,
    pub session_id: Option<String>,
    pub repository: Option<String>,
    pub time_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    pub branch: Option<String>,
    pub min_relevance: Option<f32>,
}

/// Summary of a conversation session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSummary {
    pub session_id: SessionKey,
    pub topics: Vec<String>,
    pub decisions: Vec<String>,
    pub next_steps: Vec<String>,
    pub key_files: Vec<String>,
    pub created_at: DateTime<Utc>,
}
