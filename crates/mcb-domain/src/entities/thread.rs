//! Coherent groupings of chunks (spec §3, §4.7).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::memory::TaskPriority;
use crate::value_objects::{ChunkId, ThreadId};

/// Thread type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadType {
    Conversation,
    ProblemSolving,
    Feature,
    Debugging,
    Architecture,
    Workflow,
}

/// Thread lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThreadStatus {
    Active,
    Complete,
    Paused,
    Abandoned,
    Blocked,
}

/// A coherent grouping of chunks representing one unit of work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    pub title: String,
    pub description: String,
    pub r#type: ThreadType,
    pub status: ThreadStatus,
    pub repository: String,
    /// Ordered, duplicate-free. Every id must refer to an existing chunk
    /// sharing `repository`.
    pub chunk_ids: Vec<ChunkId>,
    pub session_ids: Vec<String>,
    pub start_time: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub priority: Option<TaskPriority>,
}

impl Thread {
    /// Append chunk ids, deduplicating against the existing set and against
    /// duplicates within `additions` itself, and bump `last_update`.
    pub fn add_chunks(&mut self, additions: &[ChunkId], now: DateTime<Utc>) {
        for id in additions {
            if !self.chunk_ids.contains(id) {
                self.chunk_ids.push(*id);
            }
        }
        self.last_update = now;
    }

    /// Remove chunk ids and bump `last_update`.
    pub fn remove_chunks(&mut self, removals: &[ChunkId], now: DateTime<Utc>) {
        self.chunk_ids.retain(|id| !removals.contains(id));
        self.last_update = now;
    }
}

/// Computed rollup over a thread's member chunks, requested optionally by
/// `get_threads(include_summary=true)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadRollup {
    pub duration_secs: i64,
    pub progress_percent: u8,
    pub health_score: f32,
    pub next_steps: Vec<String>,
}
