//! Task lifecycle service port (spec §4.10).

use async_trait::async_trait;

use crate::entities::memory::{Chunk, TaskPriority, TaskStatus};
use crate::error::Result;
use crate::value_objects::ChunkId;

/// Input for `update_task`.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskInput {
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee: Option<String>,
    pub progress: Option<u8>,
    pub time_spent_delta: Option<f64>,
    pub note: Option<String>,
}

/// Task creation, transition enforcement, and listing (spec §4.10).
///
/// Implementations must call
/// [`crate::entities::task::validate_transition`] before applying any
/// status change.
#[async_trait]
pub trait TaskServiceInterface: Send + Sync {
    async fn create_task(
        &self,
        content: String,
        repository: String,
        session_id: String,
        priority: TaskPriority,
        dependencies: Vec<ChunkId>,
    ) -> Result<ChunkId>;

    /// Apply an update, emitting a `task_update` or `task_progress` chunk
    /// that references the task via `task_dependencies`-style linkage.
    async fn update_task(&self, id: &ChunkId, input: UpdateTaskInput) -> Result<Chunk>;

    /// List tasks by status, expanding the `"active"` shortcut into
    /// `{todo, in_progress, blocked}` via
    /// [`crate::entities::task::expand_status_shortcut`].
    async fn list_tasks(
        &self,
        repository: &str,
        status: Option<&str>,
        assignee: Option<&str>,
    ) -> Result<Vec<Chunk>>;
}
