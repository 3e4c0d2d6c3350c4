//! Thread grouping service port (spec §4.7).

use async_trait::async_trait;

use crate::entities::thread::{Thread, ThreadRollup, ThreadStatus, ThreadType};
use crate::error::Result;
use crate::value_objects::{ChunkId, ThreadId};

/// Input for `create_thread`.
#[derive(Debug, Clone)]
pub struct CreateThreadInput {
    pub title: String,
    pub description: String,
    pub r#type: ThreadType,
    pub repository: String,
    pub chunk_ids: Vec<ChunkId>,
    pub tags: Vec<String>,
}

/// Thread lifecycle and auto-grouping (spec §4.7).
#[async_trait]
pub trait ThreadingServiceInterface: Send + Sync {
    async fn create_thread(&self, input: CreateThreadInput) -> Result<ThreadId>;

    async fn get_thread(&self, id: &ThreadId, include_summary: bool) -> Result<Option<(Thread, Option<ThreadRollup>)>>;

    async fn add_to_thread(&self, id: &ThreadId, chunk_ids: &[ChunkId]) -> Result<()>;

    async fn remove_from_thread(&self, id: &ThreadId, chunk_ids: &[ChunkId]) -> Result<()>;

    async fn set_status(&self, id: &ThreadId, status: ThreadStatus) -> Result<()>;

    /// Suggest an existing thread (or none) that a newly stored chunk
    /// belongs to, based on session/repository/temporal proximity and
    /// relationship-graph adjacency to the thread's existing members.
    async fn suggest_thread(&self, chunk_id: &ChunkId) -> Result<Option<ThreadId>>;
}
