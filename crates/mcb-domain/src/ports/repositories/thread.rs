//! Thread storage port (spec §4.7).

use async_trait::async_trait;

use crate::entities::thread::Thread;
use crate::error::Result;
use crate::value_objects::ThreadId;

/// Filter applied to `get_threads`.
#[derive(Debug, Clone, Default)]
pub struct ThreadFilter {
    pub repository: Option<String>,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Port for persisted threads.
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    async fn create_thread(&self, thread: &Thread) -> Result<()>;
    async fn get_thread(&self, id: &ThreadId) -> Result<Option<Thread>>;
    async fn update_thread(&self, thread: &Thread) -> Result<()>;
    async fn list_threads(&self, filter: &ThreadFilter) -> Result<Vec<Thread>>;
}
