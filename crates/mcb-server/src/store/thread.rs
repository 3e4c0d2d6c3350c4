//! In-memory [`ThreadRepository`].

use async_trait::async_trait;
use dashmap::DashMap;
use mcb_domain::ports::{ThreadFilter, ThreadRepository};
use mcb_domain::{Error, Result, Thread, ThreadId};

#[derive(Debug, Default)]
pub struct InMemoryThreadRepository {
    threads: DashMap<ThreadId, Thread>,
}

impl InMemoryThreadRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ThreadRepository for InMemoryThreadRepository {
    async fn create_thread(&self, thread: &Thread) -> Result<()> {
        self.threads.insert(thread.id, thread.clone());
        Ok(())
    }

    async fn get_thread(&self, id: &ThreadId) -> Result<Option<Thread>> {
        Ok(self.threads.get(id).map(|e| e.value().clone()))
    }

    async fn update_thread(&self, thread: &Thread) -> Result<()> {
        if !self.threads.contains_key(&thread.id) {
            return Err(Error::not_found(format!("thread {}", thread.id)));
        }
        self.threads.insert(thread.id, thread.clone());
        Ok(())
    }

    async fn list_threads(&self, filter: &ThreadFilter) -> Result<Vec<Thread>> {
        let mut threads: Vec<Thread> = self
            .threads
            .iter()
            .filter(|e| {
                filter.repository.as_deref().is_none_or(|r| e.value().repository == r)
            })
            .filter(|e| {
                filter
                    .status
                    .as_deref()
                    .is_none_or(|s| format!("{:?}", e.value().status).to_lowercase() == s)
            })
            .filter(|e| {
                filter
                    .tags
                    .as_ref()
                    .is_none_or(|tags| tags.iter().all(|t| e.value().tags.contains(t)))
            })
            .map(|e| e.value().clone())
            .collect();
        threads.sort_by(|a, b| b.last_update.cmp(&a.last_update));
        Ok(threads)
    }
}
