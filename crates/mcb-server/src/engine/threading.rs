//! Thread lifecycle and auto-grouping suggestion (spec §4.7).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use mcb_domain::entities::relationship::Direction;
use mcb_domain::ports::{
    AdjacencyFilter, ChunkRepository, CreateThreadInput, RelationshipRepository, ThreadFilter,
    ThreadRepository, ThreadingServiceInterface,
};
use mcb_domain::{ChunkId, Error, Result, Thread, ThreadId, ThreadRollup, ThreadStatus};

/// A newly stored chunk is suggested into an existing thread only if its
/// timestamp falls within this window of the thread's last update.
const THREAD_TEMPORAL_PROXIMITY_SECS: i64 = 30 * 60;

pub struct ThreadingEngine {
    chunks: Arc<dyn ChunkRepository>,
    relationships: Arc<dyn RelationshipRepository>,
    threads: Arc<dyn ThreadRepository>,
}

impl ThreadingEngine {
    #[must_use]
    pub fn new(chunks: Arc<dyn ChunkRepository>, relationships: Arc<dyn RelationshipRepository>, threads: Arc<dyn ThreadRepository>) -> Self {
        Self { chunks, relationships, threads }
    }

    async fn rollup(&self, thread: &Thread) -> Result<ThreadRollup> {
        let members = self.chunks.get_chunks_by_ids(&thread.chunk_ids).await?;
        let end = thread.end_time.unwrap_or_else(Utc::now);
        let duration_secs = (end - thread.start_time).num_seconds().max(0);

        let progresses: Vec<u8> = members.iter().filter_map(|c| c.metadata.task.task_progress).collect();
        let progress_percent = if thread.status == ThreadStatus::Complete {
            100
        } else if progresses.is_empty() {
            0
        } else {
            (progresses.iter().map(|p| *p as u32).sum::<u32>() / progresses.len() as u32) as u8
        };

        let health_score = match thread.status {
            ThreadStatus::Complete => 1.0,
            ThreadStatus::Active => 0.8,
            ThreadStatus::Paused => 0.5,
            ThreadStatus::Blocked => 0.3,
            ThreadStatus::Abandoned => 0.1,
        };

        let next_steps = members
            .iter()
            .filter(|c| !matches!(c.metadata.task.task_status, Some(mcb_domain::entities::memory::TaskStatus::Completed)))
            .map(|c| c.summary.clone())
            .take(5)
            .collect();

        Ok(ThreadRollup { duration_secs, progress_percent, health_score, next_steps })
    }
}

#[async_trait]
impl ThreadingServiceInterface for ThreadingEngine {
    async fn create_thread(&self, input: CreateThreadInput) -> Result<ThreadId> {
        let members = self.chunks.get_chunks_by_ids(&input.chunk_ids).await?;
        if members.is_empty() {
            return Err(Error::invalid_argument("at least one chunk id must be retrievable"));
        }
        let now = Utc::now();
        let session_ids = members.iter().map(|c| c.session_id.to_string()).collect::<std::collections::BTreeSet<_>>().into_iter().collect();
        let thread = Thread {
            id: ThreadId::new(),
            title: input.title,
            description: input.description,
            r#type: input.r#type,
            status: ThreadStatus::Active,
            repository: input.repository,
            chunk_ids: members.iter().map(|c| c.id).collect(),
            session_ids,
            start_time: now,
            last_update: now,
            end_time: None,
            tags: input.tags,
            priority: None,
        };
        self.threads.create_thread(&thread).await?;
        Ok(thread.id)
    }

    async fn get_thread(&self, id: &ThreadId, include_summary: bool) -> Result<Option<(Thread, Option<ThreadRollup>)>> {
        let Some(thread) = self.threads.get_thread(id).await? else {
            return Ok(None);
        };
        let rollup = if include_summary { Some(self.rollup(&thread).await?) } else { None };
        Ok(Some((thread, rollup)))
    }

    async fn add_to_thread(&self, id: &ThreadId, chunk_ids: &[ChunkId]) -> Result<()> {
        let Some(mut thread) = self.threads.get_thread(id).await? else {
            return Err(Error::not_found(format!("thread {id}")));
        };
        thread.add_chunks(chunk_ids, Utc::now());
        self.threads.update_thread(&thread).await
    }

    async fn remove_from_thread(&self, id: &ThreadId, chunk_ids: &[ChunkId]) -> Result<()> {
        let Some(mut thread) = self.threads.get_thread(id).await? else {
            return Err(Error::not_found(format!("thread {id}")));
        };
        thread.remove_chunks(chunk_ids, Utc::now());
        self.threads.update_thread(&thread).await
    }

    async fn set_status(&self, id: &ThreadId, status: ThreadStatus) -> Result<()> {
        let Some(mut thread) = self.threads.get_thread(id).await? else {
            return Err(Error::not_found(format!("thread {id}")));
        };
        thread.status = status;
        thread.last_update = Utc::now();
        if matches!(status, ThreadStatus::Complete | ThreadStatus::Abandoned) {
            thread.end_time = Some(thread.last_update);
        }
        self.threads.update_thread(&thread).await
    }

    async fn suggest_thread(&self, chunk_id: &ChunkId) -> Result<Option<ThreadId>> {
        let Some(chunk) = self.chunks.get_chunk(chunk_id).await? else {
            return Err(Error::chunk_not_found(chunk_id.to_string()));
        };
        let filter = ThreadFilter { repository: Some(chunk.repository().to_string()), status: None, tags: None };
        let candidates = self.threads.list_threads(&filter).await?;

        // Temporal/session proximity: most recently updated active thread
        // sharing a session with the new chunk.
        let by_proximity = candidates
            .iter()
            .filter(|t| matches!(t.status, ThreadStatus::Active | ThreadStatus::Paused))
            .filter(|t| (chunk.timestamp - t.last_update).num_seconds().abs() <= THREAD_TEMPORAL_PROXIMITY_SECS)
            .filter(|t| t.session_ids.iter().any(|s| s.as_str() == chunk.session_id.as_str()))
            .max_by_key(|t| t.last_update);
        if let Some(thread) = by_proximity {
            return Ok(Some(thread.id));
        }

        // Relationship-graph adjacency: an active thread whose member chunk
        // is directly connected to the new chunk.
        let adjacent = self.relationships.get_adjacent(chunk_id, Direction::Both, &AdjacencyFilter::default()).await?;
        let neighbor_ids: std::collections::HashSet<ChunkId> =
            adjacent.iter().map(|e| if e.source_id == *chunk_id { e.target_id } else { e.source_id }).collect();
        let by_adjacency = candidates
            .iter()
            .filter(|t| matches!(t.status, ThreadStatus::Active | ThreadStatus::Paused))
            .find(|t| t.chunk_ids.iter().any(|id| neighbor_ids.contains(id)));

        Ok(by_adjacency.map(|t| t.id))
    }
}
