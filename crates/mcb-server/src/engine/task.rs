//! Task lifecycle engine (spec §4.10): tasks are chunks of type `task`,
//! updates are appended as linked `task_update`/`task_progress` chunks.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use mcb_domain::entities::task::{expand_status_shortcut, validate_transition};
use mcb_domain::ports::{ChunkRepository, TaskServiceInterface, UpdateTaskInput};
use mcb_domain::{
    Chunk, ChunkId, ChunkMetadata, ChunkType, Error, RepositoryName, Result, SessionKey, TaskFields,
    TaskPriority, TaskStatus,
};

pub struct TaskEngine {
    chunks: Arc<dyn ChunkRepository>,
}

impl TaskEngine {
    #[must_use]
    pub fn new(chunks: Arc<dyn ChunkRepository>) -> Self {
        Self { chunks }
    }
}

#[async_trait]
impl TaskServiceInterface for TaskEngine {
    async fn create_task(&self, content: String, repository: String, session_id: String, priority: TaskPriority, dependencies: Vec<ChunkId>) -> Result<ChunkId> {
        let repo = RepositoryName::normalize(&repository);
        let now = Utc::now();
        let session_key = SessionKey::compose(&repo, &session_id, now.timestamp());

        let mut metadata = ChunkMetadata::with_defaults(repo.as_str());
        metadata.task = TaskFields { task_status: Some(TaskStatus::Todo), task_priority: Some(priority), task_dependencies: dependencies, ..TaskFields::default() };

        let summary = mcb_utils::text::truncate_graphemes(&content, 120);
        let chunk = Chunk {
            id: ChunkId::new(),
            session_id: session_key,
            timestamp: now,
            r#type: ChunkType::Task,
            content_hash: mcb_utils::hash::content_hash_str(&content),
            content,
            summary,
            embedding: None,
            metadata,
            related_chunks: Vec::new(),
        };
        self.chunks.store_chunk(&chunk).await?;
        Ok(chunk.id)
    }

    async fn update_task(&self, id: &ChunkId, input: UpdateTaskInput) -> Result<Chunk> {
        let Some(mut task) = self.chunks.get_chunk(id).await? else {
            return Err(Error::chunk_not_found(id.to_string()));
        };
        if task.r#type != ChunkType::Task {
            return Err(Error::invalid_argument(format!("chunk {id} is not a task")));
        }

        if let Some(new_status) = input.status {
            let current = task.metadata.task.task_status.unwrap_or(TaskStatus::Todo);
            validate_transition(current, new_status)?;
            task.metadata.task.task_status = Some(new_status);
        }
        if let Some(priority) = input.priority {
            task.metadata.task.task_priority = Some(priority);
        }
        if let Some(assignee) = input.assignee {
            task.metadata.task.task_assignee = Some(assignee);
        }
        if let Some(progress) = input.progress {
            task.metadata.task.task_progress = Some(progress);
        }
        if let Some(delta) = input.time_spent_delta {
            task.metadata.task.time_spent = Some(task.metadata.task.time_spent.unwrap_or(0.0) + delta);
        }
        self.chunks.update_chunk(&task).await?;

        let now = Utc::now();
        let update_type = if input.progress.is_some() && input.status.is_none() { ChunkType::TaskProgress } else { ChunkType::TaskUpdate };
        let note = input.note.unwrap_or_else(|| format!("task {id} updated"));
        let mut update_metadata = ChunkMetadata::with_defaults(task.repository());
        update_metadata.task = TaskFields { task_dependencies: vec![*id], ..TaskFields::default() };
        let update_chunk = Chunk {
            id: ChunkId::new(),
            session_id: task.session_id.clone(),
            timestamp: now,
            r#type: update_type,
            content_hash: mcb_utils::hash::content_hash_str(&note),
            content: note.clone(),
            summary: note,
            embedding: None,
            metadata: update_metadata,
            related_chunks: vec![*id],
        };
        self.chunks.store_chunk(&update_chunk).await?;

        Ok(task)
    }

    async fn list_tasks(&self, repository: &str, status: Option<&str>, assignee: Option<&str>) -> Result<Vec<Chunk>> {
        let candidates = self.chunks.list_by_repository(repository, usize::MAX).await?;
        let statuses = status.and_then(expand_status_shortcut).or_else(|| status.and_then(parse_single_status));

        Ok(candidates
            .into_iter()
            .filter(|c| c.r#type == ChunkType::Task)
            .filter(|c| statuses.as_ref().is_none_or(|allowed| c.metadata.task.task_status.is_some_and(|s| allowed.contains(&s))))
            .filter(|c| assignee.is_none_or(|a| c.metadata.task.task_assignee.as_deref() == Some(a)))
            .collect())
    }
}

fn parse_single_status(s: &str) -> Option<Vec<TaskStatus>> {
    let status = match s {
        "todo" => TaskStatus::Todo,
        "in_progress" => TaskStatus::InProgress,
        "completed" => TaskStatus::Completed,
        "blocked" => TaskStatus::Blocked,
        "cancelled" => TaskStatus::Cancelled,
        "on_hold" => TaskStatus::OnHold,
        _ => return None,
    };
    Some(vec![status])
}
