//! Batched store/update/delete jobs with progress tracking (spec §4.8).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::memory::Chunk;
use crate::value_objects::{BulkOperationId, ChunkId};

/// The kind of batched operation a bulk job performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkOperationKind {
    Store,
    Update,
    Delete,
}

/// Conflict handling policy for bulk store/update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictPolicy {
    Skip,
    Overwrite,
    Merge,
    Fail,
}

/// Options controlling how a bulk job executes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkOptions {
    pub batch_size: usize,
    pub max_concurrency: usize,
    pub validate_first: bool,
    pub continue_on_error: bool,
    pub dry_run: bool,
    pub conflict_policy: ConflictPolicy,
}

impl Default for BulkOptions {
    fn default() -> Self {
        Self {
            batch_size: 50,
            max_concurrency: 4,
            validate_first: false,
            continue_on_error: true,
            dry_run: false,
            conflict_policy: ConflictPolicy::Skip,
        }
    }
}

/// Input payload for a bulk job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum BulkPayload {
    Store(Vec<Chunk>),
    Update(Vec<Chunk>),
    Delete(Vec<ChunkId>),
}

/// Status of a bulk operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BulkStatus {
    Queued,
    Running,
    Completed,
    Failed,
    Cancelled,
}

/// A single per-item failure within a bulk job, keyed by its stable input
/// position (spec §5: "no ordering guarantee across items; per-item errors
/// are reported with stable `item_index` referring to input order").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkItemError {
    pub item_index: usize,
    pub item_id: Option<ChunkId>,
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

/// Progress record for a bulk operation, readable via `get_bulk_progress`
/// while the job runs and after it completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkProgress {
    pub operation_id: BulkOperationId,
    pub kind: BulkOperationKind,
    pub status: BulkStatus,
    pub total: usize,
    pub processed: usize,
    pub successful: usize,
    pub failed: usize,
    pub skipped: usize,
    pub current_batch: usize,
    pub total_batches: usize,
    pub started_at: DateTime<Utc>,
    pub elapsed_secs: f64,
    pub estimated_remaining_secs: Option<f64>,
    pub errors: Vec<BulkItemError>,
    pub validation_errors: Vec<String>,
}

impl BulkProgress {
    /// Fresh progress record for a just-queued job.
    #[must_use]
    pub fn queued(
        operation_id: BulkOperationId,
        kind: BulkOperationKind,
        total: usize,
        total_batches: usize,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            operation_id,
            kind,
            status: BulkStatus::Queued,
            total,
            processed: 0,
            successful: 0,
            failed: 0,
            skipped: 0,
            current_batch: 0,
            total_batches,
            started_at,
            elapsed_secs: 0.0,
            estimated_remaining_secs: None,
            errors: Vec::new(),
            validation_errors: Vec::new(),
        }
    }
}

/// Supported bulk import/export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportExportFormat {
    Json,
    Markdown,
    Csv,
    Archive,
    Auto,
}

/// Compression applied to exported output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compression {
    None,
    Gzip,
    Zip,
}

/// Filter applied to an export job.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportFilter {
    pub repository: Option<String>,
    pub session_ids: Option<Vec<String>>,
    pub types: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub date_range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    pub content_regex: Option<String>,
}
