//! Bulk operations coordinator service port (spec §4.8).

use async_trait::async_trait;

use crate::entities::bulk::{
    BulkOptions, BulkPayload, BulkProgress, Compression, ExportFilter, ImportExportFormat,
};
use crate::error::Result;
use crate::value_objects::BulkOperationId;

/// Batched store/update/delete, progress tracking, and import/export (spec
/// §4.8).
#[async_trait]
pub trait BulkServiceInterface: Send + Sync {
    /// Submit a bulk job. Returns immediately with an id; the job runs
    /// asynchronously (or synchronously under `dry_run`, which never
    /// persists anything and returns the validation outcome inline).
    async fn submit(&self, payload: BulkPayload, options: BulkOptions) -> Result<BulkOperationId>;

    /// Poll progress for a running or completed job.
    async fn progress(&self, id: &BulkOperationId) -> Result<Option<BulkProgress>>;

    /// Request cancellation of an in-flight job. Already-processed items are
    /// not rolled back.
    async fn cancel(&self, id: &BulkOperationId) -> Result<()>;

    /// Export a repository's chunks in the given format/compression.
    async fn export(
        &self,
        filter: ExportFilter,
        format: ImportExportFormat,
        compression: Compression,
    ) -> Result<Vec<u8>>;

    /// Import chunks from a previously exported payload, auto-detecting
    /// format when `format` is `Auto`.
    async fn import(
        &self,
        data: &[u8],
        format: ImportExportFormat,
        options: BulkOptions,
    ) -> Result<BulkOperationId>;
}
