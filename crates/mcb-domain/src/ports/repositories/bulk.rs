//! Bulk operation progress store port (spec §4.8, §5).

use async_trait::async_trait;

use crate::entities::bulk::BulkProgress;
use crate::error::Result;
use crate::value_objects::BulkOperationId;

/// Port for the shared bulk-operation progress map. Implementations must be
/// safe for concurrent readers and a single writer per `operation_id` (spec
/// §5: "per-key locking where throughput matters").
#[async_trait]
pub trait BulkProgressStore: Send + Sync {
    async fn put(&self, progress: BulkProgress) -> Result<()>;
    async fn get(&self, operation_id: &BulkOperationId) -> Result<Option<BulkProgress>>;
}
