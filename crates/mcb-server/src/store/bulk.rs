//! In-memory [`BulkProgressStore`].

use async_trait::async_trait;
use dashmap::DashMap;
use mcb_domain::ports::BulkProgressStore;
use mcb_domain::{BulkOperationId, BulkProgress, Result};

#[derive(Debug, Default)]
pub struct InMemoryBulkProgressStore {
    progress: DashMap<BulkOperationId, BulkProgress>,
}

impl InMemoryBulkProgressStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BulkProgressStore for InMemoryBulkProgressStore {
    async fn put(&self, progress: BulkProgress) -> Result<()> {
        self.progress.insert(progress.operation_id, progress);
        Ok(())
    }

    async fn get(&self, operation_id: &BulkOperationId) -> Result<Option<BulkProgress>> {
        Ok(self.progress.get(operation_id).map(|e| e.value().clone()))
    }
}
