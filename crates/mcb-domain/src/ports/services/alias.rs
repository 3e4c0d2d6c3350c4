//! Alias registry service port (spec §4.9).

use async_trait::async_trait;

use crate::entities::alias::{Alias, AliasResolutionTrace, AliasTarget, AliasType};
use crate::entities::memory::Chunk;
use crate::error::Result;
use crate::ports::repositories::AliasFilter;
use crate::value_objects::AliasId;

/// Named-handle creation, resolution, and listing (spec §4.9).
#[async_trait]
pub trait AliasServiceInterface: Send + Sync {
    async fn create_alias(
        &self,
        name: String,
        r#type: AliasType,
        target: AliasTarget,
        repository: String,
        tags: Vec<String>,
    ) -> Result<AliasId>;

    /// Resolve an alias by name, re-running saved queries/filters against
    /// the current chunk set and recording the access.
    async fn resolve(&self, repository: &str, name: &str) -> Result<(Vec<Chunk>, AliasResolutionTrace)>;

    async fn update_alias(&self, id: &AliasId, target: AliasTarget) -> Result<()>;

    async fn delete_alias(&self, id: &AliasId) -> Result<()>;

    async fn list_aliases(&self, filter: &AliasFilter) -> Result<Vec<Alias>>;
}
