//! Alias storage port (spec §4.9).

use async_trait::async_trait;

use crate::entities::alias::{Alias, AliasSortOrder, AliasType};
use crate::error::Result;
use crate::value_objects::AliasId;

/// Filter applied to `list_aliases`.
#[derive(Debug, Clone, Default)]
pub struct AliasFilter {
    pub r#type: Option<AliasType>,
    pub repository: Option<String>,
    pub tags: Option<Vec<String>>,
    pub query: Option<String>,
    pub sort: Option<AliasSortOrder>,
}

/// Port for persisted aliases.
#[async_trait]
pub trait AliasRepository: Send + Sync {
    async fn create_alias(&self, alias: &Alias) -> Result<()>;
    async fn get_alias_by_name(&self, repository: &str, name: &str) -> Result<Option<Alias>>;
    async fn update_alias(&self, alias: &Alias) -> Result<()>;
    async fn delete_alias(&self, id: &AliasId) -> Result<()>;
    async fn list_aliases(&self, filter: &AliasFilter) -> Result<Vec<Alias>>;
}
