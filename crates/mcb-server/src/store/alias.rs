//! In-memory [`AliasRepository`].

use async_trait::async_trait;
use dashmap::DashMap;
use mcb_domain::entities::alias::AliasSortOrder;
use mcb_domain::ports::{AliasFilter, AliasRepository};
use mcb_domain::{Alias, AliasId, Error, Result};

#[derive(Debug, Default)]
pub struct InMemoryAliasRepository {
    aliases: DashMap<AliasId, Alias>,
}

impl InMemoryAliasRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AliasRepository for InMemoryAliasRepository {
    async fn create_alias(&self, alias: &Alias) -> Result<()> {
        self.aliases.insert(alias.id, alias.clone());
        Ok(())
    }

    async fn get_alias_by_name(&self, repository: &str, name: &str) -> Result<Option<Alias>> {
        Ok(self
            .aliases
            .iter()
            .find(|e| e.value().repository == repository && e.value().name == name)
            .map(|e| e.value().clone()))
    }

    async fn update_alias(&self, alias: &Alias) -> Result<()> {
        if !self.aliases.contains_key(&alias.id) {
            return Err(Error::not_found(format!("alias {}", alias.id)));
        }
        self.aliases.insert(alias.id, alias.clone());
        Ok(())
    }

    async fn delete_alias(&self, id: &AliasId) -> Result<()> {
        self.aliases.remove(id);
        Ok(())
    }

    async fn list_aliases(&self, filter: &AliasFilter) -> Result<Vec<Alias>> {
        let mut aliases: Vec<Alias> = self
            .aliases
            .iter()
            .filter(|e| filter.r#type.is_none_or(|t| e.value().r#type == t))
            .filter(|e| {
                filter.repository.as_deref().is_none_or(|r| e.value().repository == r)
            })
            .filter(|e| {
                filter
                    .tags
                    .as_ref()
                    .is_none_or(|tags| tags.iter().all(|t| e.value().tags.contains(t)))
            })
            .filter(|e| {
                filter
                    .query
                    .as_deref()
                    .is_none_or(|q| e.value().name.to_lowercase().contains(&q.to_lowercase()))
            })
            .map(|e| e.value().clone())
            .collect();
        match filter.sort.unwrap_or(AliasSortOrder::Created) {
            AliasSortOrder::Usage => aliases.sort_by(|a, b| b.access_count.cmp(&a.access_count)),
            AliasSortOrder::Created => aliases.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            AliasSortOrder::Updated => aliases.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        }
        Ok(aliases)
    }
}
