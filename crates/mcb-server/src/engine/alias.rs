//! Named-handle registry (spec §4.9): create/resolve/update/delete aliases
//! and list them by filter.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use mcb_domain::entities::alias::{Alias, AliasResolutionTrace, AliasTarget, AliasType};
use mcb_domain::entities::memory::ChunkFilter;
use mcb_domain::ports::{AliasFilter, AliasRepository, AliasServiceInterface, ChunkRepository};
use mcb_domain::{AliasId, Chunk, Error, Result};

pub struct AliasEngine {
    chunks: Arc<dyn ChunkRepository>,
    aliases: Arc<dyn AliasRepository>,
}

impl AliasEngine {
    #[must_use]
    pub fn new(chunks: Arc<dyn ChunkRepository>, aliases: Arc<dyn AliasRepository>) -> Self {
        Self { chunks, aliases }
    }

    async fn resolve_target(&self, repository: &str, target: &AliasTarget) -> Result<(Vec<Chunk>, String)> {
        match target {
            AliasTarget::ChunkIds { ids } => Ok((self.chunks.get_chunks_by_ids(ids).await?, "chunk_ids".to_string())),
            AliasTarget::Collection { ids, .. } => Ok((self.chunks.get_chunks_by_ids(ids).await?, "collection".to_string())),
            AliasTarget::SavedQuery { query, repository: scoped } => {
                let filter = ChunkFilter { repository: Some(scoped.clone().unwrap_or_else(|| repository.to_string())), ..ChunkFilter::default() };
                let hits = self.chunks.search(query, Some(&filter), usize::MAX).await?;
                let ids: Vec<_> = hits.iter().map(|h| h.id).collect();
                Ok((self.chunks.get_chunks_by_ids(&ids).await?, "saved_query".to_string()))
            }
            AliasTarget::SavedFilter { filter } => {
                let scope = filter.repository.clone().unwrap_or_else(|| repository.to_string());
                let candidates = self.chunks.list_by_repository(&scope, usize::MAX).await?;
                let matched = candidates.into_iter().filter(|c| matches_filter(c, filter)).collect();
                Ok((matched, "saved_filter".to_string()))
            }
        }
    }
}

fn matches_filter(chunk: &Chunk, filter: &ChunkFilter) -> bool {
    if let Some(types) = &filter.types {
        if !types.contains(&chunk.r#type) {
            return false;
        }
    }
    if let Some(tags) = &filter.tags {
        if !tags.iter().any(|t| chunk.metadata.tags.contains(t)) {
            return false;
        }
    }
    if let Some(session_id) = &filter.session_id {
        if chunk.session_id.as_str() != session_id {
            return false;
        }
    }
    if let Some(branch) = &filter.branch {
        if chunk.metadata.branch.as_deref() != Some(branch.as_str()) {
            return false;
        }
    }
    if let Some((start, end)) = filter.time_range {
        if chunk.timestamp < start || chunk.timestamp > end {
            return false;
        }
    }
    true
}

#[async_trait]
impl AliasServiceInterface for AliasEngine {
    async fn create_alias(&self, name: String, r#type: AliasType, target: AliasTarget, repository: String, tags: Vec<String>) -> Result<AliasId> {
        if self.aliases.get_alias_by_name(&repository, &name).await?.is_some() {
            return Err(Error::conflict(format!("alias '{name}' already exists in repository '{repository}'")));
        }
        let now = Utc::now();
        let alias = Alias {
            id: AliasId::new(),
            name,
            r#type,
            target,
            repository,
            tags,
            created_at: now,
            updated_at: now,
            access_count: 0,
            last_accessed: None,
        };
        self.aliases.create_alias(&alias).await?;
        Ok(alias.id)
    }

    async fn resolve(&self, repository: &str, name: &str) -> Result<(Vec<Chunk>, AliasResolutionTrace)> {
        let Some(mut alias) = self.aliases.get_alias_by_name(repository, name).await? else {
            return Err(Error::not_found(format!("alias '{name}' in repository '{repository}'")));
        };
        let (chunks, resolved_via) = self.resolve_target(repository, &alias.target).await?;
        alias.record_access(Utc::now());
        self.aliases.update_alias(&alias).await?;
        let trace = AliasResolutionTrace { alias_name: alias.name.clone(), resolved_via, match_count: chunks.len() };
        Ok((chunks, trace))
    }

    async fn update_alias(&self, id: &AliasId, target: AliasTarget) -> Result<()> {
        let Some(mut alias) = self.aliases.list_aliases(&AliasFilter::default()).await?.into_iter().find(|a| a.id == *id) else {
            return Err(Error::not_found(format!("alias {id}")));
        };
        alias.target = target;
        alias.updated_at = Utc::now();
        self.aliases.update_alias(&alias).await
    }

    async fn delete_alias(&self, id: &AliasId) -> Result<()> {
        self.aliases.delete_alias(id).await
    }

    async fn list_aliases(&self, filter: &AliasFilter) -> Result<Vec<Alias>> {
        self.aliases.list_aliases(filter).await
    }
}
