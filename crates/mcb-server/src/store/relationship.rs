//! In-memory [`RelationshipRepository`].

use async_trait::async_trait;
use dashmap::DashMap;
use mcb_domain::entities::relationship::{Direction, RelationType};
use mcb_domain::ports::{AdjacencyFilter, RelationshipRepository};
use mcb_domain::{ChunkId, Error, Relationship, RelationshipId, Result};

/// Reference relationship store, with a secondary `target_id -> parent edge`
/// index enforcing the "unique `parent_child` per target" invariant (spec
/// §8).
#[derive(Debug, Default)]
pub struct InMemoryRelationshipRepository {
    edges: DashMap<RelationshipId, Relationship>,
    parent_of: DashMap<ChunkId, RelationshipId>,
}

impl InMemoryRelationshipRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RelationshipRepository for InMemoryRelationshipRepository {
    async fn create_relationship(&self, relationship: &Relationship) -> Result<()> {
        if relationship.relation_type == RelationType::ParentChild
            && self.parent_of.contains_key(&relationship.target_id)
        {
            return Err(Error::conflict(format!(
                "chunk {} already has a parent_child edge",
                relationship.target_id
            )));
        }
        if relationship.relation_type == RelationType::ParentChild {
            self.parent_of.insert(relationship.target_id, relationship.id);
        }
        self.edges.insert(relationship.id, relationship.clone());
        Ok(())
    }

    async fn get_relationship(&self, id: &RelationshipId) -> Result<Option<Relationship>> {
        Ok(self.edges.get(id).map(|e| e.value().clone()))
    }

    async fn update_relationship(&self, relationship: &Relationship) -> Result<()> {
        if !self.edges.contains_key(&relationship.id) {
            return Err(Error::not_found(format!("relationship {}", relationship.id)));
        }
        self.edges.insert(relationship.id, relationship.clone());
        Ok(())
    }

    async fn get_adjacent(
        &self,
        chunk_id: &ChunkId,
        direction: Direction,
        filter: &AdjacencyFilter,
    ) -> Result<Vec<Relationship>> {
        let mut hits: Vec<Relationship> = self
            .edges
            .iter()
            .filter(|e| {
                let r = e.value();
                match direction {
                    Direction::Outgoing => r.source_id == *chunk_id,
                    Direction::Incoming => r.target_id == *chunk_id,
                    Direction::Both => r.source_id == *chunk_id || r.target_id == *chunk_id,
                }
            })
            .filter(|e| {
                filter
                    .relation_types
                    .as_ref()
                    .is_none_or(|types| types.contains(&e.value().relation_type))
            })
            .filter(|e| {
                filter.min_confidence.is_none_or(|min| e.value().confidence >= min)
            })
            .map(|e| e.value().clone())
            .collect();
        hits.sort_by(|a, b| b.confidence.partial_cmp(&a.confidence).unwrap_or(std::cmp::Ordering::Equal));
        if let Some(limit) = filter.limit {
            hits.truncate(limit);
        }
        Ok(hits)
    }

    async fn delete_relationship(&self, id: &RelationshipId) -> Result<()> {
        if let Some((_, r)) = self.edges.remove(id) {
            if r.relation_type == RelationType::ParentChild {
                self.parent_of.remove(&r.target_id);
            }
        }
        Ok(())
    }

    async fn delete_relationships_for_chunk(&self, chunk_id: &ChunkId) -> Result<()> {
        let touching: Vec<RelationshipId> = self
            .edges
            .iter()
            .filter(|e| e.value().source_id == *chunk_id || e.value().target_id == *chunk_id)
            .map(|e| *e.key())
            .collect();
        for id in touching {
            self.delete_relationship(&id).await?;
        }
        Ok(())
    }
}
