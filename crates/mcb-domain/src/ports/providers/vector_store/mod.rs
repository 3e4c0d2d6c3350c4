//!
//! **Documentation**: [docs/modules/domain.md](../../../../../../docs/modules/domain.md#provider-ports)
//!
//! Vector storage port: one collection per repository.

mod admin;
mod provider;

use std::collections::HashMap;

pub use admin::VectorStoreAdmin;
pub use provider::VectorStoreProvider;

/// Result alias for vector store operations — a thin port boundary that
/// does not depend on `mcb_domain::error::Error` directly, so providers can
/// be implemented without pulling in the full domain error taxonomy.
pub type PortResult<T> = std::result::Result<T, PortError>;

/// Error surfaced by a vector store provider.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("collection not found: {0}")]
    CollectionNotFound(String),
    #[error("vector store error: {0}")]
    Other(String),
}

/// Opaque collection identifier — one collection per repository.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StoreCollectionId(String);

impl StoreCollectionId {
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self(name.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StoreCollectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Arbitrary metadata attached to a stored vector.
pub type MetadataMap = HashMap<String, serde_json::Value>;

/// A vector plus its id, ready for insertion.
#[derive(Debug, Clone)]
pub struct StoreEmbedding {
    pub id: String,
    pub vector: Vec<f32>,
}

/// A vector store hit.
#[derive(Debug, Clone)]
pub struct StoreSearchResult {
    pub id: String,
    pub score: f32,
    pub metadata: MetadataMap,
}
