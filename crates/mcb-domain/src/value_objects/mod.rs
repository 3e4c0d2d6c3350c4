//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md#value-objects)
//!
//! Immutable value objects used across the memory engine.

/// Strong-typed UUID identifiers for all domain entities.
pub mod ids;
/// Fixed-dimension embedding vector.
pub mod embedding;
/// Repository (tenancy key) normalization.
pub mod repository_name;
/// Composite `repository "::" session` key.
pub mod session_key;

pub use embedding::Embedding;
pub use ids::{
    AliasId, BulkOperationId, ChunkId, OperationId, RelationshipId, SessionId, ThreadId,
};
pub use repository_name::RepositoryName;
pub use session_key::SessionKey;
