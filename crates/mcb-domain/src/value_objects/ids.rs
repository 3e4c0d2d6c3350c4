//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md#value-objects)
//!
//! Strong-typed UUID identifiers for all domain entities.

define_id!(ChunkId, "Strong typed identifier for a memory chunk");
define_id!(
    SessionId,
    "Strong typed identifier for an agent or workflow session"
);
define_id!(
    OperationId,
    "Strong typed identifier for a bulk or indexing operation"
);
define_id!(
    RelationshipId,
    "Strong typed identifier for a relationship edge between chunks"
);
define_id!(ThreadId, "Strong typed identifier for a thread");
define_id!(AliasId, "Strong typed identifier for an alias");
define_id!(
    BulkOperationId,
    "Strong typed identifier for a bulk operation job"
);
