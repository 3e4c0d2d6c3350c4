//! Domain Entities
//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md#core-entities)
//!
//! Core business entities representing the main concepts of the MCB domain.
//! Entities have identity and are usually persisted in repositories.

/// Alias entities
pub mod alias;
pub use alias::{Alias, AliasResolutionTrace, AliasSortOrder, AliasTarget, AliasType};

/// Audit record entity
pub mod audit;
pub use audit::{AuditOutcome, AuditRecord};

/// Bulk operation entities
pub mod bulk;
pub use bulk::{
    BulkItemError, BulkOperationKind, BulkOptions, BulkPayload, BulkProgress, BulkStatus,
    Compression, ConflictPolicy, ExportFilter, ImportExportFormat,
};

/// Core entity representing a semantically meaningful code segment
pub mod code_chunk;
pub use code_chunk::CodeChunk;

/// Entities for codebase state management and change tracking
pub mod codebase;
pub use codebase::{CodebaseSnapshot, FileSnapshot, SnapshotChanges};

/// Conflict detection and resolution entities
pub mod conflict;
pub use conflict::{Conflict, ConflictType, ResolutionStrategy, ResolutionStrategyKind, Severity};

/// Decay and freshness entities
pub mod freshness;
pub use freshness::{DecayClassification, DecayScore, FreshnessStatus};

/// Chunk and related memory entities
pub mod memory;
pub use memory::{
    Chunk, ChunkFilter, ChunkMetadata, ChunkType, Difficulty, MemorySearchIndex,
    MemorySearchResult, Outcome, SessionSummary, TaskFields, TaskPriority, TaskStatus,
};

/// Relationship graph entities
pub mod relationship;
pub use relationship::{
    ConfidenceSource, Direction, GraphPath, NodeStats, RelationType, Relationship,
};

/// Task lifecycle state machine
pub mod task;
pub use task::{expand_status_shortcut, validate_transition};

/// Thread entities
pub mod thread;
pub use thread::{Thread, ThreadRollup, ThreadStatus, ThreadType};

/// Persisted VCS repository and branch entities (multi-tenant CRUD)
pub mod repository;
pub use repository::{Branch, Repository, VcsType};
