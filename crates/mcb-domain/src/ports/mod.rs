//! Domain Port Interfaces
//!
//! **Documentation**: [`docs/modules/domain.md#port-interfaces-domain-boundaries`](../../../../docs/modules/domain.md#port-interfaces-domain-boundaries)
//!
//! Defines all boundary contracts between domain and external layers.
//! Ports are organized by their purpose and enable dependency injection
//! with clear separation of concerns.
//!
//! ## Architecture
//!
//! Ports define the contracts that external layers must implement.
//! This follows the Dependency Inversion Principle:
//! - High-level modules (domain) define interfaces
//! - Low-level modules (providers, infrastructure) implement them
//!
//! ## Organization
//!
//! - **infrastructure/** - Infrastructure services (sync, snapshots, auth, events)
//! - **providers/** - External service provider ports (embeddings, vector stores, search)
//! - **repositories/** - Repository ports for data persistence
//! - **services** - Application service ports (ingestion, search, relationships, ...)

/// Infrastructure service ports
mod infrastructure;
/// External service provider ports
mod providers;
/// Repository ports for data persistence
mod repositories;
/// Application service ports
mod services;

// ============================================================================
// Canonical re-exports — the ONE import surface for all port traits/types.
// Consumers MUST use `use mcb_domain::ports::{...};` only.
// ============================================================================

// --- Infrastructure ---
pub use infrastructure::{
    AuditLogger, DependencyHealth, DependencyHealthCheck, DomainEventStream,
    EventBusProvider, ExtendedHealthResponse, LifecycleManaged, LogLevel, OperationLogger,
    PortServiceState, ProviderContext, ProviderHealthStatus, ProviderRouter, SharedSyncCoordinator,
    ShutdownCoordinator, SnapshotProvider, SyncCoordinator, SyncOptions,
    SyncProvider, SyncResult,
};

// --- Providers ---
pub use providers::vector_store::{
    MetadataMap, PortError, PortResult, StoreCollectionId, StoreEmbedding, StoreSearchResult,
};
pub use providers::{
    DirEntry, EmbeddingProvider, FileSystemProvider, HttpClientConfig, HttpClientProvider,
    MetricLabels, MetricsError, MetricsProvider, MetricsResult, TaskRunnerProvider,
    VectorStoreAdmin, VectorStoreProvider,
};

// --- Repositories ---
pub use repositories::{
    AdjacencyFilter, AliasFilter, AliasRepository, BulkProgressStore, ChunkRepository,
    FtsSearchResult, RelationshipRepository, ThreadFilter, ThreadRepository,
};

// --- Services ---
pub use services::{
    AliasServiceInterface, BulkServiceInterface, ConflictServiceInterface,
    CreateSessionSummaryInput, CreateThreadInput, DecayServiceInterface, IngestionServiceInterface,
    LinkChunksInput, MemorySearchOutcome, MemorySearchQuery, MemorySearchServiceInterface,
    RelationshipServiceInterface, SearchTier, StoreChunkInput, StoreChunkOutput,
    TaskServiceInterface, ThreadingServiceInterface, UpdateTaskInput,
};
