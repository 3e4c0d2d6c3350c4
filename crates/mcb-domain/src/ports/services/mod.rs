//!
//! **Documentation**: [docs/modules/domain.md](../../../../../docs/modules/domain.md#service-ports)
//!
//! Domain service port interfaces for core business operations.

pub mod alias;
pub mod bulk;
pub mod conflict;
pub mod decay;
pub mod memory;
pub mod relationship;
pub mod task;
pub mod threading;

pub use alias::AliasServiceInterface;
pub use bulk::BulkServiceInterface;
pub use conflict::ConflictServiceInterface;
pub use decay::DecayServiceInterface;
pub use memory::{
    CreateSessionSummaryInput, IngestionServiceInterface, MemorySearchOutcome,
    MemorySearchQuery, MemorySearchServiceInterface, SearchTier, StoreChunkInput,
    StoreChunkOutput,
};
pub use relationship::{LinkChunksInput, RelationshipServiceInterface};
pub use task::{TaskServiceInterface, UpdateTaskInput};
pub use threading::{CreateThreadInput, ThreadingServiceInterface};
