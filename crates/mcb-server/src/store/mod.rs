//! Reference in-memory repository adapters implementing `mcb-domain`'s
//! repository ports (spec §5: "re-architect as ... per-key locks or
//! lock-free maps" — each store is a sharded [`dashmap::DashMap`]).
//!
//! These are a complete, self-contained reference implementation suitable
//! for a single-process MCP server; a production deployment would swap them
//! for adapters over a real vector store and relationship database without
//! changing anything in `engine/`.

pub mod alias;
pub mod bulk;
pub mod chunk;
pub mod relationship;
pub mod thread;

pub use alias::InMemoryAliasRepository;
pub use bulk::InMemoryBulkProgressStore;
pub use chunk::InMemoryChunkRepository;
pub use relationship::InMemoryRelationshipRepository;
pub use thread::InMemoryThreadRepository;
