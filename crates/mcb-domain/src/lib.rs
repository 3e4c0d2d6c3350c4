//! # Domain Layer
//!
//! Core business logic and domain types for the semantic memory engine.
//! Contains only pure domain entities, value objects, and business rules.
#![allow(missing_docs)]
//!
//! ## Architecture
//!
//! | Component | Description |
//! |-----------|-------------|
//! | [`entities`] | Core business entities with identity |
//! | [`value_objects`] | Immutable value objects |
//! | [`ports`] | External provider port interfaces |
//! | [`constants`] | Domain constants |
//! | [`error`] | Domain error types |
//!
//! ## Clean Architecture Principles
//!
//! - **Entities** are at the center with business rules
//! - **Value Objects** are immutable and compared by value
//! - **No external dependencies** - only standard library and core traits
//! - **Pure business logic** - no infrastructure or application concerns
//!
//! ## Example
//!
//! ```
//! use mcb_domain::entities::{Chunk, ChunkMetadata, ChunkType};
//! use mcb_domain::value_objects::{ChunkId, Embedding, RepositoryName, SessionKey};
//! use chrono::Utc;
//!
//! let repo = RepositoryName::normalize("github.com/acme/api");
//! let session = SessionKey::compose(&repo, "sess1", Utc::now().timestamp());
//!
//! let chunk = Chunk {
//!     id: ChunkId::new(),
//!     session_id: session,
//!     timestamp: Utc::now(),
//!     r#type: ChunkType::Problem,
//!     content: "JWT validation fails on expired tokens".to_string(),
//!     summary: "JWT expiration bug".to_string(),
//!     embedding: Some(Embedding::new(vec![0.1, 0.2], "test-model")),
//!     metadata: ChunkMetadata::with_defaults(repo.as_str()),
//!     related_chunks: Vec::new(),
//!     content_hash: mcb_domain::compute_content_hash("JWT validation fails on expired tokens"),
//! };
//! ```

/// Common macros
#[macro_use]
pub mod macros;

/// Domain-level constants
pub mod constants;
/// Core business entities with identity
pub mod entities;
/// Domain error types
pub mod error;
/// Domain event interfaces
pub mod events;
/// External provider port interfaces
pub mod ports;
/// Provider auto-registration registry
pub mod registry;
/// Repository interfaces
pub mod repositories;
/// Generic schema definitions for persistence (backend-agnostic model)
pub mod schema;
/// Common utilities
pub mod utils;
/// Immutable value objects
pub mod value_objects;

// Re-export commonly used types for convenience
pub use constants::*;
pub use entities::*;
pub use error::{Error, Result};
pub use events::{DomainEvent, EventPublisher, ServiceState};
pub use schema::{
    ForeignKeyDef, MemorySchema, MemorySchemaDdlGenerator, ProjectSchema, SchemaDdlGenerator,
    UniqueConstraintDef,
};
pub use utils::{compute_content_hash, project_type, vcs_context};
pub use value_objects::*;
