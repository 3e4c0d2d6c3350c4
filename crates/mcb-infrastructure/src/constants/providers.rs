//!
//! **Documentation**: [docs/modules/infrastructure.md](../../../../docs/modules/infrastructure.md)
//!
//! Provider name constants for fallback and resolution.

/// Local fallback embedding provider name.
pub const FALLBACK_EMBEDDING_PROVIDER: &str = "fastembed";

/// Local fallback vector store provider name.
pub const FALLBACK_VECTOR_STORE_PROVIDER: &str = "edgevec";

/// Default database configuration key.
pub const DEFAULT_DB_CONFIG_NAME: &str = "default";
