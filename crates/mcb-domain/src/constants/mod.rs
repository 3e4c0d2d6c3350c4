//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md)
//!
//! Domain layer constants

/// AST and tree-sitter node type constants.
pub mod ast;
/// Decay, freshness, and retention constants.
pub mod decay;
/// Embedding dimension constants for each provider and model family.
pub mod embedding;
/// HTTP constants
pub mod http;
/// I/O and buffer size constants.
pub mod io;
pub mod keys;
/// Language identifier constants
pub mod lang;
/// Search and BM25 algorithmic constants
pub mod search;
/// Tenancy and composite session-key constants.
pub mod tenancy;
/// Time validation and boundary constants.
pub mod time;
pub mod values;
pub use values::*;
