//! Tenancy and session-key constants — Single Source of Truth.
//!
//! These are the sentinel strings and structural limits spec §9 calls out
//! for being "sprinkled through call sites" in the original; they are
//! collected here as named constants instead.

/// Sentinel repository denoting cross-project scope.
pub const GLOBAL_REPOSITORY: &str = "_global";

/// Separator between the repository and session components of a
/// [`crate::value_objects::SessionKey`].
pub const SESSION_COMPONENT_SEPARATOR: &str = "::";

/// Generic session values that get a wallclock-stamp suffix to prevent
/// accidental collisions across unrelated callers.
pub const GENERIC_SESSION_VALUES: &[&str] = &["session", "test", "demo", "default", "example"];

/// Maximum length of a composed session key.
pub const MAX_SESSION_KEY_LENGTH: usize = 200;

/// Default number of recent same-repository candidates considered by the
/// auto-relationship detector during ingestion (spec §4.2 step 10).
pub const AUTO_RELATIONSHIP_CANDIDATE_LIMIT: usize = 20;

/// Default maximum BFS traversal depth for the relationship graph (spec §4.4).
pub const RELATIONSHIP_MAX_DEPTH: u32 = 10;
