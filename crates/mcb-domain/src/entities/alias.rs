//! Named handles resolving to chunks (spec §3, §4.9).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::memory::ChunkFilter;
use crate::value_objects::{AliasId, ChunkId};

/// Alias type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasType {
    Tag,
    Shortcut,
    Query,
    Collection,
}

/// The resource an alias resolves to — a tagged union.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AliasTarget {
    /// Direct chunk ids.
    ChunkIds { ids: Vec<ChunkId> },
    /// A saved free-text query, re-run on resolve.
    SavedQuery { query: String, repository: Option<String> },
    /// A saved structured filter, re-applied on resolve.
    SavedFilter { filter: ChunkFilter },
    /// A named collection of chunk ids with a human label.
    Collection { name: String, ids: Vec<ChunkId> },
}

/// A named handle (e.g. `@bug-fixes`, `#auth-module`) resolving to chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alias {
    pub id: AliasId,
    pub name: String,
    pub r#type: AliasType,
    pub target: AliasTarget,
    pub repository: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub access_count: u64,
    pub last_accessed: Option<DateTime<Utc>>,
}

impl Alias {
    /// Record a resolve event.
    pub fn record_access(&mut self, now: DateTime<Utc>) {
        self.access_count += 1;
        self.last_accessed = Some(now);
    }
}

/// Sort order for alias listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasSortOrder {
    Usage,
    Created,
    Updated,
}

/// Trace of how an alias resolved — returned alongside the matching chunks
/// so a caller can see which path was taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AliasResolutionTrace {
    pub alias_name: String,
    pub resolved_via: String,
    pub match_count: usize,
}
