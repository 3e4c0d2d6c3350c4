//! Audit record emitted for every mutating operation (SPEC_FULL.md §3).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of an audited operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    Success,
    Failure,
}

/// An immutable audit log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id: uuid::Uuid,
    pub operation: String,
    pub actor: Option<String>,
    pub repository: String,
    pub target_id: Option<String>,
    pub outcome: AuditOutcome,
    pub detail: Option<String>,
    pub occurred_at: DateTime<Utc>,
}
