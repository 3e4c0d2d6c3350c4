//! MCP tool parameter types (spec §6): input schemas for the `memory_<verb>`
//! tool surface, generated via `schemars` for the MCP protocol.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for `memory_store_chunk`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StoreChunkParams {
    /// Free-form conversation fragment to remember.
    pub content: String,
    /// Caller-scoped session identifier.
    pub session_id: String,
    /// Repository scope, e.g. `github.com/acme/api`. Defaults to `_global`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    #[serde(default)]
    pub files_modified: Vec<String>,
    #[serde(default)]
    pub tools_used: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Caller-asserted chunk type (`problem`, `solution`, `architecture_decision`,
    /// `code_change`, `discussion`, `session_summary`, `analysis`,
    /// `verification`, `question`). Omit to classify from content heuristics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    /// Id of a parent chunk to link this one under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_chunk: Option<String>,
}

/// Parameters for `memory_search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchParams {
    pub query: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Restrict to these chunk types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub min_relevance: f32,
    /// Use the non-fallback tenant-scoped variant instead of progressive
    /// relaxation.
    #[serde(default)]
    pub secure: bool,
    /// Return index-only records (id, type, score, preview) instead of full
    /// chunks — the token-efficient three-layer workflow's first step.
    #[serde(default)]
    pub index_only: bool,
}

fn default_limit() -> usize {
    10
}

/// Parameters for `memory_get_context`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetContextParams {
    pub chunk_id: String,
    #[serde(default = "default_context_window")]
    pub before: usize,
    #[serde(default = "default_context_window")]
    pub after: usize,
}

fn default_context_window() -> usize {
    5
}

/// Parameters for `memory_link`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct LinkParams {
    pub source_id: String,
    pub target_id: String,
    /// One of [`mcb_domain::RelationType`]'s snake_case variants, e.g.
    /// `solved_by`, `led_to`, `depends_on`.
    pub relation_type: String,
    #[serde(default = "default_confidence")]
    pub confidence: f32,
}

fn default_confidence() -> f32 {
    1.0
}

/// Parameters for `memory_get_relationships`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetRelationshipsParams {
    pub chunk_id: String,
    /// `outgoing`, `incoming`, or `both`.
    #[serde(default = "default_direction")]
    pub direction: String,
    #[serde(default = "default_depth")]
    pub max_depth: u32,
}

fn default_direction() -> String {
    "both".to_string()
}

fn default_depth() -> u32 {
    2
}

/// Parameters for `memory_auto_detect_relationships`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AutoDetectRelationshipsParams {
    pub chunk_id: String,
}

/// Parameters for `memory_create_thread`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateThreadParams {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// One of [`mcb_domain::ThreadType`]'s snake_case variants.
    pub r#type: String,
    pub repository: String,
    pub chunk_ids: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Parameters for `memory_get_thread`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GetThreadParams {
    pub thread_id: String,
    #[serde(default)]
    pub include_summary: bool,
}

/// Parameters for `memory_suggest_thread`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SuggestThreadParams {
    pub chunk_id: String,
}

/// Parameters for `memory_conflicts`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ConflictsParams {
    pub chunk_id: String,
}

/// Parameters for `memory_resolve_conflicts`. Conflicts must first be
/// obtained via `memory_conflicts`; this re-detects and proposes strategies
/// for the matching pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ResolveConflictsParams {
    pub chunk_a: String,
    pub chunk_b: String,
}

/// Parameters for `memory_check_freshness`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheckFreshnessParams {
    pub chunk_id: String,
}

/// Parameters for `memory_decay_management` (repository-wide sweep).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DecaySweepParams {
    pub repository: String,
}

/// Parameters for `memory_create_alias`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateAliasParams {
    pub name: String,
    /// One of [`mcb_domain::AliasType`]'s snake_case variants: `tag`,
    /// `shortcut`, `query`, `collection`.
    pub r#type: String,
    pub repository: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// A saved query string. Mutually exclusive with `chunk_ids`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    /// Direct chunk ids. Mutually exclusive with `query`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunk_ids: Option<Vec<String>>,
}

/// Parameters for `memory_resolve_alias`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ResolveAliasParams {
    pub repository: String,
    pub name: String,
}

/// Parameters for `memory_list_aliases`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListAliasesParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// Parameters for `memory_create_task`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    pub content: String,
    pub repository: String,
    pub session_id: String,
    /// `low`, `medium`, `high`, or `urgent`. Defaults to `medium`.
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

fn default_priority() -> String {
    "medium".to_string()
}

/// Parameters for `memory_update_task`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    pub task_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent_delta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Parameters for `memory_list_tasks`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListTasksParams {
    pub repository: String,
    /// A `TaskStatus` value, or the `active` shortcut for
    /// `{todo, in_progress, blocked}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

/// Parameters for `memory_bulk_delete`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BulkDeleteParams {
    pub ids: Vec<String>,
    #[serde(default)]
    pub continue_on_error: bool,
    #[serde(default)]
    pub dry_run: bool,
}

/// Parameters for `memory_secure_bulk_delete` — rejects any id whose stored
/// repository disagrees with `repository`, per item, without aborting.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SecureBulkDeleteParams {
    pub repository: String,
    pub ids: Vec<String>,
}

/// Parameters for `memory_get_bulk_progress`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct BulkProgressParams {
    pub operation_id: String,
}

/// Parameters for `memory_cancel_bulk_operation`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CancelBulkOperationParams {
    pub operation_id: String,
}

/// Parameters for `memory_export_project`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExportProjectParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// `json`, `markdown`, `csv`, or `archive`. Defaults to `json`.
    #[serde(default = "default_format")]
    pub format: String,
    /// `none`, `gzip`, or `zip`. Defaults to `none`.
    #[serde(default = "default_compression")]
    pub compression: String,
}

fn default_format() -> String {
    "json".to_string()
}

fn default_compression() -> String {
    "none".to_string()
}

/// Parameters for `memory_import_context`. `data` is base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ImportContextParams {
    pub data: String,
    /// `json`, `csv`, `archive`, or `auto` (sniff from content).
    #[serde(default = "default_auto_format")]
    pub format: String,
}

fn default_auto_format() -> String {
    "auto".to_string()
}

/// Parameters for `memory_health`. No fields — a liveness probe.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HealthParams {}
