//! Conversion from [`mcb_domain::Error`] to [`rmcp`]'s `McpError`, and the
//! self-correcting example-payload helper (SPEC_FULL §7).

use rmcp::ErrorData as McpError;
use serde_json::json;

/// Map a domain error onto the nearest `rmcp` error kind, folding in an
/// example payload for `InvalidArgument` failures so an AI-assistant caller
/// gets a concrete correction hint (spec §7: "self-correcting hints").
pub fn to_mcp_error(err: mcb_domain::Error, tool: &str) -> McpError {
    use mcb_domain::Error as E;
    match err {
        E::InvalidArgument { message } => {
            McpError::invalid_params(format!("{message}\nexample: {}", example_payload(tool)), None)
        }
        E::NotFound { resource } => McpError::resource_not_found(resource, None),
        E::ChunkNotFound { id } => McpError::resource_not_found(format!("chunk {id}"), None),
        E::TenantMismatch { actual, requested } => McpError::invalid_params(
            format!("resource belongs to repository '{actual}', requested '{requested}'"),
            None,
        ),
        E::Conflict { message } => McpError::invalid_params(message, None),
        E::Cancelled => McpError::internal_error("operation cancelled", None),
        E::DeadlineExceeded { after_ms } => {
            McpError::internal_error(format!("deadline exceeded after {after_ms}ms"), None)
        }
        other => McpError::internal_error(other.to_string(), None),
    }
}

/// A concrete example payload for a given tool, surfaced in `InvalidArgument`
/// error messages.
#[must_use]
pub fn example_payload(tool: &str) -> serde_json::Value {
    match tool {
        "store_chunk" => json!({
            "content": "Fixed JWT validation by checking exp claim",
            "session_id": "sess1",
            "repository": "github.com/acme/api",
        }),
        "search" => json!({
            "query": "JWT expiration bug",
            "repository": "github.com/acme/api",
            "limit": 10,
            "min_relevance": 0.5,
        }),
        "create_task" => json!({
            "content": "add log rotation",
            "repository": "github.com/acme/api",
            "session_id": "sess1",
            "priority": "high",
        }),
        "link" => json!({
            "source_id": "<chunk-uuid>",
            "target_id": "<chunk-uuid>",
            "relation_type": "solved_by",
        }),
        "create_thread" => json!({
            "title": "JWT expiration investigation",
            "repository": "github.com/acme/api",
            "chunk_ids": ["<chunk-uuid>"],
            "type": "problem_solving",
        }),
        "create_alias" => json!({
            "name": "@bug-fixes",
            "type": "tag",
            "repository": "github.com/acme/api",
            "target": {"kind": "saved_query", "query": "bug"},
        }),
        "bulk_operation" => json!({
            "kind": "delete",
            "ids": ["<chunk-uuid>"],
            "options": {"continue_on_error": true},
        }),
        _ => json!({"hint": "see the tool's input schema"}),
    }
}
