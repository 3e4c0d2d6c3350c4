//! Shared fixtures and `CallToolResult` assertion helpers for the handler
//! test suite.

use mcb_server::McbMcpServer;
use rmcp::model::CallToolResult;
use serde_json::Value;

pub fn new_server() -> McbMcpServer {
    McbMcpServer::new()
}

/// Extract all text content blocks from a tool result, joined by newlines.
pub fn extract_text(result: &CallToolResult) -> String {
    result
        .content
        .iter()
        .filter_map(|c| c.raw.as_text())
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn extract_json(result: &CallToolResult) -> Value {
    serde_json::from_str(&extract_text(result)).expect("tool result is valid JSON")
}

pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error.unwrap_or(false)
}
