use mcb_server::params::{ConflictsParams, ResolveConflictsParams, StoreChunkParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::common::{extract_json, is_error, new_server};

async fn store_decision(server: &mcb_server::McbMcpServer, content: &str) -> String {
    let result = server
        .store_chunk(Parameters(StoreChunkParams {
            content: content.to_string(),
            session_id: "session-1".to_string(),
            repository: Some("acme/api".to_string()),
            branch: None,
            files_modified: Vec::new(),
            tools_used: Vec::new(),
            tags: Vec::new(),
            r#type: Some("architecture_decision".to_string()),
            parent_chunk: None,
        }))
        .await
        .expect("store_chunk should succeed");
    extract_json(&result)["chunk_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn conflicting_architecture_decisions_are_detected_and_resolved() {
    let server = new_server();
    let a = store_decision(&server, "we will use a synchronous request pipeline for the API gateway").await;
    let b = store_decision(&server, "switching the API gateway to an asynchronous request pipeline").await;

    let conflicts = server.conflicts(Parameters(ConflictsParams { chunk_id: a.clone() })).await.expect("conflicts should succeed");
    assert!(!is_error(&conflicts));
    let list = extract_json(&conflicts);
    let list = list.as_array().expect("conflicts array");
    assert!(!list.is_empty(), "opposing sync/async architecture decisions should be flagged as a conflict");

    let resolved = server
        .resolve_conflicts(Parameters(ResolveConflictsParams { chunk_a: a, chunk_b: b }))
        .await
        .expect("resolve_conflicts should find the matching pair and propose strategies");
    let body = extract_json(&resolved);
    assert!(!body["strategies"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn resolve_conflicts_for_unrelated_pair_errors() {
    let server = new_server();
    let a = store_decision(&server, "decided to paginate search results").await;
    let b = store_decision(&server, "decided to rename the health check endpoint").await;

    let result = server.resolve_conflicts(Parameters(ResolveConflictsParams { chunk_a: a, chunk_b: b })).await;
    assert!(result.is_err(), "unrelated chunks should not have a detectable conflict");
}

#[tokio::test]
async fn conflicts_for_unknown_chunk_errors() {
    let server = new_server();

    let result = server.conflicts(Parameters(ConflictsParams { chunk_id: "nonexistent".to_string() })).await;
    assert!(result.is_err());
}
