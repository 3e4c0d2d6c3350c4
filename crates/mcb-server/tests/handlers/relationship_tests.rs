use mcb_server::params::{
    AutoDetectRelationshipsParams, GetRelationshipsParams, LinkParams, StoreChunkParams,
};
use rmcp::handler::server::wrapper::Parameters;

use crate::common::{extract_json, is_error, new_server};

async fn store(server: &mcb_server::McbMcpServer, content: &str) -> String {
    let result = server
        .store_chunk(Parameters(StoreChunkParams {
            content: content.to_string(),
            session_id: "session-1".to_string(),
            repository: Some("acme/api".to_string()),
            branch: None,
            files_modified: Vec::new(),
            tools_used: Vec::new(),
            tags: Vec::new(),
            r#type: None,
            parent_chunk: None,
        }))
        .await
        .expect("store_chunk should succeed");
    extract_json(&result)["chunk_id"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn link_then_get_relationships_finds_the_edge() {
    let server = new_server();
    let source = store(&server, "ran into a deadlock in the connection pool").await;
    let target = store(&server, "fixed the deadlock by using a single shared pool").await;

    let link_result = server
        .link(Parameters(LinkParams {
            source_id: source.clone(),
            target_id: target.clone(),
            relation_type: "solved_by".to_string(),
            confidence: 0.9,
        }))
        .await
        .expect("link should succeed");
    assert!(!is_error(&link_result));

    let related = server
        .get_relationships(Parameters(GetRelationshipsParams { chunk_id: source, direction: "outgoing".to_string(), max_depth: 2 }))
        .await
        .expect("get_relationships should succeed");
    let paths = extract_json(&related);
    let paths = paths.as_array().expect("paths array");
    assert_eq!(paths.len(), 1);
    assert_eq!(paths[0]["chunk_id"].as_str().unwrap(), target);
}

#[tokio::test]
async fn link_rejects_self_loop() {
    let server = new_server();
    let id = store(&server, "a lone chunk").await;

    let result = server
        .link(Parameters(LinkParams { source_id: id.clone(), target_id: id, relation_type: "related_to".to_string(), confidence: 1.0 }))
        .await;

    assert!(result.is_err(), "linking a chunk to itself should be rejected");
}

#[tokio::test]
async fn link_rejects_duplicate_edge() {
    let server = new_server();
    let source = store(&server, "chunk a").await;
    let target = store(&server, "chunk b").await;

    server
        .link(Parameters(LinkParams { source_id: source.clone(), target_id: target.clone(), relation_type: "related_to".to_string(), confidence: 1.0 }))
        .await
        .expect("first link should succeed");

    let second = server
        .link(Parameters(LinkParams { source_id: source, target_id: target, relation_type: "related_to".to_string(), confidence: 1.0 }))
        .await;

    assert!(second.is_err(), "duplicate relation edge should be rejected");
}

#[tokio::test]
async fn auto_detect_relationships_runs_without_error() {
    let server = new_server();
    let chunk_id = store(&server, "investigating a flaky test in the CI pipeline").await;

    let result = server.auto_detect_relationships(Parameters(AutoDetectRelationshipsParams { chunk_id })).await;
    assert!(result.is_ok(), "auto_detect_relationships should complete even with no strong neighbors");
}
