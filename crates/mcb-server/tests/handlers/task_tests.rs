use mcb_server::params::{CreateTaskParams, ListTasksParams, UpdateTaskParams};
use rmcp::handler::server::wrapper::Parameters;

use crate::common::{extract_json, is_error, new_server};

#[tokio::test]
async fn create_task_then_update_and_list() {
    let server = new_server();

    let created = server
        .create_task(Parameters(CreateTaskParams {
            content: "wire up rate limiting on the public API".to_string(),
            repository: "acme/api".to_string(),
            session_id: "session-1".to_string(),
            priority: "high".to_string(),
            dependencies: Vec::new(),
        }))
        .await
        .expect("create_task should succeed");
    assert!(!is_error(&created));
    let task_id = extract_json(&created)["task_id"].as_str().unwrap().to_string();

    let updated = server
        .update_task(Parameters(UpdateTaskParams {
            task_id: task_id.clone(),
            status: Some("in_progress".to_string()),
            priority: None,
            assignee: Some("alex".to_string()),
            progress: Some(40),
            time_spent_delta: None,
            note: None,
        }))
        .await
        .expect("a legal todo -> in_progress transition should succeed");
    let task = extract_json(&updated);
    assert_eq!(task["metadata"]["task"]["task_status"].as_str(), Some("in_progress"));

    let listed = server
        .list_tasks(Parameters(ListTasksParams { repository: "acme/api".to_string(), status: Some("active".to_string()), assignee: None }))
        .await
        .expect("list_tasks should succeed");
    let tasks = extract_json(&listed);
    assert_eq!(tasks.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn update_task_rejects_illegal_transition() {
    let server = new_server();

    let created = server
        .create_task(Parameters(CreateTaskParams {
            content: "draft the migration plan".to_string(),
            repository: "acme/api".to_string(),
            session_id: "session-1".to_string(),
            priority: "medium".to_string(),
            dependencies: Vec::new(),
        }))
        .await
        .expect("create_task should succeed");
    let task_id = extract_json(&created)["task_id"].as_str().unwrap().to_string();

    let result = server
        .update_task(Parameters(UpdateTaskParams {
            task_id,
            status: Some("completed".to_string()),
            priority: None,
            assignee: None,
            progress: None,
            time_spent_delta: None,
            note: None,
        }))
        .await;

    assert!(result.is_err(), "todo -> completed is not a legal direct transition");
}
