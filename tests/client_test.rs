mod helpers;

use axum::http::StatusCode;
use graph_driver::{GraphClient, Operation, Outcome};
use helpers::{spawn_echo, spawn_mock};
use serde_json::json;

#[tokio::test]
async fn payload_shapes_reach_the_server() {
    let server = spawn_echo().await;
    let client = GraphClient::new(&server.base_url).unwrap();

    client.post(&Operation::Checkpoint).await.unwrap();
    client.post(&Operation::RemoveNode(4)).await.unwrap();
    client.post(&Operation::AddEdge(2, 9)).await.unwrap();

    let calls = server.calls();
    assert_eq!(calls[0].operation, "checkpoint");
    assert_eq!(calls[0].body, json!({}));
    assert_eq!(calls[1].operation, "remove_node");
    assert_eq!(calls[1].body, json!({ "node_id": "4" }));
    assert_eq!(calls[2].operation, "add_edge");
    assert_eq!(calls[2].body, json!({ "node_a_id": "2", "node_b_id": "9" }));
}

#[tokio::test]
async fn body_is_read_only_for_200() {
    let server = spawn_mock(|operation, _| match operation {
        "add_node" => (StatusCode::OK, r#"{"node_id": "1"}"#.into()),
        "add_edge" => (StatusCode::BAD_REQUEST, "missing node".into()),
        _ => (StatusCode::NO_CONTENT, String::new()),
    })
    .await;
    let client = GraphClient::new(&server.base_url).unwrap();

    let ok = client.post(&Operation::AddNode(1)).await.unwrap();
    assert_eq!(ok.status, 200);
    assert_eq!(ok.outcome(), Outcome::Ok);
    assert_eq!(ok.body.as_deref(), Some(r#"{"node_id": "1"}"#));

    let rejected = client.post(&Operation::AddEdge(1, 5)).await.unwrap();
    assert_eq!(rejected.outcome(), Outcome::BadRequest);
    assert_eq!(rejected.body, None);

    let unchanged = client.post(&Operation::RemoveEdge(1, 5)).await.unwrap();
    assert_eq!(unchanged.outcome(), Outcome::NoChange);
    assert_eq!(unchanged.body, None);
}

#[tokio::test]
async fn read_operations_decode_typed_bodies() {
    let server = spawn_mock(|operation, body| {
        let id = body.get("node_id").and_then(|v| v.as_str()).unwrap_or("");
        match (operation, id) {
            ("get_node", "1") => (StatusCode::OK, r#"{ "in_graph": true }"#.into()),
            ("get_node", _) => (StatusCode::OK, r#"{ "in_graph": false }"#.into()),
            ("get_edge", _) => (StatusCode::BAD_REQUEST, String::new()),
            ("get_neighbors", _) => (StatusCode::OK, r#"{"node_id": 1,"neighbors": [2,3]}"#.into()),
            ("shortest_path", _) => (StatusCode::NO_CONTENT, String::new()),
            _ => (StatusCode::NOT_FOUND, String::new()),
        }
    })
    .await;
    let client = GraphClient::new(&server.base_url).unwrap();

    assert_eq!(client.get_node(1).await.unwrap(), Some(true));
    assert_eq!(client.get_node(8).await.unwrap(), Some(false));
    assert_eq!(client.get_edge(1, 8).await.unwrap(), None);
    assert_eq!(client.get_neighbors(1).await.unwrap(), Some(vec![2, 3]));
    assert_eq!(client.shortest_path(1, 8).await.unwrap(), None);

    assert_eq!(
        server.call_log(),
        vec![
            "get_node(1)",
            "get_node(8)",
            "get_edge(1, 8)",
            "get_neighbors(1)",
            "shortest_path(1, 8)",
        ]
    );
}

#[tokio::test]
async fn unexpected_status_is_classified() {
    let server = spawn_mock(|_, _| (StatusCode::INSUFFICIENT_STORAGE, String::new())).await;
    let client = GraphClient::new(&server.base_url).unwrap();

    let response = client.post(&Operation::AddNode(0)).await.unwrap();
    assert_eq!(response.status, 507);
    assert_eq!(response.outcome(), Outcome::StorageFull);
    assert!(!response.is_success());
}
