#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use serde_json::Value;

/// One request seen by the mock server.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub operation: String,
    pub body: Value,
}

type Responder = dyn Fn(&str, &Value) -> (StatusCode, String) + Send + Sync;

#[derive(Clone)]
struct MockState {
    calls: Arc<Mutex<Vec<RecordedCall>>>,
    responder: Arc<Responder>,
}

/// In-process stand-in for the graph API, listening on an ephemeral port.
pub struct MockGraphServer {
    pub base_url: String,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockGraphServer {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Recorded calls rendered as `name(args)`, e.g. `add_edge(0, 1)`.
    pub fn call_log(&self) -> Vec<String> {
        self.calls().iter().map(render_call).collect()
    }
}

fn render_call(call: &RecordedCall) -> String {
    let arg = |key: &str| call.body.get(key).and_then(Value::as_str).map(str::to_string);
    match (arg("node_id"), arg("node_a_id"), arg("node_b_id")) {
        (Some(id), _, _) => format!("{}({id})", call.operation),
        (_, Some(a), Some(b)) => format!("{}({a}, {b})", call.operation),
        _ => format!("{}()", call.operation),
    }
}

async fn handle(
    State(state): State<MockState>,
    Path(operation): Path<String>,
    body: String,
) -> (StatusCode, String) {
    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
    let reply = (state.responder)(&operation, &body);
    state.calls.lock().unwrap().push(RecordedCall { operation, body });
    reply
}

/// Start a mock server whose replies come from `responder`.
pub async fn spawn_mock<F>(responder: F) -> MockGraphServer
where
    F: Fn(&str, &Value) -> (StatusCode, String) + Send + Sync + 'static,
{
    let calls = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        calls: Arc::clone(&calls),
        responder: Arc::new(responder),
    };

    let router = Router::new()
        .route("/api/v1/{operation}", post(handle))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    MockGraphServer {
        base_url: format!("http://{addr}/api/v1/"),
        calls,
    }
}

/// Echo the request body with 200, the way the graph server acknowledges writes.
pub async fn spawn_echo() -> MockGraphServer {
    spawn_mock(|_, body| (StatusCode::OK, body.to_string())).await
}

/// Answer every request with `status` and an empty body.
pub async fn spawn_always(status: StatusCode) -> MockGraphServer {
    spawn_mock(move |_, _| (status, String::new())).await
}

/// A port nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/api/v1/")
}
