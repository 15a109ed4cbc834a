//! Responses from the graph API.
//!
//! A [`Response`] keeps the raw status code and, for HTTP 200 only, the body text.
//! [`Outcome`] classifies the status codes the graph server is known to emit, and
//! the `InGraph` / `Neighbors` / `Distance` types decode bodies of read operations.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::ClientError;
use crate::operation::{NodeId, Operation};

/// Result of one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub operation: Operation,
    pub status: u16,
    /// Body text, read only when `status` is 200.
    pub body: Option<String>,
}

/// Classification of a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 200: applied (writes echo the request body).
    Ok,
    /// 204: nothing changed, e.g. the node already existed or no path exists.
    NoChange,
    /// 400: a referenced node or edge is missing, or the arguments are invalid.
    BadRequest,
    /// 507: the server's mutation log is full and needs a checkpoint.
    StorageFull,
    /// Any other 5xx, including failed forwarding between servers.
    ServerError(u16),
    Other(u16),
}

impl Outcome {
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => Self::Ok,
            204 => Self::NoChange,
            400 => Self::BadRequest,
            507 => Self::StorageFull,
            500..=599 => Self::ServerError(status),
            other => Self::Other(other),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NoChange => "no change",
            Self::BadRequest => "bad request",
            Self::StorageFull => "checkpoint needed",
            Self::ServerError(_) => "server error",
            Self::Other(_) => "unexpected status",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Response {
    pub fn outcome(&self) -> Outcome {
        Outcome::from_status(self.status)
    }

    /// Only HTTP 200 counts as success.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }

    /// Decode the body as JSON. Returns `Ok(None)` when the request did not succeed
    /// or the server sent no body.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>, ClientError> {
        let body = match (&self.body, self.is_success()) {
            (Some(body), true) if !body.trim().is_empty() => body,
            _ => return Ok(None),
        };
        serde_json::from_str(body)
            .map(Some)
            .map_err(|source| ClientError::Decode {
                operation: self.operation.to_string(),
                source,
            })
    }
}

/// Body of `get_node` and `get_edge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct InGraph {
    pub in_graph: bool,
}

/// Body of `get_neighbors`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Neighbors {
    pub node_id: NodeId,
    pub neighbors: Vec<NodeId>,
}

/// Body of `shortest_path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Distance {
    pub distance: u64,
}
