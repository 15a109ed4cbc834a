//! HTTP client for the graph API.
//!
//! [`GraphApi`] is the seam the driver runs against; [`GraphClient`] implements it
//! over `reqwest`, posting each operation's JSON payload to `<base>/<operation>`.

use std::future::Future;

use reqwest::{StatusCode, Url};

use crate::config::EndpointConfig;
use crate::error::ClientError;
use crate::operation::{NodeId, Operation};
use crate::response::{Distance, InGraph, Neighbors, Response};

/// Anything that can carry an [`Operation`] to a graph server and report back.
pub trait GraphApi {
    fn send(
        &self,
        operation: &Operation,
    ) -> impl Future<Output = Result<Response, ClientError>> + Send;
}

/// `reqwest`-backed graph API client bound to one base URL.
#[derive(Debug, Clone)]
pub struct GraphClient {
    http: reqwest::Client,
    base_url: Url,
}

impl GraphClient {
    /// Create a client for `base_url`. A trailing `/` is added if missing so
    /// operation names join under the prefix instead of replacing its last segment.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&normalized).map_err(|e| ClientError::InvalidUrl {
            url: normalized.clone(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
        })
    }

    pub fn from_config(config: &EndpointConfig) -> Result<Self, ClientError> {
        Self::new(&config.base_url())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Full URL for an operation, e.g. `http://host:8000/api/v1/add_edge`.
    pub fn endpoint(&self, operation: &Operation) -> Result<Url, ClientError> {
        self.base_url
            .join(operation.name())
            .map_err(|e| ClientError::InvalidUrl {
                url: format!("{}{}", self.base_url, operation.name()),
                reason: e.to_string(),
            })
    }

    /// POST one operation. The body is read only for HTTP 200.
    pub async fn post(&self, operation: &Operation) -> Result<Response, ClientError> {
        let url = self.endpoint(operation)?;
        let payload = operation.payload();
        tracing::debug!(url = %url, payload = ?payload, "sending request");

        let response = self.http.post(url).json(&payload).send().await?;
        let status = response.status();

        let body = if status == StatusCode::OK {
            Some(response.text().await?)
        } else {
            None
        };

        tracing::debug!(
            operation = %operation,
            status = status.as_u16(),
            body_len = body.as_ref().map_or(0, String::len),
            "response received"
        );

        Ok(Response {
            operation: *operation,
            status: status.as_u16(),
            body,
        })
    }

    /// `Some(in_graph)` on 200, `None` otherwise.
    pub async fn get_node(&self, id: NodeId) -> Result<Option<bool>, ClientError> {
        let response = self.post(&Operation::GetNode(id)).await?;
        Ok(response.decode::<InGraph>()?.map(|r| r.in_graph))
    }

    pub async fn get_edge(&self, a: NodeId, b: NodeId) -> Result<Option<bool>, ClientError> {
        let response = self.post(&Operation::GetEdge(a, b)).await?;
        Ok(response.decode::<InGraph>()?.map(|r| r.in_graph))
    }

    pub async fn get_neighbors(&self, id: NodeId) -> Result<Option<Vec<NodeId>>, ClientError> {
        let response = self.post(&Operation::GetNeighbors(id)).await?;
        Ok(response.decode::<Neighbors>()?.map(|r| r.neighbors))
    }

    /// `None` when the server reports no path (204) or a missing node (400).
    pub async fn shortest_path(&self, a: NodeId, b: NodeId) -> Result<Option<u64>, ClientError> {
        let response = self.post(&Operation::ShortestPath(a, b)).await?;
        Ok(response.decode::<Distance>()?.map(|r| r.distance))
    }
}

impl GraphApi for GraphClient {
    async fn send(&self, operation: &Operation) -> Result<Response, ClientError> {
        self.post(operation).await
    }
}
