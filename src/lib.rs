//! Sequential request driver for a graph-management HTTP API.
//!
//! The driver posts JSON payloads to `<base>/api/v1/<operation>` one request at a
//! time, printing each status code and, for HTTP 200, the response body. Its fixed
//! scenario builds a complete graph, then tears half of it down.
//!
//! | Operation | Payload |
//! |-----------|---------|
//! | `add_node`, `remove_node`, `get_node`, `get_neighbors` | `{"node_id": "<id>"}` |
//! | `add_edge`, `remove_edge`, `get_edge`, `shortest_path` | `{"node_a_id": "<a>", "node_b_id": "<b>"}` |
//! | `checkpoint` | `{}` |
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`operation`] — Typed operations and their request payloads
//! - [`client`] — The [`client::GraphApi`] seam and its `reqwest` implementation
//! - [`response`] — Status classification and typed response bodies
//! - [`sequence`] — The add/connect/remove request sequence
//! - [`driver`] — Sequential execution with an explicit failure policy

pub mod client;
pub mod config;
pub mod driver;
pub mod error;
pub mod operation;
pub mod response;
pub mod sequence;

pub use client::{GraphApi, GraphClient};
pub use driver::{Driver, FailurePolicy, RunSummary};
pub use error::{ClientError, DriverError};
pub use operation::{NodeId, Operation};
pub use response::{Outcome, Response};
