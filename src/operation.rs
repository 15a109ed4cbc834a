//! Graph API operations and their request payloads.
//!
//! Each [`Operation`] variant carries exactly the node ids its endpoint takes,
//! so the payload arity is fixed by the type instead of by a loose argument list.

use serde::Serialize;

/// Identifier of a node in the remote graph. Sent over the wire as a decimal string.
pub type NodeId = u64;

/// A single call against the graph API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AddNode(NodeId),
    RemoveNode(NodeId),
    AddEdge(NodeId, NodeId),
    RemoveEdge(NodeId, NodeId),
    /// Membership check, answered with `{"in_graph": bool}`.
    GetNode(NodeId),
    /// Edge membership check, answered with `{"in_graph": bool}`.
    GetEdge(NodeId, NodeId),
    /// Adjacency listing, answered with `{"node_id": id, "neighbors": [..]}`.
    GetNeighbors(NodeId),
    /// Hop distance between two nodes, answered with `{"distance": n}`.
    ShortestPath(NodeId, NodeId),
    /// Ask the server to checkpoint its mutation log. Takes no arguments.
    Checkpoint,
}

/// JSON body of a request. Field names match what the server reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Empty {},
    Node {
        node_id: String,
    },
    Edge {
        node_a_id: String,
        node_b_id: String,
    },
}

impl Operation {
    /// Endpoint name, appended to the API prefix (e.g. `api/v1/add_node`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddNode(_) => "add_node",
            Self::RemoveNode(_) => "remove_node",
            Self::AddEdge(..) => "add_edge",
            Self::RemoveEdge(..) => "remove_edge",
            Self::GetNode(_) => "get_node",
            Self::GetEdge(..) => "get_edge",
            Self::GetNeighbors(_) => "get_neighbors",
            Self::ShortestPath(..) => "shortest_path",
            Self::Checkpoint => "checkpoint",
        }
    }

    /// Build the request body for this operation.
    pub fn payload(&self) -> Payload {
        match *self {
            Self::Checkpoint => Payload::Empty {},
            Self::AddNode(id)
            | Self::RemoveNode(id)
            | Self::GetNode(id)
            | Self::GetNeighbors(id) => Payload::Node {
                node_id: id.to_string(),
            },
            Self::AddEdge(a, b)
            | Self::RemoveEdge(a, b)
            | Self::GetEdge(a, b)
            | Self::ShortestPath(a, b) => Payload::Edge {
                node_a_id: a.to_string(),
                node_b_id: b.to_string(),
            },
        }
    }

    /// `true` for operations that change the graph (and are logged server-side).
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::AddNode(_) | Self::RemoveNode(_) | Self::AddEdge(..) | Self::RemoveEdge(..)
        )
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.payload() {
            Payload::Empty {} => write!(f, "{}()", self.name()),
            Payload::Node { node_id } => write!(f, "{}({node_id})", self.name()),
            Payload::Edge {
                node_a_id,
                node_b_id,
            } => write!(f, "{}({node_a_id}, {node_b_id})", self.name()),
        }
    }
}
