//! The fixed request sequence the driver replays.
//!
//! For `n` nodes: add every node, connect every pair (a complete graph), remove
//! the lower half of the nodes, then remove the chain of edges among the rest.

use crate::operation::{NodeId, Operation};

/// The full sequence for `n` nodes, in the order it must be sent.
///
/// Produced lazily: the edge phase alone is `n * (n - 1) / 2` operations.
pub fn complete_graph_sequence(n: NodeId) -> impl Iterator<Item = Operation> {
    let half = n / 2;

    let add_nodes = (0..n).map(Operation::AddNode);
    let add_edges = (0..n).flat_map(move |i| (i + 1..n).map(move |j| Operation::AddEdge(i, j)));
    let remove_nodes = (0..half).map(Operation::RemoveNode);
    let remove_edges = (half + 1..n).map(|i| Operation::RemoveEdge(i - 1, i));

    add_nodes
        .chain(add_edges)
        .chain(remove_nodes)
        .chain(remove_edges)
}

/// Number of requests [`complete_graph_sequence`] produces for `n` nodes,
/// or `None` if it does not fit in a `u64`.
pub fn sequence_len(n: NodeId) -> Option<u64> {
    if n == 0 {
        return Some(0);
    }
    let half = n / 2;
    // Halve the even factor first so n * (n - 1) / 2 never overflows spuriously.
    let pairs = if n % 2 == 0 {
        half.checked_mul(n - 1)?
    } else {
        n.checked_mul((n - 1) / 2)?
    };
    n.checked_add(pairs)?
        .checked_add(half)?
        .checked_add(n - (half + 1).min(n))
}
