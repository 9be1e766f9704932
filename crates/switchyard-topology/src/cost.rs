//! Deterministic cost metrics over the assembled topology.
//!
//! Costs are pure functions of current state, recomputed on every call.
//! Accumulation is in i64 so large synthetic networks cannot overflow
//! the sum even though individual wire attributes are u32.

use crate::entity::Node;
use crate::network::Network;

/// Cost of a single node: the sum of length x capacity over its wires,
/// plus its `max_wires` ceiling.
///
/// Both wires of a node-to-node pair contribute, one to each endpoint.
pub fn node_cost(node: &Node) -> i64 {
    let wires: i64 = node
        .wires()
        .iter()
        .map(|w| i64::from(w.length) * i64::from(w.capacity))
        .sum();
    wires + i64::from(node.max_wires)
}

/// Cost of the whole network: the sum of [`node_cost`] over all nodes.
pub fn network_cost(net: &Network) -> i64 {
    net.nodes().iter().map(node_cost).sum()
}
