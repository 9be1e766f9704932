//! Human-readable network and node listings.

use std::fmt::Write;

use switchyard_topology::{network_cost, node_cost, Error, Network, NodeId, Result, WireEnd};

/// Render one node: its ceiling, every wire with peer, length and
/// capacity, and its cost.
pub fn node_report(net: &Network, id: NodeId) -> Result<String> {
    let node = net.node(id).ok_or(Error::NodeNotFound(id))?;

    // Writes into a String cannot fail.
    let mut out = String::new();
    let _ = writeln!(out, "node {}", node.id());
    let _ = writeln!(out, "  max wires: {}", node.max_wires);
    let _ = writeln!(out, "  wires:");
    for wire in node.wires() {
        let (kind, peer) = match wire.end {
            WireEnd::Client(c) => ("client", c.value()),
            WireEnd::Node(n) => ("node", n.value()),
        };
        let _ = writeln!(
            out,
            "    {kind} {peer}  length {}  capacity {}",
            wire.length, wire.capacity
        );
    }
    let _ = writeln!(out, "  cost: {}", node_cost(node));
    Ok(out)
}

/// Render the whole network: entity counts, one peer-summary line per
/// node, and the total cost.
///
/// In the summary lines client peers appear bare and node peers in
/// brackets.
pub fn network_report(net: &Network) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "network");
    let _ = writeln!(out, "  clients: {}", net.client_count());
    let _ = writeln!(out, "  nodes: {}", net.node_count());
    for node in net.nodes() {
        let peers: Vec<String> = node
            .wires()
            .iter()
            .map(|wire| match wire.end {
                WireEnd::Client(c) => c.to_string(),
                WireEnd::Node(n) => format!("[{n}]"),
            })
            .collect();
        let _ = writeln!(out, "  node {}: {}", node.id(), peers.join(", "));
    }
    let _ = writeln!(out, "  cost: {}", network_cost(net));
    out
}
