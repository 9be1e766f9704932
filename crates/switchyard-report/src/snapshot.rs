//! Serializable snapshot of an assembled network.
//!
//! The snapshot flattens every wire into one indexed table and lets
//! clients and nodes refer to wires by table index. That keeps the
//! records self-contained, so a persistence layer can write and reload
//! them without reaching back into the topology crate's internals.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use switchyard_topology::{Network, NodeId, WireEnd};

/// The far end of a wire, as recorded in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum WirePeer {
    /// The wire attaches a client.
    Client { id: u32 },
    /// The wire leads to another node.
    Node { id: u32 },
}

/// One wire in the flattened wire table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireRecord {
    pub length: u32,
    pub capacity: u32,
    /// Identifier of the owning node.
    pub owner: u32,
    pub peer: WirePeer,
}

/// One client record: identifier, label, and the index of its attaching
/// wire in the wire table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub id: u32,
    pub resource: String,
    pub wire: Option<usize>,
}

/// One node record: identifier, ceiling, owned wire indices, and the
/// derived direct-client identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub id: u32,
    pub max_wires: u32,
    pub wires: Vec<usize>,
    pub direct_clients: Vec<u32>,
}

/// A complete, ordered capture of a network's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub clients: Vec<ClientRecord>,
    pub nodes: Vec<NodeRecord>,
    pub wires: Vec<WireRecord>,
}

impl NetworkSnapshot {
    /// Capture the current state of a network.
    ///
    /// Wire table indices are assigned by walking nodes in identifier
    /// order and each node's wires in insertion order.
    pub fn capture(net: &Network) -> Self {
        let mut wire_offsets: HashMap<NodeId, usize> = HashMap::new();
        let mut wires = Vec::new();
        let mut nodes = Vec::new();

        for node in net.nodes() {
            wire_offsets.insert(node.id(), wires.len());
            let mut owned = Vec::with_capacity(node.wires().len());
            for wire in node.wires() {
                owned.push(wires.len());
                wires.push(WireRecord {
                    length: wire.length,
                    capacity: wire.capacity,
                    owner: node.id().value(),
                    peer: match wire.end {
                        WireEnd::Client(c) => WirePeer::Client { id: c.value() },
                        WireEnd::Node(n) => WirePeer::Node { id: n.value() },
                    },
                });
            }
            nodes.push(NodeRecord {
                id: node.id().value(),
                max_wires: node.max_wires,
                wires: owned,
                direct_clients: node
                    .direct_clients()
                    .iter()
                    .map(|c| c.value())
                    .collect(),
            });
        }

        let clients = net
            .clients()
            .iter()
            .map(|client| ClientRecord {
                id: client.id().value(),
                resource: client.resource.clone(),
                wire: client
                    .attachment()
                    .and_then(|r| wire_offsets.get(&r.node).map(|offset| offset + r.slot)),
            })
            .collect();

        Self {
            clients,
            nodes,
            wires,
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
