//! The network arena and identifier registry.
//!
//! A [`Network`] owns every client and node outright. Identifiers are
//! dense 1..N per collection, assigned once in creation order, which
//! makes lookup a checked index instead of a scan. Nothing is ever
//! removed once the network is assembled.

use crate::entity::{Client, ClientId, Node, NodeId};
use crate::error::{Error, Result};
use crate::DEFAULT_MAX_WIRES;

/// Top-level aggregate owning the client and node collections.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Network {
    pub(crate) clients: Vec<Client>,
    pub(crate) nodes: Vec<Node>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a network holding `clients` and `nodes` fresh, unindexed
    /// entities. Call [`Network::assign_ids`] before connecting anything.
    pub fn with_entities(clients: usize, nodes: usize) -> Self {
        Self {
            clients: (0..clients).map(|_| Client::default()).collect(),
            nodes: (0..nodes).map(|_| Node::default()).collect(),
        }
    }

    /// Assign identifiers 1..N to both collections in creation order,
    /// giving every node the default wire ceiling.
    ///
    /// Fails with [`Error::AlreadyIndexed`] if either collection has
    /// been indexed or connected before; renumbering a live network is
    /// unsupported.
    pub fn assign_ids(&mut self) -> Result<()> {
        self.assign_ids_with(DEFAULT_MAX_WIRES)
    }

    /// Like [`Network::assign_ids`] with an explicit `max_wires` default.
    pub fn assign_ids_with(&mut self, default_max_wires: u32) -> Result<()> {
        assign_client_ids(&mut self.clients)?;
        assign_node_ids(&mut self.nodes, default_max_wires)?;
        Ok(())
    }

    /// Look up a client by identifier.
    pub fn client(&self, id: ClientId) -> Option<&Client> {
        if id.is_unset() {
            return None;
        }
        self.clients
            .get(id.0 as usize - 1)
            .filter(|client| client.id == id)
    }

    /// Look up a node by identifier.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        if id.is_unset() {
            return None;
        }
        self.nodes.get(id.0 as usize - 1).filter(|node| node.id == id)
    }

    /// Mutable client access, for relabeling resources.
    pub fn client_mut(&mut self, id: ClientId) -> Option<&mut Client> {
        if id.is_unset() {
            return None;
        }
        self.clients
            .get_mut(id.0 as usize - 1)
            .filter(|client| client.id == id)
    }

    /// All clients, in identifier order.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// All nodes, in identifier order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of clients.
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn client_index(&self, id: ClientId) -> Result<usize> {
        self.client(id)
            .map(|_| id.0 as usize - 1)
            .ok_or(Error::ClientNotFound(id))
    }

    pub(crate) fn node_index(&self, id: NodeId) -> Result<usize> {
        self.node(id)
            .map(|_| id.0 as usize - 1)
            .ok_or(Error::NodeNotFound(id))
    }
}

/// Assign identifiers 1..k to a fresh client collection.
///
/// Rejects collections that already carry identifiers or attachments.
pub fn assign_client_ids(clients: &mut [Client]) -> Result<()> {
    if clients
        .iter()
        .any(|c| !c.id.is_unset() || c.attachment.is_some())
    {
        return Err(Error::AlreadyIndexed);
    }
    for (i, client) in clients.iter_mut().enumerate() {
        client.id = ClientId(i as u32 + 1);
    }
    Ok(())
}

/// Assign identifiers 1..k and a uniform `max_wires` default to a fresh
/// node collection.
///
/// Rejects collections that already carry identifiers or wires.
pub fn assign_node_ids(nodes: &mut [Node], default_max_wires: u32) -> Result<()> {
    if nodes.iter().any(|n| !n.id.is_unset() || !n.wires.is_empty()) {
        return Err(Error::AlreadyIndexed);
    }
    for (i, node) in nodes.iter_mut().enumerate() {
        node.id = NodeId(i as u32 + 1);
        node.max_wires = default_max_wires;
    }
    Ok(())
}
