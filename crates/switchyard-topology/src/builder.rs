//! Topology construction: wiring clients to nodes and nodes to nodes.
//!
//! Construction is a one-shot batch process. Wires are appended, never
//! removed, so wire slots stay stable and a [`crate::WireRef`] taken at
//! connection time remains valid for the network's lifetime.

use crate::entity::{ClientId, NodeId, Wire, WireEnd, WireRef};
use crate::error::Result;
use crate::network::Network;

impl Network {
    /// Attach a client to a node with one client-tagged wire.
    ///
    /// Both identifiers must resolve. A client is meant to be wired at
    /// most once; wiring it again is last-write-wins and leaves the
    /// previous wire behind on its old node.
    pub fn connect_client(
        &mut self,
        node: NodeId,
        client: ClientId,
        length: u32,
        capacity: u32,
    ) -> Result<()> {
        let node_ix = self.node_index(node)?;
        let client_ix = self.client_index(client)?;

        let owner = &mut self.nodes[node_ix];
        owner.wires.push(Wire {
            length,
            capacity,
            end: WireEnd::Client(client),
        });
        let slot = owner.wires.len() - 1;

        self.clients[client_ix].attachment = Some(WireRef { node, slot });
        Ok(())
    }

    /// Link two nodes with a symmetric pair of node-tagged wires, one
    /// owned by each endpoint, each pointing at the other.
    ///
    /// `a == b` is legal: the node ends up owning both wires of its own
    /// loop.
    pub fn connect_nodes(&mut self, a: NodeId, b: NodeId, length: u32, capacity: u32) -> Result<()> {
        let a_ix = self.node_index(a)?;
        let b_ix = self.node_index(b)?;

        self.nodes[a_ix].wires.push(Wire {
            length,
            capacity,
            end: WireEnd::Node(b),
        });
        self.nodes[b_ix].wires.push(Wire {
            length,
            capacity,
            end: WireEnd::Node(a),
        });
        Ok(())
    }

    /// Recompute every node's direct-client list from its own wires.
    ///
    /// A full overwrite, not an increment: each list is cleared and
    /// rebuilt in wire insertion order. Run this after every batch of
    /// client connections; the derived lists are stale until then.
    pub fn refresh_direct_clients(&mut self) {
        for node in &mut self.nodes {
            node.direct_clients.clear();
            node.direct_clients
                .extend(node.wires.iter().filter_map(Wire::client_end));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn indexed(clients: usize, nodes: usize) -> Network {
        let mut net = Network::with_entities(clients, nodes);
        net.assign_ids().unwrap();
        net
    }

    #[test]
    fn client_wire_lands_on_node_and_client() {
        let mut net = indexed(1, 1);
        net.connect_client(NodeId(1), ClientId(1), 5, 5).unwrap();

        let node = net.node(NodeId(1)).unwrap();
        assert_eq!(node.wires().len(), 1);
        assert_eq!(node.wires()[0].end, WireEnd::Client(ClientId(1)));

        let attachment = net.client(ClientId(1)).unwrap().attachment().unwrap();
        assert_eq!(attachment.node, NodeId(1));
        assert_eq!(attachment.slot, 0);
        // The referenced wire points back at this client.
        let wire = &net.node(attachment.node).unwrap().wires()[attachment.slot];
        assert_eq!(wire.client_end(), Some(ClientId(1)));
    }

    #[test]
    fn connect_client_rejects_unknown_ids() {
        let mut net = indexed(1, 1);
        assert_eq!(
            net.connect_client(NodeId(9), ClientId(1), 1, 1),
            Err(Error::NodeNotFound(NodeId(9)))
        );
        assert_eq!(
            net.connect_client(NodeId(1), ClientId(9), 1, 1),
            Err(Error::ClientNotFound(ClientId(9)))
        );
    }

    #[test]
    fn node_link_is_a_symmetric_pair() {
        let mut net = indexed(0, 2);
        net.connect_nodes(NodeId(1), NodeId(2), 5, 7).unwrap();

        let a = net.node(NodeId(1)).unwrap();
        let b = net.node(NodeId(2)).unwrap();
        assert_eq!(a.wires().len(), 1);
        assert_eq!(b.wires().len(), 1);
        assert_eq!(a.wires()[0].end, WireEnd::Node(NodeId(2)));
        assert_eq!(b.wires()[0].end, WireEnd::Node(NodeId(1)));
        assert_eq!(a.wires()[0].length, b.wires()[0].length);
        assert_eq!(a.wires()[0].capacity, b.wires()[0].capacity);
    }

    #[test]
    fn connect_nodes_rejects_unknown_ids() {
        let mut net = indexed(0, 1);
        assert_eq!(
            net.connect_nodes(NodeId(1), NodeId(2), 1, 1),
            Err(Error::NodeNotFound(NodeId(2)))
        );
    }

    #[test]
    fn self_loop_owns_both_wires() {
        let mut net = indexed(0, 2);
        net.connect_nodes(NodeId(2), NodeId(2), 1, 1).unwrap();

        let node = net.node(NodeId(2)).unwrap();
        assert_eq!(node.wires().len(), 2);
        assert!(node
            .wires()
            .iter()
            .all(|w| w.end == WireEnd::Node(NodeId(2))));
        assert!(net.node(NodeId(1)).unwrap().wires().is_empty());
    }

    #[test]
    fn refresh_derives_exactly_the_owned_client_wires() {
        let mut net = indexed(3, 2);
        net.connect_client(NodeId(1), ClientId(2), 1, 1).unwrap();
        net.connect_nodes(NodeId(1), NodeId(2), 1, 1).unwrap();
        net.connect_client(NodeId(1), ClientId(1), 1, 1).unwrap();
        net.connect_client(NodeId(2), ClientId(3), 1, 1).unwrap();
        net.refresh_direct_clients();

        // Wire insertion order, node wires skipped.
        assert_eq!(
            net.node(NodeId(1)).unwrap().direct_clients(),
            &[ClientId(2), ClientId(1)]
        );
        assert_eq!(net.node(NodeId(2)).unwrap().direct_clients(), &[ClientId(3)]);
    }

    #[test]
    fn refresh_overwrites_instead_of_appending() {
        let mut net = indexed(2, 1);
        net.connect_client(NodeId(1), ClientId(1), 1, 1).unwrap();
        net.connect_client(NodeId(1), ClientId(2), 1, 1).unwrap();
        net.refresh_direct_clients();
        net.refresh_direct_clients();

        assert_eq!(
            net.node(NodeId(1)).unwrap().direct_clients(),
            &[ClientId(1), ClientId(2)]
        );
    }

    #[test]
    fn rewiring_is_last_write_wins() {
        let mut net = indexed(1, 2);
        net.connect_client(NodeId(1), ClientId(1), 1, 1).unwrap();
        net.connect_client(NodeId(2), ClientId(1), 2, 2).unwrap();
        net.refresh_direct_clients();

        let attachment = net.client(ClientId(1)).unwrap().attachment().unwrap();
        assert_eq!(attachment.node, NodeId(2));

        // The first wire stays behind on node 1, still client-tagged, so
        // the client shows up in both derived lists.
        assert_eq!(net.node(NodeId(1)).unwrap().direct_clients(), &[ClientId(1)]);
        assert_eq!(net.node(NodeId(2)).unwrap().direct_clients(), &[ClientId(1)]);
    }
}
