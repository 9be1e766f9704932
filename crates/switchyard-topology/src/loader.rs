//! Batch topology loading from tuple lists.
//!
//! Thin plumbing for seeding demonstration and test networks: each
//! tuple is handed to the corresponding connection primitive, and the
//! derived direct-client lists are refreshed once per client batch.

use crate::entity::{ClientId, NodeId};
use crate::error::Result;
use crate::network::Network;

/// Wire clients to nodes from `(client, node, length, capacity)` tuples,
/// then refresh the derived direct-client lists.
pub fn wire_clients(net: &mut Network, specs: &[(u32, u32, u32, u32)]) -> Result<()> {
    for &(client, node, length, capacity) in specs {
        net.connect_client(NodeId(node), ClientId(client), length, capacity)?;
    }
    net.refresh_direct_clients();
    Ok(())
}

/// Link node pairs from `(a, b, length, capacity)` tuples.
pub fn wire_nodes(net: &mut Network, specs: &[(u32, u32, u32, u32)]) -> Result<()> {
    for &(a, b, length, capacity) in specs {
        net.connect_nodes(NodeId(a), NodeId(b), length, capacity)?;
    }
    Ok(())
}

/// Wire clients to nodes with unit length and capacity.
pub fn wire_clients_uniform(net: &mut Network, pairs: &[(u32, u32)]) -> Result<()> {
    for &(client, node) in pairs {
        net.connect_client(NodeId(node), ClientId(client), 1, 1)?;
    }
    net.refresh_direct_clients();
    Ok(())
}

/// Link node pairs with unit length and capacity.
pub fn wire_nodes_uniform(net: &mut Network, pairs: &[(u32, u32)]) -> Result<()> {
    for &(a, b) in pairs {
        net.connect_nodes(NodeId(a), NodeId(b), 1, 1)?;
    }
    Ok(())
}

/// Seed the seven-client, three-node demonstration network.
///
/// Nodes 1 and 2 and nodes 2 and 3 are linked, clients 1..2 hang off
/// node 1, client 3 off node 2, and clients 4..7 off node 3.
pub fn demo_network() -> Result<Network> {
    let mut net = Network::with_entities(7, 3);
    net.assign_ids()?;
    for i in 1..=7u32 {
        if let Some(client) = net.client_mut(ClientId(i)) {
            client.resource = format!("client-{i}");
        }
    }
    wire_clients(
        &mut net,
        &[
            (1, 1, 5, 5),
            (2, 1, 4, 3),
            (3, 2, 2, 6),
            (4, 3, 8, 6),
            (5, 3, 5, 6),
            (6, 3, 7, 7),
            (7, 3, 2, 2),
        ],
    )?;
    wire_nodes(&mut net, &[(1, 2, 5, 5), (2, 3, 5, 5)])?;
    Ok(net)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn demo_network_shape() {
        let net = demo_network().unwrap();
        assert_eq!(net.client_count(), 7);
        assert_eq!(net.node_count(), 3);

        // Two client wires plus one pair wire.
        assert_eq!(net.node(NodeId(1)).unwrap().wires().len(), 3);
        // One client wire plus both pair wires.
        assert_eq!(net.node(NodeId(2)).unwrap().wires().len(), 3);
        // Four client wires plus one pair wire.
        assert_eq!(net.node(NodeId(3)).unwrap().wires().len(), 5);

        assert_eq!(
            net.node(NodeId(3)).unwrap().direct_clients(),
            &[ClientId(4), ClientId(5), ClientId(6), ClientId(7)]
        );
        assert_eq!(net.client(ClientId(3)).unwrap().resource, "client-3");
    }

    #[test]
    fn uniform_loaders_use_unit_wires() {
        let mut net = Network::with_entities(1, 2);
        net.assign_ids().unwrap();
        wire_clients_uniform(&mut net, &[(1, 1)]).unwrap();
        wire_nodes_uniform(&mut net, &[(1, 2)]).unwrap();

        let node = net.node(NodeId(1)).unwrap();
        assert!(node.wires().iter().all(|w| w.length == 1 && w.capacity == 1));
        assert_eq!(node.direct_clients(), &[ClientId(1)]);
    }

    #[test]
    fn batch_stops_at_the_first_unknown_id() {
        let mut net = Network::with_entities(1, 1);
        net.assign_ids().unwrap();
        let result = wire_clients(&mut net, &[(1, 1, 1, 1), (2, 1, 1, 1)]);
        assert_eq!(result, Err(Error::ClientNotFound(ClientId(2))));
    }
}
