//! Switchyard network topology
//!
//! A small physical/logical network model: switching nodes joined by
//! capacity-and-length-bearing wires, with end-user clients attached to
//! nodes via dedicated wires. The crate computes per-node and
//! network-wide cost metrics and answers client-to-client reachability
//! queries over the node graph.
//!
//! # Shape of the model
//!
//! The [`Network`] arena owns every entity; cross-references are
//! identifiers and wire slots, never addresses. A node-to-node link is
//! always a symmetric pair of wires, one owned by each endpoint.
//! Construction is a one-shot batch: register entities, assign dense
//! identifiers, connect, refresh the derived per-node client lists.
//! After that the graph is only read.
//!
//! # Reachability
//!
//! [`find_client`] walks the node graph pre-order with per-query state:
//! a scan-order list of client identifiers already examined and a
//! visited-node set that keeps cyclic graphs terminating. See the
//! `search` module docs for the scan discipline, including the
//! repeated-identifier poison rule.

mod builder;
mod cost;
mod entity;
mod error;
pub mod loader;
mod network;
mod search;

pub use cost::{network_cost, node_cost};
pub use entity::{Client, ClientId, Node, NodeId, Query, Wire, WireEnd, WireRef};
pub use error::{Error, Result};
pub use network::{assign_client_ids, assign_node_ids, Network};
pub use search::find_client;

/// Wire ceiling applied to nodes when no explicit default is given.
pub const DEFAULT_MAX_WIRES: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_network_end_to_end() {
        let net = loader::demo_network().unwrap();
        assert_eq!(network_cost(&net), 328);

        let q = Query::new(ClientId(4), ClientId(5)).with_message("ping");
        q.validate().unwrap();
        let found = net.route_query(&q).unwrap().unwrap();
        assert_eq!(found.id(), ClientId(5));
        assert_eq!(found.resource, "client-5");
    }
}
