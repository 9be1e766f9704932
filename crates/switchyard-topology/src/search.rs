//! Constrained client-to-client reachability search.
//!
//! The search walks the node graph pre-order, scanning each node's
//! direct-client list before recursing through its node wires. It does
//! not look for a best path; it reports the first client whose
//! identifier matches the target.
//!
//! # Scan discipline
//!
//! Two pieces of per-query state thread through the recursion:
//!
//! - A scan-order list of every client identifier already examined.
//!   Encountering any of them again, anywhere in the currently-scanned
//!   node's direct list, poisons the whole query: the search aborts and
//!   reports not-found rather than skipping the duplicate. Duplicates
//!   arise from last-write-wins rewiring, which leaves a stale
//!   client-tagged wire on the old node.
//! - A visited-node set. Wires leading back to a node already examined
//!   are passed over, which is what keeps cyclic graphs and self-loops
//!   terminating; actually re-entering a visited node trips the cycle
//!   guard as a hard error instead of recursing without bound.
//!
//! Neither piece of state outlives the query, and no state is shared
//! between queries.

use std::collections::HashSet;

use crate::entity::{Client, ClientId, NodeId, Query, Wire};
use crate::error::{Error, Result};
use crate::network::Network;

/// Per-query search state, threaded through the recursion.
#[derive(Debug, Default)]
struct SearchState {
    /// Client identifiers examined so far, in scan order.
    seen_clients: Vec<ClientId>,
    /// Nodes already entered by this query.
    visited_nodes: HashSet<NodeId>,
}

/// What a single node visit concluded.
enum Outcome<'a> {
    /// The target client was found.
    Found(&'a Client),
    /// This branch is exhausted; siblings may still succeed.
    Exhausted,
    /// An already-seen client identifier reappeared; the whole query is
    /// abandoned.
    Poisoned,
}

/// Search for the query's target client starting from `start`.
///
/// Returns `Ok(None)` when either query endpoint is unset, when the
/// target is unreachable, or when the scan is poisoned by a repeated
/// client identifier. Fails with [`Error::NodeNotFound`] if `start`
/// does not resolve.
pub fn find_client<'a>(net: &'a Network, query: &Query, start: NodeId) -> Result<Option<&'a Client>> {
    if query.from.is_unset() || query.to.is_unset() {
        return Ok(None);
    }
    if net.node(start).is_none() {
        return Err(Error::NodeNotFound(start));
    }

    let mut state = SearchState::default();
    match scan_node(net, query, start, &mut state)? {
        Outcome::Found(client) => Ok(Some(client)),
        Outcome::Exhausted | Outcome::Poisoned => Ok(None),
    }
}

fn scan_node<'a>(
    net: &'a Network,
    query: &Query,
    node_id: NodeId,
    state: &mut SearchState,
) -> Result<Outcome<'a>> {
    if !state.visited_nodes.insert(node_id) {
        return Err(Error::CycleGuardTripped(node_id));
    }
    let node = net.node(node_id).ok_or(Error::NodeNotFound(node_id))?;

    for &candidate in node.direct_clients() {
        if state.seen_clients.contains(&candidate) {
            return Ok(Outcome::Poisoned);
        }
        if candidate == query.to {
            let client = net.client(candidate).ok_or(Error::ClientNotFound(candidate))?;
            return Ok(Outcome::Found(client));
        }
        state.seen_clients.push(candidate);
    }

    for peer in node.wires().iter().filter_map(Wire::node_end) {
        if state.visited_nodes.contains(&peer) {
            continue;
        }
        match scan_node(net, query, peer, state)? {
            Outcome::Found(client) => return Ok(Outcome::Found(client)),
            Outcome::Poisoned => return Ok(Outcome::Poisoned),
            Outcome::Exhausted => {}
        }
    }

    Ok(Outcome::Exhausted)
}

impl Network {
    /// Answer a query starting from the source client's own node.
    ///
    /// The source client must exist and be attached; the unset-endpoint
    /// and not-found semantics are those of [`find_client`].
    pub fn route_query(&self, query: &Query) -> Result<Option<&Client>> {
        if query.from.is_unset() || query.to.is_unset() {
            return Ok(None);
        }
        let source = self
            .client(query.from)
            .ok_or(Error::ClientNotFound(query.from))?;
        let wire = source.attachment().ok_or(Error::NotAttached(query.from))?;
        find_client(self, query, wire.node)
    }
}
