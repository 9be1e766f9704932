//! Error types for switchyard-topology.

use crate::{ClientId, NodeId};
use thiserror::Error;

/// Result type for topology operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or querying a network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// No client with the given identifier exists in the network.
    #[error("client {0} not found")]
    ClientNotFound(ClientId),

    /// No node with the given identifier exists in the network.
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    /// The client exists but has never been wired to a node.
    #[error("client {0} is not attached to any node")]
    NotAttached(ClientId),

    /// A query endpoint carries the reserved unset identifier.
    #[error("query has an unset endpoint (from {from}, to {to})")]
    InvalidQuery { from: ClientId, to: ClientId },

    /// A search re-entered a node it had already examined.
    #[error("cycle guard tripped re-entering node {0}")]
    CycleGuardTripped(NodeId),

    /// Identifier assignment was attempted on a collection that already
    /// carries identifiers or wires.
    #[error("collection is already indexed")]
    AlreadyIndexed,
}
