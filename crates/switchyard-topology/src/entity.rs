//! Network entities and identifiers.
//!
//! Clients, nodes, and wires never hold references into each other.
//! Every cross-reference is an identifier or an index into an owning,
//! append-only collection, so entities stay valid while the arenas grow.

use std::fmt;

use crate::error::{Error, Result};

/// Identifier of a client, dense 1..N within a network.
///
/// Zero is reserved as "unset".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientId(pub u32);

impl ClientId {
    /// The reserved "unset" identifier.
    pub const UNSET: Self = Self(0);

    /// Create from a raw value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Whether this is the reserved unset identifier.
    #[inline]
    pub const fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ClientId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Identifier of a node, dense 1..N within a network.
///
/// Zero is reserved as "unset". Node and client identifiers are
/// independent numbering spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// The reserved "unset" identifier.
    pub const UNSET: Self = Self(0);

    /// Create from a raw value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Whether this is the reserved unset identifier.
    #[inline]
    pub const fn is_unset(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for NodeId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// The far end of a wire: exactly one of a client or a peer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WireEnd {
    /// The wire attaches a client to its node.
    Client(ClientId),
    /// The wire leads to another node.
    Node(NodeId),
}

/// Location of a wire inside a network: the owning node and the slot in
/// that node's append-only wire collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireRef {
    /// Node that owns the wire.
    pub node: NodeId,
    /// Slot in the owner's wire collection.
    pub slot: usize,
}

/// A capacity- and length-bearing link owned by a node.
///
/// A node-to-node connection is always a symmetric pair of wires, one
/// owned by each endpoint, each pointing at the other.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wire {
    /// Length in arbitrary units.
    pub length: u32,
    /// Carrying capacity.
    pub capacity: u32,
    /// The far end of the wire.
    pub end: WireEnd,
}

impl Wire {
    /// The client at the far end, if this is a client wire.
    #[inline]
    pub fn client_end(&self) -> Option<ClientId> {
        match self.end {
            WireEnd::Client(id) => Some(id),
            WireEnd::Node(_) => None,
        }
    }

    /// The peer node at the far end, if this is a node wire.
    #[inline]
    pub fn node_end(&self) -> Option<NodeId> {
        match self.end {
            WireEnd::Node(id) => Some(id),
            WireEnd::Client(_) => None,
        }
    }
}

/// An end-user endpoint attached to exactly one node via one wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Client {
    pub(crate) id: ClientId,
    /// Opaque resource label.
    pub resource: String,
    pub(crate) attachment: Option<WireRef>,
}

impl Client {
    /// This client's identifier.
    #[inline]
    pub fn id(&self) -> ClientId {
        self.id
    }

    /// The wire attaching this client to its node, if wired.
    ///
    /// Rewiring a client is last-write-wins: the previous wire stays
    /// behind on its owning node, still tagged with this client.
    #[inline]
    pub fn attachment(&self) -> Option<WireRef> {
        self.attachment
    }
}

/// A switching point owning its wires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub(crate) id: NodeId,
    /// Advisory wire-capacity ceiling. Stored and reported, never
    /// enforced during connection.
    pub max_wires: u32,
    pub(crate) wires: Vec<Wire>,
    pub(crate) direct_clients: Vec<ClientId>,
}

impl Node {
    /// This node's identifier.
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// All wires owned by this node, in insertion order.
    #[inline]
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    /// Clients attached by a direct wire, as of the last refresh.
    ///
    /// Derived from the wire collection, in wire insertion order. Stale
    /// until [`crate::Network::refresh_direct_clients`] runs after a
    /// batch of client connections.
    #[inline]
    pub fn direct_clients(&self) -> &[ClientId] {
        &self.direct_clients
    }
}

/// An ephemeral reachability question: can `from` reach `to`?
#[derive(Debug, Clone)]
pub struct Query {
    /// Source client.
    pub from: ClientId,
    /// Target client.
    pub to: ClientId,
    /// Free-form payload carried alongside the question.
    pub message: String,
}

impl Query {
    /// Create a query with an empty message.
    pub fn new(from: ClientId, to: ClientId) -> Self {
        Self {
            from,
            to,
            message: String::new(),
        }
    }

    /// Attach a message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Reject queries with an unset endpoint.
    ///
    /// The search itself treats unset endpoints as not-found; callers
    /// that want a hard error surface can validate first.
    pub fn validate(&self) -> Result<()> {
        if self.from.is_unset() || self.to.is_unset() {
            return Err(Error::InvalidQuery {
                from: self.from,
                to: self.to,
            });
        }
        Ok(())
    }
}
