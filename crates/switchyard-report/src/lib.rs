//! Read-only reporting over switchyard networks.
//!
//! Everything here consumes the topology crate's read views: rendered
//! listings for consoles and a serializable snapshot model. Nothing in
//! this crate mutates a network.

mod render;
mod snapshot;

pub use render::{network_report, node_report};
pub use snapshot::{ClientRecord, NetworkSnapshot, NodeRecord, WirePeer, WireRecord};
