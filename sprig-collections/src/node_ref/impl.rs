use std::fmt::{Display, Formatter};

use generational_arena::Index;
use uuid::Uuid;

/// The trait that all list nodes implement.
///
/// Forward traversal only needs a payload and an optional successor, so
/// iteration is written once against this trait for every list kind.
pub trait Node {
    /// The payload carried by the node.
    type Datum;

    /// The diagnostic identifier of the node.
    fn id(&self) -> NodeId;

    /// The payload.
    fn datum(&self) -> &Self::Datum;

    /// The successor in the forward chain, if any.
    fn next(&self) -> Option<NodeRef>;
}

/// A handle to a node slot in a [`NodeStore`](crate::node_ref::NodeStore).
///
/// A handle names one node of one store. It stops resolving once that node
/// is deleted, even if the slot is later reused, and it never resolves
/// against a different store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    pub(crate) index: Index,
    pub(crate) store: u64,
}

impl NodeRef {
    /// The slot index inside the issuing store.
    pub fn slot(&self) -> usize {
        self.index.into_raw_parts().0
    }

    /// The generation of the slot when this handle was issued.
    pub fn generation(&self) -> u64 {
        self.index.into_raw_parts().1
    }
}

/// A diagnostic-only node identifier.
///
/// It takes part in no equality check and no structural invariant; it is
/// there for logging and for naming nodes in graph exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Generates a fresh random identifier.
    pub fn new() -> Self {
        NodeId(Uuid::new_v4())
    }

    /// Wraps an existing identifier.
    pub fn from_uuid(uuid: Uuid) -> Self {
        NodeId(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        NodeId::new()
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
