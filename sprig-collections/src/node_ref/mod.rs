//! Primitives for referencing list nodes held in a slot arena, so that
//! forward and backward links are plain indices rather than pointers.

mod r#impl;
mod node_store;

pub use crate::node_ref::r#impl::{Node, NodeId, NodeRef};
pub use crate::node_ref::node_store::NodeStore;
