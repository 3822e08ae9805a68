//! A library of node-based sequences and an ordered, path-addressable
//! multiway tree, with queue adapters built on the list backends.

#![warn(missing_docs)]

pub mod adt;
pub mod error;
pub mod list;
pub mod node_ref;
pub mod sort;
pub mod tree;
pub mod visualization;

pub use crate::error::{CollectionError, Result};
pub use crate::list::{Backend, DoublyLinkedList, SinglyLinkedList};
pub use crate::tree::{Tree, TreeNode};
