//! An ordered multiway tree addressed by child-index paths.
//!
//! An address is a sequence of child indices walked from the root; `[]`
//! names the root itself. Addresses are structural, not identifiers:
//! inserting or deleting a sibling shifts the indices of every later
//! sibling at that level, so callers holding an address across a mutation
//! should recompute it with [`Tree::search`].

mod hash;
mod iter;
mod traits;
mod value;

use std::fmt::{Display, Formatter};

use log::debug;

pub use crate::tree::hash::{new_blake3, Blake3Hash, HashRoot};
pub use crate::tree::iter::{Iter, Nodes, NodesWithAddress};
pub use crate::tree::traits::{Hashable, Hasher, MerkleTree};

use crate::error::{CollectionError, Result};
use crate::node_ref::NodeId;

/// A child-index path from the root of a [`Tree`].
pub type Address = Vec<usize>;

/// The payload wrapper held at every position of a [`Tree`].
///
/// Equality compares payloads only; the identifier is diagnostic.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    id: NodeId,
    datum: T,
}

impl<T> TreeNode<T> {
    /// Wraps a payload with a fresh identifier.
    pub fn new(datum: T) -> Self {
        TreeNode::with_id(NodeId::new(), datum)
    }

    /// Wraps a payload with the given identifier.
    pub fn with_id(id: NodeId, datum: T) -> Self {
        TreeNode { id, datum }
    }

    /// The diagnostic identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The payload.
    pub fn datum(&self) -> &T {
        &self.datum
    }

    /// The payload, mutably.
    pub fn datum_mut(&mut self) -> &mut T {
        &mut self.datum
    }

    /// Unwraps the payload.
    pub fn into_datum(self) -> T {
        self.datum
    }
}

impl<T> From<T> for TreeNode<T> {
    fn from(datum: T) -> Self {
        TreeNode::new(datum)
    }
}

impl<T: PartialEq> PartialEq for TreeNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.datum == other.datum
    }
}

impl<T: Eq> Eq for TreeNode<T> {}

/// A root node plus an ordered sequence of child subtrees, each owned
/// exclusively by its parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: TreeNode<T>,
    children: Vec<Tree<T>>,
}

impl<T> From<T> for Tree<T> {
    fn from(datum: T) -> Self {
        Tree::leaf(datum)
    }
}

impl<T> From<TreeNode<T>> for Tree<T> {
    fn from(root: TreeNode<T>) -> Self {
        Tree {
            root,
            children: Vec::new(),
        }
    }
}

impl<T> Tree<T> {
    /// A single-node tree.
    pub fn leaf(datum: T) -> Self {
        Tree::from(TreeNode::new(datum))
    }

    /// Builds a tree from a root payload and children given either as raw
    /// payloads or as prebuilt subtrees. Child order is kept and defines
    /// the addressing.
    pub fn new<I>(datum: T, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tree<T>>,
    {
        Tree::with_root(TreeNode::new(datum), children)
    }

    /// Like [`Tree::new`] but with a prebuilt root node.
    pub fn with_root<I>(root: TreeNode<T>, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Tree<T>>,
    {
        Tree {
            root,
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// The root node.
    pub fn root(&self) -> &TreeNode<T> {
        &self.root
    }

    /// The root payload.
    pub fn root_datum(&self) -> &T {
        &self.root.datum
    }

    /// The child subtrees, in address order.
    pub fn children(&self) -> &[Tree<T>] {
        &self.children
    }

    /// Whether the root has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.iter_nodes().count()
    }

    /// Walks `address` from the root and returns the subtree it names.
    pub fn resolve(&self, address: &[usize]) -> Result<&Tree<T>> {
        let mut cursor = self;
        for (depth, &idx) in address.iter().enumerate() {
            cursor = cursor
                .children
                .get(idx)
                .ok_or_else(|| CollectionError::address(address, depth))?;
        }
        Ok(cursor)
    }

    /// Mutable counterpart of [`Tree::resolve`].
    pub fn resolve_mut(&mut self, address: &[usize]) -> Result<&mut Tree<T>> {
        self.walk_mut(address, address.len())
    }

    // Follows the first `steps` components of `address`; failures report
    // the whole address.
    fn walk_mut(&mut self, address: &[usize], steps: usize) -> Result<&mut Tree<T>> {
        let mut cursor = self;
        for (depth, &idx) in address[..steps].iter().enumerate() {
            cursor = cursor
                .children
                .get_mut(idx)
                .ok_or_else(|| CollectionError::address(address, depth))?;
        }
        Ok(cursor)
    }

    /// Inserts `elem` into the children of the subtree named by all but the
    /// last component of `address`, at the position given by the last
    /// component (`0..=len`). Later siblings shift up by one.
    pub fn insert(&mut self, address: &[usize], elem: impl Into<Tree<T>>) -> Result<()> {
        let (prefix, idx) = split_address(address, "cannot insert at the root address")?;
        let parent = self.walk_mut(address, prefix.len())?;
        if idx > parent.children.len() {
            return Err(CollectionError::address(address, prefix.len()));
        }
        let elem = elem.into();
        debug!("inserting subtree {} at {:?}", elem.root.id, address);
        parent.children.insert(idx, elem);
        Ok(())
    }

    /// Detaches and returns the subtree at `address`. Later siblings shift
    /// down by one.
    pub fn remove(&mut self, address: &[usize]) -> Result<Tree<T>> {
        let (prefix, idx) = split_address(address, "cannot delete the root of a tree")?;
        let parent = self.walk_mut(address, prefix.len())?;
        if idx >= parent.children.len() {
            return Err(CollectionError::address(address, prefix.len()));
        }
        let removed = parent.children.remove(idx);
        debug!("removed subtree {} at {:?}", removed.root.id, address);
        Ok(removed)
    }

    /// Deletes the subtree at `address` and returns its root payload.
    pub fn delete(&mut self, address: &[usize]) -> Result<T> {
        self.remove(address).map(|subtree| subtree.root.datum)
    }

    /// The number of nodes on the longest root-to-leaf path; a single node
    /// has height 1.
    pub fn height(&self) -> usize {
        self.iter_nodes_with_address()
            .map(|(address, _)| address.len() + 1)
            .max()
            .unwrap_or(1)
    }

    /// Pre-order, depth-first iteration over the nodes.
    pub fn iter_nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self)
    }

    /// Pre-order iteration yielding each node with its address.
    pub fn iter_nodes_with_address(&self) -> NodesWithAddress<'_, T> {
        NodesWithAddress::new(self)
    }

    /// Pre-order iteration over the payloads.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }
}

impl<T: PartialEq> Tree<T> {
    /// The address of the first node, in pre-order, whose payload equals
    /// `datum`.
    pub fn search(&self, datum: &T) -> Option<Address> {
        self.iter_nodes_with_address()
            .find(|(_, node)| node.datum == *datum)
            .map(|(address, _)| address)
    }
}

impl<T: Display> Tree<T> {
    /// The indented box-drawing form, identical to the `Display` output.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn fmt_children(&self, f: &mut Formatter<'_>, indent: &str) -> std::fmt::Result {
        let last = self.children.len().saturating_sub(1);
        for (idx, child) in self.children.iter().enumerate() {
            let (branch, continuation) = if idx < last {
                ("├── ", "│   ")
            } else {
                ("└── ", "    ")
            };
            let nested = format!("{}{}", indent, continuation);
            let label = child
                .root
                .datum
                .to_string()
                .replace('\n', &format!("\n{}", nested));
            write!(f, "\n{}{}{}", indent, branch, label)?;
            child.fmt_children(f, &nested)?;
        }
        Ok(())
    }
}

impl<T: Display> Display for Tree<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root.datum)?;
        self.fmt_children(f, "")
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn split_address<'a>(address: &'a [usize], op: &'static str) -> Result<(&'a [usize], usize)> {
    match address.split_last() {
        Some((&idx, prefix)) => Ok((prefix, idx)),
        None => Err(CollectionError::InvalidOperation(op)),
    }
}
