use std::iter::FusedIterator;

use crate::tree::{Address, Tree, TreeNode};

/// Pre-order iterator over the nodes of a [`Tree`].
pub struct Nodes<'a, T> {
    stack: Vec<&'a Tree<T>>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Nodes { stack: vec![tree] }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a TreeNode<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.stack.pop()?;
        // reversed so the first child is popped first
        self.stack.extend(tree.children.iter().rev());
        Some(&tree.root)
    }
}

impl<'a, T> FusedIterator for Nodes<'a, T> {}

/// Pre-order iterator yielding each node of a [`Tree`] with its address.
pub struct NodesWithAddress<'a, T> {
    stack: Vec<(Address, &'a Tree<T>)>,
}

impl<'a, T> NodesWithAddress<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        NodesWithAddress {
            stack: vec![(Vec::new(), tree)],
        }
    }
}

impl<'a, T> Iterator for NodesWithAddress<'a, T> {
    type Item = (Address, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let (address, tree) = self.stack.pop()?;
        for (idx, child) in tree.children.iter().enumerate().rev() {
            let mut child_address = Vec::with_capacity(address.len() + 1);
            child_address.extend_from_slice(&address);
            child_address.push(idx);
            self.stack.push((child_address, child));
        }
        Some((address, &tree.root))
    }
}

impl<'a, T> FusedIterator for NodesWithAddress<'a, T> {}

/// Pre-order iterator over the payloads of a [`Tree`].
pub struct Iter<'a, T>(Nodes<'a, T>);

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>) -> Self {
        Iter(Nodes::new(tree))
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(TreeNode::datum)
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}
