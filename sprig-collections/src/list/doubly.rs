use std::fmt::{Debug, Display, Formatter};
use std::mem;

use log::trace;

use crate::error::{CollectionError, Result};
use crate::list::node::DoublyNode;
use crate::list::{Backend, Iter};
use crate::node_ref::{NodeRef, NodeStore};

/// A doubly-linked list.
///
/// Every node carries a non-owning back reference, which makes removal
/// from either end O(1) and lets indexed access walk from whichever end
/// is closer.
///
/// For every adjacent pair `n.next.prev == n`; `head.prev` and `end.next`
/// are `None`.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    nodes: NodeStore<DoublyNode<T>>,
    head: Option<NodeRef>,
    end: Option<NodeRef>,
    size: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        DoublyLinkedList::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        DoublyLinkedList {
            nodes: NodeStore::new(),
            head: None,
            end: None,
            size: 0,
        }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the list has no elements.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The first node, if any.
    pub fn head(&self) -> Option<NodeRef> {
        self.head
    }

    /// The last node, if any.
    pub fn end(&self) -> Option<NodeRef> {
        self.end
    }

    /// Looks up a node by handle.
    pub fn node(&self, ptr: NodeRef) -> Option<&DoublyNode<T>> {
        self.nodes.read(ptr)
    }

    /// Peeks at the first payload.
    pub fn front(&self) -> Option<&T> {
        self.head.map(|ptr| &self.nodes[ptr].datum)
    }

    /// Peeks at the last payload.
    pub fn back(&self) -> Option<&T> {
        self.end.map(|ptr| &self.nodes[ptr].datum)
    }

    /// Alias of [`back`](Self::back).
    pub fn last(&self) -> Option<&T> {
        self.back()
    }

    /// Links `datum` before the current head.
    pub fn prepend(&mut self, datum: T) {
        self.prepend_node(DoublyNode::new(datum));
    }

    /// Links an existing node before the current head.
    pub fn prepend_node(&mut self, mut node: DoublyNode<T>) {
        node.prev = None;
        node.next = self.head;
        let id = node.id;
        let ptr = self.nodes.insert(node);
        match self.head {
            Some(head) => self.nodes[head].prev = Some(ptr),
            None => self.end = Some(ptr),
        }
        self.head = Some(ptr);
        self.size += 1;
        trace!("prepended node {} at slot {}", id, ptr.slot());
    }

    /// Links `datum` after the current end.
    pub fn append(&mut self, datum: T) {
        self.append_node(DoublyNode::new(datum));
    }

    /// Links an existing node after the current end.
    pub fn append_node(&mut self, mut node: DoublyNode<T>) {
        node.prev = self.end;
        node.next = None;
        let id = node.id;
        let ptr = self.nodes.insert(node);
        match self.end {
            Some(end) => self.nodes[end].next = Some(ptr),
            None => self.head = Some(ptr),
        }
        self.end = Some(ptr);
        self.size += 1;
        trace!("appended node {} at slot {}", id, ptr.slot());
    }

    /// Removes and returns the first payload.
    pub fn remove_front(&mut self) -> Result<T> {
        let head = self.head.ok_or(CollectionError::EmptyCollection)?;
        Ok(self.unlink(head).datum)
    }

    /// Removes and returns the last payload in O(1).
    pub fn remove_back(&mut self) -> Result<T> {
        let end = self.end.ok_or(CollectionError::EmptyCollection)?;
        Ok(self.unlink(end).datum)
    }

    /// Removes and returns the last payload, like `pop()` without an index.
    pub fn pop(&mut self) -> Result<T> {
        self.remove_back()
    }

    /// Returns the payload at `idx`.
    pub fn get(&self, idx: usize) -> Result<&T> {
        let ptr = self.locate(idx)?;
        Ok(&self.nodes[ptr].datum)
    }

    /// Returns the payload at `idx` mutably.
    pub fn get_mut(&mut self, idx: usize) -> Result<&mut T> {
        let ptr = self.locate(idx)?;
        Ok(&mut self.nodes[ptr].datum)
    }

    /// Replaces the payload at `idx`, returning the previous one.
    pub fn set(&mut self, idx: usize, datum: T) -> Result<T> {
        let slot = self.get_mut(idx)?;
        Ok(mem::replace(slot, datum))
    }

    /// Inserts `datum` so that it occupies position `idx` afterwards.
    /// Valid positions are `0..=len`.
    pub fn insert(&mut self, idx: usize, datum: T) -> Result<()> {
        self.insert_node(idx, DoublyNode::new(datum))
    }

    /// Inserts an existing node so that it occupies position `idx` afterwards.
    pub fn insert_node(&mut self, idx: usize, mut node: DoublyNode<T>) -> Result<()> {
        if idx > self.size {
            return Err(CollectionError::index(idx, self.size));
        }
        if idx == 0 {
            self.prepend_node(node);
            return Ok(());
        }
        if idx == self.size {
            self.append_node(node);
            return Ok(());
        }

        // Both neighbours exist here: 0 < idx < size.
        let next = self.locate(idx)?;
        let prev = self.nodes[next].prev;
        node.prev = prev;
        node.next = Some(next);
        let id = node.id;
        let ptr = self.nodes.insert(node);
        self.nodes[next].prev = Some(ptr);
        if let Some(prev) = prev {
            self.nodes[prev].next = Some(ptr);
        }
        self.size += 1;
        trace!("inserted node {} at index {}", id, idx);
        Ok(())
    }

    /// Removes and returns the payload at `idx`.
    pub fn remove_at(&mut self, idx: usize) -> Result<T> {
        let ptr = self.locate(idx)?;
        Ok(self.unlink(ptr).datum)
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.end = None;
        self.size = 0;
    }

    /// Iterates over the payloads from head to end.
    pub fn iter(&self) -> Iter<'_, DoublyNode<T>> {
        Iter::new(&self.nodes, self.head, self.size)
    }

    fn unlink(&mut self, ptr: NodeRef) -> DoublyNode<T> {
        let node = self.nodes.take(ptr);
        match node.prev {
            Some(prev) => self.nodes[prev].next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.nodes[next].prev = node.prev,
            None => self.end = node.prev,
        }
        self.size -= 1;
        trace!("unlinked node {} from slot {}", node.id, ptr.slot());
        node
    }

    fn locate(&self, idx: usize) -> Result<NodeRef> {
        if idx >= self.size {
            return Err(CollectionError::index(idx, self.size));
        }
        let cursor = if idx <= self.size / 2 {
            let mut cursor = self.head;
            for _ in 0..idx {
                cursor = cursor.and_then(|ptr| self.nodes[ptr].next);
            }
            cursor
        } else {
            let mut cursor = self.end;
            for _ in idx + 1..self.size {
                cursor = cursor.and_then(|ptr| self.nodes[ptr].prev);
            }
            cursor
        };
        cursor.ok_or_else(|| CollectionError::index(idx, self.size))
    }
}

impl<T> Backend<T> for DoublyLinkedList<T> {
    fn prepend(&mut self, datum: T) {
        DoublyLinkedList::prepend(self, datum)
    }

    fn append(&mut self, datum: T) {
        DoublyLinkedList::append(self, datum)
    }

    fn remove_front(&mut self) -> Result<T> {
        DoublyLinkedList::remove_front(self)
    }

    fn remove_back(&mut self) -> Result<T> {
        DoublyLinkedList::remove_back(self)
    }

    fn insert(&mut self, idx: usize, datum: T) -> Result<()> {
        DoublyLinkedList::insert(self, idx, datum)
    }

    fn front(&self) -> Option<&T> {
        DoublyLinkedList::front(self)
    }

    fn back(&self) -> Option<&T> {
        DoublyLinkedList::back(self)
    }

    fn len(&self) -> usize {
        self.size
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T: Display> Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (idx, datum) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{}", datum)?;
        }
        Ok(())
    }
}

impl<T: Debug> Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for datum in iter {
            self.append(datum);
        }
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for DoublyLinkedList<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, DoublyNode<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains a [`DoublyLinkedList`] from the head.
pub struct IntoIter<T>(DoublyLinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.remove_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.size, Some(self.0.size))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for DoublyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
