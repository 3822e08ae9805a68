use std::fmt::{Debug, Display, Formatter};
use std::mem;

use log::trace;

use crate::error::{CollectionError, Result};
use crate::list::node::SinglyNode;
use crate::list::{Backend, Iter};
use crate::node_ref::{NodeRef, NodeStore};

/// A singly-linked list with O(1) access to both ends for insertion.
///
/// `end` tracks the last node so that [`append`](Self::append) never walks
/// the chain. Removing from the back still has to find the predecessor of
/// `end` and is O(n); use a [`DoublyLinkedList`](crate::list::DoublyLinkedList)
/// when that matters.
#[derive(Clone)]
pub struct SinglyLinkedList<T> {
    nodes: NodeStore<SinglyNode<T>>,
    head: Option<NodeRef>,
    end: Option<NodeRef>,
    size: usize,
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        SinglyLinkedList::new()
    }
}

impl<T> SinglyLinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        SinglyLinkedList {
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
    pub fn node(&self, ptr: NodeRef) -> Option<&SinglyNode<T>> {
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
        self.prepend_node(SinglyNode::new(datum));
    }

    /// Links an existing node before the current head.
    pub fn prepend_node(&mut self, mut node: SinglyNode<T>) {
        node.next = self.head;
        let id = node.id;
        let ptr = self.nodes.insert(node);
        if self.end.is_none() {
            self.end = Some(ptr);
        }
        self.head = Some(ptr);
        self.size += 1;
        trace!("prepended node {} at slot {}", id, ptr.slot());
    }

    /// Links `datum` after the current end.
    pub fn append(&mut self, datum: T) {
        self.append_node(SinglyNode::new(datum));
    }

    /// Links an existing node after the current end.
    pub fn append_node(&mut self, mut node: SinglyNode<T>) {
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
        let node = self.nodes.take(head);
        self.head = node.next;
        if self.head.is_none() {
            self.end = None;
        }
        self.size -= 1;
        trace!("removed head node {}", node.id);
        Ok(node.datum)
    }

    /// Removes and returns the last payload.
    ///
    /// This walks to the predecessor of `end` and is O(n).
    pub fn remove_back(&mut self) -> Result<T> {
        if self.size == 0 {
            return Err(CollectionError::EmptyCollection);
        }
        self.remove_at(self.size - 1)
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
        self.insert_node(idx, SinglyNode::new(datum))
    }

    /// Inserts an existing node so that it occupies position `idx` afterwards.
    pub fn insert_node(&mut self, idx: usize, mut node: SinglyNode<T>) -> Result<()> {
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

        //  idx-1       idx
        // [prev] -> [node] -> [prev.next]
        let prev = self.locate(idx - 1)?;
        node.next = self.nodes[prev].next;
        let id = node.id;
        let ptr = self.nodes.insert(node);
        self.nodes[prev].next = Some(ptr);
        self.size += 1;
        trace!("inserted node {} at index {}", id, idx);
        Ok(())
    }

    /// Removes and returns the payload at `idx`.
    pub fn remove_at(&mut self, idx: usize) -> Result<T> {
        if idx >= self.size {
            return Err(CollectionError::index(idx, self.size));
        }
        if idx == 0 {
            return self.remove_front();
        }

        let prev = self.locate(idx - 1)?;
        let target = self.nodes[prev]
            .next
            .ok_or_else(|| CollectionError::index(idx, self.size))?;
        let node = self.nodes.take(target);
        self.nodes[prev].next = node.next;
        if self.end == Some(target) {
            self.end = Some(prev);
        }
        self.size -= 1;
        trace!("removed node {} at index {}", node.id, idx);
        Ok(node.datum)
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = None;
        self.end = None;
        self.size = 0;
    }

    /// Iterates over the payloads from head to end.
    pub fn iter(&self) -> Iter<'_, SinglyNode<T>> {
        Iter::new(&self.nodes, self.head, self.size)
    }

    fn locate(&self, idx: usize) -> Result<NodeRef> {
        if idx >= self.size {
            return Err(CollectionError::index(idx, self.size));
        }
        let mut cursor = self.head;
        for _ in 0..idx {
            cursor = cursor.and_then(|ptr| self.nodes[ptr].next);
        }
        cursor.ok_or_else(|| CollectionError::index(idx, self.size))
    }
}

impl<T> Backend<T> for SinglyLinkedList<T> {
    fn prepend(&mut self, datum: T) {
        SinglyLinkedList::prepend(self, datum)
    }

    fn append(&mut self, datum: T) {
        SinglyLinkedList::append(self, datum)
    }

    fn remove_front(&mut self) -> Result<T> {
        SinglyLinkedList::remove_front(self)
    }

    fn remove_back(&mut self) -> Result<T> {
        SinglyLinkedList::remove_back(self)
    }

    fn insert(&mut self, idx: usize, datum: T) -> Result<()> {
        SinglyLinkedList::insert(self, idx, datum)
    }

    fn front(&self) -> Option<&T> {
        SinglyLinkedList::front(self)
    }

    fn back(&self) -> Option<&T> {
        SinglyLinkedList::back(self)
    }

    fn len(&self) -> usize {
        self.size
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T: Display> Display for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[head]->")?;
        for datum in self.iter() {
            write!(f, "[{}] ->", datum)?;
        }
        f.write_str("None")
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for SinglyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SinglyLinkedList<T> {}

impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for datum in iter {
            self.append(datum);
        }
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SinglyLinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T, const N: usize> From<[T; N]> for SinglyLinkedList<T> {
    fn from(arr: [T; N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a SinglyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, SinglyNode<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains a [`SinglyLinkedList`] from the head.
pub struct IntoIter<T>(SinglyLinkedList<T>);

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

impl<T> IntoIterator for SinglyLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}
