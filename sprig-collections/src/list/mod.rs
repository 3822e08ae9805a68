//! Node-based sequences.
//!
//! Both lists keep their nodes in a [`NodeStore`] and maintain `head`,
//! `end` and `size` incrementally:
//!
//! * `size` equals the number of nodes reachable from `head`;
//! * `head` is `None` exactly when `end` is `None`, exactly when `size == 0`;
//! * when non-empty, `end` is reachable from `head` and has no successor.
//!
//! `end` (and, for the doubly-linked list, every `prev`) is a lookup
//! accelerator only, never an ownership path.

mod doubly;
mod node;
mod singly;

use std::collections::VecDeque;
use std::iter::FusedIterator;

pub use crate::list::doubly::{DoublyLinkedList, IntoIter as DoublyIntoIter};
pub use crate::list::node::{DoublyNode, SinglyNode};
pub use crate::list::singly::{IntoIter as SinglyIntoIter, SinglyLinkedList};

use crate::error::{CollectionError, Result};
use crate::node_ref::{Node, NodeRef, NodeStore};

/// The sequence primitives a queue adapter needs from its storage.
///
/// Removing from an empty backend always fails with
/// [`CollectionError::EmptyCollection`].
pub trait Backend<T> {
    /// Links `datum` before the current front.
    fn prepend(&mut self, datum: T);

    /// Links `datum` after the current back.
    fn append(&mut self, datum: T);

    /// Removes and returns the front element.
    fn remove_front(&mut self) -> Result<T>;

    /// Removes and returns the back element.
    fn remove_back(&mut self) -> Result<T>;

    /// Inserts `datum` so that it occupies position `idx` afterwards.
    fn insert(&mut self, idx: usize, datum: T) -> Result<()>;

    /// Peeks at the front element.
    fn front(&self) -> Option<&T>;

    /// Peeks at the back element.
    fn back(&self) -> Option<&T>;

    /// The number of elements.
    fn len(&self) -> usize;

    /// Whether the backend holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the elements from front to back.
    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_>;
}

/// Forward iterator over the payloads of a linked list.
pub struct Iter<'a, N> {
    store: &'a NodeStore<N>,
    cursor: Option<NodeRef>,
    remaining: usize,
}

impl<'a, N> Iter<'a, N> {
    pub(crate) fn new(store: &'a NodeStore<N>, head: Option<NodeRef>, size: usize) -> Self {
        Iter {
            store,
            cursor: head,
            remaining: size,
        }
    }
}

impl<'a, N: Node> Iterator for Iter<'a, N> {
    type Item = &'a N::Datum;

    fn next(&mut self) -> Option<Self::Item> {
        let store = self.store;
        let node = &store[self.cursor?];
        self.cursor = node.next();
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.datum())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, N: Node> ExactSizeIterator for Iter<'a, N> {}

impl<'a, N: Node> FusedIterator for Iter<'a, N> {}

impl<'a, N> Clone for Iter<'a, N> {
    fn clone(&self) -> Self {
        Iter {
            store: self.store,
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<T> Backend<T> for VecDeque<T> {
    fn prepend(&mut self, datum: T) {
        self.push_front(datum);
    }

    fn append(&mut self, datum: T) {
        self.push_back(datum);
    }

    fn remove_front(&mut self) -> Result<T> {
        self.pop_front().ok_or(CollectionError::EmptyCollection)
    }

    fn remove_back(&mut self) -> Result<T> {
        self.pop_back().ok_or(CollectionError::EmptyCollection)
    }

    fn insert(&mut self, idx: usize, datum: T) -> Result<()> {
        let len = VecDeque::len(self);
        if idx > len {
            return Err(CollectionError::index(idx, len));
        }
        VecDeque::insert(self, idx, datum);
        Ok(())
    }

    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }

    fn back(&self) -> Option<&T> {
        VecDeque::back(self)
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}
