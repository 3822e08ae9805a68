use std::fmt::{Debug, Display, Formatter};
use std::marker::PhantomData;

use crate::error::{CollectionError, Result};
use crate::list::{Backend, DoublyLinkedList};

/// A FIFO queue over any [`Backend`].
///
/// New elements enter at the backend's front and leave from its back, so
/// `dequeue` costs whatever `remove_back` costs: O(1) on a
/// [`DoublyLinkedList`] or a `VecDeque`, O(n) on a
/// [`SinglyLinkedList`](crate::list::SinglyLinkedList).
pub struct Queue<T, B = DoublyLinkedList<T>> {
    backend: B,
    _marker: PhantomData<T>,
}

impl<T, B: Backend<T> + Default> Queue<T, B> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Queue::with_backend(B::default())
    }
}

impl<T, B: Backend<T> + Default> Default for Queue<T, B> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T, B: Backend<T>> Queue<T, B> {
    /// Wraps an existing backend; its back is the front of the queue.
    pub fn with_backend(backend: B) -> Self {
        Queue {
            backend,
            _marker: PhantomData,
        }
    }

    /// Adds an element at the rear of the queue.
    pub fn enqueue(&mut self, datum: T) {
        self.backend.prepend(datum);
    }

    /// Removes the element at the front of the queue.
    pub fn dequeue(&mut self) -> Result<T> {
        self.backend.remove_back()
    }

    /// Peeks at the element that `dequeue` would return.
    pub fn front(&self) -> Result<&T> {
        self.backend.back().ok_or(CollectionError::EmptyCollection)
    }

    /// The number of queued elements.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Iterates over the elements in backend order: the most recently
    /// enqueued element first, the front of the queue last.
    pub fn elements(&self) -> impl Iterator<Item = &T> + '_ {
        self.backend.items()
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Unwraps the underlying backend.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

/// Builds a queue whose backend holds the elements in the given order, so
/// the last element yielded is the first to be dequeued.
impl<T, B: Backend<T> + Default> FromIterator<T> for Queue<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut backend = B::default();
        for datum in iter {
            backend.append(datum);
        }
        Queue::with_backend(backend)
    }
}

impl<T: PartialEq, B: Backend<T>> PartialEq for Queue<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.elements().eq(other.elements())
    }
}

impl<T: Debug, B: Backend<T>> Debug for Queue<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.elements()).finish()
    }
}

impl<T: Display, B: Backend<T>> Display for Queue<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (idx, datum) in self.elements().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", datum)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::adt::Queue;
    use crate::error::CollectionError;
    use crate::list::{Backend, DoublyLinkedList, SinglyLinkedList};

    fn elements<B: Backend<i32>>(queue: &Queue<i32, B>) -> Vec<i32> {
        queue.elements().copied().collect()
    }

    fn exercise<B: Backend<i32> + Default>() {
        let mut q1: Queue<i32, B> = [1, 2, 3, 4].into_iter().collect();
        assert_eq!(elements(&q1), vec![1, 2, 3, 4]);
        assert_eq!(q1.len(), 4);

        q1.enqueue(5);
        assert_eq!(elements(&q1), vec![5, 1, 2, 3, 4]);
        assert_eq!(q1.len(), 5);
        assert_eq!(q1.dequeue(), Ok(4));
        assert_eq!(q1.len(), 4);
        assert_eq!(elements(&q1), vec![5, 1, 2, 3]);
        assert_eq!(q1.front(), Ok(&3));

        let mut q2: Queue<i32, B> = Queue::new();
        assert_eq!(elements(&q2), Vec::<i32>::new());
        assert!(q2.is_empty());
        assert_eq!(q2.front(), Err(CollectionError::EmptyCollection));
        assert_eq!(q2.dequeue(), Err(CollectionError::EmptyCollection));

        q2.enqueue(1);
        assert_eq!(elements(&q2), vec![1]);
        assert!(!q2.is_empty());
    }

    #[test]
    fn test_queue_backends() {
        exercise::<SinglyLinkedList<i32>>();
        exercise::<DoublyLinkedList<i32>>();
        exercise::<VecDeque<i32>>();
    }

    #[test]
    fn test_fifo_order() {
        let mut queue: Queue<&str> = Queue::new();
        queue.enqueue("first");
        queue.enqueue("second");
        queue.enqueue("third");
        assert_eq!(queue.dequeue(), Ok("first"));
        assert_eq!(queue.dequeue(), Ok("second"));
        assert_eq!(queue.dequeue(), Ok("third"));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_display_and_eq() {
        let queue: Queue<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(queue.to_string(), "[1, 2, 3]");
        assert_eq!(format!("{:?}", queue), "[1, 2, 3]");
        let other: Queue<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(queue, other);
        assert_eq!(queue.into_backend(), DoublyLinkedList::from([1, 2, 3]));
    }
}
