use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;

use log::trace;

use crate::error::{CollectionError, Result};
use crate::list::{Backend, DoublyLinkedList};

/// A max-priority queue of `(payload, priority)` pairs over any [`Backend`].
///
/// The backend knows nothing about priorities; this adapter keeps it sorted
/// ascending by priority from front to back, so the maximum always sits at
/// the back where `remove_back` can reach it. Among equal priorities the
/// element enqueued first is dequeued first.
pub struct PriorityQueue<T, P, B = DoublyLinkedList<(T, P)>> {
    backend: B,
    _marker: PhantomData<(T, P)>,
}

impl<T, P: Ord, B: Backend<(T, P)> + Default> PriorityQueue<T, P, B> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        PriorityQueue {
            backend: B::default(),
            _marker: PhantomData,
        }
    }
}

impl<T, P: Ord, B: Backend<(T, P)> + Default> Default for PriorityQueue<T, P, B> {
    fn default() -> Self {
        PriorityQueue::new()
    }
}

impl<T, P: Ord, B: Backend<(T, P)>> PriorityQueue<T, P, B> {
    /// Inserts `datum` before the first queued element whose priority is at
    /// least `priority`.
    pub fn enqueue(&mut self, datum: T, priority: P) -> Result<()> {
        let idx = self
            .backend
            .items()
            .position(|(_, queued)| *queued >= priority)
            .unwrap_or_else(|| self.backend.len());
        trace!("enqueueing at position {} of {}", idx, self.backend.len());
        self.backend.insert(idx, (datum, priority))
    }

    /// Removes the element with the highest priority.
    pub fn dequeue(&mut self) -> Result<(T, P)> {
        self.backend.remove_back()
    }

    /// Peeks at the element with the highest priority.
    pub fn front(&self) -> Result<&(T, P)> {
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

    /// Iterates over the elements in ascending priority.
    pub fn elements(&self) -> impl Iterator<Item = &(T, P)> + '_ {
        self.backend.items()
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

impl<T, P: Ord, B: Backend<(T, P)> + Default> FromIterator<(T, P)> for PriorityQueue<T, P, B> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let mut queue = PriorityQueue::new();
        for (datum, priority) in iter {
            let enqueued = queue.enqueue(datum, priority);
            debug_assert!(enqueued.is_ok(), "backend rejected an in-range insert: {:?}", enqueued);
        }
        queue
    }
}

impl<T: Debug, P: Debug + Ord, B: Backend<(T, P)>> Debug for PriorityQueue<T, P, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.elements()).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::adt::PriorityQueue;
    use crate::error::CollectionError;
    use crate::list::{Backend, DoublyLinkedList, SinglyLinkedList};

    type Entry = (char, i32);

    fn elements<B: Backend<Entry>>(queue: &PriorityQueue<char, i32, B>) -> Vec<Entry> {
        queue.elements().copied().collect()
    }

    fn exercise<B: Backend<Entry> + Default>() -> anyhow::Result<()> {
        let mut q: PriorityQueue<char, i32, B> =
            [('c', 1), ('d', 4), ('e', 2), ('b', 3)].into_iter().collect();

        assert_eq!(elements(&q), vec![('c', 1), ('e', 2), ('b', 3), ('d', 4)]);
        assert_eq!(q.len(), 4);
        assert_eq!(q.front()?, &('d', 4));
        assert_eq!(q.dequeue()?, ('d', 4));

        assert_eq!(elements(&q), vec![('c', 1), ('e', 2), ('b', 3)]);
        assert_eq!(q.len(), 3);
        assert_eq!(q.front()?, &('b', 3));

        q.enqueue('x', 0)?;
        q.enqueue('y', 4)?;
        q.enqueue('z', 2)?;
        assert_eq!(
            elements(&q),
            vec![('x', 0), ('c', 1), ('z', 2), ('e', 2), ('b', 3), ('y', 4)]
        );
        assert_eq!(q.len(), 6);

        for _ in 0..6 {
            q.dequeue()?;
        }
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), Err(CollectionError::EmptyCollection));
        assert_eq!(q.front(), Err(CollectionError::EmptyCollection));
        Ok(())
    }

    #[test]
    fn test_priority_queue_backends() -> anyhow::Result<()> {
        exercise::<SinglyLinkedList<Entry>>()?;
        exercise::<DoublyLinkedList<Entry>>()?;
        exercise::<VecDeque<Entry>>()?;
        Ok(())
    }

    #[test]
    fn test_ties_dequeue_in_arrival_order() -> anyhow::Result<()> {
        let mut q: PriorityQueue<&str, u8> = PriorityQueue::new();
        q.enqueue("first", 1)?;
        q.enqueue("second", 1)?;
        q.enqueue("urgent", 9)?;
        assert_eq!(q.dequeue()?.0, "urgent");
        assert_eq!(q.dequeue()?.0, "first");
        assert_eq!(q.dequeue()?.0, "second");
        Ok(())
    }

    #[test]
    fn test_debug() {
        let q: PriorityQueue<char, i32> = [('a', 2), ('b', 1)].into_iter().collect();
        assert_eq!(format!("{:?}", q), "[('b', 1), ('a', 2)]");
    }

    // Accepts appends but refuses every positional insert.
    #[derive(Default)]
    struct Rejecting(VecDeque<Entry>);

    impl Backend<Entry> for Rejecting {
        fn prepend(&mut self, datum: Entry) {
            self.0.push_front(datum);
        }

        fn append(&mut self, datum: Entry) {
            self.0.push_back(datum);
        }

        fn remove_front(&mut self) -> crate::Result<Entry> {
            self.0.pop_front().ok_or(CollectionError::EmptyCollection)
        }

        fn remove_back(&mut self) -> crate::Result<Entry> {
            self.0.pop_back().ok_or(CollectionError::EmptyCollection)
        }

        fn insert(&mut self, idx: usize, _datum: Entry) -> crate::Result<()> {
            Err(CollectionError::IndexOutOfRange {
                index: idx,
                len: self.0.len(),
            })
        }

        fn front(&self) -> Option<&Entry> {
            self.0.front()
        }

        fn back(&self) -> Option<&Entry> {
            self.0.back()
        }

        fn len(&self) -> usize {
            self.0.len()
        }

        fn items(&self) -> Box<dyn Iterator<Item = &Entry> + '_> {
            Box::new(self.0.iter())
        }
    }

    #[test]
    fn test_enqueue_reports_backend_failure() {
        let mut q: PriorityQueue<char, i32, Rejecting> = PriorityQueue::new();
        assert_eq!(
            q.enqueue('a', 1),
            Err(CollectionError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert!(q.is_empty());
    }

    #[test]
    #[should_panic(expected = "backend rejected an in-range insert")]
    fn test_collect_does_not_swallow_backend_failure() {
        let _: PriorityQueue<char, i32, Rejecting> = [('a', 1)].into_iter().collect();
    }
}
