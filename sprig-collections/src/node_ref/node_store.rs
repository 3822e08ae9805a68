use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

use generational_arena::Arena;

use crate::node_ref::r#impl::NodeRef;

static NEXT_STORE: AtomicU64 = AtomicU64::new(0);

/// A generational slot arena owning every node of one collection.
///
/// Links between nodes are [`NodeRef`] handles into the store. Deleting a
/// node bumps its slot's generation, so a handle kept past the deletion
/// reads `None` even after the slot is reused. Every store carries its own
/// tag and rejects handles issued by any other store; a cloned store keeps
/// the tag, since its handles name the same positions.
#[derive(Debug, Clone)]
pub struct NodeStore<N> {
    arena: Arena<N>,
    tag: u64,
}

impl<N> Default for NodeStore<N> {
    fn default() -> Self {
        NodeStore::new()
    }
}

impl<N> NodeStore<N> {
    /// Creates an empty store.
    pub fn new() -> Self {
        NodeStore {
            arena: Arena::new(),
            tag: NEXT_STORE.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Inserts a new node into the store and returns the handle to it.
    pub fn insert(&mut self, node: N) -> NodeRef {
        NodeRef {
            index: self.arena.insert(node),
            store: self.tag,
        }
    }

    /// Reads a node by its handle.
    pub fn read(&self, ptr: NodeRef) -> Option<&N> {
        if ptr.store != self.tag {
            return None;
        }
        self.arena.get(ptr.index)
    }

    /// Reads a node mutably by its handle.
    pub fn read_mut(&mut self, ptr: NodeRef) -> Option<&mut N> {
        if ptr.store != self.tag {
            return None;
        }
        self.arena.get_mut(ptr.index)
    }

    /// Deletes the node with the provided handle, returning it.
    /// The slot is recycled by a later insert under a new generation.
    pub fn delete(&mut self, ptr: NodeRef) -> Option<N> {
        if ptr.store != self.tag {
            return None;
        }
        self.arena.remove(ptr.index)
    }

    /// Deletes the node with the provided handle, which must be live.
    ///
    /// # Panics
    ///
    /// Panics if the handle does not name a live node.
    pub fn take(&mut self, ptr: NodeRef) -> N {
        match self.delete(ptr) {
            Some(node) => node,
            None => panic!("dangling node reference {:?}", ptr),
        }
    }

    /// The number of live nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the store holds no live nodes.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Drops every node. Handles issued before the call stop resolving.
    pub fn clear(&mut self) {
        // Removing one by one moves every slot to a fresh generation.
        let live: Vec<_> = self.arena.iter().map(|(index, _)| index).collect();
        for index in live {
            self.arena.remove(index);
        }
    }
}

impl<N> Index<NodeRef> for NodeStore<N> {
    type Output = N;

    fn index(&self, ptr: NodeRef) -> &N {
        match self.read(ptr) {
            Some(node) => node,
            None => panic!("dangling node reference {:?}", ptr),
        }
    }
}

impl<N> IndexMut<NodeRef> for NodeStore<N> {
    fn index_mut(&mut self, ptr: NodeRef) -> &mut N {
        match self.read_mut(ptr) {
            Some(node) => node,
            None => panic!("dangling node reference {:?}", ptr),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::node_ref::NodeStore;

    #[test]
    fn test_insert_read_delete() {
        let mut store = NodeStore::new();
        let a = store.insert("a");
        let b = store.insert("b");
        assert_eq!(store.len(), 2);
        assert_eq!(store.read(a), Some(&"a"));
        assert_eq!(store[b], "b");

        assert_eq!(store.delete(a), Some("a"));
        assert_eq!(store.read(a), None);
        assert_eq!(store.delete(a), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_reused_slot_rejects_old_handle() {
        let mut store = NodeStore::new();
        let a = store.insert(1);
        store.insert(2);
        store.delete(a);
        let c = store.insert(3);
        assert_eq!(c.slot(), a.slot());
        assert_ne!(c, a);
        assert_eq!(store.read(a), None);
        assert_eq!(store.read_mut(a), None);
        assert_eq!(store.delete(a), None);
        assert_eq!(store[c], 3);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_foreign_handle() {
        let mut first = NodeStore::new();
        let mut second = NodeStore::new();
        let a = first.insert('a');
        second.insert('b');
        assert_eq!(second.read(a), None);
        assert_eq!(second.delete(a), None);
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn test_clone_keeps_handles() {
        let mut store = NodeStore::new();
        let a = store.insert(1);
        let copy = store.clone();
        assert_eq!(copy.read(a), Some(&1));
    }

    #[test]
    #[should_panic(expected = "dangling node reference")]
    fn test_index_dangling() {
        let mut store = NodeStore::new();
        let a = store.insert(1);
        store.delete(a);
        let _ = store[a];
    }

    #[test]
    fn test_clear() {
        let mut store = NodeStore::new();
        let a = store.insert(1);
        store.insert(2);
        store.clear();
        assert!(store.is_empty());
        let b = store.insert(5);
        assert_eq!(store.read(a), None);
        assert_eq!(store[b], 5);
    }
}
