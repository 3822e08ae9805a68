use crate::node_ref::{Node, NodeId, NodeRef};

/// A node of a [`SinglyLinkedList`](crate::list::SinglyLinkedList).
#[derive(Debug, Clone)]
pub struct SinglyNode<T> {
    pub(crate) id: NodeId,
    pub(crate) datum: T,
    pub(crate) next: Option<NodeRef>,
}

impl<T> SinglyNode<T> {
    /// Wraps a payload in an unlinked node with a fresh identifier.
    pub fn new(datum: T) -> Self {
        SinglyNode::with_id(NodeId::new(), datum)
    }

    /// Wraps a payload in an unlinked node with the given identifier.
    pub fn with_id(id: NodeId, datum: T) -> Self {
        SinglyNode {
            id,
            datum,
            next: None,
        }
    }

    /// The diagnostic identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The payload.
    pub fn datum(&self) -> &T {
        &self.datum
    }

    /// The successor, if linked.
    pub fn next(&self) -> Option<NodeRef> {
        self.next
    }

    /// Unwraps the payload.
    pub fn into_datum(self) -> T {
        self.datum
    }
}

impl<T> From<T> for SinglyNode<T> {
    fn from(datum: T) -> Self {
        SinglyNode::new(datum)
    }
}

impl<T> Node for SinglyNode<T> {
    type Datum = T;

    fn id(&self) -> NodeId {
        self.id
    }

    fn datum(&self) -> &T {
        &self.datum
    }

    fn next(&self) -> Option<NodeRef> {
        self.next
    }
}

/// A node of a [`DoublyLinkedList`](crate::list::DoublyLinkedList).
#[derive(Debug, Clone)]
pub struct DoublyNode<T> {
    pub(crate) id: NodeId,
    pub(crate) datum: T,
    pub(crate) prev: Option<NodeRef>,
    pub(crate) next: Option<NodeRef>,
}

impl<T> DoublyNode<T> {
    /// Wraps a payload in an unlinked node with a fresh identifier.
    pub fn new(datum: T) -> Self {
        DoublyNode::with_id(NodeId::new(), datum)
    }

    /// Wraps a payload in an unlinked node with the given identifier.
    pub fn with_id(id: NodeId, datum: T) -> Self {
        DoublyNode {
            id,
            datum,
            prev: None,
            next: None,
        }
    }

    /// The diagnostic identifier.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The payload.
    pub fn datum(&self) -> &T {
        &self.datum
    }

    /// The predecessor, if linked.
    pub fn prev(&self) -> Option<NodeRef> {
        self.prev
    }

    /// The successor, if linked.
    pub fn next(&self) -> Option<NodeRef> {
        self.next
    }

    /// Unwraps the payload.
    pub fn into_datum(self) -> T {
        self.datum
    }
}

impl<T> From<T> for DoublyNode<T> {
    fn from(datum: T) -> Self {
        DoublyNode::new(datum)
    }
}

impl<T> Node for DoublyNode<T> {
    type Datum = T;

    fn id(&self) -> NodeId {
        self.id
    }

    fn datum(&self) -> &T {
        &self.datum
    }

    fn next(&self) -> Option<NodeRef> {
        self.next
    }
}
