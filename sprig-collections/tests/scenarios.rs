use pretty_assertions::assert_eq;

use sprig_collections::adt::{PriorityQueue, Queue};
use sprig_collections::list::{DoublyLinkedList, SinglyLinkedList};
use sprig_collections::sort::tim_sort;
use sprig_collections::visualization::ToGraphviz;
use sprig_collections::{CollectionError, Tree};

#[test]
fn numbered_tree_insert_and_delete() -> anyhow::Result<()> {
    let mut tree = Tree::new(1, [Tree::new(11, [111, 112]), Tree::new(12, [121, 122, 123])]);

    tree.insert(&[2], Tree::new(13, [131]))?;
    assert_eq!(tree.search(&131), Some(vec![2, 0]));
    assert_eq!(tree.height(), 3);

    assert_eq!(tree.delete(&[1])?, 12);
    assert_eq!(tree.search(&131), Some(vec![1, 0]));
    assert_eq!(tree.search(&121), None);
    assert_eq!(
        tree.to_string(),
        "1\n├── 11\n│   ├── 111\n│   └── 112\n└── 13\n    └── 131"
    );
    Ok(())
}

#[test]
fn doubly_remove_back_relinks() -> anyhow::Result<()> {
    let mut list = DoublyLinkedList::from([1, 2, 3]);
    assert_eq!(list.remove_back()?, 3);
    assert_eq!(list.to_string(), "1 -> 2");

    let end = list.end().and_then(|ptr| list.node(ptr)).map(|node| *node.datum());
    assert_eq!(end, Some(2));
    let tail = list.end().and_then(|ptr| list.node(ptr)).and_then(|node| node.next());
    assert_eq!(tail, None);

    assert_eq!(list.remove_back()?, 2);
    assert_eq!(list.remove_back()?, 1);
    assert_eq!(list.head(), None);
    assert_eq!(list.end(), None);
    assert_eq!(list.remove_back(), Err(CollectionError::EmptyCollection));
    Ok(())
}

#[test]
fn singly_display_and_tail_insert() -> anyhow::Result<()> {
    let mut list = SinglyLinkedList::from([1, 2]);
    list.insert(2, 3)?;
    list.append(4);
    assert_eq!(list.to_string(), "[head]->[1] ->[2] ->[3] ->[4] ->None");
    assert_eq!(list.back(), Some(&4));
    Ok(())
}

#[test]
fn priority_queue_orders_by_priority() -> anyhow::Result<()> {
    let mut queue: PriorityQueue<char, u32> = PriorityQueue::new();
    for (datum, priority) in [('c', 1), ('d', 4), ('e', 2), ('b', 3)] {
        queue.enqueue(datum, priority)?;
    }
    let order: Vec<char> = std::iter::from_fn(|| queue.dequeue().ok().map(|(datum, _)| datum)).collect();
    assert_eq!(order, vec!['d', 'b', 'e', 'c']);
    assert_eq!(queue.front(), Err(CollectionError::EmptyCollection));
    Ok(())
}

#[test]
fn queue_is_fifo_on_singly_backend() -> anyhow::Result<()> {
    let mut queue: Queue<&str, SinglyLinkedList<&str>> = Queue::new();
    queue.enqueue("first");
    queue.enqueue("second");
    assert_eq!(queue.front()?, &"first");
    assert_eq!(queue.dequeue()?, "first");
    assert_eq!(queue.dequeue()?, "second");
    assert_eq!(queue.dequeue(), Err(CollectionError::EmptyCollection));
    Ok(())
}

#[test]
fn company_tree_renders_and_fingerprints() -> anyhow::Result<()> {
    let company = Tree::new(
        "CEO".to_string(),
        [
            Tree::new("CTO".to_string(), ["Dev Lead".to_string(), "Ops Lead".to_string()]),
            Tree::leaf("CFO".to_string()),
        ],
    );
    assert_eq!(
        company.render(),
        "CEO\n├── CTO\n│   ├── Dev Lead\n│   └── Ops Lead\n└── CFO"
    );
    let same = company.clone();
    assert_eq!(company.fingerprint()?, same.fingerprint()?);

    let dot = company.to_graphviz("company").to_dot();
    assert!(dot.contains("Dev Lead"));
    Ok(())
}

#[test]
fn sorted_list_round_trip() {
    let list = DoublyLinkedList::from([5, 21, 7, 23, 19, 10, 12]);
    let items: Vec<i32> = list.iter().copied().collect();
    let sorted: DoublyLinkedList<i32> = tim_sort(&items).into_iter().collect();
    assert_eq!(sorted.to_string(), "5 -> 7 -> 10 -> 12 -> 19 -> 21 -> 23");
}
