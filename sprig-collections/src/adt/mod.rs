//! Sequence adapters built on a list [`Backend`](crate::list::Backend).

mod priority_queue;
mod queue;

pub use crate::adt::priority_queue::PriorityQueue;
pub use crate::adt::queue::Queue;
