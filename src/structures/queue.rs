//! Ordered FIFO queue of waiter identifiers.

use std::collections::VecDeque;

/// A FIFO sequence of waiter identifiers.
///
/// Insertion order is arrival order. Duplicates are not rejected here; the
/// lock manager checks membership with [`WaiterQueue::position_of`] before
/// enqueueing.
#[derive(Debug, Clone)]
pub struct WaiterQueue<T> {
    items: VecDeque<T>,
}

impl<T> Default for WaiterQueue<T> {
    fn default() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> WaiterQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `item` to the tail.
    pub fn enqueue(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Remove and return the head, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// The head without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

impl<T: PartialEq> WaiterQueue<T> {
    /// 1-based position of the first occurrence of `item`, counting from the
    /// head. `None` when absent.
    pub fn position_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|x| x == item).map(|i| i + 1)
    }
}

impl<T: Clone> WaiterQueue<T> {
    /// Snapshot of all elements, head to tail.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}
