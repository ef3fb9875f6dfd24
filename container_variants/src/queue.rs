#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

use container_contract::{Container, EmptyContainerError, RemovalOrder};

/// First-in, first-out container backed by a ring buffer.
///
/// Both `add` and `remove` are O(1).
///
/// # Examples
///
/// ```
/// use container_variants::{Container, Queue};
///
/// let mut queue = Queue::new();
/// queue.add(10);
/// queue.add(20);
/// queue.add(30);
///
/// assert_eq!(queue.remove(), Ok(10));
/// assert_eq!(queue.remove(), Ok(20));
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Container<T> for Queue<T> {
    #[inline]
    fn add(&mut self, element: T) {
        self.items.push_back(element);
    }

    #[inline]
    fn remove(&mut self) -> Result<T, EmptyContainerError> {
        self.items.pop_front().ok_or(EmptyContainerError)
    }

    #[inline]
    fn peek(&self) -> Result<&T, EmptyContainerError> {
        self.items.front().ok_or(EmptyContainerError)
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn order(&self) -> RemovalOrder {
        RemovalOrder::Fifo
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
