//! Max-first container with insertion-order tie breaking.
//!
//! Every element is stored beside a sequence number taken from a counter
//! that only ever grows. Among equal values the smaller sequence number
//! (the earlier insertion) ranks higher, so the heap order is total and
//! the result of `remove` never depends on heap internals.

use core::cmp::Ordering;

#[cfg(not(feature = "std"))]
use alloc::collections::BinaryHeap;
#[cfg(feature = "std")]
use std::collections::BinaryHeap;

use container_contract::{Container, EmptyContainerError, RemovalOrder};

#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    seq: u64,
}

impl<T: Ord> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T: Ord> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for Entry<T> {}

/// Container whose `remove` returns the largest value held.
///
/// Equal values come out in the order they were added.
///
/// # Examples
///
/// ```
/// use container_variants::{Container, PriorityQueue};
///
/// let mut pq = PriorityQueue::new();
/// pq.add(5);
/// pq.add(1);
/// pq.add(3);
///
/// assert_eq!(pq.remove(), Ok(5));
/// assert_eq!(pq.remove(), Ok(3));
/// assert_eq!(pq.remove(), Ok(1));
/// assert!(pq.remove().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PriorityQueue<T: Ord> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_seq: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }
}

impl<T: Ord> Container<T> for PriorityQueue<T> {
    fn add(&mut self, element: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            value: element,
            seq,
        });
    }

    fn remove(&mut self) -> Result<T, EmptyContainerError> {
        self.heap
            .pop()
            .map(|entry| entry.value)
            .ok_or(EmptyContainerError)
    }

    fn peek(&self) -> Result<&T, EmptyContainerError> {
        self.heap
            .peek()
            .map(|entry| &entry.value)
            .ok_or(EmptyContainerError)
    }

    #[inline]
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn order(&self) -> RemovalOrder {
        RemovalOrder::MaxFirst
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut pq = Self::new();
        pq.extend(iter);
        pq
    }
}
