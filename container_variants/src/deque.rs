#[cfg(not(feature = "std"))]
use alloc::collections::VecDeque;
#[cfg(feature = "std")]
use std::collections::VecDeque;

use container_contract::{Container, EmptyContainerError, RemovalOrder};

/// Which end of a [`Deque`] `remove` takes from. Elements are always added at the back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DequeMode {
    /// Take from the front: behaves like a queue.
    Front,
    /// Take from the back: behaves like a stack.
    Back,
}

impl DequeMode {
    pub const fn order(self) -> RemovalOrder {
        match self {
            DequeMode::Front => RemovalOrder::Fifo,
            DequeMode::Back => RemovalOrder::Lifo,
        }
    }
}

/// Double-ended container whose removal end is fixed at construction.
///
/// The mode cannot be changed afterwards, so a `Deque` keeps a single
/// removal order for its whole life like every other container.
///
/// # Examples
///
/// ```
/// use container_variants::{Container, Deque, DequeMode, RemovalOrder};
///
/// let mut front = Deque::new(DequeMode::Front);
/// let mut back = Deque::new(DequeMode::Back);
/// for v in [1, 2, 3] {
///     front.add(v);
///     back.add(v);
/// }
///
/// assert_eq!(front.remove(), Ok(1));
/// assert_eq!(back.remove(), Ok(3));
/// assert_eq!(back.order(), RemovalOrder::Lifo);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deque<T> {
    items: VecDeque<T>,
    mode: DequeMode,
}

impl<T> Deque<T> {
    pub fn new(mode: DequeMode) -> Self {
        Self {
            items: VecDeque::new(),
            mode,
        }
    }

    pub fn with_capacity(mode: DequeMode, capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            mode,
        }
    }

    /// Builds a deque in `mode` holding `iter`'s items, added in iteration order.
    pub fn from_iter_with_mode<I: IntoIterator<Item = T>>(mode: DequeMode, iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            mode,
        }
    }

    pub fn mode(&self) -> DequeMode {
        self.mode
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Container<T> for Deque<T> {
    #[inline]
    fn add(&mut self, element: T) {
        self.items.push_back(element);
    }

    fn remove(&mut self) -> Result<T, EmptyContainerError> {
        match self.mode {
            DequeMode::Front => self.items.pop_front(),
            DequeMode::Back => self.items.pop_back(),
        }
        .ok_or(EmptyContainerError)
    }

    fn peek(&self) -> Result<&T, EmptyContainerError> {
        match self.mode {
            DequeMode::Front => self.items.front(),
            DequeMode::Back => self.items.back(),
        }
        .ok_or(EmptyContainerError)
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn order(&self) -> RemovalOrder {
        self.mode.order()
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}
