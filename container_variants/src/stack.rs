#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use container_contract::{Container, EmptyContainerError, RemovalOrder};

/// Last-in, first-out container backed by a `Vec<T>`.
///
/// # Examples
///
/// ```
/// use container_variants::{Container, Stack};
///
/// let mut stack = Stack::new();
/// stack.add(10);
/// stack.add(20);
/// stack.add(30);
///
/// assert_eq!(stack.remove(), Ok(30));
/// assert_eq!(stack.remove(), Ok(20));
/// assert_eq!(stack.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack able to hold `capacity` elements without reallocating.
    ///
    /// ```
    /// use container_variants::{Container, Stack};
    ///
    /// let stack = Stack::<u64>::with_capacity(64);
    /// assert!(stack.is_empty());
    /// assert!(stack.capacity() >= 64);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Drops every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Container<T> for Stack<T> {
    #[inline]
    fn add(&mut self, element: T) {
        self.items.push(element);
    }

    #[inline]
    fn remove(&mut self) -> Result<T, EmptyContainerError> {
        self.items.pop().ok_or(EmptyContainerError)
    }

    #[inline]
    fn peek(&self) -> Result<&T, EmptyContainerError> {
        self.items.last().ok_or(EmptyContainerError)
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }

    fn order(&self) -> RemovalOrder {
        RemovalOrder::Lifo
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
