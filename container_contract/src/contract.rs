#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use crate::{EmptyContainerError, RemovalOrder};

/// Common trait for every container variant.
///
/// A container is a bag of `T` with exactly one removal discipline, reported
/// by [`order`](Container::order) and honored by both `remove` and `peek`.
/// Implementations must hold to these rules, whatever their storage:
///
/// - `add` always succeeds and grows `len` by one.
/// - `remove` and `peek` fail with [`EmptyContainerError`] only when `len() == 0`.
///   In particular the last element can always be removed.
/// - `peek` returns the element the next `remove` would return and changes nothing.
/// - `order` never changes.
pub trait Container<T> {
    /// Inserts `element`.
    fn add(&mut self, element: T);

    /// Removes and returns the next element under this container's order.
    fn remove(&mut self) -> Result<T, EmptyContainerError>;

    /// Returns the element `remove` would return next, without removing it.
    fn peek(&self) -> Result<&T, EmptyContainerError>;

    /// Number of elements currently held.
    fn len(&self) -> usize;

    /// `true` when `len() == 0`.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The removal discipline this container committed to at construction.
    fn order(&self) -> RemovalOrder;
}

impl<T, C: Container<T> + ?Sized> Container<T> for Box<C> {
    #[inline]
    fn add(&mut self, element: T) {
        (**self).add(element)
    }

    #[inline]
    fn remove(&mut self) -> Result<T, EmptyContainerError> {
        (**self).remove()
    }

    #[inline]
    fn peek(&self) -> Result<&T, EmptyContainerError> {
        (**self).peek()
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    #[inline]
    fn order(&self) -> RemovalOrder {
        (**self).order()
    }
}

impl<T, C: Container<T> + ?Sized> Container<T> for &mut C {
    #[inline]
    fn add(&mut self, element: T) {
        (**self).add(element)
    }

    #[inline]
    fn remove(&mut self) -> Result<T, EmptyContainerError> {
        (**self).remove()
    }

    #[inline]
    fn peek(&self) -> Result<&T, EmptyContainerError> {
        (**self).peek()
    }

    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        (**self).is_empty()
    }

    #[inline]
    fn order(&self) -> RemovalOrder {
        (**self).order()
    }
}
