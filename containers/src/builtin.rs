//! Registry pre-filled with the variants shipped in this workspace.

#[cfg(not(feature = "std"))]
use alloc::boxed::Box;

use container_clients::Registry;
use container_variants::{Deque, DequeMode, PriorityQueue, Queue, Stack};

/// Names registered by [`builtin_registry`], sorted.
pub const BUILTIN_NAMES: [&str; 5] = ["deque_back", "deque_front", "priority_queue", "queue", "stack"];

/// Returns a new registry holding every built-in variant.
///
/// The caller owns the result and may add, replace or remove entries.
///
/// ```
/// use containers::{BUILTIN_NAMES, RemovalOrder, builtin_registry};
///
/// let registry = builtin_registry::<u8>();
/// assert!(registry.names().eq(BUILTIN_NAMES));
/// assert_eq!(registry.create("deque_back").unwrap().order(), RemovalOrder::Lifo);
/// ```
pub fn builtin_registry<T: Ord + 'static>() -> Registry<T> {
    let mut registry = Registry::new();
    registry.register("stack", || Box::new(Stack::<T>::new()));
    registry.register("queue", || Box::new(Queue::<T>::new()));
    registry.register("priority_queue", || Box::new(PriorityQueue::<T>::new()));
    registry.register("deque_front", || Box::new(Deque::<T>::new(DequeMode::Front)));
    registry.register("deque_back", || Box::new(Deque::<T>::new(DequeMode::Back)));
    registry
}
