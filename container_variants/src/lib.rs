//! # container_variants
//!
//! Concrete containers, each committed to one removal order.
//!
//! | Type | `remove` returns |
//! |---|---|
//! | [`Stack`] | most recently added |
//! | [`Queue`] | least recently added |
//! | [`PriorityQueue`] | largest value, earliest first among equals |
//! | [`Deque`] | front or back, chosen once by [`DequeMode`] |
//!
//! ```rust
//! use container_variants::{Container, PriorityQueue, Queue, Stack};
//!
//! let mut stack = Stack::new();
//! let mut queue = Queue::new();
//! let mut pq = PriorityQueue::new();
//! for v in [5, 1, 3] {
//!     stack.add(v);
//!     queue.add(v);
//!     pq.add(v);
//! }
//!
//! assert_eq!(stack.remove(), Ok(3));
//! assert_eq!(queue.remove(), Ok(5));
//! assert_eq!(pq.remove(), Ok(5));
//! assert_eq!(pq.remove(), Ok(3));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod deque;
pub mod priority_queue;
pub mod queue;
pub mod stack;

pub use container_contract::{Container, EmptyContainerError, RemovalOrder};
pub use deque::{Deque, DequeMode};
pub use priority_queue::PriorityQueue;
pub use queue::Queue;
pub use stack::Stack;
