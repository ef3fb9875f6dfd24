//! # Containers
//!
//! One contract, several removal orders.
//!
//! ## Features
//!
//! - **Contract**: the [`Container`] trait and its single failure, [`EmptyContainerError`]
//! - **Variants**: [`Stack`], [`Queue`], [`PriorityQueue`] and the mode-fixed [`Deque`]
//! - **Clients**: transfer, reverse and drain helpers written only against the trait
//! - **Registry**: create containers by name from a table the caller owns
//! - **Conformance**: check any container type against the contract at runtime
//!
//! ## Quick Start
//!
//! ```rust
//! use containers::prelude::*;
//!
//! let mut source = Stack::new();
//! for v in [1, 2, 3] {
//!     source.add(v);
//! }
//! let mut target = Queue::new();
//!
//! let moved = transfer_elements(&mut source, &mut target, 2)?;
//! assert_eq!(moved, 2);
//! assert_eq!(source.peek(), Ok(&1));
//! assert_eq!(target.remove(), Ok(3));
//!
//! let registry = builtin_registry::<i32>();
//! let mut pq = registry.create("priority_queue").expect("built in");
//! pq.add(5);
//! pq.add(9);
//! assert_eq!(pq.remove(), Ok(9));
//! # Ok::<(), containers::EmptyContainerError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod builtin;
pub mod prelude;

pub use crate::builtin::{BUILTIN_NAMES, builtin_registry};

// Re-export the contract
pub use container_contract::{Container, EmptyContainerError, RemovalOrder};

// Re-export the variants
pub use container_variants::{Deque, DequeMode, PriorityQueue, Queue, Stack};

// Re-export the clients
pub use container_clients::{
    Constructor, ContractViolation, Registry, count_elements, drain_to_vec, reverse_in_place,
    sum_elements, transfer_elements, verify_contract,
};
