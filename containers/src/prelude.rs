//! Convenience re-exports for common usage

pub use crate::builtin::builtin_registry;

// Contract
pub use container_contract::{Container, EmptyContainerError, RemovalOrder};

// Variants
pub use container_variants::{Deque, DequeMode, PriorityQueue, Queue, Stack};

// Clients
pub use container_clients::{Registry, drain_to_vec, reverse_in_place, transfer_elements};
