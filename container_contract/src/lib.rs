//! # container_contract
//!
//! The contract shared by every container in the workspace: one trait,
//! one error and the removal order each container commits to.
//!
//! ```rust
//! use container_contract::{Container, EmptyContainerError, RemovalOrder};
//!
//! fn drain_first<T, C: Container<T>>(c: &mut C) -> Result<T, EmptyContainerError> {
//!     c.remove()
//! }
//!
//! # #[derive(Default)]
//! # struct Lifo(Vec<u32>);
//! # impl Container<u32> for Lifo {
//! #     fn add(&mut self, v: u32) { self.0.push(v) }
//! #     fn remove(&mut self) -> Result<u32, EmptyContainerError> { self.0.pop().ok_or(EmptyContainerError) }
//! #     fn peek(&self) -> Result<&u32, EmptyContainerError> { self.0.last().ok_or(EmptyContainerError) }
//! #     fn len(&self) -> usize { self.0.len() }
//! #     fn order(&self) -> RemovalOrder { RemovalOrder::Lifo }
//! # }
//! let mut c = Lifo::default();
//! assert_eq!(drain_first(&mut c), Err(EmptyContainerError));
//! c.add(7);
//! assert_eq!(drain_first(&mut c), Ok(7));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod contract;
pub mod error;
pub mod order;

pub use contract::Container;
pub use error::EmptyContainerError;
pub use order::RemovalOrder;
