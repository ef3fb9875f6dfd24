//! # container_clients
//!
//! Code that uses containers purely through the [`Container`] trait.
//! Nothing here knows which variant it was handed.
//!
//! - [`transfer_elements`], [`reverse_in_place`] and the drain helpers
//! - [`Registry`]: a caller-owned table of named container constructors
//! - [`verify_contract`]: checks a container type against the contract rules

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod conformance;
pub mod drain;
pub mod error;
pub mod registry;
pub mod transfer;

pub use container_contract::{Container, EmptyContainerError, RemovalOrder};
pub use conformance::verify_contract;
pub use drain::{count_elements, drain_to_vec, reverse_in_place, sum_elements};
pub use error::ContractViolation;
pub use registry::{Constructor, Registry};
pub use transfer::transfer_elements;
