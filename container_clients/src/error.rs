use container_contract::RemovalOrder;
#[cfg(feature = "std")]
use thiserror::Error;

/// The first contract rule a container was caught breaking by
/// [`verify_contract`](crate::verify_contract).
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractViolation {
    #[cfg_attr(feature = "std", error("new container is not empty (len {0})"))]
    NotEmptyOnCreation(usize),

    #[cfg_attr(feature = "std", error("{operation} succeeded on an empty container"))]
    EmptyNotReported { operation: &'static str },

    #[cfg_attr(
        feature = "std",
        error("{operation} refused while {remaining} elements remain")
    )]
    RefusedWhileNonEmpty {
        operation: &'static str,
        remaining: usize,
    },

    #[cfg_attr(feature = "std", error("len mismatch: expected {expected}, found {found}"))]
    SizeMismatch { expected: usize, found: usize },

    #[cfg_attr(feature = "std", error("is_empty disagrees with len {0}"))]
    EmptinessMismatch(usize),

    #[cfg_attr(feature = "std", error("repeated peek returned different elements at removal {0}"))]
    PeekNotIdempotent(usize),

    #[cfg_attr(
        feature = "std",
        error("peek changed len from {expected} to {found}")
    )]
    PeekChangedSize { expected: usize, found: usize },

    #[cfg_attr(feature = "std", error("peek and remove disagree at removal {0}"))]
    PeekRemoveMismatch(usize),

    #[cfg_attr(feature = "std", error("removal order changed from {from} to {to}"))]
    OrderChanged { from: RemovalOrder, to: RemovalOrder },

    #[cfg_attr(
        feature = "std",
        error("removal {position} does not follow {order} order")
    )]
    OrderViolated {
        position: usize,
        order: RemovalOrder,
    },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ContractViolation::NotEmptyOnCreation(len) => {
                write!(f, "new container is not empty (len {})", len)
            }
            ContractViolation::EmptyNotReported { operation } => {
                write!(f, "{} succeeded on an empty container", operation)
            }
            ContractViolation::RefusedWhileNonEmpty {
                operation,
                remaining,
            } => write!(f, "{} refused while {} elements remain", operation, remaining),
            ContractViolation::SizeMismatch { expected, found } => {
                write!(f, "len mismatch: expected {}, found {}", expected, found)
            }
            ContractViolation::EmptinessMismatch(len) => {
                write!(f, "is_empty disagrees with len {}", len)
            }
            ContractViolation::PeekNotIdempotent(i) => {
                write!(f, "repeated peek returned different elements at removal {}", i)
            }
            ContractViolation::PeekChangedSize { expected, found } => {
                write!(f, "peek changed len from {} to {}", expected, found)
            }
            ContractViolation::PeekRemoveMismatch(i) => {
                write!(f, "peek and remove disagree at removal {}", i)
            }
            ContractViolation::OrderChanged { from, to } => {
                write!(f, "removal order changed from {} to {}", from, to)
            }
            ContractViolation::OrderViolated { position, order } => {
                write!(f, "removal {} does not follow {} order", position, order)
            }
        }
    }
}
