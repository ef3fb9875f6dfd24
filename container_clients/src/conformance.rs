//! Runtime check of the container contract.
//!
//! The trait bound guarantees a type has the right operations; this module
//! checks it also has the right behavior. [`verify_contract`] builds one
//! container, fills it with sample values and drains it, comparing every
//! step with what the contract and the container's own
//! [`RemovalOrder`](container_contract::RemovalOrder) promise.

use container_contract::Container;

use crate::ContractViolation;

type Result<T> = core::result::Result<T, ContractViolation>;

/// Checks the container produced by `make` against the contract using `samples`.
///
/// Returns the first violation found. Samples may contain duplicates; for a
/// max-first container they are expected back earliest-inserted first.
///
/// # Examples
///
/// ```
/// use container_clients::verify_contract;
/// use container_variants::{PriorityQueue, Stack};
///
/// let samples = [4, 1, 4, 9, 0];
/// assert_eq!(verify_contract(Stack::new, &samples), Ok(()));
/// assert_eq!(verify_contract(PriorityQueue::new, &samples), Ok(()));
/// ```
pub fn verify_contract<T, C, F>(make: F, samples: &[T]) -> Result<()>
where
    T: Ord + Clone,
    C: Container<T>,
    F: FnOnce() -> C,
{
    let mut c = make();
    if c.len() != 0 {
        return Err(ContractViolation::NotEmptyOnCreation(c.len()));
    }
    check_empty(&mut c)?;

    let order = c.order();
    for (i, value) in samples.iter().cloned().enumerate() {
        c.add(value);
        check_len(&c, i + 1)?;
    }

    for (position, wanted) in order.arrange(samples).into_iter().enumerate() {
        let remaining = samples.len() - position;
        check_len(&c, remaining)?;

        let refused = |operation| ContractViolation::RefusedWhileNonEmpty {
            operation,
            remaining,
        };
        let first = c.peek().map_err(|_| refused("peek"))?.clone();
        let again = c.peek().map_err(|_| refused("peek"))?;
        if *again != first {
            return Err(ContractViolation::PeekNotIdempotent(position));
        }
        if c.len() != remaining {
            return Err(ContractViolation::PeekChangedSize {
                expected: remaining,
                found: c.len(),
            });
        }

        let removed = c.remove().map_err(|_| refused("remove"))?;
        if removed != first {
            return Err(ContractViolation::PeekRemoveMismatch(position));
        }
        if c.order() != order {
            return Err(ContractViolation::OrderChanged {
                from: order,
                to: c.order(),
            });
        }
        if removed != wanted {
            return Err(ContractViolation::OrderViolated { position, order });
        }
    }

    check_empty(&mut c)
}

fn check_len<T, C: Container<T>>(c: &C, expected: usize) -> Result<()> {
    let found = c.len();
    if found != expected {
        return Err(ContractViolation::SizeMismatch { expected, found });
    }
    if c.is_empty() != (found == 0) {
        return Err(ContractViolation::EmptinessMismatch(found));
    }
    Ok(())
}

fn check_empty<T, C: Container<T>>(c: &mut C) -> Result<()> {
    check_len(c, 0)?;
    if c.peek().is_ok() {
        return Err(ContractViolation::EmptyNotReported { operation: "peek" });
    }
    if c.remove().is_ok() {
        return Err(ContractViolation::EmptyNotReported {
            operation: "remove",
        });
    }
    Ok(())
}
