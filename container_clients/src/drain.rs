//! Helpers that empty a container through `remove`.
//!
//! All of them stop on `is_empty()`; an error only surfaces if a container
//! claims to hold elements and then refuses to give one up.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use core::iter::Sum;

use container_contract::{Container, EmptyContainerError};

/// Removes every element, returning them in removal order.
///
/// ```
/// use container_clients::drain_to_vec;
/// use container_variants::PriorityQueue;
///
/// let mut pq: PriorityQueue<i32> = [2, 9, 4].into_iter().collect();
/// assert_eq!(drain_to_vec(&mut pq), Ok(vec![9, 4, 2]));
/// ```
pub fn drain_to_vec<T, C>(container: &mut C) -> Result<Vec<T>, EmptyContainerError>
where
    C: Container<T> + ?Sized,
{
    let mut out = Vec::with_capacity(container.len());
    while !container.is_empty() {
        out.push(container.remove()?);
    }
    Ok(out)
}

/// Drains the container and re-adds the elements in the order they came out.
///
/// What that does to the next removal sequence depends on the container:
/// a LIFO container ends up reversed, a FIFO container comes back unchanged
/// and a max-first container re-sorts everything, so it is unchanged too.
///
/// ```
/// use container_clients::{drain_to_vec, reverse_in_place};
/// use container_variants::{Queue, Stack};
///
/// let mut stack: Stack<i32> = [1, 2, 3].into_iter().collect();
/// reverse_in_place(&mut stack).unwrap();
/// assert_eq!(drain_to_vec(&mut stack), Ok(vec![1, 2, 3]));
///
/// let mut queue: Queue<i32> = [1, 2, 3].into_iter().collect();
/// reverse_in_place(&mut queue).unwrap();
/// assert_eq!(drain_to_vec(&mut queue), Ok(vec![1, 2, 3]));
/// ```
pub fn reverse_in_place<T, C>(container: &mut C) -> Result<(), EmptyContainerError>
where
    C: Container<T> + ?Sized,
{
    for element in drain_to_vec(container)? {
        container.add(element);
    }
    Ok(())
}

/// Removes every element and returns how many there were.
pub fn count_elements<T, C>(container: &mut C) -> Result<usize, EmptyContainerError>
where
    C: Container<T> + ?Sized,
{
    let mut count = 0;
    while !container.is_empty() {
        container.remove()?;
        count += 1;
    }
    Ok(count)
}

/// Removes every element and returns their sum.
pub fn sum_elements<T, C>(container: &mut C) -> Result<T, EmptyContainerError>
where
    T: Sum<T>,
    C: Container<T> + ?Sized,
{
    Ok(drain_to_vec(container)?.into_iter().sum())
}
