use container_contract::{Container, EmptyContainerError};

/// Moves up to `count` elements from `source` to `target`.
///
/// Each element is taken with `source.remove()` and handed to `target.add()`,
/// so the order `target` receives them in is `source`'s removal order.
/// Stops early once `source` is empty; asking for more than is available is
/// not an error. Returns how many elements were actually moved.
///
/// # Errors
///
/// Only if `source` reports elements but then refuses to remove one.
///
/// # Examples
///
/// ```
/// use container_clients::transfer_elements;
/// use container_variants::{Container, Queue, Stack};
///
/// let mut source: Stack<i32> = [1, 2, 3].into_iter().collect();
/// let mut target = Queue::new();
///
/// assert_eq!(transfer_elements(&mut source, &mut target, 2), Ok(2));
/// assert_eq!(source.len(), 1);
/// assert_eq!(target.remove(), Ok(3));
/// ```
pub fn transfer_elements<T, S, D>(
    source: &mut S,
    target: &mut D,
    count: usize,
) -> Result<usize, EmptyContainerError>
where
    S: Container<T> + ?Sized,
    D: Container<T> + ?Sized,
{
    let mut moved = 0;
    while moved < count && !source.is_empty() {
        target.add(source.remove()?);
        moved += 1;
    }
    Ok(moved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use container_variants::{PriorityQueue, Queue, Stack};

    #[test]
    fn moves_in_source_removal_order() -> Result<(), EmptyContainerError> {
        let mut source = Stack::new();
        for v in [1, 2, 3] {
            source.add(v);
        }
        let mut target = Queue::new();

        assert_eq!(transfer_elements(&mut source, &mut target, 2)?, 2);

        assert_eq!(source.len(), 1);
        assert_eq!(*source.peek()?, 1);
        assert_eq!(target.len(), 2);
        assert_eq!(target.remove()?, 3);
        assert_eq!(target.remove()?, 2);
        Ok(())
    }

    #[test]
    fn stops_when_source_runs_dry() -> Result<(), EmptyContainerError> {
        let mut source: Queue<i32> = [7, 8].into_iter().collect();
        let mut target = Stack::new();

        assert_eq!(transfer_elements(&mut source, &mut target, 10)?, 2);
        assert!(source.is_empty());
        assert_eq!(target.remove()?, 8);
        Ok(())
    }

    #[test]
    fn zero_count_and_empty_source_move_nothing() -> Result<(), EmptyContainerError> {
        let mut source: Stack<i32> = [1].into_iter().collect();
        let mut target = PriorityQueue::new();
        assert_eq!(transfer_elements(&mut source, &mut target, 0)?, 0);
        assert_eq!(source.len(), 1);

        let mut empty = Stack::<i32>::new();
        assert_eq!(transfer_elements(&mut empty, &mut target, 3)?, 0);
        assert!(target.is_empty());
        Ok(())
    }

    #[test]
    fn works_through_trait_objects() -> Result<(), EmptyContainerError> {
        let mut source: Box<dyn Container<i32>> = Box::new(PriorityQueue::from_iter([4, 9, 1]));
        let mut target: Box<dyn Container<i32>> = Box::new(Stack::<i32>::new());

        assert_eq!(transfer_elements(&mut *source, &mut *target, 3)?, 3);
        // target received 9, 4, 1 in that order
        assert_eq!(target.remove()?, 1);
        assert_eq!(target.remove()?, 4);
        assert_eq!(target.remove()?, 9);
        Ok(())
    }
}
