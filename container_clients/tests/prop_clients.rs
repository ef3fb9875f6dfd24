//! Property-based tests for the contract-only client utilities.

use container_clients::{
    count_elements, drain_to_vec, reverse_in_place, sum_elements, transfer_elements,
    verify_contract,
};
use container_variants::{Container, Deque, DequeMode, PriorityQueue, Queue, Stack};
use proptest::prelude::*;

fn variant(kind: u8, values: &[i32]) -> Box<dyn Container<i32>> {
    let mut c: Box<dyn Container<i32>> = match kind % 5 {
        0 => Box::new(Stack::<i32>::new()),
        1 => Box::new(Queue::<i32>::new()),
        2 => Box::new(PriorityQueue::<i32>::new()),
        3 => Box::new(Deque::<i32>::new(DequeMode::Front)),
        _ => Box::new(Deque::<i32>::new(DequeMode::Back)),
    };
    for &v in values {
        c.add(v);
    }
    c
}

proptest! {
    #[test]
    fn prop_transfer_moves_min_of_count_and_len(
        values in prop::collection::vec(-50i32..50, 0..64),
        count in 0usize..100,
        from in any::<u8>(),
        to in any::<u8>(),
    ) {
        let mut source = variant(from, &values);
        let mut target = variant(to, &[]);
        let expected_prefix: Vec<i32> = source.order().arrange(&values)
            .into_iter()
            .take(count)
            .collect();

        let moved = transfer_elements(&mut *source, &mut *target, count).unwrap();

        prop_assert_eq!(moved, count.min(values.len()));
        prop_assert_eq!(source.len(), values.len() - moved);
        prop_assert_eq!(target.len(), moved);

        // target received the source's removal sequence; a FIFO target hands it back unchanged
        let mut fifo = Queue::new();
        let mut replay = variant(from, &values);
        transfer_elements(&mut *replay, &mut fifo, count).unwrap();
        prop_assert_eq!(drain_to_vec(&mut fifo).unwrap(), expected_prefix);
    }

    #[test]
    fn prop_count_and_sum_drain_everything(values in prop::collection::vec(-1000i64..1000, 0..64), kind in any::<u8>()) {
        let as_i32: Vec<i32> = values.iter().map(|&v| v as i32).collect();

        let mut c = variant(kind, &as_i32);
        prop_assert_eq!(count_elements(&mut *c).unwrap(), values.len());
        prop_assert!(c.is_empty());

        let mut c = variant(kind, &as_i32);
        prop_assert_eq!(sum_elements(&mut *c).unwrap(), as_i32.iter().sum::<i32>());
        prop_assert!(c.is_empty());
    }

    #[test]
    fn prop_reverse_effect_depends_on_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
        // LIFO: next drain is the insertion order
        let mut s = variant(0, &values);
        reverse_in_place(&mut *s).unwrap();
        prop_assert_eq!(drain_to_vec(&mut *s).unwrap(), values.clone());

        // FIFO and max-first: next drain is unchanged
        for kind in [1u8, 2, 3] {
            let mut c = variant(kind, &values);
            let before = c.order().arrange(&values);
            reverse_in_place(&mut *c).unwrap();
            prop_assert_eq!(c.len(), values.len());
            prop_assert_eq!(drain_to_vec(&mut *c).unwrap(), before);
        }
    }

    #[test]
    fn prop_every_variant_conforms(values in prop::collection::vec(-8i32..8, 0..64)) {
        prop_assert_eq!(verify_contract(Stack::new, &values), Ok(()));
        prop_assert_eq!(verify_contract(Queue::new, &values), Ok(()));
        prop_assert_eq!(verify_contract(PriorityQueue::new, &values), Ok(()));
        prop_assert_eq!(verify_contract(|| Deque::new(DequeMode::Front), &values), Ok(()));
        prop_assert_eq!(verify_contract(|| Deque::new(DequeMode::Back), &values), Ok(()));
    }
}
